//! Client error types.

use pjbank_core::{CredentialsError, DateFormatError};

/// Errors that can occur when using the PJBank client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed (connection, I/O or timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON or lacked an expected field.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// Expected credit date did not match `MM/dd/yyyy`.
    #[error(transparent)]
    DateFormat(#[from] DateFormatError),

    /// The remote service rejected the request.
    #[error("API error: {status} - {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Amount cannot be encoded as a JSON number.
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),

    /// Credentials are missing or empty.
    #[error("credentials error: {0}")]
    Credentials(#[from] CredentialsError),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP status of a remote rejection, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Remote rejection body parsed as JSON, if this is one and it parses.
    #[must_use]
    pub fn payload(&self) -> Option<serde_json::Value> {
        match self {
            Self::Api { body, .. } => serde_json::from_str(body).ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_display() {
        let error = ClientError::Api {
            status: 400,
            body: "bad card".into(),
        };
        assert_eq!(error.to_string(), "API error: 400 - bad card");
        assert_eq!(error.status(), Some(400));
    }

    #[test]
    fn api_error_payload() {
        let error = ClientError::Api {
            status: 422,
            body: r#"{"status":"422","msg":"Cartão inválido"}"#.into(),
        };
        assert_eq!(
            error.payload(),
            Some(json!({"status": "422", "msg": "Cartão inválido"}))
        );
    }

    #[test]
    fn non_json_payload_is_none() {
        let error = ClientError::Api {
            status: 502,
            body: "<html>Bad Gateway</html>".into(),
        };
        assert_eq!(error.payload(), None);
    }

    #[test]
    fn invalid_amount_display() {
        let error = ClientError::InvalidAmount(f64::INFINITY);
        assert_eq!(error.to_string(), "invalid amount: inf");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn configuration_error_has_no_status() {
        let error = ClientError::Configuration("bad url".into());
        assert_eq!(error.status(), None);
        assert!(error.to_string().contains("bad url"));
    }
}
