//! Merchant credentials.
//!
//! A [`Credentials`] value pairs the merchant identifier (`credencial`), which
//! scopes every endpoint path, with the secret key (`chave`) sent in the
//! `x-chave` header.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Environment variable holding the merchant identifier.
pub const MERCHANT_ID_VAR: &str = "PJBANK_CREDENCIAL";

/// Environment variable holding the secret key.
pub const SECRET_KEY_VAR: &str = "PJBANK_CHAVE";

/// Secrets file locations tried by [`Credentials::load`], in order.
const SECRET_PATHS: [&str; 2] = [".secrets/pjbank.json", "../.secrets/pjbank.json"];

/// Errors raised while building or loading credentials.
#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    /// A credential field was empty.
    #[error("credential field is empty: {field}")]
    Empty {
        /// Name of the empty field.
        field: &'static str,
    },

    /// No credentials were found in the environment or secrets files.
    #[error("credentials not configured: set PJBANK_CREDENCIAL and PJBANK_CHAVE")]
    NotConfigured,

    /// The secrets file could not be read.
    #[error("failed to read secrets file: {0}")]
    Io(#[from] std::io::Error),

    /// The secrets file is not valid JSON.
    #[error("invalid secrets file: {0}")]
    InvalidFile(#[from] serde_json::Error),
}

/// Secrets file structure.
#[derive(Deserialize)]
struct CredentialsFile {
    credencial: String,
    chave: String,
}

/// Merchant credential and secret key.
///
/// Immutable after construction and cheap to clone, so one value can back any
/// number of concurrent requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    merchant_id: String,
    secret_key: String,
}

impl Credentials {
    /// Create credentials from a merchant identifier and secret key.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::Empty`] if either value is blank.
    pub fn new(
        merchant_id: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let merchant_id = merchant_id.into();
        let secret_key = secret_key.into();

        if merchant_id.trim().is_empty() {
            return Err(CredentialsError::Empty {
                field: "merchant_id",
            });
        }
        if secret_key.trim().is_empty() {
            return Err(CredentialsError::Empty {
                field: "secret_key",
            });
        }

        Ok(Self {
            merchant_id,
            secret_key,
        })
    }

    /// Load credentials from `PJBANK_CREDENCIAL` and `PJBANK_CHAVE`.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::NotConfigured`] if either variable is unset.
    pub fn from_env() -> Result<Self, CredentialsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load credentials from a JSON secrets file of the form
    /// `{"credencial": "...", "chave": "..."}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds empty values.
    pub fn from_secrets_file(path: impl AsRef<Path>) -> Result<Self, CredentialsError> {
        let contents = std::fs::read_to_string(path)?;
        let file: CredentialsFile = serde_json::from_str(&contents)?;
        Self::new(file.credencial, file.chave)
    }

    /// Load credentials from the environment, falling back to the well-known
    /// secrets file locations.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialsError::NotConfigured`] if no source yields
    /// credentials, or the error of a secrets file that exists but is invalid.
    pub fn load() -> Result<Self, CredentialsError> {
        Self::load_from(|key| std::env::var(key).ok(), &SECRET_PATHS)
    }

    fn load_from<P: AsRef<Path>>(
        lookup: impl Fn(&str) -> Option<String>,
        paths: &[P],
    ) -> Result<Self, CredentialsError> {
        match Self::from_lookup(lookup) {
            Err(CredentialsError::NotConfigured) => {}
            other => return other,
        }

        for path in paths {
            let path = path.as_ref();
            if path.exists() {
                let credentials = Self::from_secrets_file(path)?;
                tracing::info!(path = %path.display(), "Loaded PJBank credentials from file");
                return Ok(credentials);
            }
        }

        Err(CredentialsError::NotConfigured)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CredentialsError> {
        match (lookup(MERCHANT_ID_VAR), lookup(SECRET_KEY_VAR)) {
            (Some(merchant_id), Some(secret_key)) => Self::new(merchant_id, secret_key),
            _ => Err(CredentialsError::NotConfigured),
        }
    }

    /// Merchant identifier used in endpoint paths.
    #[must_use]
    pub fn merchant_id(&self) -> &str {
        &self.merchant_id
    }

    /// Secret key sent as the `x-chave` header value.
    #[must_use]
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("merchant_id", &self.merchant_id)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn new_exposes_fields() {
        let creds = Credentials::new("merchant-1", "secret").unwrap();
        assert_eq!(creds.merchant_id(), "merchant-1");
        assert_eq!(creds.secret_key(), "secret");
    }

    #[test]
    fn new_rejects_blank_values() {
        assert!(matches!(
            Credentials::new("", "secret"),
            Err(CredentialsError::Empty {
                field: "merchant_id"
            })
        ));
        assert!(matches!(
            Credentials::new("merchant-1", "   "),
            Err(CredentialsError::Empty {
                field: "secret_key"
            })
        ));
    }

    #[test]
    fn debug_redacts_secret_key() {
        let creds = Credentials::new("merchant-1", "super-secret").unwrap();
        let debug = format!("{creds:?}");
        assert!(debug.contains("merchant-1"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn lookup_reads_both_variables() {
        let creds = Credentials::from_lookup(lookup_from(&[
            (MERCHANT_ID_VAR, "merchant-1"),
            (SECRET_KEY_VAR, "secret"),
        ]))
        .unwrap();
        assert_eq!(creds.merchant_id(), "merchant-1");
        assert_eq!(creds.secret_key(), "secret");
    }

    #[test]
    fn lookup_missing_key_is_not_configured() {
        let result = Credentials::from_lookup(lookup_from(&[(MERCHANT_ID_VAR, "merchant-1")]));
        assert!(matches!(result, Err(CredentialsError::NotConfigured)));
    }

    #[test]
    fn secrets_file_is_parsed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"credencial": "merchant-1", "chave": "secret"}}"#).unwrap();

        let creds = Credentials::from_secrets_file(file.path()).unwrap();
        assert_eq!(creds.merchant_id(), "merchant-1");
        assert_eq!(creds.secret_key(), "secret");
    }

    #[test]
    fn invalid_secrets_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"credencial": "merchant-1"}}"#).unwrap();

        let result = Credentials::from_secrets_file(file.path());
        assert!(matches!(result, Err(CredentialsError::InvalidFile(_))));
    }

    #[test]
    fn missing_secrets_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Credentials::from_secrets_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(CredentialsError::Io(_))));
    }

    #[test]
    fn load_prefers_environment_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("pjbank.json");
        std::fs::write(&file, r#"{"credencial": "from-file", "chave": "file-key"}"#).unwrap();

        let creds = Credentials::load_from(
            lookup_from(&[(MERCHANT_ID_VAR, "from-env"), (SECRET_KEY_VAR, "env-key")]),
            &[&file],
        )
        .unwrap();
        assert_eq!(creds.merchant_id(), "from-env");
        assert_eq!(creds.secret_key(), "env-key");
    }

    #[test]
    fn load_falls_back_to_first_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.json");
        let present = dir.path().join("pjbank.json");
        std::fs::write(&present, r#"{"credencial": "from-file", "chave": "file-key"}"#).unwrap();

        let creds = Credentials::load_from(lookup_from(&[]), &[&absent, &present]).unwrap();
        assert_eq!(creds.merchant_id(), "from-file");
        assert_eq!(creds.secret_key(), "file-key");
    }

    #[test]
    fn load_stops_at_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let invalid = dir.path().join("invalid.json");
        let valid = dir.path().join("valid.json");
        std::fs::write(&invalid, "not json").unwrap();
        std::fs::write(&valid, r#"{"credencial": "m", "chave": "k"}"#).unwrap();

        let result = Credentials::load_from(lookup_from(&[]), &[&invalid, &valid]);
        assert!(matches!(result, Err(CredentialsError::InvalidFile(_))));
    }

    #[test]
    fn load_without_sources_is_not_configured() {
        let dir = tempfile::tempdir().unwrap();
        let result = Credentials::load_from(
            lookup_from(&[(MERCHANT_ID_VAR, "only-merchant")]),
            &[dir.path().join("absent.json")],
        );
        assert!(matches!(result, Err(CredentialsError::NotConfigured)));
    }
}
