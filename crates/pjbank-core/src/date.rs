//! Expected-credit date conversion.
//!
//! The remote service reports `previsao_credito` as `MM/dd/yyyy`. That format
//! assumption lives here and nowhere else.

use chrono::NaiveDate;

/// `strftime` pattern of the remote expected-credit date.
pub const EXPECTED_CREDIT_DATE_FORMAT: &str = "%m/%d/%Y";

/// A date string did not match [`EXPECTED_CREDIT_DATE_FORMAT`].
#[derive(Debug, thiserror::Error)]
#[error("invalid expected credit date {value:?} (expected MM/dd/yyyy): {source}")]
pub struct DateFormatError {
    /// The offending value.
    pub value: String,
    /// Underlying parse error.
    #[source]
    pub source: chrono::ParseError,
}

/// Parse an expected-credit date in `MM/dd/yyyy` form.
///
/// # Errors
///
/// Returns [`DateFormatError`] if `value` uses another pattern or names a
/// date that does not exist.
pub fn parse_expected_credit_date(value: &str) -> Result<NaiveDate, DateFormatError> {
    NaiveDate::parse_from_str(value, EXPECTED_CREDIT_DATE_FORMAT).map_err(|source| {
        DateFormatError {
            value: value.to_string(),
            source,
        }
    })
}
