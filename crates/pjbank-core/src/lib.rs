//! PJBank Core Types.
//!
//! Domain types shared by the PJBank credit-card client: merchant credentials,
//! card details, card tokens, charge records and the expected-credit date
//! conversion.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod card;
pub mod charge;
pub mod credentials;
pub mod date;
pub mod token;

pub use card::CardDetails;
pub use charge::ChargeRecord;
pub use credentials::{Credentials, CredentialsError};
pub use date::{parse_expected_credit_date, DateFormatError, EXPECTED_CREDIT_DATE_FORMAT};
pub use token::CardToken;
