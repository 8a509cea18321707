//! PJBank Credit-Card Client SDK.
//!
//! This crate provides a client for the PJBank "recebimentos" credit-card API:
//! tokenizing card details and charging the resulting token.
//!
//! # Example
//!
//! ```no_run
//! use pjbank_client::{CardDetails, CardPaymentsClient, ClientOptions, Credentials};
//!
//! # async fn example() -> Result<(), pjbank_client::ClientError> {
//! let credentials = Credentials::new("your-credencial", "your-chave")?;
//! let client = CardPaymentsClient::with_options(credentials, ClientOptions::sandbox())?;
//!
//! let token = client
//!     .tokenize(&CardDetails {
//!         holder_name: "Maria Silva".to_string(),
//!         number: "4111111111111111".to_string(),
//!         expiry_month: "12".to_string(),
//!         expiry_year: "2030".to_string(),
//!         holder_tax_id: "64111456529".to_string(),
//!         email: "maria@example.com".to_string(),
//!         phone: "11987654321".to_string(),
//!         cvv: "123".to_string(),
//!     })
//!     .await?;
//!
//! let charge = client.create_charge(&token, "order #1", 99.90, 3).await?;
//! println!("Transaction {} credited on {}", charge.transaction_id, charge.expected_credit_date);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod error;
mod types;

pub use client::CardPaymentsClient;
pub use config::{ClientOptions, Environment, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
pub use error::ClientError;
pub use pjbank_core::{
    CardDetails, CardToken, ChargeRecord, Credentials, CredentialsError, DateFormatError,
};
pub use types::*;
