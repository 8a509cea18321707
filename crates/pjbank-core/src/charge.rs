//! Charge records returned by the transaction endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Result of a credit-card charge.
///
/// Every field is copied from the remote response; nothing is derived locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeRecord {
    /// Transaction id (`tid`).
    pub transaction_id: String,
    /// Reconciliation id (`tid_conciliacao`).
    pub reconciliation_id: String,
    /// Date the funds are expected to be credited (`previsao_credito`).
    pub expected_credit_date: NaiveDate,
    /// Card brand (`bandeira`).
    pub brand: String,
    /// Authorization code (`autorizacao`).
    pub authorization_code: String,
    /// Masked card number (`cartao_truncado`).
    pub masked_card_number: String,
    /// Card status code (`statuscartao`).
    pub card_status: i64,
    /// Fee charged for the transaction (`tarifa`).
    pub fee: f64,
    /// Rate applied to the transaction (`taxa`).
    pub rate: f64,
}
