//! Card details submitted for tokenization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw credit-card data exchanged for a token.
///
/// Serializes directly to the tokenize request body. No format checking is
/// done here; the remote service validates card data.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    /// Card holder name as printed on the card.
    #[serde(rename = "nome_cartao")]
    pub holder_name: String,
    /// Card number.
    #[serde(rename = "numero_cartao")]
    pub number: String,
    /// Expiry month (e.g. `"12"`).
    #[serde(rename = "mes_vencimento")]
    pub expiry_month: String,
    /// Expiry year (e.g. `"2030"`).
    #[serde(rename = "ano_vencimento")]
    pub expiry_year: String,
    /// Card holder tax id (CPF or CNPJ).
    #[serde(rename = "cpf_cartao")]
    pub holder_tax_id: String,
    /// Card holder email.
    #[serde(rename = "email_cartao")]
    pub email: String,
    /// Card holder phone number.
    #[serde(rename = "celular_cartao")]
    pub phone: String,
    /// Card verification value.
    #[serde(rename = "codigo_cvv")]
    pub cvv: String,
}

impl CardDetails {
    /// Last four characters of the card number.
    #[must_use]
    pub fn last4(&self) -> &str {
        let start = self
            .number
            .char_indices()
            .rev()
            .nth(3)
            .map_or(0, |(idx, _)| idx);
        &self.number[start..]
    }
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("holder_name", &self.holder_name)
            .field("number", &format_args!("****{}", self.last4()))
            .field("expiry_month", &self.expiry_month)
            .field("expiry_year", &self.expiry_year)
            .field("holder_tax_id", &self.holder_tax_id)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("cvv", &"***")
            .finish()
    }
}
