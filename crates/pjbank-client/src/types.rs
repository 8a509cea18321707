//! Request and response types for the PJBank credit-card endpoints.

use std::fmt::Display;
use std::str::FromStr;

use pjbank_core::{parse_expected_credit_date, CardToken, ChargeRecord, DateFormatError};
use serde::{Deserialize, Deserializer, Serialize};

/// Tokenize response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Generated card token.
    pub token_cartao: CardToken,
}

/// Charge request body.
#[derive(Debug, Clone, Serialize)]
pub struct ChargeRequest<'a> {
    /// Card token from tokenization.
    pub token_cartao: &'a CardToken,
    /// Payment description.
    pub descricao_pagamento: &'a str,
    /// Amount to charge.
    pub valor: f64,
    /// Number of installments.
    pub parcela: u32,
}

/// Charge response, as sent by the remote service.
#[derive(Debug, Clone, Deserialize)]
pub struct ChargeResponse {
    /// Transaction id.
    pub tid: String,
    /// Expected credit date, `MM/dd/yyyy`.
    pub previsao_credito: String,
    /// Reconciliation id.
    pub tid_conciliacao: String,
    /// Card brand.
    pub bandeira: String,
    /// Authorization code.
    pub autorizacao: String,
    /// Masked card number.
    pub cartao_truncado: String,
    /// Card status code.
    #[serde(deserialize_with = "number_or_string")]
    pub statuscartao: i64,
    /// Transaction fee.
    #[serde(deserialize_with = "number_or_string")]
    pub tarifa: f64,
    /// Transaction rate.
    #[serde(deserialize_with = "number_or_string")]
    pub taxa: f64,
}

impl ChargeResponse {
    /// Convert into a [`ChargeRecord`], parsing the expected credit date.
    ///
    /// # Errors
    ///
    /// Returns [`DateFormatError`] if `previsao_credito` is not `MM/dd/yyyy`.
    pub fn into_record(self) -> Result<ChargeRecord, DateFormatError> {
        Ok(ChargeRecord {
            expected_credit_date: parse_expected_credit_date(&self.previsao_credito)?,
            transaction_id: self.tid,
            reconciliation_id: self.tid_conciliacao,
            brand: self.bandeira,
            authorization_code: self.autorizacao,
            masked_card_number: self.cartao_truncado,
            card_status: self.statuscartao,
            fee: self.tarifa,
            rate: self.taxa,
        })
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

/// Numeric fields sometimes arrive as strings (`"statuscartao": "1"`).
fn number_or_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match NumberOrString::<T>::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
