//! PJBank credit-card HTTP client implementation.

use pjbank_core::{CardDetails, CardToken, ChargeRecord, Credentials};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::config::ClientOptions;
use crate::error::ClientError;
use crate::types::{ChargeRequest, ChargeResponse, TokenResponse};

/// Header carrying the merchant secret key.
const AUTH_HEADER: &str = "x-chave";

/// PJBank credit-card API client.
///
/// Provides card tokenization and charge creation for one merchant. The
/// client holds only immutable state; clones share the connection pool and
/// may be used from concurrent tasks.
#[derive(Debug, Clone)]
pub struct CardPaymentsClient {
    client: Client,
    base_url: Url,
    credentials: Credentials,
}

impl CardPaymentsClient {
    /// Create a client for the production environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(credentials: Credentials) -> Result<Self, ClientError> {
        Self::with_options(credentials, ClientOptions::default())
    }

    /// Create a client from environment variables and secrets files.
    ///
    /// See [`Credentials::load`] and [`ClientOptions::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are not configured or the options are
    /// invalid.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::with_options(Credentials::load()?, ClientOptions::from_env())
    }

    /// Create a client with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the base URL is invalid or
    /// the HTTP client cannot be built.
    pub fn with_options(
        credentials: Credentials,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let base_url = Url::parse(&options.base_url).map_err(|e| {
            ClientError::Configuration(format!("invalid base URL {:?}: {e}", options.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::Configuration(format!(
                "base URL cannot carry a path: {}",
                options.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .map_err(|e| ClientError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            credentials,
        })
    }

    /// Credentials this client authenticates with.
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Exchange card details for a card token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] on transport failure,
    /// [`ClientError::Api`] if the service rejects the card, and
    /// [`ClientError::Parse`] if the reply lacks `token_cartao`.
    pub async fn tokenize(&self, card: &CardDetails) -> Result<CardToken, ClientError> {
        let url = self.endpoint("tokens")?;

        tracing::debug!(
            merchant_id = %self.credentials.merchant_id(),
            card_last4 = %card.last4(),
            "Tokenizing card"
        );

        let response: TokenResponse = self.post_json(url, card).await?;
        Ok(response.token_cartao)
    }

    /// Charge a previously tokenized card.
    ///
    /// # Arguments
    ///
    /// * `token` - Token from [`tokenize`](Self::tokenize)
    /// * `description` - Free-text payment description
    /// * `amount` - Amount in the merchant's currency
    /// * `installments` - Number of installments
    ///
    /// # Errors
    ///
    /// Same as [`tokenize`](Self::tokenize), plus
    /// [`ClientError::DateFormat`] if the expected credit date is not
    /// `MM/dd/yyyy`. A NaN or infinite `amount` fails with
    /// [`ClientError::InvalidAmount`] before any request is sent.
    pub async fn create_charge(
        &self,
        token: &CardToken,
        description: &str,
        amount: f64,
        installments: u32,
    ) -> Result<ChargeRecord, ClientError> {
        if !amount.is_finite() {
            return Err(ClientError::InvalidAmount(amount));
        }

        let url = self.endpoint("transacoes")?;
        let request = ChargeRequest {
            token_cartao: token,
            descricao_pagamento: description,
            valor: amount,
            parcela: installments,
        };

        tracing::debug!(
            merchant_id = %self.credentials.merchant_id(),
            amount,
            installments,
            "Creating card charge"
        );

        let response: ChargeResponse = self.post_json(url, &request).await?;
        let record = response.into_record()?;

        tracing::info!(
            transaction_id = %record.transaction_id,
            brand = %record.brand,
            card_status = record.card_status,
            "Card charge created"
        );

        Ok(record)
    }

    /// Tokenize a card and charge it in one call.
    ///
    /// No charge is attempted if tokenization fails.
    ///
    /// # Errors
    ///
    /// Returns the first error of either step.
    pub async fn charge_card(
        &self,
        card: &CardDetails,
        description: &str,
        amount: f64,
        installments: u32,
    ) -> Result<ChargeRecord, ClientError> {
        let token = self.tokenize(card).await?;
        self.create_charge(&token, description, amount, installments)
            .await
    }

    /// Build `<base>/recebimentos/<merchant_id>/<resource>`.
    fn endpoint(&self, resource: &str) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::Configuration("base URL cannot carry a path".into()))?
            .pop_if_empty()
            .extend(["recebimentos", self.credentials.merchant_id(), resource]);
        Ok(url)
    }

    async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .header(AUTH_HEADER, self.credentials.secret_key())
            .json(body)
            .send()
            .await?;

        Self::handle_response(response).await
    }

    /// Read the body and convert non-success statuses into [`ClientError::Api`].
    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "PJBank rejected request");
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
