//! Ledger backend REST client.
//!
//! # API Endpoints
//!
//! - Transaction history: `GET {base}/portfolios/{portfolioId}/assets/{assetId}/transactions`
//! - Open lots: `GET {base}/assets/{assetId}/lots`
//! - Historical FX rate: `GET {base}/fx/rate?from={from}&to={to}&date={date}`
//! - Asset search: `GET {base}/assets?query={query}`
//! - Asset creation: `POST {base}/assets`
//! - Transaction submission: `POST {base}/transactions`

use async_trait::async_trait;
use chrono::NaiveDate;
use log::debug;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use lotfolio_core::assets::{Asset, AssetRepositoryTrait, NewAsset};
use lotfolio_core::errors::{Error, Result};
use lotfolio_core::fx::{FxError, FxRateProviderTrait};
use lotfolio_core::lots::ServerLot;
use lotfolio_core::transactions::{NewTransaction, Transaction, TransactionRepositoryTrait};

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response from the FX rate endpoint.
#[derive(Debug, Deserialize)]
struct FxRateResponse {
    rate: Decimal,
}

/// REST client for the ledger backend, holding one connection pool for the
/// lifetime of the application.
///
/// # Example
///
/// ```ignore
/// let client = LedgerClient::new("https://ledger.example.com/api/v1")
///     .with_token("session-token");
/// let history = client.get_transactions("p1", "asset-1").await?;
/// ```
#[derive(Clone)]
pub struct LedgerClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl LedgerClient {
    /// Create a client against the given base URL. A trailing slash on the
    /// base URL is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token: None,
        }
    }

    /// Attach a bearer token sent with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// GET a JSON resource, converting transport and status failures to
    /// repository errors.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let request = self.authorize(self.client.get(self.url(path)).query(query));
        let response = request
            .send()
            .await
            .map_err(|e| Error::Repository(format!("GET {} failed: {}", path, e)))?;

        Self::decode(path, response).await
    }

    /// POST a JSON body and decode the JSON reply.
    async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        let response = request
            .send()
            .await
            .map_err(|e| Error::Repository(format!("POST {} failed: {}", path, e)))?;

        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            // The backend explains rejections in the body; surface it
            // verbatim so the user sees the ledger's own message.
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                format!("{} returned {}", path, status)
            } else {
                body
            };
            return Err(Error::Repository(message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::Repository(format!("Failed to parse {} response: {}", path, e)))
    }
}

#[async_trait]
impl TransactionRepositoryTrait for LedgerClient {
    async fn get_transactions(
        &self,
        portfolio_id: &str,
        asset_id: &str,
    ) -> Result<Vec<Transaction>> {
        let path = format!(
            "portfolios/{}/assets/{}/transactions",
            portfolio_id, asset_id
        );
        self.get_json(&path, &[]).await
    }

    async fn get_available_lots(&self, asset_id: &str) -> Result<Vec<ServerLot>> {
        let path = format!("assets/{}/lots", asset_id);
        self.get_json(&path, &[]).await
    }

    async fn create_transaction(&self, draft: NewTransaction) -> Result<Transaction> {
        debug!(
            "Submitting {} transaction for asset {}",
            draft.transaction_type, draft.asset_id
        );
        self.post_json("transactions", &draft).await
    }
}

#[async_trait]
impl FxRateProviderTrait for LedgerClient {
    async fn fx_rate(&self, from_currency: &str, to_currency: &str, date: NaiveDate) -> Result<Decimal> {
        let query = [
            ("from", from_currency.to_string()),
            ("to", to_currency.to_string()),
            ("date", date.format("%Y-%m-%d").to_string()),
        ];
        let response: FxRateResponse = self
            .get_json("fx/rate", &query)
            .await
            .map_err(|e| FxError::FetchError(e.to_string()))?;
        Ok(response.rate)
    }
}

#[async_trait]
impl AssetRepositoryTrait for LedgerClient {
    async fn search_by_ticker(&self, query: &str) -> Result<Vec<Asset>> {
        self.get_json("assets", &[("query", query.to_string())])
            .await
    }

    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        debug!("Creating asset {}", new_asset.ticker);
        self.post_json("assets", &new_asset).await
    }
}
