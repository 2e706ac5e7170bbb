use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize};
use tracing::debug;

use crate::config::{Config, CONVERT};
use crate::error::AppError;
use crate::market::model::{
    ApiStatus, CoinInfoResponse, ExchangeInfoResponse, Listing, ListingsResponse,
};

pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

const LISTINGS_PATH: &str = "/v1/cryptocurrency/listings/latest";
const EXCHANGE_INFO_PATH: &str = "/v1/exchange/info";
const COIN_INFO_PATH: &str = "/v1/cryptocurrency/info";

/// Source of market data. One call is one upstream request.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Latest listings, `limit` records starting at the 1-based rank `start`.
    async fn listings(&self, start: u32, limit: u32) -> Result<Vec<Listing>, AppError>;

    async fn exchange_info(&self, id: &str) -> Result<ExchangeInfoResponse, AppError>;

    async fn coin_info(&self, slug: &str) -> Result<CoinInfoResponse, AppError>;
}

/// CoinMarketCap Pro API client.
///
/// No timeout and no retry: a request either completes or fails with the
/// transport error reqwest reports.
#[derive(Clone)]
pub struct CmcClient {
    http: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct StatusOnly {
    status: Option<ApiStatus>,
}

impl CmcClient {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.cmc_base_url.clone(),
            // An unset key is sent empty and rejected by the upstream like any bad key
            api_key: config.cmc_api_key.clone().unwrap_or_default(),
        })
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "requesting upstream");

        let response = self
            .http
            .get(&url)
            .query(query)
            .header("Accepts", "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<StatusOnly>(&body)
                .ok()
                .and_then(|parsed| parsed.status)
                .and_then(|status| status.error_message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl MarketData for CmcClient {
    async fn listings(&self, start: u32, limit: u32) -> Result<Vec<Listing>, AppError> {
        let query = [
            ("start", start.to_string()),
            ("limit", limit.to_string()),
            ("convert", CONVERT.to_string()),
        ];
        let response: ListingsResponse = self.get(LISTINGS_PATH, &query).await?;
        Ok(response.data.unwrap_or_default())
    }

    async fn exchange_info(&self, id: &str) -> Result<ExchangeInfoResponse, AppError> {
        self.get(EXCHANGE_INFO_PATH, &[("id", id.to_string())]).await
    }

    async fn coin_info(&self, slug: &str) -> Result<CoinInfoResponse, AppError> {
        self.get(COIN_INFO_PATH, &[("slug", slug.to_string())]).await
    }
}
