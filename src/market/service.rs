use std::sync::Arc;

use tracing::{debug, error};

use crate::error::AppError;
use crate::market::client::MarketData;
use crate::market::model::{CoinInfoResponse, ExchangeInfoResponse, Listing};

/// Result of a fetch that never fails: on error `value` is empty and
/// `error` carries the message to show the user.
#[derive(Debug, Clone, Default)]
pub struct Fetched<T> {
    pub value: T,
    pub error: Option<String>,
}

impl<T: Default> Fetched<T> {
    fn from_result(what: &str, result: Result<T, AppError>) -> Self {
        match result {
            Ok(value) => Self { value, error: None },
            Err(e) => {
                error!(error = %e, "failed to fetch {}", what);
                Self {
                    value: T::default(),
                    error: Some(format!("Error fetching data: {}", e)),
                }
            }
        }
    }
}

#[derive(Clone)]
pub struct MarketService {
    source: Arc<dyn MarketData>,
}

impl MarketService {
    pub fn new(source: Arc<dyn MarketData>) -> Self {
        Self { source }
    }

    /// The underlying source, for callers that want errors propagated.
    pub fn source(&self) -> &dyn MarketData {
        self.source.as_ref()
    }

    pub async fn fetch_listings(&self, start: u32, limit: u32) -> Fetched<Vec<Listing>> {
        let fetched = Fetched::from_result("listings", self.source.listings(start, limit).await);
        debug!(start, limit, rows = fetched.value.len(), "fetched listings");
        fetched
    }

    pub async fn fetch_exchange_details(&self, exchange_id: &str) -> Fetched<ExchangeInfoResponse> {
        debug!(exchange_id, "fetching exchange details");
        Fetched::from_result("exchange details", self.source.exchange_info(exchange_id).await)
    }

    pub async fn fetch_coin_info(&self, slug: &str) -> Fetched<CoinInfoResponse> {
        debug!(slug, "fetching coin info");
        Fetched::from_result("coin info", self.source.coin_info(slug).await)
    }
}
