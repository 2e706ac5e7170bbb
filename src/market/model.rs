use std::collections::{BTreeMap, HashMap};

use serde::{
    de::{DeserializeOwned, Error as _},
    Deserialize, Deserializer, Serialize,
};
use serde_json::{Map, Number, Value};
use validator::Validate;

// Every upstream field is optional: a missing, null or wrongly typed value
// becomes `None` and is rendered with a default further up.

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

// Object entries in document order
fn ordered_entries<'de, D>(deserializer: D) -> Result<Option<Vec<(String, CoinInfo)>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(entries) = Option::<Map<String, Value>>::deserialize(deserializer)? else {
        return Ok(None);
    };
    entries
        .into_iter()
        .map(|(key, value)| {
            serde_json::from_value(value)
                .map(|coin| (key, coin))
                .map_err(D::Error::custom)
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// `status` block present on every upstream response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiStatus {
    #[serde(default, deserialize_with = "lenient")]
    pub error_code: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingsResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<ApiStatus>,
    pub data: Option<Vec<Listing>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cmc_rank: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub circulating_supply: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub quote: Option<HashMap<String, Quote>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default, deserialize_with = "lenient")]
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub market_cap: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub volume_24h: Option<f64>,
}

impl Listing {
    pub fn quote_in(&self, currency: &str) -> Option<&Quote> {
        self.quote.as_ref().and_then(|quotes| quotes.get(currency))
    }
}

/// Exchange info body, `data` keyed by exchange id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeInfoResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<ApiStatus>,
    pub data: Option<BTreeMap<String, Exchange>>,
}

impl ExchangeInfoResponse {
    pub fn exchange(&self, id: &str) -> Option<&Exchange> {
        self.data.as_ref().and_then(|data| data.get(id))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Exchange {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub urls: Option<ExchangeUrls>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeUrls {
    #[serde(default, deserialize_with = "lenient")]
    pub website: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub twitter: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub fee: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub chat: Option<Vec<String>>,
}

/// Coin info body. `data` is keyed by coin id upstream; entries keep the
/// order they were sent in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoinInfoResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<ApiStatus>,
    #[serde(default, deserialize_with = "ordered_entries")]
    pub data: Option<Vec<(String, CoinInfo)>>,
}

impl CoinInfoResponse {
    pub fn coins(&self) -> impl Iterator<Item = &CoinInfo> {
        self.data.iter().flatten().map(|(_, coin)| coin)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoinInfo {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_supply: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub circulating_supply: Option<Number>,
    #[serde(default, deserialize_with = "lenient")]
    pub total_supply: Option<Number>,
    /// Plain strings on v1, objects with a `name` on newer revisions.
    #[serde(default, deserialize_with = "lenient")]
    pub tags: Option<Vec<Value>>,
    /// `null` for native coins, an object for tokens.
    #[serde(default)]
    pub platform: Option<Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub date_added: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub last_updated: Option<String>,
}

// Listings page sent by the JSON API
#[derive(Debug, Serialize, Deserialize)]
pub struct ListingsPageResponse {
    pub page: u32,
    pub page_size: u32,
    pub start: u32,
    pub has_previous: bool,
    pub has_next: bool,
    pub data: Vec<Listing>,
}

// Exchange lookup request, id trimmed
#[derive(Debug, Deserialize, Validate)]
pub struct ExchangeLookup {
    #[validate(length(min = 1, message = "Exchange ID is required"))]
    pub id: String,
}

impl ExchangeLookup {
    pub fn new(raw: &str) -> Self {
        Self { id: raw.trim().to_string() }
    }
}

// Coin lookup request, slug trimmed
#[derive(Debug, Deserialize, Validate)]
pub struct CoinLookup {
    #[validate(length(min = 1, message = "Cryptocurrency slug is required"))]
    pub slug: String,
}

impl CoinLookup {
    pub fn new(raw: &str) -> Self {
        Self { slug: raw.trim().to_string() }
    }
}
