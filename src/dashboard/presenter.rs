use serde_json::Value;

use crate::config::CONVERT;
use crate::market::model::{CoinInfo, Exchange, Listing};
use crate::utils::format::{money, number_or_na, text_or_na, timestamp_or_na, NOT_AVAILABLE};

pub const LISTING_LOGO_PLACEHOLDER: &str = "https://via.placeholder.com/50";
pub const DETAIL_LOGO_PLACEHOLDER: &str = "https://via.placeholder.com/100";

const LOGO_URLS: [(&str, &str); 10] = [
    ("BTC", "https://cryptologos.cc/logos/bitcoin-btc-logo.png"),
    ("ETH", "https://cryptologos.cc/logos/ethereum-eth-logo.png"),
    ("BNB", "https://cryptologos.cc/logos/bnb-bnb-logo.png?v=033"),
    ("USDT", "https://cryptologos.cc/logos/tether-usdt-logo.png"),
    ("SOL", "https://cryptologos.cc/logos/solana-sol-logo.png"),
    ("USDC", "https://cryptologos.cc/logos/usd-coin-usdc-logo.png"),
    ("XRP", "https://cryptologos.cc/logos/xrp-xrp-logo.png?v=033"),
    ("DOGE", "https://cryptologos.cc/logos/dogecoin-doge-logo.png"),
    ("TRX", "https://cryptologos.cc/logos/tron-trx-logo.png"),
    ("TON", "https://cryptologos.cc/logos/toncoin-ton-logo.png"),
];

/// Logo for a ticker, exact and case-sensitive match.
pub fn logo_url(symbol: &str) -> &'static str {
    LOGO_URLS
        .iter()
        .find(|(ticker, _)| *ticker == symbol)
        .map_or(LISTING_LOGO_PLACEHOLDER, |(_, url)| *url)
}

/// One row of the listings table.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRow {
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub market_cap: String,
    pub volume_24h: String,
    pub circulating_supply: String,
    pub logo: String,
}

impl From<&Listing> for ListingRow {
    fn from(listing: &Listing) -> Self {
        let quote = listing.quote_in(CONVERT);
        let symbol = listing.symbol.as_deref();

        Self {
            name: text_or_na(listing.name.as_deref()),
            symbol: text_or_na(symbol),
            price: money(quote.and_then(|q| q.price)),
            market_cap: money(quote.and_then(|q| q.market_cap)),
            volume_24h: money(quote.and_then(|q| q.volume_24h)),
            circulating_supply: number_or_na(listing.circulating_supply.as_ref()),
            logo: symbol.map_or(LISTING_LOGO_PLACEHOLDER, logo_url).to_string(),
        }
    }
}

/// Rows in upstream order.
pub fn listing_rows(listings: &[Listing]) -> Vec<ListingRow> {
    listings.iter().map(ListingRow::from).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeView {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub logo: String,
    pub website: String,
    pub twitter: String,
    pub fee_schedule: String,
    pub chat: String,
}

fn first_url(urls: Option<&Vec<String>>) -> String {
    urls.and_then(|list| list.first())
        .map_or_else(|| NOT_AVAILABLE.to_string(), Clone::clone)
}

impl From<&Exchange> for ExchangeView {
    fn from(exchange: &Exchange) -> Self {
        let urls = exchange.urls.as_ref();

        Self {
            name: text_or_na(exchange.name.as_deref()),
            slug: text_or_na(exchange.slug.as_deref()),
            description: text_or_na(exchange.description.as_deref()),
            logo: exchange
                .logo
                .clone()
                .unwrap_or_else(|| DETAIL_LOGO_PLACEHOLDER.to_string()),
            website: first_url(urls.and_then(|u| u.website.as_ref())),
            twitter: first_url(urls.and_then(|u| u.twitter.as_ref())),
            fee_schedule: first_url(urls.and_then(|u| u.fee.as_ref())),
            chat: first_url(urls.and_then(|u| u.chat.as_ref())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CoinView {
    pub name: String,
    pub symbol: String,
    pub slug: String,
    pub description: String,
    pub max_supply: String,
    pub circulating_supply: String,
    pub total_supply: String,
    pub tags: String,
    pub platform: String,
    pub date_added: String,
    pub last_updated: String,
    /// Text shown on the "Logo URL" line.
    pub logo_url: String,
    /// Image source, the placeholder when no logo is known.
    pub logo_src: String,
}

fn tag_label(tag: &Value) -> Option<&str> {
    match tag {
        Value::String(name) => Some(name),
        Value::Object(fields) => fields.get("name").and_then(Value::as_str),
        _ => None,
    }
}

fn platform_label(platform: Option<&Value>) -> String {
    match platform {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Object(fields)) => fields
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

impl From<&CoinInfo> for CoinView {
    fn from(coin: &CoinInfo) -> Self {
        let tags = coin
            .tags
            .iter()
            .flatten()
            .filter_map(tag_label)
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            name: text_or_na(coin.name.as_deref()),
            symbol: text_or_na(coin.symbol.as_deref()),
            slug: text_or_na(coin.slug.as_deref()),
            description: text_or_na(coin.description.as_deref()),
            max_supply: number_or_na(coin.max_supply.as_ref()),
            circulating_supply: number_or_na(coin.circulating_supply.as_ref()),
            total_supply: number_or_na(coin.total_supply.as_ref()),
            tags,
            platform: platform_label(coin.platform.as_ref()),
            date_added: timestamp_or_na(coin.date_added.as_deref()),
            last_updated: timestamp_or_na(coin.last_updated.as_deref()),
            logo_url: text_or_na(coin.logo.as_deref()),
            logo_src: coin
                .logo
                .clone()
                .unwrap_or_else(|| DETAIL_LOGO_PLACEHOLDER.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing(value: serde_json::Value) -> Listing {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn known_tickers_map_to_fixed_logos() {
        assert_eq!(logo_url("BTC"), "https://cryptologos.cc/logos/bitcoin-btc-logo.png");
        assert_eq!(logo_url("BNB"), "https://cryptologos.cc/logos/bnb-bnb-logo.png?v=033");
        assert_eq!(logo_url("TON"), "https://cryptologos.cc/logos/toncoin-ton-logo.png");
        for (ticker, url) in LOGO_URLS {
            assert_eq!(logo_url(ticker), url);
        }
    }

    #[test]
    fn unknown_tickers_get_the_placeholder() {
        assert_eq!(logo_url("ADA"), "https://via.placeholder.com/50");
        assert_eq!(logo_url("btc"), "https://via.placeholder.com/50");
        assert_eq!(logo_url(""), "https://via.placeholder.com/50");
    }

    #[test]
    fn listing_row_formats_money_and_keeps_supply_raw() {
        let row = ListingRow::from(&listing(json!({
            "name": "Ethereum",
            "symbol": "ETH",
            "circulating_supply": 120180000.25,
            "quote": { "INR": {
                "price": 280000.5,
                "market_cap": 33650000000.0,
                "volume_24h": 1234.567
            } }
        })));

        assert_eq!(row.name, "Ethereum");
        assert_eq!(row.price, "₹280000.50");
        assert_eq!(row.market_cap, "₹33650000000.00");
        assert_eq!(row.volume_24h, "₹1234.57");
        assert_eq!(row.circulating_supply, "120180000.25");
        assert_eq!(row.logo, "https://cryptologos.cc/logos/ethereum-eth-logo.png");
    }

    #[test]
    fn listing_row_without_inr_quote_shows_na() {
        let row = ListingRow::from(&listing(json!({
            "name": "Mystery",
            "quote": { "USD": { "price": 1.0 } }
        })));

        assert_eq!(row.symbol, "N/A");
        assert_eq!(row.price, "N/A");
        assert_eq!(row.circulating_supply, "N/A");
        assert_eq!(row.logo, LISTING_LOGO_PLACEHOLDER);
    }

    #[test]
    fn rows_keep_upstream_order() {
        let listings: Vec<Listing> = ["BTC", "ETH", "USDT"]
            .iter()
            .map(|symbol| listing(json!({ "symbol": symbol })))
            .collect();
        let symbols: Vec<String> = listing_rows(&listings).into_iter().map(|r| r.symbol).collect();
        assert_eq!(symbols, ["BTC", "ETH", "USDT"]);
    }

    #[test]
    fn exchange_view_defaults_every_missing_field() {
        let exchange: Exchange = serde_json::from_value(json!({
            "name": "Binance",
            "urls": { "website": ["https://www.binance.com/"], "twitter": [], "fee": null }
        }))
        .unwrap();
        let view = ExchangeView::from(&exchange);

        assert_eq!(view.name, "Binance");
        assert_eq!(view.slug, "N/A");
        assert_eq!(view.description, "N/A");
        assert_eq!(view.website, "https://www.binance.com/");
        assert_eq!(view.twitter, "N/A");
        assert_eq!(view.fee_schedule, "N/A");
        assert_eq!(view.chat, "N/A");
        assert_eq!(view.logo, DETAIL_LOGO_PLACEHOLDER);
    }

    #[test]
    fn coin_view_joins_tags_and_names_the_platform() {
        let coin: CoinInfo = serde_json::from_value(json!({
            "name": "Chainlink",
            "symbol": "LINK",
            "tags": ["defi", { "slug": "oracles", "name": "Oracles" }, 7],
            "platform": {
                "id": 1027,
                "name": "Ethereum",
                "token_address": "0x514910771af9ca656af840dff83e8264ecf986ca"
            },
            "max_supply": 1000000000,
            "date_added": "2017-09-20T00:00:00.000Z"
        }))
        .unwrap();
        let view = CoinView::from(&coin);

        assert_eq!(view.tags, "defi, Oracles");
        assert_eq!(view.platform, "Ethereum");
        assert_eq!(view.max_supply, "1000000000");
        assert_eq!(view.total_supply, "N/A");
        assert_eq!(view.date_added, "2017-09-20 00:00:00 UTC");
        assert_eq!(view.last_updated, "N/A");
        assert_eq!(view.logo_url, "N/A");
        assert_eq!(view.logo_src, DETAIL_LOGO_PLACEHOLDER);
    }

    #[test]
    fn native_coin_has_no_platform_and_no_tags() {
        let coin: CoinInfo =
            serde_json::from_value(json!({ "name": "Bitcoin", "platform": null })).unwrap();
        let view = CoinView::from(&coin);
        assert_eq!(view.platform, "N/A");
        assert_eq!(view.tags, "");
    }
}
