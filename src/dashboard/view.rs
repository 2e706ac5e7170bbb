//! HTML rendering. Every function is pure: view models in, markup out.

use std::fmt::Write;

use crate::dashboard::mode::Mode;
use crate::dashboard::pager::{Pager, PagerAction};
use crate::dashboard::presenter::{CoinView, ExchangeView, ListingRow};
use crate::utils::format::escape_html as esc;

pub const NO_LISTINGS: &str = "No cryptocurrency data found.";
pub const NO_EXCHANGE: &str = "No exchange data found.";
pub const NO_COIN: &str = "No cryptocurrency information found.";
pub const EXCHANGE_PROMPT: &str = "Please enter a valid exchange ID.";
pub const COIN_PROMPT: &str = "Please enter a valid cryptocurrency slug.";

const STYLE: &str = "body{margin:0;font-family:sans-serif;display:flex}\
nav{width:220px;min-height:100vh;background:#f0f2f6;padding:1rem}\
nav a{display:block;padding:.3rem 0;color:#262730}nav a.active{font-weight:bold}\
main{flex:1;padding:1rem 2rem}table{border-collapse:collapse}\
td,th{border:1px solid #ddd;padding:.4rem;text-align:left}\
.error{background:#ffe5e5;color:#7d1a1a;padding:.6rem;border-radius:4px}\
.pager{display:flex;gap:1rem;margin-top:1rem}";

/// Full page: sidebar menu with `active` highlighted, then `body`.
pub fn layout(active: Mode, body: &str) -> String {
    let mut menu = String::new();
    for mode in Mode::ALL {
        let class = if mode == active { " class=\"active\"" } else { "" };
        let _ = write!(menu, "<a href=\"{}\"{}>{}</a>", mode.path(), class, mode.label());
    }

    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title>\
<style>{STYLE}</style></head><body>\
<nav><h2>Menu</h2><p>Select an option:</p>{menu}</nav>\
<main><h1>{title}</h1>{body}</main></body></html>",
        title = active.title(),
    )
}

fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", esc(text))
}

fn field(label: &str, value: &str) -> String {
    format!("<p><strong>{}:</strong> {}</p>", label, esc(value))
}

fn link_field(label: &str, href: &str) -> String {
    format!("<p><strong>{}:</strong> <a href=\"{}\">Link</a></p>", label, esc(href))
}

fn image(src: &str, width: u32) -> String {
    format!("<img src=\"{}\" width=\"{}\">", esc(src), width)
}

pub fn error_banner(message: &str) -> String {
    format!("<div class=\"error\">{}</div>", esc(message))
}

pub fn home() -> String {
    let mut body = paragraph(
        " CryptoBuddies!! This tool allows you to explore various aspects of the \
cryptocurrency market. Use the menu on the left to navigate through different features:",
    );
    body.push_str("<h3>Cryptocurrency Data</h3>");
    body.push_str(&paragraph(
        "Fetch and view the latest cryptocurrency data including prices, market caps, \
24h volumes, and more. You can navigate through pages to see more cryptocurrencies.",
    ));
    body.push_str("<h3>Exchange Details</h3>");
    body.push_str(&paragraph(
        "Fetch and view detailed information about a specific cryptocurrency exchange \
by entering its ID.",
    ));
    body.push_str("<h3>Crypto Info</h3>");
    body.push_str(&paragraph(
        "Fetch and view detailed information about a specific cryptocurrency by entering \
its slug (e.g., bitcoin).",
    ));
    layout(Mode::Home, &body)
}

fn listings_table(rows: &[ListingRow]) -> String {
    let mut table = String::from(
        "<table><thead><tr><th>Name</th><th>Symbol</th><th>Price (INR)</th><th>Market Cap</th>\
<th>24h Volume</th><th>Circulating Supply</th><th>Logo</th></tr></thead><tbody>",
    );
    for row in rows {
        let _ = write!(
            table,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
<td><img src=\"{}\" width=\"50\" height=\"50\"></td></tr>",
            esc(&row.name),
            esc(&row.symbol),
            esc(&row.price),
            esc(&row.market_cap),
            esc(&row.volume_24h),
            esc(&row.circulating_supply),
            esc(&row.logo),
        );
    }
    table.push_str("</tbody></table>");
    table
}

fn pager_button(pager: &Pager, action: PagerAction, label: &str) -> String {
    match pager.apply(action) {
        Some(target) => format!(
            "<a class=\"button\" href=\"{}?page={}\">{}</a>",
            Mode::CryptocurrencyData.path(),
            target.page(),
            label
        ),
        None => format!("<button disabled>{}</button>", label),
    }
}

/// Listings table plus Previous/Next controls. `pager` must already have
/// the fetch recorded.
pub fn listings(rows: &[ListingRow], pager: &Pager, error: Option<&str>) -> String {
    let mut body = String::new();
    if let Some(message) = error {
        body.push_str(&error_banner(message));
    }
    if rows.is_empty() {
        body.push_str(&paragraph(NO_LISTINGS));
    } else {
        body.push_str(&listings_table(rows));
    }
    let _ = write!(
        body,
        "<div class=\"pager\">{}<span>Page {}</span>{}</div>",
        pager_button(pager, PagerAction::Previous, "Previous Page"),
        pager.page(),
        pager_button(pager, PagerAction::Next, "Next Page"),
    );
    layout(Mode::CryptocurrencyData, &body)
}

fn lookup_form(mode: Mode, name: &str, label: &str, value: &str, submit: &str) -> String {
    format!(
        "<form method=\"get\" action=\"{}\"><label>{} \
<input type=\"text\" name=\"{}\" value=\"{}\"></label> \
<button type=\"submit\">{}</button></form>",
        mode.path(),
        label,
        name,
        esc(value),
        submit
    )
}

fn exchange_form(id: &str) -> String {
    lookup_form(Mode::ExchangeDetails, "id", "Enter exchange ID:", id, "Fetch Exchange Details")
}

fn coin_form(slug: &str) -> String {
    lookup_form(
        Mode::CryptoInfo,
        "slug",
        "Enter cryptocurrency slug (e.g., bitcoin):",
        slug,
        "Fetch Crypto Info",
    )
}

/// What the lookup pages show under their form.
#[derive(Debug)]
pub enum Lookup<T> {
    /// Form not submitted yet.
    Idle,
    /// Submitted with an empty identifier; nothing was fetched.
    Prompt,
    /// Fetched; `None`/empty means no record matched.
    Done { result: T, error: Option<String> },
}

pub fn exchange_page(id: &str, lookup: Lookup<Option<ExchangeView>>) -> String {
    let mut body = exchange_form(id);
    match lookup {
        Lookup::Idle => {}
        Lookup::Prompt => body.push_str(&paragraph(EXCHANGE_PROMPT)),
        Lookup::Done { result, error } => {
            if let Some(message) = error {
                body.push_str(&error_banner(&message));
            }
            match result {
                Some(exchange) => body.push_str(&exchange_details(&exchange)),
                None => body.push_str(&paragraph(NO_EXCHANGE)),
            }
        }
    }
    layout(Mode::ExchangeDetails, &body)
}

fn exchange_details(exchange: &ExchangeView) -> String {
    [
        field("Name", &exchange.name),
        field("Slug", &exchange.slug),
        field("Description", &exchange.description),
        image(&exchange.logo, 100),
        link_field("Website", &exchange.website),
        link_field("Twitter", &exchange.twitter),
        link_field("Fee Schedule", &exchange.fee_schedule),
        link_field("Chat", &exchange.chat),
    ]
    .concat()
}

pub fn coin_page(slug: &str, lookup: Lookup<Vec<CoinView>>) -> String {
    let mut body = coin_form(slug);
    match lookup {
        Lookup::Idle => {}
        Lookup::Prompt => body.push_str(&paragraph(COIN_PROMPT)),
        Lookup::Done { result, error } => {
            if let Some(message) = error {
                body.push_str(&error_banner(&message));
            }
            if result.is_empty() {
                body.push_str(&paragraph(NO_COIN));
            }
            for coin in &result {
                body.push_str(&coin_details(coin));
            }
        }
    }
    layout(Mode::CryptoInfo, &body)
}

fn coin_details(coin: &CoinView) -> String {
    [
        field("Name", &coin.name),
        field("Symbol", &coin.symbol),
        field("Slug", &coin.slug),
        field("Description", &coin.description),
        field("Max Supply", &coin.max_supply),
        field("Circulating Supply", &coin.circulating_supply),
        field("Total Supply", &coin.total_supply),
        field("Tags", &coin.tags),
        field("Platform", &coin.platform),
        field("Date Added", &coin.date_added),
        field("Last Updated", &coin.last_updated),
        field("Logo URL", &coin.logo_url),
        image(&coin.logo_src, 100),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(symbol: &str) -> ListingRow {
        ListingRow {
            name: format!("{} coin", symbol),
            symbol: symbol.to_string(),
            price: "₹1.00".into(),
            market_cap: "₹2.00".into(),
            volume_24h: "₹3.00".into(),
            circulating_supply: "4".into(),
            logo: "https://via.placeholder.com/50".into(),
        }
    }

    #[test]
    fn sidebar_marks_the_active_mode() {
        let html = layout(Mode::CryptoInfo, "");
        assert!(html.contains("<a href=\"/coin\" class=\"active\">Crypto Info</a>"));
        assert!(html.contains("<a href=\"/\">Home</a>"));
        assert!(html.contains("<h1>Crypto Info</h1>"));
    }

    #[test]
    fn home_describes_each_mode() {
        let html = home();
        assert!(html.contains("Welcome to the CryptoBuddies"));
        for heading in ["Cryptocurrency Data", "Exchange Details", "Crypto Info"] {
            assert!(html.contains(&format!("<h3>{}</h3>", heading)));
        }
    }

    #[test]
    fn first_full_page_enables_only_next() {
        let rows: Vec<ListingRow> = (0..10).map(|i| row(&format!("C{}", i))).collect();
        let pager = Pager::new(1, 10).record_fetch(rows.len());
        let html = listings(&rows, &pager, None);

        assert_eq!(html.matches("<tr><td>").count(), 10);
        assert!(html.contains("<button disabled>Previous Page</button>"));
        assert!(html.contains("<a class=\"button\" href=\"/listings?page=2\">Next Page</a>"));
    }

    #[test]
    fn short_later_page_enables_only_previous() {
        let rows = vec![row("A"), row("B"), row("C")];
        let pager = Pager::new(2, 10).record_fetch(rows.len());
        let html = listings(&rows, &pager, None);

        assert_eq!(html.matches("<tr><td>").count(), 3);
        assert!(html.contains("href=\"/listings?page=1\">Previous Page</a>"));
        assert!(html.contains("<button disabled>Next Page</button>"));
    }

    #[test]
    fn listings_error_shows_banner_and_empty_state() {
        let pager = Pager::new(1, 10).record_fetch(0);
        let html = listings(&[], &pager, Some("Error fetching data: HTTP 401: bad key"));

        assert!(html.contains("<div class=\"error\">Error fetching data: HTTP 401: bad key</div>"));
        assert!(html.contains(NO_LISTINGS));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn missing_exchange_renders_no_image_or_links() {
        let html = exchange_page("999", Lookup::Done { result: None, error: None });

        assert!(html.contains(NO_EXCHANGE));
        assert!(!html.contains("<img"));
        assert!(!html.contains(">Link</a>"));
    }

    #[test]
    fn exchange_prompt_without_fetch() {
        let html = exchange_page("", Lookup::Prompt);
        assert!(html.contains(EXCHANGE_PROMPT));
        assert!(!html.contains(NO_EXCHANGE));
    }

    #[test]
    fn idle_coin_page_only_has_the_form() {
        let html = coin_page("", Lookup::Idle);
        assert!(html.contains("name=\"slug\""));
        assert!(!html.contains(COIN_PROMPT));
        assert!(!html.contains(NO_COIN));
    }

    #[test]
    fn upstream_text_is_escaped() {
        let mut evil = row("X");
        evil.name = "<script>alert(1)</script>".into();
        let pager = Pager::new(1, 10).record_fetch(1);
        let html = listings(&[evil], &pager, None);

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
