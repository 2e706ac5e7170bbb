use axum::{
  extract::{Query, State},
  response::Html,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
  config::PAGE_SIZE,
  dashboard::{
      pager::Pager,
      presenter::{listing_rows, CoinView, ExchangeView},
      view::{self, Lookup},
  },
  market::{
      model::{CoinLookup, ExchangeLookup},
      service::MarketService,
  },
};

#[derive(Debug, Deserialize)]
pub struct ListingsQuery {
  pub page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeQuery {
  pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CoinQuery {
  pub slug: Option<String>,
}

pub async fn home() -> Html<String> {
  Html(view::home())
}

// One listings fetch per page view
pub async fn listings(
  State(service): State<MarketService>,
  Query(query): Query<ListingsQuery>,
) -> Html<String> {
  let pager = Pager::from_query(query.page.as_deref(), PAGE_SIZE);
  let fetched = service.fetch_listings(pager.start(), pager.page_size()).await;
  let pager = pager.record_fetch(fetched.value.len());

  let rows = listing_rows(&fetched.value);
  Html(view::listings(&rows, &pager, fetched.error.as_deref()))
}

pub async fn exchange(
  State(service): State<MarketService>,
  Query(query): Query<ExchangeQuery>,
) -> Html<String> {
  let Some(raw) = query.id else {
      return Html(view::exchange_page("", Lookup::Idle));
  };

  let lookup = ExchangeLookup::new(&raw);
  if lookup.validate().is_err() {
      return Html(view::exchange_page(&lookup.id, Lookup::Prompt));
  }

  let fetched = service.fetch_exchange_details(&lookup.id).await;
  let result = fetched.value.exchange(&lookup.id).map(ExchangeView::from);
  Html(view::exchange_page(
      &lookup.id,
      Lookup::Done {
          result,
          error: fetched.error,
      },
  ))
}

pub async fn coin(
  State(service): State<MarketService>,
  Query(query): Query<CoinQuery>,
) -> Html<String> {
  let Some(raw) = query.slug else {
      return Html(view::coin_page("", Lookup::Idle));
  };

  let lookup = CoinLookup::new(&raw);
  if lookup.validate().is_err() {
      return Html(view::coin_page(&lookup.slug, Lookup::Prompt));
  }

  let fetched = service.fetch_coin_info(&lookup.slug).await;
  let result: Vec<CoinView> = fetched.value.coins().map(CoinView::from).collect();
  Html(view::coin_page(
      &lookup.slug,
      Lookup::Done {
          result,
          error: fetched.error,
      },
  ))
}
