use axum::{
  extract::{Path, Query, State},
  Json,
};
use validator::Validate;

use crate::{
  config::PAGE_SIZE,
  dashboard::{handler::ListingsQuery, pager::Pager},
  error::AppError,
  market::{
      model::{CoinInfo, CoinLookup, Exchange, ExchangeLookup, ListingsPageResponse},
      service::MarketService,
  },
};

// JSON pass-through of the upstream endpoints. Unlike the dashboard pages
// these propagate failures as `AppError`.

pub async fn get_listings(
  State(service): State<MarketService>,
  Query(query): Query<ListingsQuery>,
) -> Result<Json<ListingsPageResponse>, AppError> {
  let pager = Pager::from_query(query.page.as_deref(), PAGE_SIZE);
  let data = service.source().listings(pager.start(), pager.page_size()).await?;
  let pager = pager.record_fetch(data.len());

  Ok(Json(ListingsPageResponse {
      page: pager.page(),
      page_size: pager.page_size(),
      start: pager.start(),
      has_previous: pager.has_previous(),
      has_next: pager.has_next(),
      data,
  }))
}

pub async fn get_exchange(
  State(service): State<MarketService>,
  Path(id): Path<String>,
) -> Result<Json<Exchange>, AppError> {
  let lookup = ExchangeLookup::new(&id);
  lookup.validate()?;

  let response = service.source().exchange_info(&lookup.id).await?;
  response
      .exchange(&lookup.id)
      .cloned()
      .map(Json)
      .ok_or_else(|| AppError::NotFoundError(format!("exchange {}", lookup.id)))
}

pub async fn get_coin(
  State(service): State<MarketService>,
  Path(slug): Path<String>,
) -> Result<Json<Vec<CoinInfo>>, AppError> {
  let lookup = CoinLookup::new(&slug);
  lookup.validate()?;

  let response = service.source().coin_info(&lookup.slug).await?;
  let coins: Vec<CoinInfo> = response.coins().cloned().collect();
  if coins.is_empty() {
      return Err(AppError::NotFoundError(format!("cryptocurrency {}", lookup.slug)));
  }
  Ok(Json(coins))
}
