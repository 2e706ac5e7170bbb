use axum::{routing::get, Router};

use crate::{
  dashboard::{handler, mode::Mode},
  market::service::MarketService,
};

pub fn dashboard_routes(service: MarketService) -> Router {
  Router::new()
      .route(Mode::Home.path(), get(handler::home))
      .route(Mode::CryptocurrencyData.path(), get(handler::listings))
      .route(Mode::ExchangeDetails.path(), get(handler::exchange))
      .route(Mode::CryptoInfo.path(), get(handler::coin))
      .with_state(service)
}
