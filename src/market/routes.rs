use axum::{routing::get, Router};

use crate::market::{handler, service::MarketService};

pub fn market_routes(service: MarketService) -> Router {
  Router::new()
      .route("/listings", get(handler::get_listings))
      .route("/exchanges/:id", get(handler::get_exchange))
      .route("/coins/:slug", get(handler::get_coin))
      .with_state(service)
}
