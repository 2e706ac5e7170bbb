use std::sync::Arc;

use axum::{
  routing::get,
  http::StatusCode,
  Json, Router,
};
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::{
  compression::CompressionLayer,
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{
  config::Config,
  dashboard::routes::dashboard_routes,
  error::AppError,
  market::{client::CmcClient, routes::market_routes, service::MarketService},
};

pub async fn create_router(config: &Config) -> Result<Router, AppError> {
  let client = CmcClient::new(config)?;
  let market_service = MarketService::new(Arc::new(client));

  Ok(router_with_service(market_service))
}

/// Full application router around an already built service.
pub fn router_with_service(market_service: MarketService) -> Router {
  // Setup CORS
  let cors = CorsLayer::new()
      .allow_origin(Any)
      .allow_methods(Any)
      .allow_headers(Any);

  // Setup routes
  let api_routes = Router::new()
      .route("/health", get(health_check))
      .merge(market_routes(market_service.clone()));

  Router::new()
      .merge(dashboard_routes(market_service))
      .nest("/api/v1", api_routes)
      .fallback(not_found)
      .layer(
          ServiceBuilder::new()
              .layer(TraceLayer::new_for_http())
              .layer(CompressionLayer::new())
              .layer(cors),
      )
}

async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
  (
      StatusCode::OK,
      Json(json!({
          "status": "success",
          "message": "Server is running"
      })),
  )
}

async fn not_found() -> AppError {
  AppError::NotFoundError("route".into())
}
