pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod market;
pub mod utils;

// Re-export common modules
pub use api::router;
pub use config::Config;
pub use error::AppError;
pub use market::service::MarketService;
