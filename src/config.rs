use std::env;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://pro-api.coinmarketcap.com";

/// Rows per listings page. Never changed by the UI.
pub const PAGE_SIZE: u32 = 10;

/// Fiat currency the listings quotes are converted into.
pub const CONVERT: &str = "INR";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub app_env: AppEnv,
    pub cmc_api_key: Option<String>,
    pub cmc_base_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

impl AppEnv {
    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "production" => AppEnv::Production,
            "test" => AppEnv::Test,
            _ => AppEnv::Development,
        }
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            AppEnv::Development => "debug",
            AppEnv::Production | AppEnv::Test => "info",
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server config
        let port = lookup("PORT")
            .unwrap_or_else(|| "5000".into())
            .parse::<u16>()
            .map_err(|_| AppError::ConfigError("Invalid PORT".into()))?;

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".into());

        let app_env = AppEnv::parse(&lookup("APP_ENV").unwrap_or_else(|| "development".into()));

        // Upstream API config
        let cmc_api_key = lookup("CMC_API_KEY").filter(|key| !key.is_empty());

        let cmc_base_url = lookup("CMC_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.into());
        if !cmc_base_url.starts_with("http://") && !cmc_base_url.starts_with("https://") {
            return Err(AppError::ConfigError(
                "CMC_BASE_URL must start with http:// or https://".into(),
            ));
        }

        Ok(Self {
            port,
            host,
            app_env,
            cmc_api_key,
            cmc_base_url,
        })
    }

    /// Config pointing at an arbitrary upstream, used by tests.
    pub fn for_upstream(base_url: impl Into<String>, api_key: Option<&str>) -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".into(),
            app_env: AppEnv::Test,
            cmc_api_key: api_key.map(str::to_string),
            cmc_base_url: base_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.cmc_api_key, None);
        assert_eq!(config.cmc_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn api_key_is_kept_verbatim() {
        let config = config_from(&[("CMC_API_KEY", " abc-123 ")]).unwrap();
        assert_eq!(config.cmc_api_key.as_deref(), Some(" abc-123 "));
    }

    #[test]
    fn empty_api_key_counts_as_unset() {
        let config = config_from(&[("CMC_API_KEY", "")]).unwrap();
        assert_eq!(config.cmc_api_key, None);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn base_url_loses_trailing_slash() {
        let config = config_from(&[("CMC_BASE_URL", "http://localhost:9000/")]).unwrap();
        assert_eq!(config.cmc_base_url, "http://localhost:9000");
    }

    #[test]
    fn base_url_needs_a_scheme() {
        assert!(config_from(&[("CMC_BASE_URL", "localhost:9000")]).is_err());
    }

    #[test]
    fn production_logs_at_info() {
        let config = config_from(&[("APP_ENV", "Production")]).unwrap();
        assert_eq!(config.app_env, AppEnv::Production);
        assert_eq!(config.app_env.default_log_filter(), "info");
    }
}
