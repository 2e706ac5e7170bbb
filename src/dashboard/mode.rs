/// Sidebar menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Home,
    CryptocurrencyData,
    ExchangeDetails,
    CryptoInfo,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::Home,
        Mode::CryptocurrencyData,
        Mode::ExchangeDetails,
        Mode::CryptoInfo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Home => "Home",
            Mode::CryptocurrencyData => "Cryptocurrency Data",
            Mode::ExchangeDetails => "Exchange Details",
            Mode::CryptoInfo => "Crypto Info",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Mode::Home => "/",
            Mode::CryptocurrencyData => "/listings",
            Mode::ExchangeDetails => "/exchange",
            Mode::CryptoInfo => "/coin",
        }
    }

    /// Page heading; the home page greets instead of repeating the label.
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Home => "Welcome to the CryptoBuddies",
            other => other.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mode_has_a_distinct_path() {
        let mut paths: Vec<&str> = Mode::ALL.iter().map(Mode::path).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Mode::ALL.len());
    }

    #[test]
    fn titles() {
        assert_eq!(Mode::Home.title(), "Welcome to the CryptoBuddies");
        assert_eq!(Mode::ExchangeDetails.title(), "Exchange Details");
    }
}
