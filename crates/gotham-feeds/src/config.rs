//! Configuration for feeds
//!
//! Upstream base URLs, API keys, tracked symbols and refresh intervals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Configuration for third-party feeds and their refresh cadence
///
/// # Examples
///
/// ```
/// use gotham_feeds::FeedsConfig;
/// use std::time::Duration;
///
/// let config = FeedsConfig::default();
/// assert_eq!(config.market_interval(), Duration::from_secs(30 * 60));
/// assert_eq!(config.content_interval(), Duration::from_secs(24 * 3600));
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedsConfig {
    /// CoinGecko API root
    pub coingecko_base_url: String,

    /// CoinGecko demo key, sent as `x-cg-demo-api-key`
    pub coingecko_api_key: Option<String>,

    /// Coins listed on the crypto widget
    pub coin_ids: Vec<String>,

    /// Alpha Vantage API root
    pub alphavantage_base_url: String,

    /// Alpha Vantage key; the market widget stays on its fallback without one
    pub alphavantage_api_key: Option<String>,

    /// Equities quoted through `GLOBAL_QUOTE`
    pub stock_symbols: Vec<String>,

    /// Coins quoted through `CURRENCY_EXCHANGE_RATE`
    pub crypto_symbols: Vec<String>,

    /// Quote gold (XAU) on the market widget
    pub include_gold: bool,

    /// disease.sh API root
    pub disease_base_url: String,

    /// WHO Global Health Observatory API root
    pub who_base_url: String,

    /// WHO indicator code shown on the health widget
    pub who_indicator: String,

    /// ClinicalTrials.gov API root
    pub trials_base_url: String,

    /// Search term for the clinical trials widget
    pub trials_query: String,

    /// Open Food Facts API root
    pub food_base_url: String,

    /// Results per search for trials and food lookups
    pub page_size: usize,

    /// Market widgets refresh interval (minutes)
    pub market_interval_minutes: u64,

    /// Health widgets refresh interval (minutes)
    pub health_interval_minutes: u64,

    /// Generated content refresh interval (hours)
    pub content_interval_hours: u64,

    /// Per-request timeout (seconds)
    pub request_timeout_secs: u64,
}

impl FeedsConfig {
    /// Market refresh interval as a Duration
    pub fn market_interval(&self) -> Duration {
        Duration::from_secs(self.market_interval_minutes * 60)
    }

    /// Health refresh interval as a Duration
    pub fn health_interval(&self) -> Duration {
        Duration::from_secs(self.health_interval_minutes * 60)
    }

    /// Generated content refresh interval as a Duration
    pub fn content_interval(&self) -> Duration {
        Duration::from_secs(self.content_interval_hours * 3600)
    }

    /// Per-request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Point every upstream at one base URL (used with mock servers)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.coingecko_base_url = base_url.to_string();
        self.alphavantage_base_url = base_url.to_string();
        self.disease_base_url = base_url.to_string();
        self.who_base_url = base_url.to_string();
        self.trials_base_url = base_url.to_string();
        self.food_base_url = base_url.to_string();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.market_interval_minutes == 0 {
            return Err("market_interval_minutes must be greater than 0".to_string());
        }
        if self.health_interval_minutes == 0 {
            return Err("health_interval_minutes must be greater than 0".to_string());
        }
        if self.content_interval_hours == 0 {
            return Err("content_interval_hours must be greater than 0".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        if self.page_size == 0 {
            return Err("page_size must be greater than 0".to_string());
        }
        for (name, url) in [
            ("coingecko_base_url", &self.coingecko_base_url),
            ("alphavantage_base_url", &self.alphavantage_base_url),
            ("disease_base_url", &self.disease_base_url),
            ("who_base_url", &self.who_base_url),
            ("trials_base_url", &self.trials_base_url),
            ("food_base_url", &self.food_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("{} must be an http(s) URL", name));
            }
        }
        Ok(())
    }
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            coingecko_base_url: "https://api.coingecko.com/api/v3".to_string(),
            coingecko_api_key: None,
            coin_ids: [
                "bitcoin",
                "ethereum",
                "solana",
                "cardano",
                "polkadot",
                "chainlink",
                "polygon-pos",
                "avalanche-2",
            ]
            .map(String::from)
            .to_vec(),
            alphavantage_base_url: "https://www.alphavantage.co".to_string(),
            alphavantage_api_key: None,
            stock_symbols: ["MSFT", "AAPL", "AMZN", "TSLA", "NVDA"].map(String::from).to_vec(),
            crypto_symbols: ["BTC", "ETH", "SOL"].map(String::from).to_vec(),
            include_gold: true,
            disease_base_url: "https://disease.sh".to_string(),
            who_base_url: "https://ghoapi.azureedge.net".to_string(),
            who_indicator: "WHOSIS_000001".to_string(),
            trials_base_url: "https://clinicaltrials.gov".to_string(),
            trials_query: "exercise".to_string(),
            food_base_url: "https://world.openfoodfacts.org".to_string(),
            page_size: 5,
            market_interval_minutes: 30,
            health_interval_minutes: 30,
            content_interval_hours: 24,
            request_timeout_secs: 15,
        }
    }
}

// Keys stay out of logs.
impl fmt::Debug for FeedsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("FeedsConfig")
            .field("coingecko_base_url", &self.coingecko_base_url)
            .field("coingecko_api_key", &redact(&self.coingecko_api_key))
            .field("alphavantage_base_url", &self.alphavantage_base_url)
            .field("alphavantage_api_key", &redact(&self.alphavantage_api_key))
            .field("disease_base_url", &self.disease_base_url)
            .field("who_base_url", &self.who_base_url)
            .field("trials_base_url", &self.trials_base_url)
            .field("food_base_url", &self.food_base_url)
            .field("market_interval_minutes", &self.market_interval_minutes)
            .field("health_interval_minutes", &self.health_interval_minutes)
            .field("content_interval_hours", &self.content_interval_hours)
            .finish_non_exhaustive()
    }
}
