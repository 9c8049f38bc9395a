//! Configuration file parsing for the server.
//!
//! Loads settings from TOML: bind address, log level, the gate, the
//! completion provider and the feeds. Secrets can be supplied (and are
//! overridden) through environment variables.

use gotham_feeds::FeedsConfig;
use gotham_gate::GateConfig;
use gotham_oracle::OracleConfig;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable overriding `gate.access_key`
pub const ENV_ACCESS_KEY: &str = "GOTHAM_ACCESS_KEY";
/// Environment variable overriding `gate.session_secret`
pub const ENV_SESSION_SECRET: &str = "GOTHAM_SESSION_SECRET";
/// Environment variable overriding `llm.api_key`
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
/// Environment variable overriding `feeds.coingecko_api_key`
pub const ENV_COINGECKO_API_KEY: &str = "COINGECKO_API_KEY";
/// Environment variable overriding `feeds.alphavantage_api_key`
pub const ENV_ALPHAVANTAGE_API_KEY: &str = "ALPHAVANTAGE_API_KEY";

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// A field holds an unusable value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GothamConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    pub bind_port: u16,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Access gate and session cookie
    pub gate: GateSection,

    /// Completion provider
    pub llm: LlmSection,

    /// Third-party feeds
    pub feeds: FeedsConfig,
}

/// `[gate]` section
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct GateSection {
    /// Passphrase that opens the gate
    pub access_key: String,

    /// Secret for signing session cookies
    pub session_secret: String,

    /// Session lifetime in seconds; sessions never expire when unset
    pub session_expiry_secs: Option<u64>,

    /// File the gate flag persists to; memory only when unset
    pub flag_path: Option<PathBuf>,
}

/// `[llm]` section
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct LlmSection {
    /// OpenAI-compatible API root
    pub base_url: String,

    /// Model name
    pub model: String,

    /// Bearer token for the provider
    pub api_key: Option<String>,

    /// Request timeout (seconds)
    pub timeout_secs: u64,

    /// Sampling settings
    #[serde(flatten)]
    pub oracle: OracleConfig,
}

impl Default for LlmSection {
    fn default() -> Self {
        Self {
            base_url: gotham_llm::openai::DEFAULT_BASE_URL.to_string(),
            model: gotham_llm::openai::DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_secs: gotham_llm::openai::DEFAULT_TIMEOUT_SECS,
            oracle: OracleConfig::default(),
        }
    }
}

impl LlmSection {
    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GothamConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 8080,
            log_level: "info".to_string(),
            gate: GateSection::default(),
            llm: LlmSection::default(),
            feeds: FeedsConfig::default(),
        }
    }
}

impl GothamConfig {
    /// Load configuration from a TOML file, apply environment overrides and validate
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: GothamConfig = toml::from_str(&contents)?;

        let config = config.with_env_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides, validated
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self::default().with_env_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Replace secrets with values from `lookup`, skipping blank ones
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = var(ENV_ACCESS_KEY) {
            self.gate.access_key = key;
        }
        if let Some(secret) = var(ENV_SESSION_SECRET) {
            self.gate.session_secret = secret;
        }
        if let Some(key) = var(ENV_OPENAI_API_KEY) {
            self.llm.api_key = Some(key);
        }
        if let Some(key) = var(ENV_COINGECKO_API_KEY) {
            self.feeds.coingecko_api_key = Some(key);
        }
        if let Some(key) = var(ENV_ALPHAVANTAGE_API_KEY) {
            self.feeds.alphavantage_api_key = Some(key);
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gate.access_key.is_empty() {
            return Err(ConfigError::MissingField(format!(
                "gate.access_key (or {})",
                ENV_ACCESS_KEY
            )));
        }
        if self.gate.session_secret.is_empty() {
            return Err(ConfigError::MissingField(format!(
                "gate.session_secret (or {})",
                ENV_SESSION_SECRET
            )));
        }
        if self.gate.session_expiry_secs == Some(0) {
            return Err(ConfigError::Invalid(
                "gate.session_expiry_secs must be greater than 0".to_string(),
            ));
        }
        if self.llm.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "llm.timeout_secs must be greater than 0".to_string(),
            ));
        }
        self.llm
            .oracle
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("llm: {}", e)))?;
        self.feeds
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("feeds: {}", e)))?;
        Ok(())
    }

    /// Gate settings for the gate store
    pub fn gate_config(&self) -> GateConfig {
        let config = GateConfig::new(self.gate.access_key.clone());
        match &self.gate.flag_path {
            Some(path) => config.with_flag_path(path),
            None => config,
        }
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        GothamConfig {
            gate: GateSection {
                access_key: "test-access-key".to_string(),
                session_secret: "test-secret-key-do-not-use-in-production".to_string(),
                session_expiry_secs: None,
                flag_path: None,
            },
            ..Default::default()
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }
}

// Secrets stay out of logs.
impl fmt::Debug for GateSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateSection")
            .field("access_key", &"<redacted>")
            .field("session_secret", &"<redacted>")
            .field("session_expiry_secs", &self.session_expiry_secs)
            .field("flag_path", &self.flag_path)
            .finish()
    }
}

impl fmt::Debug for LlmSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmSection")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("oracle", &self.oracle)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = GothamConfig::default_test_config();
        assert_eq!(config.bind_address, "127.0.0.1");
        assert_eq!(config.bind_port, 8080);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.gate.session_expiry_secs, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_addr() {
        let config = GothamConfig::default_test_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            log_level = "debug"

            [gate]
            access_key = "signal"
            session_secret = "cookie-secret"
            session_expiry_secs = 7200
            flag_path = "/var/lib/gotham/flag.json"

            [llm]
            base_url = "http://localhost:11434/v1"
            model = "local-model"
            temperature = 0.5
            conversation_max_tokens = 150

            [feeds]
            market_interval_minutes = 10
            stock_symbols = ["WAYN"]
        "#;

        let config: GothamConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.gate.access_key, "signal");
        assert_eq!(config.gate.session_expiry_secs, Some(7200));
        assert_eq!(config.llm.model, "local-model");
        assert_eq!(config.llm.oracle.temperature, 0.5);
        assert_eq!(config.llm.oracle.conversation_max_tokens, 150);
        assert_eq!(config.llm.oracle.conversation_temperature, 0.8);
        assert_eq!(config.feeds.market_interval_minutes, 10);
        assert_eq!(config.feeds.health_interval_minutes, 30);
        assert_eq!(config.feeds.stock_symbols, vec!["WAYN"]);
        assert!(config.validate().is_ok());

        let gate = config.gate_config();
        assert_eq!(gate.flag_path, Some(PathBuf::from("/var/lib/gotham/flag.json")));
    }

    #[test]
    fn test_example_config_parses() {
        let example = include_str!("../../../config/gotham.toml");
        let config: GothamConfig = toml::from_str(example).unwrap();
        assert!(config.gate.access_key.is_empty());
        assert_eq!(config.llm.oracle.conversation_max_tokens, 200);

        let config = config.with_env_overrides(|name| match name {
            ENV_ACCESS_KEY => Some("signal".to_string()),
            ENV_SESSION_SECRET => Some("cookie-secret".to_string()),
            _ => None,
        });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_access_key_is_rejected() {
        let config = GothamConfig::default();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(ref f) if f.contains("access_key")));
    }

    #[test]
    fn test_missing_session_secret_is_rejected() {
        let mut config = GothamConfig::default_test_config();
        config.gate.session_secret.clear();
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::MissingField(_)
        ));
    }

    #[test]
    fn test_env_overrides_secrets() {
        let env: HashMap<&str, &str> = [
            (ENV_ACCESS_KEY, "from-env"),
            (ENV_SESSION_SECRET, "env-secret"),
            (ENV_OPENAI_API_KEY, "env-openai"),
            (ENV_COINGECKO_API_KEY, "   "),
            (ENV_ALPHAVANTAGE_API_KEY, "env-av"),
        ]
        .into_iter()
        .collect();

        let config = GothamConfig::default_test_config()
            .with_env_overrides(|name| env.get(name).map(|v| v.to_string()));
        assert_eq!(config.gate.access_key, "from-env");
        assert_eq!(config.gate.session_secret, "env-secret");
        assert_eq!(config.llm.api_key.as_deref(), Some("env-openai"));
        assert_eq!(config.feeds.coingecko_api_key, None);
        assert_eq!(config.feeds.alphavantage_api_key.as_deref(), Some("env-av"));
    }

    #[test]
    fn test_invalid_feed_section_is_rejected() {
        let mut config = GothamConfig::default_test_config();
        config.feeds.content_interval_hours = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("feeds"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let mut config = GothamConfig::default_test_config();
        config.llm.api_key = Some("sk-very-secret".to_string());
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("test-access-key"));
        assert!(!rendered.contains("sk-very-secret"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gotham.toml");
        std::fs::write(
            &path,
            "[gate]\naccess_key = \"file-key\"\nsession_secret = \"file-secret\"\n",
        )
        .unwrap();

        let config = GothamConfig::from_file(&path).unwrap();
        assert!(!config.gate.access_key.is_empty());
        assert_eq!(config.bind_port, 8080);
    }

    #[test]
    fn test_from_missing_file() {
        let err = GothamConfig::from_file("/nonexistent/gotham.toml").unwrap_err();
        assert!(matches!(err, ConfigError::FileRead(_)));
    }
}
