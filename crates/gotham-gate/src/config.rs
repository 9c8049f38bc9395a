//! Gate configuration

use std::fmt;
use std::path::PathBuf;

/// Configuration for the access gate
#[derive(Clone)]
pub struct GateConfig {
    /// Passphrase compared case-sensitively against submissions
    pub access_key: String,

    /// Where the flag persists; memory only when `None`
    pub flag_path: Option<PathBuf>,
}

impl GateConfig {
    /// Create a configuration that keeps the flag in memory
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            flag_path: None,
        }
    }

    /// Persist the flag to a file
    pub fn with_flag_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.flag_path = Some(path.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.access_key.is_empty() {
            return Err("access_key must not be empty".to_string());
        }
        Ok(())
    }
}

// The passphrase never reaches logs.
impl fmt::Debug for GateConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GateConfig")
            .field("access_key", &"<redacted>")
            .field("flag_path", &self.flag_path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_is_invalid() {
        assert!(GateConfig::new("").validate().is_err());
        assert!(GateConfig::new("k").validate().is_ok());
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", GateConfig::new("hunter2"));
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
