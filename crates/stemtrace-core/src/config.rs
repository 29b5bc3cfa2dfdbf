//! Configuration loading: JSON file first, environment variables on top.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_FILE: &str = "stemtrace.json";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3004;
pub const DEFAULT_MAX_WORD_LEN: usize = 64;
pub const DEFAULT_MAX_BATCH: usize = 256;

/// Top-level Stemtrace configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemtraceConfig {
    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Longest word (in characters) accepted by the API.
    #[serde(default = "default_max_word_len")]
    pub max_word_len: usize,
    /// Most words accepted in one batch request.
    #[serde(default = "default_max_batch")]
    pub max_batch: usize,
}

fn default_host() -> String {
    DEFAULT_HOST.into()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_max_word_len() -> usize {
    DEFAULT_MAX_WORD_LEN
}
fn default_max_batch() -> usize {
    DEFAULT_MAX_BATCH
}

impl Default for StemtraceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
            max_word_len: DEFAULT_MAX_WORD_LEN,
            max_batch: DEFAULT_MAX_BATCH,
        }
    }
}

impl StemtraceConfig {
    /// Load config from file, then apply environment overrides.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse is an error.
    pub fn load(config_path: &Path) -> Result<Self> {
        let mut config = Self::from_file(config_path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read only the JSON file, without environment overrides.
    pub fn from_file(config_path: &Path) -> Result<Self> {
        match std::fs::read_to_string(config_path) {
            Ok(data) => {
                let config: StemtraceConfig = serde_json::from_str(&data).map_err(|e| {
                    Error::Config(format!("{}: {}", config_path.display(), e))
                })?;
                info!("Loaded config from {}", config_path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No config at {}, using defaults", config_path.display());
                Ok(Self::default())
            }
            Err(e) => Err(Error::Io(e)),
        }
    }

    /// Apply `PORT`, `STEMTRACE_HOST`, `STEMTRACE_MAX_WORD_LEN` and
    /// `STEMTRACE_MAX_BATCH` from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("STEMTRACE_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.port = parse_var("PORT", &port)?;
        }
        if let Some(len) = lookup("STEMTRACE_MAX_WORD_LEN") {
            self.max_word_len = parse_var("STEMTRACE_MAX_WORD_LEN", &len)?;
        }
        if let Some(batch) = lookup("STEMTRACE_MAX_BATCH") {
            self.max_batch = parse_var("STEMTRACE_MAX_BATCH", &batch)?;
        }
        Ok(())
    }

    /// Save config to disk as pretty JSON.
    pub fn save(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, json)?;
        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject words longer than `max_word_len` characters.
    pub fn check_word(&self, word: &str) -> Result<()> {
        let len = word.chars().count();
        if len > self.max_word_len {
            return Err(Error::InvalidInput(format!(
                "word is {} characters, limit is {}",
                len, self.max_word_len
            )));
        }
        Ok(())
    }

    /// Reject batches larger than `max_batch`.
    pub fn check_batch(&self, size: usize) -> Result<()> {
        if size > self.max_batch {
            return Err(Error::InvalidInput(format!(
                "batch has {} words, limit is {}",
                size, self.max_batch
            )));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        warn!("Unparseable {}={}", key, value);
        Error::Config(format!("invalid value for {}: {:?}", key, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = StemtraceConfig::from_file(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, StemtraceConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:3004");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stemtrace.json");
        std::fs::write(&path, r#"{"port": 8080, "max_batch": 10}"#).unwrap();

        let config = StemtraceConfig::from_file(&path).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_batch, 10);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.max_word_len, DEFAULT_MAX_WORD_LEN);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stemtrace.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = StemtraceConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("stemtrace.json");
        let config = StemtraceConfig {
            host: "127.0.0.1".into(),
            port: 9000,
            max_word_len: 20,
            max_batch: 5,
        };
        config.save(&path).unwrap();
        assert_eq!(StemtraceConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_env_overrides() {
        let mut config = StemtraceConfig::default();
        config
            .apply_overrides(lookup(&[
                ("PORT", "4100"),
                ("STEMTRACE_HOST", "localhost"),
                ("STEMTRACE_MAX_WORD_LEN", " 12 "),
            ]))
            .unwrap();
        assert_eq!(config.port, 4100);
        assert_eq!(config.host, "localhost");
        assert_eq!(config.max_word_len, 12);
        assert_eq!(config.max_batch, DEFAULT_MAX_BATCH);
    }

    #[test]
    fn test_bad_env_value() {
        let mut config = StemtraceConfig::default();
        let err = config
            .apply_overrides(lookup(&[("PORT", "eighty")]))
            .unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_limits() {
        let config = StemtraceConfig {
            max_word_len: 5,
            max_batch: 2,
            ..Default::default()
        };
        assert!(config.check_word("hello").is_ok());
        assert!(matches!(
            config.check_word("hellos"),
            Err(Error::InvalidInput(_))
        ));
        assert!(config.check_batch(2).is_ok());
        assert!(config.check_batch(3).is_err());
    }
}
