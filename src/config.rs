use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::{CatalogError, Result};

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "httpconst.toml";

static CONFIG: OnceLock<CatalogConfig> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Toml,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub format: OutputFormat,

    /// Accept `content-type` or `openid2.local_id` for `CONTENT_TYPE` and
    /// `OPENID2_LOCAL_ID` in `httpconst get`.
    pub case_insensitive_names: bool,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(deserialize_with = "deserialize_filter")]
    pub log_filter: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            case_insensitive_names: true,
            log_filter: "warn".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str::<CatalogConfig>(content).map_err(|err| CatalogError::Config(err.to_string()))
    }

    /// Reads `path`, falling back to the defaults when the file is missing or
    /// malformed.
    pub fn from_file(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return CatalogConfig::default();
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "fail to read config, falling back to defaults");
                return CatalogConfig::default();
            }
        };

        match CatalogConfig::parse(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "fail to deserialize config, falling back to defaults");
                CatalogConfig::default()
            }
        }
    }
}

pub fn set_config(cfg: CatalogConfig) -> Result<()> {
    CONFIG
        .set(cfg)
        .map_err(|_| CatalogError::Config("config already set".to_string()))
}

/// Global config, or the defaults when [`set_config`] was never called.
pub fn config() -> &'static CatalogConfig {
    CONFIG.get_or_init(CatalogConfig::default)
}

fn deserialize_filter<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let filter = String::deserialize(deserializer)?;
    let filter = filter.trim();
    if filter.is_empty() {
        return Err(serde::de::Error::custom("log_filter must not be empty"));
    }
    Ok(filter.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = CatalogConfig::default();
        assert_eq!(cfg.format, OutputFormat::Plain);
        assert!(cfg.case_insensitive_names);
        assert_eq!(cfg.log_filter, "warn");
    }

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let cfg = CatalogConfig::parse("format = \"toml\"").unwrap();
        assert_eq!(cfg.format, OutputFormat::Toml);
        assert!(cfg.case_insensitive_names);
    }

    #[test]
    fn test_parse_full_file() {
        let cfg = CatalogConfig::parse(
            "format = \"plain\"\ncase_insensitive_names = false\nlog_filter = \" httpconst=debug \"\n",
        )
        .unwrap();
        assert!(!cfg.case_insensitive_names);
        assert_eq!(cfg.log_filter, "httpconst=debug");
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(matches!(CatalogConfig::parse("format = \"xml\""), Err(CatalogError::Config(_))));
        assert!(CatalogConfig::parse("log_filter = \"  \"").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let cfg = CatalogConfig::from_file(Path::new("/nonexistent/httpconst.toml"));
        assert_eq!(cfg.format, OutputFormat::Plain);
    }
}
