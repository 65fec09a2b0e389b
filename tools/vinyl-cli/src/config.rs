//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vinyl_commerce::search::EmptyQueryPolicy;
use vinyl_commerce::Currency;
use vinyl_observability::{LogFormat, LogLevel};

/// Contents of `vinyl.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Shop presentation settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Search behaviour.
    #[serde(default)]
    pub search: SearchConfig,

    /// Session log settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse config text; `path` only decides between JSON and TOML.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }
}

/// Shop presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Name shown in headers.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Currency used for the built-in catalog and catalogs without one.
    #[serde(default)]
    pub currency: Currency,
}

fn default_store_name() -> String {
    "Vinyl Store".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency: Currency::default(),
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON or TOML catalog file. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Search behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// What an empty search box shows: "hide" or "all".
    #[serde(default)]
    pub empty_query: EmptyQueryPolicy,
}

/// Session log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level written to the session log.
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// "json" or "human".
    #[serde(default = "default_log_format")]
    pub format: LogFormat,

    /// Whether the session log is written at all.
    #[serde(default)]
    pub enabled: bool,
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

fn default_log_format() -> LogFormat {
    LogFormat::Human
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            enabled: false,
        }
    }
}

/// Generate a default vinyl.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Vinyl storefront configuration

[store]
name = "{name}"
currency = "RUB"

[catalog]
# path = "catalog.json"

[search]
# "hide" shows nothing until something is typed, "all" lists the whole catalog
empty_query = "hide"

[logging]
enabled = false
level = "info"
format = "human"
"#,
        name = name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let content = generate_default_config("Groove Shop");
        let config = CliConfig::parse("vinyl.toml", &content).unwrap();
        assert_eq!(config.store.name, "Groove Shop");
        assert_eq!(config.store.currency, Currency::RUB);
        assert_eq!(config.search.empty_query, EmptyQueryPolicy::Hide);
        assert!(config.catalog.path.is_none());
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = CliConfig::parse("vinyl.toml", "").unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_overrides() {
        let toml = r#"
[store]
currency = "EUR"

[catalog]
path = "records.toml"

[search]
empty_query = "all"

[logging]
enabled = true
level = "debug"
format = "json"
"#;
        let config = CliConfig::parse("vinyl.toml", toml).unwrap();
        assert_eq!(config.store.currency, Currency::EUR);
        assert_eq!(config.catalog.path.as_deref(), Some("records.toml"));
        assert_eq!(config.search.empty_query, EmptyQueryPolicy::ShowAll);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_json_config() {
        let config = CliConfig::parse("vinyl.json", r#"{"store": {"name": "JSON Shop"}}"#).unwrap();
        assert_eq!(config.store.name, "JSON Shop");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vinyl.toml");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.search.empty_query = EmptyQueryPolicy::ShowAll;
        config.save(path).unwrap();

        assert_eq!(CliConfig::load(path).unwrap(), config);
    }
}
