//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use vinyl_commerce::catalog::Catalog;
use vinyl_commerce::storefront::Storefront;
use vinyl_commerce::SessionId;
use vinyl_observability::StructuredLogger;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["vinyl.toml", ".vinyl.toml", "vinyl.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => match Self::find_config(&cwd) {
                Some(Ok(config)) => config,
                Some(Err(err)) => {
                    output.warn(&format!("Using default settings: {:#}", err));
                    CliConfig::default()
                }
                None => CliConfig::default(),
            },
        };

        Ok(Self { config, output, cwd })
    }

    /// Find the nearest config file in the directory tree and load it.
    fn find_config(start: &Path) -> Option<Result<CliConfig>> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    let path = config_path.to_string_lossy();
                    return Some(CliConfig::load(&path));
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the configured catalog, or the built-in one when no path is set.
    pub fn catalog(&self) -> Result<Catalog> {
        let Some(path) = &self.config.catalog.path else {
            return Ok(Catalog::vinyl_shop());
        };

        let path = self.resolve_path(path);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        let currency = self.config.store.currency;

        let catalog = if path.extension().is_some_and(|e| e == "toml") {
            Catalog::from_toml(&content, currency)
        } else {
            Catalog::from_json(&content, currency)
        };

        catalog.with_context(|| format!("Invalid catalog: {}", path.display()))
    }

    /// Start a storefront session over the configured catalog.
    pub fn storefront(&self) -> Result<Storefront> {
        let shop = Storefront::new(self.catalog()?)
            .with_empty_query_policy(self.config.search.empty_query);
        self.output.debug(&format!(
            "Session {} over {} records",
            shop.session_id(),
            shop.catalog().len()
        ));
        Ok(shop)
    }

    /// Session logger configured from `[logging]`.
    pub fn logger(&self, session_id: &SessionId) -> StructuredLogger {
        StructuredLogger::new(session_id.clone())
            .with_min_level(self.config.logging.level)
            .with_format(self.config.logging.format)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
