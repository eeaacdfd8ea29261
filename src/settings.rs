// src/settings.rs
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

/// Runtime settings. Sources, lowest precedence first:
/// built-in defaults, optional `stays.toml`, `STAYS_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub addr: String,
    pub max_workers: usize,
    pub log_filter: String,
    /// Stay length used by the detail page's booking estimate.
    pub nights: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            max_workers: 8,
            log_filter: "info".to_string(),
            nights: 5,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Self::load_from("stays")
    }

    /// `file_stem` is resolved by the `config` crate (e.g. `stays` -> `stays.toml`).
    pub fn load_from(file_stem: &str) -> Result<Self> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("addr", defaults.addr)?
            .set_default("max_workers", defaults.max_workers as u64)?
            .set_default("log_filter", defaults.log_filter)?
            .set_default("nights", u64::from(defaults.nights))?
            .add_source(File::with_name(file_stem).required(false))
            .add_source(Environment::with_prefix("STAYS"))
            .build()
            .context("Failed to build configuration")?;

        let cfg: AppConfig = settings
            .try_deserialize()
            .context("Failed to parse configuration")?;

        if cfg.max_workers == 0 {
            anyhow::bail!("max_workers must be at least 1");
        }

        Ok(cfg)
    }
}
