//! Application configuration management.

use crate::Cli;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The main application configuration that composes all component configs
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Web server configuration (bind address, docs)
    #[serde(default)]
    pub server: tix_axum::config::AxumConfig,

    /// Database configuration (file path, pool size)
    #[serde(default)]
    pub database: tix_sqlite::config::SqliteConfig,

    /// Catalog file applied on startup
    #[serde(default)]
    pub seed: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Command-line flags (highest priority)
    /// 2. Environment variables
    /// 3. Config file given by the CLI
    /// 4. Default values (lowest priority)
    ///
    /// Environment variables are mapped using the pattern
    /// `APP_<SECTION>__<KEY>` to `<section>.<key>`, e.g.
    /// `APP_DATABASE__DATABASE_PATH=/data/tickets.db`.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = &cli.config {
            anyhow::ensure!(
                path.exists(),
                "Config file {} does not exist",
                path.display()
            );
            config = config.add_source(config::File::from(path.as_path()));
        }

        // APP_CONFIG, APP_SECRET and APP_SEED are consumed by clap
        config = config
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option(
                "seed",
                cli.seed
                    .as_ref()
                    .map(|path| path.to_string_lossy().into_owned()),
            )?;

        config.build()?.try_deserialize().map_err(Into::into)
    }
}
