//! Application configuration.
//!
//! Sources, later ones overriding earlier ones:
//! 1. built-in defaults
//! 2. the YAML file given with `--config`
//! 3. environment variables prefixed `REPOCREDS__`, with `__` separating
//!    nested keys (`REPOCREDS__LOGGING__LEVEL=debug`)

use std::path::Path;

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use repocreds::RepoCredsConfig;
use serde::Deserialize;
use static_authz_plugin::StaticAuthZPluginConfig;
use static_repocreds_plugin::StaticRepoCredsPluginConfig;

pub const ENV_PREFIX: &str = "REPOCREDS__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub repocreds: RepoCredsConfig,
    pub authz: StaticAuthZPluginConfig,
    pub credentials: StaticRepoCredsPluginConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            format: LogFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Load configuration from defaults, an optional YAML file and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Fails if `path` does not exist or if any source holds a value that
    /// does not fit the schema.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            anyhow::ensure!(
                path.is_file(),
                "config file not found: {}",
                path.display()
            );
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }
}
