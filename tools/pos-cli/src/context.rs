//! CLI execution context.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use pos_catalog::image::ImageOptions;
use pos_catalog::HttpProductGateway;
use pos_data::{FetchClient, ReqwestTransport};
use tracing::debug;

use crate::config::{CliConfig, API_URL_ENV};
use crate::output::Output;

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

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };
        let config = config.with_api_url(std::env::var(API_URL_ENV).ok());
        debug!(base_url = %config.api.base_url, "configuration loaded");

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let config_names = ["pos.toml", ".pos.toml", "pos.json"];

        let mut current = start.to_path_buf();
        loop {
            for name in &config_names {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Product gateway for the configured API.
    pub fn gateway(&self) -> Result<HttpProductGateway> {
        let transport =
            ReqwestTransport::with_timeout(Duration::from_secs(self.config.api.timeout_secs))
                .context("Failed to build HTTP client")?;
        let client = FetchClient::with_transport(transport)
            .with_base_url(self.config.api.base_url.clone())
            .with_default_header("Accept", "application/json");
        Ok(HttpProductGateway::with_path(
            client,
            &self.config.api.products_path,
        ))
    }

    pub fn image_options(&self) -> ImageOptions {
        ImageOptions::from(&self.config.images)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Default location for a new config file.
    pub fn default_config_path(&self) -> PathBuf {
        self.cwd.join("pos.toml")
    }
}
