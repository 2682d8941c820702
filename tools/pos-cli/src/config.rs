//! CLI configuration.

use anyhow::{Context, Result};
use pos_catalog::image::ImageOptions;
use serde::{Deserialize, Serialize};

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "POS_API_URL";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Product API location.
    #[serde(default)]
    pub api: ApiConfig,

    /// How image uploads are tagged.
    #[serde(default)]
    pub images: ImageConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
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

    /// Apply an API URL override (normally from `POS_API_URL`).
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }
}

/// Product API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the API server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the product resource under the base URL.
    #[serde(default = "default_products_path")]
    pub products_path: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5262/".to_string()
}

fn default_products_path() -> String {
    pos_catalog::api::DEFAULT_PRODUCTS_PATH.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            products_path: default_products_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Image upload settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageConfig {
    #[serde(default = "default_content_type")]
    pub content_type: String,

    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_content_type() -> String {
    ImageOptions::default().content_type
}

fn default_file_name() -> String {
    ImageOptions::default().file_name
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            content_type: default_content_type(),
            file_name: default_file_name(),
        }
    }
}

impl From<&ImageConfig> for ImageOptions {
    fn from(config: &ImageConfig) -> Self {
        ImageOptions {
            content_type: config.content_type.clone(),
            file_name: config.file_name.clone(),
        }
    }
}

/// Generate a default pos.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront admin configuration

[api]
base_url = "http://localhost:5262/"
products_path = "api/products"
timeout_secs = 30

[images]
content_type = "image/jpeg"
file_name = "image.jpg"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_matches_defaults() {
        let parsed: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let parsed: CliConfig = toml::from_str(
            r#"
[api]
base_url = "https://shop.example/"
"#,
        )
        .unwrap();
        assert_eq!(parsed.api.base_url, "https://shop.example/");
        assert_eq!(parsed.api.products_path, "api/products");
        assert_eq!(parsed.api.timeout_secs, 30);
        assert_eq!(parsed.images.file_name, "image.jpg");
    }

    #[test]
    fn test_api_url_override() {
        let config = CliConfig::default().with_api_url(Some("http://10.0.0.2:8080/".into()));
        assert_eq!(config.api.base_url, "http://10.0.0.2:8080/");

        let config = CliConfig::default().with_api_url(Some("  ".into()));
        assert_eq!(config.api.base_url, "http://localhost:5262/");
    }

    #[test]
    fn test_image_options_from_config() {
        let config = ImageConfig {
            content_type: "image/png".to_string(),
            file_name: "image.png".to_string(),
        };
        let options = ImageOptions::from(&config);
        assert_eq!(options.content_type, "image/png");
        assert_eq!(options.file_name, "image.png");
    }
}
