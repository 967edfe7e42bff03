//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Main configuration structure for the site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Headless CMS connection settings.
    #[serde(default)]
    pub cms: CmsConfig,

    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Base URL for the site (e.g., "https://careersarathi.com").
    pub base_url: String,

    /// Site description for meta tags.
    #[serde(default)]
    pub description: Option<String>,

    /// Organization name used in structured data.
    #[serde(default = "default_organization")]
    pub organization: String,
}

/// Headless CMS configuration.
///
/// The project id may be absent; the site still starts and renders empty
/// states until the CMS is connected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    /// Hosted project identifier.
    #[serde(default)]
    pub project_id: Option<String>,

    /// Dataset name within the project.
    #[serde(default = "default_dataset")]
    pub dataset: String,

    /// Query API version (date-stamped).
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Whether to query through the CDN edge.
    #[serde(default = "default_true")]
    pub use_cdn: bool,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under /static.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

// Default value functions
fn default_organization() -> String {
    "CAREERSARATHI".to_string()
}

fn default_dataset() -> String {
    "production".to_string()
}

fn default_api_version() -> String {
    "2024-01-01".to_string()
}

fn default_true() -> bool {
    true
}

fn default_port() -> u16 {
    3000
}

fn default_assets_dir() -> String {
    "static".to_string()
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            project_id: None,
            dataset: default_dataset(),
            api_version: default_api_version(),
            use_cdn: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration using the config crate for more flexibility.
    ///
    /// Environment variables prefixed with `SARATHI__` override file values,
    /// e.g. `SARATHI__CMS__PROJECT_ID`.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("SARATHI").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        // An absent project id is allowed: queries fail predictably at
        // request time and pages render their empty states.
        if self.cms.project_id.is_none() {
            tracing::warn!("cms.project_id not set; content queries will return no documents");
        }

        Ok(())
    }

    /// Whether the CMS connection is configured.
    #[must_use]
    pub fn is_cms_configured(&self) -> bool {
        self.cms
            .project_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }

    /// Get the full URL for a path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}
