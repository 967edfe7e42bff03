//! Check command - validate configuration and probe the content store.

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use sarathi_content::{ContentClient, queries};
use sarathi_core::Config;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the configuration and, when a project id is set, probes the
/// content store for reachability.
pub async fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    if let Some(ref cfg) = config {
        println!("\nChecking configuration values...");
        check_config_values(cfg, &mut result);

        println!("\nChecking content store...");
        check_content_store(cfg, &mut result).await;
    }

    // Print summary
    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if !config.site.base_url.starts_with("http") {
        result.add_warning("site.base_url should start with http:// or https://");
    }

    if config.site.base_url.ends_with('/') {
        result.add_warning("site.base_url should not have a trailing slash");
    }

    if config.site.description.is_none() {
        result.add_warning("site.description is not set; pages fall back to a generic one");
    }

    let assets = Path::new(&config.server.assets_dir);
    if assets.exists() && !assets.is_dir() {
        result.add_error(format!(
            "Assets path exists but is not a directory: {}",
            config.server.assets_dir
        ));
    }

    println!("  ✓ Configuration values checked");
}

/// Probe the content store when a project id is configured.
async fn check_content_store(config: &Config, result: &mut ValidationResult) {
    if !config.is_cms_configured() {
        result.add_warning(
            "cms.project_id not set; the site will serve empty states until connected",
        );
        println!("  ⚠ Content store not configured, skipping probe");
        return;
    }

    let client = ContentClient::new(&config.cms);
    match queries::probe(&client).await {
        Ok(count) => {
            println!("  ✓ Content store reachable ({count} exam guides published)");
            if count == 0 {
                result.add_warning("Content store reachable but holds no exam guides yet");
            }
        }
        Err(e) => {
            result.add_error(format!("Content store unreachable: {e}"));
            println!("  ✗ Content store unreachable: {e}");
        }
    }
}
