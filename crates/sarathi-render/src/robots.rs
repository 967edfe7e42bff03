//! Robots.txt generation.

use sarathi_core::Config;

/// Generate the robots.txt body. The studio mount is kept out of search
/// indexes; everything else is crawlable.
#[must_use]
pub fn generate(config: &Config) -> String {
    let mut body = String::from("User-agent: *\n");
    body.push_str("Disallow: /studio/\n");
    body.push_str(&format!("Sitemap: {}\n", config.url_for("/sitemap.xml")));
    body
}

#[cfg(test)]
mod tests {
    use sarathi_core::{CmsConfig, ServerConfig, SiteConfig};

    use super::*;

    #[test]
    fn test_robots_txt() {
        let config = Config {
            site: SiteConfig {
                title: "CareerSarathi".to_string(),
                base_url: "https://careersarathi.example".to_string(),
                description: None,
                organization: "CAREERSARATHI".to_string(),
            },
            cms: CmsConfig::default(),
            server: ServerConfig::default(),
        };

        let body = generate(&config);
        assert!(body.starts_with("User-agent: *\n"));
        assert!(body.contains("Disallow: /studio/\n"));
        assert!(body.contains("Sitemap: https://careersarathi.example/sitemap.xml\n"));
    }
}
