//! Page metadata resolution.

use sarathi_core::Config;

/// Resolved `<head>` metadata for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMeta {
    /// Full `<title>` text.
    pub title: String,

    /// Meta description, when one exists.
    pub description: Option<String>,

    /// Canonical URL.
    pub canonical_url: String,
}

impl PageMeta {
    /// Metadata for a document page. The SEO title wins over the document
    /// title when present; otherwise the document title gets the site
    /// suffix.
    #[must_use]
    pub fn for_document(
        config: &Config,
        title: &str,
        seo_title: Option<&str>,
        description: Option<&str>,
        path: &str,
    ) -> Self {
        let title = match seo_title {
            Some(seo) if !seo.is_empty() => seo.to_string(),
            _ => format!("{} - {}", title, config.site.title),
        };

        Self {
            title,
            description: description.map(str::to_string),
            canonical_url: config.url_for(path),
        }
    }

    /// Metadata for a static or listing page.
    #[must_use]
    pub fn for_page(config: &Config, title: &str, description: &str, path: &str) -> Self {
        Self {
            title: format!("{} - {}", title, config.site.title),
            description: Some(description.to_string()),
            canonical_url: config.url_for(path),
        }
    }
}
