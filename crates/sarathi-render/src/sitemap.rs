//! Sitemap generation.
//!
//! Generates the XML sitemap from the static route table plus every
//! published document.

use chrono::{DateTime, Utc};
use sarathi_core::Config;
use sarathi_core::document::SlugEntry;
use tracing::debug;

/// Change frequency for sitemap entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// A sitemap URL entry.
#[derive(Debug, Clone)]
pub struct SitemapEntry {
    /// URL location.
    pub loc: String,

    /// Last modification date.
    pub lastmod: DateTime<Utc>,

    /// Change frequency.
    pub changefreq: ChangeFreq,

    /// Priority (0.0 to 1.0).
    pub priority: f32,
}

/// Static route table: path, change frequency, priority.
const STATIC_ROUTES: [(&str, ChangeFreq, f32); 5] = [
    ("/", ChangeFreq::Daily, 1.0),
    ("/exams", ChangeFreq::Daily, 0.9),
    ("/board-exams", ChangeFreq::Weekly, 0.8),
    ("/resources", ChangeFreq::Weekly, 0.7),
    ("/blog", ChangeFreq::Daily, 0.8),
];

/// Sitemap generator.
#[derive(Debug)]
pub struct SitemapGenerator {
    config: Config,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the full entry list: static routes first, then every
    /// document. The per-kind slug lists may be empty when the store is
    /// unreachable; the static routes are always present.
    #[must_use]
    pub fn build_entries(
        &self,
        exams: &[SlugEntry],
        boards: &[SlugEntry],
        posts: &[SlugEntry],
    ) -> Vec<SitemapEntry> {
        let now = Utc::now();
        let mut entries: Vec<SitemapEntry> = STATIC_ROUTES
            .iter()
            .map(|(path, changefreq, priority)| SitemapEntry {
                loc: self.config.url_for(path),
                lastmod: now,
                changefreq: *changefreq,
                priority: *priority,
            })
            .collect();

        entries.extend(self.document_entries("/exams", exams, 0.8));
        entries.extend(self.document_entries("/board-exams", boards, 0.7));
        entries.extend(self.document_entries("/blog", posts, 0.6));

        debug!(count = entries.len(), "built sitemap entries");
        entries
    }

    fn document_entries<'a>(
        &'a self,
        prefix: &'a str,
        documents: &'a [SlugEntry],
        priority: f32,
    ) -> impl Iterator<Item = SitemapEntry> + 'a {
        documents.iter().map(move |doc| SitemapEntry {
            loc: self.config.url_for(&format!("{prefix}/{}", doc.slug)),
            lastmod: doc.updated_at,
            changefreq: ChangeFreq::Weekly,
            priority,
        })
    }

    /// Render entries as sitemap XML.
    #[must_use]
    pub fn render(&self, entries: &[SitemapEntry]) -> String {
        let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
        xml.push('\n');

        for entry in entries {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                entry.lastmod.format("%Y-%m-%d")
            ));
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                entry.changefreq.as_str()
            ));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use sarathi_core::{CmsConfig, ServerConfig, SiteConfig};

    use super::*;

    fn generator() -> SitemapGenerator {
        SitemapGenerator::new(Config {
            site: SiteConfig {
                title: "CareerSarathi".to_string(),
                base_url: "https://careersarathi.example".to_string(),
                description: None,
                organization: "CAREERSARATHI".to_string(),
            },
            cms: CmsConfig::default(),
            server: ServerConfig::default(),
        })
    }

    fn slug_entry(slug: &str) -> SlugEntry {
        SlugEntry {
            slug: slug.to_string(),
            updated_at: Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_static_routes_always_present() {
        let entries = generator().build_entries(&[], &[], &[]);
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].loc, "https://careersarathi.example");
        assert!((entries[0].priority - 1.0).abs() < f32::EPSILON);
        assert_eq!(entries[1].loc, "https://careersarathi.example/exams");
        assert_eq!(entries[1].changefreq, ChangeFreq::Daily);
    }

    #[test]
    fn test_document_entries_follow_static_routes() {
        let entries = generator().build_entries(
            &[slug_entry("upsc-cse"), slug_entry("ssc-cgl")],
            &[slug_entry("cbse-class-12")],
            &[slug_entry("beat-procrastination"), slug_entry("study-plan"), slug_entry("mistakes")],
        );

        assert_eq!(entries.len(), 5 + 6);

        let exam = entries
            .iter()
            .find(|e| e.loc.ends_with("/exams/upsc-cse"))
            .unwrap();
        assert!((exam.priority - 0.8).abs() < f32::EPSILON);
        assert_eq!(exam.changefreq, ChangeFreq::Weekly);

        let board = entries
            .iter()
            .find(|e| e.loc.ends_with("/board-exams/cbse-class-12"))
            .unwrap();
        assert!((board.priority - 0.7).abs() < f32::EPSILON);

        let post = entries
            .iter()
            .find(|e| e.loc.ends_with("/blog/study-plan"))
            .unwrap();
        assert!((post.priority - 0.6).abs() < f32::EPSILON);
    }

    #[test]
    fn test_document_lastmod_comes_from_updated_at() {
        let entries = generator().build_entries(&[slug_entry("upsc-cse")], &[], &[]);
        let xml = generator().render(&entries);
        assert!(xml.contains("<lastmod>2025-06-01</lastmod>"));
    }

    #[test]
    fn test_render_xml_shape() {
        let entries = generator().build_entries(&[], &[], &[]);
        let xml = generator().render(&entries);

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
        assert!(xml.contains("<priority>0.9</priority>"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a&b<c"), "a&amp;b&lt;c");
    }
}
