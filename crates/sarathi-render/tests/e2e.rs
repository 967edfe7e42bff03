//! End-to-end rendering tests.
//!
//! Decode documents from store-shaped JSON and render complete pages,
//! the way the server does after a successful query.

use chrono::{TimeZone, Utc};
use sarathi_core::document::{ExamGuide, ExamGuideSummary, SlugEntry};
use sarathi_core::{CmsConfig, Config, ServerConfig, SiteConfig};
use sarathi_render::{PageRenderer, SitemapGenerator, robots};

fn config() -> Config {
    Config {
        site: SiteConfig {
            title: "CareerSarathi".to_string(),
            base_url: "https://careersarathi.example".to_string(),
            description: Some("Exam preparation guides.".to_string()),
            organization: "CAREERSARATHI".to_string(),
        },
        cms: CmsConfig {
            project_id: Some("abc123xy".to_string()),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            use_cdn: true,
        },
        server: ServerConfig::default(),
    }
}

const EXAM_GUIDE_JSON: &str = r#"{
    "_id": "e1",
    "title": "UPSC Civil Services",
    "slug": {"current": "upsc-cse"},
    "examType": "competitive",
    "category": "UPSC",
    "seoTitle": "UPSC CSE 2026: Complete Guide",
    "metaDescription": "Pattern, syllabus, and strategy in one place.",
    "overview": [
        {"_type": "block", "_key": "ov1", "children": [{"text": "The toughest exam in India."}]}
    ],
    "examPattern": [
        {"_type": "block", "_key": "pat1", "style": "h3", "children": [{"text": "Prelims"}]},
        {"_type": "block", "_key": "pat2", "children": [{"text": "Two objective papers."}]},
        {"_type": "block", "_key": "pat3", "listItem": "bullet", "children": [{"text": "GS Paper I"}]},
        {"_type": "block", "_key": "pat4", "listItem": "bullet", "children": [{"text": "CSAT"}]}
    ],
    "syllabus": [],
    "preparationStrategy": [
        {"_type": "image", "_key": "img1", "asset": {"_ref": "image-plan1-1200x630-png"}, "alt": "Study plan chart"}
    ],
    "studyPlan": [],
    "booksAndResources": [],
    "faqs": [
        {"question": "How many attempts?", "answer": "Six for general category."},
        {"question": "Negative marking?", "answer": "Yes, one third in prelims."},
        {"question": "Best optional?", "answer": "Pick what you can revise twice."}
    ],
    "_updatedAt": "2025-06-01T10:00:00Z"
}"#;

#[test]
fn test_exam_guide_page_from_store_json() {
    let guide: ExamGuide = serde_json::from_str(EXAM_GUIDE_JSON).expect("decode guide");
    let related: Vec<ExamGuideSummary> = serde_json::from_str(
        r#"[{"_id": "e2", "title": "SSC CGL", "slug": {"current": "ssc-cgl"}, "examType": "competitive"}]"#,
    )
    .expect("decode related");

    let html = PageRenderer::new(config())
        .exam_guide_page(&guide, &related)
        .expect("render page");

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>UPSC CSE 2026: Complete Guide</title>"));
    assert!(html.contains(
        r#"<link rel="canonical" href="https://careersarathi.example/exams/upsc-cse">"#
    ));
    // Heading anchors come from block keys.
    assert!(html.contains(r#"<h3 id="pat1">Prelims</h3>"#));
    // List run grouped into one ul.
    assert!(html.contains("<ul><li>GS Paper I</li><li>CSAT</li></ul>"));
    // Inline image resolved through the CDN with the project id.
    assert!(html.contains("https://cdn.sanity.io/images/abc123xy/production/plan1-1200x630.png"));
    assert!(html.contains(r#"alt="Study plan chart""#));
    // All three FAQ pairs in markup and in structured data.
    assert_eq!(html.matches("sarathi-faq-item").count(), 3);
    assert!(html.contains(r#""@type":"FAQPage""#));
    assert!(html.contains("/exams/ssc-cgl"));
}

#[test]
fn test_sitemap_counts_for_mixed_content() {
    let date = Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap();
    let slugs = |names: &[&str]| -> Vec<SlugEntry> {
        names
            .iter()
            .map(|name| SlugEntry {
                slug: (*name).to_string(),
                updated_at: date,
            })
            .collect()
    };

    let generator = SitemapGenerator::new(config());
    let entries = generator.build_entries(
        &slugs(&["upsc-cse", "ssc-cgl"]),
        &slugs(&["cbse-class-12"]),
        &slugs(&["post-a", "post-b", "post-c"]),
    );

    // 5 static routes plus exactly one entry per document.
    assert_eq!(entries.len(), 5 + 6);

    let xml = generator.render(&entries);
    assert!(xml.contains("<loc>https://careersarathi.example/exams/upsc-cse</loc>"));
    assert!(xml.contains("<loc>https://careersarathi.example/blog/post-c</loc>"));
    assert!(xml.contains("<lastmod>2025-06-01</lastmod>"));
}

#[test]
fn test_site_degrades_without_content() {
    let renderer = PageRenderer::new(config());

    let listing = renderer.exams_listing(&[], None).expect("render listing");
    assert!(listing.contains("coming soon"));

    let not_found = renderer
        .not_found_page("No exam guide with that address.")
        .expect("render 404");
    assert!(not_found.contains("Page not found"));

    let generator = SitemapGenerator::new(config());
    let entries = generator.build_entries(&[], &[], &[]);
    assert_eq!(entries.len(), 5);
}

#[test]
fn test_robots_references_sitemap() {
    let body = robots::generate(&config());
    assert!(body.contains("Sitemap: https://careersarathi.example/sitemap.xml"));
    assert!(body.contains("Disallow: /studio/"));
}
