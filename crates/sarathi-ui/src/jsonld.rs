//! Structured data (JSON-LD) builders.
//!
//! Each builder returns a `serde_json::Value` ready to be serialized into
//! a `<script type="application/ld+json">` block.

use serde_json::{Value, json};

use crate::accordion::FaqItem;
use crate::breadcrumbs::Crumb;

/// FAQPage structured data from question/answer pairs.
#[must_use]
pub fn faq_page(items: &[FaqItem]) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": items.iter().map(|item| json!({
            "@type": "Question",
            "name": item.question,
            "acceptedAnswer": {
                "@type": "Answer",
                "text": item.answer,
            },
        })).collect::<Vec<_>>(),
    })
}

/// Article structured data for a guide or blog post detail page.
#[must_use]
pub fn article(
    headline: &str,
    description: Option<&str>,
    url: &str,
    published: Option<&str>,
    modified: &str,
    organization: &str,
) -> Value {
    let mut value = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": headline,
        "url": url,
        "dateModified": modified,
        "publisher": {
            "@type": "Organization",
            "name": organization,
        },
    });

    if let Some(description) = description {
        value["description"] = json!(description);
    }
    if let Some(published) = published {
        value["datePublished"] = json!(published);
    }

    value
}

/// CollectionPage structured data for a listing page.
#[must_use]
pub fn collection_page(name: &str, description: &str, url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "CollectionPage",
        "name": name,
        "description": description,
        "url": url,
    })
}

/// Organization structured data for the home page.
#[must_use]
pub fn organization(name: &str, url: &str, description: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": name,
        "url": url,
        "description": description,
    })
}

/// WebSite structured data for the home page.
#[must_use]
pub fn website(name: &str, url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "name": name,
        "url": url,
    })
}

/// BreadcrumbList structured data from a breadcrumb trail. Crumbs with an
/// empty URL (the current page) carry no item link.
#[must_use]
pub fn breadcrumb_list(crumbs: &[Crumb], base_url: &str) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": crumbs.iter().enumerate().map(|(i, crumb)| {
            let mut element = json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.label,
            });
            if !crumb.url.is_empty() {
                element["item"] = json!(format!("{base_url}{}", crumb.url));
            }
            element
        }).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faq_page_shape() {
        let items = vec![
            FaqItem::new("How many attempts?", "Six."),
            FaqItem::new("Is there negative marking?", "Yes, one third."),
        ];

        let value = faq_page(&items);
        assert_eq!(value["@type"], "FAQPage");
        assert_eq!(value["mainEntity"].as_array().unwrap().len(), 2);
        assert_eq!(value["mainEntity"][1]["acceptedAnswer"]["text"], "Yes, one third.");
    }

    #[test]
    fn test_article_with_optional_fields() {
        let value = article(
            "UPSC Civil Services Guide",
            Some("Complete preparation guide."),
            "https://careersarathi.example/exams/upsc-cse",
            None,
            "2025-06-01T10:00:00Z",
            "CAREERSARATHI",
        );

        assert_eq!(value["headline"], "UPSC Civil Services Guide");
        assert_eq!(value["publisher"]["name"], "CAREERSARATHI");
        assert!(value.get("datePublished").is_none());
        assert_eq!(value["description"], "Complete preparation guide.");
    }

    #[test]
    fn test_breadcrumb_list_positions_and_links() {
        let crumbs = vec![
            Crumb::new("Home", "/"),
            Crumb::new("Exams", "/exams"),
            Crumb::new("UPSC", ""),
        ];

        let value = breadcrumb_list(&crumbs, "https://careersarathi.example");
        let elements = value["itemListElement"].as_array().unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0]["position"], 1);
        assert_eq!(elements[1]["item"], "https://careersarathi.example/exams");
        assert!(elements[2].get("item").is_none());
    }

    #[test]
    fn test_website_shape() {
        let value = website("CareerSarathi", "https://careersarathi.example");
        assert_eq!(value["@type"], "WebSite");
    }
}
