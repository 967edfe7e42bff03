//! Breadcrumb trails.

use serde::{Deserialize, Serialize};

/// One breadcrumb step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Crumb {
    /// Display label.
    pub label: String,

    /// Link URL. Empty for the current page.
    pub url: String,
}

impl Crumb {
    /// Create a new breadcrumb.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Build the trail for a page: Home, then the section, then the page
/// itself.
#[must_use]
pub fn trail_for(section_label: &str, section_url: &str, page_title: &str) -> Vec<Crumb> {
    vec![
        Crumb::new("Home", "/"),
        Crumb::new(section_label, section_url),
        Crumb::new(page_title, ""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crumb_creation() {
        let crumb = Crumb::new("Exams", "/exams");
        assert_eq!(crumb.label, "Exams");
        assert_eq!(crumb.url, "/exams");
    }

    #[test]
    fn test_trail_shape() {
        let trail = trail_for("Exams", "/exams", "UPSC Civil Services");
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[0].label, "Home");
        assert_eq!(trail[1].url, "/exams");
        assert_eq!(trail[2].label, "UPSC Civil Services");
        assert!(trail[2].url.is_empty());
    }
}
