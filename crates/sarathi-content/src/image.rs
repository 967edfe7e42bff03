//! Image asset reference resolution.
//!
//! Rich text blocks carry opaque asset references of the form
//! `image-{id}-{width}x{height}-{ext}`. This module parses those
//! references and turns them into CDN URLs.

use sarathi_core::CmsConfig;

/// A parsed image asset reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub asset_id: String,
    pub width: u32,
    pub height: u32,
    pub extension: String,
}

impl ImageRef {
    /// Parse an asset reference string.
    ///
    /// Returns `None` for anything that does not match the
    /// `image-{id}-{w}x{h}-{ext}` shape; callers skip such images rather
    /// than failing the whole page.
    #[must_use]
    pub fn parse(reference: &str) -> Option<Self> {
        let rest = reference.strip_prefix("image-")?;
        let (rest, extension) = rest.rsplit_once('-')?;
        let (asset_id, dimensions) = rest.rsplit_once('-')?;
        let (width, height) = dimensions.split_once('x')?;

        if asset_id.is_empty() || extension.is_empty() {
            return None;
        }

        Some(Self {
            asset_id: asset_id.to_string(),
            width: width.parse().ok()?,
            height: height.parse().ok()?,
            extension: extension.to_string(),
        })
    }

    /// Aspect ratio as width / height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Builds CDN URLs for image references against one project and dataset.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    #[must_use]
    pub fn new(config: &CmsConfig) -> Self {
        Self {
            project_id: config
                .project_id
                .clone()
                .unwrap_or_else(|| "placeholder-for-build".to_string()),
            dataset: config.dataset.clone(),
        }
    }

    /// Resolve an asset reference to a CDN URL, optionally constrained to
    /// a target display width.
    #[must_use]
    pub fn url_for(&self, reference: &str, width: Option<u32>) -> Option<String> {
        let image = ImageRef::parse(reference)?;
        let mut url = format!(
            "https://cdn.sanity.io/images/{project}/{dataset}/{id}-{w}x{h}.{ext}?auto=format",
            project = self.project_id,
            dataset = self.dataset,
            id = image.asset_id,
            w = image.width,
            h = image.height,
            ext = image.extension,
        );
        if let Some(width) = width {
            url.push_str(&format!("&w={width}"));
        }
        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new(&CmsConfig {
            project_id: Some("abc123xy".to_string()),
            dataset: "production".to_string(),
            api_version: "2024-01-01".to_string(),
            use_cdn: true,
        })
    }

    #[test]
    fn test_parse_reference() {
        let image = ImageRef::parse("image-a1b2c3d4-1200x630-png").unwrap();
        assert_eq!(image.asset_id, "a1b2c3d4");
        assert_eq!(image.width, 1200);
        assert_eq!(image.height, 630);
        assert_eq!(image.extension, "png");
    }

    #[test]
    fn test_parse_rejects_malformed_references() {
        assert!(ImageRef::parse("file-a1b2-pdf").is_none());
        assert!(ImageRef::parse("image-a1b2").is_none());
        assert!(ImageRef::parse("image-a1b2-12x34x56-jpg").is_none());
        assert!(ImageRef::parse("image-a1b2-wxh-jpg").is_none());
        assert!(ImageRef::parse("").is_none());
    }

    #[test]
    fn test_url_for_without_width() {
        let url = builder().url_for("image-a1b2c3d4-800x600-jpg", None).unwrap();
        assert_eq!(
            url,
            "https://cdn.sanity.io/images/abc123xy/production/a1b2c3d4-800x600.jpg?auto=format"
        );
    }

    #[test]
    fn test_url_for_with_width() {
        let url = builder()
            .url_for("image-a1b2c3d4-800x600-jpg", Some(400))
            .unwrap();
        assert!(url.ends_with("?auto=format&w=400"));
    }

    #[test]
    fn test_url_for_bad_reference_is_none() {
        assert!(builder().url_for("not-an-image", Some(400)).is_none());
    }

    #[test]
    fn test_aspect_ratio() {
        let image = ImageRef::parse("image-x-1600x800-webp").unwrap();
        assert!((image.aspect_ratio() - 2.0).abs() < f64::EPSILON);
    }
}
