//! CareerSarathi Rendering
//!
//! Turns store documents into complete HTML pages: the template system,
//! rich text to HTML, page renderers, sitemap, and robots.txt.

pub mod meta;
pub mod pages;
pub mod richtext;
pub mod robots;
pub mod sitemap;
pub mod template;

pub use meta::PageMeta;
pub use pages::PageRenderer;
pub use richtext::{heading_outline, render_blocks};
pub use sitemap::{ChangeFreq, SitemapEntry, SitemapGenerator};
pub use template::{Template, TemplateContext, TemplateError, TemplateRegistry};
