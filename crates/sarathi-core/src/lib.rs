//! CareerSarathi Core Library
//!
//! Core types, configuration, and the CMS content model for the
//! CareerSarathi website.

pub mod config;
pub mod document;
pub mod error;
pub mod richtext;
pub mod schema;

pub use config::{CmsConfig, Config, ServerConfig, SiteConfig};
pub use document::{
    BlogCategory, BlogPost, BlogPostSummary, Board, BoardClass, BoardExam, BoardExamSummary,
    ExamGuide, ExamGuideSummary, ExamType, Faq, Slug, SlugEntry, SubjectSection,
};
pub use error::{CoreError, Result};
pub use richtext::{AssetRef, ContentBlock, ImageBlock, ListKind, Span, TextBlock};
