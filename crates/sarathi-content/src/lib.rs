//! CareerSarathi Content Client
//!
//! Remote content store access: a query client, typed read operations,
//! and image asset URL resolution.

pub mod client;
pub mod error;
pub mod image;
pub mod queries;

pub use client::ContentClient;
pub use error::{ContentError, Result};
pub use image::{ImageRef, ImageUrlBuilder};
pub use queries::FeaturedContent;
