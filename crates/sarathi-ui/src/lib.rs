//! CareerSarathi UI Primitives
//!
//! Widget state and structured-data builders shared by the page
//! renderers. The pages themselves are server-rendered; browser behavior
//! (accordion transitions, scroll-synced outline highlight) ships as the
//! base template's inline script and follows the state machines defined
//! here.
//!
//! # Modules
//!
//! - [`accordion`] - FAQ accordion state ([`AccordionState`], [`FaqItem`])
//! - [`toc`] - Table of contents entries ([`TocEntry`])
//! - [`breadcrumbs`] - Breadcrumb trails ([`Crumb`], [`trail_for`])
//! - [`jsonld`] - schema.org JSON-LD builders

pub mod accordion;
pub mod breadcrumbs;
pub mod jsonld;
pub mod toc;

pub use accordion::{AccordionState, FaqItem};
pub use breadcrumbs::{Crumb, trail_for};
pub use toc::TocEntry;
