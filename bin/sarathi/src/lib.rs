//! CareerSarathi CLI Library
//!
//! Core functionality for the CareerSarathi server CLI. Used by the
//! binary entry point while also exposing public APIs for documentation
//! and integration purposes.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, check)
//! - [`server`] - The HTTP server: routes, state, and handlers

pub mod cmd;
pub mod server;

// Re-export core types for convenience
pub use sarathi_content::ContentClient;
pub use sarathi_core::Config;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// sarathi::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
