//! docsite CLI Library
//!
//! Command implementations for the docsite binary, exposed as a library for
//! documentation and integration purposes.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, check, tree)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use docsite::cmd;
//!
//! // Build the static site
//! cmd::build::run(Path::new("docsite.toml"), Path::new("build"), None).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use docsite_core::{Config, Site};
pub use docsite_generator::{BuildStats, Builder};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// docsite::init_tracing(2); // Enable DEBUG level logging
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
        .with(tracing_subscriber::fmt::layer().with_target(verbose > 1))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
