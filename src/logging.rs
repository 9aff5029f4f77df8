//! Diagnostic logging. Off unless `IMGDIM_LOG` holds an `EnvFilter` directive.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "IMGDIM_LOG";

const DEFAULT_DIRECTIVE: &str = "off";

/// Builds the filter for `directive`, falling back to `off` when it is absent or invalid.
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber on stderr. Calling it again is a no-op.
pub fn init() {
    let directive = std::env::var(LOG_ENV).ok();
    // Fails only when a subscriber is already installed.
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .compact()
        .try_init()
        .ok();
}
