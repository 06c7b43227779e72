#![forbid(unsafe_code)]
#![warn(
    unused,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! HTTP host for the Hotel Sherpa Soul single-page bundle.
//!
//! Serves the compiled assets, answers every client-side route with the
//! application shell, and injects the runtime rooms API base URL into it.

pub mod config;
pub mod error;
pub mod http;

pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};
pub use http::router::SiteServer;

use sherpa_telemetry::{LoggingConfig, Metrics, init_logging};
use tracing::info;

/// Load configuration, install logging and serve until shutdown.
///
/// # Errors
///
/// Returns an error when configuration is invalid, logging or metrics cannot
/// be initialised, the shell document is missing, or the listener fails.
pub async fn run() -> SiteResult<()> {
    let config = SiteConfig::from_env()?;
    let logging = LoggingConfig {
        level: &config.log_level,
        format: config.log_format,
        ..LoggingConfig::default()
    };
    init_logging(&logging).map_err(|source| SiteError::telemetry("init_logging", source))?;

    let metrics = Metrics::new().map_err(|source| SiteError::telemetry("metrics", source))?;
    let server = SiteServer::new(&config, metrics)?;
    info!(
        bind = %config.bind,
        dist = %config.dist_dir.display(),
        api_base = config.api_base_url.as_deref().unwrap_or(""),
        "starting site host"
    );
    server.serve(config.bind).await
}
