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

//! Binary entrypoint that hosts the compiled site bundle.

use sherpa_site::{SiteResult, run};

/// Loads configuration from the environment and serves until Ctrl-C.
#[tokio::main]
async fn main() -> SiteResult<()> {
    run().await
}
