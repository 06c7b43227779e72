//! Shared state handed to every handler.

use std::sync::Arc;

use sherpa_telemetry::Metrics;

use crate::http::shell::ShellDocument;

#[derive(Clone)]
pub(crate) struct SiteState {
    pub(crate) metrics: Metrics,
    pub(crate) shell: Arc<ShellDocument>,
}
