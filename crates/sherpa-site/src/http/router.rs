//! Router construction and server host for the site bundle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{Router, http::Request, routing::get};
use sherpa_telemetry::{Metrics, build_sha};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{Span, info, warn};

use crate::config::SiteConfig;
use crate::error::{SiteError, SiteResult};
use crate::http::HEADER_REQUEST_ID;
use crate::http::health::{health, metrics};
use crate::http::shell::{ShellDocument, spa_shell};
use crate::http::state::SiteState;
use crate::http::telemetry::HttpMetricsLayer;

/// Axum router wrapper that hosts the compiled site.
pub struct SiteServer {
    router: Router,
}

impl SiteServer {
    /// Build the router for the configured dist directory.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Io`] when `index.html` cannot be read from the
    /// dist directory.
    pub fn new(config: &SiteConfig, telemetry: Metrics) -> SiteResult<Self> {
        let shell = ShellDocument::load(&config.dist_dir, config.api_base_url.as_deref())?;
        let state = SiteState {
            metrics: telemetry.clone(),
            shell: Arc::new(shell),
        };

        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get(HEADER_REQUEST_ID)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                tracing::info_span!(
                    "http.request",
                    method = %request.method(),
                    route = %request.uri().path(),
                    request_id = %request_id,
                    build_sha = %build_sha(),
                    status_code = tracing::field::Empty,
                    latency_ms = tracing::field::Empty
                )
            })
            .on_request(|_request: &Request<_>, _span: &Span| {})
            .on_response(
                |response: &axum::response::Response, latency: Duration, span: &Span| {
                    span.record("status_code", response.status().as_u16());
                    let latency_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
                    span.record("latency_ms", latency_ms);
                },
            );
        let layered = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(trace_layer)
            .layer(HttpMetricsLayer::new(telemetry));

        // Directory index handling stays off so `/` goes through the shell.
        let assets = ServeDir::new(&config.dist_dir)
            .append_index_html_on_directories(false)
            .fallback(get(spa_shell).with_state::<()>(state.clone()));

        let router = Router::new()
            .route("/healthz", get(health))
            .route("/metrics", get(metrics))
            .route("/", get(spa_shell))
            .route("/index.html", get(spa_shell))
            .fallback_service(assets)
            .layer(layered)
            .with_state(state);

        Ok(Self { router })
    }

    /// Hand out the configured router, e.g. for in-process testing.
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Bind to `addr` and serve until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener fails to bind or the server terminates
    /// unexpectedly.
    pub async fn serve(self, addr: SocketAddr) -> SiteResult<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| SiteError::Bind { addr, source })?;
        info!(%addr, "site host listening");
        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|source| SiteError::Serve { source })?;
        info!("site host stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "ctrl-c handler unavailable; running until killed");
        std::future::pending::<()>().await;
    }
}
