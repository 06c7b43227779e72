//! Prometheus-backed metrics for the site host.
//!
//! # Design
//! - Collector registration stays private; callers only see increment helpers.
//! - Route labels use matched patterns, never raw paths, to bound cardinality.

use std::sync::Arc;

use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};
use serde::Serialize;

use crate::error::{Result, TelemetryError};

/// Metrics registry shared by the site router.
#[derive(Clone)]
pub struct Metrics {
    inner: Arc<MetricsInner>,
}

struct MetricsInner {
    registry: Registry,
    http_requests_total: IntCounterVec,
    spa_fallback_total: IntCounter,
}

/// Point-in-time view of the counters, used by health reporting.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Client-route requests answered with `index.html`.
    pub spa_fallback_total: u64,
}

impl Metrics {
    /// Construct a registry with the standard collectors registered.
    ///
    /// # Errors
    ///
    /// Returns [`TelemetryError::MetricsRegister`] if a collector cannot be
    /// built or registered.
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total HTTP requests received"),
            &["route", "code"],
        )
        .map_err(|source| TelemetryError::MetricsRegister {
            name: "http_requests_total",
            source,
        })?;
        let spa_fallback_total = IntCounter::with_opts(Opts::new(
            "spa_fallback_total",
            "Client-side routes answered with the application shell",
        ))
        .map_err(|source| TelemetryError::MetricsRegister {
            name: "spa_fallback_total",
            source,
        })?;

        registry
            .register(Box::new(http_requests_total.clone()))
            .map_err(|source| TelemetryError::MetricsRegister {
                name: "http_requests_total",
                source,
            })?;
        registry
            .register(Box::new(spa_fallback_total.clone()))
            .map_err(|source| TelemetryError::MetricsRegister {
                name: "spa_fallback_total",
                source,
            })?;

        Ok(Self {
            inner: Arc::new(MetricsInner {
                registry,
                http_requests_total,
                spa_fallback_total,
            }),
        })
    }

    /// Increment the HTTP request counter for the given route and status code.
    pub fn inc_http_request(&self, route: &str, status: u16) {
        self.inner
            .http_requests_total
            .with_label_values(&[route, &status.to_string()])
            .inc();
    }

    /// Count a client-route request served with the application shell.
    pub fn inc_spa_fallback(&self) {
        self.inner.spa_fallback_total.inc();
    }

    /// Render the registry in the Prometheus text exposition format.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the output is not UTF-8.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        let families = self.inner.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&families, &mut buffer)
            .map_err(|source| TelemetryError::MetricsEncode { source })?;
        String::from_utf8(buffer).map_err(|source| TelemetryError::MetricsUtf8 { source })
    }

    /// Take a snapshot of the counters.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            spa_fallback_total: self.inner.spa_fallback_total.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_registered_counters() -> Result<()> {
        let metrics = Metrics::new()?;
        metrics.inc_http_request("/healthz", 200);
        metrics.inc_spa_fallback();
        metrics.inc_spa_fallback();

        let rendered = metrics.render()?;
        assert!(rendered.contains("http_requests_total"));
        assert!(rendered.contains("route=\"/healthz\""));
        assert!(rendered.contains("spa_fallback_total 2"));
        assert_eq!(metrics.snapshot().spa_fallback_total, 2);
        Ok(())
    }
}
