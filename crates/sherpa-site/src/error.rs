//! # Design
//!
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias for site host operations.
pub type SiteResult<T> = Result<T, SiteError>;

/// Site host error type.
#[derive(Debug, Error)]
pub enum SiteError {
    /// Configuration values were invalid.
    #[error("invalid configuration")]
    InvalidConfig {
        /// Variable name that failed validation.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
        /// Offending value, when one was supplied.
        value: Option<String>,
    },
    /// Filesystem operations failed.
    #[error("io operation failed")]
    Io {
        /// Operation identifier.
        operation: &'static str,
        /// Path involved in the failure.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: sherpa_telemetry::TelemetryError,
    },
    /// Binding the listener failed.
    #[error("failed to bind site listener")]
    Bind {
        /// Address attempted.
        addr: SocketAddr,
        /// Source IO error.
        source: io::Error,
    },
    /// The server terminated with an error.
    #[error("site server terminated unexpectedly")]
    Serve {
        /// Source IO error.
        source: io::Error,
    },
}

impl SiteError {
    pub(crate) const fn telemetry(
        operation: &'static str,
        source: sherpa_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }

    pub(crate) const fn io(operation: &'static str, path: PathBuf, source: io::Error) -> Self {
        Self::Io {
            operation,
            path,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn helpers_build_variants_with_sources() {
        let io_err = SiteError::io(
            "read_shell",
            PathBuf::from("dist/index.html"),
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(io_err, SiteError::Io { operation: "read_shell", .. }));
        assert_eq!(io_err.to_string(), "io operation failed");
        assert!(io_err.source().is_some());

        let invalid = SiteError::InvalidConfig {
            field: "SHERPA_SITE_BIND",
            reason: "not_a_socket_address",
            value: None,
        };
        assert!(invalid.source().is_none());
    }
}
