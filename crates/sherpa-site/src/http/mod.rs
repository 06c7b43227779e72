//! HTTP surface of the site host.

pub mod router;

pub(crate) mod health;
pub(crate) mod shell;
pub(crate) mod state;
pub(crate) mod telemetry;

/// Header carrying the per-request identifier.
pub const HEADER_REQUEST_ID: &str = "x-request-id";
