//! Rooms catalog HTTP client.

use gloo::console;
use gloo_net::http::Request;
use sherpa_api_models::{Room, decode_rooms_payload};

use crate::core::catalog::CatalogError;
use crate::core::config::SiteConfig;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    rooms_url: String,
}

impl ApiClient {
    pub(crate) fn new(config: &SiteConfig) -> Self {
        Self {
            rooms_url: config.rooms_url(),
        }
    }

    /// One GET against the rooms endpoint, validated at this boundary.
    pub(crate) async fn fetch_rooms(&self) -> Result<Vec<Room>, CatalogError> {
        let response = Request::get(&self.rooms_url)
            .send()
            .await
            .map_err(|err| network(err.to_string()))?;
        if !response.ok() {
            return Err(network(format!("unexpected status {}", response.status())));
        }
        let body = response
            .text()
            .await
            .map_err(|err| network(err.to_string()))?;
        let payload = decode_rooms_payload(&body).map_err(|err| network(err.to_string()))?;
        if payload.rejected > 0 {
            console::warn!(
                "skipped malformed room records",
                payload.rejected.to_string()
            );
        }
        Ok(payload.rooms)
    }
}

const fn network(detail: String) -> CatalogError {
    CatalogError::Network { detail }
}
