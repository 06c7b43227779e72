//! Runtime configuration of the front-end.

/// Meta tag the site host injects with the rooms API base URL.
pub const API_BASE_META: &str = "sherpa-api-base";
/// Rooms endpoint, relative to the API base URL.
pub const ROOMS_PATH: &str = "/api/rooms";

/// Resolved front-end configuration.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SiteConfig {
    /// Base URL of the rooms API without a trailing slash; empty means same origin.
    pub api_base_url: String,
}

impl SiteConfig {
    /// Pick the API base from the injected meta value, then the build-time
    /// value, then same origin. Blank values are skipped.
    #[must_use]
    pub fn resolve(meta: Option<&str>, build_time: Option<&str>) -> Self {
        let api_base_url = [meta, build_time]
            .into_iter()
            .flatten()
            .map(|value| value.trim().trim_end_matches('/'))
            .find(|value| !value.is_empty())
            .unwrap_or_default()
            .to_string();
        Self { api_base_url }
    }

    /// Full URL of the rooms endpoint.
    #[must_use]
    pub fn rooms_url(&self) -> String {
        format!("{}{ROOMS_PATH}", self.api_base_url)
    }
}
