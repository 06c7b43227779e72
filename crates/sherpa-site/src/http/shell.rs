//! Application shell document served for client-side routes.

use std::path::Path;

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::{SiteError, SiteResult};
use crate::http::state::SiteState;

/// Placeholder in `index.html` replaced with the runtime config tag.
pub(crate) const CONFIG_MARKER: &str = "<!-- sherpa:config -->";
/// Name of the meta tag the UI reads its rooms API base URL from.
pub(crate) const API_BASE_META: &str = "sherpa-api-base";

/// Rendered `index.html` with runtime configuration applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ShellDocument {
    html: String,
}

impl ShellDocument {
    pub(crate) fn load(dist_dir: &Path, api_base_url: Option<&str>) -> SiteResult<Self> {
        let path = dist_dir.join("index.html");
        let template = std::fs::read_to_string(&path)
            .map_err(|source| SiteError::io("read_shell", path.clone(), source))?;
        Ok(Self::render(&template, api_base_url))
    }

    pub(crate) fn render(template: &str, api_base_url: Option<&str>) -> Self {
        let html = match api_base_url {
            Some(base) => {
                let tag = format!(
                    r#"<meta name="{API_BASE_META}" content="{}">"#,
                    escape_attribute(base)
                );
                template.replacen(CONFIG_MARKER, &tag, 1)
            }
            None => template.to_string(),
        };
        Self { html }
    }

    pub(crate) fn html(&self) -> &str {
        &self.html
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Answer a client-side route with the shell so the router in the page can
/// resolve it.
pub(crate) async fn spa_shell(State(state): State<SiteState>) -> Response {
    state.metrics.inc_spa_fallback();
    debug!("serving application shell");
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        state.shell.html().to_string(),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "<head><!-- sherpa:config --><title>x</title></head>";

    #[test]
    fn render_injects_meta_tag_in_place_of_marker() {
        let doc = ShellDocument::render(TEMPLATE, Some("https://rooms.example.com"));
        assert_eq!(
            doc.html(),
            "<head><meta name=\"sherpa-api-base\" content=\"https://rooms.example.com\"><title>x</title></head>"
        );
    }

    #[test]
    fn render_without_base_keeps_template() {
        let doc = ShellDocument::render(TEMPLATE, None);
        assert_eq!(doc.html(), TEMPLATE);
    }

    #[test]
    fn attribute_values_are_escaped() {
        assert_eq!(escape_attribute("a&b\"<>"), "a&amp;b&quot;&lt;&gt;");
    }

    #[test]
    fn load_reports_missing_shell() {
        let missing = Path::new("/nonexistent/sherpa-dist");
        assert!(matches!(
            ShellDocument::load(missing, None),
            Err(SiteError::Io { operation: "read_shell", .. })
        ));
    }
}
