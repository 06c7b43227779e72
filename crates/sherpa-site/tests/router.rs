//! Drives the site router in-process against a fixture dist directory.

use std::fs;

use anyhow::Result;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use sherpa_site::{SiteConfig, SiteServer};
use sherpa_telemetry::{LogFormat, Metrics};
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX: &str = "<!doctype html><html><head><!-- sherpa:config --></head><body><div id=\"root\"></div></body></html>";

fn fixture(api_base_url: Option<&str>) -> Result<(Router, TempDir)> {
    let dist = tempfile::tempdir()?;
    fs::write(dist.path().join("index.html"), INDEX)?;
    fs::create_dir_all(dist.path().join("assets"))?;
    fs::write(dist.path().join("assets/site.css"), "body { margin: 0; }")?;

    let config = SiteConfig {
        bind: "127.0.0.1:0".parse()?,
        dist_dir: dist.path().to_path_buf(),
        api_base_url: api_base_url.map(str::to_string),
        log_level: "info".to_string(),
        log_format: LogFormat::Pretty,
    };
    let server = SiteServer::new(&config, Metrics::new()?)?;
    Ok((server.into_router(), dist))
}

async fn get(router: Router, uri: &str) -> Result<(StatusCode, String)> {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty())?)
        .await?;
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, String::from_utf8(body.to_vec())?))
}

#[tokio::test]
async fn client_routes_are_answered_with_the_shell() -> Result<()> {
    let (router, _dist) = fixture(Some("https://rooms.example.com"))?;
    for uri in ["/", "/ar/room/3", "/zh/gallery", "/rooms", "/no/such/page"] {
        let (status, body) = get(router.clone(), uri).await?;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(
            body.contains(r#"<meta name="sherpa-api-base" content="https://rooms.example.com">"#),
            "{uri} did not receive the injected shell"
        );
        assert!(!body.contains("sherpa:config"));
    }
    Ok(())
}

#[tokio::test]
async fn static_assets_are_served_from_dist() -> Result<()> {
    let (router, _dist) = fixture(None)?;
    let response = router
        .oneshot(Request::builder().uri("/assets/site.css").body(Body::empty())?)
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/css"), "{content_type}");
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    assert_eq!(&body[..], b"body { margin: 0; }");
    Ok(())
}

#[tokio::test]
async fn responses_carry_a_request_id() -> Result<()> {
    let (router, _dist) = fixture(None)?;
    let response = router
        .oneshot(Request::builder().uri("/healthz").body(Body::empty())?)
        .await?;
    assert!(response.headers().contains_key("x-request-id"));
    Ok(())
}

#[tokio::test]
async fn caller_request_id_is_echoed() -> Result<()> {
    let (router, _dist) = fixture(None)?;
    let response = router
        .oneshot(
            Request::builder()
                .uri("/rooms")
                .header("x-request-id", "booking-42")
                .body(Body::empty())?,
        )
        .await?;
    let echoed = response
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok());
    assert_eq!(echoed, Some("booking-42"));
    Ok(())
}

#[tokio::test]
async fn healthz_reports_status_and_fallback_count() -> Result<()> {
    let (router, _dist) = fixture(None)?;
    let (status, _) = get(router.clone(), "/rooms").await?;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(router, "/healthz").await?;
    assert_eq!(status, StatusCode::OK);
    let health: serde_json::Value = serde_json::from_str(&body)?;
    assert_eq!(health["status"], "ok");
    assert!(health["build"].is_string());
    assert_eq!(health["spa_fallbacks"], 1);
    Ok(())
}

#[tokio::test]
async fn metrics_expose_request_counters() -> Result<()> {
    let (router, _dist) = fixture(None)?;
    get(router.clone(), "/healthz").await?;
    let (status, body) = get(router, "/metrics").await?;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("route=\"/healthz\""));
    Ok(())
}

#[test]
fn missing_shell_fails_startup() -> Result<()> {
    let dist = tempfile::tempdir()?;
    let config = SiteConfig {
        bind: "127.0.0.1:0".parse()?,
        dist_dir: dist.path().to_path_buf(),
        api_base_url: None,
        log_level: "info".to_string(),
        log_format: LogFormat::Pretty,
    };
    assert!(SiteServer::new(&config, Metrics::new()?).is_err());
    Ok(())
}
