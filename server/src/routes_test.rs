use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;

async fn fetch(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

/// Form-encoded POST, as the browser sends the contact form.
async fn post_form(app: &Router, uri: &str, body: &str) -> (StatusCode, Option<String>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    (response.status(), location)
}

const CONTACT_BODY: &str = "form-name=contact&name=Ana&email=ana%40example.com&message=Hello+there+friend";

fn site_fixture() -> (tempfile::TempDir, tempfile::TempDir) {
    let site = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(site.path().join("pkg")).unwrap();
    std::fs::write(site.path().join("pkg/folio.css"), "body{}").unwrap();

    let assets = tempfile::tempdir().unwrap();
    std::fs::write(assets.path().join("project-1.jpg"), [0xFF, 0xD8, 0xFF]).unwrap();
    (site, assets)
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_is_routed() {
    let (site, assets) = site_fixture();
    let app = static_routes(site.path(), assets.path());
    let (status, _) = fetch(&app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn pkg_serves_bundle_from_site_root() {
    let (site, assets) = site_fixture();
    let app = static_routes(site.path(), assets.path());
    let (status, body) = fetch(&app, "/pkg/folio.css").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"body{}");
}

#[tokio::test]
async fn assets_serves_project_images() {
    let (site, assets) = site_fixture();
    let app = static_routes(site.path(), assets.path());
    let (status, body) = fetch(&app, "/assets/project-1.jpg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, vec![0xFF, 0xD8, 0xFF]);
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let (site, assets) = site_fixture();
    let app = static_routes(site.path(), assets.path());
    let (status, _) = fetch(&app, "/assets/missing.jpg").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn contact_post_redirects_to_confirmation() {
    let (site, assets) = site_fixture();
    let app = static_routes(site.path(), assets.path());
    let (status, location) = post_form(&app, "/thank-you", CONTACT_BODY).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/thank-you"));
}

#[tokio::test]
async fn full_app_accepts_contact_post_and_renders_confirmation() {
    // SAFETY: see config_test; tests run single-threaded.
    unsafe { std::env::set_var("LEPTOS_OUTPUT_NAME", "folio") };
    let (_site, assets) = site_fixture();
    let config = ServerConfig { port: 3000, assets_dir: assets.path().to_path_buf() };
    let app = leptos_app(&config).unwrap();

    let (status, location) = post_form(&app, "/thank-you", CONTACT_BODY).await;
    assert_ne!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/thank-you"));

    let (status, _) = fetch(&app, "/thank-you").await;
    assert_eq!(status, StatusCode::OK);
}
