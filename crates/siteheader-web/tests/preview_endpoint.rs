//! Integration tests for the preview router

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use siteheader_core::{HeaderConfig, HeaderProps, NavNode, Variant};
use std::sync::Arc;
use tower::ServiceExt;

async fn get(config: HeaderConfig, uri: &str) -> (StatusCode, String) {
    let router = siteheader_web::create_router(Arc::new(config));
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_preview_page_renders_header() {
    let (status, body) = get(HeaderConfig::default(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains(r#"<header class="is-login site-header">"#));
    assert!(body.contains(r#"class="btn btn-login""#));
    assert!(body.contains(r#"id="siteheader-config""#));
}

#[tokio::test]
async fn test_preview_query_overrides() {
    let (status, body) = get(
        HeaderConfig::default(),
        "/?variant=mobile&logged_in=true&state=hovered",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("sticky-top"));
    assert!(body.contains(r#"<ul class="show-menu">"#));
    assert!(!body.contains("btn-login"));
}

#[tokio::test]
async fn test_config_endpoint_returns_json() {
    let config = HeaderConfig {
        variant: Variant::Mobile,
        props: HeaderProps::default().logged_in(true),
    };
    let (status, body) = get(config.clone(), "/api/header").await;

    assert_eq!(status, StatusCode::OK);
    let parsed: HeaderConfig = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed, config);
}

#[tokio::test]
async fn test_tree_endpoint_matches_renderer() {
    let (status, body) = get(HeaderConfig::default(), "/api/header/tree?logged_in=true").await;

    assert_eq!(status, StatusCode::OK);
    let tree: NavNode = serde_json::from_str(&body).unwrap();
    assert!(tree.find_group("menu").is_some());
    // Hidden by default: none of the user-menu links are present
    assert!(!tree.links().iter().any(|l| l.label == "Sign Out"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get(HeaderConfig::default(), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["variant"], "desktop");
    assert_eq!(json["menu_entries"], 2);
}
