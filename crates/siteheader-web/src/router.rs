//! Preview router using Axum
//!
//! Serves server-rendered header previews and the active config as JSON.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::Deserialize;
use siteheader_core::{HeaderConfig, HeaderRenderer, NavNode, Variant, VisibilityState, html};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::debug;

use crate::app::CONFIG_ELEMENT_ID;

/// Overrides accepted by the preview endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    pub variant: Option<Variant>,
    pub logged_in: Option<bool>,
    pub state: Option<VisibilityState>,
}

impl PreviewQuery {
    fn render(&self, config: &HeaderConfig) -> NavNode {
        let variant = self.variant.unwrap_or(config.variant);
        let mut props = config.props.clone();
        if let Some(logged_in) = self.logged_in {
            props.logged_in = logged_in;
        }
        HeaderRenderer::new(variant).render(&props, self.state.unwrap_or_default())
    }
}

/// Create the preview router
pub fn create_router(config: Arc<HeaderConfig>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(preview_handler))
        .route("/api/header", get(config_handler))
        .route("/api/header/tree", get(tree_handler))
        .route("/api/health", get(health_handler))
        .layer(cors)
        .with_state(config)
}

async fn preview_handler(
    State(config): State<Arc<HeaderConfig>>,
    Query(query): Query<PreviewQuery>,
) -> Html<String> {
    debug!(?query, "Rendering header preview");
    let header = html::render(&query.render(&config));
    // Embedded so a hydrated build can pick the same config up
    let config_json = serde_json::to_string(config.as_ref())
        .unwrap_or_else(|_| "{}".to_string())
        .replace("</", "<\\/");

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>siteheader preview</title>
    <script id="{CONFIG_ELEMENT_ID}" type="application/json">{config_json}</script>
</head>
<body>
{header}
</body>
</html>"#
    ))
}

async fn config_handler(State(config): State<Arc<HeaderConfig>>) -> Json<HeaderConfig> {
    Json(config.as_ref().clone())
}

async fn tree_handler(
    State(config): State<Arc<HeaderConfig>>,
    Query(query): Query<PreviewQuery>,
) -> Json<NavNode> {
    Json(query.render(&config))
}

async fn health_handler(State(config): State<Arc<HeaderConfig>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "variant": config.variant,
        "menu_entries": config.props.main_menu.len(),
    }))
}
