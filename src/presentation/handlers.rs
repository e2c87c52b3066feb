// HTTP request handlers
use crate::infrastructure::http_response::{error_response, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct InstantiateRequest {
    pub title: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Template gallery for a project, each entry with its compatibility report
pub async fn list_templates(
    Path(project_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.template_service.gallery(&project_id).await {
        Ok(gallery) => json_response(StatusCode::OK, &gallery),
        Err(e) => error_response(e),
    }
}

pub async fn check_compatibility(
    Path((project_id, name)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state
        .template_service
        .check_compatibility(&name, &project_id)
        .await
    {
        Ok(validation) => json_response(StatusCode::OK, &validation),
        Err(e) => error_response(e),
    }
}

/// Apply a template to a project and persist the resulting dashboard.
/// The body is optional; without one the template name becomes the title.
pub async fn instantiate_template(
    Path((project_id, name)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    request: Option<Json<InstantiateRequest>>,
) -> Response {
    let request = request.map(|Json(r)| r).unwrap_or_default();
    match state
        .template_service
        .instantiate(&name, &project_id, request.title.as_deref())
        .await
    {
        Ok(stored) => json_response(StatusCode::CREATED, &stored),
        Err(e) => error_response(e),
    }
}

pub async fn get_dashboard(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.template_service.get_dashboard(&id).await {
        Ok(Some(dashboard)) => json_response(StatusCode::OK, &dashboard),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("dashboard not found: {}", id) })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
