// HTTP response utilities for JSON encoding and error mapping
use crate::application::template_service::TemplateServiceError;
use crate::domain::error::InstantiationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Serialize a value as a JSON response with the given status
pub fn json_response<T: Serialize>(status: StatusCode, data: &T) -> Response {
    (status, Json(data)).into_response()
}

pub fn status_for(err: &TemplateServiceError) -> StatusCode {
    match err {
        TemplateServiceError::TemplateNotFound(_) | TemplateServiceError::ProjectNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        TemplateServiceError::Instantiation(InstantiationError::Configuration(_)) => {
            StatusCode::CONFLICT
        }
        TemplateServiceError::Instantiation(InstantiationError::Integrity(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        TemplateServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Map a service error onto a `{"error": ...}` body
pub fn error_response(err: TemplateServiceError) -> Response {
    let status = status_for(&err);
    if status.is_server_error() {
        tracing::error!("Request failed: {:#}", err);
    }
    json_response(status, &json!({ "error": err.to_string() }))
}
