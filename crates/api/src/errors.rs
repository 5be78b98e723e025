use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use doh_proxy_domain::DomainError;
use serde_json::json;

/// Body text returned for every failed lookup.
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // No upstream detail reaches the caller.
        let status = match &self.0 {
            DomainError::QueryTimeout
            | DomainError::TransportConnectionRefused { .. }
            | DomainError::UpstreamRequest(_)
            | DomainError::UnreadableResponse(_)
            | DomainError::InvalidDnsResponse(_)
            | DomainError::InvalidUpstreamUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "message": INTERNAL_ERROR_MESSAGE }))).into_response()
    }
}
