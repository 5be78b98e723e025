use axum::{
    extract::{Path, State},
    Json,
};
use doh_proxy_domain::Resolution;
use tracing::instrument;

use crate::{errors::ApiError, state::AppState};

#[instrument(skip(state), name = "api_resolve_dns")]
pub async fn resolve_dns(
    State(state): State<AppState>,
    Path((domain, qtype)): Path<(String, String)>,
) -> Result<Json<Resolution>, ApiError> {
    let resolution = state.resolve_domain.execute(&domain, &qtype).await?;
    Ok(Json(resolution))
}
