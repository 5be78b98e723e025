use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/dns/{domain}/{qtype}", get(handlers::resolve_dns))
        .with_state(state)
}
