pub mod candidates;
pub mod health;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(candidates::handle_list_all))
        .route("/candidates/:pk", get(candidates::handle_get_by_pk))
        .route("/skills/:skill_name", get(candidates::handle_get_by_skill))
        .with_state(state)
}
