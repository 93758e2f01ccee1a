use axum::extract::{Path, State};
use axum::response::Html;

use crate::state::AppState;

/// GET /
pub async fn handle_list_all(State(state): State<AppState>) -> Html<String> {
    Html(state.directory.render_all())
}

/// GET /candidates/:pk
/// A non-integer `pk` is rejected by the path extractor before this runs.
pub async fn handle_get_by_pk(
    State(state): State<AppState>,
    Path(pk): Path<i64>,
) -> Html<String> {
    Html(state.directory.render_by_id(pk))
}

/// GET /skills/:skill_name
pub async fn handle_get_by_skill(
    State(state): State<AppState>,
    Path(skill_name): Path<String>,
) -> Html<String> {
    Html(state.directory.render_by_skill(&skill_name))
}
