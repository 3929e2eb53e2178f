use axum::{extract::State, http::Uri, response::Response};
use tracing::info;

use super::not_found_page;
use crate::types::app_state::AppState;

pub async fn get_not_found(State(state): State<AppState>, uri: Uri) -> Response {
    info!("No page at {}", uri.path());

    not_found_page(&state)
}
