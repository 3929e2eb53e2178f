use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use tracing::{error, warn};

use crate::{
    pages::{
        route_table::{Page, BOOKINGS_PATH, LOCATION_UPDATE_PATH},
        views::{self, RenderError, UNAVAILABLE_VIEW},
    },
    types::{app_state::AppState, page_state::PageState},
    utils::app_error::AppError,
};

mod get_bookings_page;
mod get_location_update_page;
pub mod get_not_found;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        BOOKINGS_PATH,
        get(get_bookings_page::get_bookings_page),
    )
    .route(
        LOCATION_UPDATE_PATH,
        get(get_location_update_page::get_location_update_page),
    )
}

async fn render_page(
    state: &AppState,
    page: &Page,
    page_state: &PageState,
) -> Result<Response, AppError> {
    match state.views.render(page, page_state).await {
        Ok(html) => Ok((StatusCode::OK, Html(html)).into_response()),
        Err(RenderError::Load(e)) => {
            warn!("Serving fallback for {}: {}", page.name(), e);
            Ok((StatusCode::SERVICE_UNAVAILABLE, Html(UNAVAILABLE_VIEW)).into_response())
        }
        Err(e) => {
            error!("Failed to render {}: {}", page.name(), e);
            Err(AppError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
            ))
        }
    }
}

fn not_found_page(state: &AppState) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(views::not_found(&state.route_table)),
    )
        .into_response()
}
