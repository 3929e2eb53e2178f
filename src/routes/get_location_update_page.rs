use crate::{
    pages::{route_table::Page, views},
    types::{app_state::AppState, page_state::LocationUpdateParams},
    utils::app_error::AppError,
};
use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::Response,
};
#[cfg(test)]
use axum_macros::debug_handler;
use tracing::info;

use super::{not_found_page, render_page};

#[cfg_attr(test, debug_handler)]
pub async fn get_location_update_page(
    State(state): State<AppState>,
    params: Result<Path<LocationUpdateParams>, PathRejection>,
) -> Result<Response, AppError> {
    let Path(params) = match params {
        Ok(params) => params,
        Err(e) => {
            info!("Rejected location update path: {}", e);
            return Ok(not_found_page(&state));
        }
    };

    let page = Page::LocationUpdate {
        booking_ref: params.booking_ref.clone(),
        vehicle_id: params.vehicle_id.clone(),
    };

    render_page(&state, &page, &views::location_update_state(params)).await
}
