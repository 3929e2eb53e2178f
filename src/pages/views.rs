use std::{path::Path, time::Duration};

use thiserror::Error;
use tracing::debug;

use super::{
    lazy_view::{LazyView, ViewLoadError},
    route_table::{Page, RouteTable},
};
use crate::types::{
    forms::{DriverForm, LocationForm, TripStatus, VehicleForm},
    page_state::{LocationUpdateParams, PageState},
};

const BOOKINGS_VIEW: &str = include_str!("../../assets/bookings.html");
const LOCATION_UPDATE_VIEW_FILE: &str = "location-update.html";
const PAGE_STATE_PLACEHOLDER: &str = "{{page_state}}";

const NOT_FOUND_VIEW: &str = "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"UTF-8\" /><title>Not found</title></head>\n<body><h1>Page not found</h1><p><a href=\"{{home}}\">Back to bookings</a></p></body></html>\n";

pub const UNAVAILABLE_VIEW: &str = "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"UTF-8\" /><title>Unavailable</title></head>\n<body><h1>This page could not be loaded</h1><p>Please try again in a moment.</p></body></html>\n";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Load(#[from] ViewLoadError),

    #[error("failed to serialize page state: {0}")]
    State(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct Views {
    location_update: LazyView,
}

impl Views {
    pub fn new(assets_dir: &Path, load_timeout: Duration) -> Self {
        Views {
            location_update: LazyView::from_file(
                assets_dir.join(LOCATION_UPDATE_VIEW_FILE),
                load_timeout,
            ),
        }
    }

    #[cfg(test)]
    pub(crate) fn location_update(&self) -> &LazyView {
        &self.location_update
    }

    pub async fn render(&self, page: &Page, state: &PageState) -> Result<String, RenderError> {
        debug!(
            "Rendering {} ({:?}, location view loaded: {})",
            page.name(),
            page.loading(),
            self.location_update.is_loaded()
        );

        let html = match page {
            Page::Bookings => fill(BOOKINGS_VIEW, state)?,
            Page::LocationUpdate { .. } => fill(&self.location_update.get().await?, state)?,
        };

        Ok(html)
    }
}

/// Not-found document linking back to the booking list under the table's base.
pub fn not_found(route_table: &RouteTable) -> String {
    NOT_FOUND_VIEW.replace("{{home}}", &route_table.href(&Page::Bookings))
}

pub fn bookings_state() -> PageState {
    PageState::Bookings {
        bookings: Vec::new(),
    }
}

/// Fresh forms for a vehicle, prefilled with what the URL already tells us.
pub fn location_update_state(params: LocationUpdateParams) -> PageState {
    PageState::LocationUpdate {
        vehicle: VehicleForm {
            registration: params.vehicle_id.clone(),
            ..Default::default()
        },
        params,
        driver: DriverForm::default(),
        location: LocationForm::default(),
        statuses: TripStatus::ALL.to_vec(),
    }
}

fn fill(template: &str, state: &PageState) -> Result<String, serde_json::Error> {
    // Keep the JSON from terminating the surrounding <script> element.
    let json = serde_json::to_string(state)?
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026");

    Ok(template.replace(PAGE_STATE_PLACEHOLDER, &json))
}

/// Pulls the embedded page state back out of a rendered document.
#[cfg(test)]
pub fn extract_state(html: &str) -> PageState {
    let start = html
        .find(r#"id="page-state">"#)
        .map(|i| i + r#"id="page-state">"#.len())
        .expect("page state script not found");
    let end = start + html[start..].find("</script>").expect("unterminated script");

    serde_json::from_str(&html[start..end]).expect("page state is not valid JSON")
}
