use std::borrow::Cow;

use urlencoding::encode;

pub const BOOKINGS_PATH: &str = "/";
pub const LOCATION_UPDATE_PATH: &str = "/update-location/:bookingRef/:vehicleId";

/// How a page's view is made available to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loading {
    Eager,
    /// Fetched on the first navigation to the route, then kept.
    Lazy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Bookings,
    LocationUpdate {
        booking_ref: String,
        vehicle_id: String,
    },
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Bookings => "bookings",
            Page::LocationUpdate { .. } => "location-update",
        }
    }

    pub fn loading(&self) -> Loading {
        match self {
            Page::Bookings => Loading::Eager,
            Page::LocationUpdate { .. } => Loading::Lazy,
        }
    }
}

/// Where the pages are mounted, and how to link to them.
#[derive(Debug, Clone)]
pub struct RouteTable {
    base: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        RouteTable::new("/")
    }
}

impl RouteTable {
    pub fn new(base: &str) -> Self {
        RouteTable {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Mount point without a trailing slash; empty when pages live at the root.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Builds the URL that navigates to `page`.
    pub fn href(&self, page: &Page) -> String {
        let relative: Cow<str> = match page {
            Page::Bookings => BOOKINGS_PATH.into(),
            Page::LocationUpdate {
                booking_ref,
                vehicle_id,
            } => format!(
                "/update-location/{}/{}",
                encode(booking_ref),
                encode(vehicle_id)
            )
            .into(),
        };

        format!("{}{}", self.base, relative)
    }
}
