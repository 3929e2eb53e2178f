use serde::{Deserialize, Serialize};

use super::{
    booking::BookingNorm,
    forms::{DriverForm, LocationForm, TripStatus, VehicleForm},
};

/// Path parameters of the location-update page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationUpdateParams {
    pub booking_ref: String,
    pub vehicle_id: String,
}

/// Initial view-model embedded into a rendered page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "route")]
pub enum PageState {
    #[serde(rename = "bookings")]
    Bookings { bookings: Vec<BookingNorm> },

    #[serde(rename = "location-update")]
    LocationUpdate {
        params: LocationUpdateParams,
        driver: DriverForm,
        vehicle: VehicleForm,
        location: LocationForm,
        statuses: Vec<TripStatus>,
    },
}
