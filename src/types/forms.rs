use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactMethod {
    #[serde(rename = "VOICE")]
    Voice,
    #[serde(rename = "SMS")]
    Sms,
}

/// Driver details edited on the location-update page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "preferred_method_is_allowed", skip_on_field_errors = false))]
pub struct DriverForm {
    pub name: String,
    pub phone_number: String,
    pub preferred_contact_method: ContactMethod,
    #[validate(length(min = 1, message = "At least one contact method is required"))]
    pub contact_methods: Vec<ContactMethod>,
}

fn preferred_method_is_allowed(form: &DriverForm) -> Result<(), ValidationError> {
    if form.contact_methods.contains(&form.preferred_contact_method) {
        return Ok(());
    }

    let mut err = ValidationError::new("preferred_contact_method");
    err.message = Some("Preferred contact method must be one of the contact methods".into());
    Err(err)
}

impl Default for DriverForm {
    fn default() -> Self {
        DriverForm {
            name: String::new(),
            phone_number: String::new(),
            preferred_contact_method: ContactMethod::Voice,
            contact_methods: vec![ContactMethod::Voice],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
pub struct VehicleForm {
    pub brand: String,
    pub model: String,
    pub color: String,
    pub description: String,
    // The registration doubles as the vehicle identifier in booking URLs.
    #[validate(length(min = 1, message = "Vehicle registration cannot be empty"))]
    pub registration: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    #[default]
    BeforePickup,
    WaitingForCustomer,
    AfterPickup,
    Completed,
    NoShow,
}

impl TripStatus {
    pub const ALL: [TripStatus; 5] = [
        TripStatus::BeforePickup,
        TripStatus::WaitingForCustomer,
        TripStatus::AfterPickup,
        TripStatus::Completed,
        TripStatus::NoShow,
    ];
}

/// Position report for a booking vehicle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "coordinates_in_range"))]
pub struct LocationForm {
    pub lat: f64,
    pub lng: f64,
    pub status: TripStatus,
}

fn coordinates_in_range(form: &LocationForm) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&form.lat) && (-180.0..=180.0).contains(&form.lng) {
        return Ok(());
    }

    let mut err = ValidationError::new("coordinates");
    err.message = Some("Invalid lat/lng range".into());
    Err(err)
}
