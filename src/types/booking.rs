use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Trip segment a booking belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leg {
    Arrival,
    Departure,
    Return,
    #[default]
    Unknown,
}

const KNOWN_KEYS: [&str; 6] = [
    "__ref",
    "__leg",
    "__flightNo",
    "__arrivalDate",
    "__departureDate",
    "__passenger",
];

/// Canonical booking record after upstream normalization.
///
/// The known fields are always present on the wire; missing data is `null`.
/// Anything else the supplier sends is kept in `extra` untouched. Entries in
/// `extra` that shadow a known key are never written out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BookingNorm {
    #[serde(rename = "__ref", deserialize_with = "nullable")]
    pub reference: Option<String>,

    #[serde(rename = "__leg")]
    pub leg: Leg,

    #[serde(rename = "__flightNo", deserialize_with = "nullable")]
    pub flight_no: Option<String>,

    #[serde(rename = "__arrivalDate", deserialize_with = "nullable")]
    pub arrival_date: Option<String>,

    #[serde(rename = "__departureDate", deserialize_with = "nullable")]
    pub departure_date: Option<String>,

    #[serde(rename = "__passenger", deserialize_with = "nullable")]
    pub passenger: Option<String>,

    #[serde(flatten, serialize_with = "without_known_keys")]
    pub extra: Map<String, Value>,
}

// A custom deserializer makes the key required while still accepting null.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

fn without_known_keys<S>(extra: &Map<String, Value>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(
        extra
            .iter()
            .filter(|(key, _)| !KNOWN_KEYS.contains(&key.as_str())),
    )
}
