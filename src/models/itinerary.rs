use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityType {
    #[serde(rename = "Flight")]
    Flight,
    #[serde(rename = "Car Rental")]
    CarRental,
    #[serde(rename = "Activity")]
    Activity,
    #[serde(rename = "Lodging")]
    Lodging,
}

impl ActivityType {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityType::Flight => "Flight",
            ActivityType::CarRental => "Car Rental",
            ActivityType::Activity => "Activity",
            ActivityType::Lodging => "Lodging",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One scheduled event on a trip, ready to hand to the store.
///
/// `notes` is `None` when nothing contributed to it; an empty string would be
/// stored as blank notes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub day_index: u32,
    pub title: String,
    pub description: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location_name: String,
    pub activity_type: ActivityType,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredItineraryItem {
    pub id: String,
    pub trip_id: String,
    #[serde(flatten)]
    pub item: ItineraryItem,
}
