use serde::{Deserialize, Serialize};

use super::form::{deserialize_form_text, deserialize_or_default};

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub custom_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub flight_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub airline: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub seats: Option<String>,
    // Departure date, preferred over `date` when both are set
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub departure: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub date: Option<String>,
}

/// All flights booked for a trip; the cost covers the whole list.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlightData {
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub flights: Vec<Flight>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub total_cost: Option<String>,
}
