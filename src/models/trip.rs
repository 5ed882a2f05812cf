use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{
    activity::ActivityEntry,
    car_rental::CarRentalData,
    flight::FlightData,
    form::{deserialize_form_text, deserialize_or_default, deserialize_record_id},
    lodging::LodgingEntry,
};
use crate::utils::parse_date;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(
        default,
        deserialize_with = "deserialize_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, alias = "tripName", deserialize_with = "deserialize_form_text")]
    pub name: Option<String>,
    #[serde(default, alias = "tripLocation", deserialize_with = "deserialize_form_text")]
    pub location: Option<String>,
    // Dates stay as entered; see utils::dates for how they are read
    #[serde(default, alias = "start_date", deserialize_with = "deserialize_form_text")]
    pub start_date: Option<String>,
    #[serde(default, alias = "end_date", deserialize_with = "deserialize_form_text")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub description: Option<String>,
    // We always want these fields, but have them optional so the store can set them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Trip {
    pub fn from_new(id: String, new_trip: NewTrip, now: DateTime<Utc>) -> Self {
        Self {
            id: Some(id),
            created_at: Some(now),
            updated_at: Some(now),
            ..Self::from(new_trip)
        }
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_date)
    }

    /// Still relevant on `today`: no end date yet, or ends today or later.
    /// A trip whose end date cannot be read is neither upcoming nor past.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        match self.end_date.as_deref() {
            None => true,
            Some(_) => self.end_date().is_some_and(|end| end >= today),
        }
    }

    pub fn is_past(&self, today: NaiveDate) -> bool {
        self.end_date().is_some_and(|end| end < today)
    }
}

impl From<NewTrip> for Trip {
    fn from(new_trip: NewTrip) -> Self {
        Self {
            id: None,
            name: new_trip.name,
            location: new_trip.location,
            start_date: new_trip.start_date,
            end_date: new_trip.end_date,
            description: new_trip.description,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Basic trip fields as submitted from the create form.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    #[serde(default, alias = "tripName", deserialize_with = "deserialize_form_text")]
    pub name: Option<String>,
    #[serde(default, alias = "tripLocation", deserialize_with = "deserialize_form_text")]
    pub location: Option<String>,
    #[serde(default, alias = "start_date", deserialize_with = "deserialize_form_text")]
    pub start_date: Option<String>,
    #[serde(default, alias = "end_date", deserialize_with = "deserialize_form_text")]
    pub end_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub description: Option<String>,
}

/// The four category blocks collected while a trip is being drafted.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripSubData {
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub flight_data: FlightData,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub car_rental_data: CarRentalData,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub activity_data: Vec<ActivityEntry>,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub lodging_data: Vec<LodgingEntry>,
}

/// Create-trip payload. Any block left out is taken from the planner's drafts.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewTripRequest {
    #[serde(flatten)]
    pub trip: NewTrip,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_data: Option<FlightData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_rental_data: Option<CarRentalData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_data: Option<Vec<ActivityEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lodging_data: Option<Vec<LodgingEntry>>,
}

impl NewTripRequest {
    /// Split into the trip fields and the sub-data to derive from,
    /// filling missing blocks from `drafts`.
    pub fn resolve(self, drafts: &TripSubData) -> (NewTrip, TripSubData) {
        let sub_data = TripSubData {
            flight_data: self
                .flight_data
                .unwrap_or_else(|| drafts.flight_data.clone()),
            car_rental_data: self
                .car_rental_data
                .unwrap_or_else(|| drafts.car_rental_data.clone()),
            activity_data: self
                .activity_data
                .unwrap_or_else(|| drafts.activity_data.clone()),
            lodging_data: self
                .lodging_data
                .unwrap_or_else(|| drafts.lodging_data.clone()),
        };
        (self.trip, sub_data)
    }
}
