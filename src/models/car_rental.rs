use serde::{Deserialize, Serialize};

use super::form::deserialize_form_text;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RentalLocation {
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub phone: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RentalInfo {
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub car_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub mileage_charges: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub car_details: Option<String>,
}

/// A single car rental. Nothing is scheduled unless `rental_agency` is set.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarRentalData {
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub rental_agency: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub pickup_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub pickup_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub dropoff_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub dropoff_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub confirmation_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub total_cost: Option<String>,
    #[serde(default)]
    pub pickup_location: Option<RentalLocation>,
    #[serde(default)]
    pub dropoff_location: Option<RentalLocation>,
    #[serde(default)]
    pub rental_info: Option<RentalInfo>,
}
