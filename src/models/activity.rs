use serde::{Deserialize, Serialize};

use super::form::deserialize_form_text;

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub activity_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub total_cost: Option<String>,
    #[serde(default, deserialize_with = "deserialize_form_text")]
    pub description: Option<String>,
}
