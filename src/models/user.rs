use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::form::{deserialize_form_text, deserialize_record_id};
use crate::utils::concat_name;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub email: String,
    #[serde(default, alias = "first_name", deserialize_with = "deserialize_form_text")]
    pub first_name: Option<String>,
    #[serde(default, alias = "last_name", deserialize_with = "deserialize_form_text")]
    pub last_name: Option<String>,
    #[serde(default, alias = "created_at", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn display_name(&self) -> Option<String> {
        concat_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

/// What the sharing page lists for each candidate participant.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        let display_name = user.display_name();
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            display_name,
        }
    }
}

// Ids come back as integers from some backends
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserialize_record_id(deserializer)?
        .ok_or_else(|| serde::de::Error::custom("user id must not be empty"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_from_snake_case_record() {
        let user: User = serde_json::from_value(json!({
            "id": 7,
            "email": "ann@example.com",
            "first_name": " Ann ",
            "last_name": ""
        }))
        .unwrap();

        let summary = UserSummary::from(user);
        assert_eq!(summary.id, "7");
        assert_eq!(summary.first_name.as_deref(), Some("Ann"));
        assert_eq!(summary.last_name, None);
        assert_eq!(summary.display_name.as_deref(), Some("Ann"));
    }

    #[test]
    fn test_display_name_absent_without_names() {
        let user: User = serde_json::from_value(json!({
            "id": "u-1",
            "email": "nobody@example.com",
            "firstName": "  "
        }))
        .unwrap();

        assert_eq!(user.display_name(), None);
        assert_eq!(serde_json::to_value(UserSummary::from(user)).unwrap()["displayName"], json!(null));
    }
}
