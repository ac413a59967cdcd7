//! Wire DTOs for the users service.
//!
//! # Design
//! These mirror the mock-server's schema but are defined independently;
//! integration tests catch drift between the two. Field names are already
//! snake_case on the wire, so no renames are needed. `birthdate` travels as
//! `YYYY-MM-DD`, which is chrono's serde format for `NaiveDate`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user as reported by the remote service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birthdate: NaiveDate,
}

/// The writable fields of a user: everything except the remote-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birthdate: NaiveDate,
}

impl User {
    /// The writable part of this user, as it would be sent back on update.
    pub fn fields(&self) -> UserFields {
        UserFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.clone(),
            birthdate: self.birthdate,
        }
    }
}

/// Request body for create and update: `{"user": {...}}`.
#[derive(Debug, Serialize)]
pub(crate) struct UserPayload<'a> {
    pub user: &'a UserFields,
}

/// Response body for list: `{"data": [...]}`. A missing or null `data`
/// decodes as `None`.
#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope {
    #[serde(default)]
    pub data: Option<Vec<User>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> UserFields {
        UserFields {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            gender: "F".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
        }
    }

    #[test]
    fn payload_wraps_fields_under_user_key() {
        let fields = ada();
        let json = serde_json::to_value(UserPayload { user: &fields }).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "user": {
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "gender": "F",
                    "birthdate": "1815-12-10"
                }
            })
        );
    }

    #[test]
    fn envelope_missing_data_is_none() {
        let envelope: ListEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn envelope_null_data_is_none() {
        let envelope: ListEnvelope = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(envelope.data.is_none());
    }

    #[test]
    fn user_rejects_malformed_birthdate() {
        let result: Result<User, _> = serde_json::from_str(
            r#"{"id":1,"first_name":"A","last_name":"B","gender":"F","birthdate":"10/12/1815"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn fields_drops_id() {
        let fields = ada();
        let user = User {
            id: 7,
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            gender: fields.gender.clone(),
            birthdate: fields.birthdate,
        };
        assert_eq!(user.fields(), fields);
    }
}
