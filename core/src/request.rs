//! Request values routed through the mediator.
//!
//! Each request is an immutable value carrying already-typed fields. The
//! `Request` trait ties a request to the type its handler produces and to
//! the checks that run before any handler is invoked.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::UserFields;

/// A value that can be dispatched to exactly one handler.
pub trait Request: Send + 'static {
    /// What the handler for this request returns.
    type Output: Send + 'static;

    /// Human-readable name used in errors and logs.
    const NAME: &'static str;

    /// Pre-flight checks; a failure here means no handler runs.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birthdate: NaiveDate,
}

impl CreateUser {
    pub fn fields(&self) -> UserFields {
        UserFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.clone(),
            birthdate: self.birthdate,
        }
    }
}

impl Request for CreateUser {
    type Output = crate::User;
    const NAME: &'static str = "CreateUser";

    fn validate(&self) -> Result<(), ValidationError> {
        validate_fields(&self.first_name, &self.last_name, &self.gender)
    }
}

/// Replaces every writable field of user `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUser {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birthdate: NaiveDate,
}

impl UpdateUser {
    pub fn fields(&self) -> UserFields {
        UserFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            gender: self.gender.clone(),
            birthdate: self.birthdate,
        }
    }
}

impl Request for UpdateUser {
    type Output = crate::User;
    const NAME: &'static str = "UpdateUser";

    fn validate(&self) -> Result<(), ValidationError> {
        validate_id(self.id)?;
        validate_fields(&self.first_name, &self.last_name, &self.gender)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteUser {
    pub id: u64,
}

impl Request for DeleteUser {
    type Output = ();
    const NAME: &'static str = "DeleteUser";

    fn validate(&self) -> Result<(), ValidationError> {
        validate_id(self.id)
    }
}

/// Sort direction understood by the users service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }
}

/// Filters and sort directives for listing users. Every field is optional;
/// empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListUsers {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub birthdate_from: Option<NaiveDate>,
    pub birthdate_to: Option<NaiveDate>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<SortDir>,
}

impl Request for ListUsers {
    type Output = Vec<crate::User>;
    const NAME: &'static str = "ListUsers";
}

fn validate_id(id: u64) -> Result<(), ValidationError> {
    if id == 0 {
        return Err(ValidationError::InvalidId { field: "id" });
    }
    Ok(())
}

fn validate_fields(first_name: &str, last_name: &str, gender: &str) -> Result<(), ValidationError> {
    for (field, value) in [("first_name", first_name), ("last_name", last_name), ("gender", gender)] {
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field });
        }
    }
    Ok(())
}
