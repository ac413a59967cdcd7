use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birthdate: NaiveDate,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserParams {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birthdate: NaiveDate,
}

#[derive(Deserialize)]
pub struct UserBody {
    pub user: UserParams,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListBody {
    pub data: Vec<User>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub gender: Option<String>,
    pub birthdate_from: Option<NaiveDate>,
    pub birthdate_to: Option<NaiveDate>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: u64,
    users: BTreeMap<u64, User>,
}

impl Store {
    fn insert(&mut self, params: UserParams) -> User {
        self.next_id += 1;
        let user = User {
            id: self.next_id,
            first_name: params.first_name,
            last_name: params.last_name,
            gender: params.gender,
            birthdate: params.birthdate,
        };
        self.users.insert(user.id, user.clone());
        user
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) if !needle.is_empty() => haystack
            .to_lowercase()
            .contains(&needle.to_lowercase()),
        _ => true,
    }
}

impl ListParams {
    fn matches(&self, user: &User) -> bool {
        contains_ci(&user.first_name, self.first_name.as_deref())
            && contains_ci(&user.last_name, self.last_name.as_deref())
            && self.gender.as_deref().map_or(true, |g| g.is_empty() || g == user.gender)
            && self.birthdate_from.map_or(true, |from| user.birthdate >= from)
            && self.birthdate_to.map_or(true, |to| user.birthdate <= to)
    }

    fn sort(&self, users: &mut [User]) -> Result<(), StatusCode> {
        match self.sort_by.as_deref().unwrap_or("id") {
            "id" => users.sort_by_key(|u| u.id),
            "first_name" => users.sort_by(|a, b| a.first_name.cmp(&b.first_name)),
            "last_name" => users.sort_by(|a, b| a.last_name.cmp(&b.last_name)),
            "gender" => users.sort_by(|a, b| a.gender.cmp(&b.gender)),
            "birthdate" => users.sort_by_key(|u| u.birthdate),
            _ => return Err(StatusCode::BAD_REQUEST),
        }
        match self.sort_dir.as_deref().unwrap_or("asc") {
            "asc" => {}
            "desc" => users.reverse(),
            _ => return Err(StatusCode::BAD_REQUEST),
        }
        Ok(())
    }
}

async fn list_users(
    State(db): State<Db>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListBody>, StatusCode> {
    let store = db.read().await;
    let mut data: Vec<User> = store
        .users
        .values()
        .filter(|u| params.matches(u))
        .cloned()
        .collect();
    params.sort(&mut data)?;
    tracing::debug!(count = data.len(), "listing users");
    Ok(Json(ListBody { data }))
}

async fn create_user(
    State(db): State<Db>,
    Json(body): Json<UserBody>,
) -> (StatusCode, Json<User>) {
    let user = db.write().await.insert(body.user);
    tracing::info!(id = user.id, "created user");
    (StatusCode::CREATED, Json(user))
}

async fn get_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<Json<User>, StatusCode> {
    let store = db.read().await;
    store.users.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(body): Json<UserBody>,
) -> Result<Json<User>, StatusCode> {
    let mut store = db.write().await;
    let user = store.users.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    user.first_name = body.user.first_name;
    user.last_name = body.user.last_name;
    user.gender = body.user.gender;
    user.birthdate = body.user.birthdate;
    tracing::info!(id, "updated user");
    Ok(Json(user.clone()))
}

async fn delete_user(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .users
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, first: &str, last: &str, gender: &str, birthdate: &str) -> User {
        User {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            gender: gender.to_string(),
            birthdate: birthdate.parse().unwrap(),
        }
    }

    #[test]
    fn user_serializes_birthdate_as_iso_date() {
        let json = serde_json::to_value(user(1, "Ada", "Lovelace", "F", "1815-12-10")).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["birthdate"], "1815-12-10");
    }

    #[test]
    fn user_body_requires_user_key() {
        let result: Result<UserBody, _> = serde_json::from_str(
            r#"{"first_name":"A","last_name":"B","gender":"F","birthdate":"1900-01-01"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn name_filters_are_case_insensitive_substrings() {
        let params = ListParams {
            last_name: Some("love".to_string()),
            ..ListParams::default()
        };
        assert!(params.matches(&user(1, "Ada", "Lovelace", "F", "1815-12-10")));
        assert!(!params.matches(&user(2, "Alan", "Turing", "M", "1912-06-23")));
    }

    #[test]
    fn birthdate_range_is_inclusive() {
        let params = ListParams {
            birthdate_from: "1815-12-10".parse().ok(),
            birthdate_to: "1815-12-10".parse().ok(),
            ..ListParams::default()
        };
        assert!(params.matches(&user(1, "Ada", "Lovelace", "F", "1815-12-10")));
    }

    #[test]
    fn sort_by_birthdate_descending() {
        let params = ListParams {
            sort_by: Some("birthdate".to_string()),
            sort_dir: Some("desc".to_string()),
            ..ListParams::default()
        };
        let mut users = vec![
            user(1, "Ada", "Lovelace", "F", "1815-12-10"),
            user(2, "Alan", "Turing", "M", "1912-06-23"),
        ];
        params.sort(&mut users).unwrap();
        assert_eq!(users[0].id, 2);
    }

    #[test]
    fn unknown_sort_column_is_rejected() {
        let params = ListParams {
            sort_by: Some("password".to_string()),
            ..ListParams::default()
        };
        assert_eq!(params.sort(&mut []), Err(StatusCode::BAD_REQUEST));
    }
}
