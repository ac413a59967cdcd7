//! Resource client for the remote users service.
//!
//! # Design
//! `UserClient` holds only a `base_url` and a shared requester; it carries
//! no mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`, so both halves stay deterministic and testable. The
//! composed operations (`list`, `get`, ...) run build, one `send`, parse.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::RemoteError;
use crate::filter::FilterParams;
use crate::http::{HttpMethod, HttpRequest, HttpRequester, HttpResponse};
use crate::types::{ListEnvelope, User, UserFields, UserPayload};

/// Synchronous, stateless client for the users service.
#[derive(Clone)]
pub struct UserClient {
    base_url: String,
    requester: Arc<dyn HttpRequester>,
}

impl fmt::Debug for UserClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl UserClient {
    pub fn new(base_url: &str, requester: Arc<dyn HttpRequester>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            requester,
        }
    }

    /// Client backed by `ureq`, honoring the configured timeout.
    #[cfg(feature = "ureq")]
    pub fn from_config(config: &crate::config::ClientConfig) -> Self {
        let requester = crate::transport::UreqRequester::new(config);
        Self::new(&config.base_url, Arc::new(requester))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn list(&self, filters: &FilterParams) -> Result<Vec<User>, RemoteError> {
        let response = self.execute(self.build_list(filters))?;
        self.parse_list(response)
    }

    pub fn get(&self, id: u64) -> Result<Option<User>, RemoteError> {
        let response = self.execute(self.build_get(id))?;
        self.parse_get(response)
    }

    pub fn create(&self, fields: &UserFields) -> Result<User, RemoteError> {
        let response = self.execute(self.build_create(fields)?)?;
        self.parse_create(response)
    }

    pub fn update(&self, id: u64, fields: &UserFields) -> Result<User, RemoteError> {
        let response = self.execute(self.build_update(id, fields)?)?;
        self.parse_update(response)
    }

    pub fn delete(&self, id: u64) -> Result<(), RemoteError> {
        let response = self.execute(self.build_delete(id))?;
        self.parse_delete(response)
    }

    pub fn build_list(&self, filters: &FilterParams) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/users", self.base_url),
            query: filters.to_pairs(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/users/{id}", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, fields: &UserFields) -> Result<HttpRequest, RemoteError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/users", self.base_url),
            query: Vec::new(),
            headers: json_headers(),
            body: Some(encode_payload(fields)?),
        })
    }

    /// Full replacement: all four writable fields are always sent.
    pub fn build_update(&self, id: u64, fields: &UserFields) -> Result<HttpRequest, RemoteError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/users/{id}", self.base_url),
            query: Vec::new(),
            headers: json_headers(),
            body: Some(encode_payload(fields)?),
        })
    }

    pub fn build_delete(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/users/{id}", self.base_url),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// A missing or null `data` field is an empty result, not an error. The
    /// body itself must be a JSON object.
    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<User>, RemoteError> {
        check_status(&response)?;
        let value: serde_json::Value = decode(&response)?;
        if !value.is_object() {
            return Err(RemoteError::Deserialization(
                "list response is not a JSON object".to_string(),
            ));
        }
        let envelope: ListEnvelope = serde_json::from_value(value)
            .map_err(|e| RemoteError::Deserialization(e.to_string()))?;
        Ok(envelope.data.unwrap_or_default())
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Option<User>, RemoteError> {
        match check_status(&response) {
            Ok(()) => decode(&response).map(Some),
            Err(RemoteError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<User, RemoteError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<User, RemoteError> {
        check_status(&response)?;
        decode(&response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), RemoteError> {
        check_status(&response)
    }

    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RemoteError> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "sending request");
        let response = self.requester.send(request)?;
        if !response.is_success() {
            tracing::warn!(status = response.status, "users service returned non-success status");
        }
        Ok(response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn encode_payload(fields: &UserFields) -> Result<String, RemoteError> {
    serde_json::to_string(&UserPayload { user: fields })
        .map_err(|e| RemoteError::Serialization(e.to_string()))
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, RemoteError> {
    serde_json::from_str(&response.body).map_err(|e| RemoteError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `RemoteError` variant.
fn check_status(response: &HttpResponse) -> Result<(), RemoteError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(RemoteError::NotFound);
    }
    Err(RemoteError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
