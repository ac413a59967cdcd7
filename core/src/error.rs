//! Error types for the users mediation layer.
//!
//! # Design
//! `RemoteError` covers everything that can go wrong talking to the users
//! service. `NotFound` gets a dedicated variant because callers distinguish
//! "the user does not exist" from "the service returned an unexpected
//! status." All other non-2xx responses land in `Status` with the raw code
//! and body.
//!
//! `Error` is what `dispatch` returns: remote failures pass through
//! unchanged, next to request validation and wiring errors.

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level error returned by handlers and the mediator.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// `dispatch` was called for a request type nobody registered.
    #[error("no handler registered for {request}")]
    NoHandlerFound { request: &'static str },

    /// Two handlers were registered for the same request type.
    #[error("a handler for {request} is already registered")]
    DuplicateHandler { request: &'static str },
}

impl Error {
    /// True when the remote service reported the target user missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Remote(RemoteError::NotFound))
    }
}

/// Failures of a single exchange with the users service.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The server returned 404 — the requested user does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response (connect failure, timeout).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be decoded into the expected shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl RemoteError {
    /// Status code reported by the service, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::NotFound => Some(404),
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A request value failed its pre-flight checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be a positive id")]
    InvalidId { field: &'static str },
}

/// Client configuration could not be assembled from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}
