//! Command/query mediation over the remote users service.
//!
//! # Overview
//! Callers build a typed request (`CreateUser`, `UpdateUser`, `DeleteUser`,
//! `ListUsers`) and hand it to a `Mediator`, which routes it by type to its
//! one handler. Each handler makes exactly one `UserClient` call, and the
//! client turns that into a single HTTP exchange through an injected
//! `HttpRequester`.
//!
//! # Design
//! - `UserClient` is stateless — it holds only `base_url` and the requester.
//! - Each remote operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - The dispatch table is assembled once and read-only afterwards; every
//!   component is `Send + Sync` and safe to share between callers.
//! - No caching, deduplication or retries: one dispatch, one HTTP call.
//!
//! ```no_run
//! use users_core::{ClientConfig, ListUsers, UserClient, UserHandlers};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = UserClient::from_config(&ClientConfig::from_env()?);
//! let mediator = UserHandlers::new(client).into_mediator()?;
//! let users = mediator.dispatch(ListUsers {
//!     last_name: Some("Lovelace".to_string()),
//!     ..ListUsers::default()
//! })?;
//! # let _ = users;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod handler;
pub mod http;
pub mod mediator;
pub mod request;
#[cfg(feature = "ureq")]
pub mod transport;
pub mod types;

pub use client::UserClient;
pub use config::ClientConfig;
pub use error::{ConfigError, Error, RemoteError, Result, ValidationError};
pub use filter::FilterParams;
pub use handler::{
    CreateUserHandler, DeleteUserHandler, Handler, ListUsersHandler, UpdateUserHandler,
    UserHandlers, UserRequest, UserResponse,
};
pub use http::{HttpMethod, HttpRequest, HttpRequester, HttpResponse};
pub use mediator::{Mediator, MediatorBuilder};
pub use request::{CreateUser, DeleteUser, ListUsers, Request, SortDir, UpdateUser};
#[cfg(feature = "ureq")]
pub use transport::UreqRequester;
pub use types::{User, UserFields};
