//! HTTP exchange types and the injected requester capability.
//!
//! # Design
//! Requests and responses are plain data. `UserClient` builds an
//! `HttpRequest`, hands it to an `HttpRequester`, and parses the returned
//! `HttpResponse`. Connection handling, TLS and timeouts belong to the
//! requester; the client never touches a socket itself.

use crate::error::RemoteError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `query` holds unencoded name/value pairs in wire order; the requester is
/// responsible for percent-encoding them onto `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capability that performs one HTTP round-trip.
///
/// Implementations must return non-2xx statuses as `Ok(HttpResponse)` and
/// reserve `Err` for exchanges that produced no response at all.
pub trait HttpRequester: Send + Sync {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, RemoteError>;
}

impl<F> HttpRequester for F
where
    F: Fn(HttpRequest) -> Result<HttpResponse, RemoteError> + Send + Sync,
{
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, RemoteError> {
        self(request)
    }
}
