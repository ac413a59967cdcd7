//! Default `HttpRequester` backed by `ureq`.
//!
//! # Design
//! ureq's automatic status-code-as-error behavior is disabled so 4xx/5xx
//! responses come back as data and `UserClient` does the status
//! interpretation. Only exchanges that produced no response become
//! `RemoteError::Transport`, timeouts included.

use ureq::Agent;

use crate::config::ClientConfig;
use crate::error::RemoteError;
use crate::http::{HttpMethod, HttpRequest, HttpRequester, HttpResponse};

#[derive(Debug, Clone)]
pub struct UreqRequester {
    agent: Agent,
}

impl UreqRequester {
    pub fn new(config: &ClientConfig) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl HttpRequester for UreqRequester {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, RemoteError> {
        let url = request.path.as_str();
        let query = request.query.iter().map(|(k, v)| (k.as_str(), v.as_str()));

        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(url), &request.headers)
                .query_pairs(query)
                .call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(url), &request.headers)
                .query_pairs(query)
                .call(),
            (HttpMethod::Post, Some(body)) => with_headers(self.agent.post(url), &request.headers)
                .query_pairs(query)
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => with_headers(self.agent.post(url), &request.headers)
                .query_pairs(query)
                .send_empty(),
            (HttpMethod::Put, Some(body)) => with_headers(self.agent.put(url), &request.headers)
                .query_pairs(query)
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => with_headers(self.agent.put(url), &request.headers)
                .query_pairs(query)
                .send_empty(),
        };
        let mut response = result.map_err(|e| RemoteError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| RemoteError::Transport(e.to_string()))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
