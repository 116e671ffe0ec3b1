//! HTTP capability used by pages to talk to the server.
//!
//! Pages receive an `Rc<dyn HttpClient>` instead of calling `fetch` directly,
//! so tests can substitute an in-memory client.

use crate::shared::api_utils::ApiConfig;
use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Request never produced a response (DNS, CORS, connection refused, ...)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("network error: {0}")]
pub struct NetworkError(pub String);

#[async_trait(?Send)]
pub trait HttpClient {
    /// Send `body` (JSON text) to `path`. A body implies a JSON content type.
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, NetworkError>;
}

const JSON_REQUEST_HEADERS: &[(&str, &str)] = &[
    ("Accept", "application/json"),
    ("Content-Type", "application/json"),
];

const JSON_ACCEPT_HEADERS: &[(&str, &str)] = &[("Accept", "application/json")];

/// Headers sent with every request. A body is always JSON.
pub fn request_headers(has_body: bool) -> &'static [(&'static str, &'static str)] {
    if has_body {
        JSON_REQUEST_HEADERS
    } else {
        JSON_ACCEPT_HEADERS
    }
}

/// Browser `fetch` via gloo-net, resolving paths against the configured base URL
pub struct GlooHttpClient {
    config: ApiConfig,
}

impl GlooHttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, NetworkError> {
        let url = self.config.url(path);
        log::debug!("{} {}", method.as_str(), url);

        let mut builder = match method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
        };
        for (name, value) in request_headers(body.is_some()) {
            builder = builder.header(name, value);
        }

        let response = match body {
            Some(json) => builder
                .body(json)
                .map_err(|e| NetworkError(format!("Failed to build request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| NetworkError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NetworkError(format!("Failed to read response: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(HttpResponse::new(200, "[]").ok());
        assert!(HttpResponse::new(201, "{}").ok());
        assert!(!HttpResponse::new(199, "").ok());
        assert!(!HttpResponse::new(404, "").ok());
        assert!(!HttpResponse::new(500, "boom").ok());
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let headers = request_headers(true);
        assert!(headers.contains(&("Content-Type", "application/json")));
        assert!(headers.contains(&("Accept", "application/json")));
    }

    #[test]
    fn test_no_body_no_content_type() {
        let headers = request_headers(false);
        assert!(headers.iter().all(|(name, _)| *name != "Content-Type"));
        assert_eq!(headers, &[("Accept", "application/json")]);
    }
}
