//! API utilities for frontend-backend communication
//!
//! Resolves the base URL of the orders server and joins API paths onto it.

/// Port the orders server listens on
pub const API_PORT: u16 = 3001;

const FALLBACK_BASE: &str = "http://localhost:3001";

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using [`API_PORT`] for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3001" or "https://example.com:3001"
/// - `http://localhost:3001` if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return FALLBACK_BASE.to_string(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Where the page sends its requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the config from the browser location
    pub fn from_location() -> Self {
        Self::new(api_base())
    }

    /// Build a full API URL from a path
    ///
    /// # Example
    /// ```ignore
    /// let url = ApiConfig::new("http://localhost:3001").url("/api/production-orders");
    /// ```
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let config = ApiConfig::new("http://localhost:3001");
        assert_eq!(
            config.url("/api/production-orders"),
            "http://localhost:3001/api/production-orders"
        );
        assert_eq!(
            config.url("api/production-orders"),
            "http://localhost:3001/api/production-orders"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("http://orders.local:3001/");
        assert_eq!(config.base_url, "http://orders.local:3001");
        assert_eq!(
            config.url("/api/production-orders"),
            "http://orders.local:3001/api/production-orders"
        );
    }
}
