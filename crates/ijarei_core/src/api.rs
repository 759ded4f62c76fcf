//! Backend API client.
//!
//! No page calls the backend yet; the client exists so pages share one
//! configured, credentialed HTTP client once endpoints land.

use crate::config::ApiClientConfig;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum ApiClientError {
    Build(reqwest::Error),
}

impl Display for ApiClientError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build(err) => write!(f, "failed to build api client: {err}"),
        }
    }
}

impl Error for ApiClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Build(err) => Some(err),
        }
    }
}

/// HTTP client bound to the backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: &ApiClientConfig) -> Result<Self, ApiClientError> {
        let http = reqwest::Client::builder()
            .cookie_store(config.with_credentials)
            .build()
            .map_err(ApiClientError::Build)?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Shared underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }
}

#[cfg(test)]
mod tests {
    use super::ApiClient;
    use crate::config::ApiClientConfig;

    #[test]
    fn url_joins_paths_with_single_slash() {
        let client = ApiClient::new(&ApiClientConfig {
            base_url: "http://localhost:8080/".to_string(),
            with_credentials: true,
        })
        .unwrap();
        assert_eq!(client.url("/api/articles"), "http://localhost:8080/api/articles");
        assert_eq!(client.url("health"), "http://localhost:8080/health");
    }
}
