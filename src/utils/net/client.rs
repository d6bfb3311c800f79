use crate::config::HttpConfig;
use crate::utils::error::{Result, SyncError};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, ClientBuilder};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// `None` keeps reqwest's default (no overall timeout)
    pub timeout: Option<Duration>,
    pub user_agent: String,
    pub default_headers: HashMap<String, String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: format!("warranty-sync/{}", env!("CARGO_PKG_VERSION")),
            default_headers: HashMap::new(),
        }
    }
}

impl From<&HttpConfig> for HttpClientConfig {
    fn from(config: &HttpConfig) -> Self {
        Self {
            timeout: config.timeout_secs.map(Duration::from_secs),
            user_agent: config.user_agent.clone(),
            default_headers: HashMap::new(),
        }
    }
}

impl HttpClientConfig {
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }
}

pub struct ClientUtils;

impl ClientUtils {
    pub fn create_http_client(config: &HttpClientConfig) -> Result<Client> {
        let mut client_builder = ClientBuilder::new().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        if !config.default_headers.is_empty() {
            let mut headers = HeaderMap::new();
            for (key, value) in &config.default_headers {
                let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                    SyncError::config(format!("Invalid header name '{}': {}", key, e))
                })?;
                let value = HeaderValue::from_str(value).map_err(|e| {
                    SyncError::config(format!("Invalid header value for '{}': {}", key, e))
                })?;
                headers.insert(name, value);
            }
            client_builder = client_builder.default_headers(headers);
        }

        client_builder
            .build()
            .map_err(|e| SyncError::config(format!("Failed to build HTTP client: {}", e)))
    }

    pub fn add_path_to_api_base(api_base: &str, ending_path: &str) -> String {
        let base = api_base.trim_end_matches('/');
        let path = ending_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    pub fn validate_url(url: &str) -> std::result::Result<(), String> {
        let parsed = url::Url::parse(url).map_err(|e| format!("Invalid URL '{}': {}", url, e))?;

        match parsed.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(format!(
                "URL '{}' must use http:// or https://, got: {}",
                url, scheme
            )),
        }
    }
}
