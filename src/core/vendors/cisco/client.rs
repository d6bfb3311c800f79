//! Cisco Support API client

use super::models::{CoverageSummaryResponse, EoxResponse};
use crate::config::{CiscoConfig, HttpConfig};
use crate::core::models::{NormalizedIdentifier, join_identifiers};
use crate::core::vendors::auth::{ClientCredentials, OAuthSession};
use crate::utils::error::{Result, SyncError};
use crate::utils::net::{ClientUtils, HttpClientConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::instrument;

const SERVICE: &str = "cisco";

/// Raw Cisco Support API endpoints
#[async_trait]
pub trait CiscoApi: Send + Sync {
    /// Warranty coverage summary for up to 50 serial numbers
    async fn coverage_summary(
        &self,
        serials: &[NormalizedIdentifier],
    ) -> Result<CoverageSummaryResponse>;

    /// End-of-life records for up to 20 serial numbers
    async fn eox_by_serial(&self, serials: &[NormalizedIdentifier]) -> Result<EoxResponse>;
}

/// HTTP client for the Cisco Support APIs
#[derive(Debug, Clone)]
pub struct CiscoClient {
    session: OAuthSession,
    warranty_url: String,
    eox_url: String,
}

impl CiscoClient {
    /// Build the client and acquire an access token
    pub async fn connect(config: &CiscoConfig, http: &HttpConfig) -> Result<Self> {
        let client = ClientUtils::create_http_client(
            &HttpClientConfig::from(http).with_header("Accept", "application/json"),
        )?;
        let credentials = ClientCredentials {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token_url: config.token_url.clone(),
        };
        let session = OAuthSession::connect(SERVICE, credentials, client).await?;

        Ok(Self {
            session,
            warranty_url: config.warranty_url.clone(),
            eox_url: config.eox_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        let token = self.session.access_token().await?;
        let response = self
            .session
            .http_client()
            .get(url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await
            .map_err(|e| SyncError::vendor_batch(SERVICE, format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SyncError::auth(SERVICE, format!("API returned {}", status)));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::vendor_batch(
                SERVICE,
                format!("API returned {}: {}", status, body),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| SyncError::vendor_batch(SERVICE, format!("Malformed response: {}", e)))
    }
}

/// Append comma-joined identifiers to `base` as a single path segment
pub(crate) fn batch_url(base: &str, ids: &[NormalizedIdentifier]) -> Result<String> {
    let mut url = url::Url::parse(base)
        .map_err(|e| SyncError::config(format!("Invalid URL '{}': {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| SyncError::config(format!("URL '{}' cannot take a path", base)))?
        .pop_if_empty()
        .push(&join_identifiers(ids));
    Ok(url.to_string())
}

#[async_trait]
impl CiscoApi for CiscoClient {
    #[instrument(skip(self, serials), fields(count = serials.len()))]
    async fn coverage_summary(
        &self,
        serials: &[NormalizedIdentifier],
    ) -> Result<CoverageSummaryResponse> {
        let url = batch_url(&self.warranty_url, serials)?;
        self.get_json(&url, &[]).await
    }

    #[instrument(skip(self, serials), fields(count = serials.len()))]
    async fn eox_by_serial(&self, serials: &[NormalizedIdentifier]) -> Result<EoxResponse> {
        let url = batch_url(&self.eox_url, serials)?;
        self.get_json(&url, &[("responseencoding", "json")]).await
    }
}
