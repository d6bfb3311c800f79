//! Dell TechDirect API client

use super::models::DellAsset;
use crate::config::{DellConfig, HttpConfig};
use crate::core::models::{NormalizedIdentifier, join_identifiers};
use crate::core::vendors::auth::{ClientCredentials, OAuthSession};
use crate::utils::error::{Result, SyncError};
use crate::utils::net::{ClientUtils, HttpClientConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::instrument;

const SERVICE: &str = "dell";

/// Raw Dell warranty API
#[async_trait]
pub trait DellApi: Send + Sync {
    /// Entitlements for up to 100 service tags
    async fn asset_entitlements(&self, service_tags: &[NormalizedIdentifier])
    -> Result<Vec<DellAsset>>;
}

/// HTTP client for the Dell warranty API
#[derive(Debug, Clone)]
pub struct DellClient {
    session: OAuthSession,
    warranty_url: String,
}

impl DellClient {
    /// Build the client and acquire an access token
    pub async fn connect(config: &DellConfig, http: &HttpConfig) -> Result<Self> {
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
        })
    }
}

#[async_trait]
impl DellApi for DellClient {
    #[instrument(skip(self, service_tags), fields(count = service_tags.len()))]
    async fn asset_entitlements(
        &self,
        service_tags: &[NormalizedIdentifier],
    ) -> Result<Vec<DellAsset>> {
        let token = self.session.access_token().await?;
        let response = self
            .session
            .http_client()
            .get(&self.warranty_url)
            .bearer_auth(token)
            .query(&[("servicetags", join_identifiers(service_tags))])
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
