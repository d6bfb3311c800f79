//! OAuth2 client-credentials sessions for vendor APIs
//!
//! Both vendors issue bearer tokens from a client id and secret. Tokens are
//! cached and refreshed shortly before they expire, so a long run does not
//! outlive its token.

use crate::utils::error::{Result, SyncError};
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Lifetime assumed when the token endpoint omits `expires_in`
const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// Client credentials for one vendor
#[derive(Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub token_url: String,
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("token_url", &self.token_url)
            .finish()
    }
}

/// OAuth2 Token with expiration
#[derive(Clone)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub token_type: String,
}

impl AccessToken {
    /// Check if token is expired
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at - Duration::minutes(5) // 5 min buffer
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .field("token_type", &self.token_type)
            .finish()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default = "default_token_type")]
    token_type: String,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Authenticated session against one vendor API
#[derive(Debug, Clone)]
pub struct OAuthSession {
    service: &'static str,
    credentials: ClientCredentials,
    token_cache: Arc<RwLock<Option<AccessToken>>>,
    http_client: Client,
}

impl OAuthSession {
    pub fn new(service: &'static str, credentials: ClientCredentials, http_client: Client) -> Self {
        Self {
            service,
            credentials,
            token_cache: Arc::new(RwLock::new(None)),
            http_client,
        }
    }

    /// Acquire a token now, so bad credentials fail before any work is done
    pub async fn connect(
        service: &'static str,
        credentials: ClientCredentials,
        http_client: Client,
    ) -> Result<Self> {
        let session = Self::new(service, credentials, http_client);
        session.access_token().await?;
        info!("Authenticated against {} API", service);
        Ok(session)
    }

    pub fn http_client(&self) -> &Client {
        &self.http_client
    }

    /// Get a valid access token
    pub async fn access_token(&self) -> Result<String> {
        {
            let cache = self.token_cache.read().await;
            if let Some(token) = cache.as_ref().filter(|t| !t.is_expired()) {
                return Ok(token.token.clone());
            }
        }

        let new_token = self.fetch_token().await?;
        let token_string = new_token.token.clone();
        *self.token_cache.write().await = Some(new_token);
        Ok(token_string)
    }

    async fn fetch_token(&self) -> Result<AccessToken> {
        debug!("Requesting {} access token", self.service);
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.credentials.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| SyncError::auth(self.service, format!("Token request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SyncError::auth(
                self.service,
                format!("Token endpoint returned {}: {}", status, body),
            ));
        }

        let token_response: TokenResponse = response.json().await.map_err(|e| {
            SyncError::auth(self.service, format!("Invalid token response: {}", e))
        })?;

        Ok(AccessToken {
            token: token_response.access_token,
            expires_at: Utc::now()
                + Duration::seconds(
                    token_response
                        .expires_in
                        .unwrap_or(DEFAULT_TOKEN_LIFETIME_SECS),
                ),
            token_type: token_response.token_type,
        })
    }
}
