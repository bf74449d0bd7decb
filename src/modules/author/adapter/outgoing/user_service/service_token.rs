use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::RwLock;

use super::user_service_config::ClientCredentials;

/// Tokens are refreshed this long before the issuer says they expire.
const EXPIRY_MARGIN: Duration = Duration::from_secs(30);
const DEFAULT_LIFETIME: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceTokenError {
    #[error("Token request failed: {0}")]
    RequestFailed(String),

    #[error("Token endpoint responded with status {0}")]
    Rejected(u16),

    #[error("Token response could not be decoded: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    refresh_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        Instant::now() < self.refresh_at
    }
}

/// Client-credentials token source with an in-process cache.
#[derive(Debug)]
pub struct ServiceTokenSource {
    credentials: ClientCredentials,
    cached: RwLock<Option<CachedToken>>,
}

impl ServiceTokenSource {
    pub fn new(credentials: ClientCredentials) -> Self {
        Self {
            credentials,
            cached: RwLock::new(None),
        }
    }

    pub async fn bearer_token(&self, http: &reqwest::Client) -> Result<String, ServiceTokenError> {
        if let Some(token) = self.cached.read().await.as_ref().filter(|t| t.is_fresh()) {
            return Ok(token.access_token.clone());
        }

        let mut cached = self.cached.write().await;
        // Another request may have refreshed while we waited for the lock.
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh()) {
            return Ok(token.access_token.clone());
        }

        let fresh = self.request_token(http).await?;
        let access_token = fresh.access_token.clone();
        *cached = Some(fresh);

        Ok(access_token)
    }

    async fn request_token(&self, http: &reqwest::Client) -> Result<CachedToken, ServiceTokenError> {
        let mut form: Vec<(&str, &str)> = vec![("grant_type", "client_credentials")];
        if let Some(scope) = self.credentials.scope.as_deref() {
            form.push(("scope", scope));
        }

        tracing::debug!(token_url = %self.credentials.token_url, "Requesting service token");

        let response = http
            .post(&self.credentials.token_url)
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .form(&form)
            .send()
            .await
            .map_err(|e| ServiceTokenError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "Token endpoint rejected service credentials");
            return Err(ServiceTokenError::Rejected(status.as_u16()));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| ServiceTokenError::InvalidResponse(e.to_string()))?;

        Ok(CachedToken {
            access_token: body.access_token,
            refresh_at: refresh_deadline(Instant::now(), body.expires_in),
        })
    }
}

/// Instant at which a token issued at `issued_at` should be replaced.
/// Lifetimes too large to represent fall back to [`DEFAULT_LIFETIME`].
fn refresh_deadline(issued_at: Instant, expires_in: Option<u64>) -> Instant {
    let lifetime = expires_in
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_LIFETIME);

    issued_at
        .checked_add(lifetime.saturating_sub(EXPIRY_MARGIN))
        .or_else(|| issued_at.checked_add(DEFAULT_LIFETIME.saturating_sub(EXPIRY_MARGIN)))
        .unwrap_or(issued_at)
}
