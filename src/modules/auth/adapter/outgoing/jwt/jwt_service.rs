use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::fmt;

use crate::auth::application::ports::outgoing::{AccessClaims, TokenError, TokenVerifier};
use crate::author::application::domain::entities::AuthorId;

use super::jwt_config::JwtConfig;

/// `user_id` is issued either as a JSON number or as a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum UserIdClaim {
    Number(i64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScopeClaim {
    List(Vec<String>),
    Joined(String),
}

impl ScopeClaim {
    fn into_scopes(self) -> Vec<String> {
        match self {
            ScopeClaim::List(list) => list,
            ScopeClaim::Joined(joined) => joined.split_whitespace().map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawClaims {
    #[serde(default)]
    user_id: Option<UserIdClaim>,
    #[serde(default)]
    scope: Option<ScopeClaim>,
    #[serde(default)]
    scp: Option<ScopeClaim>,
}

impl RawClaims {
    fn into_access_claims(self) -> Result<AccessClaims, TokenError> {
        let author_id = match self.user_id {
            Some(UserIdClaim::Number(id)) => id,
            Some(UserIdClaim::Text(raw)) => raw.trim().parse::<i64>().map_err(|_| {
                TokenError::InvalidClaims(format!("user_id '{raw}' is not numeric"))
            })?,
            None => {
                return Err(TokenError::InvalidClaims(
                    "user_id claim is missing".to_string(),
                ))
            }
        };

        let mut scopes = Vec::new();
        for claim in [self.scope, self.scp].into_iter().flatten() {
            for scope in claim.into_scopes() {
                if !scopes.contains(&scope) {
                    scopes.push(scope);
                }
            }
        }

        Ok(AccessClaims {
            author_id: AuthorId::from(author_id),
            scopes,
        })
    }
}

#[derive(Clone)]
pub struct JwtTokenService {
    decoding_key: DecodingKey,
    validation: Validation,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("config", &"JwtConfig")
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        validation.validate_nbf = true;
        validation.set_required_spec_claims(&["exp"]);

        if let Some(issuer) = config.issuer.as_deref() {
            validation.set_issuer(&[issuer]);
        }
        match config.audience.as_deref() {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key,
            validation,
        }
    }
}

impl TokenVerifier for JwtTokenService {
    fn verify_access_token(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let decoded =
            decode::<RawClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer
                    | ErrorKind::InvalidAudience
                    | ErrorKind::MissingRequiredClaim(_) => {
                        tracing::warn!(error = %e, "Token verification failed: Claim rejected");
                        TokenError::InvalidClaims(e.to_string())
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        decoded.claims.into_access_claims().map_err(|e| {
            tracing::warn!(error = %e, "Token verification failed: Unusable claims");
            e
        })
    }
}
