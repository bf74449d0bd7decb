use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenVerifier;

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only_0123456789";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig::new(TEST_JWT_SECRET).expect("test secret is long enough")
}

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(test_jwt_config())
}

pub fn test_token_verifier() -> Arc<dyn TokenVerifier + Send + Sync> {
    Arc::new(test_jwt_service())
}

pub fn now_ts() -> i64 {
    Utc::now().timestamp()
}

pub fn signed_with(secret: &str, claims: serde_json::Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("token should encode")
}

pub fn access_token(claims: serde_json::Value) -> String {
    signed_with(TEST_JWT_SECRET, claims)
}

/// `Authorization` header value for a caller, `user_id` issued as a string.
pub fn bearer_for(user_id: i64, scopes: &[&str]) -> String {
    let token = access_token(serde_json::json!({
        "user_id": user_id.to_string(),
        "scope": scopes.join(" "),
        "exp": now_ts() + 600,
    }));
    format!("Bearer {token}")
}
