use std::env;
use std::fmt;

/// HS256 needs a key of at least 32 bytes.
pub const MIN_SECRET_LEN: usize = 32;
const DEFAULT_LEEWAY_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least {MIN_SECRET_LEN} characters long for HS256 algorithm")]
    SecretTooShort,
}

#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: Option<String>,
    pub audience: Option<String>,
    pub leeway_secs: u64,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret_key", &"***")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

impl JwtConfig {
    pub fn new(secret_key: impl Into<String>) -> Result<Self, JwtConfigError> {
        let secret_key = secret_key.into();
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(JwtConfigError::SecretTooShort);
        }

        Ok(Self {
            secret_key,
            issuer: None,
            audience: None,
            leeway_secs: DEFAULT_LEEWAY_SECS,
        })
    }

    /// Load JWT verification settings from environment variables.
    ///
    /// `JWT_ISSUER` and `JWT_AUDIENCE` are only validated when set.
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;

        let mut config = Self::new(secret_key)?;
        config.issuer = env::var("JWT_ISSUER").ok().filter(|v| !v.trim().is_empty());
        config.audience = env::var("JWT_AUDIENCE").ok().filter(|v| !v.trim().is_empty());

        Ok(config)
    }
}
