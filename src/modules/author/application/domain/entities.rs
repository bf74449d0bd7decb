use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier issued by the user service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct AuthorId(i64);

impl AuthorId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for AuthorId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<AuthorId> for i64 {
    fn from(id: AuthorId) -> Self {
        id.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role attached to an author by the user service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProfileName {
    Basic,
    Mod,
    Adm,
}

impl ProfileName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileName::Basic => "BASIC",
            ProfileName::Mod => "MOD",
            ProfileName::Adm => "ADM",
        }
    }

    /// Moderators and administrators may act on content they do not own.
    pub fn is_staff(&self) -> bool {
        matches!(self, ProfileName::Mod | ProfileName::Adm)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown profile name: {0}")]
pub struct UnknownProfileName(pub String);

impl FromStr for ProfileName {
    type Err = UnknownProfileName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BASIC" => Ok(ProfileName::Basic),
            "MOD" => Ok(ProfileName::Mod),
            "ADM" => Ok(ProfileName::Adm),
            _ => Err(UnknownProfileName(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub username: String,
    pub profile: ProfileName,
}
