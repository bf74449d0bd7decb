use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const TITLE_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum TopicStatus {
    Solved,
    Unsolved,
}

impl TopicStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicStatus::Solved => "SOLVED",
            TopicStatus::Unsolved => "UNSOLVED",
        }
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown topic status: {0}")]
pub struct UnknownTopicStatus(pub String);

impl FromStr for TopicStatus {
    type Err = UnknownTopicStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SOLVED" => Ok(TopicStatus::Solved),
            "UNSOLVED" => Ok(TopicStatus::Unsolved),
            _ => Err(UnknownTopicStatus(s.to_string())),
        }
    }
}
