use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every role a stored message can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    /// Written only by the server's anchor pulse.
    Anchor,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Anchor => "anchor",
        }
    }
}

impl FromStr for Role {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            "anchor" => Ok(Self::Anchor),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}

/// The subset of roles a client may submit through `/messages/send`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientRole {
    User,
    Assistant,
}

impl FromStr for ClientRole {
    type Err = InvalidRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}

impl From<ClientRole> for Role {
    fn from(role: ClientRole) -> Self {
        match role {
            ClientRole::User => Self::User,
            ClientRole::Assistant => Self::Assistant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role: {0:?}")]
pub struct InvalidRole(pub String);

/// A stored message, immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub device_id: String,
    pub role: Role,
    pub text: String,
    pub symbols: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_role_rejects_anchor_and_unknown() {
        assert_eq!("user".parse::<ClientRole>(), Ok(ClientRole::User));
        assert_eq!("assistant".parse::<ClientRole>(), Ok(ClientRole::Assistant));
        assert!("anchor".parse::<ClientRole>().is_err());
        assert!("moderator".parse::<ClientRole>().is_err());
        assert!("User".parse::<ClientRole>().is_err());
    }

    #[test]
    fn role_parses_every_stored_value() {
        for role in [Role::User, Role::Assistant, Role::Anchor] {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Anchor).unwrap(), "\"anchor\"");
    }
}
