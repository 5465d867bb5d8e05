//! Session and user identity models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Role attached to a HireHub account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Job seeker browsing and applying to listings
    Seeker,
    /// Hirer posting and managing listings
    Hirer,
    /// Moderator approving and rejecting listings
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Seeker => "seeker",
            UserRole::Hirer => "hirer",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized role string from the backend.
#[derive(Debug, Error)]
#[error("unknown user role: {0}")]
pub struct RoleParseError(pub String);

impl FromStr for UserRole {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "seeker" => Ok(UserRole::Seeker),
            "hirer" => Ok(UserRole::Hirer),
            "admin" => Ok(UserRole::Admin),
            other => Err(RoleParseError(other.to_string())),
        }
    }
}

/// Credentials and identity for one signed-in session.
///
/// Owned by the credential store. The refresh coordinator replaces only
/// `access_token`; logout clears every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(
        default,
        rename = "user_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub role: Option<UserRole>,
}

impl Session {
    /// True when no field is set (logged out).
    pub fn is_empty(&self) -> bool {
        self.access_token.is_none()
            && self.refresh_token.is_none()
            && self.email.is_none()
            && self.role.is_none()
    }
}
