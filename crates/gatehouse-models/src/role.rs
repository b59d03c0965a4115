//! Session roles carried in the token audience.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Error returned by the strict [`FromStr`] parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl std::error::Error for ParseRoleError {}

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown role: '{}'", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// No role, or one this service does not recognize.
    #[default]
    #[serde(rename = "")]
    Unset,
    SuperAdmin,
    Leader,
    Staff,
    Client,
    Seller,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::SuperAdmin,
        Role::Leader,
        Role::Staff,
        Role::Client,
        Role::Seller,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::SuperAdmin => "super_admin",
            Self::Leader => "leader",
            Self::Staff => "staff",
            Self::Client => "client",
            Self::Seller => "seller",
        }
    }

    /// Human-readable name; empty for [`Role::Unset`].
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::SuperAdmin => "Super Admin",
            Self::Leader => "Leader",
            Self::Staff => "Staff",
            Self::Client => "Client",
            Self::Seller => "Seller",
        }
    }

    /// Total conversion used for token claims: unknown values become [`Role::Unset`].
    pub fn from_claim(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Back-office roles.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Leader | Self::Staff)
    }

    pub fn is_seller(&self) -> bool {
        *self == Self::Seller
    }

    pub fn is_buyer(&self) -> bool {
        *self == Self::Client
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::Unset
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::Unset);
        }
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
