//! Claim set carried by session tokens.
//!
//! Field names on the wire are the registered JWT claim names:
//!
//! - `jti`: user ID
//! - `aud`: session role
//! - `iss`: token issuer, `ghost|<operator id>` for ghost logins
//! - `sub`: subject
//! - `exp`, `iat`, `nbf`: Unix timestamps

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    /// User ID (JWT ID claim)
    #[serde(rename = "jti", default)]
    pub id: String,
    /// Session role (audience claim)
    #[serde(rename = "aud", default)]
    pub audience: String,
    /// Issuer claim
    #[serde(rename = "iss", default)]
    pub issuer: String,
    /// Subject claim
    #[serde(rename = "sub", default)]
    pub subject: String,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued-at timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Not-before timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,
}
