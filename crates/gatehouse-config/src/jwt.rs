//! Token verification configuration.
//!
//! # Environment Variables
//!
//! - `JWT_SECRET`: shared HMAC secret used to verify session tokens
//! - `JWT_ALGORITHM`: `HS256`, `HS384` or `HS512` (default: `HS256`)
//! - `JWT_LEEWAY`: clock skew tolerance in seconds (default: `0`)

use std::env;
use std::str::FromStr;

use jsonwebtoken::Algorithm;

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    /// Seconds of tolerance applied to `exp` and `nbf`.
    pub leeway: u64,
}

impl JwtConfig {
    /// HS256 configuration with no leeway.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            leeway: 0,
        }
    }

    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string()),
            algorithm: env::var("JWT_ALGORITHM")
                .ok()
                .and_then(|s| parse_hmac_algorithm(&s))
                .unwrap_or(Algorithm::HS256),
            leeway: env::var("JWT_LEEWAY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
        }
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    #[must_use]
    pub fn with_leeway(mut self, leeway: u64) -> Self {
        self.leeway = leeway;
        self
    }
}

/// Only shared-secret algorithms are accepted; anything else is rejected.
fn parse_hmac_algorithm(value: &str) -> Option<Algorithm> {
    match Algorithm::from_str(value.trim()).ok()? {
        alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) => Some(alg),
        _ => None,
    }
}
