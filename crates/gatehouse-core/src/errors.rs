//! Error taxonomy for token validation and authorization context extraction.
//!
//! Every failure surfaced by the validator and the extractor is one of the
//! [`AuthError`] kinds. Errors from the underlying token library are mapped
//! before they leave `gatehouse-auth`, so callers never match on library
//! error shapes.

/// Authorization failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum AuthError {
    /// No credential was supplied where one was required.
    #[error("Authentication token is missing")]
    TokenMissing,

    /// A credential was supplied but is malformed, mis-signed, or otherwise invalid.
    #[error("Authentication token is invalid")]
    TokenInvalid,

    /// The credential is well formed but outside its validity window.
    #[error("Authentication token has expired")]
    TokenExpired,

    /// A referenced record does not exist.
    #[error("Record not found")]
    RecordNotFound,
}

impl AuthError {
    /// Stable machine-readable code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TokenMissing => "token_missing",
            Self::TokenInvalid => "token_invalid",
            Self::TokenExpired => "token_expired",
            Self::RecordNotFound => "record_not_found",
        }
    }

    /// Whether this kind means the caller failed to authenticate.
    pub fn is_authentication_failure(&self) -> bool {
        matches!(
            self,
            Self::TokenMissing | Self::TokenInvalid | Self::TokenExpired
        )
    }
}
