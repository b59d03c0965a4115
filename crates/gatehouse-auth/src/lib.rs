//! # Gatehouse Auth
//!
//! Session token validation and the per-request authorization context.
//!
//! This crate provides:
//!
//! - [`claims`]: the signed claim set carried by session tokens
//! - [`jwt`]: token validation and the bearer credential path
//! - [`context`]: turning validated claims into an [`AuthorizationContext`]
//! - `extract` (feature `axum`): an axum extractor producing the context
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_auth::{authenticate, extract_context};
//! use gatehouse_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let claims = authenticate(Some("Bearer eyJ..."), &config)?;
//! let ctx = extract_context(&claims);
//! if ctx.is_ghost() {
//!     println!("{} is acting as {}", ctx.ghost_id(), ctx.user_id());
//! }
//! ```

pub mod claims;
pub mod context;
#[cfg(feature = "axum")]
pub mod extract;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::JwtClaims;
pub use context::{
    AuthorizationContext, ContextDefaults, GHOST_TAG, extract_context, extract_context_with,
    parse_ghost_issuer,
};
#[cfg(feature = "axum")]
pub use extract::{AuthContext, AuthRejection, TIMEZONE_HEADER};
pub use jwt::{
    CredentialRejection, authenticate, authenticate_token, bearer_token, validate_token,
    validate_token_at, verify_session_issuer,
};
