//! # Gatehouse Core
//!
//! Foundational types shared by every Gatehouse crate:
//!
//! - [`errors`]: the authorization error taxonomy
//! - [`fallback`]: "value or first non-empty fallback" helpers
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_core::{AuthError, first_non_empty};
//!
//! let user_id = first_non_empty(&[claims.id.as_str(), default_user_id]);
//! if user_id.is_empty() {
//!     return Err(AuthError::TokenInvalid);
//! }
//! ```

pub mod errors;
pub mod fallback;

// Re-export commonly used types at crate root
pub use errors::AuthError;
pub use fallback::{first_non_empty, or_default};
