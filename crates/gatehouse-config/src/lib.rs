//! # Gatehouse Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token verification settings
//! - [`policy`]: policy file location
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_config::{JwtConfig, PolicyConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let policy_config = PolicyConfig::from_env();
//! ```

pub mod jwt;
pub mod policy;

// Re-export commonly used types at crate root
pub use jwt::JwtConfig;
pub use policy::PolicyConfig;
