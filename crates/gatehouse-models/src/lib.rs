//! # Gatehouse Models
//!
//! Data structures shared by the policy aggregator and the token layer.
//!
//! # Modules
//!
//! - [`role_key`]: `"<role>:<team>"` subject keys
//! - [`policy`]: raw policy and grouping tuples
//! - [`resources`]: the per-role resource tree returned to clients
//! - [`role`]: the closed set of session roles
//! - [`timezone`]: supported request timezones
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_models::{RoleKey, Role};
//!
//! let key = RoleKey::parse("leader:sales");
//! assert_eq!(key.role(), "leader");
//! assert!(Role::from_claim(key.role()).is_admin());
//! ```

pub mod policy;
pub mod resources;
pub mod role;
pub mod role_key;
pub mod timezone;

// Re-export commonly used types at crate root for convenience
pub use policy::{GroupingTuple, PolicyTuple};
pub use resources::{CasbinGroup, CasbinGroupAction, CasbinResource};
pub use role::{ParseRoleError, Role};
pub use role_key::RoleKey;
pub use timezone::Timezone;
