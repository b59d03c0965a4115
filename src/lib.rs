//! # Gatehouse
//!
//! Role-based policy resolution and session authorization context.
//!
//! ## Overview
//!
//! - **Resource resolution**: flat `(role, group, action)` grants and
//!   `(path, group)` groupings are aggregated into one resource tree per role
//! - **Session tokens**: HMAC-signed JWTs are validated into claims, with
//!   missing, invalid and expired credentials kept apart
//! - **Authorization context**: claims become the acting user, role, ghost
//!   operator and timezone for a request
//!
//! ## Layout
//!
//! ```text
//! crates/
//! ├── gatehouse-core/           # AuthError, fallback helpers
//! ├── gatehouse-config/         # JwtConfig, PolicyConfig
//! ├── gatehouse-models/         # RoleKey, tuples, CasbinResource, Role, Timezone
//! ├── gatehouse-auth/           # token validation, context extraction, axum extractor
//! ├── gatehouse-policy/         # PolicyStore, MemoryPolicyStore, list_resources
//! └── gatehouse-observability/  # logging setup
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use gatehouse::{MemoryPolicyStore, list_resources};
//!
//! let store = MemoryPolicyStore::from_path("policy/policy.csv")?;
//! for resource in list_resources(&store, &["leader:sales"]) {
//!     println!("{}:{} has {} groups", resource.role, resource.team, resource.groups.len());
//! }
//! ```

pub mod cli;

pub use gatehouse_auth as auth;
pub use gatehouse_config as config;
pub use gatehouse_models as models;
pub use gatehouse_observability as observability;
pub use gatehouse_policy as policy;

pub use gatehouse_auth::{
    AuthContext, AuthRejection, AuthorizationContext, ContextDefaults, JwtClaims, authenticate,
    authenticate_token, extract_context, extract_context_with, validate_token, validate_token_at,
    verify_session_issuer,
};
pub use gatehouse_config::{JwtConfig, PolicyConfig};
pub use gatehouse_core::AuthError;
pub use gatehouse_models::{
    CasbinGroup, CasbinGroupAction, CasbinResource, GroupingTuple, PolicyTuple, Role, RoleKey,
    Timezone,
};
pub use gatehouse_policy::{MemoryPolicyStore, PolicyError, PolicyStore, list_resources, resolve_all};
