//! # Gatehouse Policy
//!
//! Turns flat policy tuples into a per-role tree of resource groups.
//!
//! - [`store`]: the read-only [`PolicyStore`] interface and an in-memory implementation
//! - [`resources`]: the aggregation itself
//!
//! # Example
//!
//! ```ignore
//! use gatehouse_policy::{MemoryPolicyStore, list_resources};
//!
//! let store = MemoryPolicyStore::from_csv(include_str!("policy.csv"))?;
//! let resources = list_resources(&store, &["leader:sales", "staff:sales"]);
//! println!("{}", serde_json::to_string_pretty(&resources)?);
//! ```

pub mod resources;
pub mod store;

pub use resources::{list_resources, resolve_all};
pub use store::{MemoryPolicyStore, PolicyError, PolicyStore};
