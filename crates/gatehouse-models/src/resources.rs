//! The resource tree returned for each requested role.
//!
//! Serialized shape:
//!
//! ```json
//! [{"role": "admin", "team": "teamA",
//!   "groups": [{"name": "docs",
//!               "actions": [{"path": "/documents", "action": "read"}]}]}]
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One resolved `(path, action)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CasbinGroupAction {
    pub path: String,
    pub action: String,
}

impl CasbinGroupAction {
    pub fn new(path: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            action: action.into(),
        }
    }
}

/// A named permission group with its actions in discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CasbinGroup {
    pub name: String,
    pub actions: Vec<CasbinGroupAction>,
}

impl CasbinGroup {
    pub fn new(name: impl Into<String>, first: CasbinGroupAction) -> Self {
        Self {
            name: name.into(),
            actions: vec![first],
        }
    }
}

/// Everything one role key may access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CasbinResource {
    pub role: String,
    pub team: String,
    pub groups: Vec<CasbinGroup>,
}

impl CasbinResource {
    /// Looks up a group by name.
    pub fn group(&self, name: &str) -> Option<&CasbinGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// True when the role resolved to no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
