//! Raw tuples as returned by a policy store.

use serde::{Deserialize, Serialize};

/// One permission grant: `role` may perform `action` on every path in `group`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicyTuple {
    pub role: String,
    pub group: String,
    pub action: String,
}

impl PolicyTuple {
    pub fn new(
        role: impl Into<String>,
        group: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            group: group.into(),
            action: action.into(),
        }
    }
}

/// Maps a named permission group to one concrete resource path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupingTuple {
    pub path: String,
    pub group: String,
}

impl GroupingTuple {
    pub fn new(path: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            group: group.into(),
        }
    }
}
