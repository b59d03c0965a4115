//! Read-only access to policy and grouping tuples.
//!
//! Storage is the caller's concern: the aggregator only needs the two queries
//! on [`PolicyStore`]. [`MemoryPolicyStore`] covers tests, the CLI, and hosts
//! that load a casbin-style policy file at startup.
//!
//! # Policy file format
//!
//! ```text
//! # p, <role key>, <group>, <action>
//! p, leader:sales, sales, POST
//! p, staff:sales, sales, GET
//!
//! # g2, <path>, <group>
//! g2, /sales/*, sales
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use gatehouse_models::{GroupingTuple, PolicyTuple};
use tracing::{debug, instrument};

const POLICY_KEY: &str = "p";
const RESOURCE_GROUPING_KEY: &str = "g2";

/// Error type for loading policy files.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error("Failed to read policy file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed policy line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
}

/// Query surface over a fixed set of policy tuples.
///
/// Implementations must return tuples in a stable order; the aggregator
/// preserves it in its output.
pub trait PolicyStore {
    /// All `(role, group, action)` grants for this exact role key.
    fn tuples_for_role(&self, role_key: &str) -> Vec<PolicyTuple>;

    /// All `(path, group)` pairs that realize `group`.
    fn grouping_tuples_for_group(&self, group: &str) -> Vec<GroupingTuple>;
}

impl<T: PolicyStore + ?Sized> PolicyStore for &T {
    fn tuples_for_role(&self, role_key: &str) -> Vec<PolicyTuple> {
        (**self).tuples_for_role(role_key)
    }

    fn grouping_tuples_for_group(&self, group: &str) -> Vec<GroupingTuple> {
        (**self).grouping_tuples_for_group(group)
    }
}

impl<T: PolicyStore + ?Sized> PolicyStore for Arc<T> {
    fn tuples_for_role(&self, role_key: &str) -> Vec<PolicyTuple> {
        (**self).tuples_for_role(role_key)
    }

    fn grouping_tuples_for_group(&self, group: &str) -> Vec<GroupingTuple> {
        (**self).grouping_tuples_for_group(group)
    }
}

/// An in-memory store returning tuples in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPolicyStore {
    policies: Vec<PolicyTuple>,
    groupings: Vec<GroupingTuple>,
}

impl MemoryPolicyStore {
    /// Wraps already-loaded tuples. Their order is the order queries return.
    pub fn new(policies: Vec<PolicyTuple>, groupings: Vec<GroupingTuple>) -> Self {
        Self {
            policies,
            groupings,
        }
    }

    /// Parses casbin-style policy text.
    ///
    /// Blank lines and `#` comments are skipped, as are sections other than
    /// `p` and `g2`.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::MalformedLine`] if a `p` line does not have
    /// exactly three values or a `g2` line exactly two, or a value is empty.
    pub fn from_csv(text: &str) -> Result<Self, PolicyError> {
        let mut store = Self::default();

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let line_no = index + 1;

            match fields.as_slice() {
                [POLICY_KEY, values @ ..] => {
                    let [role, group, action] = expect_values::<3>(values, line_no, POLICY_KEY)?;
                    store.policies.push(PolicyTuple::new(role, group, action));
                }
                [RESOURCE_GROUPING_KEY, values @ ..] => {
                    let [path, group] =
                        expect_values::<2>(values, line_no, RESOURCE_GROUPING_KEY)?;
                    store.groupings.push(GroupingTuple::new(path, group));
                }
                _ => {}
            }
        }

        debug!(
            policies = store.policies.len(),
            groupings = store.groupings.len(),
            "Policy loaded"
        );
        Ok(store)
    }

    /// Reads and parses a policy file.
    ///
    /// # Errors
    ///
    /// - [`PolicyError::Io`] if the file cannot be read
    /// - [`PolicyError::MalformedLine`] as for [`MemoryPolicyStore::from_csv`]
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = MemoryPolicyStore::from_path("policy/policy.csv")?;
    /// ```
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PolicyError> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_csv(&text)
    }

    /// All `p` grants in file order.
    pub fn policies(&self) -> &[PolicyTuple] {
        &self.policies
    }

    /// All `g2` groupings in file order.
    pub fn groupings(&self) -> &[GroupingTuple] {
        &self.groupings
    }

    /// Every distinct role key in first-seen order.
    pub fn subjects(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.policies
            .iter()
            .filter(|p| seen.insert(p.role.as_str()))
            .map(|p| p.role.clone())
            .collect()
    }
}

fn expect_values<'a, const N: usize>(
    values: &[&'a str],
    line: usize,
    key: &str,
) -> Result<[&'a str; N], PolicyError> {
    let values: [&'a str; N] = values.try_into().map_err(|_| PolicyError::MalformedLine {
        line,
        reason: format!("'{}' expects {} values, found {}", key, N, values.len()),
    })?;

    if values.iter().any(|v| v.is_empty()) {
        return Err(PolicyError::MalformedLine {
            line,
            reason: "empty value".to_string(),
        });
    }

    Ok(values)
}

impl PolicyStore for MemoryPolicyStore {
    fn tuples_for_role(&self, role_key: &str) -> Vec<PolicyTuple> {
        self.policies
            .iter()
            .filter(|p| p.role == role_key)
            .cloned()
            .collect()
    }

    fn grouping_tuples_for_group(&self, group: &str) -> Vec<GroupingTuple> {
        self.groupings
            .iter()
            .filter(|g| g.group == group)
            .cloned()
            .collect()
    }
}
