//! Per-role aggregation of policy tuples into resource groups.
//!
//! For each requested role key the grants are walked in store order; every
//! grant's group is expanded into its paths, and the resulting
//! `(path, action)` pairs are collected under the group name. Groups are
//! merged by name within one role only. Actions are not deduplicated: a pair
//! reached twice appears twice.
//!
//! Missing data never fails the call. A role with no grants yields an empty
//! resource, and a group with no paths contributes nothing.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use gatehouse_models::{CasbinGroup, CasbinGroupAction, CasbinResource, RoleKey};
use tracing::{debug, instrument};

use crate::store::{MemoryPolicyStore, PolicyStore};

/// Resolves each role key into a [`CasbinResource`].
///
/// The output has one element per input, in input order.
#[instrument(skip_all, fields(roles = roles.len()))]
pub fn list_resources<S, R>(store: &S, roles: &[R]) -> Vec<CasbinResource>
where
    S: PolicyStore + ?Sized,
    R: AsRef<str>,
{
    roles
        .iter()
        .map(|role_key| resolve_role(store, role_key.as_ref()))
        .collect()
}

/// Resolves every subject known to the store, in first-seen order.
pub fn resolve_all(store: &MemoryPolicyStore) -> Vec<CasbinResource> {
    list_resources(store, &store.subjects())
}

fn resolve_role<S>(store: &S, role_key: &str) -> CasbinResource
where
    S: PolicyStore + ?Sized,
{
    let (role, team) = RoleKey::parse(role_key).into_parts();
    let mut groups: Vec<CasbinGroup> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for grant in store.tuples_for_role(role_key) {
        for grouping in store.grouping_tuples_for_group(&grant.group) {
            let action = CasbinGroupAction::new(grouping.path, grant.action.as_str());

            match index_by_name.entry(grant.group.clone()) {
                Entry::Occupied(entry) => groups[*entry.get()].actions.push(action),
                Entry::Vacant(entry) => {
                    entry.insert(groups.len());
                    groups.push(CasbinGroup::new(grant.group.as_str(), action));
                }
            }
        }
    }

    debug!(role_key = %role_key, groups = groups.len(), "Role resolved");

    CasbinResource { role, team, groups }
}
