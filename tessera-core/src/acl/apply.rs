//! Applying a modification batch to an access control list.

use std::collections::BTreeSet;

use tessera_model::{
    AccessControlEntry, AccessControlEntryModification, AccessControlList,
    AccessControlListModification,
};
use tracing::debug;

use super::merge::merge;

/// Permissions touched by [`apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    /// Entries created or changed, in modification order.
    pub updated: Vec<String>,
    /// Entries dropped because they no longer grant anything.
    pub removed: Vec<String>,
}

/// Fold `modification` into `acl`.
///
/// The batch is merged first, so each permission is touched once. For every
/// permission the guest flag is overwritten, additions are inserted and then
/// removals deleted: a principal both added and removed ends up removed. An
/// entry that grants nothing afterwards is dropped.
pub fn apply(
    acl: &mut AccessControlList,
    modification: AccessControlListModification,
) -> ApplyOutcome {
    let mut outcome = ApplyOutcome::default();

    for change in merge(modification) {
        let permission = change.permission.clone();
        let entry = acl.entries.entry(permission.clone()).or_default();
        apply_entry(entry, change);

        if entry.is_empty() {
            acl.entries.remove(&permission);
            outcome.removed.push(permission);
        } else {
            outcome.updated.push(permission);
        }
    }

    debug!(
        owner = %acl.owner,
        updated = outcome.updated.len(),
        removed = outcome.removed.len(),
        "applied acl modification"
    );
    outcome
}

fn apply_entry(
    entry: &mut AccessControlEntry,
    change: AccessControlEntryModification,
) {
    entry.guest = change.guest;
    update(&mut entry.users, change.add_users, &change.remove_users);
    update(&mut entry.roles, change.add_roles, &change.remove_roles);
    update(&mut entry.groups, change.add_groups, &change.remove_groups);
}

fn update(
    target: &mut BTreeSet<String>,
    add: BTreeSet<String>,
    remove: &BTreeSet<String>,
) {
    target.extend(add);
    target.retain(|value| !remove.contains(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_model::Principal;

    #[test]
    fn creates_updates_and_drops_entries() {
        let mut acl = AccessControlList::new("owner");
        let outcome = apply(
            &mut acl,
            vec![
                AccessControlEntryModification::builder("read")
                    .guest(true)
                    .build(),
                AccessControlEntryModification::builder("write")
                    .add_users(["bob"])
                    .add_roles(["editor"])
                    .build(),
            ]
            .into(),
        );
        assert_eq!(outcome.updated, vec!["read", "write"]);
        assert!(acl.is_granted("read", &Principal::anonymous()));
        assert!(acl.is_granted("write", &Principal::user("bob")));

        let outcome = apply(
            &mut acl,
            vec![
                AccessControlEntryModification::builder("write")
                    .remove_users(["bob"])
                    .remove_roles(["editor"])
                    .build(),
            ]
            .into(),
        );
        assert_eq!(outcome.removed, vec!["write"]);
        assert!(acl.entry("write").is_none());
        assert!(!acl.is_granted("write", &Principal::user("bob")));
    }

    #[test]
    fn removal_wins_over_addition() {
        let mut acl = AccessControlList::new("owner");
        apply(
            &mut acl,
            vec![
                AccessControlEntryModification::builder("write")
                    .add_users(["bob", "carol"])
                    .build(),
                AccessControlEntryModification::builder("write")
                    .remove_users(["bob"])
                    .build(),
            ]
            .into(),
        );
        let entry = acl.entry("write").unwrap();
        assert_eq!(entry.users.iter().collect::<Vec<_>>(), vec!["carol"]);
    }
}
