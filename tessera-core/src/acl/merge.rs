//! Merging access-control modifications.
//!
//! Modifications are grouped by their exact permission string. The first
//! modification seen for a permission is the base and keeps its permission
//! string; later ones are folded into it:
//!
//! - `guest` is the AND of every contributor, so guest access survives a
//!   merge only when all contributors ask for it
//! - every add/remove set is the union of the contributors' sets
//!
//! Output keeps first-seen order, one entry per distinct permission.

use std::collections::HashMap;

use tessera_model::{
    AccessControlEntryModification, AccessControlListModification,
};
use tracing::trace;

/// Merge modifications so each permission appears once.
pub fn merge<I>(modifications: I) -> Vec<AccessControlEntryModification>
where
    I: IntoIterator<Item = AccessControlEntryModification>,
{
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut merged: Vec<AccessControlEntryModification> = Vec::new();

    for modification in modifications {
        match slots.get(&modification.permission) {
            Some(&slot) => {
                trace!(
                    permission = %modification.permission,
                    "combining duplicate acl modification"
                );
                combine(&mut merged[slot], modification);
            }
            None => {
                slots.insert(modification.permission.clone(), merged.len());
                merged.push(modification);
            }
        }
    }

    merged
}

/// [`merge`] over a whole batch, returning a batch.
pub fn merge_list(
    modification: AccessControlListModification,
) -> AccessControlListModification {
    merge(modification).into()
}

fn combine(
    base: &mut AccessControlEntryModification,
    other: AccessControlEntryModification,
) {
    base.guest &= other.guest;
    base.add_users.extend(other.add_users);
    base.remove_users.extend(other.remove_users);
    base.add_roles.extend(other.add_roles);
    base.remove_roles.extend(other.remove_roles);
    base.add_groups.extend(other.add_groups);
    base.remove_groups.extend(other.remove_groups);
}
