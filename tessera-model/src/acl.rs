//! Access control lists.
//!
//! An [`AccessControlList`] belongs to an owner and maps permission names to
//! [`AccessControlEntry`] grants. The owner is implicitly granted every
//! permission; everyone else needs a matching entry.

use std::collections::{BTreeMap, BTreeSet};

/// Grants for one permission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AccessControlEntry {
    /// Granted to anyone, authenticated or not.
    pub guest: bool,
    pub users: BTreeSet<String>,
    pub roles: BTreeSet<String>,
    pub groups: BTreeSet<String>,
}

impl AccessControlEntry {
    /// True when the entry grants nothing to anybody.
    pub fn is_empty(&self) -> bool {
        !self.guest
            && self.users.is_empty()
            && self.roles.is_empty()
            && self.groups.is_empty()
    }

    pub fn grants(&self, principal: &Principal) -> bool {
        if self.guest {
            return true;
        }
        if let Some(user) = principal.user.as_deref()
            && self.users.contains(user)
        {
            return true;
        }
        principal.roles.iter().any(|r| self.roles.contains(r))
            || principal.groups.iter().any(|g| self.groups.contains(g))
    }
}

/// Owner plus permission -> entry mapping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessControlList {
    pub owner: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub entries: BTreeMap<String, AccessControlEntry>,
}

impl AccessControlList {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn with_entry(
        mut self,
        permission: impl Into<String>,
        entry: AccessControlEntry,
    ) -> Self {
        self.entries.insert(permission.into(), entry);
        self
    }

    pub fn entry(&self, permission: &str) -> Option<&AccessControlEntry> {
        self.entries.get(permission)
    }

    pub fn is_owner(&self, principal: &Principal) -> bool {
        principal.user.as_deref() == Some(self.owner.as_str())
    }

    /// Check whether `principal` holds `permission` on this list.
    pub fn is_granted(&self, permission: &str, principal: &Principal) -> bool {
        self.is_owner(principal)
            || self
                .entries
                .get(permission)
                .is_some_and(|entry| entry.grants(principal))
    }

    /// Permissions `principal` holds through entries (owners hold all).
    pub fn granted_permissions(&self, principal: &Principal) -> Vec<&str> {
        let owner = self.is_owner(principal);
        self.entries
            .iter()
            .filter(|(_, entry)| owner || entry.grants(principal))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// The identity an access check is made for. An anonymous principal has no
/// user and can only pass guest entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Principal {
    pub user: Option<String>,
    pub roles: BTreeSet<String>,
    pub groups: BTreeSet<String>,
}

impl Principal {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn user(name: impl Into<String>) -> Self {
        Self {
            user: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.insert(group.into());
        self
    }
}
