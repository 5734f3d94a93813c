//! Requested changes to an access control list.

use std::collections::BTreeSet;

/// Changes requested for a single permission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AccessControlEntryModification {
    /// Permission the changes apply to. Merging keys on the exact string.
    pub permission: String,
    pub guest: bool,
    pub add_users: BTreeSet<String>,
    pub remove_users: BTreeSet<String>,
    pub add_roles: BTreeSet<String>,
    pub remove_roles: BTreeSet<String>,
    pub add_groups: BTreeSet<String>,
    pub remove_groups: BTreeSet<String>,
}

impl AccessControlEntryModification {
    pub fn builder(
        permission: impl Into<String>,
    ) -> AccessControlEntryModificationBuilder {
        AccessControlEntryModificationBuilder {
            inner: AccessControlEntryModification {
                permission: permission.into(),
                ..Default::default()
            },
        }
    }
}

/// Fluent builder for [`AccessControlEntryModification`].
#[derive(Debug, Clone)]
pub struct AccessControlEntryModificationBuilder {
    inner: AccessControlEntryModification,
}

fn extend<I, S>(target: &mut BTreeSet<String>, values: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    target.extend(values.into_iter().map(Into::into));
}

impl AccessControlEntryModificationBuilder {
    pub fn guest(mut self, guest: bool) -> Self {
        self.inner.guest = guest;
        self
    }

    pub fn add_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.inner.add_users, users);
        self
    }

    pub fn remove_users<I, S>(mut self, users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.inner.remove_users, users);
        self
    }

    pub fn add_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.inner.add_roles, roles);
        self
    }

    pub fn remove_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.inner.remove_roles, roles);
        self
    }

    pub fn add_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.inner.add_groups, groups);
        self
    }

    pub fn remove_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.inner.remove_groups, groups);
        self
    }

    pub fn build(self) -> AccessControlEntryModification {
        self.inner
    }
}

/// A batch of entry modifications. Permissions may repeat; merge before
/// applying.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AccessControlListModification(Vec<AccessControlEntryModification>);

impl AccessControlListModification {
    pub fn new(entries: Vec<AccessControlEntryModification>) -> Self {
        Self(entries)
    }

    /// An absent batch is an empty batch.
    pub fn from_optional(
        entries: Option<Vec<AccessControlEntryModification>>,
    ) -> Self {
        Self(entries.unwrap_or_default())
    }

    pub fn entries(&self) -> &[AccessControlEntryModification] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_entries(self) -> Vec<AccessControlEntryModification> {
        self.0
    }
}

impl From<Vec<AccessControlEntryModification>>
    for AccessControlListModification
{
    fn from(entries: Vec<AccessControlEntryModification>) -> Self {
        Self(entries)
    }
}

impl FromIterator<AccessControlEntryModification>
    for AccessControlListModification
{
    fn from_iter<I: IntoIterator<Item = AccessControlEntryModification>>(
        iter: I,
    ) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for AccessControlListModification {
    type Item = AccessControlEntryModification;
    type IntoIter = std::vec::IntoIter<AccessControlEntryModification>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
