//! Flat snapshot of the model surface.
//! Prefer importing from this module when a caller touches both the sort and
//! access-control halves of the model.

pub use super::acl::{AccessControlEntry, AccessControlList, Principal};
pub use super::error::ModelError;
pub use super::modification::{
    AccessControlEntryModification, AccessControlEntryModificationBuilder,
    AccessControlListModification,
};
pub use super::sort::{
    CaseHandling, NullHandling, SortDirection, SortOrder, SortOrderItem,
};
