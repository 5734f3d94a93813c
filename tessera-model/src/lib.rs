//! Core data model definitions shared across Tessera crates.
#![allow(missing_docs)]

pub mod acl;
pub mod error;
pub mod modification;
pub mod prelude;
pub mod sort;

// Intentionally curated re-exports for downstream consumers.
pub use acl::{AccessControlEntry, AccessControlList, Principal};
pub use error::ModelError;
pub use modification::{
    AccessControlEntryModification, AccessControlEntryModificationBuilder,
    AccessControlListModification,
};
pub use sort::{
    CaseHandling, NullHandling, SortDirection, SortOrder, SortOrderItem,
};
