//! Core algorithms for Tessera.
//!
//! - [`sort`]: the compact sort-order text codec, mapping onto a generic
//!   sort/page request, and an in-memory comparator.
//! - [`acl`]: merging access-control modifications, applying them to a list,
//!   and converting lists to and from key-value documents.
//!
//! Everything here is synchronous and free of shared state.
#![allow(missing_docs)]

pub mod acl;
pub mod error;
pub mod sort;

pub use error::{CoreError, DocumentError, Result};
pub use tessera_model as model;
pub use tessera_model::{
    AccessControlEntry, AccessControlEntryModification, AccessControlList,
    AccessControlListModification, CaseHandling, NullHandling, Principal,
    SortDirection, SortOrder, SortOrderItem,
};
