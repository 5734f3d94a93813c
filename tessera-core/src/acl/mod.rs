//! Access-control list operations
//!
//! - [`merge`]: collapse a batch of modifications to one per permission
//! - [`apply`]: fold a batch into an existing list
//! - [`document`]: convert lists to and from key-value documents

pub mod apply;
pub mod document;
pub mod merge;

pub use apply::{ApplyOutcome, apply};
pub use document::{Document, from_document, from_json, to_document};
pub use merge::{merge, merge_list};
