//! Sort-order handling
//!
//! This module provides:
//! - The lenient text codec for `field,direction,case,nulls;...`
//! - Mapping between sort orders and generic sort/page requests
//! - A comparator that applies a sort order to in-memory records
//! - Serde helpers carrying a sort order as its text form

pub mod codec;
pub mod compare;
pub mod mapping;
pub mod serde_text;

pub use codec::*;
pub use compare::*;
pub use mapping::*;
