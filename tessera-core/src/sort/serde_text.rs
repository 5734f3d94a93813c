//! Serde adapter that carries a [`SortOrder`] as its text form.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use tessera_core::SortOrder;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Listing {
//!     #[serde(default, with = "tessera_core::sort::serde_text")]
//!     sort: SortOrder,
//! }
//!
//! let listing: Listing =
//!     serde_json::from_str(r#"{"sort": "name,desc"}"#).unwrap();
//! assert_eq!(
//!     serde_json::to_string(&listing).unwrap(),
//!     r#"{"sort":"name,desc"}"#
//! );
//! ```
//!
//! Unsorted is written as `null`, and `null` reads back as unsorted.

use serde::{Deserialize, Deserializer, Serializer};
use tessera_model::SortOrder;

use super::codec;

pub fn serialize<S>(order: &SortOrder, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match codec::encode(order) {
        Some(text) => serializer.serialize_str(&text),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<SortOrder, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    Ok(codec::parse(text.as_deref()))
}
