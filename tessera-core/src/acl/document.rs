//! Conversion between [`AccessControlList`] and a nested key-value document.
//!
//! Layout:
//!
//! ```json
//! {
//!   "owner": "alice",
//!   "entries": {
//!     "write": { "guest": false, "users": ["bob"], "roles": [], "groups": [] }
//!   }
//! }
//! ```
//!
//! Reading is forgiving about absent optional fields but strict about types.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};
use tessera_model::{AccessControlEntry, AccessControlList};

use crate::error::{DocumentError, Result};

/// Key-value document as stored by the document database layer.
pub type Document = Map<String, Value>;

pub const OWNER: &str = "owner";
pub const ENTRIES: &str = "entries";
pub const GUEST: &str = "guest";
pub const USERS: &str = "users";
pub const ROLES: &str = "roles";
pub const GROUPS: &str = "groups";

pub fn to_document(acl: &AccessControlList) -> Document {
    let entries: Document = acl
        .entries
        .iter()
        .map(|(permission, entry)| {
            (permission.clone(), Value::Object(entry_to_document(entry)))
        })
        .collect();

    let mut doc = Document::new();
    doc.insert(OWNER.to_string(), Value::String(acl.owner.clone()));
    doc.insert(ENTRIES.to_string(), Value::Object(entries));
    doc
}

fn entry_to_document(entry: &AccessControlEntry) -> Document {
    let mut doc = Document::new();
    doc.insert(GUEST.to_string(), Value::Bool(entry.guest));
    doc.insert(USERS.to_string(), set_to_value(&entry.users));
    doc.insert(ROLES.to_string(), set_to_value(&entry.roles));
    doc.insert(GROUPS.to_string(), set_to_value(&entry.groups));
    doc
}

fn set_to_value(values: &BTreeSet<String>) -> Value {
    Value::Array(values.iter().cloned().map(Value::String).collect())
}

pub fn from_document(
    doc: &Document,
) -> std::result::Result<AccessControlList, DocumentError> {
    let owner = match doc.get(OWNER) {
        Some(Value::String(owner)) => owner.clone(),
        Some(_) => return Err(invalid(OWNER, "a string")),
        None => return Err(DocumentError::MissingField(OWNER.to_string())),
    };

    let mut entries = BTreeMap::new();
    match doc.get(ENTRIES) {
        None | Some(Value::Null) => {}
        Some(Value::Object(raw)) => {
            for (permission, value) in raw {
                let path = format!("{ENTRIES}.{permission}");
                let Value::Object(entry) = value else {
                    return Err(invalid(&path, "an object"));
                };
                entries.insert(
                    permission.clone(),
                    entry_from_document(entry, &path)?,
                );
            }
        }
        Some(_) => return Err(invalid(ENTRIES, "an object")),
    }

    Ok(AccessControlList { owner, entries })
}

fn entry_from_document(
    doc: &Document,
    path: &str,
) -> std::result::Result<AccessControlEntry, DocumentError> {
    let guest = match doc.get(GUEST) {
        None | Some(Value::Null) => false,
        Some(Value::Bool(guest)) => *guest,
        Some(_) => return Err(invalid(&format!("{path}.{GUEST}"), "a boolean")),
    };

    Ok(AccessControlEntry {
        guest,
        users: set_from_value(doc.get(USERS), path, USERS)?,
        roles: set_from_value(doc.get(ROLES), path, ROLES)?,
        groups: set_from_value(doc.get(GROUPS), path, GROUPS)?,
    })
}

fn set_from_value(
    value: Option<&Value>,
    path: &str,
    field: &str,
) -> std::result::Result<BTreeSet<String>, DocumentError> {
    let field_path = || format!("{path}.{field}");
    match value {
        None | Some(Value::Null) => Ok(BTreeSet::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(invalid(&field_path(), "an array of strings")),
            })
            .collect(),
        Some(_) => Err(invalid(&field_path(), "an array of strings")),
    }
}

fn invalid(path: &str, expected: &'static str) -> DocumentError {
    DocumentError::InvalidType {
        path: path.to_string(),
        expected,
    }
}

/// Parse a JSON object text and read it as an access control list.
pub fn from_json(text: &str) -> Result<AccessControlList> {
    let doc: Document = serde_json::from_str(text)?;
    Ok(from_document(&doc)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn writes_fixed_field_names() {
        let acl = AccessControlList::new("alice").with_entry(
            "write",
            AccessControlEntry {
                users: ["bob".to_string()].into(),
                ..Default::default()
            },
        );
        assert_eq!(
            Value::Object(to_document(&acl)),
            json!({
                "owner": "alice",
                "entries": {
                    "write": {
                        "guest": false,
                        "users": ["bob"],
                        "roles": [],
                        "groups": []
                    }
                }
            })
        );
    }

    #[test]
    fn sparse_entries_use_defaults() {
        let acl = from_document(&doc(json!({
            "owner": "alice",
            "entries": { "read": { "guest": true } }
        })))
        .unwrap();
        let read = acl.entry("read").unwrap();
        assert!(read.guest);
        assert!(read.users.is_empty());

        let bare = from_document(&doc(json!({"owner": "alice"}))).unwrap();
        assert!(bare.entries.is_empty());
    }

    #[test]
    fn reports_offending_path() {
        assert_eq!(
            from_document(&doc(json!({"entries": {}}))).unwrap_err(),
            DocumentError::MissingField("owner".to_string())
        );
        assert_eq!(
            from_document(&doc(json!({
                "owner": "alice",
                "entries": { "write": { "roles": ["a", 3] } }
            })))
            .unwrap_err(),
            DocumentError::InvalidType {
                path: "entries.write.roles".to_string(),
                expected: "an array of strings",
            }
        );
    }
}
