use std::collections::BTreeSet;

use tessera_core::acl::{apply, from_document, from_json, merge, to_document};
use tessera_core::{
    AccessControlEntryModification, AccessControlList,
    AccessControlListModification, CoreError, DocumentError, Principal,
};

fn set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn modification(
    permission: &str,
    guest: bool,
    users: &[&str],
) -> AccessControlEntryModification {
    AccessControlEntryModification::builder(permission)
        .guest(guest)
        .add_users(users.iter().copied())
        .build()
}

#[test]
fn same_permission_merges_users() {
    let merged = merge(vec![
        modification("write", true, &["a"]),
        modification("write", true, &["b"]),
    ]);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].add_users, set(&["a", "b"]));
    assert!(merged[0].guest);

    let merged = merge(vec![
        modification("write", true, &["a"]),
        modification("write", false, &["b"]),
    ]);
    assert!(!merged[0].guest);
}

#[test]
fn distinct_permissions_stay_apart() {
    let merged = merge(vec![
        modification("read", true, &["a"]),
        modification("write", false, &["b"]),
        modification("read", true, &["c"]),
        modification("delete", false, &[]),
    ]);
    let permissions: Vec<_> =
        merged.iter().map(|m| m.permission.as_str()).collect();
    assert_eq!(permissions, vec!["read", "write", "delete"]);
    assert_eq!(merged[0].add_users, set(&["a", "c"]));
    assert_eq!(merged[1].add_users, set(&["b"]));
}

#[test]
fn merge_unions_every_set() {
    let first = AccessControlEntryModification::builder("admin")
        .guest(true)
        .add_roles(["ops"])
        .remove_groups(["contractors"])
        .build();
    let second = AccessControlEntryModification::builder("admin")
        .guest(true)
        .add_roles(["sre"])
        .remove_users(["mallory"])
        .add_groups(["staff"])
        .build();
    let merged = merge(vec![first, second]);
    let admin = &merged[0];
    assert_eq!(admin.add_roles, set(&["ops", "sre"]));
    assert_eq!(admin.remove_users, set(&["mallory"]));
    assert_eq!(admin.add_groups, set(&["staff"]));
    assert_eq!(admin.remove_groups, set(&["contractors"]));
    assert!(admin.guest);
}

#[test]
fn applied_list_survives_document_round_trip() {
    let mut acl = AccessControlList::new("alice");
    let batch: AccessControlListModification = vec![
        modification("read", true, &[]),
        AccessControlEntryModification::builder("write")
            .add_users(["bob"])
            .add_roles(["editor"])
            .add_groups(["staff"])
            .build(),
    ]
    .into();
    apply(&mut acl, batch);

    let doc = to_document(&acl);
    let restored = from_document(&doc).unwrap();
    assert_eq!(restored, acl);
    assert!(restored.is_granted("read", &Principal::anonymous()));
    assert!(restored.is_granted(
        "write",
        &Principal::user("zoe").with_group("staff")
    ));
}

#[test]
fn json_errors_are_typed() {
    assert!(matches!(
        from_json("not json"),
        Err(CoreError::Serialization(_))
    ));
    assert!(matches!(
        from_json(r#"{"owner": 7}"#),
        Err(CoreError::Document(DocumentError::InvalidType { .. }))
    ));
    let acl = from_json(r#"{"owner": "alice", "entries": null}"#).unwrap();
    assert_eq!(acl, AccessControlList::new("alice"));
}
