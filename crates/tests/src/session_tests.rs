use crate::common::TempDir;
use pretty_assertions::assert_eq;
use portal::{FileSessionStore, MemorySessionStore, SessionStore, ROLE_KEY};
use shared_types::Role;

#[test]
fn memory_store_round_trips_every_role() {
    let store = MemorySessionStore::new();
    for role in Role::ALL {
        store.set_role(role).unwrap();
        assert_eq!(store.get_role(), Some(role));
    }
    store.clear_role().unwrap();
    assert_eq!(store.get_role(), None);
}

#[test]
fn stored_value_uses_fixed_key() {
    let store = MemorySessionStore::new();
    store.set_role(Role::HeadOfDepartment).unwrap();
    assert_eq!(store.get_item(ROLE_KEY).as_deref(), Some("hod"));
    assert_eq!(store.get_item("role"), None);
}

#[test]
fn file_store_survives_reopen() {
    let dir = TempDir::new();
    FileSessionStore::open(dir.path())
        .unwrap()
        .set_role(Role::SubDepartmentAdmin)
        .unwrap();

    let reopened = FileSessionStore::open(dir.path()).unwrap();
    assert_eq!(reopened.get_role(), Some(Role::SubDepartmentAdmin));
    assert!(reopened.is_authenticated());
}

#[test]
fn file_store_clear_then_get_is_none() {
    let dir = TempDir::new();
    let store = FileSessionStore::open(dir.path()).unwrap();
    store.set_role(Role::TeamMember).unwrap();

    store.clear_role().unwrap();

    assert_eq!(store.get_role(), None);
    let contents = std::fs::read_to_string(store.path()).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(entries.get(ROLE_KEY).is_none());
}

#[test]
fn ending_the_session_forgets_the_role() {
    let dir = TempDir::new();
    let store = FileSessionStore::open(dir.path()).unwrap();
    store.set_role(Role::HeadOfDepartment).unwrap();

    store.end_session().unwrap();
    store.end_session().unwrap();

    assert_eq!(store.get_role(), None);
}

#[test]
fn corrupt_session_file_reads_as_signed_out() {
    let dir = TempDir::new();
    let store = FileSessionStore::open(dir.path()).unwrap();
    std::fs::write(store.path(), "{not json").unwrap();

    assert_eq!(store.get_role(), None);

    store.set_role(Role::TeamMember).unwrap();
    assert_eq!(store.get_role(), Some(Role::TeamMember));
}

#[test]
fn corrupt_session_file_is_left_alone_by_clear() {
    let dir = TempDir::new();
    let store = FileSessionStore::open(dir.path()).unwrap();
    std::fs::write(store.path(), "{not json").unwrap();

    store.clear_role().unwrap();
    assert_eq!(store.get_role(), None);
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "{not json");
}

#[test]
fn set_role_rewrites_a_corrupt_session_file() {
    let dir = TempDir::new();
    let store = FileSessionStore::open(dir.path()).unwrap();
    std::fs::write(store.path(), "[1, 2").unwrap();

    store.set_role(Role::SubDepartmentAdmin).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(entries[ROLE_KEY], "sub-department-admin");
}
