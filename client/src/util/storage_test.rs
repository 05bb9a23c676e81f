use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    storage.set_item("token", "abc");
    assert_eq!(storage.get_item("token").as_deref(), Some("abc"));
    storage.set_item("token", "def");
    assert_eq!(storage.get_item("token").as_deref(), Some("def"));
    storage.remove_item("token");
    assert_eq!(storage.get_item("token"), None);
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_clones_share_state() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set_item("user", "{}");
    assert_eq!(b.get_item("user").as_deref(), Some("{}"));
    b.remove_item("user");
    assert!(a.is_empty());
}

#[test]
fn removing_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove_item("nothing");
    assert!(storage.is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_outside_hydrate() {
    let storage = BrowserStorage;
    storage.set_item("token", "abc");
    assert_eq!(storage.get_item("token"), None);
    storage.remove_item("token");
}
