use super::*;

#[test]
fn memory_storage_get_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("token"), Ok(None));
}

#[test]
fn memory_storage_set_then_get_returns_value() {
    let mut storage = MemoryStorage::new();
    storage.set("token", "abc").unwrap();
    assert_eq!(storage.get("token"), Ok(Some("abc".to_owned())));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_set_overwrites_previous_value() {
    let mut storage = MemoryStorage::with_entries([("token", "old")]);
    storage.set("token", "new").unwrap();
    assert_eq!(storage.get("token"), Ok(Some("new".to_owned())));
}

#[test]
fn memory_storage_remove_absent_key_is_ok() {
    let mut storage = MemoryStorage::new();
    assert_eq!(storage.remove("user"), Ok(()));
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_remove_leaves_other_keys() {
    let mut storage = MemoryStorage::with_entries([("token", "abc"), ("theme", "dark")]);
    storage.remove("token").unwrap();
    assert!(!storage.contains_key("token"));
    assert!(storage.contains_key("theme"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn default_storage_is_empty_memory_outside_browser() {
    let storage = default_storage();
    assert!(storage.is_empty());
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::WriteRejected { key: "user".to_owned() };
    assert_eq!(err.to_string(), "storage rejected write for key user");
}
