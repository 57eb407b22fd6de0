use super::*;
use crate::net::types::Role;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        code: Some("T001".to_owned()),
        full_name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: Role::Teacher,
        is_active: true,
    }
}

#[test]
fn empty_store_reads_absent() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.read(), StoredSession::default());
}

#[test]
fn save_then_read_round_trips() {
    let mut store = MemoryTokenStore::default();
    store.save("rt-1", &sample_user());
    let stored = store.read();
    assert_eq!(stored.refresh_token.as_deref(), Some("rt-1"));
    assert_eq!(stored.user.unwrap().id, "u1");
}

#[test]
fn save_overwrites_both_entries() {
    let mut store = MemoryTokenStore::seeded(Some("rt-old"), Some(sample_user()));
    let mut replacement = sample_user();
    replacement.id = "u2".to_owned();
    store.save("rt-new", &replacement);
    let stored = store.read();
    assert_eq!(stored.refresh_token.as_deref(), Some("rt-new"));
    assert_eq!(stored.user.unwrap().id, "u2");
}

#[test]
fn clear_is_idempotent() {
    let mut store = MemoryTokenStore::seeded(Some("rt-1"), Some(sample_user()));
    store.clear();
    let after_once = store.read();
    store.clear();
    let after_twice = store.read();
    assert_eq!(after_once, StoredSession::default());
    assert_eq!(after_once, after_twice);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_absent_off_hydrate() {
    // Without a browser the store must behave like an empty one.
    let mut store = BrowserTokenStore;
    store.save("rt-1", &sample_user());
    assert_eq!(store.read(), StoredSession::default());
    store.clear();
}
