use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::state::session::Role;
use crate::util::storage::MemoryStorage;

// =============================================================
// Fixtures
// =============================================================

struct ScriptedAuth {
    login: LoginOutcome,
    register: Result<(), String>,
    register_calls: Cell<u32>,
}

impl ScriptedAuth {
    fn accepting(user: UserProfile, token: &str) -> Self {
        Self {
            login: LoginOutcome::Authenticated { user, token: token.to_owned() },
            register: Ok(()),
            register_calls: Cell::new(0),
        }
    }

    fn rejecting(reason: &str) -> Self {
        Self {
            login: LoginOutcome::Rejected(reason.to_owned()),
            register: Err("User already exists".to_owned()),
            register_calls: Cell::new(0),
        }
    }
}

impl Authenticator for ScriptedAuth {
    async fn login(&self, _credentials: &Credentials) -> LoginOutcome {
        self.login.clone()
    }

    async fn register(&self, _registration: &Registration) -> Result<(), String> {
        self.register_calls.set(self.register_calls.get() + 1);
        self.register.clone()
    }
}

/// Accepts writes until `fail_on` is set, then rejects that key.
#[derive(Default)]
struct FlakyStorage {
    inner: MemoryStorage,
    fail_on: Option<String>,
}

impl KeyValueStore for FlakyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_on.as_deref() == Some(key) {
            return Err(StorageError::WriteRejected { key: key.to_owned() });
        }
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

struct UnreadableStorage;

impl KeyValueStore for UnreadableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

fn user(role: Role) -> UserProfile {
    UserProfile { id: 5, username: "alice".to_owned(), email: Some("alice@x.io".to_owned()), role }
}

fn creds() -> Credentials {
    Credentials { username: "alice".to_owned(), password: "pw".to_owned() }
}

fn registration() -> Registration {
    Registration {
        username: "bob".to_owned(),
        email: "bob@x.io".to_owned(),
        password: "secret1".to_owned(),
        phone: String::new(),
    }
}

fn empty_store() -> SessionStore<MemoryStorage> {
    SessionStore::initialize(MemoryStorage::new(), StorageKeys::default())
}

fn persisted(user_json: &str, token: &str) -> MemoryStorage {
    MemoryStorage::with_entries([("user", user_json), ("token", token)])
}

// =============================================================
// initialize
// =============================================================

#[test]
fn initialize_with_empty_storage_is_anonymous() {
    let store = empty_store();
    assert_eq!(store.session(), &Session::anonymous());
}

#[test]
fn initialize_restores_persisted_pair() {
    let raw = serde_json::to_string(&user(Role::Admin)).unwrap();
    let store = SessionStore::initialize(persisted(&raw, "xyz"), StorageKeys::default());
    assert_eq!(store.session().token(), "xyz");
    assert_eq!(store.session().role(), Some(Role::Admin));
}

#[test]
fn initialize_with_invalid_json_user_is_anonymous_without_fault() {
    let store = SessionStore::initialize(persisted("{not json", "abc"), StorageKeys::default());
    assert!(store.session().user().is_none());
    assert_eq!(store.session().token(), "");
}

#[test]
fn initialize_discards_malformed_keys_from_storage() {
    let store = SessionStore::initialize(persisted("null", "abc"), StorageKeys::default());
    assert!(!store.session().is_authenticated());
    assert!(store.storage().is_empty());
}

#[test]
fn initialize_with_user_but_no_token_is_anonymous() {
    let raw = serde_json::to_string(&user(Role::User)).unwrap();
    let storage = MemoryStorage::with_entries([("user", raw)]);
    let store = SessionStore::initialize(storage, StorageKeys::default());
    assert!(!store.session().is_authenticated());
    assert!(!store.storage().contains_key("user"));
}

#[test]
fn initialize_with_token_but_no_user_is_anonymous() {
    let storage = MemoryStorage::with_entries([("token", "abc")]);
    let store = SessionStore::initialize(storage, StorageKeys::default());
    assert!(!store.session().is_authenticated());
    assert!(!store.storage().contains_key("token"));
}

#[test]
fn initialize_with_unknown_role_is_anonymous() {
    let raw = r#"{"id":1,"username":"root","role":"superuser"}"#;
    let store = SessionStore::initialize(persisted(raw, "abc"), StorageKeys::default());
    assert!(!store.session().is_authenticated());
}

#[test]
fn initialize_with_unreadable_storage_is_anonymous() {
    let store = SessionStore::initialize(UnreadableStorage, StorageKeys::default());
    assert!(!store.session().is_authenticated());
}

#[test]
fn initialize_honours_custom_keys() {
    let raw = serde_json::to_string(&user(Role::User)).unwrap();
    let storage = MemoryStorage::with_entries([("parking.user", raw.as_str()), ("parking.token", "t")]);
    let keys = StorageKeys { user: "parking.user".to_owned(), token: "parking.token".to_owned() };
    let store = SessionStore::initialize(storage, keys);
    assert_eq!(store.session().token(), "t");
}

// =============================================================
// login
// =============================================================

#[test]
fn login_success_sets_memory_and_storage_together() {
    let mut store = empty_store();
    let auth = ScriptedAuth::accepting(user(Role::User), "abc");

    assert_eq!(block_on(store.login(&auth, &creds())), Ok(()));
    assert_eq!(store.session().token(), "abc");
    assert_eq!(store.session().role(), Some(Role::User));
    assert_eq!(store.storage().get("token"), Ok(Some("abc".to_owned())));
    let raw = store.storage().get("user").unwrap().unwrap();
    let stored: UserProfile = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored, user(Role::User));
}

#[test]
fn login_success_survives_reload() {
    let mut store = empty_store();
    let auth = ScriptedAuth::accepting(user(Role::Admin), "xyz");
    block_on(store.login(&auth, &creds())).unwrap();

    let reloaded = SessionStore::initialize(store.into_storage(), StorageKeys::default());
    assert_eq!(reloaded.session().token(), "xyz");
    assert_eq!(reloaded.session().user(), Some(&user(Role::Admin)));
}

#[test]
fn login_failure_clears_previous_session() {
    let mut store = empty_store();
    block_on(store.login(&ScriptedAuth::accepting(user(Role::User), "abc"), &creds())).unwrap();

    let result = block_on(store.login(&ScriptedAuth::rejecting("Invalid credentials"), &creds()));
    assert_eq!(result, Err(SessionError::Rejected("Invalid credentials".to_owned())));
    assert_eq!(store.session(), &Session::anonymous());
    assert!(store.storage().is_empty());
}

#[test]
fn login_with_blank_token_is_rejected() {
    let mut store = empty_store();
    let result = block_on(store.login(&ScriptedAuth::accepting(user(Role::User), ""), &creds()));
    assert!(matches!(result, Err(SessionError::Rejected(_))));
    assert!(!store.session().is_authenticated());
    assert!(store.storage().is_empty());
}

#[test]
fn login_rolls_back_when_token_write_fails() {
    let storage = FlakyStorage { fail_on: Some("token".to_owned()), ..FlakyStorage::default() };
    let mut store = SessionStore::initialize(storage, StorageKeys::default());

    let result = block_on(store.login(&ScriptedAuth::accepting(user(Role::User), "abc"), &creds()));
    assert_eq!(result, Err(SessionError::Storage(StorageError::WriteRejected { key: "token".to_owned() })));
    assert!(!store.session().is_authenticated());
    assert!(store.storage().inner.is_empty());
}

#[test]
fn login_rolls_back_when_user_write_fails() {
    let storage = FlakyStorage { fail_on: Some("user".to_owned()), ..FlakyStorage::default() };
    let mut store = SessionStore::initialize(storage, StorageKeys::default());

    let result = block_on(store.login(&ScriptedAuth::accepting(user(Role::Admin), "abc"), &creds()));
    assert!(matches!(result, Err(SessionError::Storage(_))));
    assert!(store.storage().inner.is_empty());
}

#[test]
fn complete_login_applies_outcome_without_authenticator() {
    let mut store = empty_store();
    let outcome = LoginOutcome::Authenticated { user: user(Role::Admin), token: "xyz".to_owned() };
    assert_eq!(store.complete_login(outcome), Ok(()));
    assert_eq!(store.session().token(), "xyz");
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_memory_and_session_keys() {
    let mut store = empty_store();
    block_on(store.login(&ScriptedAuth::accepting(user(Role::User), "abc"), &creds())).unwrap();

    store.logout();
    assert!(store.session().user().is_none());
    assert_eq!(store.session().token(), "");
    assert!(!store.storage().contains_key("user"));
    assert!(!store.storage().contains_key("token"));
}

#[test]
fn logout_twice_matches_logout_once() {
    let mut store = empty_store();
    block_on(store.login(&ScriptedAuth::accepting(user(Role::User), "abc"), &creds())).unwrap();

    store.logout();
    let once = (store.session().clone(), store.storage().clone());
    store.logout();
    assert_eq!((store.session().clone(), store.storage().clone()), once);
}

#[test]
fn logout_keeps_unrelated_keys() {
    let raw = serde_json::to_string(&user(Role::User)).unwrap();
    let storage = MemoryStorage::with_entries([("user", raw.as_str()), ("token", "abc"), ("theme", "dark")]);
    let mut store = SessionStore::initialize(storage, StorageKeys::default());

    store.logout();
    assert_eq!(store.storage().get("theme"), Ok(Some("dark".to_owned())));
    assert_eq!(store.storage().len(), 1);
}

#[test]
fn logout_with_unavailable_storage_still_clears_memory() {
    let mut store = SessionStore::initialize(UnreadableStorage, StorageKeys::default());
    store.logout();
    assert!(!store.session().is_authenticated());
}

// =============================================================
// register
// =============================================================

#[test]
fn register_success_does_not_log_in() {
    let store = empty_store();
    let auth = ScriptedAuth::accepting(user(Role::User), "abc");
    assert_eq!(block_on(store.register(&auth, &registration())), Ok(()));
    assert_eq!(auth.register_calls.get(), 1);
    assert!(!store.session().is_authenticated());
    assert!(store.storage().is_empty());
}

#[test]
fn register_failure_keeps_existing_session() {
    let mut store = empty_store();
    block_on(store.login(&ScriptedAuth::accepting(user(Role::Admin), "xyz"), &creds())).unwrap();

    let result = block_on(store.register(&ScriptedAuth::rejecting("nope"), &registration()));
    assert_eq!(result, Err("User already exists".to_owned()));
    assert_eq!(store.session().token(), "xyz");
}
