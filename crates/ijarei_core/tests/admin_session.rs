use ijarei_core::forms::account::AdminLoginForm;
use ijarei_core::session::admin::{ADMIN_SESSION_KEY, ADMIN_TOKEN_KEY, SESSION_TTL_MS};
use ijarei_core::{
    MemoryStorage, SessionError, SessionManager, SessionState, SessionStorage, SqliteStorage,
};

const LOGIN_AT: i64 = 1_700_000_000_000;

fn credentials() -> AdminLoginForm {
    AdminLoginForm::new("editor@ijarei.com", "s3cret-pass")
}

#[test]
fn empty_storage_is_unauthenticated() {
    let mut manager = SessionManager::new(MemoryStorage::new());
    assert_eq!(manager.load(LOGIN_AT).unwrap(), SessionState::Unauthenticated);
    assert!(manager.storage().is_empty());
}

#[test]
fn login_stores_token_and_login_time() {
    let mut manager = SessionManager::new(MemoryStorage::new());

    let session = manager.login(&credentials(), LOGIN_AT).unwrap();

    assert!(!session.token.is_empty());
    assert_eq!(session.login_time, LOGIN_AT);
    assert_eq!(session.expires_at, LOGIN_AT + SESSION_TTL_MS);
    assert_eq!(
        manager.storage().get_item(ADMIN_TOKEN_KEY).unwrap(),
        Some(session.token.clone())
    );
    assert_eq!(
        manager.storage().get_item(ADMIN_SESSION_KEY).unwrap(),
        Some(format!("{{\"loginTime\":{LOGIN_AT}}}"))
    );
}

#[test]
fn session_is_valid_until_ttl_elapses() {
    let mut manager = SessionManager::new(MemoryStorage::new());
    let created = manager.login(&credentials(), LOGIN_AT).unwrap();

    let state = manager.load(LOGIN_AT + SESSION_TTL_MS - 1).unwrap();
    match state {
        SessionState::Authenticated(session) => {
            assert_eq!(session, created);
            assert_eq!(session.remaining_ms(LOGIN_AT + SESSION_TTL_MS - 1), 1);
        }
        other => panic!("unexpected state: {other:?}"),
    }
}

#[test]
fn expired_session_is_cleared_on_load() {
    let mut manager = SessionManager::new(MemoryStorage::new());
    manager.login(&credentials(), LOGIN_AT).unwrap();

    assert_eq!(
        manager.load(LOGIN_AT + SESSION_TTL_MS).unwrap(),
        SessionState::Expired
    );
    assert!(manager.storage().is_empty());
    assert_eq!(
        manager.load(LOGIN_AT + SESSION_TTL_MS).unwrap(),
        SessionState::Unauthenticated
    );
}

#[test]
fn malformed_session_is_cleared_on_load() {
    let mut storage = MemoryStorage::new();
    storage.set_item(ADMIN_TOKEN_KEY, "token").unwrap();
    storage.set_item(ADMIN_SESSION_KEY, "{not json").unwrap();
    let mut manager = SessionManager::new(storage);

    assert_eq!(manager.load(LOGIN_AT).unwrap(), SessionState::Unauthenticated);
    assert!(manager.storage().is_empty());
}

#[test]
fn token_without_session_record_clears_nothing() {
    let mut storage = MemoryStorage::new();
    storage.set_item(ADMIN_TOKEN_KEY, "token").unwrap();
    let mut manager = SessionManager::new(storage);

    assert!(!manager.is_authenticated(LOGIN_AT).unwrap());
    assert_eq!(manager.storage().len(), 1);
}

#[test]
fn login_time_in_the_future_counts_as_valid() {
    let mut manager = SessionManager::new(MemoryStorage::new());
    manager.login(&credentials(), LOGIN_AT).unwrap();

    assert!(manager.is_authenticated(LOGIN_AT - 60_000).unwrap());
}

#[test]
fn logout_removes_both_keys() {
    let mut manager = SessionManager::new(MemoryStorage::new());
    manager.login(&credentials(), LOGIN_AT).unwrap();

    manager.logout().unwrap();

    assert!(manager.storage().is_empty());
    assert!(!manager.is_authenticated(LOGIN_AT).unwrap());
}

#[test]
fn invalid_credentials_are_rejected_without_storing() {
    let mut manager = SessionManager::new(MemoryStorage::new());

    let err = manager
        .login(&AdminLoginForm::new("not-an-email", ""), LOGIN_AT)
        .unwrap_err();

    match err {
        SessionError::InvalidCredentials(errors) => {
            assert!(errors.contains("email"));
            assert!(errors.contains("password"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(manager.storage().is_empty());
}

#[test]
fn custom_ttl_is_honoured() {
    let mut manager = SessionManager::with_ttl(MemoryStorage::new(), 1_000);
    manager.login(&credentials(), LOGIN_AT).unwrap();

    assert!(manager.is_authenticated(LOGIN_AT + 999).unwrap());
    assert!(!manager.is_authenticated(LOGIN_AT + 1_000).unwrap());
}

#[test]
fn sqlite_storage_persists_session_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.db");

    let token = {
        let mut manager = SessionManager::new(SqliteStorage::open(&path).unwrap());
        manager.login(&credentials(), LOGIN_AT).unwrap().token
    };

    let mut manager = SessionManager::new(SqliteStorage::open(&path).unwrap());
    assert_eq!(
        manager.storage().keys().unwrap(),
        vec![ADMIN_SESSION_KEY.to_string(), ADMIN_TOKEN_KEY.to_string()]
    );
    match manager.load(LOGIN_AT + 1).unwrap() {
        SessionState::Authenticated(session) => assert_eq!(session.token, token),
        other => panic!("unexpected state: {other:?}"),
    }

    manager.logout().unwrap();
    assert!(manager.storage().keys().unwrap().is_empty());
}

#[test]
fn sqlite_storage_overwrites_existing_values() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();
    storage.set_item("theme", "light").unwrap();
    storage.set_item("theme", "dark").unwrap();
    storage.remove_item("missing").unwrap();

    assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(storage.keys().unwrap(), vec!["theme".to_string()]);
}

#[test]
fn extreme_past_login_time_expires_without_overflow() {
    let mut storage = MemoryStorage::new();
    storage.set_item(ADMIN_TOKEN_KEY, "token").unwrap();
    storage
        .set_item(ADMIN_SESSION_KEY, &format!("{{\"loginTime\":{}}}", i64::MIN))
        .unwrap();
    let mut manager = SessionManager::new(storage);

    assert_eq!(manager.load(LOGIN_AT).unwrap(), SessionState::Expired);
    assert!(manager.storage().is_empty());
}

#[test]
fn extreme_future_login_time_saturates_expiry() {
    let mut storage = MemoryStorage::new();
    storage.set_item(ADMIN_TOKEN_KEY, "token").unwrap();
    storage
        .set_item(ADMIN_SESSION_KEY, &format!("{{\"loginTime\":{}}}", i64::MAX))
        .unwrap();
    let mut manager = SessionManager::new(storage);

    match manager.load(LOGIN_AT).unwrap() {
        SessionState::Authenticated(session) => {
            assert_eq!(session.login_time, i64::MAX);
            assert_eq!(session.expires_at, i64::MAX);
            assert_eq!(session.remaining_ms(LOGIN_AT), i64::MAX - LOGIN_AT);
        }
        other => panic!("unexpected state: {other:?}"),
    }
}

#[test]
fn non_integer_login_time_is_treated_as_malformed() {
    for raw in [
        "{\"loginTime\":null}",
        "{\"loginTime\":1700000000000.0}",
        "{\"loginTime\":\"1700000000000\"}",
    ] {
        let mut storage = MemoryStorage::new();
        storage.set_item(ADMIN_TOKEN_KEY, "token").unwrap();
        storage.set_item(ADMIN_SESSION_KEY, raw).unwrap();
        let mut manager = SessionManager::new(storage);

        assert_eq!(
            manager.load(LOGIN_AT).unwrap(),
            SessionState::Unauthenticated,
            "{raw}"
        );
        assert!(manager.storage().is_empty(), "{raw}");
    }
}
