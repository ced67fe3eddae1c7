use cubeos_api_models::{LoginResponse, User};
use cubeos_test_support::fixtures::admin_user;
use cubeos_test_support::mocks::FakeAuthApi;
use cubeos_test_support::platform::MemoryStorage;
use cubeos_ui::core::config::TOKEN_KEY;
use cubeos_ui::{ApiError, ConsoleConfig, SessionStore};
use std::cell::RefCell;
use std::rc::Rc;

fn store_with(api: &Rc<FakeAuthApi>, storage: &Rc<MemoryStorage>) -> SessionStore {
    SessionStore::new(
        api.clone(),
        storage.clone(),
        &ConsoleConfig::default(),
    )
}

fn rejected(status: u16, message: &str) -> ApiError {
    ApiError::Status {
        status,
        message: message.to_string(),
    }
}

#[tokio::test]
async fn login_stores_token_and_user() {
    let api = Rc::new(FakeAuthApi::default());
    let storage = Rc::new(MemoryStorage::default());
    let store = store_with(&api, &storage);
    assert!(!store.is_authenticated());

    assert!(store.login("admin", "cubeos").await);

    assert!(store.is_authenticated());
    assert!(store.is_admin());
    assert_eq!(store.username().as_deref(), Some("admin"));
    assert_eq!(store.token().as_deref(), Some("token-1"));
    assert_eq!(storage.value(TOKEN_KEY).as_deref(), Some("token-1"));
    assert!(!store.loading());
    assert_eq!(store.error(), None);
    let sent = api.last_login().expect("login request recorded");
    assert_eq!(sent.username, "admin");
    assert_eq!(sent.password, "cubeos");
}

#[tokio::test]
async fn login_without_user_fetches_profile() {
    let api = Rc::new(FakeAuthApi::default());
    api.set_login(Ok(LoginResponse {
        access_token: "token-2".into(),
        user: None,
    }));
    api.set_current_user(Ok(User::new("ops", "viewer")));
    let store = store_with(&api, &Rc::new(MemoryStorage::default()));

    assert!(store.login("ops", "pw").await);

    assert_eq!(api.calls(), vec!["login", "current_user"]);
    assert_eq!(store.username().as_deref(), Some("ops"));
    assert!(!store.is_admin());
}

#[tokio::test]
async fn failed_login_surfaces_server_message() {
    let api = Rc::new(FakeAuthApi::default());
    api.set_login(Err(rejected(401, "Invalid credentials")));
    let storage = Rc::new(MemoryStorage::default());
    let store = store_with(&api, &storage);

    assert!(!store.login("admin", "wrong").await);

    assert!(!store.is_authenticated());
    assert_eq!(store.error().as_deref(), Some("Invalid credentials"));
    assert!(!store.loading());
    assert_eq!(storage.value(TOKEN_KEY), None);
}

#[tokio::test]
async fn failed_login_without_message_uses_fallback() {
    let api = Rc::new(FakeAuthApi::default());
    api.set_login(Err(ApiError::Network("offline".into())));
    let store = store_with(&api, &Rc::new(MemoryStorage::default()));

    assert!(!store.login("admin", "pw").await);
    assert_eq!(store.error().as_deref(), Some("Login failed"));
}

#[tokio::test]
async fn login_toggles_loading_and_clears_previous_error() {
    let api = Rc::new(FakeAuthApi::default());
    api.set_login(Err(rejected(401, "nope")));
    let store = store_with(&api, &Rc::new(MemoryStorage::default()));
    assert!(!store.login("admin", "pw").await);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let _watch = {
        let seen = Rc::clone(&seen);
        store.subscribe(move |state| seen.borrow_mut().push((state.loading, state.error.clone())))
    };
    api.set_login(Ok(LoginResponse {
        access_token: "t".into(),
        user: Some(admin_user()),
    }));
    assert!(store.login("admin", "pw").await);

    let seen = seen.borrow();
    assert_eq!(seen[0], (false, Some("nope".to_string())));
    assert_eq!(seen[1], (true, None));
    assert_eq!(seen.last(), Some(&(false, None)));
}

#[tokio::test]
async fn logout_clears_session_even_when_backend_fails() {
    let api = Rc::new(FakeAuthApi::default());
    api.set_logout(Err(ApiError::Network("offline".into())));
    let storage = Rc::new(MemoryStorage::default());
    let store = store_with(&api, &storage);
    assert!(store.login("admin", "pw").await);

    store.logout().await;

    assert!(!store.is_authenticated());
    assert_eq!(store.user(), None);
    assert_eq!(store.token(), None);
    assert_eq!(store.error(), None);
    assert_eq!(storage.value(TOKEN_KEY), None);
    assert_eq!(api.call_count("logout"), 1);
}

#[tokio::test]
async fn restored_token_is_authenticated_and_init_loads_user() {
    let api = Rc::new(FakeAuthApi::default());
    let storage = Rc::new(MemoryStorage::with_entry(TOKEN_KEY, "persisted"));
    let store = store_with(&api, &storage);

    assert!(store.is_authenticated());
    assert_eq!(store.user(), None);

    store.init().await;

    assert_eq!(store.username().as_deref(), Some("admin"));
    assert_eq!(api.calls(), vec!["current_user"]);
}

#[tokio::test]
async fn init_without_token_makes_no_calls() {
    let api = Rc::new(FakeAuthApi::default());
    let store = store_with(&api, &Rc::new(MemoryStorage::default()));

    store.init().await;
    store.fetch_user().await;

    assert!(api.calls().is_empty());
    assert_eq!(store.user(), None);
}

#[tokio::test]
async fn fetch_user_failure_clears_user_silently() {
    let api = Rc::new(FakeAuthApi::default());
    let store = store_with(&api, &Rc::new(MemoryStorage::default()));
    assert!(store.login("admin", "pw").await);
    api.set_current_user(Err(rejected(500, "boom")));

    store.fetch_user().await;

    assert_eq!(store.user(), None);
    assert_eq!(store.error(), None);
    assert!(store.is_authenticated());
}

#[tokio::test]
async fn change_password_reports_outcome() {
    let api = Rc::new(FakeAuthApi::default());
    let store = store_with(&api, &Rc::new(MemoryStorage::default()));
    assert!(store.login("admin", "pw").await);

    assert!(store.change_password("pw", "new-pw").await);
    let sent = api.last_password_change().expect("password change recorded");
    assert_eq!(sent.current_password, "pw");
    assert_eq!(sent.new_password, "new-pw");
    assert_eq!(store.error(), None);

    api.set_change_password(Err(ApiError::Network("offline".into())));
    assert!(!store.change_password("pw", "other").await);
    assert_eq!(store.error().as_deref(), Some("Password change failed"));
    assert!(!store.loading());

    store.clear_error();
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn session_expiry_signs_out() {
    let api = Rc::new(FakeAuthApi::default());
    let storage = Rc::new(MemoryStorage::default());
    let store = store_with(&api, &storage);
    assert!(store.login("admin", "pw").await);

    store.handle_session_expired();

    assert!(!store.is_authenticated());
    assert_eq!(store.user(), None);
    assert_eq!(storage.value(TOKEN_KEY), None);
}
