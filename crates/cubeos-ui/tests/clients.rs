use cubeos_api_models::ClientRecord;
use cubeos_test_support::fixtures::sample_clients;
use cubeos_test_support::mocks::FakeClientsApi;
use cubeos_test_support::platform::ScriptedConfirm;
use cubeos_ui::core::platform::ConfirmVariant;
use cubeos_ui::{ApiError, ClientsStore};
use std::rc::Rc;

fn store_with(api: &Rc<FakeClientsApi>, confirm: &Rc<ScriptedConfirm>) -> ClientsStore {
    ClientsStore::new(api.clone(), confirm.clone())
}

#[tokio::test]
async fn fetch_replaces_list_and_projections() {
    let api = Rc::new(FakeClientsApi::with_clients(vec![ClientRecord::new(
        "AA:BB", false,
    )]));
    let store = store_with(&api, &Rc::new(ScriptedConfirm::answering(true)));

    store.fetch_clients().await;

    assert_eq!(store.total(), 1);
    assert_eq!(store.active_count(), 1);
    assert_eq!(store.blocked_count(), 0);
    assert!(!store.loading());
    assert_eq!(store.error(), None);

    api.set_clients(sample_clients());
    store.fetch_clients().await;

    assert_eq!(store.total(), 3);
    assert_eq!(store.active_count(), 2);
    assert_eq!(store.blocked_count(), 1);
    assert_eq!(store.blocked_clients()[0].mac, "AA:BB:CC:00:00:02");
    let active: Vec<String> = store.active_clients().into_iter().map(|c| c.mac).collect();
    assert_eq!(active, vec!["AA:BB:CC:00:00:01", "AA:BB:CC:00:00:03"]);
}

#[tokio::test]
async fn failed_fetch_empties_list_and_sets_error() {
    let api = Rc::new(FakeClientsApi::with_clients(sample_clients()));
    let store = store_with(&api, &Rc::new(ScriptedConfirm::answering(true)));
    store.fetch_clients().await;
    assert_eq!(store.total(), 3);

    api.fail_list(Some(ApiError::Network("offline".into())));
    store.fetch_clients().await;

    assert!(store.clients().is_empty());
    assert_eq!(store.error().as_deref(), Some("Failed to load clients"));
    assert!(!store.loading());

    api.fail_list(None);
    store.fetch_clients().await;
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn fetch_count_defaults_to_zero_on_failure() {
    let api = Rc::new(FakeClientsApi::default());
    api.set_count(Ok(7));
    let store = store_with(&api, &Rc::new(ScriptedConfirm::answering(true)));

    store.fetch_count().await;
    assert_eq!(store.count(), 7);

    api.set_count(Err(ApiError::Status {
        status: 500,
        message: "boom".into(),
    }));
    store.fetch_count().await;

    assert_eq!(store.count(), 0);
    assert_eq!(store.error(), None);
    assert!(!store.loading());
}

#[tokio::test]
async fn block_confirms_then_refreshes() {
    let api = Rc::new(FakeClientsApi::with_clients(sample_clients()));
    let confirm = Rc::new(ScriptedConfirm::answering(true));
    let store = store_with(&api, &confirm);
    store.fetch_clients().await;

    assert!(store.block_client("AA:BB:CC:00:00:01").await);

    assert_eq!(
        api.calls(),
        vec!["list", "block:AA:BB:CC:00:00:01", "list"]
    );
    assert_eq!(store.blocked_count(), 2);
    let client = store.find_client("aa:bb:cc:00:00:01").expect("client listed");
    assert!(client.blocked);

    let prompts = confirm.prompts();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].title, "Block Client");
    assert_eq!(prompts[0].confirm_text, "Block");
    assert_eq!(prompts[0].variant, ConfirmVariant::Danger);
    assert!(prompts[0].message.contains("laptop (AA:BB:CC:00:00:01)"));
}

#[tokio::test]
async fn unblock_uses_info_prompt() {
    let api = Rc::new(FakeClientsApi::with_clients(sample_clients()));
    let confirm = Rc::new(ScriptedConfirm::answering(true));
    let store = store_with(&api, &confirm);

    assert!(store.unblock_client("AA:BB:CC:00:00:02").await);

    assert_eq!(store.blocked_count(), 0);
    let prompt = &confirm.prompts()[0];
    assert_eq!(prompt.title, "Unblock Client");
    assert_eq!(prompt.confirm_text, "Unblock");
    assert_eq!(prompt.variant, ConfirmVariant::Info);
    assert!(prompt.message.starts_with("Unblock AA:BB:CC:00:00:02?"));
}

#[tokio::test]
async fn declined_confirmation_sends_nothing() {
    let api = Rc::new(FakeClientsApi::with_clients(sample_clients()));
    let confirm = Rc::new(ScriptedConfirm::answering(false));
    let store = store_with(&api, &confirm);

    assert!(!store.block_client("AA:BB:CC:00:00:01").await);
    assert!(!store.unblock_client("AA:BB:CC:00:00:02").await);

    assert!(api.calls().is_empty());
    assert_eq!(confirm.prompts().len(), 2);
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn failed_action_still_refreshes_and_keeps_error() {
    let api = Rc::new(FakeClientsApi::with_clients(sample_clients()));
    api.fail_actions(Some(ApiError::Status {
        status: 404,
        message: "Client not found".into(),
    }));
    let store = store_with(&api, &Rc::new(ScriptedConfirm::answering(true)));

    assert!(!store.block_client("AA:BB:CC:00:00:09").await);

    assert_eq!(api.calls(), vec!["block:AA:BB:CC:00:00:09", "list"]);
    assert_eq!(store.total(), 3);
    assert_eq!(store.error().as_deref(), Some("Client not found"));

    api.fail_actions(Some(ApiError::Network("offline".into())));
    assert!(!store.unblock_client("AA:BB:CC:00:00:02").await);
    assert_eq!(store.error().as_deref(), Some("Failed to unblock client"));

    store.clear_error();
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn subscribers_see_loading_transitions() {
    let api = Rc::new(FakeClientsApi::with_clients(sample_clients()));
    let store = store_with(&api, &Rc::new(ScriptedConfirm::answering(true)));
    let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
    let _watch = {
        let seen = Rc::clone(&seen);
        store.subscribe(move |state| seen.borrow_mut().push((state.loading, state.clients.len())))
    };

    store.fetch_clients().await;

    assert_eq!(*seen.borrow(), vec![(false, 0), (true, 0), (false, 3)]);
}
