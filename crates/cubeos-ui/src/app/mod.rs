//! Boot wiring for the browser build.
//!
//! # Design
//! - Build exactly one set of stores per page load and keep them in a thread-local.
//! - The session store listens for the HTTP layer's expiry event for the page lifetime.

use crate::core::clients::ClientsStore;
use crate::core::http::ConsoleClient;
use crate::core::platform::KeyValueStore;
use crate::core::session::SessionStore;
use crate::core::theme::ThemeStore;
use crate::services::dialogs::BrowserConfirm;
use crate::services::events::WindowSessionEvents;
use crate::services::storage::BrowserStorage;
use crate::services::surface::DocumentSurface;
use crate::services::transport::GlooTransport;
use gloo::events::EventListener;
use gloo::utils::window;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;

mod preferences;

thread_local! {
    static CONSOLE: RefCell<Option<Rc<Console>>> = const { RefCell::new(None) };
}

/// The console's stores, wired to browser services.
pub struct Console {
    /// Authenticated session.
    pub session: Rc<SessionStore>,
    /// Connected network clients.
    pub clients: Rc<ClientsStore>,
    /// Theme selection.
    pub theme: Rc<ThemeStore>,
    _expiry: EventListener,
}

/// Stores created by [`run_app`], if it has run.
#[must_use]
pub fn console() -> Option<Rc<Console>> {
    CONSOLE.with(|cell| cell.borrow().clone())
}

/// Boot the state layer: apply the theme, restore the session and start
/// listening for expiry events.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let console = Rc::new(boot());
    console.theme.init_theme();
    {
        let session = Rc::clone(&console.session);
        spawn_local(async move {
            session.init().await;
        });
    }
    CONSOLE.with(|cell| {
        *cell.borrow_mut() = Some(console);
    });
}

fn boot() -> Console {
    let config = preferences::load_config();
    let storage: Rc<dyn KeyValueStore> = Rc::new(BrowserStorage);
    let client = Rc::new(ConsoleClient::new(
        GlooTransport,
        config.clone(),
        Rc::clone(&storage),
        Rc::new(WindowSessionEvents::new(config.expired_event.clone())),
    ));
    let session = Rc::new(SessionStore::new(
        client.clone(),
        Rc::clone(&storage),
        &config,
    ));
    let clients = Rc::new(ClientsStore::new(client, Rc::new(BrowserConfirm)));
    let theme = Rc::new(ThemeStore::new(storage, Rc::new(DocumentSurface), &config));
    let expiry = {
        let session = Rc::clone(&session);
        EventListener::new(&window(), config.expired_event.clone(), move |_| {
            session.handle_session_expired();
        })
    };
    Console {
        session,
        clients,
        theme,
        _expiry: expiry,
    }
}
