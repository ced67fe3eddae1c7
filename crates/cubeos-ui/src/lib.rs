#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::module_name_repetitions)]
//! CubeOS console state layer.
//!
//! Three independent stores (session, connected clients, theme) sit on top of
//! an injected REST client and browser services. Everything under `core` is
//! DOM-free and runs natively; the wasm32 build adds browser implementations of
//! the platform seams and the boot wiring.

pub mod core;

#[cfg(target_arch = "wasm32")]
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::{Console, console, run_app};

pub use crate::core::clients::{ClientsState, ClientsStore};
pub use crate::core::config::ConsoleConfig;
pub use crate::core::error::ApiError;
pub use crate::core::session::{SessionState, SessionStore};
pub use crate::core::theme::{THEMES, Theme, ThemeMode, ThemeStore, migrate_theme_id};
