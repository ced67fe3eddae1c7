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
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Shared test helpers for the console crates.
//! Layout: fixtures.rs (canned records), platform.rs (storage/surface/dialog/event fakes), mocks.rs (scripted APIs and transport).

pub mod fixtures;
pub mod mocks;
pub mod platform;
