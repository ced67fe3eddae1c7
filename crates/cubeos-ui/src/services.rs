//! Browser implementations of the platform seams (wasm32 only).
//!
//! # Design
//! - Thin adapters over gloo/web-sys; all policy stays in `crate::core`.
//! - Browser failures are logged to the console and otherwise swallowed.

pub mod dialogs;
pub mod events;
pub mod storage;
pub mod surface;
pub mod transport;
