//! Core, DOM-free state layer for the console.
pub mod actions;
pub mod api;
pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod logic;
pub mod platform;
pub mod session;
pub mod theme;
