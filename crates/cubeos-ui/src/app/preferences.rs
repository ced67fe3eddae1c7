//! Environment helpers for the boot sequence.

use crate::core::config::{ConsoleConfig, DEFAULT_API_BASE_URL};
use gloo::utils::window;

/// Configuration for the page the console is served from.
///
/// The router serves the API on the same origin as the console.
pub(crate) fn load_config() -> ConsoleConfig {
    ConsoleConfig::with_base_url(api_base_url())
}

fn api_base_url() -> String {
    match window().location().origin() {
        Ok(origin) if !origin.is_empty() && origin != "null" => {
            format!("{}{DEFAULT_API_BASE_URL}", origin.trim_end_matches('/'))
        }
        _ => DEFAULT_API_BASE_URL.to_string(),
    }
}
