//! Canned records and responses.

use cubeos_api_models::{ClientRecord, User};
use cubeos_ui::core::http::HttpResponse;
use serde_json::Value;

/// Admin user returned by the default auth fake.
#[must_use]
pub fn admin_user() -> User {
    User::new("admin", "admin")
}

/// Named client record.
#[must_use]
pub fn client(mac: &str, name: &str, blocked: bool) -> ClientRecord {
    ClientRecord {
        name: Some(name.to_string()),
        ..ClientRecord::new(mac, blocked)
    }
}

/// Three clients, one of them blocked.
#[must_use]
pub fn sample_clients() -> Vec<ClientRecord> {
    vec![
        client("AA:BB:CC:00:00:01", "laptop", false),
        client("AA:BB:CC:00:00:02", "tv", true),
        client("AA:BB:CC:00:00:03", "phone", false),
    ]
}

/// Response with a JSON body.
#[must_use]
pub fn json_response(status: u16, body: &Value) -> HttpResponse {
    HttpResponse {
        status,
        status_text: reason(status).to_string(),
        body: body.to_string(),
    }
}

/// Response with an empty body.
#[must_use]
pub fn empty_response(status: u16) -> HttpResponse {
    HttpResponse {
        status,
        status_text: reason(status).to_string(),
        body: String::new(),
    }
}

const fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "",
    }
}
