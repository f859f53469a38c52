use web_sys::window;

const BEARER_TOKEN_KEY: &str = "auth_bearer_token";

fn browser_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Read the bearer token the login flow left in browser storage.
///
/// Token issuance and refresh belong to that flow; here the token is an
/// opaque string that either exists or does not.
pub fn get_bearer_token() -> Option<String> {
    browser_storage()?.get_item(BEARER_TOKEN_KEY).ok()?
}
