//! API utilities for talking to the dues backend
//!
//! Resolves the backend base URL at runtime.

/// Name of the `<meta>` tag that overrides the backend base URL,
/// e.g. `<meta name="iuran-api-base" content="https://api.rt05.example">`.
pub const API_BASE_META: &str = "iuran-api-base";

/// Port the backend listens on when no override is configured
pub const DEFAULT_API_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Uses the `iuran-api-base` meta tag when present, otherwise the current
/// window location with port 3000.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available (requests then go to the same origin)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };

    if let Some(base) = window
        .document()
        .and_then(|doc| {
            doc.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META))
                .ok()
                .flatten()
        })
        .and_then(|meta| meta.get_attribute("content"))
    {
        return normalize_base(&base);
    }

    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/u601/iuran/sync");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
