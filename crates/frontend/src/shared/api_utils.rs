//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// API root used when no override is compiled in.
///
/// The console is served from the backend origin, so a relative root works.
pub const DEFAULT_API_BASE: &str = "/api";

/// Get the base URL for API requests
///
/// Can be overridden at build time with `BIOTRADE_API_BASE`,
/// e.g. `BIOTRADE_API_BASE=http://127.0.0.1:8000/api trunk serve`.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/products/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    option_env!("BIOTRADE_API_BASE")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
        .to_string()
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
