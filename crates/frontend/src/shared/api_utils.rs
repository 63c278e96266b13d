//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use crate::shared::config::config;

/// Get the base URL for API requests, as configured at startup
///
/// # Returns
/// - API base URL like "https://api.example.com" (no trailing slash)
pub fn api_base() -> String {
    config().api_base_url.clone()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url(contracts::shared::endpoints::BARBERS);
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
