//! Application configuration, resolved once at startup.
//!
//! The API base URL is supplied at build time through `API_URL`
//! (e.g. `API_URL=https://api.example.com trunk build`). Without it the backend
//! is assumed on port 3000 of the host serving the app.

use once_cell::sync::OnceCell;

pub const DEFAULT_TIMEOUT_MS: u32 = 15_000;
const FALLBACK_BACKEND_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Without trailing slash
    pub api_base_url: String,
    pub request_timeout_ms: u32,
}

impl AppConfig {
    /// Combine the build-time values with the origin-derived fallback URL
    pub fn resolve(api_url: Option<&str>, timeout_ms: Option<&str>, fallback_url: &str) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(fallback_url)
            .trim_end_matches('/')
            .to_string();

        let request_timeout_ms = timeout_ms
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self {
            api_base_url,
            request_timeout_ms,
        }
    }
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Resolve and store the configuration; later calls return the first result
pub fn init_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        AppConfig::resolve(
            option_env!("API_URL"),
            option_env!("API_TIMEOUT_MS"),
            &origin_backend_url(),
        )
    })
}

pub fn config() -> &'static AppConfig {
    init_config()
}

/// Backend on port 3000 of the current host
fn origin_backend_url() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, FALLBACK_BACKEND_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_wins() {
        let config = AppConfig::resolve(
            Some("https://api.barbearia.com/"),
            None,
            "http://localhost:3000",
        );
        assert_eq!(config.api_base_url, "https://api.barbearia.com");
        assert_eq!(config.request_timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_fallback_url() {
        let config = AppConfig::resolve(Some("  "), None, "http://localhost:3000");
        assert_eq!(config.api_base_url, "http://localhost:3000");
        let config = AppConfig::resolve(None, None, "http://localhost:3000");
        assert_eq!(config.api_base_url, "http://localhost:3000");
    }

    #[test]
    fn test_timeout_parsing() {
        assert_eq!(
            AppConfig::resolve(None, Some("5000"), "").request_timeout_ms,
            5000
        );
        assert_eq!(
            AppConfig::resolve(None, Some("0"), "").request_timeout_ms,
            DEFAULT_TIMEOUT_MS
        );
        assert_eq!(
            AppConfig::resolve(None, Some("rápido"), "").request_timeout_ms,
            DEFAULT_TIMEOUT_MS
        );
    }
}
