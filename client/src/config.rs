//! Backend location for the API client.
//!
//! The host renders the configured base URL into a `<meta>` tag of the page
//! shell; the browser picks it up from there. Without the tag the build-time
//! `PAYROLL_API_URL` (or the local development default) is used.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the `<meta>` tag carrying the backend base URL.
pub const API_BASE_META: &str = "payroll-api-base";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = match option_env!("PAYROLL_API_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000",
};

/// Resolved backend base URL, without a trailing slash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: normalize_base_url(base_url) }
    }

    /// Read the base URL from the page shell, falling back to the default.
    pub fn resolve() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let from_meta = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            if let Some(url) = from_meta {
                return Self::new(&url);
            }
        }
        Self::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/salary-slip`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Trim whitespace and trailing slashes; blank input maps to the default.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_API_BASE_URL.trim_end_matches('/').to_owned();
    }
    trimmed.to_owned()
}
