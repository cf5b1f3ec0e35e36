use super::*;

#[test]
fn trailing_slashes_are_stripped() {
    assert_eq!(normalize_base_url("https://payroll.example.com/"), "https://payroll.example.com");
    assert_eq!(normalize_base_url(" http://127.0.0.1:8000// "), "http://127.0.0.1:8000");
}

#[test]
fn blank_falls_back_to_default() {
    assert_eq!(normalize_base_url("   "), DEFAULT_API_BASE_URL.trim_end_matches('/'));
}

#[test]
fn url_joins_with_single_slash() {
    let config = ApiConfig::new("https://api.example.com/");
    assert_eq!(config.url("/salary-slip"), "https://api.example.com/salary-slip");
    assert_eq!(config.url("expense"), "https://api.example.com/expense");
}

#[test]
fn url_keeps_base_path_prefix() {
    let config = ApiConfig::new("https://example.com/payroll");
    assert_eq!(config.url("/auth/login"), "https://example.com/payroll/auth/login");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn resolve_without_browser_uses_default() {
    assert_eq!(ApiConfig::resolve(), ApiConfig::default());
}
