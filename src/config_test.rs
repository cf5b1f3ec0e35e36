use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
}

#[test]
fn reads_port_and_api_url() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("PAYROLL_API_URL", "https://pay.example.com/")]))
        .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_url, "https://pay.example.com");
}

#[test]
fn rejects_non_numeric_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".into()));
}

#[test]
fn rejects_out_of_range_port() {
    assert!(matches!(
        HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])),
        Err(ConfigError::InvalidPort(_))
    ));
}

#[test]
fn rejects_blank_api_url() {
    assert!(matches!(
        HostConfig::from_lookup(lookup_from(&[("PAYROLL_API_URL", "  ")])),
        Err(ConfigError::InvalidApiUrl(_))
    ));
}

#[test]
fn rejects_api_url_without_http_scheme() {
    assert!(matches!(
        HostConfig::from_lookup(lookup_from(&[("PAYROLL_API_URL", "ftp://pay.example.com")])),
        Err(ConfigError::InvalidApiUrl(_))
    ));
    assert!(matches!(
        HostConfig::from_lookup(lookup_from(&[("PAYROLL_API_URL", "http://")])),
        Err(ConfigError::InvalidApiUrl(_))
    ));
}
