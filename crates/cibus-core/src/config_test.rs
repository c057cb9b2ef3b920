use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "CIBUS_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.search_url, "http://localhost:5000");
    assert_eq!(cfg.request_timeout_secs, 10);
    assert_eq!(cfg.user_agent, "cibus/0.1 (vendor-search)");
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:5000");
    assert_eq!(cfg.dataset_path.to_str(), Some("./data/permits.json"));
    assert_eq!(cfg.max_hits, 750);
}

#[test]
fn build_app_config_applies_overrides() {
    let mut map = HashMap::new();
    map.insert("CIBUS_ENV", "production");
    map.insert("CIBUS_SEARCH_URL", "https://search.example.com");
    map.insert("CIBUS_REQUEST_TIMEOUT_SECS", "3");
    map.insert("CIBUS_MAX_HITS", "20");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.search_url, "https://search.example.com");
    assert_eq!(cfg.request_timeout_secs, 3);
    assert_eq!(cfg.max_hits, 20);
}

#[test]
fn build_app_config_rejects_non_http_search_url() {
    let mut map = HashMap::new();
    map.insert("CIBUS_SEARCH_URL", "search.example.com");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CIBUS_SEARCH_URL"),
        "expected InvalidEnvVar(CIBUS_SEARCH_URL), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("CIBUS_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CIBUS_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(CIBUS_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("CIBUS_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CIBUS_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(CIBUS_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("CIBUS_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CIBUS_BIND_ADDR"),
        "expected InvalidEnvVar(CIBUS_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_max_hits() {
    let mut map = HashMap::new();
    map.insert("CIBUS_MAX_HITS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CIBUS_MAX_HITS"),
        "expected InvalidEnvVar(CIBUS_MAX_HITS), got: {result:?}"
    );
}
