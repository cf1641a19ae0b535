use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;
use std::time::Duration;
use waypoint::config;

// Tests below mutate process environment; serialize them.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://example.org/api/v1/localidades/"),
        "https://example.org/api/v1/localidades"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://example.org/api///"),
        "https://example.org/api"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://example.org/api/  "),
        "https://example.org/api"
    );
}

#[test]
fn test_sanitize_base_url_empty_falls_back_to_default() {
    assert_eq!(config::sanitize_base_url("   "), config::DEFAULT_DIRECTORY_URL);
}

#[test]
fn test_get_directory_url_from_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("WAYPOINT_DIRECTORY_URL", "http://localhost:9000/localidades/");

    assert_eq!(config::get_directory_url(), "http://localhost:9000/localidades");

    env::remove_var("WAYPOINT_DIRECTORY_URL");
}

#[test]
fn test_get_directory_url_uses_default() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("WAYPOINT_DIRECTORY_URL");

    assert_eq!(config::get_directory_url(), config::DEFAULT_DIRECTORY_URL);
}

#[test]
fn test_get_order_by_blank_uses_default() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("WAYPOINT_ORDER_BY", "  ");

    assert_eq!(config::get_order_by(), config::DEFAULT_ORDER_BY);

    env::remove_var("WAYPOINT_ORDER_BY");
}

#[test]
fn test_get_http_timeout_parses_and_rejects_zero() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("WAYPOINT_HTTP_TIMEOUT_SECS", "3");
    assert_eq!(config::get_http_timeout(), Duration::from_secs(3));

    env::set_var("WAYPOINT_HTTP_TIMEOUT_SECS", "0");
    assert_eq!(config::get_http_timeout(), Duration::from_secs(config::DEFAULT_HTTP_TIMEOUT_SECS));

    env::set_var("WAYPOINT_HTTP_TIMEOUT_SECS", "soon");
    assert_eq!(config::get_http_timeout(), Duration::from_secs(config::DEFAULT_HTTP_TIMEOUT_SECS));

    env::remove_var("WAYPOINT_HTTP_TIMEOUT_SECS");
}

#[test]
fn test_load_env_file_populates_directory_config() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("WAYPOINT_DIRECTORY_URL");
    env::remove_var("WAYPOINT_ORDER_BY");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.env");
    std::fs::write(&path, "WAYPOINT_DIRECTORY_URL=http://directory.test/\nWAYPOINT_ORDER_BY=id\n").unwrap();

    config::load_env_file(path.to_str());
    let cfg = config::DirectoryConfig::from_env();

    assert_eq!(cfg.base_url, "http://directory.test");
    assert_eq!(cfg.order_by, "id");

    env::remove_var("WAYPOINT_DIRECTORY_URL");
    env::remove_var("WAYPOINT_ORDER_BY");
}
