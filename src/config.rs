use std::env;
use std::path::Path;
use std::time::Duration;

// Default configuration constants
pub const DEFAULT_DIRECTORY_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";
pub const DEFAULT_ORDER_BY: &str = "nome";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_directory_url() -> String {
    sanitize_base_url(&env::var("WAYPOINT_DIRECTORY_URL").unwrap_or_else(|_| DEFAULT_DIRECTORY_URL.to_string()))
}

pub fn get_order_by() -> String {
    env::var("WAYPOINT_ORDER_BY")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_ORDER_BY.to_string())
}

pub fn get_http_timeout() -> Duration {
    let secs = env::var("WAYPOINT_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Settings needed to talk to the region directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub base_url: String,
    pub order_by: String,
    pub timeout: Duration,
}

impl DirectoryConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: get_directory_url(),
            order_by: get_order_by(),
            timeout: get_http_timeout(),
        }
    }
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_DIRECTORY_URL.to_string(),
            order_by: DEFAULT_ORDER_BY.to_string(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_DIRECTORY_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
