use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicBool, Ordering};
use yansi::Paint;

use crate::error::DirectoryError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// Render a request as a colored curl line for the terminal.
fn curl_line(url: &str) -> String {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));
    parts.push(format!("{} {}",
        Paint::new("-H").fg(yansi::Color::Magenta),
        Paint::new("'Accept: application/json'").fg(yansi::Color::Magenta)
    ));
    parts.join(" ")
}

/// Join a base URL, a path and query pairs into a request URL.
pub fn build_url(base_url: &str, path: &str, params: &[(&str, &str)]) -> String {
    let mut url = format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'));
    if !params.is_empty() {
        let query = params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<String>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
    }
    url
}

/// Core read call: GET `url` and decode the JSON body into `T`.
/// Non-success statuses and undecodable bodies become `DirectoryError`s.
pub async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<T, DirectoryError> {
    log_output(format!("Request:\n{}", curl_line(url)));
    tracing::debug!(%url, "directory read");

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| DirectoryError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let summary = format!("HTTP {}", status.as_u16());
        log_output(format!("Response:\n{}", Paint::new(summary).red()));
        return Err(DirectoryError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| DirectoryError::Network(e.to_string()))?;
    // Grayed out echo of the raw payload
    log_output(format!("Response:\n{}", Paint::new(&body).rgb(100, 100, 100)));

    serde_json::from_str(&body).map_err(|e| DirectoryError::Decode(e.to_string()))
}
