use std::fs;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};
use reqwest::Url;
use reqwest::blocking::Client;

use crate::error::CliError;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Reads a whole corpus file into memory.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

/// Downloads a corpus over HTTP(S) and returns the response body.
///
/// - Only `http` and `https` URLs are accepted
/// - Non-success status codes are reported as fetch failures
pub fn fetch_url(url: &str) -> Result<String, CliError> {
    let parsed = parse_url(url)?;
    let fetch_error = |source| CliError::Fetch {
        url: url.to_owned(),
        source,
    };

    let client = Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(fetch_error)?;

    debug!("GET {parsed}");
    let text = client
        .get(parsed)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(fetch_error)?;

    info!("Fetched {} bytes from {url}", text.len());
    Ok(text)
}

fn parse_url(url: &str) -> Result<Url, CliError> {
    let parsed =
        Url::parse(url).map_err(|e| CliError::Argument(format!("'{url}' is not a valid URL: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(CliError::Argument(format!(
            "'{url}' uses unsupported scheme '{scheme}', expected http or https"
        ))),
    }
}
