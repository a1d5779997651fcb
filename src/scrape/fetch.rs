//! Page download.

use reqwest::StatusCode;
use tracing::{debug, info};

use super::ScrapeError;
use crate::utils::HttpClient;

/// Fetch a page and return its body as UTF-8 text.
///
/// Only a `200 OK` counts as success. The body is decoded as UTF-8 whatever
/// charset the server declares; invalid sequences are replaced.
pub async fn fetch_page(client: &HttpClient, url: &str) -> Result<String, ScrapeError> {
    info!("Fetching {}", url);

    let response = client
        .client()
        .get(url)
        .send()
        .await
        .map_err(|e| ScrapeError::Network(e.to_string()))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(ScrapeError::BadStatus(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ScrapeError::Network(e.to_string()))?;

    debug!("Received {} bytes from {}", bytes.len(), url);
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
