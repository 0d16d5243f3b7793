use crate::domain::error::{AppError, Result};
use tracing::info;
use url::Url;

/// HTTP client for pulling CSV text from a remote spreadsheet export.
///
/// Transport only: no retries, no backoff. A non-2xx response is
/// surfaced to the caller as a fetch failure.
pub struct RemoteCsvClient {
    client: reqwest::Client,
}

impl RemoteCsvClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    pub async fn fetch_csv(&self, url: &str) -> Result<String> {
        let url = Url::parse(url)
            .map_err(|e| AppError::ValidationError(format!("Invalid CSV source URL: {}", e)))?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AppError::FetchError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::FetchError(format!(
                "CSV source error ({}): {}",
                status, text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::FetchError(format!("Failed to read response body: {}", e)))?;

        info!(url = %url, bytes = body.len(), "Fetched remote CSV");
        Ok(body)
    }
}

impl Default for RemoteCsvClient {
    fn default() -> Self {
        Self::new()
    }
}
