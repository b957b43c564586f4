use std::time::Duration;

use super::FetchError;
use crate::state::{FilingsPage, PageRequest};

/// What: Build the HTTP client used for every filings fetch.
///
/// Inputs:
/// - `connect_timeout`: Upper bound for establishing the TCP connection.
///
/// Output:
/// - Pooled `reqwest::Client`; falls back to the default client if the builder fails.
///
/// Details:
/// - No overall request timeout is set; a slow service keeps the busy indicator on.
pub fn build_client(connect_timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .user_agent(format!("filingsview/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to build HTTP client; using defaults");
            reqwest::Client::new()
        })
}

/// What: Compose `{base}/api/filings?...` for a request.
///
/// Inputs:
/// - `base`: Service root, with or without a trailing slash.
/// - `request`: Outgoing request.
///
/// Output:
/// - Percent-encoded URL; `group`/`year` are present only when filtering.
///
/// # Errors
/// - `FetchError::Transport` when `base` is not a valid URL.
pub fn build_filings_url(base: &str, request: &PageRequest) -> Result<reqwest::Url, FetchError> {
    let raw = format!("{}/api/filings", base.trim_end_matches('/'));
    let mut url = reqwest::Url::parse(&raw)
        .map_err(|e| FetchError::Transport(format!("invalid service URL {base:?}: {e}")))?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("cik", &request.cik)
            .append_pair("page", &request.page.to_string())
            .append_pair("per_page", &request.per_page.to_string());
        if let Some(group) = &request.group {
            pairs.append_pair("group", group);
        }
        if let Some(year) = &request.year {
            pairs.append_pair("year", year);
        }
    }
    Ok(url)
}

/// What: Fetch one filings page.
///
/// Inputs:
/// - `client`: Shared HTTP client.
/// - `base`: Service root URL.
/// - `request`: Page, page size, identifier, and filters to ask for.
///
/// Output:
/// - Decoded page, or the reason there is none.
///
/// # Errors
/// - `FetchError::Service` when the body carries a non-empty `error` message.
/// - `FetchError::Transport` when the connection, the read, or the JSON decode fails.
///
/// Details:
/// - The body is decoded whatever the HTTP status; the service reports its own
///   failures as status 500 with an `error` field.
pub async fn fetch_filings(
    client: &reqwest::Client,
    base: &str,
    request: &PageRequest,
) -> Result<FilingsPage, FetchError> {
    let url = build_filings_url(base, request)?;
    tracing::debug!(id = request.id, %url, "GET filings");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport(format!("request failed: {e}")))?;
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Transport(format!("failed to read response body: {e}")))?;
    let page: FilingsPage = serde_json::from_slice(&body).map_err(|e| {
        FetchError::Transport(format!("undecodable response (status {status}): {e}"))
    })?;
    if let Some(msg) = page.error.as_deref().filter(|m| !m.trim().is_empty()) {
        return Err(FetchError::Service(msg.to_string()));
    }
    tracing::debug!(
        id = request.id,
        %status,
        total = page.total,
        rows = page.data.len(),
        "filings page received"
    );
    Ok(page)
}
