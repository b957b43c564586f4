//! Network retrieval of filings pages from the Filings Service.

use std::fmt;

mod filings;

pub use filings::{build_client, build_filings_url, fetch_filings};

/// Alert text shown when the service cannot be reached or answers garbage.
pub const TRANSPORT_ALERT: &str = "Failed to fetch data. Ensure backend is running.";

/// What: Failure of a single filings fetch.
///
/// Details:
/// - `Service` carries the message the service put in its `error` field.
/// - `Transport` covers connect, read, and decode failures; the detail is for logs only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The service answered with an error message.
    Service(String),
    /// The request never produced a usable page.
    Transport(String),
}

impl FetchError {
    /// What: Text shown to the user in the alert modal.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Service(msg) => format!("Error: {msg}"),
            Self::Transport(_) => TRANSPORT_ALERT.to_string(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service(msg) => write!(f, "service error: {msg}"),
            Self::Transport(detail) => write!(f, "transport error: {detail}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefixes_service_errors() {
        let err = FetchError::Service("Failed to retrieve data. Status Code: 404".into());
        assert_eq!(
            err.user_message(),
            "Error: Failed to retrieve data. Status Code: 404"
        );
    }

    #[test]
    fn transport_detail_stays_out_of_the_alert() {
        let err = FetchError::Transport("tcp connect error: Connection refused".into());
        assert_eq!(err.user_message(), TRANSPORT_ALERT);
        assert!(err.to_string().contains("Connection refused"));
    }
}
