use reqwest::StatusCode;
use thiserror::Error;

/// Cap on captured error bodies. Store error payloads are small JSON blobs;
/// anything larger is noise (HTML error pages, proxy output).
const MAX_ERROR_BODY_BYTES: usize = 4 * 1024;

/// A failed exchange with the remote store, after retries.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached at the transport level.
    #[error("store unreachable after {attempts} attempt(s): {source}")]
    Unreachable {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },
    /// The store answered with a non-success status.
    #[error("store returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// The store answered 2xx but the body did not decode.
    #[error("failed to decode store response")]
    Decode(#[source] reqwest::Error),
}

impl StoreError {
    /// Whether retrying the same operation later could reasonably succeed.
    ///
    /// Transport failures and server-side statuses are transient; client
    /// errors and decode failures are terminal until something changes.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            StoreError::Unreachable { .. } => true,
            StoreError::Status { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            StoreError::Decode(_) => false,
        }
    }

    /// Build a [`StoreError::Status`] from an error response, capturing a
    /// bounded amount of the body for diagnostics.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = match response.text().await {
            Ok(text) => truncate_body(&text),
            Err(_) => String::from("<unreadable body>"),
        };
        StoreError::Status { status, body }
    }
}

fn truncate_body(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.len() <= MAX_ERROR_BODY_BYTES {
        return trimmed.to_string();
    }
    let mut end = MAX_ERROR_BODY_BYTES;
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &trimmed[..end])
}
