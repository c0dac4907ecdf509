//! Shared HTTP response helpers.
//!
//! Centralizes the status-code check so endpoint modules stay focused on
//! request construction and response mapping. Non-2xx responses carry a
//! JSON `{"error": …}` body; the message is extracted and surfaced
//! verbatim, falling back to the raw body when it is not that shape.

use serde::Deserialize;

use crate::ClientError;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check an HTTP response, returning it unchanged on success.
///
/// Any non-success status becomes [`ClientError::Rejected`] with the
/// body's `error` field as the message.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body).map_or(body, |parsed| parsed.error);
    Err(ClientError::Rejected {
        status: status.as_u16(),
        message,
    })
}
