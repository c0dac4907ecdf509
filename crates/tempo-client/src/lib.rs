//! # tempo-client
//!
//! HTTP client for the temporal annotation backend.
//!
//! Every backend operation is a POST with a JSON body; non-2xx responses
//! carry a `{"error": …}` body whose message is surfaced verbatim. The raw
//! endpoint calls live in per-domain modules ([`annotation`], [`game`],
//! [`entities`], [`closure`]); the stateful controllers that own board
//! state sit on top ([`session::AnnotationSession`],
//! [`game::GameSession`]).

pub mod annotation;
pub mod closure;
pub mod entities;
pub mod game;
pub mod session;
pub mod wire;

mod error;
mod http;

pub use error::ClientError;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::http::check_response;

/// Default client-side request timeout. The protocol itself specifies
/// none; a hung backend should surface as a retryable error rather than a
/// stuck UI.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for a Tempo backend at a fixed base URL.
pub struct TempoClient {
    http: reqwest::Client,
    base_url: String,
}

impl TempoClient {
    /// Create a client with the default timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("tempo/0.1")
                .timeout(timeout)
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.into(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        let response = check_response(response).await?;
        Ok(response.json().await?)
    }
}
