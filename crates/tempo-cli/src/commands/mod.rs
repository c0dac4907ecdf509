//! Command handlers for the `tpo` binary.

pub mod closure;
pub mod entities;
pub mod game;
pub mod session;
pub mod validate;

use tempo_client::TempoClient;
use tempo_config::TempoConfig;

/// Build the HTTP client from configuration.
pub fn client(config: &TempoConfig) -> TempoClient {
    TempoClient::with_timeout(config.backend.base_url.clone(), config.backend.timeout())
}

/// Serialize a value for terminal output, pretty-printed when configured.
pub fn to_json<T: serde::Serialize>(value: &T, config: &TempoConfig) -> anyhow::Result<String> {
    let json = if config.general.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
