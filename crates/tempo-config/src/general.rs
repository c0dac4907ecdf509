//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default export directory.
fn default_export_dir() -> String {
    ".".to_string()
}

/// Default for pretty-printed JSON output.
const fn default_pretty_json() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Directory exported annotation documents are written to.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    /// Whether CLI JSON output is pretty-printed.
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            pretty_json: default_pretty_json(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.export_dir, ".");
        assert!(config.pretty_json);
    }
}
