use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml in the store directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Show key hints in the status row when no notice is active
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Color overrides, hex strings keyed by theme field name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_key_hints: default_true(),
            colors: HashMap::new(),
        }
    }
}
