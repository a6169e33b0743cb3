use std::fs;
use std::path::Path;

use crate::model::config::Config;

/// Read config.toml from the store directory. A missing or unparseable file
/// yields the default config; config is cosmetic and never blocks startup.
pub fn read_config(dir: &Path) -> Config {
    let path = dir.join("config.toml");
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(_) => return Config::default(),
    };
    match toml::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("parse {}: {} (using defaults)", path.display(), e);
            Config::default()
        }
    }
}
