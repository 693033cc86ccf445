//! Application configuration
//!
//! Initial wizard settings loaded from .imagene.toml.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .imagene.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Number of candidate functions per generation
    #[serde(default = "default_population_size")]
    pub population_size: u32,

    /// Lower bound on expression-tree depth
    #[serde(default = "default_min_depth")]
    pub min_depth: u32,

    /// Upper bound on expression-tree depth
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,

    /// Name of the palette to start with ("dark" or "light")
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_population_size() -> u32 {
    24
}

fn default_min_depth() -> u32 {
    0
}

fn default_max_depth() -> u32 {
    12
}

fn default_theme() -> String {
    "dark".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            min_depth: default_min_depth(),
            max_depth: default_max_depth(),
            theme: default_theme(),
        }
    }
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::parse(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    /// Parse config content, falling back to defaults on malformed TOML
    pub fn parse(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }
}
