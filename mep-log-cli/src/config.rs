//! Configuration loading and parsing

use anyhow::{Context, Result};
use mep_log_decoder::DecoderConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::render::Backend;

/// Main application configuration (loaded from config.toml)
///
/// Command-line flags override the display options given here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub decoder: DecoderConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    #[serde(default = "default_backend")]
    pub backend: Backend,
    #[serde(default = "default_smoothing_window")]
    pub smoothing_window: usize,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            smoothing_window: default_smoothing_window(),
            chart_width: default_chart_width(),
        }
    }
}

fn default_backend() -> Backend {
    Backend::Ascii
}

fn default_smoothing_window() -> usize {
    48
}

fn default_chart_width() -> usize {
    80
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mep_log_decoder::OutOfRangePolicy;

    #[test]
    fn test_config_deserialization() {
        let toml_content = r#"
            [decoder]
            out_of_range = "clamp"

            [display]
            backend = "csv"
            smoothing_window = 16
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.decoder.out_of_range, OutOfRangePolicy::Clamp);
        assert_eq!(config.display.backend, Backend::Csv);
        assert_eq!(config.display.smoothing_window, 16);
        // Unset options keep their defaults
        assert_eq!(config.display.chart_width, 80);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.decoder.out_of_range, OutOfRangePolicy::Fail);
        assert_eq!(config.display.backend, Backend::Ascii);
        assert_eq!(config.display.smoothing_window, 48);
    }
}
