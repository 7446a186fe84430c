//! Configuration loading and validation

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use vitrine_scene::model::DEFAULT_MODEL_PATH;
use vitrine_scene::params::{format_hex_rgb, parse_hex_rgb, DEFAULT_TINT};
use vitrine_scene::ViewParams;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub coat: CoatConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            model: ModelConfig::default(),
            coat: CoatConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window width in logical pixels
    #[serde(default = "default_extent")]
    pub width: f32,
    /// Window height in logical pixels
    #[serde(default = "default_extent")]
    pub height: f32,
    /// Window title
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_extent(),
            height: default_extent(),
            title: default_title(),
        }
    }
}

fn default_extent() -> f32 {
    300.0
}

fn default_title() -> String {
    "Vitrine".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path to the GLB file, relative to the asset root
    #[serde(default = "default_model_path")]
    pub path: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
        }
    }
}

fn default_model_path() -> String {
    DEFAULT_MODEL_PATH.to_string()
}

/// Initial coat parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoatConfig {
    /// Whether the coat starts visible
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Initial emissive tint, "#rrggbb"
    #[serde(default = "default_tint")]
    pub tint: String,
}

impl Default for CoatConfig {
    fn default() -> Self {
        Self {
            visible: true,
            tint: default_tint(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tint() -> String {
    format_hex_rgb(DEFAULT_TINT)
}

impl Config {
    /// Convert the coat section into the runtime parameter state
    pub fn view_params(&self) -> Result<ViewParams> {
        let coat_tint = parse_hex_rgb(&self.coat.tint)
            .with_context(|| format!("invalid coat.tint in configuration: {:?}", self.coat.tint))?;
        Ok(ViewParams {
            coat_visible: self.coat.visible,
            coat_tint,
        })
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<Config> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.window.width, 300.0);
        assert_eq!(config.window.height, 300.0);
        assert_eq!(config.window.title, "Vitrine");
        assert_eq!(config.model.path, "models/coat.glb");

        let params = config.view_params().unwrap();
        assert_eq!(params, ViewParams::default());
    }

    #[test]
    fn test_full_config_parses() {
        let toml = r##"
[window]
width = 1280.0
height = 720.0
title = "Showroom"

[model]
path = "models/jacket.glb"

[coat]
visible = false
tint = "#3366cc"
"##;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.window.width, 1280.0);
        assert_eq!(config.window.title, "Showroom");
        assert_eq!(config.model.path, "models/jacket.glb");

        let params = config.view_params().unwrap();
        assert!(!params.coat_visible);
        assert_eq!(params.coat_tint, [0x33, 0x66, 0xcc]);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[coat]\ntint = \"#112233\"\n").unwrap();
        assert!(config.coat.visible);
        assert_eq!(config.model.path, "models/coat.glb");
        assert_eq!(
            config.view_params().unwrap().coat_tint,
            [0x11, 0x22, 0x33]
        );
    }

    #[test]
    fn test_bad_tint_is_rejected() {
        let config: Config = toml::from_str("[coat]\ntint = \"chartreuse\"\n").unwrap();
        assert!(config.view_params().is_err());
    }
}
