// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Start directory and theme mode
//! - `[viewport]` - Zoom curve, shortcut multipliers, double-click window
//! - `[filters]` - Pixelate block size and blur strength
//!
//! Every field is optional. Missing values fall back to [`defaults`], and
//! out-of-range values are clamped by the accessor methods.
//!
//! # Examples
//!
//! ```no_run
//! use photo_viewer::app::config;
//!
//! let (mut config, _warning) = config::load();
//! config.viewport.zoom_in_multiplier = Some(1.5);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::viewport::{CropCalculator, ZoomSteps};
use crate::error::{Error, Result};
use crate::media::FilterSettings;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Directory opened when no path is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_directory: Option<PathBuf>,

    /// Application theme mode (light or dark).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Zoom and gesture settings of the full-image viewport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewportConfig {
    /// Exponent applied to the zoom factor before cropping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_curve_exponent: Option<f64>,

    /// Multiplier applied by the zoom-in shortcut.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_in_multiplier: Option<f32>,

    /// Multiplier applied by the zoom-out shortcut.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_out_multiplier: Option<f32>,

    /// Double-click window in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_click_ms: Option<u64>,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            zoom_curve_exponent: Some(DEFAULT_ZOOM_CURVE_EXPONENT),
            zoom_in_multiplier: Some(DEFAULT_ZOOM_IN_MULTIPLIER),
            zoom_out_multiplier: Some(DEFAULT_ZOOM_OUT_MULTIPLIER),
            double_click_ms: Some(DEFAULT_DOUBLE_CLICK_MS),
        }
    }
}

impl ViewportConfig {
    #[must_use]
    pub fn crop_calculator(&self) -> CropCalculator {
        CropCalculator::new(
            self.zoom_curve_exponent
                .unwrap_or(DEFAULT_ZOOM_CURVE_EXPONENT),
        )
    }

    #[must_use]
    pub fn zoom_steps(&self) -> ZoomSteps {
        ZoomSteps::new(
            self.zoom_in_multiplier.unwrap_or(DEFAULT_ZOOM_IN_MULTIPLIER),
            self.zoom_out_multiplier
                .unwrap_or(DEFAULT_ZOOM_OUT_MULTIPLIER),
        )
    }

    /// Double-click window, clamped to the accepted range.
    #[must_use]
    pub fn double_click_window(&self) -> Duration {
        let ms = self
            .double_click_ms
            .unwrap_or(DEFAULT_DOUBLE_CLICK_MS)
            .clamp(MIN_DOUBLE_CLICK_MS, MAX_DOUBLE_CLICK_MS);
        Duration::from_millis(ms)
    }
}

/// Filter tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FiltersConfig {
    /// Edge length of pixelate blocks, in source pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixel_block_size: Option<u32>,

    /// Gaussian sigma of the blur filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_sigma: Option<f32>,
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            pixel_block_size: Some(DEFAULT_PIXEL_BLOCK_SIZE),
            blur_sigma: Some(DEFAULT_BLUR_SIGMA),
        }
    }
}

impl FiltersConfig {
    #[must_use]
    pub fn settings(&self) -> FilterSettings {
        FilterSettings::new(
            self.pixel_block_size
                .unwrap_or(DEFAULT_PIXEL_BLOCK_SIZE)
                .min(MAX_PIXEL_BLOCK_SIZE),
            self.blur_sigma
                .unwrap_or(DEFAULT_BLUR_SIGMA)
                .min(MAX_BLUR_SIGMA),
        )
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub viewport: ViewportConfig,

    #[serde(default)]
    pub filters: FiltersConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            tracing::info!(path = %path.display(), "loaded configuration");
            (config, None)
        }
        Err(err) => {
            let warning = format!("could not load {}: {err}", path.display());
            (Config::default(), Some(warning))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                image_directory: Some(PathBuf::from("/photos")),
                theme_mode: ThemeMode::Light,
            },
            viewport: ViewportConfig {
                zoom_curve_exponent: Some(1.0),
                zoom_in_multiplier: Some(1.5),
                zoom_out_multiplier: Some(0.5),
                double_click_ms: Some(500),
            },
            filters: FiltersConfig {
                pixel_block_size: Some(4),
                blur_sigma: Some(2.5),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(
            load_from_path(&config_path),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[viewport]\nzoom_in_multiplier = 2.0\n")
            .expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.viewport.zoom_in_multiplier, Some(2.0));
        assert_eq!(config.viewport.zoom_out_multiplier, None);
        assert_abs_diff_eq!(config.viewport.zoom_steps().zoom_out(), DEFAULT_ZOOM_OUT_MULTIPLIER);
        assert_eq!(config.filters, FiltersConfig::default());
        assert_eq!(config.general.theme_mode, ThemeMode::default());
    }

    #[test]
    fn theme_mode_parses_lowercase_names() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"light\"\n")
            .expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn accessors_sanitize_out_of_range_values() {
        let viewport = ViewportConfig {
            zoom_curve_exponent: Some(-3.0),
            zoom_in_multiplier: Some(0.0),
            zoom_out_multiplier: Some(f32::INFINITY),
            double_click_ms: Some(1),
        };
        assert_abs_diff_eq!(
            viewport.crop_calculator().zoom_curve_exponent(),
            DEFAULT_ZOOM_CURVE_EXPONENT
        );
        assert_eq!(viewport.zoom_steps(), ZoomSteps::default());
        assert_eq!(
            viewport.double_click_window(),
            Duration::from_millis(MIN_DOUBLE_CLICK_MS)
        );

        let filters = FiltersConfig {
            pixel_block_size: Some(10_000),
            blur_sigma: Some(0.0),
        };
        let settings = filters.settings();
        assert_eq!(settings.pixel_block_size, MAX_PIXEL_BLOCK_SIZE);
        assert_abs_diff_eq!(settings.blur_sigma, DEFAULT_BLUR_SIGMA);
    }

    #[test]
    fn load_with_override_missing_file_uses_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_reports_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[viewport\n").expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let config = Config {
            general: GeneralConfig {
                image_directory: None,
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("failed to save");
        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }
}
