//! Configuration module for lineplot-rs
//!
//! This module handles plot configuration: the default signal identifier
//! and buffer format used by [`LinePlot`](crate::LinePlot), the color
//! palette and line width handed to new layers, display toggles for the
//! egui renderer, and the signal parameters of the demo.
//!
//! # Config Location
//!
//! The config file is stored in the platform-appropriate data directory:
//! - **Linux**: `~/.local/share/dev.hxyulin.lineplot-rs/config.json`
//! - **macOS**: `~/Library/Application Support/dev.hxyulin.lineplot-rs/config.json`
//! - **Windows**: `%APPDATA%\dev.hxyulin.lineplot-rs\config.json`
//!
//! # Example
//!
//! ```ignore
//! use lineplot_rs::config::PlotConfig;
//!
//! let mut config = PlotConfig::load_or_default(PlotConfig::default_path()?);
//! config.show_grid = false;
//! config.save(PlotConfig::default_path()?)?;
//! ```

use crate::analysis::WindowFunction;
use crate::error::{LinePlotError, Result};
use crate::host::MemoryHost;
use crate::layer::LayerColor;
use crate::types::{FormatSize, FormatType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.hxyulin.lineplot-rs";

/// Config filename
pub const CONFIG_FILE: &str = "config.json";

/// Signal identifier used when the caller does not name one
pub const DEFAULT_SIGNAL: &str = "signal";

/// Default line width for new layers
pub const DEFAULT_LINE_WIDTH: f32 = 1.5;

// ==================== App Data Directory ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

// ==================== Plot Config ====================

/// Persistent plot configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Config format version
    pub version: u32,

    /// Signal identifier used by `push_signal`
    pub default_signal: String,

    /// Format size used by `push_signal`
    pub default_format_size: FormatSize,

    /// Format type used by `push_signal`
    pub default_format_type: FormatType,

    /// Colors for new layers, in creation order
    pub palette: Vec<LayerColor>,

    /// Line width for new layers
    pub line_width: f32,

    /// Whether to show the legend
    pub show_legend: bool,

    /// Whether to show grid lines
    pub show_grid: bool,

    /// Demo signal parameters
    pub demo: DemoConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            version: 1,
            default_signal: DEFAULT_SIGNAL.to_string(),
            default_format_size: FormatSize::default(),
            default_format_type: FormatType::default(),
            palette: vec![
                LayerColor::rgb(100, 149, 237),
                LayerColor::rgb(255, 99, 71),
                LayerColor::rgb(50, 205, 50),
                LayerColor::rgb(255, 215, 0),
            ],
            line_width: DEFAULT_LINE_WIDTH,
            show_legend: true,
            show_grid: true,
            demo: DemoConfig::default(),
        }
    }
}

impl PlotConfig {
    /// Path of the config file in the app data directory
    pub fn default_path() -> Result<PathBuf> {
        app_data_dir()
            .map(|p| p.join(CONFIG_FILE))
            .ok_or_else(|| LinePlotError::Config("Could not determine config path".to_string()))
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            LinePlotError::Config(format!("Failed to read config {:?}: {}", path, e))
        })?;

        let config: PlotConfig = serde_json::from_str(&content).map_err(|e| {
            LinePlotError::Config(format!("Failed to parse config {:?}: {}", path, e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file, returning defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save the config to disk as JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LinePlotError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| LinePlotError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            LinePlotError::Config(format!("Failed to write config {:?}: {}", path, e))
        })
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.default_signal.is_empty() {
            return Err(LinePlotError::Config(
                "default_signal must not be empty".to_string(),
            ));
        }
        if !(self.line_width > 0.0) {
            return Err(LinePlotError::Config(format!(
                "line_width must be positive, got {}",
                self.line_width
            )));
        }
        self.demo.validate()
    }

    /// Memory host configured with this palette and line width
    pub fn memory_host(&self) -> MemoryHost {
        MemoryHost::new()
            .with_palette(self.palette.clone())
            .with_line_width(self.line_width)
    }
}

/// Signal parameters of the demo application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Sample rate in Hz
    pub sample_rate: f64,
    /// Samples per pushed frame
    pub frame_length: usize,
    /// Tone frequency in Hz
    pub tone_hz: f64,
    /// Amplitude of the third harmonic relative to the tone
    pub harmonic: f64,
    /// Window applied before the spectrum
    pub window: WindowFunction,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sample_rate: 8000.0,
            frame_length: 1024,
            tone_hz: 440.0,
            harmonic: 0.2,
            window: WindowFunction::Hann,
        }
    }
}

impl DemoConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if !(self.sample_rate > 0.0) {
            return Err(LinePlotError::Config(format!(
                "demo.sample_rate must be positive, got {}",
                self.sample_rate
            )));
        }
        if self.frame_length < 2 {
            return Err(LinePlotError::Config(format!(
                "demo.frame_length must be at least 2, got {}",
                self.frame_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = PlotConfig::default();
        assert_eq!(config.default_signal, "signal");
        assert_eq!(config.default_format_size, FormatSize::Complex);
        assert_eq!(config.default_format_type, FormatType::Float32);
        assert!(config.show_legend);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_roundtrip_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let mut config = PlotConfig::default();
        config.default_signal = "psd".to_string();
        config.palette = vec![LayerColor::RED];
        config.demo.frame_length = 2048;
        config.save(&path).unwrap();

        let loaded = PlotConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "show_grid": false }"#).unwrap();

        let loaded = PlotConfig::load(&path).unwrap();
        assert!(!loaded.show_grid);
        assert_eq!(loaded.default_signal, DEFAULT_SIGNAL);
        assert_eq!(loaded.demo, DemoConfig::default());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "line_width": -1.0 }"#).unwrap();

        assert!(PlotConfig::load(&path).is_err());
        assert_eq!(PlotConfig::load_or_default(&path), PlotConfig::default());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PlotConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, LinePlotError::Config(ref msg) if msg.contains("absent.json")));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = PlotConfig::load_or_default(dir.path().join("absent.json"));
        assert_eq!(loaded, PlotConfig::default());
    }
}
