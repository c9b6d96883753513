//! Application Configuration
//! Startup settings, optionally overridden by a `plotboard.json` file in
//! the working directory.
//!
//! Example file:
//!
//! ```json
//! {
//!   "mode": "series",
//!   "chart": "scatter",
//!   "figure": { "plot_height": 480.0, "export_width": 800, "export_height": 480 },
//!   "overlay": { "enabled": true, "seed": 42, "points": 100 }
//! }
//! ```

use crate::charts::{ChartKind, OverlayConfig};
use crate::data::TableMode;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "plotboard.json";

/// Figure dimensions for display and export.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    /// On-screen plot height in points; the width follows the panel.
    pub plot_height: f32,
    /// Pixel size of exported PNG files.
    pub export_width: u32,
    pub export_height: u32,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            plot_height: 480.0,
            export_width: 800,
            export_height: 480,
        }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub mode: TableMode,
    pub chart: ChartKind,
    pub figure: FigureConfig,
    pub overlay: OverlayConfig,
}

impl AppConfig {
    /// Load configuration from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<AppConfig> {
        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config =
            serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Load the default config file, falling back to defaults (with a
    /// logged warning) when it is malformed.
    pub fn load_or_default() -> AppConfig {
        match Self::load(Path::new(CONFIG_FILE)) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("config load failed: {err:#}; using defaults");
                AppConfig::default()
            }
        }
    }
}
