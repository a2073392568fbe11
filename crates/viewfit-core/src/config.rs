//! Display configuration.
//!
//! Holds the virtual design resolution and window parameters supplied at
//! configuration time, loaded from and saved to a TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{info, warn};
use viewfit_common::geom::Extent;

use crate::viewport::ScaleMode;

/// Display configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Virtual design width in pixels
    pub virtual_width: u32,
    /// Virtual design height in pixels
    pub virtual_height: u32,
    /// Window/backbuffer width in pixels
    pub window_width: u32,
    /// Window/backbuffer height in pixels
    pub window_height: u32,
    /// Scaling mode for non-native aspect ratios
    pub scale_mode: ScaleMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            virtual_width: 1280,
            virtual_height: 720,
            window_width: 1280,
            window_height: 720,
            scale_mode: ScaleMode::Letterbox,
        }
    }
}

impl DisplayConfig {
    /// The virtual design extent.
    #[must_use]
    pub fn virtual_extent(&self) -> Extent {
        Extent::new(self.virtual_width, self.virtual_height)
    }

    /// The window extent.
    #[must_use]
    pub fn window_extent(&self) -> Extent {
        Extent::new(self.window_width, self.window_height)
    }

    /// Load configuration from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            info!("Config file not found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file: {e}");
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {e}");
                Self::default()
            }
        }
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Clamp configuration values to usable ranges.
    ///
    /// A zero axis would be rejected downstream with `InvalidDimension`, so
    /// clamp it up to one pixel here.
    pub fn validate(&mut self) {
        self.virtual_width = self.virtual_width.max(1);
        self.virtual_height = self.virtual_height.max(1);
        self.window_width = self.window_width.max(1);
        self.window_height = self.window_height.max(1);
    }
}
