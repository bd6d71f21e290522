//! Calibration configuration resource.
//!
//! Holds the constants of the sort-key formula. Defaults are safe to use
//! without any file; an INI file can override them.
//!
//! # Configuration File Format
//!
//! ```ini
//! [calibration]
//! multiplier = 100
//! order_offset = 0
//! bottom_offset = 0.0
//! shadow_offset = -1
//! glow_offset = 0
//! reserved_threshold = -9990
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_MULTIPLIER: i32 = 100;
const DEFAULT_ORDER_OFFSET: i32 = 0;
const DEFAULT_BOTTOM_OFFSET: f32 = 0.0;
const DEFAULT_SHADOW_OFFSET: i32 = -1;
const DEFAULT_GLOW_OFFSET: i32 = 0;
const DEFAULT_RESERVED_THRESHOLD: i32 = -9990;
const DEFAULT_CONFIG_PATH: &str = "./ysortcal.ini";

const SECTION: &str = "calibration";

/// Constants used by the calibration pass.
///
/// The pass only reads this resource. When it is absent from the world the
/// defaults are used.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CalibrationConfig {
    /// Scale applied to the reference Y before rounding.
    pub multiplier: i32,
    /// Added to every ordinary order.
    pub order_offset: i32,
    /// Added to every reference Y.
    pub bottom_offset: f32,
    /// Added to the owner's order for shadow nodes.
    pub shadow_offset: i32,
    /// Added to the owner's order for glow/light/effect nodes.
    pub glow_offset: i32,
    /// Orders at or below this value are hand-placed and never recalculated.
    pub reserved_threshold: i32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CalibrationConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            multiplier: DEFAULT_MULTIPLIER,
            order_offset: DEFAULT_ORDER_OFFSET,
            bottom_offset: DEFAULT_BOTTOM_OFFSET,
            shadow_offset: DEFAULT_SHADOW_OFFSET,
            glow_offset: DEFAULT_GLOW_OFFSET,
            reserved_threshold: DEFAULT_RESERVED_THRESHOLD,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        if let Some(v) = read_i32(&config, "multiplier") {
            self.multiplier = v;
        }
        if let Some(v) = read_i32(&config, "order_offset") {
            self.order_offset = v;
        }
        if let Some(v) = config.getfloat(SECTION, "bottom_offset").ok().flatten() {
            self.bottom_offset = v as f32;
        }
        if let Some(v) = read_i32(&config, "shadow_offset") {
            self.shadow_offset = v;
        }
        if let Some(v) = read_i32(&config, "glow_offset") {
            self.glow_offset = v;
        }
        if let Some(v) = read_i32(&config, "reserved_threshold") {
            self.reserved_threshold = v;
        }

        info!(
            "Loaded config: multiplier={}, order_offset={}, bottom_offset={}, shadow_offset={}, glow_offset={}, reserved_threshold={}",
            self.multiplier,
            self.order_offset,
            self.bottom_offset,
            self.shadow_offset,
            self.glow_offset,
            self.reserved_threshold
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set(SECTION, "multiplier", Some(self.multiplier.to_string()));
        config.set(SECTION, "order_offset", Some(self.order_offset.to_string()));
        config.set(SECTION, "bottom_offset", Some(self.bottom_offset.to_string()));
        config.set(SECTION, "shadow_offset", Some(self.shadow_offset.to_string()));
        config.set(SECTION, "glow_offset", Some(self.glow_offset.to_string()));
        config.set(
            SECTION,
            "reserved_threshold",
            Some(self.reserved_threshold.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

fn read_i32(config: &Ini, key: &str) -> Option<i32> {
    config
        .getint(SECTION, key)
        .ok()
        .flatten()
        .and_then(|v| i32::try_from(v).ok())
}
