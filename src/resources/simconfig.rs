//! Simulation runner configuration.
//!
//! Manages runner settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [simulation]
//! fixed_delta = 0.016666668
//! duration = 30
//! time_scale = 1.0
//!
//! [motor_flip]
//! seconds = 10
//!
//! [joint]
//! drive_velocity = 5
//! max_drive_torque = 100
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::jointmotorflip::DEFAULT_FLIP_SECONDS;

/// Default safe values for startup
const DEFAULT_FIXED_DELTA: f32 = 1.0 / 60.0;
const DEFAULT_DURATION: f32 = 30.0;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_DRIVE_VELOCITY: f32 = 5.0;
const DEFAULT_MAX_DRIVE_TORQUE: f32 = 100.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Simulation runner configuration.
///
/// Values not present in the file keep their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Fixed simulation step in seconds.
    pub fixed_delta: f32,
    /// Total simulated time in seconds before the runner exits.
    pub duration: f32,
    /// Multiplier applied to every step.
    pub time_scale: f32,
    /// Default flip delay for entities that do not set their own.
    pub flip_seconds: f32,
    /// Initial drive velocity of the default joint.
    pub drive_velocity: f32,
    /// Max torque of the default joint.
    pub max_drive_torque: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            fixed_delta: DEFAULT_FIXED_DELTA,
            duration: DEFAULT_DURATION,
            time_scale: DEFAULT_TIME_SCALE,
            flip_seconds: DEFAULT_FLIP_SECONDS,
            drive_velocity: DEFAULT_DRIVE_VELOCITY,
            max_drive_torque: DEFAULT_MAX_DRIVE_TORQUE,
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
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config)?;

        info!(
            "Loaded config: dt={}, duration={}s, time_scale={}, flip every {}s, drive_velocity={}",
            self.fixed_delta, self.duration, self.time_scale, self.flip_seconds, self.drive_velocity
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config)
    }

    fn apply_ini(&mut self, config: &Ini) -> Result<(), String> {
        // [simulation] section
        if let Some(dt) = get_float(config, "simulation", "fixed_delta")? {
            if dt.is_nan() || dt <= 0.0 {
                return Err(format!("simulation.fixed_delta must be positive, got {}", dt));
            }
            self.fixed_delta = dt;
        }
        if let Some(duration) = get_float(config, "simulation", "duration")? {
            self.duration = duration;
        }
        if let Some(scale) = get_float(config, "simulation", "time_scale")? {
            self.time_scale = scale;
        }

        // [motor_flip] section
        if let Some(seconds) = get_float(config, "motor_flip", "seconds")? {
            if seconds.is_nan() || seconds < 0.0 {
                return Err(format!("motor_flip.seconds must be non-negative, got {}", seconds));
            }
            self.flip_seconds = seconds;
        }

        // [joint] section
        if let Some(velocity) = get_float(config, "joint", "drive_velocity")? {
            self.drive_velocity = velocity;
        }
        if let Some(torque) = get_float(config, "joint", "max_drive_torque")? {
            self.max_drive_torque = torque;
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [simulation] section
        config.set("simulation", "fixed_delta", Some(self.fixed_delta.to_string()));
        config.set("simulation", "duration", Some(self.duration.to_string()));
        config.set("simulation", "time_scale", Some(self.time_scale.to_string()));

        // [motor_flip] section
        config.set("motor_flip", "seconds", Some(self.flip_seconds.to_string()));

        // [joint] section
        config.set("joint", "drive_velocity", Some(self.drive_velocity.to_string()));
        config.set("joint", "max_drive_torque", Some(self.max_drive_torque.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Number of fixed steps needed to cover `duration`.
    pub fn step_count(&self) -> u64 {
        let step = self.fixed_delta * self.time_scale;
        if step <= 0.0 || self.duration <= 0.0 {
            return 0;
        }
        (self.duration / step).ceil() as u64
    }
}

fn get_float(config: &Ini, section: &str, key: &str) -> Result<Option<f32>, String> {
    config
        .getfloat(section, key)
        .map(|v| v.map(|v| v as f32))
        .map_err(|e| format!("Invalid value for {}.{}: {}", section, key, e))
}
