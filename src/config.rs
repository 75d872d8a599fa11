//! Simulation configuration
//!
//! Loaded from a `key = value` text file. Unknown keys and malformed lines are
//! skipped; a bad number or unreadable file falls back to the full defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::BEAM_EFFECTIVE_DIVISOR;

/// Recognised configuration keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigKey {
    RocketSpeed,
    DistanceCornerToCenter,
    RadarBeamWidthDegrees,
    RadarRotationSpeedDps,
    RadarMaxDetectionRangeP,
    RadarCircularAttackRange,
    RadarCoreVulnerabilityRadius,
    RadarDeadZoneRadius,
    LaunchIntervalMinSec,
    LaunchIntervalMaxSec,
    TotalRocketsToLaunch,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 11] = [
        ConfigKey::RocketSpeed,
        ConfigKey::DistanceCornerToCenter,
        ConfigKey::RadarBeamWidthDegrees,
        ConfigKey::RadarRotationSpeedDps,
        ConfigKey::RadarMaxDetectionRangeP,
        ConfigKey::RadarCircularAttackRange,
        ConfigKey::RadarCoreVulnerabilityRadius,
        ConfigKey::RadarDeadZoneRadius,
        ConfigKey::LaunchIntervalMinSec,
        ConfigKey::LaunchIntervalMaxSec,
        ConfigKey::TotalRocketsToLaunch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::RocketSpeed => "rocket_speed",
            ConfigKey::DistanceCornerToCenter => "distance_corner_to_center",
            ConfigKey::RadarBeamWidthDegrees => "radar_beam_width_degrees",
            ConfigKey::RadarRotationSpeedDps => "radar_rotation_speed_dps",
            ConfigKey::RadarMaxDetectionRangeP => "radar_max_detection_range_P",
            ConfigKey::RadarCircularAttackRange => "radar_circular_attack_range",
            ConfigKey::RadarCoreVulnerabilityRadius => "radar_core_vulnerability_radius",
            ConfigKey::RadarDeadZoneRadius => "radar_dead_zone_radius",
            ConfigKey::LaunchIntervalMinSec => "launch_interval_min_sec",
            ConfigKey::LaunchIntervalMaxSec => "launch_interval_max_sec",
            ConfigKey::TotalRocketsToLaunch => "total_rockets_to_launch",
        }
    }

    /// Look up a key by its exact file spelling (case-sensitive)
    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

/// Configuration load failure. Always recoverable: callers fall back to defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: `{key}` expects a number, got `{value}`")]
    InvalidFloat {
        key: &'static str,
        value: String,
        line: usize,
    },
    #[error("line {line}: `{key}` expects a non-negative integer, got `{value}`")]
    InvalidInteger {
        key: &'static str,
        value: String,
        line: usize,
    },
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Rocket speed (units/sec)
    pub rocket_speed: f32,
    /// Distance from each launch corner to the radar
    pub distance_corner_to_center: f32,
    /// Full angular width of the radar beam (degrees)
    pub radar_beam_width_degrees: f32,
    /// Sweep rotation speed (degrees/sec)
    pub radar_rotation_speed_dps: f32,
    /// Max passive detection range (informational)
    pub radar_max_detection_range: f32,
    /// Circular attack range (informational)
    pub radar_circular_attack_range: f32,
    /// A rocket this close destroys the radar
    pub radar_core_vulnerability_radius: f32,
    /// Rockets this close are invisible to the beam
    pub radar_dead_zone_radius: f32,
    pub launch_interval_min_sec: f32,
    pub launch_interval_max_sec: f32,
    pub total_rockets_to_launch: u32,

    /// Derived: `radar_max_detection_range / 1.5`. Not a file key.
    pub radar_beam_effective_radius: f32,
}

impl Default for Config {
    fn default() -> Self {
        let mut config = Self {
            rocket_speed: 50.0,
            distance_corner_to_center: 250.0,
            radar_beam_width_degrees: 30.0,
            radar_rotation_speed_dps: 45.0,
            radar_max_detection_range: 150.0,
            radar_circular_attack_range: 40.0,
            radar_core_vulnerability_radius: 10.0,
            radar_dead_zone_radius: 10.0,
            launch_interval_min_sec: 5.0,
            launch_interval_max_sec: 8.0,
            total_rockets_to_launch: 10,
            radar_beam_effective_radius: 0.0,
        };
        config.recompute_derived();
        config
    }
}

impl Config {
    /// Recompute values derived from file keys
    pub fn recompute_derived(&mut self) {
        self.radar_beam_effective_radius = self.radar_max_detection_range / BEAM_EFFECTIVE_DIVISOR;
    }

    /// Parse configuration text on top of the defaults.
    ///
    /// Blank lines, `#` comments, lines without exactly one `=` and unknown keys
    /// are skipped. A value that fails to parse aborts the whole parse.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split('=').collect();
            let [key, value] = parts.as_slice() else {
                log::trace!("config line {}: skipped (not `key = value`)", idx + 1);
                continue;
            };
            let Some(key) = ConfigKey::from_key(key.trim()) else {
                log::trace!("config line {}: unknown key `{}`", idx + 1, key.trim());
                continue;
            };

            config.apply(key, value.trim(), idx + 1)?;
        }

        config.recompute_derived();
        Ok(config)
    }

    fn apply(&mut self, key: ConfigKey, value: &str, line: usize) -> Result<(), ConfigError> {
        let slot = match key {
            ConfigKey::RocketSpeed => &mut self.rocket_speed,
            ConfigKey::DistanceCornerToCenter => &mut self.distance_corner_to_center,
            ConfigKey::RadarBeamWidthDegrees => &mut self.radar_beam_width_degrees,
            ConfigKey::RadarRotationSpeedDps => &mut self.radar_rotation_speed_dps,
            ConfigKey::RadarMaxDetectionRangeP => &mut self.radar_max_detection_range,
            ConfigKey::RadarCircularAttackRange => &mut self.radar_circular_attack_range,
            ConfigKey::RadarCoreVulnerabilityRadius => &mut self.radar_core_vulnerability_radius,
            ConfigKey::RadarDeadZoneRadius => &mut self.radar_dead_zone_radius,
            ConfigKey::LaunchIntervalMinSec => &mut self.launch_interval_min_sec,
            ConfigKey::LaunchIntervalMaxSec => &mut self.launch_interval_max_sec,
            ConfigKey::TotalRocketsToLaunch => {
                self.total_rockets_to_launch =
                    value.parse().map_err(|_| ConfigError::InvalidInteger {
                        key: key.as_str(),
                        value: value.to_string(),
                        line,
                    })?;
                return Ok(());
            }
        };

        *slot = value.parse().map_err(|_| ConfigError::InvalidFloat {
            key: key.as_str(),
            value: value.to_string(),
            line,
        })?;
        Ok(())
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any failure.
    ///
    /// The error, if any, is returned alongside so the caller can surface it.
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<ConfigError>) {
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }
}
