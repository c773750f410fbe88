//! Application configuration.
//!
//! The configuration is an explicit value: callers construct (or load) a
//! `PilotConfig` and pass it to the gesture pipeline at construction time.
//! There is no process-wide default instance; components capture the snapshot
//! they are given and never share mutable config state.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PilotConfig {
    /// Pinch detection and smoothing tuning.
    pub gesture: GestureTuning,

    /// Scroll gesture tuning.
    pub scroll: ScrollTuning,

    /// Active region bounds in normalized coordinates.
    pub region: RegionBounds,

    /// Landmark role indices in the 21-point hand layout.
    pub landmarks: LandmarkRoles,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Gesture detection parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GestureTuning {
    /// Pinch activation threshold as a fraction of the reference distance.
    pub pinch_threshold: f64,

    /// Window after a pinch release during which a second pinch
    /// starts a drag instead of resolving to a click (milliseconds).
    pub double_pinch_window_ms: u64,

    /// EMA smoothing factor in (0, 1]. Lower = smoother, more lag.
    pub ema_alpha: f64,
}

/// Scroll gesture parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScrollTuning {
    /// Vertical movement below this is ignored (normalized units).
    pub dead_zone: f64,

    /// Minimum interval between scroll ticks (milliseconds).
    pub min_interval_ms: u64,

    /// Vertical travel per scroll tick (normalized units).
    pub tick_size: f64,
}

/// Active region bounds, validated into an `ActiveRegion` at pipeline
/// construction time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RegionBounds {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

/// Landmark role indices in the standard 21-point hand layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LandmarkRoles {
    pub wrist: usize,
    pub index_knuckle: usize,
    pub thumb_tip: usize,
    pub index_tip: usize,
    pub middle_tip: usize,
    pub ring_tip: usize,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "handpilot=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            pinch_threshold: 0.15,
            double_pinch_window_ms: 400,
            ema_alpha: 0.25,
        }
    }
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            dead_zone: 0.02,
            min_interval_ms: 120,
            tick_size: 0.04,
        }
    }
}

impl Default for RegionBounds {
    fn default() -> Self {
        Self {
            x_min: 0.25,
            y_min: 0.20,
            x_max: 0.75,
            y_max: 0.80,
        }
    }
}

impl Default for LandmarkRoles {
    fn default() -> Self {
        Self {
            wrist: 0,
            index_knuckle: 5,
            thumb_tip: 4,
            index_tip: 8,
            middle_tip: 12,
            ring_tip: 16,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl PilotConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("handpilot").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = PilotConfig::default();
        assert!((config.gesture.pinch_threshold - 0.15).abs() < 1e-9);
        assert_eq!(config.gesture.double_pinch_window_ms, 400);
        assert!((config.gesture.ema_alpha - 0.25).abs() < 1e-9);
        assert!((config.scroll.dead_zone - 0.02).abs() < 1e-9);
        assert_eq!(config.scroll.min_interval_ms, 120);
        assert_eq!(config.landmarks.thumb_tip, 4);
        assert_eq!(config.landmarks.index_knuckle, 5);
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = PilotConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: PilotConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.gesture.double_pinch_window_ms,
            config.gesture.double_pinch_window_ms
        );
        assert!((parsed.region.x_min - config.region.x_min).abs() < 1e-9);
    }
}
