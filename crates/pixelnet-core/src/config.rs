//! Runtime configuration for the pixel network.
//!
//! Defaults come from [`crate::constants`]; the front-end may override them
//! from `data-*` attributes on the canvas element.

use crate::constants::{
    CABLE_COUNT, CABLE_SPEED_PER_FRAME, CABLE_SPEED_PER_SEC, CELL_SIZE, MAX_CABLE_COUNT,
    MIN_CELL_SIZE,
};
use thiserror::Error;

/// How cable progress is advanced each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PulseTiming {
    /// Fixed increment per rendered frame; pulse speed follows the refresh rate.
    PerFrame(f32),
    /// Increment scaled by elapsed seconds; pulse speed is refresh-rate independent.
    PerSecond(f32),
}

impl PulseTiming {
    /// Progress to add for a frame that took `dt_sec` seconds.
    #[inline]
    pub fn increment(self, dt_sec: f32) -> f32 {
        match self {
            PulseTiming::PerFrame(step) => step,
            PulseTiming::PerSecond(rate) => rate * dt_sec,
        }
    }

    fn with_speed(self, speed: f32) -> Self {
        match self {
            PulseTiming::PerFrame(_) => PulseTiming::PerFrame(speed),
            PulseTiming::PerSecond(_) => PulseTiming::PerSecond(speed),
        }
    }
}

impl Default for PulseTiming {
    fn default() -> Self {
        PulseTiming::PerFrame(CABLE_SPEED_PER_FRAME)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown config attribute `{0}`")]
    UnknownKey(String),
    #[error("`{key}` expects a number, got `{value}`")]
    NotANumber { key: String, value: String },
    #[error("`{key}` must be positive, got {value}")]
    NotPositive { key: String, value: f32 },
    #[error("cell size {0} is below the minimum of {}", MIN_CELL_SIZE)]
    CellTooSmall(f32),
    #[error("cable count {0} exceeds the maximum of {}", MAX_CABLE_COUNT)]
    TooManyCables(usize),
    #[error("unknown pulse timing `{0}` (expected `frame` or `time`)")]
    UnknownTiming(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    pub cell_size: f32,
    pub cable_count: usize,
    pub timing: PulseTiming,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            cable_count: CABLE_COUNT,
            timing: PulseTiming::default(),
        }
    }
}

impl NetworkConfig {
    /// Attribute names understood by [`NetworkConfig::apply_attr`], in the order
    /// they should be applied (timing before speed).
    pub const ATTRS: [&'static str; 4] = [
        "data-cell-size",
        "data-cable-count",
        "data-pulse-timing",
        "data-cable-speed",
    ];

    /// Apply one `data-*` override. On error the config is left unchanged.
    pub fn apply_attr(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "data-cell-size" => {
                let cell = parse_positive(key, value)?;
                if cell < MIN_CELL_SIZE {
                    return Err(ConfigError::CellTooSmall(cell));
                }
                self.cell_size = cell;
            }
            "data-cable-count" => {
                let count = value
                    .parse::<usize>()
                    .map_err(|_| ConfigError::NotANumber {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
                if count > MAX_CABLE_COUNT {
                    return Err(ConfigError::TooManyCables(count));
                }
                self.cable_count = count;
            }
            "data-cable-speed" => {
                let speed = parse_positive(key, value)?;
                self.timing = self.timing.with_speed(speed);
            }
            "data-pulse-timing" => {
                self.timing = match value {
                    "frame" => PulseTiming::PerFrame(CABLE_SPEED_PER_FRAME),
                    "time" => PulseTiming::PerSecond(CABLE_SPEED_PER_SEC),
                    other => return Err(ConfigError::UnknownTiming(other.to_string())),
                };
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    /// Apply every override in order, logging and skipping rejected ones.
    pub fn with_attrs<'a>(mut self, attrs: impl IntoIterator<Item = (&'a str, String)>) -> Self {
        for (key, value) in attrs {
            if let Err(e) = self.apply_attr(key, &value) {
                log::warn!("[config] ignoring override: {}", e);
            }
        }
        self
    }
}

fn parse_positive(key: &str, value: &str) -> Result<f32, ConfigError> {
    let v = value.parse::<f32>().map_err(|_| ConfigError::NotANumber {
        key: key.to_string(),
        value: value.to_string(),
    })?;
    if !(v.is_finite() && v > 0.0) {
        return Err(ConfigError::NotPositive {
            key: key.to_string(),
            value: v,
        });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_frame_ignores_dt() {
        let t = PulseTiming::PerFrame(0.01);
        assert_eq!(t.increment(0.0), 0.01);
        assert_eq!(t.increment(1.0), 0.01);
    }

    #[test]
    fn per_second_scales_with_dt() {
        let t = PulseTiming::PerSecond(0.6);
        assert!((t.increment(0.5) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn speed_override_keeps_timing_kind() {
        let mut cfg = NetworkConfig::default();
        cfg.apply_attr("data-pulse-timing", "time").unwrap();
        cfg.apply_attr("data-cable-speed", "1.5").unwrap();
        assert_eq!(cfg.timing, PulseTiming::PerSecond(1.5));
    }
}
