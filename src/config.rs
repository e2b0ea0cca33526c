#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{engine::PlaybackMode, error::BridgeError, io::Controls, RING_CAPACITY};

/// Construction-time settings for a [`StepScheduler`](crate::bridge::StepScheduler).
///
/// ```
/// use saavy_clouds::{config::BridgeConfig, engine::PlaybackMode};
///
/// let config = BridgeConfig::new()
///     .host_rate(44_100.0)
///     .playback_mode(PlaybackMode::Granular);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// Expected host rate. Only used to seed the converters; the rate passed
    /// to every step wins.
    pub host_rate: f32,
    /// Frames held by each ring buffer.
    pub ring_capacity: usize,
    pub playback_mode: PlaybackMode,
    pub low_fidelity: bool,
    pub controls: Controls,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            host_rate: 48_000.0,
            ring_capacity: RING_CAPACITY,
            playback_mode: PlaybackMode::Granular,
            low_fidelity: false,
            controls: Controls::default(),
        }
    }
}

impl BridgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn host_rate(mut self, host_rate: f32) -> Self {
        self.host_rate = host_rate;
        self
    }

    pub fn ring_capacity(mut self, capacity: usize) -> Self {
        self.ring_capacity = capacity;
        self
    }

    pub fn playback_mode(mut self, mode: PlaybackMode) -> Self {
        self.playback_mode = mode;
        self
    }

    pub fn low_fidelity(mut self, enabled: bool) -> Self {
        self.low_fidelity = enabled;
        self
    }

    pub fn controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self
    }

    pub fn validate(&self) -> Result<(), BridgeError> {
        if !self.host_rate.is_finite() || self.host_rate <= 0.0 {
            return Err(BridgeError::InvalidConfig("host rate must be positive"));
        }
        if self.ring_capacity < crate::ENGINE_BLOCK_SIZE {
            return Err(BridgeError::InvalidConfig(
                "ring capacity must hold at least one engine block",
            ));
        }
        Ok(())
    }
}
