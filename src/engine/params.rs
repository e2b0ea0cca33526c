#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Processing mode of the granular engine.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackMode {
    #[default]
    Granular,
    Stretch,
    LoopingDelay,
    Spectral,
}

/// Engine-wide settings applied before every block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    pub num_channels: u8,
    pub low_fidelity: bool,
    pub playback_mode: PlaybackMode,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            num_channels: 2,
            low_fidelity: false,
            playback_mode: PlaybackMode::Granular,
        }
    }
}

/// Per-block control values handed to the engine by value.
///
/// Built fresh for every block; the engine never holds on to it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EngineParameters {
    /// Read head position in the recording buffer, 0..=1.
    pub position: f32,
    /// Grain size, 0..=1.
    pub size: f32,
    /// Transposition in semitones, -48..=48.
    pub pitch: f32,
    pub density: f32,
    pub texture: f32,
    pub dry_wet: f32,
    pub freeze: bool,
    pub trigger: bool,
    // Unused by the granular mode; always zero.
    pub stereo_spread: f32,
    pub feedback: f32,
    pub reverb: f32,
}
