#[cfg(feature = "rtrb")]
use rtrb::Consumer;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::host::HostInputs;
use crate::{
    engine::{EngineParameters, PlaybackMode},
    GATE_THRESHOLD, VOLTAGE_SCALE,
};

pub const PITCH_KNOB_RANGE: (f32, f32) = (-2.0, 2.0);
pub const PITCH_SEMITONE_RANGE: (f32, f32) = (-48.0, 48.0);

/// Knob positions. Every knob except pitch spans 0..=1.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    pub position: f32,
    pub size: f32,
    /// Octaves, -2..=2.
    pub pitch: f32,
    pub input_gain: f32,
    pub density: f32,
    pub texture: f32,
    pub blend: f32,
    /// Freeze held from the panel or a control message; ORed with the gate.
    pub freeze: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            position: 0.5,
            size: 0.5,
            pitch: 0.0,
            input_gain: 0.5,
            density: 0.5,
            texture: 0.5,
            blend: 0.5,
            freeze: false,
        }
    }
}

impl Controls {
    /// Force every knob into its range.
    pub fn clamped(self) -> Self {
        Self {
            position: unit(self.position),
            size: unit(self.size),
            pitch: self.pitch.clamp(PITCH_KNOB_RANGE.0, PITCH_KNOB_RANGE.1),
            input_gain: unit(self.input_gain),
            density: unit(self.density),
            texture: unit(self.texture),
            blend: unit(self.blend),
            freeze: self.freeze,
        }
    }

    /// Combine knobs with this step's CV into one block's parameters.
    pub fn parameters(&self, inputs: &HostInputs, trigger: bool) -> EngineParameters {
        let pitch = (self.pitch + inputs.pitch_cv) * 12.0;
        EngineParameters {
            position: unit(self.position + inputs.position_cv / VOLTAGE_SCALE),
            size: unit(self.size + inputs.size_cv / VOLTAGE_SCALE),
            pitch: pitch.clamp(PITCH_SEMITONE_RANGE.0, PITCH_SEMITONE_RANGE.1),
            density: unit(self.density + inputs.density_cv / VOLTAGE_SCALE),
            texture: unit(self.texture + inputs.texture_cv / VOLTAGE_SCALE),
            dry_wet: unit(self.blend + inputs.blend_cv / VOLTAGE_SCALE),
            freeze: self.freeze || inputs.freeze >= GATE_THRESHOLD,
            trigger,
            stereo_spread: 0.0,
            feedback: 0.0,
            reverb: 0.0,
        }
    }

    /// Apply a knob message. Returns `false` for messages that are not about
    /// knobs.
    pub fn apply(&mut self, msg: ControlMessage) -> bool {
        match msg {
            ControlMessage::SetPosition(v) => self.position = unit(v),
            ControlMessage::SetSize(v) => self.size = unit(v),
            ControlMessage::SetPitch(v) => {
                self.pitch = v.clamp(PITCH_KNOB_RANGE.0, PITCH_KNOB_RANGE.1)
            }
            ControlMessage::SetInputGain(v) => self.input_gain = unit(v),
            ControlMessage::SetDensity(v) => self.density = unit(v),
            ControlMessage::SetTexture(v) => self.texture = unit(v),
            ControlMessage::SetBlend(v) => self.blend = unit(v),
            ControlMessage::SetFreeze(on) => self.freeze = on,
            ControlMessage::Trigger
            | ControlMessage::SetPlaybackMode(_)
            | ControlMessage::SetLowFidelity(_) => return false,
        }
        true
    }
}

#[inline]
fn unit(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Control changes sent to the audio thread.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ControlMessage {
    SetPosition(f32),
    SetSize(f32),
    SetPitch(f32),
    SetInputGain(f32),
    SetDensity(f32),
    SetTexture(f32),
    SetBlend(f32),
    SetFreeze(bool),
    Trigger,
    SetPlaybackMode(PlaybackMode),
    SetLowFidelity(bool),
}

pub trait ControlReceiver {
    fn pop(&mut self) -> Option<ControlMessage>;
}

#[cfg(feature = "rtrb")]
impl ControlReceiver for Consumer<ControlMessage> {
    fn pop(&mut self) -> Option<ControlMessage> {
        Consumer::pop(self).ok()
    }
}
