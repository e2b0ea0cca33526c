use crate::{dsp::frame::StereoFrame, VOLTAGE_SCALE};

/// Everything the host feeds into one step, in volts.
///
/// CV inputs are added on top of the matching knob; unpatched inputs stay
/// at 0 V.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HostInputs {
    pub in_l: f32,
    pub in_r: f32,
    pub freeze: f32,
    pub trigger: f32,
    pub position_cv: f32,
    pub size_cv: f32,
    /// 1 V/oct.
    pub pitch_cv: f32,
    pub density_cv: f32,
    pub texture_cv: f32,
    pub blend_cv: f32,
}

impl HostInputs {
    pub fn audio(in_l: f32, in_r: f32) -> Self {
        Self {
            in_l,
            in_r,
            ..Default::default()
        }
    }

    /// Audio input scaled by `gain` and normalised from volts.
    #[inline]
    pub fn audio_frame(&self, gain: f32) -> StereoFrame {
        StereoFrame::stereo(self.in_l, self.in_r).scaled(gain / VOLTAGE_SCALE)
    }
}

/// What one step hands back to the host, in volts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HostOutputs {
    pub out_l: f32,
    pub out_r: f32,
}

impl HostOutputs {
    pub const SILENCE: Self = Self {
        out_l: 0.0,
        out_r: 0.0,
    };

    #[inline]
    pub fn from_frame(frame: StereoFrame) -> Self {
        let volts = frame.scaled(VOLTAGE_SCALE);
        Self {
            out_l: volts.left(),
            out_r: volts.right(),
        }
    }
}
