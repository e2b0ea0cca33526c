/// One instant of multichannel audio.
///
/// Samples are nominally in [-1, 1] but are never clamped here; clamping
/// only happens when converting to the engine's fixed-point format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<const N: usize> {
    pub samples: [f32; N],
}

pub type StereoFrame = Frame<2>;

impl<const N: usize> Frame<N> {
    pub const fn new(samples: [f32; N]) -> Self {
        Self { samples }
    }

    pub const fn silence() -> Self {
        Self { samples: [0.0; N] }
    }

    #[inline]
    pub fn scaled(self, gain: f32) -> Self {
        let mut out = self;
        for s in out.samples.iter_mut() {
            *s *= gain;
        }
        out
    }

    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, &s| acc.max(s.abs()))
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::silence()
    }
}

impl StereoFrame {
    pub const fn stereo(left: f32, right: f32) -> Self {
        Self {
            samples: [left, right],
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.samples[0]
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.samples[1]
    }

    /// Quantize to the engine's 16-bit representation, saturating.
    #[inline]
    pub fn to_short(self) -> ShortFrame {
        ShortFrame {
            l: quantize(self.samples[0]),
            r: quantize(self.samples[1]),
        }
    }
}

/// Stereo frame in the engine's fixed-point format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShortFrame {
    pub l: i16,
    pub r: i16,
}

impl ShortFrame {
    #[inline]
    pub fn to_frame(self) -> StereoFrame {
        StereoFrame::stereo(self.l as f32 / 32768.0, self.r as f32 / 32768.0)
    }
}

#[inline]
fn quantize(sample: f32) -> i16 {
    // NaN maps to 0 through the saturating cast
    (sample * 32767.0).clamp(-32768.0, 32767.0) as i16
}
