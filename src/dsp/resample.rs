//! Variable-ratio sample rate conversion.

/*
Streaming Resampling
====================

The converter walks a read position ("phase") across the input stream in
steps of `1 / ratio` input frames per output frame, where

    ratio = output_rate / input_rate

Each output frame is a 4-point Hermite interpolation around the phase:

      xm1      x0   ^   x1       x2
       |        |   |    |        |
    history[0] [1] phase [2]     [3]

When the phase passes x1 the window slides by one input frame. The window
and the fractional phase persist between calls, so feeding a stream in
arbitrary chunks produces the same output as feeding it in one piece. The
window also means output lags input by two input frames.

Changing the ratio only changes the step size. The window is kept, so a
ratio change never clicks; it just bends the read speed from the next
output frame onward.
*/

use super::frame::Frame;
use crate::error::BridgeError;

const TAPS: usize = 4;

pub struct RateConverter<const N: usize> {
    ratio: f64,
    step: f64,
    phase: f64,
    history: [Frame<N>; TAPS],
}

impl<const N: usize> RateConverter<N> {
    pub fn new() -> Self {
        Self {
            ratio: 1.0,
            step: 1.0,
            // an input frame is required before the first output
            phase: 1.0,
            history: [Frame::silence(); TAPS],
        }
    }

    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Set `output_rate / input_rate`. Rejected ratios leave the previous
    /// one in place.
    pub fn set_ratio(&mut self, ratio: f64) -> Result<(), BridgeError> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(BridgeError::RatioOutOfRange(ratio));
        }
        self.ratio = ratio;
        self.step = 1.0 / ratio;
        Ok(())
    }

    /// Convert up to `*in_len` frames of `input` into up to `*out_len`
    /// frames of `output`, then overwrite both counts with what was actually
    /// consumed and produced.
    pub fn process(
        &mut self,
        input: &[Frame<N>],
        in_len: &mut usize,
        output: &mut [Frame<N>],
        out_len: &mut usize,
    ) {
        let in_limit = (*in_len).min(input.len());
        let out_limit = (*out_len).min(output.len());
        let (consumed, produced) =
            self.process_into(&input[..in_limit], &mut output[..out_limit]);
        *in_len = consumed;
        *out_len = produced;
    }

    /// Slice form of [`process`](Self::process). Returns `(consumed, produced)`.
    pub fn process_into(&mut self, input: &[Frame<N>], output: &mut [Frame<N>]) -> (usize, usize) {
        let mut consumed = 0;
        let mut produced = 0;

        // Input is only pulled when there is room for the frame it unlocks.
        'render: while produced < output.len() {
            while self.phase >= 1.0 {
                let Some(&next) = input.get(consumed) else {
                    break 'render;
                };
                self.history.rotate_left(1);
                self.history[TAPS - 1] = next;
                self.phase -= 1.0;
                consumed += 1;
            }

            output[produced] = self.interpolate(self.phase as f32);
            produced += 1;
            self.phase += self.step;
        }

        (consumed, produced)
    }

    /// Clear the interpolation window and phase, keeping the ratio.
    pub fn reset(&mut self) {
        self.phase = 1.0;
        self.history = [Frame::silence(); TAPS];
    }

    #[inline]
    fn interpolate(&self, frac: f32) -> Frame<N> {
        let [xm1, x0, x1, x2] = &self.history;
        let mut out = Frame::silence();
        for ch in 0..N {
            out.samples[ch] = hermite(
                xm1.samples[ch],
                x0.samples[ch],
                x1.samples[ch],
                x2.samples[ch],
                frac,
            );
        }
        out
    }
}

impl<const N: usize> Default for RateConverter<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn hermite(xm1: f32, x0: f32, x1: f32, x2: f32, frac: f32) -> f32 {
    let c0 = x0;
    let c1 = 0.5 * (x1 - xm1);
    let c2 = xm1 - 2.5 * x0 + 2.0 * x1 - 0.5 * x2;
    let c3 = 0.5 * (x2 - xm1) + 1.5 * (x0 - x1);

    ((c3 * frac + c2) * frac + c1) * frac + c0
}
