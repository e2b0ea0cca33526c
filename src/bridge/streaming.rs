use log::warn;

use crate::{
    dsp::{
        frame::{ShortFrame, StereoFrame},
        resample::RateConverter,
        ring::RingBuffer,
    },
    engine::{BlockEngine, EngineAdapter, EngineParameters},
    ENGINE_BLOCK_SIZE, ENGINE_SAMPLE_RATE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    /// Output buffer is empty; the next step renders a block.
    Priming,
    /// At least one output frame is queued.
    Streaming,
}

/// What one engine block moved through the bridge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockReport {
    /// Host-rate input frames taken from the input buffer.
    pub input_consumed: usize,
    /// Engine-rate frames made from them; the rest of the block is silence.
    pub engine_frames: usize,
    /// Host-rate frames appended to the output buffer.
    pub output_produced: usize,
    /// Engine output frames that did not fit into the output buffer.
    pub engine_frames_dropped: usize,
}

impl BlockReport {
    #[inline]
    pub fn is_short(&self) -> bool {
        self.engine_frames < ENGINE_BLOCK_SIZE
    }
}

/// Two ring buffers and two rate converters between the host and the
/// engine.
///
/// ```text
/// host ─▶ input ring ─▶ input SRC ─▶ engine ─▶ output SRC ─▶ output ring ─▶ host
///         (host rate)   (host→32k)   (32 kHz)   (32k→host)    (host rate)
/// ```
pub struct StreamingBridge {
    input: RingBuffer<StereoFrame>,
    output: RingBuffer<StereoFrame>,
    input_src: RateConverter<2>,
    output_src: RateConverter<2>,
    host_rate: f32,
    rate_warned: bool,
}

impl StreamingBridge {
    pub fn new(capacity: usize, host_rate: f32) -> Self {
        let mut bridge = Self {
            input: RingBuffer::new(capacity),
            output: RingBuffer::new(capacity),
            input_src: RateConverter::new(),
            output_src: RateConverter::new(),
            host_rate: ENGINE_SAMPLE_RATE,
            rate_warned: false,
        };
        bridge.set_host_rate(host_rate);
        bridge
    }

    pub fn state(&self) -> BridgeState {
        if self.output.is_empty() {
            BridgeState::Priming
        } else {
            BridgeState::Streaming
        }
    }

    /// Host rate the converters are currently set up for.
    pub fn host_rate(&self) -> f32 {
        self.host_rate
    }

    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    pub fn output_len(&self) -> usize {
        self.output.len()
    }

    pub fn capacity(&self) -> usize {
        self.input.capacity()
    }

    /// Queue one host-rate input frame. A full buffer drops the frame and
    /// returns `false`.
    pub fn accept_input(&mut self, frame: StereoFrame) -> bool {
        self.input.push(frame).is_ok()
    }

    /// Retune both converters. Invalid rates keep the previous tuning.
    pub fn set_host_rate(&mut self, host_rate: f32) {
        let host = host_rate as f64;
        let engine = ENGINE_SAMPLE_RATE as f64;
        let tuned = self
            .input_src
            .set_ratio(engine / host)
            .and_then(|_| self.output_src.set_ratio(host / engine));

        match tuned {
            Ok(()) => {
                self.host_rate = host_rate;
                self.rate_warned = false;
            }
            Err(err) => {
                // the input side may have accepted a ratio the output side refused
                let _ = self.input_src.set_ratio(engine / self.host_rate as f64);
                if !self.rate_warned {
                    warn!(
                        "ignoring host rate {host_rate}, staying at {}: {err}",
                        self.host_rate
                    );
                    self.rate_warned = true;
                }
            }
        }
    }

    /// Convert whatever input is queued into one engine block, run it, and
    /// append the converted result to the output buffer.
    ///
    /// The engine always receives a full block. When the input buffer holds
    /// too little the tail of the block is silence.
    pub fn render_block<E: BlockEngine>(
        &mut self,
        engine: &mut EngineAdapter<E>,
        params: EngineParameters,
        host_rate: f32,
    ) -> BlockReport {
        if host_rate != self.host_rate {
            self.set_host_rate(host_rate);
        }

        let mut engine_in = [StereoFrame::silence(); ENGINE_BLOCK_SIZE];
        let (input_consumed, engine_frames) = self
            .input_src
            .process_into(self.input.readable(), &mut engine_in);
        self.input.consume(input_consumed);

        let mut block = [ShortFrame::default(); ENGINE_BLOCK_SIZE];
        for (dst, src) in block.iter_mut().zip(&engine_in[..engine_frames]) {
            *dst = src.to_short();
        }

        let rendered = engine.process(&block, params);

        let mut engine_out = [StereoFrame::silence(); ENGINE_BLOCK_SIZE];
        for (dst, src) in engine_out.iter_mut().zip(&rendered) {
            *dst = src.to_frame();
        }

        let (engine_consumed, output_produced) = self
            .output_src
            .process_into(&engine_out, self.output.writable());
        self.output.commit(output_produced);

        BlockReport {
            input_consumed,
            engine_frames,
            output_produced,
            engine_frames_dropped: ENGINE_BLOCK_SIZE - engine_consumed,
        }
    }

    /// Oldest queued output frame, if any.
    pub fn take_output(&mut self) -> Option<StereoFrame> {
        self.output.pop().ok()
    }

    pub fn reset(&mut self) {
        self.input.clear();
        self.output.clear();
        self.input_src.reset();
        self.output_src.reset();
    }
}
