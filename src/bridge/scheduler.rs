use log::debug;

use super::streaming::{BridgeState, StreamingBridge};
use crate::{
    config::BridgeConfig,
    engine::{BlockEngine, EngineAdapter, EngineSettings},
    error::BridgeError,
    io::{ControlMessage, ControlReceiver, Controls, HostInputs, HostOutputs},
    GATE_THRESHOLD,
};

/// Remembers that a trigger happened since the last engine block.
///
/// Several triggers between two blocks collapse into one.
#[derive(Debug, Default, Clone, Copy)]
pub struct TriggerLatch {
    pending: bool,
    gate_high: bool,
}

impl TriggerLatch {
    /// Feed the trigger gate voltage; latches on a rising edge.
    #[inline]
    pub fn observe(&mut self, voltage: f32) {
        let high = voltage >= GATE_THRESHOLD;
        if high && !self.gate_high {
            self.pending = true;
        }
        self.gate_high = high;
    }

    #[inline]
    pub fn set(&mut self) {
        self.pending = true;
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Read and clear.
    #[inline]
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

/// Running counters, cheap enough to update every step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepStats {
    pub steps: u64,
    pub blocks_rendered: u64,
    /// Blocks that ran with fewer converted input frames than a full block.
    pub short_blocks: u64,
    pub frames_emitted: u64,
    pub silent_steps: u64,
    pub input_dropped: u64,
}

/// Per-sample entry point for the host.
///
/// Each [`step`](Self::step) queues one input frame, renders one engine
/// block if the output buffer ran dry, and hands back one output frame.
/// Nothing here allocates or blocks once constructed.
pub struct StepScheduler<E: BlockEngine> {
    bridge: StreamingBridge,
    adapter: EngineAdapter<E>,
    controls: Controls,
    latch: TriggerLatch,
    stats: StepStats,
}

impl<E: BlockEngine> StepScheduler<E> {
    pub fn new(engine: E, config: BridgeConfig) -> Result<Self, BridgeError> {
        config.validate()?;
        debug!(
            "bridge: {} Hz host, {} frame rings, {:?} mode",
            config.host_rate, config.ring_capacity, config.playback_mode
        );

        let mut adapter = EngineAdapter::new(engine);
        *adapter.settings_mut() = EngineSettings {
            low_fidelity: config.low_fidelity,
            playback_mode: config.playback_mode,
            ..EngineSettings::default()
        };

        Ok(Self {
            bridge: StreamingBridge::new(config.ring_capacity, config.host_rate),
            adapter,
            controls: config.controls.clamped(),
            latch: TriggerLatch::default(),
            stats: StepStats::default(),
        })
    }

    /// Advance by one host sample.
    pub fn step(&mut self, host_rate: f32, inputs: &HostInputs) -> HostOutputs {
        self.stats.steps += 1;

        let frame = inputs.audio_frame(self.controls.input_gain);
        if !self.bridge.accept_input(frame) {
            self.stats.input_dropped += 1;
        }

        self.latch.observe(inputs.trigger);

        if self.bridge.state() == BridgeState::Priming {
            let params = self.controls.parameters(inputs, self.latch.take());
            let report = self.bridge.render_block(&mut self.adapter, params, host_rate);
            self.stats.blocks_rendered += 1;
            if report.is_short() {
                self.stats.short_blocks += 1;
            }
        }

        match self.bridge.take_output() {
            Some(frame) => {
                self.stats.frames_emitted += 1;
                HostOutputs::from_frame(frame)
            }
            None => {
                self.stats.silent_steps += 1;
                HostOutputs::SILENCE
            }
        }
    }

    /// Run [`step`](Self::step) over a buffer of host samples.
    pub fn process(&mut self, host_rate: f32, inputs: &[HostInputs], outputs: &mut [HostOutputs]) {
        for (input, output) in inputs.iter().zip(outputs.iter_mut()) {
            *output = self.step(host_rate, input);
        }
    }

    pub fn apply(&mut self, msg: ControlMessage) {
        match msg {
            ControlMessage::Trigger => self.latch.set(),
            ControlMessage::SetPlaybackMode(mode) => {
                self.adapter.settings_mut().playback_mode = mode
            }
            ControlMessage::SetLowFidelity(enabled) => {
                self.adapter.settings_mut().low_fidelity = enabled
            }
            knob => {
                self.controls.apply(knob);
            }
        }
    }

    /// Apply every queued control message without waiting for more.
    pub fn drain_controls<R: ControlReceiver>(&mut self, rx: &mut R) {
        while let Some(msg) = rx.pop() {
            self.apply(msg);
        }
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut Controls {
        &mut self.controls
    }

    pub fn engine(&self) -> &E {
        self.adapter.engine()
    }

    pub fn settings(&self) -> &EngineSettings {
        self.adapter.settings()
    }

    pub fn state(&self) -> BridgeState {
        self.bridge.state()
    }

    pub fn stats(&self) -> StepStats {
        self.stats
    }

    pub fn input_len(&self) -> usize {
        self.bridge.input_len()
    }

    pub fn output_len(&self) -> usize {
        self.bridge.output_len()
    }

    pub fn trigger_pending(&self) -> bool {
        self.latch.is_pending()
    }

    /// Drop queued audio and any pending trigger. Engine state and
    /// counters are kept.
    pub fn reset(&mut self) {
        self.bridge.reset();
        self.latch = TriggerLatch::default();
    }
}
