//! Demo host - plays the bridge through the default output device

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use log::info;
use rtrb::{Producer, RingBuffer};

use saavy_clouds::{
    engine::Passthrough,
    io::{ControlMessage, HostInputs},
    BridgeConfig, StepScheduler, StepStats,
};

const CONTROL_QUEUE_SIZE: usize = 64;

/// Demo builder
pub struct Demo {
    seconds: u64,
    tone_hz: f32,
    trigger_every: Duration,
    config: BridgeConfig,
}

impl Demo {
    pub fn new() -> Self {
        Self {
            seconds: 10,
            tone_hz: 220.0,
            trigger_every: Duration::from_millis(500),
            config: BridgeConfig::default(),
        }
    }

    /// How long to play before printing stats and exiting
    pub fn seconds(mut self, seconds: u64) -> Self {
        self.seconds = seconds;
        self
    }

    /// Frequency of the input test tone
    pub fn tone(mut self, hz: f32) -> Self {
        self.tone_hz = hz;
        self
    }

    /// Period of the remote trigger messages
    pub fn trigger_every_ms(mut self, ms: u64) -> Self {
        self.trigger_every = Duration::from_millis(ms.max(1));
        self
    }

    /// Run the demo (blocks until the duration elapses)
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;

        println!("=== Clouds bridge ===");
        println!("Sample rate: {} Hz", sample_rate);
        println!("Channels: {}", channels);
        println!("Playing {} s... Press Ctrl+C to stop", self.seconds);
        println!();

        let scheduler = StepScheduler::new(
            Passthrough::new(),
            self.config.clone().host_rate(sample_rate),
        )
        .wrap_err("invalid bridge config")?;

        let (mut tx, rx) = RingBuffer::<ControlMessage>::new(CONTROL_QUEUE_SIZE);

        let state = Arc::new(Mutex::new(AudioState {
            scheduler,
            rx,
            phase: 0.0,
        }));

        let state_clone = state.clone();
        let tone_hz = self.tone_hz;

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let Ok(mut state) = state_clone.lock() else {
                    data.fill(0.0);
                    return;
                };
                let AudioState { scheduler, rx, phase } = &mut *state;
                scheduler.drain_controls(rx);

                let phase_inc = tone_hz / sample_rate;
                for frame in data.chunks_mut(channels) {
                    let v = 4.0 * (std::f32::consts::TAU * *phase).sin();
                    *phase = (*phase + phase_inc).fract();

                    let out = scheduler.step(sample_rate, &HostInputs::audio(v, v));
                    for (ch, sample) in frame.iter_mut().enumerate() {
                        let volts = if ch % 2 == 0 { out.out_l } else { out.out_r };
                        *sample = volts / saavy_clouds::VOLTAGE_SCALE;
                    }
                }
            },
            |err| eprintln!("Audio error: {}", err),
            None,
        )?;

        stream.play()?;

        let started = Instant::now();
        let mut next_trigger = started + self.trigger_every;
        let mut position = 0.0f32;
        while started.elapsed() < Duration::from_secs(self.seconds) {
            std::thread::sleep(Duration::from_millis(20));
            position = (position + 0.005).fract();
            send(&mut tx, ControlMessage::SetPosition(position));
            if Instant::now() >= next_trigger {
                send(&mut tx, ControlMessage::Trigger);
                next_trigger += self.trigger_every;
            }
        }

        drop(stream);
        let stats = state
            .lock()
            .map_err(|_| eyre!("audio thread panicked"))?
            .scheduler
            .stats();
        print_stats(&stats);
        Ok(())
    }
}

impl Default for Demo {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared audio state
struct AudioState {
    scheduler: StepScheduler<Passthrough>,
    rx: rtrb::Consumer<ControlMessage>,
    phase: f32,
}

fn send(tx: &mut Producer<ControlMessage>, msg: ControlMessage) {
    if tx.push(msg).is_err() {
        info!("control queue full, dropping {:?}", msg);
    }
}

fn print_stats(stats: &StepStats) {
    println!("Steps:          {}", stats.steps);
    println!("Blocks:         {}", stats.blocks_rendered);
    println!("Short blocks:   {}", stats.short_blocks);
    println!("Frames emitted: {}", stats.frames_emitted);
    println!("Silent steps:   {}", stats.silent_steps);
    println!("Input dropped:  {}", stats.input_dropped);
}
