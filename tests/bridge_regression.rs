use saavy_clouds::{
    bridge::StreamingBridge,
    dsp::StereoFrame,
    engine::{Block, BlockEngine, EngineParameters, Passthrough, Workspace},
    io::{HostInputs, HostOutputs},
    BridgeConfig, BridgeState, StepScheduler, RING_CAPACITY,
};

/// Copies input to output and records the trigger flag of every block.
#[derive(Default)]
struct TriggerProbe {
    triggers: Vec<bool>,
}

impl BlockEngine for TriggerProbe {
    fn init(&mut self, _workspace: &mut Workspace) {}

    fn process(
        &mut self,
        _workspace: &mut Workspace,
        input: &Block,
        params: EngineParameters,
        output: &mut Block,
    ) {
        self.triggers.push(params.trigger);
        output.copy_from_slice(input);
    }
}

fn sine_input(step: usize, freq: f32, rate: f32, volts: f32) -> HostInputs {
    let v = volts * (std::f32::consts::TAU * freq * step as f32 / rate).sin();
    HostInputs::audio(v, -v)
}

fn unity_gain() -> BridgeConfig {
    let mut config = BridgeConfig::default();
    config.controls.input_gain = 1.0;
    config
}

#[test]
fn steady_state_at_48k_emits_every_step() {
    let mut sched = StepScheduler::new(Passthrough::new(), unity_gain()).unwrap();

    for i in 0..48_000 {
        sched.step(48_000.0, &sine_input(i, 220.0, 48_000.0, 4.0));
        assert!(sched.input_len() < RING_CAPACITY);
        assert!(sched.output_len() < RING_CAPACITY);
    }

    let stats = sched.stats();
    assert_eq!(stats.silent_steps, 0);
    assert_eq!(stats.frames_emitted, 48_000);
    assert_eq!(stats.input_dropped, 0);
    // only the very first block lacks input
    assert_eq!(stats.short_blocks, 1);
    // 32 engine frames per 48 host frames
    assert!((999..=1001).contains(&stats.blocks_rendered));
}

#[test]
fn dc_input_passes_through_at_full_level() {
    let mut sched = StepScheduler::new(Passthrough::new(), unity_gain()).unwrap();
    let mut last = HostOutputs::default();
    for _ in 0..2000 {
        last = sched.step(48_000.0, &HostInputs::audio(2.5, -2.5));
    }
    assert!((last.out_l - 2.5).abs() < 1e-3, "left was {}", last.out_l);
    assert!((last.out_r + 2.5).abs() < 1e-3, "right was {}", last.out_r);
}

#[test]
fn sine_stays_continuous_at_44k1() {
    let rate = 44_100.0;
    let mut sched = StepScheduler::new(Passthrough::new(), unity_gain()).unwrap();

    let outputs: Vec<HostOutputs> = (0..20_000)
        .map(|i| sched.step(rate, &sine_input(i, 440.0, rate, 4.0)))
        .collect();

    // 440 Hz at 4 V moves at most ~0.25 V per sample
    let max_jump = outputs[1000..]
        .windows(2)
        .map(|w| (w[1].out_l - w[0].out_l).abs())
        .fold(0.0f32, f32::max);
    assert!(max_jump < 0.4, "discontinuity of {max_jump} V");

    let peak = outputs[1000..]
        .iter()
        .fold(0.0f32, |acc, o| acc.max(o.out_l.abs()));
    assert!(peak > 3.8 && peak < 4.2, "peak was {peak} V");
    assert_eq!(sched.stats().short_blocks, 1);
}

#[test]
fn trigger_is_latched_until_next_block() {
    let mut sched = StepScheduler::new(TriggerProbe::default(), BridgeConfig::default()).unwrap();
    let idle = HostInputs::default();
    let gate = HostInputs {
        trigger: 5.0,
        ..Default::default()
    };

    // block 0 renders on the first step
    sched.step(48_000.0, &idle);

    // a short pulse well before the next block
    sched.step(48_000.0, &gate);
    sched.step(48_000.0, &idle);
    assert!(sched.trigger_pending());

    while sched.engine().triggers.len() < 3 {
        sched.step(48_000.0, &idle);
    }
    assert_eq!(sched.engine().triggers, vec![false, true, false]);
}

#[test]
fn held_trigger_gate_fires_once() {
    let mut sched = StepScheduler::new(TriggerProbe::default(), BridgeConfig::default()).unwrap();
    let gate = HostInputs {
        trigger: 5.0,
        ..Default::default()
    };
    for _ in 0..500 {
        sched.step(48_000.0, &gate);
    }
    let triggers = &sched.engine().triggers;
    assert!(triggers.len() > 5);
    assert!(triggers[0]);
    assert!(triggers[1..].iter().all(|t| !t));
}

#[test]
fn engine_always_gets_full_blocks() {
    struct LenProbe(Vec<usize>);

    impl BlockEngine for LenProbe {
        fn init(&mut self, _workspace: &mut Workspace) {}

        fn process(
            &mut self,
            _workspace: &mut Workspace,
            input: &Block,
            _params: EngineParameters,
            output: &mut Block,
        ) {
            self.0.push(input.len());
            output.copy_from_slice(input);
        }
    }

    let mut sched = StepScheduler::new(LenProbe(Vec::new()), BridgeConfig::default()).unwrap();
    // rate sweeps down and back up, starving the input side at times
    for i in 0..20_000u32 {
        let rate = if (i / 2000) % 2 == 0 { 22_050.0 } else { 96_000.0 };
        sched.step(rate, &HostInputs::audio(1.0, 1.0));
    }

    let lens = &sched.engine().0;
    assert!(!lens.is_empty());
    assert!(lens.iter().all(|&n| n == 32));
    assert_eq!(sched.stats().silent_steps, 0);
}

#[test]
fn stalled_engine_drops_input_silently() {
    let mut bridge = StreamingBridge::new(RING_CAPACITY, 48_000.0);
    for i in 0..400 {
        let accepted = bridge.accept_input(StereoFrame::stereo(i as f32, 0.0));
        assert_eq!(accepted, i < RING_CAPACITY);
    }
    assert_eq!(bridge.input_len(), RING_CAPACITY);
    assert_eq!(bridge.state(), BridgeState::Priming);
}

#[test]
fn very_fast_host_stays_within_capacity() {
    let mut sched = StepScheduler::new(Passthrough::new(), BridgeConfig::default()).unwrap();
    for _ in 0..10_000 {
        sched.step(2_000_000.0, &HostInputs::audio(1.0, 1.0));
        assert!(sched.input_len() <= RING_CAPACITY);
        assert!(sched.output_len() <= RING_CAPACITY);
    }
    // the output side refills a whole ring per block, so the input side
    // never sees more than one ring's worth of steps between blocks
    let stats = sched.stats();
    assert_eq!(stats.input_dropped, 0);
    assert_eq!(stats.silent_steps, 0);
}

#[test]
fn invalid_host_rate_degrades_instead_of_failing() {
    let mut sched = StepScheduler::new(Passthrough::new(), BridgeConfig::default()).unwrap();
    for rate in [48_000.0, 0.0, f32::NAN, -44_100.0, f32::INFINITY, 48_000.0] {
        for _ in 0..100 {
            let out = sched.step(rate, &HostInputs::audio(1.0, 1.0));
            assert!(out.out_l.is_finite() && out.out_r.is_finite());
        }
    }
    assert_eq!(sched.stats().steps, 600);
}

#[test]
fn freeze_gate_holds_wet_signal() {
    let mut config = unity_gain();
    config.controls.blend = 1.0;
    let mut sched = StepScheduler::new(Passthrough::new(), config).unwrap();

    let mut last = HostOutputs::default();
    for _ in 0..2000 {
        last = sched.step(32_000.0, &HostInputs::audio(2.0, 2.0));
    }
    assert!((last.out_l - 2.0).abs() < 1e-3);

    let frozen_silence = HostInputs {
        freeze: 5.0,
        ..Default::default()
    };
    for _ in 0..2000 {
        last = sched.step(32_000.0, &frozen_silence);
    }
    // held block keeps playing the pre-freeze level
    assert!((last.out_l - 2.0).abs() < 1e-3, "frozen output was {}", last.out_l);
}
