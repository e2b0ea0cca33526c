//! Benchmarks for the per-sample host step.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_clouds::{
    engine::Passthrough,
    io::{HostInputs, HostOutputs},
    BridgeConfig, StepScheduler,
};

use crate::{BLOCK_SIZES, HOST_RATES};

pub fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/step");

    for &size in BLOCK_SIZES {
        let inputs: Vec<HostInputs> = (0..size)
            .map(|i| {
                let v = 4.0 * (i as f32 * 0.03).sin();
                HostInputs::audio(v, v)
            })
            .collect();
        let mut outputs = vec![HostOutputs::default(); size];

        for &host_rate in HOST_RATES {
            let config = BridgeConfig::new().host_rate(host_rate);
            let Ok(mut sched) = StepScheduler::new(Passthrough::new(), config) else {
                continue;
            };

            group.bench_with_input(
                BenchmarkId::new(format!("passthrough_{}hz", host_rate as u32), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        sched.process(host_rate, black_box(&inputs), black_box(&mut outputs));
                    })
                },
            );
        }
    }

    group.finish();
}
