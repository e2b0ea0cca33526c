//! Benchmarks for variable-ratio conversion.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_clouds::{
    dsp::{RateConverter, StereoFrame},
    ENGINE_SAMPLE_RATE,
};

use crate::{BLOCK_SIZES, HOST_RATES};

pub fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/resample");

    for &size in BLOCK_SIZES {
        let input: Vec<StereoFrame> = (0..size)
            .map(|i| {
                let v = (i as f32 * 0.05).sin();
                StereoFrame::stereo(v, -v)
            })
            .collect();

        for &host_rate in HOST_RATES {
            let ratio = (ENGINE_SAMPLE_RATE / host_rate) as f64;
            let mut src = RateConverter::<2>::new();
            // set_ratio only fails for non-positive ratios
            let _ = src.set_ratio(ratio);
            let mut output = vec![StereoFrame::silence(); size * 2];

            group.bench_with_input(
                BenchmarkId::new(format!("to_engine_from_{}hz", host_rate as u32), size),
                &size,
                |b, _| b.iter(|| src.process_into(black_box(&input), black_box(&mut output))),
            );
        }
    }

    group.finish();
}
