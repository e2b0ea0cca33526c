//! Benchmarks for ring buffer traffic.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_clouds::dsp::{RingBuffer, StereoFrame};

use crate::BLOCK_SIZES;

pub fn bench_ring(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/ring");

    for &size in BLOCK_SIZES {
        let mut ring = RingBuffer::<StereoFrame>::new(size);
        let frame = StereoFrame::stereo(0.25, -0.25);

        // Single-frame push then pop, like the host side of a step
        group.bench_with_input(BenchmarkId::new("push_pop", size), &size, |b, &size| {
            b.iter(|| {
                for _ in 0..size {
                    let _ = ring.push(black_box(frame));
                }
                let mut sum = 0.0f32;
                while let Ok(f) = ring.pop() {
                    sum += f.left();
                }
                sum
            })
        });

        // Batch commit then consume, like the converter side
        group.bench_with_input(BenchmarkId::new("commit_consume", size), &size, |b, _| {
            b.iter(|| {
                let slots = ring.writable();
                slots.fill(frame);
                let n = slots.len();
                ring.commit(n);
                let sum: f32 = ring.readable().iter().map(|f| f.right()).sum();
                ring.consume(n);
                black_box(sum)
            })
        });
    }

    group.finish();
}
