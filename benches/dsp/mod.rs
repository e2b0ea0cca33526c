//! Benchmarks for low-level bridge primitives.

mod resample;
mod ring;

pub use resample::bench_resample;
pub use ring::bench_ring;
