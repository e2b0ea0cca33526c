//! Real-world scenario benchmarks.
//!
//! These push whole host buffers through the scheduler the way an audio
//! callback would.

mod step;

pub use step::bench_step;
