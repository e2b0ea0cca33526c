//! Low-level primitives used by the bridge.
//!
//! These components are allocation-free after construction and realtime-safe,
//! so they can sit directly inside the per-sample host callback.

/// Float and fixed-point audio frames.
pub mod frame;
/// Variable-ratio Hermite resampler.
pub mod resample;
/// Fixed-capacity FIFO with contiguous batch access.
pub mod ring;

pub use frame::{Frame, ShortFrame, StereoFrame};
pub use resample::RateConverter;
pub use ring::RingBuffer;
