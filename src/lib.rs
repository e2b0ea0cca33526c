pub mod bridge; // Host step loop and rate bridging
pub mod config;
pub mod dsp;
pub mod engine; // Fixed-rate block engine interface
pub mod error;
pub mod io;

pub use bridge::{BridgeState, StepScheduler, StepStats};
pub use config::BridgeConfig;
pub use error::BridgeError;

/// Rate the block engine runs at.
pub const ENGINE_SAMPLE_RATE: f32 = 32_000.0;
/// Frames per engine invocation.
pub const ENGINE_BLOCK_SIZE: usize = 32;
/// Default frames held by each ring buffer.
pub const RING_CAPACITY: usize = 256;
/// Host signals are ±5 V at full scale.
pub const VOLTAGE_SCALE: f32 = 5.0;
/// Gate inputs read high at or above this voltage.
pub const GATE_THRESHOLD: f32 = 1.0;
