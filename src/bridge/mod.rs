//! Decouples the host's per-sample cadence from the engine's block cadence.
//!
//! [`StreamingBridge`] moves audio between the two rates; [`StepScheduler`]
//! decides, once per host sample, whether to pull input, run a block, and
//! emit output.

/// Host-facing step loop, trigger latching and counters.
pub mod scheduler;
/// Ring buffers and rate converters around one engine block.
pub mod streaming;

pub use scheduler::{StepScheduler, StepStats, TriggerLatch};
pub use streaming::{BlockReport, BridgeState, StreamingBridge};
