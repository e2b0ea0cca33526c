//! The fixed-rate side of the bridge.
//!
//! The granular engine itself lives outside this crate. It is reached through
//! [`BlockEngine`], which consumes and produces exactly one
//! [`ENGINE_BLOCK_SIZE`](crate::ENGINE_BLOCK_SIZE)-frame block of 16-bit
//! stereo per call at [`ENGINE_SAMPLE_RATE`](crate::ENGINE_SAMPLE_RATE).

pub mod adapter;
pub mod params;
pub mod passthrough;

pub use adapter::{Block, BlockEngine, EngineAdapter, Workspace};
pub use params::{EngineParameters, EngineSettings, PlaybackMode};
pub use passthrough::Passthrough;
