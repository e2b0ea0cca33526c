//! Contract violations surfaced by the bridge primitives.
//!
//! None of these reach the host: the step scheduler checks occupancy and
//! ratios before it calls into the primitives, so these only show up when
//! the primitives are driven directly.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BridgeError {
    /// Push attempted on a full ring buffer.
    CapacityExceeded,
    /// Pop attempted on an empty ring buffer.
    Underrun,
    /// Conversion ratio was zero, negative or not finite.
    RatioOutOfRange(f64),
    /// A configuration field failed validation.
    InvalidConfig(&'static str),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::CapacityExceeded => write!(f, "ring buffer is full"),
            BridgeError::Underrun => write!(f, "ring buffer is empty"),
            BridgeError::RatioOutOfRange(ratio) => {
                write!(f, "conversion ratio {ratio} must be positive and finite")
            }
            BridgeError::InvalidConfig(reason) => write!(f, "invalid bridge config: {reason}"),
        }
    }
}

impl std::error::Error for BridgeError {}
