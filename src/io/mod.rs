// Purpose - host-facing signals and control transport

pub mod controls;
pub mod host;

pub use controls::{ControlMessage, ControlReceiver, Controls};
pub use host::{HostInputs, HostOutputs};
