//! FanucIO - Hardware abstraction library for FANUC robot arms
//!
//! Bridges a cyclic motion-control loop to a FANUC robot controller over
//! the controller's TCP state socket. The controller streams length-prefixed
//! binary status frames; this crate frames and decodes them into six joint
//! position values and exposes them through a small lifecycle-driven
//! hardware interface.
//!
//! ## Layers
//!
//! - [`transport`]: blocking byte-stream I/O ([`transport::TcpTransport`]
//!   for hardware, [`transport::MockTransport`] for hardware-free testing)
//! - [`protocol`]: the state-socket frame codec (framing, length
//!   validation, big-endian joint decoding, error-frame resynchronization)
//! - [`interface`]: joint state/command buffers behind an explicit
//!   lifecycle state machine, driven by the host control loop
//! - [`config`]: TOML configuration for the controller endpoint

pub mod config;
pub mod error;
pub mod interface;
pub mod protocol;
pub mod transport;

// Re-export commonly used types
pub use config::{AppConfig, RobotConfig};
pub use error::{Error, Result};
pub use interface::{FanucInterface, LifecycleState};
pub use protocol::StateReading;
