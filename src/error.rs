//! Error types for FanucIO

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// FanucIO error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Controller address did not parse as textual IPv4
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// TCP connect handshake failed
    #[error("Connection to {addr} failed: {source}")]
    ConnectionFailed {
        /// Endpoint that refused or timed out
        addr: String,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// Stream ended before the requested byte count arrived
    #[error("Short read: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// Bytes requested
        expected: usize,
        /// Bytes actually received before EOF
        actual: usize,
    },

    /// Configured joint count does not match the controller's
    #[error("Got {actual} joints, expected {expected}")]
    JointCountMismatch {
        /// Joints the controller reports
        expected: usize,
        /// Joints the configuration declared
        actual: usize,
    },

    /// Joint index outside the configured range
    #[error("Joint index {0} out of range")]
    InvalidJointIndex(usize),

    /// Lifecycle operation called in the wrong state
    #[error("Cannot {operation} in lifecycle state {state}")]
    InvalidLifecycle {
        /// Operation that was attempted
        operation: &'static str,
        /// State the interface was in
        state: &'static str,
    },

    /// Configuration file parse error
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file encode error
    #[error("Config encode error: {0}")]
    ConfigEncode(#[from] toml::ser::Error),
}
