//! Hardware interface: lifecycle state machine and joint buffers
//!
//! The host control loop drives one [`FanucInterface`] instance through a
//! small lifecycle:
//!
//! ```text
//! Unconfigured --configure--> Configured --activate--> Active
//!                                  ^                    |  ^
//!                                  |             deactivate activate
//!                                  |                    v  |
//!                                  +---- (read ok) -- Inactive
//! ```
//!
//! Transitions are guarded explicitly instead of trusting the host's call
//! ordering. Joint buffers are only mutable through the operations below;
//! between cycles callers see immutable snapshots.

use crate::config::RobotConfig;
use crate::error::{Error, Result};
use crate::protocol::{self, StateReading, JOINT_COUNT};
use crate::transport::{TcpTransport, Transport};

/// Interface name for per-joint position values, matching the host
/// runtime's naming convention
pub const HW_IF_POSITION: &str = "position";

/// Lifecycle states for the hardware interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Transport open, buffers at the NaN sentinel, no poll taken yet
    Unconfigured,
    /// First poll attempted, buffers seeded
    Configured,
    /// Cyclic control in progress
    Active,
    /// Cyclic control paused
    Inactive,
}

impl LifecycleState {
    fn name(&self) -> &'static str {
        match self {
            LifecycleState::Unconfigured => "unconfigured",
            LifecycleState::Configured => "configured",
            LifecycleState::Active => "active",
            LifecycleState::Inactive => "inactive",
        }
    }
}

/// Hardware interface to one FANUC arm
///
/// Owns the state-socket transport and the joint state/command buffers.
/// Buffer entries hold `f64::NAN` ("unknown") until the first successful
/// status frame is decoded.
pub struct FanucInterface {
    transport: Box<dyn Transport>,
    state: LifecycleState,
    hw_states: Vec<f64>,
    hw_commands: Vec<f64>,
}

impl FanucInterface {
    /// Create an interface over an already-open transport
    ///
    /// Fails with [`Error::JointCountMismatch`] when `joint_count` does not
    /// match the six joints the controller reports.
    pub fn new<T: Transport + 'static>(transport: T, joint_count: usize) -> Result<Self> {
        if joint_count != JOINT_COUNT {
            log::error!(
                "Got {} joints. Expected {}.",
                joint_count,
                JOINT_COUNT
            );
            return Err(Error::JointCountMismatch {
                expected: JOINT_COUNT,
                actual: joint_count,
            });
        }

        Ok(FanucInterface {
            transport: Box::new(transport),
            state: LifecycleState::Unconfigured,
            hw_states: vec![f64::NAN; joint_count],
            hw_commands: vec![f64::NAN; joint_count],
        })
    }

    /// Connect to the controller described by `config`
    ///
    /// The joint-count guard runs before any socket is opened.
    pub fn connect(config: &RobotConfig) -> Result<Self> {
        if config.joint_count != JOINT_COUNT {
            return Err(Error::JointCountMismatch {
                expected: JOINT_COUNT,
                actual: config.joint_count,
            });
        }
        let transport = TcpTransport::connect(&config.host, config.state_port)?;
        Self::new(transport, config.joint_count)
    }

    /// Seed the buffers from one initial poll
    ///
    /// A genuine reading seeds the state buffer and zeroes the command
    /// buffer. A fallback reading leaves both buffers untouched; the
    /// sentinel stays until the next poll. Configuration never fails on a
    /// malformed first frame, only on a genuine transport error.
    pub fn configure(&mut self) -> Result<()> {
        self.guard(LifecycleState::Unconfigured == self.state, "configure")?;

        match protocol::read_state(self.transport.as_mut())? {
            StateReading::Status(joints) => {
                for (i, joint) in joints.iter().enumerate() {
                    self.hw_states[i] = f64::from(*joint);
                    self.hw_commands[i] = 0.0;
                }
                log::info!("Successfully configured");
            }
            StateReading::Fallback => {
                log::warn!("Configured without an initial state reading");
            }
        }

        self.state = LifecycleState::Configured;
        Ok(())
    }

    /// Start cyclic control, holding the current position
    ///
    /// Copies the state buffer into the command buffer so the first write
    /// cycle commands no motion.
    pub fn activate(&mut self) -> Result<()> {
        self.guard(
            matches!(
                self.state,
                LifecycleState::Configured | LifecycleState::Inactive
            ),
            "activate",
        )?;

        self.hw_commands.copy_from_slice(&self.hw_states);
        self.state = LifecycleState::Active;
        log::info!("Successfully activated");
        Ok(())
    }

    /// Pause cyclic control
    pub fn deactivate(&mut self) -> Result<()> {
        self.guard(LifecycleState::Active == self.state, "deactivate")?;

        self.state = LifecycleState::Inactive;
        log::info!("Successfully deactivated");
        Ok(())
    }

    /// One cyclic read: poll the state socket and refresh the state buffer
    ///
    /// A malformed frame resynchronizes the stream and holds the state
    /// buffer at zero for this cycle; a genuine transport failure
    /// propagates so the host can halt control.
    pub fn read(&mut self) -> Result<()> {
        self.guard(LifecycleState::Unconfigured != self.state, "read")?;

        let reading = protocol::read_state(self.transport.as_mut())?;
        for (slot, value) in self.hw_states.iter_mut().zip(reading.positions()) {
            *slot = f64::from(value);
        }
        Ok(())
    }

    /// One cyclic write
    ///
    /// Command transmission is not part of the controller's state-socket
    /// protocol and no motion protocol is defined yet, so this is a
    /// deliberate no-op.
    pub fn write(&mut self) -> Result<()> {
        self.guard(LifecycleState::Unconfigured != self.state, "write")?;

        log::trace!("Write cycle: command transmission not implemented");
        Ok(())
    }

    /// Current joint positions, one entry per joint (read-only)
    pub fn joint_positions(&self) -> &[f64] {
        &self.hw_states
    }

    /// Current joint commands, one entry per joint (read-only)
    pub fn joint_commands(&self) -> &[f64] {
        &self.hw_commands
    }

    /// Set one joint command
    pub fn set_joint_command(&mut self, index: usize, value: f64) -> Result<()> {
        let slot = self
            .hw_commands
            .get_mut(index)
            .ok_or(Error::InvalidJointIndex(index))?;
        *slot = value;
        Ok(())
    }

    /// Exported interface names, `joint_1` through `joint_6`
    pub fn joint_names(&self) -> Vec<String> {
        (1..=self.hw_states.len())
            .map(|i| format!("joint_{}", i))
            .collect()
    }

    /// Current lifecycle state
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    fn guard(&self, allowed: bool, operation: &'static str) -> Result<()> {
        if allowed {
            Ok(())
        } else {
            Err(Error::InvalidLifecycle {
                operation,
                state: self.state.name(),
            })
        }
    }
}
