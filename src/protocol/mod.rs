//! FANUC state-socket protocol implementation
//!
//! Frame format: [LEN (4 bytes)] [PAYLOAD]
//!
//! All multi-byte fields are big-endian on the wire. The controller
//! multiplexes two frame kinds on the state stream, distinguished by the
//! declared length:
//!
//! | Declared length | Payload size | Meaning |
//! |-----------------|--------------|---------|
//! | 56              | 56 bytes     | status record with joint positions |
//! | anything else   | 40 bytes     | error record (no usable positions) |
//!
//! Inside a status payload, the six joint positions sit at byte offset 20
//! as consecutive big-endian IEEE-754 f32 values (4-byte stride).
//!
//! ## Error-frame resynchronization
//!
//! When the declared length does not match a status frame, the fixed
//! 40-byte error payload is read and discarded so the next poll starts at
//! a frame boundary again. Without the drain, stale error bytes would be
//! misinterpreted as the next length prefix. The cycle then reports a
//! fallback reading (held at zero) instead of failing, keeping the control
//! loop alive across a single malformed frame. Reporting zero for that
//! cycle is a known trade-off of the controller protocol, not a bug to fix
//! here.

use crate::error::Result;
use crate::transport::Transport;

/// Declared length of a status frame
pub const STATUS_FRAME_LENGTH: u32 = 56;
/// Bytes read for one status payload
pub const STATE_PAYLOAD_LENGTH: usize = 56;
/// Fixed size of an error-frame payload
pub const ERROR_PAYLOAD_LENGTH: usize = 40;
/// Joints reported by the controller
pub const JOINT_COUNT: usize = 6;
/// Byte offset of the first joint value inside the status payload
pub const JOINT_DATA_OFFSET: usize = 20;

/// Outcome of one poll of the state socket
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateReading {
    /// A well-formed status frame carrying joint positions
    Status([f32; JOINT_COUNT]),
    /// A malformed frame; the stream was resynchronized and the position
    /// for this cycle is held at zero
    Fallback,
}

impl StateReading {
    /// Joint positions for this cycle (zeros for a fallback reading)
    pub fn positions(&self) -> [f32; JOINT_COUNT] {
        match self {
            StateReading::Status(joints) => *joints,
            StateReading::Fallback => [0.0; JOINT_COUNT],
        }
    }

    /// True if this cycle yielded no genuine reading
    pub fn is_fallback(&self) -> bool {
        matches!(self, StateReading::Fallback)
    }
}

/// Read and decode one frame from the state socket
///
/// Consumes exactly one length prefix plus one payload (status or error),
/// so consecutive polls never desynchronize. Transport failures, including
/// a stream that ends mid-frame, propagate as hard errors.
pub fn read_state<T: Transport + ?Sized>(transport: &mut T) -> Result<StateReading> {
    let mut length_buf = [0u8; 4];
    transport.read_exact(&mut length_buf)?;
    let declared_length = u32::from_be_bytes(length_buf);

    if declared_length != STATUS_FRAME_LENGTH {
        log::warn!(
            "Unexpected frame length {} (want {}), draining error frame",
            declared_length,
            STATUS_FRAME_LENGTH
        );
        let mut drain = [0u8; ERROR_PAYLOAD_LENGTH];
        transport.read_exact(&mut drain)?;
        return Ok(StateReading::Fallback);
    }

    let mut payload = [0u8; STATE_PAYLOAD_LENGTH];
    transport.read_exact(&mut payload)?;

    let mut joints = [0.0f32; JOINT_COUNT];
    for (i, joint) in joints.iter_mut().enumerate() {
        let start = JOINT_DATA_OFFSET + 4 * i;
        let mut window = [0u8; 4];
        window.copy_from_slice(&payload[start..start + 4]);
        *joint = f32::from_be_bytes(window);
        log::trace!("Joint {}: {}", i + 1, joint);
    }

    Ok(StateReading::Status(joints))
}

/// Encode a status frame carrying the given joint positions
///
/// Bytes outside the joint window are zero-filled; the controller pads
/// them with fields this crate does not consume.
pub fn encode_status_frame(joints: &[f32; JOINT_COUNT]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(4 + STATE_PAYLOAD_LENGTH);
    frame.extend_from_slice(&STATUS_FRAME_LENGTH.to_be_bytes());

    let mut payload = [0u8; STATE_PAYLOAD_LENGTH];
    for (i, joint) in joints.iter().enumerate() {
        let start = JOINT_DATA_OFFSET + 4 * i;
        payload[start..start + 4].copy_from_slice(&joint.to_be_bytes());
    }
    frame.extend_from_slice(&payload);
    frame
}

/// Encode an error frame (declared length deliberately not a status length)
pub fn encode_error_frame() -> Vec<u8> {
    let mut frame = Vec::with_capacity(4 + ERROR_PAYLOAD_LENGTH);
    frame.extend_from_slice(&(ERROR_PAYLOAD_LENGTH as u32).to_be_bytes());
    frame.extend_from_slice(&[0u8; ERROR_PAYLOAD_LENGTH]);
    frame
}
