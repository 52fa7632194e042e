//! Communication event records.

use std::fmt;

/// Fixed placeholder written into the timestamp column of every record.
///
/// The replay tooling requires the column to be present but derives its own
/// timing; no temporal ordering can be inferred from this value.
pub const PLACEHOLDER_TIMESTAMP: u64 = 147001;

/// Rank identifier: a virtual process in the simulated computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(pub u32);

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Direction of a message event at the rank that logged it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The logging rank sent the message.
    Send,
    /// The logging rank received the message.
    Recv,
}

impl Direction {
    /// Code used in the `send_or_recv` column: `0` for send, `1` for receive.
    pub fn wire_code(&self) -> u8 {
        match self {
            Direction::Send => 0,
            Direction::Recv => 1,
        }
    }

    /// Parse a `send_or_recv` column code.
    pub fn from_wire_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Direction::Send),
            1 => Some(Direction::Recv),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Send => write!(f, "send"),
            Direction::Recv => write!(f, "recv"),
        }
    }
}

/// Logical category of a communication.
///
/// Boundary exchange is the only phase the generator emits today; the traces
/// carry the label so replay tooling can filter by phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Ghost-zone exchange between mesh neighbors.
    BoundaryComm,
}

impl Phase {
    /// The label written into the `phase` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::BoundaryComm => "BoundaryComm",
        }
    }

    /// Parse a `phase` column label.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "BoundaryComm" => Some(Phase::BoundaryComm),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One entry in a rank's communication log.
///
/// Every message transfer produces two events sharing `(timestep, phase,
/// msg_id, msg_sz)`: a `Send` at the sender's log and a `Recv` at the
/// receiver's, with `rank`/`peer` swapped. `msg_id` is the rank that
/// initiated the transfer, so it is NOT unique within a `(timestep, phase)`
/// window; consumers must key on `(rank, msg_id)` to distinguish transfers.
///
/// Events are immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    /// The rank whose log this event belongs to.
    pub rank: Rank,

    /// The rank on the other end of the transfer.
    pub peer: Rank,

    /// Timestep the transfer occurred in.
    pub timestep: u32,

    /// Communication phase label.
    pub phase: Phase,

    /// Identifier of the rank that initiated the transfer.
    pub msg_id: u32,

    /// Whether this rank sent or received.
    pub direction: Direction,

    /// Message size in bytes.
    pub msg_sz: u32,

    /// Placeholder timestamp; see [`PLACEHOLDER_TIMESTAMP`].
    pub timestamp: u64,
}

impl Event {
    /// Create an event carrying the placeholder timestamp.
    pub fn new(
        rank: Rank,
        peer: Rank,
        timestep: u32,
        phase: Phase,
        msg_id: u32,
        direction: Direction,
        msg_sz: u32,
    ) -> Result<Self, crate::TraceError> {
        Self::from_parts(
            rank,
            peer,
            timestep,
            phase,
            msg_id,
            direction,
            msg_sz,
            PLACEHOLDER_TIMESTAMP,
        )
    }

    /// Create an event with an explicit timestamp, as read back from a file.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        rank: Rank,
        peer: Rank,
        timestep: u32,
        phase: Phase,
        msg_id: u32,
        direction: Direction,
        msg_sz: u32,
        timestamp: u64,
    ) -> Result<Self, crate::TraceError> {
        if msg_sz == 0 {
            return Err(crate::TraceError::ZeroMsgSize { rank, peer });
        }

        Ok(Self {
            rank,
            peer,
            timestep,
            phase,
            msg_id,
            direction,
            msg_sz,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_wire_codes() {
        assert_eq!(Direction::Send.wire_code(), 0);
        assert_eq!(Direction::Recv.wire_code(), 1);

        assert_eq!(Direction::from_wire_code(0), Some(Direction::Send));
        assert_eq!(Direction::from_wire_code(1), Some(Direction::Recv));
        assert_eq!(Direction::from_wire_code(2), None);
    }

    #[test]
    fn test_phase_label_round_trip() {
        assert_eq!(Phase::BoundaryComm.as_str(), "BoundaryComm");
        assert_eq!(Phase::from_name("BoundaryComm"), Some(Phase::BoundaryComm));
        assert_eq!(Phase::from_name("FluxComm"), None);
    }

    #[test]
    fn test_event_carries_placeholder_timestamp() {
        let event = Event::new(
            Rank(0),
            Rank(1),
            0,
            Phase::BoundaryComm,
            0,
            Direction::Send,
            512,
        )
        .unwrap();
        assert_eq!(event.timestamp, PLACEHOLDER_TIMESTAMP);
    }

    #[test]
    fn test_event_rejects_zero_size() {
        let result = Event::new(
            Rank(0),
            Rank(1),
            0,
            Phase::BoundaryComm,
            0,
            Direction::Send,
            0,
        );
        assert!(result.is_err(), "zero-byte messages should be rejected");
    }
}
