//! Core types for synthetic communication traces.
//!
//! A trace records the boundary-communication messages a simulated
//! distributed computation would exchange: one ordered event log per rank,
//! where each message transfer appears as a matched send/receive event pair.
//! These types are shared by the generator (which produces events) and the
//! trace I/O layer (which serializes them for replay tooling).

mod event;
mod trace;

pub use event::{Direction, Event, Phase, Rank, PLACEHOLDER_TIMESTAMP};
pub use trace::{TraceError, TraceSet};
