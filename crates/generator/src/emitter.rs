//! Expansion of scheduled exchanges into event pairs.

use crate::ring::Exchange;
use commtrace_types::{Direction, Event, Phase, Rank, TraceError, TraceSet};

/// Append one directional transfer as its send/receive event pair.
///
/// The send lands in `from`'s log, then the receive in `to`'s; both carry
/// the same `(timestep, phase, msg_id, msg_sz)`.
fn emit_transfer(
    traces: &mut TraceSet,
    from: Rank,
    to: Rank,
    timestep: u32,
    msg_id: u32,
    msg_sz: u32,
) -> Result<(), TraceError> {
    let send = Event::new(
        from,
        to,
        timestep,
        Phase::BoundaryComm,
        msg_id,
        Direction::Send,
        msg_sz,
    )?;
    traces.append(send)?;

    let recv = Event::new(
        to,
        from,
        timestep,
        Phase::BoundaryComm,
        msg_id,
        Direction::Recv,
        msg_sz,
    )?;
    traces.append(recv)?;

    Ok(())
}

/// Append both sub-exchanges of a scheduled boundary exchange.
///
/// The forward transfer carries the initiator's rank as `msg_id`, the
/// reverse the partner's. A self-exchange (`initiator == partner`) emits all
/// four events into the one log; it is not merged or skipped.
pub fn emit_exchange(traces: &mut TraceSet, exchange: &Exchange) -> Result<(), TraceError> {
    emit_transfer(
        traces,
        exchange.initiator,
        exchange.partner,
        exchange.timestep,
        exchange.initiator.0,
        exchange.forward_sz,
    )?;
    emit_transfer(
        traces,
        exchange.partner,
        exchange.initiator,
        exchange.timestep,
        exchange.partner.0,
        exchange.reverse_sz,
    )?;
    Ok(())
}
