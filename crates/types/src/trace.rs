//! Per-rank event accumulation.

use crate::{Event, Rank};
use thiserror::Error;

/// Errors raised when building event logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// An event referenced a rank outside the configured rank count.
    #[error("rank {rank} out of range for {nranks} ranks")]
    RankOutOfRange {
        /// The offending rank.
        rank: Rank,
        /// The configured rank count.
        nranks: u32,
    },

    /// A message transfer was given a zero byte size.
    #[error("zero-byte message between rank {rank} and rank {peer}")]
    ZeroMsgSize {
        /// The rank logging the event.
        rank: Rank,
        /// The peer rank.
        peer: Rank,
    },
}

/// Ordered event logs for every rank of one generation run.
///
/// Append-only: events land at the tail of their rank's log in emission
/// order, and that order is the one serialized. No sorting, deduplication,
/// or compaction happens at any point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceSet {
    /// Event logs indexed by rank.
    by_rank: Vec<Vec<Event>>,
}

impl TraceSet {
    /// Create empty logs for `nranks` ranks.
    pub fn new(nranks: u32) -> Self {
        Self {
            by_rank: vec![Vec::new(); nranks as usize],
        }
    }

    /// Number of ranks this trace set covers.
    pub fn nranks(&self) -> u32 {
        self.by_rank.len() as u32
    }

    /// Append an event to its rank's log.
    ///
    /// Both `rank` and `peer` must lie in `[0, nranks)`.
    pub fn append(&mut self, event: Event) -> Result<(), TraceError> {
        let nranks = self.nranks();
        for rank in [event.rank, event.peer] {
            if rank.0 >= nranks {
                return Err(TraceError::RankOutOfRange { rank, nranks });
            }
        }

        self.by_rank[event.rank.0 as usize].push(event);
        Ok(())
    }

    /// The event log for one rank, in emission order.
    pub fn events(&self, rank: Rank) -> &[Event] {
        &self.by_rank[rank.0 as usize]
    }

    /// Iterate over `(rank, log)` pairs in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, &[Event])> {
        self.by_rank
            .iter()
            .enumerate()
            .map(|(rank, events)| (Rank(rank as u32), events.as_slice()))
    }

    /// Total number of events across all ranks.
    pub fn total_events(&self) -> usize {
        self.by_rank.iter().map(|events| events.len()).sum()
    }
}
