//! Ring-offset communication schedule.

use commtrace_types::Rank;
use rand::Rng;

/// Smallest message size in bytes; draws are whole multiples of this.
pub const MSG_SIZE_UNIT: u32 = 512;

/// Largest draw, in units of [`MSG_SIZE_UNIT`].
pub const MAX_MSG_SIZE_UNITS: u32 = 4;

/// One bidirectional boundary exchange scheduled for a timestep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exchange {
    /// Timestep the exchange belongs to.
    pub timestep: u32,

    /// The rank that initiated the exchange.
    pub initiator: Rank,

    /// The rank the initiator is paired with.
    pub partner: Rank,

    /// Bytes sent initiator -> partner.
    pub forward_sz: u32,

    /// Bytes sent partner -> initiator.
    pub reverse_sz: u32,
}

/// The ring-offset pairing: at timestep `t`, each rank exchanges with the
/// rank `t + 1` positions further around the ring.
#[derive(Debug, Clone, Copy)]
pub struct RingSchedule {
    nranks: u32,
}

impl RingSchedule {
    /// Create a schedule over `nranks` ranks.
    pub fn new(nranks: u32) -> Self {
        Self { nranks }
    }

    /// The rank `rank` is paired with at `timestep`.
    ///
    /// With a single rank the partner is the rank itself; self-exchanges are
    /// scheduled like any other.
    pub fn partner_of(&self, rank: Rank, timestep: u32) -> Rank {
        let offset = rank.0 as u64 + timestep as u64 + 1;
        Rank((offset % self.nranks as u64) as u32)
    }

    /// Schedule every rank's exchange for one timestep, drawing the two
    /// message sizes per exchange from `rng`.
    ///
    /// Every rank initiates once, so an unordered pair generally appears
    /// twice per timestep at different offsets. That density is intentional
    /// and nothing is deduplicated.
    pub fn exchanges(&self, timestep: u32, rng: &mut impl Rng) -> Vec<Exchange> {
        (0..self.nranks)
            .map(|rank| {
                let initiator = Rank(rank);
                Exchange {
                    timestep,
                    initiator,
                    partner: self.partner_of(initiator, timestep),
                    forward_sz: draw_msg_size(rng),
                    reverse_sz: draw_msg_size(rng),
                }
            })
            .collect()
    }
}

/// Draw one message size: a whole number of size units in
/// `[1, MAX_MSG_SIZE_UNITS]`, uniformly.
pub fn draw_msg_size(rng: &mut impl Rng) -> u32 {
    MSG_SIZE_UNIT * rng.gen_range(1..=MAX_MSG_SIZE_UNITS)
}
