//! # Darwinian
//!
//! Rank-driven genome evolution for the Atelier competition.
//!
//! ## Evolution Step
//!
//! ```text
//! tier(agent) = winner | loser | others      (from the ranked designs)
//! trait'      = clamp(trait + Δ[cycle][tier][trait], 0, 100)
//! trust'      = min(trust + Δtrust[tier], 100)
//! ```
//!
//! Every processed cycle appends one history record and one conversation
//! memory per agent and one roster snapshot to the [`SnapshotLog`].

pub mod evolution;
pub mod rules;
pub mod snapshot;

pub use evolution::{EvolutionOutcome, GenomeEvolutionEngine};
pub use rules::{rule_for_cycle, EvolutionRule, Tier};
pub use snapshot::{GenomeSnapshot, SnapshotEntry, SnapshotLog};

use serde::{Deserialize, Serialize};

/// Darwinian configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DarwinianConfig {
    /// Trust gained by the cycle winner
    pub trust_winner_bonus: i32,
    /// Trust lost by the last-placed agent
    pub trust_loser_penalty: i32,
    /// Trust gained by everyone else
    pub trust_others_bonus: i32,
}

impl Default for DarwinianConfig {
    fn default() -> Self {
        Self {
            trust_winner_bonus: 15,
            trust_loser_penalty: 5,
            trust_others_bonus: 5,
        }
    }
}

impl DarwinianConfig {
    /// Signed trust adjustment for a tier
    pub fn trust_delta(&self, tier: Tier) -> i32 {
        match tier {
            Tier::Winner => self.trust_winner_bonus,
            Tier::Loser => -self.trust_loser_penalty,
            Tier::Others => self.trust_others_bonus,
        }
    }
}
