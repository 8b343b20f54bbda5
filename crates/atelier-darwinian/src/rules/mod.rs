//! Evolution rules: static, cycle-indexed trait deltas per rank tier

mod table;

use atelier_common::Trait;
use serde::{Deserialize, Serialize};

pub use self::table::RULES;

/// Rank-derived bucket that decides which delta table applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Winner,
    Loser,
    Others,
}

impl Tier {
    /// Resolve the tier of `agent_idx` given the winning and losing authors.
    /// The winner check comes first, so a one-agent roster is a winner.
    pub fn resolve(agent_idx: usize, winner_idx: usize, loser_idx: usize) -> Self {
        if agent_idx == winner_idx {
            Tier::Winner
        } else if agent_idx == loser_idx {
            Tier::Loser
        } else {
            Tier::Others
        }
    }
}

/// Deltas and beliefs for one cycle
#[derive(Debug)]
pub struct EvolutionRule {
    pub cycle: u32,
    pub winner: &'static [(Trait, i32)],
    pub loser: &'static [(Trait, i32)],
    pub others: &'static [(Trait, i32)],
    /// Belief adopted by the agent at a given roster index
    pub beliefs: &'static [(usize, &'static str)],
}

impl EvolutionRule {
    /// Delta table for a tier
    pub fn deltas(&self, tier: Tier) -> &'static [(Trait, i32)] {
        match tier {
            Tier::Winner => self.winner,
            Tier::Loser => self.loser,
            Tier::Others => self.others,
        }
    }

    /// Belief for the agent at `agent_idx`, if the table has one
    pub fn belief_for(&self, agent_idx: usize) -> Option<&'static str> {
        self.beliefs
            .iter()
            .find(|(idx, _)| *idx == agent_idx)
            .map(|(_, belief)| *belief)
    }
}

/// Rule for a cycle number, or `None` when the cycle is outside the table
pub fn rule_for_cycle(cycle: u32) -> Option<&'static EvolutionRule> {
    RULES.iter().find(|r| r.cycle == cycle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_lookup_covers_cycles_one_to_five() {
        for cycle in 1..=5 {
            assert_eq!(rule_for_cycle(cycle).map(|r| r.cycle), Some(cycle));
        }
        assert!(rule_for_cycle(0).is_none());
        assert!(rule_for_cycle(6).is_none());
    }

    #[test]
    fn test_first_cycle_headline_deltas() {
        let rule = rule_for_cycle(1).unwrap();
        assert!(rule.deltas(Tier::Winner).contains(&(Trait::Minimalism, 8)));
        assert!(rule.deltas(Tier::Loser).contains(&(Trait::Novelty, 10)));
    }

    #[test]
    fn test_tier_resolution() {
        assert_eq!(Tier::resolve(0, 0, 9), Tier::Winner);
        assert_eq!(Tier::resolve(9, 0, 9), Tier::Loser);
        assert_eq!(Tier::resolve(4, 0, 9), Tier::Others);
        assert_eq!(Tier::resolve(0, 0, 0), Tier::Winner);
    }

    #[test]
    fn test_tables_have_no_duplicate_traits() {
        for rule in RULES.iter() {
            for tier in [Tier::Winner, Tier::Loser, Tier::Others] {
                let deltas = rule.deltas(tier);
                for (i, (t, _)) in deltas.iter().enumerate() {
                    assert!(
                        !deltas[i + 1..].iter().any(|(u, _)| u == t),
                        "cycle {} {:?} repeats {}",
                        rule.cycle,
                        tier,
                        t
                    );
                }
            }
        }
    }
}
