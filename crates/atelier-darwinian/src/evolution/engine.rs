//! Genome evolution engine
//!
//! Applies the cycle's rule table to every agent according to its rank
//! tier, then appends history, conversation memory, and a post-cycle
//! snapshot. All validation happens before the first mutation, so a
//! rejected call leaves the roster and the log untouched.

use std::collections::BTreeMap;

use atelier_common::{Agent, ConversationMemory, Design, EvolutionError, EvolutionRecord};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::narrative;
use crate::rules::{rule_for_cycle, Tier};
use crate::snapshot::SnapshotLog;
use crate::DarwinianConfig;

/// What an `evolve` call did
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "outcome")]
pub enum EvolutionOutcome {
    /// The cycle has no rule; nothing changed
    NoRule { cycle: u32 },
    /// Rules applied to the whole roster
    Applied {
        cycle: u32,
        winner: usize,
        loser: usize,
    },
}

impl EvolutionOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, EvolutionOutcome::Applied { .. })
    }
}

/// Rule-driven evolution of a roster
#[derive(Debug, Clone, Default)]
pub struct GenomeEvolutionEngine {
    config: DarwinianConfig,
}

impl GenomeEvolutionEngine {
    pub fn new(config: DarwinianConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DarwinianConfig {
        &self.config
    }

    /// Evolve every agent for `cycle`.
    ///
    /// `ranked_designs` must hold exactly one design per agent, ordered
    /// by ascending rank. An unknown cycle is a no-op.
    pub fn evolve(
        &self,
        cycle: u32,
        ranked_designs: &[Design],
        agents: &mut [Agent],
        snapshots: &mut SnapshotLog,
    ) -> Result<EvolutionOutcome, EvolutionError> {
        let Some(rule) = rule_for_cycle(cycle) else {
            debug!(cycle, "No evolution rule for cycle, skipping");
            return Ok(EvolutionOutcome::NoRule { cycle });
        };

        let by_agent = index_by_agent(ranked_designs, agents.len())?;
        let winner_idx = ranked_designs[0].agent_idx;
        let loser_idx = ranked_designs[ranked_designs.len() - 1].agent_idx;

        let names: Vec<String> = agents.iter().map(|a| a.name.clone()).collect();
        let previous_winner = if cycle > 1 {
            let name = previous_winner_name(agents, cycle - 1)
                .unwrap_or_else(|| narrative::UNKNOWN_WINNER.to_string());
            Some(name)
        } else {
            None
        };

        for (idx, agent) in agents.iter_mut().enumerate() {
            let design = by_agent[idx];
            let tier = Tier::resolve(idx, winner_idx, loser_idx);

            let mut shifts = BTreeMap::new();
            for &(t, delta) in rule.deltas(tier) {
                let realized = agent.genome.shift(t, delta);
                shifts.insert(t, realized);
            }

            agent.dominant_belief = rule
                .belief_for(idx)
                .unwrap_or(narrative::FALLBACK_BELIEF)
                .to_string();
            agent.adjust_trust(self.config.trust_delta(tier));

            let summary = narrative::summarize(cycle, tier, design, &shifts);
            debug!(agent = %agent.name, ?tier, rank = design.rank, "Evolved agent");

            agent.evolution_history.push(EvolutionRecord {
                cycle,
                summary,
                shifts,
                rank: design.rank,
                design_name: design.name.clone(),
            });

            let memory = match &previous_winner {
                None => {
                    let partner = names[(idx + 1) % names.len()].clone();
                    ConversationMemory {
                        cycle,
                        excerpt: narrative::cold_start_excerpt(&partner),
                        partner,
                    }
                }
                Some(winner) => ConversationMemory {
                    cycle,
                    partner: winner.clone(),
                    excerpt: narrative::winner_review_excerpt(cycle - 1, winner),
                },
            };
            agent.conversation_memory.push(memory);
        }

        snapshots.record(cycle, agents);

        info!(
            cycle,
            winner = %names[winner_idx],
            loser = %names[loser_idx],
            snapshots = snapshots.len(),
            "Applied evolution rules"
        );

        Ok(EvolutionOutcome::Applied {
            cycle,
            winner: winner_idx,
            loser: loser_idx,
        })
    }
}

/// Check the ranked list against the roster and index designs by author
fn index_by_agent(ranked: &[Design], roster_size: usize) -> Result<Vec<&Design>, EvolutionError> {
    if roster_size == 0 {
        return Err(EvolutionError::EmptyRoster);
    }
    if ranked.len() != roster_size {
        return Err(EvolutionError::LengthMismatch {
            designs: ranked.len(),
            agents: roster_size,
        });
    }

    let mut slots: Vec<Option<&Design>> = vec![None; roster_size];
    for (position, design) in ranked.iter().enumerate() {
        if position > 0 {
            let previous = ranked[position - 1].rank;
            if design.rank <= previous {
                return Err(EvolutionError::RankOrder {
                    position,
                    rank: design.rank,
                    previous,
                });
            }
        }

        let slot = slots
            .get_mut(design.agent_idx)
            .ok_or(EvolutionError::UnknownAgent {
                agent_idx: design.agent_idx,
            })?;
        if slot.is_some() {
            return Err(EvolutionError::DuplicateAgent {
                agent_idx: design.agent_idx,
            });
        }
        *slot = Some(design);
    }

    // Equal lengths with no duplicates and no out-of-range indices fill every slot
    slots
        .into_iter()
        .enumerate()
        .map(|(agent_idx, slot)| slot.ok_or(EvolutionError::UnknownAgent { agent_idx }))
        .collect()
}

/// Name of the best-ranked agent in `cycle`, from recorded history
fn previous_winner_name(agents: &[Agent], cycle: u32) -> Option<String> {
    agents
        .iter()
        .filter_map(|a| a.record_for_cycle(cycle).map(|r| (r.rank, &a.name)))
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, name)| name.clone())
}
