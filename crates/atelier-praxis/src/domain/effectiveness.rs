//! Trait Effectiveness
//!
//! Attributes credit outcomes to genome traits. Each cycle, every design
//! trait is correlated against the credits its authors earned; the
//! per-cycle correlation is folded into an exponentially weighted
//! cumulative value so that established trends outweigh single-cycle
//! noise:
//!
//! ```text
//! cumulative = 0.6 × previous + 0.4 × current
//! importance = 0.7 × |cumulative| + 0.3 × |current|
//! ```

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use atelier_common::{stats, Agent, Design, Trait, NEUTRAL_TRAIT_VALUE};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::EffectivenessSettings;

/// Sign of a trait's cumulative correlation with credits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
    Neutral,
}

impl Direction {
    fn from_cumulative(cumulative: f64, threshold: f64) -> Self {
        if cumulative > threshold {
            Direction::Positive
        } else if cumulative < -threshold {
            Direction::Negative
        } else {
            Direction::Neutral
        }
    }

    /// Arrow used in rendered context
    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Positive => "↑",
            Direction::Negative => "↓",
            Direction::Neutral => "→",
        }
    }
}

/// Running effectiveness estimate for one trait
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitEffectivenessRecord {
    /// Correlation observed in the most recent cycle
    pub correlation: f64,
    /// Exponentially weighted correlation across cycles
    pub cumulative_correlation: f64,
    pub importance_weight: f64,
    pub direction: Direction,
    /// Mean trait value among the winner-tier authors of the last cycle
    pub last_cycle_value: f64,
    /// Cycles that contributed
    pub samples: u32,
    /// Cycle number of the most recent update
    pub last_cycle: u32,
}

impl TraitEffectivenessRecord {
    /// Enough evidence that the trait matters
    pub fn is_proven(&self, settings: &EffectivenessSettings) -> bool {
        self.importance_weight > settings.proven_importance
            && self.samples >= settings.proven_samples
    }
}

/// Per-trait effectiveness state, carried across cycles by the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraitEffectiveness {
    settings: EffectivenessSettings,
    records: BTreeMap<Trait, TraitEffectivenessRecord>,
}

impl TraitEffectiveness {
    pub fn new(settings: EffectivenessSettings) -> Self {
        Self {
            settings,
            records: BTreeMap::new(),
        }
    }

    pub fn settings(&self) -> &EffectivenessSettings {
        &self.settings
    }

    pub fn get(&self, t: Trait) -> Option<&TraitEffectivenessRecord> {
        self.records.get(&t)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fold one cycle of ranked designs into the estimate
    ///
    /// `ranked_designs` index into `agents` through `agent_idx`; authors
    /// that cannot be resolved count as neutral (50). An empty design
    /// list leaves the state unchanged.
    pub fn update(&mut self, cycle: u32, ranked_designs: &[Design], agents: &[Agent]) -> &mut Self {
        if ranked_designs.is_empty() {
            warn!(cycle, "No designs to attribute, trait effectiveness unchanged");
            return self;
        }

        let credits: Vec<f64> = ranked_designs.iter().map(|d| d.credits as f64).collect();

        let mut podium: Vec<&Design> = ranked_designs.iter().collect();
        podium.sort_by_key(|d| d.rank);
        podium.truncate(self.settings.winner_tier_size);

        for t in Trait::DESIGN {
            let values: Vec<f64> = ranked_designs
                .iter()
                .map(|d| author_value(agents, d, t) as f64)
                .collect();
            let current = stats::pearson_correlation(&values, &credits);

            let winner_values: Vec<f64> = podium
                .iter()
                .filter_map(|d| agents.get(d.agent_idx))
                .map(|a| a.genome.get(t) as f64)
                .collect();
            let winner_tier_average = if winner_values.is_empty() {
                NEUTRAL_TRAIT_VALUE as f64
            } else {
                winner_values.iter().sum::<f64>() / winner_values.len() as f64
            };

            let s = &self.settings;
            match self.records.entry(t) {
                Entry::Vacant(slot) => {
                    slot.insert(TraitEffectivenessRecord {
                        correlation: current,
                        cumulative_correlation: current,
                        importance_weight: current.abs(),
                        direction: Direction::from_cumulative(current, s.direction_threshold),
                        last_cycle_value: winner_tier_average,
                        samples: 1,
                        last_cycle: cycle,
                    });
                }
                Entry::Occupied(mut slot) => {
                    let record = slot.get_mut();
                    let cumulative = s.history_weight * record.cumulative_correlation
                        + s.current_weight * current;
                    record.correlation = current;
                    record.cumulative_correlation = cumulative;
                    record.importance_weight = s.importance_cumulative_weight * cumulative.abs()
                        + s.importance_current_weight * current.abs();
                    record.direction =
                        Direction::from_cumulative(cumulative, s.direction_threshold);
                    record.last_cycle_value = winner_tier_average;
                    record.samples += 1;
                    record.last_cycle = cycle;
                }
            }
        }

        debug!(
            cycle,
            designs = ranked_designs.len(),
            traits = self.records.len(),
            "Updated trait effectiveness"
        );
        self
    }

    /// Records sorted by importance, highest first
    pub fn ranked(&self) -> Vec<(Trait, &TraitEffectivenessRecord)> {
        let mut ranked: Vec<_> = self.records.iter().map(|(t, r)| (*t, r)).collect();
        ranked.sort_by(|a, b| {
            OrderedFloat(b.1.importance_weight).cmp(&OrderedFloat(a.1.importance_weight))
        });
        ranked
    }

    /// Traits with proven influence on credits
    pub fn proven(&self) -> impl Iterator<Item = (Trait, &TraitEffectivenessRecord)> {
        self.records
            .iter()
            .filter(|(_, r)| r.is_proven(&self.settings))
            .map(|(t, r)| (*t, r))
    }
}

fn author_value(agents: &[Agent], design: &Design, t: Trait) -> i32 {
    agents
        .get(design.agent_idx)
        .map(|a| a.genome.get(t))
        .unwrap_or(NEUTRAL_TRAIT_VALUE)
}
