//! Pattern Bank Retrieval
//!
//! Scores archived design outcomes for relevance to a querying agent and
//! keeps the best few. The score is additive:
//!
//! 1. base: confidence × 2
//! 2. rank bonus: +1.5 for a podium finish (rank ≤ 3), otherwise +0.5
//! 3. category: +3 when the entry's category is the agent's primary focus
//! 4. strategy: +2 when the entry's strategy matches the one implied by
//!    the agent's risk trait
//! 5. traits: +1 for each of six paired traits within ±15
//! 6. recency: +1 for entries from the current cycle

use atelier_common::{Agent, Strategy, Trait};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::pattern::PatternBankEntry;
use crate::config::RetrievalSettings;

/// Traits compared between the agent and an entry's author
pub const SIMILARITY_TRAITS: [Trait; 6] = [
    Trait::Novelty,
    Trait::MarketFit,
    Trait::Risk,
    Trait::PlatinumBias,
    Trait::Manufacturability,
    Trait::Wearability,
];

/// Per-component contributions to a relevance score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub confidence: f64,
    pub rank: f64,
    pub category: f64,
    pub strategy: f64,
    pub traits: f64,
    pub recency: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.confidence + self.rank + self.category + self.strategy + self.traits + self.recency
    }
}

/// A retrieved entry with its relevance score
#[derive(Debug, Clone)]
pub struct ScoredPattern {
    /// The archived entry
    pub entry: PatternBankEntry,
    /// Combined relevance score
    pub score: f64,
    /// How the score was built
    pub breakdown: ScoreBreakdown,
    /// 1-based position in the result set
    pub rank: usize,
}

/// Relevance-scored retrieval over a pattern bank
#[derive(Debug, Clone, Default)]
pub struct PatternRetriever {
    settings: RetrievalSettings,
}

impl PatternRetriever {
    pub fn new(settings: RetrievalSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RetrievalSettings {
        &self.settings
    }

    /// Retrieve the most relevant entries for `agent`
    ///
    /// Results are sorted by descending score; equal scores keep bank
    /// order. At most `top_k` entries are returned.
    pub fn retrieve(
        &self,
        agent: &Agent,
        bank: &[PatternBankEntry],
        current_cycle: u32,
    ) -> Vec<ScoredPattern> {
        if bank.is_empty() {
            return Vec::new();
        }

        let focus = agent.primary_focus();
        let implied = Strategy::from_risk(agent.genome.get(Trait::Risk));

        let mut scored: Vec<(usize, ScoreBreakdown)> = bank
            .iter()
            .enumerate()
            .map(|(i, entry)| (i, self.score(agent, focus, implied, entry, current_cycle)))
            .collect();

        // Stable sort keeps bank order among equal scores
        scored.sort_by(|a, b| OrderedFloat(b.1.total()).cmp(&OrderedFloat(a.1.total())));

        let results: Vec<ScoredPattern> = scored
            .into_iter()
            .take(self.settings.top_k)
            .enumerate()
            .map(|(rank, (i, breakdown))| ScoredPattern {
                entry: bank[i].clone(),
                score: breakdown.total(),
                breakdown,
                rank: rank + 1,
            })
            .collect();

        debug!(
            agent = %agent.name,
            bank = bank.len(),
            returned = results.len(),
            %implied,
            "Retrieved precedents"
        );

        results
    }

    /// Score one entry
    fn score(
        &self,
        agent: &Agent,
        focus: &str,
        implied: Strategy,
        entry: &PatternBankEntry,
        current_cycle: u32,
    ) -> ScoreBreakdown {
        let s = &self.settings;

        let rank = if entry.rank <= s.podium_rank {
            s.podium_bonus
        } else {
            s.field_bonus
        };

        let category = if entry.category == focus {
            s.category_bonus
        } else {
            0.0
        };

        let strategy = if entry.strategy == implied {
            s.strategy_bonus
        } else {
            0.0
        };

        let similar = SIMILARITY_TRAITS
            .iter()
            .filter(|t| {
                let gap = i64::from(agent.genome.get(**t)) - i64::from(entry.trait_value(**t));
                gap.abs() <= i64::from(s.trait_tolerance)
            })
            .count();

        let recency = if entry.cycle == current_cycle {
            s.recency_bonus
        } else {
            0.0
        };

        ScoreBreakdown {
            confidence: entry.confidence * s.confidence_weight,
            rank,
            category,
            strategy,
            traits: similar as f64 * s.trait_bonus,
            recency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_common::Genome;

    fn agent(risk: i32) -> Agent {
        let genome = Genome::builder()
            .with(Trait::Risk, risk)
            .with(Trait::Novelty, 70)
            .with(Trait::MarketFit, 60)
            .with(Trait::PlatinumBias, 50)
            .with(Trait::Manufacturability, 60)
            .with(Trait::Wearability, 65)
            .build();
        Agent::new(0, "Vera")
            .with_genome(genome)
            .with_market_focus("Ring, Pendant")
    }

    /// An entry whose author shares none of the agent's paired traits
    fn distant(cycle: u32, rank: u32, category: &str, strategy: Strategy) -> PatternBankEntry {
        SIMILARITY_TRAITS.iter().fold(
            PatternBankEntry::new(cycle, rank, "Piece", category, strategy).with_confidence(0.5),
            |e, t| e.with_trait(*t, 0),
        )
    }

    #[test]
    fn test_retrieve_empty() {
        let retriever = PatternRetriever::default();
        assert!(retriever.retrieve(&agent(50), &[], 1).is_empty());
    }

    #[test]
    fn test_score_components() {
        let retriever = PatternRetriever::default();
        let a = agent(80);

        // confidence 0.5*2 = 1, rank 2 -> +1.5, category Ring -> +3,
        // explore matches risk 80 -> +2, no traits, cycle 4 == current -> +1
        let entry = distant(4, 2, "Ring", Strategy::Explore);
        let results = retriever.retrieve(&a, &[entry], 4);

        assert_eq!(results.len(), 1);
        assert!((results[0].score - 8.5).abs() < 1e-9);
        assert_eq!(results[0].rank, 1);
    }

    #[test]
    fn test_missing_traits_default_to_neutral() {
        let retriever = PatternRetriever::default();
        let a = agent(50);

        // No recorded traits: every author trait is 50. Agent traits:
        // novelty 70 (diff 20), marketFit 60, risk 50, platinumBias 50,
        // manufacturability 60, wearability 65 -> 5 within tolerance
        let entry = PatternBankEntry::new(1, 7, "Piece", "Bracelet", Strategy::Exploit)
            .with_confidence(0.0);
        let results = retriever.retrieve(&a, &[entry], 3);

        assert_eq!(results[0].breakdown.traits, 5.0);
        assert_eq!(results[0].breakdown.rank, 0.5);
        assert!((results[0].score - 5.5).abs() < 1e-9);
    }

    #[test]
    fn test_top_three_sorted_descending() {
        let retriever = PatternRetriever::default();
        let a = agent(20);

        let bank = vec![
            distant(1, 9, "Bracelet", Strategy::Mutate),
            distant(1, 1, "Ring", Strategy::Exploit),
            distant(1, 5, "Ring", Strategy::Mutate),
            distant(1, 2, "Pendant", Strategy::Exploit),
            distant(2, 8, "Earrings", Strategy::Explore),
        ];
        let results = retriever.retrieve(&a, &bank, 2);

        assert_eq!(results.len(), 3);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(results[0].entry.rank, 1);
        assert_eq!(results.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_fewer_entries_than_top_k() {
        let retriever = PatternRetriever::default();
        let bank = vec![
            distant(1, 1, "Ring", Strategy::Mutate),
            distant(1, 2, "Ring", Strategy::Mutate),
        ];
        assert_eq!(retriever.retrieve(&agent(50), &bank, 1).len(), 2);
    }

    #[test]
    fn test_extreme_author_traits_score_as_distant() {
        let retriever = PatternRetriever::default();
        let mut entry = PatternBankEntry::new(1, 5, "Piece", "Bracelet", Strategy::Exploit)
            .with_confidence(0.0)
            .with_trait(Trait::Risk, i32::MIN);
        entry.genome_traits.insert(Trait::Novelty, i32::MIN);

        let results = retriever.retrieve(&agent(50), &[entry], 9);

        // risk 0 vs 50 and novelty 0 vs 70 miss; the four neutral defaults match
        assert_eq!(results[0].breakdown.traits, 4.0);
    }

    #[test]
    fn test_ties_keep_bank_order() {
        let retriever = PatternRetriever::default();
        let bank = vec![
            distant(1, 4, "Ring", Strategy::Mutate).with_agent("first"),
            distant(1, 4, "Ring", Strategy::Mutate).with_agent("second"),
        ];
        let results = retriever.retrieve(&agent(50), &bank, 9);
        assert_eq!(results[0].entry.agent_name, "first");
        assert_eq!(results[1].entry.agent_name, "second");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn retrieval_is_bounded_and_sorted(
                risk in 0i32..=100,
                rows in proptest::collection::vec(
                    (1u32..6, 1u32..11, 0usize..4, 0usize..3, 0.0f64..=1.0),
                    0..40,
                ),
            ) {
                let categories = ["Ring", "Pendant", "Earrings", "Bracelet"];
                let bank: Vec<PatternBankEntry> = rows
                    .iter()
                    .map(|(cycle, rank, c, s, conf)| {
                        let strategy = Strategy::ALL[*s];
                        PatternBankEntry::new(*cycle, *rank, "Piece", categories[*c], strategy)
                            .with_confidence(*conf)
                    })
                    .collect();

                let results = PatternRetriever::default().retrieve(&agent(risk), &bank, 3);

                prop_assert_eq!(results.len(), bank.len().min(3));
                prop_assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
                for r in &results {
                    prop_assert!((r.score - r.breakdown.total()).abs() < 1e-9);
                }
            }
        }
    }
}
