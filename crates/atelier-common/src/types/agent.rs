//! Agent - a persistent competitor and its accumulated history

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::genome::{Genome, Trait};

/// Upper bound for `trust_built`. There is no lower bound.
pub const MAX_TRUST_BUILT: i32 = 100;

/// One per-cycle entry in an agent's evolution history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionRecord {
    /// Cycle number this record belongs to
    pub cycle: u32,
    /// Narrative summary of what happened
    pub summary: String,
    /// Realized trait deltas (after clamping)
    pub shifts: BTreeMap<Trait, i32>,
    /// Rank the agent's design received
    pub rank: u32,
    /// Name of the design submitted
    pub design_name: String,
}

/// One remembered exchange with another agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMemory {
    pub cycle: u32,
    pub partner: String,
    pub excerpt: String,
}

/// A designer agent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Stable identifier
    pub id: u32,
    pub name: String,
    pub archetype: String,
    pub philosophy: String,
    pub style_tags: Vec<String>,
    /// Comma-separated category list; the first segment is the primary focus
    pub market_focus: String,

    pub genome: Genome,

    pub credits: u64,
    pub reputation: i32,
    pub status: String,
    /// Trust accumulated with the audience (capped at 100, unbounded below)
    #[serde(deserialize_with = "capped_trust")]
    pub trust_built: i32,
    pub dominant_belief: String,

    pub evolution_history: Vec<EvolutionRecord>,
    pub conversation_memory: Vec<ConversationMemory>,
}

impl Agent {
    /// Create an agent with a default genome and empty history
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            archetype: String::new(),
            philosophy: String::new(),
            style_tags: Vec::new(),
            market_focus: String::new(),
            genome: Genome::default(),
            credits: 0,
            reputation: 0,
            status: "active".to_string(),
            trust_built: 0,
            dominant_belief: String::new(),
            evolution_history: Vec::new(),
            conversation_memory: Vec::new(),
        }
    }

    pub fn with_genome(mut self, genome: Genome) -> Self {
        self.genome = genome;
        self
    }

    pub fn with_archetype(mut self, archetype: impl Into<String>) -> Self {
        self.archetype = archetype.into();
        self
    }

    pub fn with_philosophy(mut self, philosophy: impl Into<String>) -> Self {
        self.philosophy = philosophy.into();
        self
    }

    pub fn with_market_focus(mut self, focus: impl Into<String>) -> Self {
        self.market_focus = focus.into();
        self
    }

    pub fn with_style_tag(mut self, tag: impl Into<String>) -> Self {
        self.style_tags.push(tag.into());
        self
    }

    pub fn with_trust(mut self, trust: i32) -> Self {
        self.trust_built = trust.min(MAX_TRUST_BUILT);
        self
    }

    /// Primary market category (first comma segment of `market_focus`)
    pub fn primary_focus(&self) -> &str {
        self.market_focus.split(',').next().unwrap_or("").trim()
    }

    /// Adjust trust by `delta`, applying the upper cap only
    pub fn adjust_trust(&mut self, delta: i32) {
        self.trust_built = self.trust_built.saturating_add(delta).min(MAX_TRUST_BUILT);
    }

    /// History record for a given cycle, if one exists
    pub fn record_for_cycle(&self, cycle: u32) -> Option<&EvolutionRecord> {
        self.evolution_history.iter().find(|r| r.cycle == cycle)
    }
}

fn capped_trust<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    i32::deserialize(deserializer).map(|t| t.min(MAX_TRUST_BUILT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_focus() {
        let agent = Agent::new(1, "Vera").with_market_focus(" Ring, Pendant");
        assert_eq!(agent.primary_focus(), "Ring");

        let agent = Agent::new(2, "Otto");
        assert_eq!(agent.primary_focus(), "");
    }

    #[test]
    fn test_trust_capped_above_only() {
        let mut agent = Agent::new(1, "Vera").with_trust(95);
        agent.adjust_trust(15);
        assert_eq!(agent.trust_built, 100);

        let mut agent = Agent::new(2, "Otto").with_trust(2);
        agent.adjust_trust(-5);
        agent.adjust_trust(-5);
        assert_eq!(agent.trust_built, -8);
    }

    #[test]
    fn test_deserialize_caps_trust_and_clamps_genome() {
        let mut json = serde_json::to_value(Agent::new(3, "Ines").with_trust(-12)).unwrap();
        json["trustBuilt"] = serde_json::json!(180);
        json["genome"]["values"][2] = serde_json::json!(999);

        let agent: Agent = serde_json::from_value(json).unwrap();

        assert_eq!(agent.trust_built, 100);
        assert!(agent.genome.is_in_range());

        let json = serde_json::to_value(Agent::new(4, "Otto").with_trust(-12)).unwrap();
        let agent: Agent = serde_json::from_value(json).unwrap();
        assert_eq!(agent.trust_built, -12);
    }
}
