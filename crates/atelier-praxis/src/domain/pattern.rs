//! Pattern Bank Entries
//!
//! A pattern bank entry is the archived outcome of one past design,
//! together with a snapshot of the author's traits at the time.

use std::collections::HashMap;

use atelier_common::{clamp_trait, Strategy, Trait, NEUTRAL_TRAIT_VALUE};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A historical design outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternBankEntry {
    /// Archive-assigned identifier
    pub id: Uuid,
    /// Cycle the design competed in
    pub cycle: u32,
    /// Rank it received (1 = best)
    pub rank: u32,
    pub agent_name: String,
    pub design_name: String,
    pub category: String,
    pub strategy: Strategy,
    /// Archive confidence in the record (0.0 - 1.0)
    pub confidence: f64,
    pub credits: u64,

    // Quality scores (0-100)
    pub aesthetic: u8,
    pub novelty: u8,
    pub profit: u8,

    // Optional descriptive text
    pub materials: Option<String>,
    pub form: Option<String>,
    pub reasoning: Option<String>,
    pub trend: Option<String>,

    /// Author's traits when the design was made; may be partial
    pub genome_traits: HashMap<Trait, i32>,
}

impl PatternBankEntry {
    /// Create an entry with neutral scores and no descriptive text
    pub fn new(
        cycle: u32,
        rank: u32,
        design_name: impl Into<String>,
        category: impl Into<String>,
        strategy: Strategy,
    ) -> Self {
        Self {
            id: Uuid::nil(),
            cycle,
            rank,
            agent_name: String::new(),
            design_name: design_name.into(),
            category: category.into(),
            strategy,
            confidence: 0.5,
            credits: 0,
            aesthetic: 50,
            novelty: 50,
            profit: 50,
            materials: None,
            form: None,
            reasoning: None,
            trend: None,
            genome_traits: HashMap::new(),
        }
    }

    pub fn with_agent(mut self, agent_name: impl Into<String>) -> Self {
        self.agent_name = agent_name.into();
        self
    }

    /// Set confidence, clamped to [0, 1]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    pub fn with_credits(mut self, credits: u64) -> Self {
        self.credits = credits;
        self
    }

    pub fn with_scores(mut self, aesthetic: u8, novelty: u8, profit: u8) -> Self {
        self.aesthetic = aesthetic.min(100);
        self.novelty = novelty.min(100);
        self.profit = profit.min(100);
        self
    }

    pub fn with_materials(mut self, materials: impl Into<String>) -> Self {
        self.materials = Some(materials.into());
        self
    }

    pub fn with_form(mut self, form: impl Into<String>) -> Self {
        self.form = Some(form.into());
        self
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }

    pub fn with_trend(mut self, trend: impl Into<String>) -> Self {
        self.trend = Some(trend.into());
        self
    }

    /// Record one of the author's trait values, clamped into [0, 100]
    pub fn with_trait(mut self, t: Trait, value: i32) -> Self {
        self.genome_traits.insert(t, clamp_trait(value));
        self
    }

    /// Author's trait value, neutral when it was not recorded
    pub fn trait_value(&self, t: Trait) -> i32 {
        self.genome_traits
            .get(&t)
            .copied()
            .map(clamp_trait)
            .unwrap_or(NEUTRAL_TRAIT_VALUE)
    }
}
