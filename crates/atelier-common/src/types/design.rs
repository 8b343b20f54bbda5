//! Design - one agent's submission for one cycle

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an agent approached a design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Exploit,
    Explore,
    Mutate,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Exploit, Strategy::Explore, Strategy::Mutate];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Exploit => "exploit",
            Strategy::Explore => "explore",
            Strategy::Mutate => "mutate",
        }
    }

    /// Strategy implied by a risk trait value
    ///
    /// High risk explores, low risk exploits, the middle band mutates.
    pub fn from_risk(risk: i32) -> Self {
        if risk > 65 {
            Strategy::Explore
        } else if risk < 35 {
            Strategy::Exploit
        } else {
            Strategy::Mutate
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exploit" => Ok(Strategy::Exploit),
            "explore" => Ok(Strategy::Explore),
            "mutate" => Ok(Strategy::Mutate),
            other => Err(format!("unknown strategy: {}", other)),
        }
    }
}

/// Product categories tracked by the reinforcement grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Ring,
    Pendant,
    Earrings,
    Bracelet,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Ring,
        Category::Pendant,
        Category::Earrings,
        Category::Bracelet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ring => "Ring",
            Category::Pendant => "Pendant",
            Category::Earrings => "Earrings",
            Category::Bracelet => "Bracelet",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| s.trim().to_string())
    }
}

/// A ranked design from one cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    /// Index of the authoring agent in the roster
    pub agent_idx: usize,
    pub name: String,
    /// Category label as produced by the content generator
    pub category: String,
    pub strategy: Strategy,
    pub aesthetic: u8,
    pub novelty: u8,
    pub profit: u8,
    /// Credits earned this cycle
    pub credits: u64,
    /// 1 = best
    pub rank: u32,
}

impl Design {
    pub fn new(
        agent_idx: usize,
        name: impl Into<String>,
        category: impl Into<String>,
        strategy: Strategy,
    ) -> Self {
        Self {
            agent_idx,
            name: name.into(),
            category: category.into(),
            strategy,
            aesthetic: 50,
            novelty: 50,
            profit: 50,
            credits: 0,
            rank: 0,
        }
    }

    /// Set the voting outcome
    pub fn with_result(mut self, rank: u32, credits: u64) -> Self {
        self.rank = rank;
        self.credits = credits;
        self
    }

    /// Set the quality scores, clamped to [0, 100]
    pub fn with_scores(mut self, aesthetic: u8, novelty: u8, profit: u8) -> Self {
        self.aesthetic = aesthetic.min(100);
        self.novelty = novelty.min(100);
        self.profit = profit.min(100);
        self
    }

    /// Parsed grid category, if the label is one the grid tracks
    pub fn grid_category(&self) -> Option<Category> {
        self.category.parse().ok()
    }
}
