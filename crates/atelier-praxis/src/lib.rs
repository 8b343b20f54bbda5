//! # Atelier PRAXIS
//!
//! Learning from past cycles: the state an agent consults before it
//! designs again.
//!
//! ## Key Concepts
//!
//! - **Reinforcement Grid**: average credits per (strategy, category) pair
//! - **Pattern Bank**: archived design outcomes with the author's traits
//! - **Retrieval**: additive relevance scoring of precedents for an agent
//! - **Trait Effectiveness**: exponentially weighted trait/credit correlation
//! - **Learning Context**: text rendering of all of the above
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   LearningContext                       │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐     │
//! │  │   QTable    │  │  Retrieved  │  │    Trait    │     │
//! │  │  (grid)     │  │  Precedents │  │Effectiveness│     │
//! │  └──────┬──────┘  └──────┬──────┘  └──────┬──────┘     │
//! │         │                │                │            │
//! │         │         ┌──────┴──────┐         │            │
//! │         │         │  Pattern    │         │            │
//! │         │         │  Retriever  │         │            │
//! │         │         └──────┬──────┘         │            │
//! │         │                │                │            │
//! │  ┌──────┴────────────────┴────────────────┴──────┐     │
//! │  │     ranked Designs + roster (per cycle)        │     │
//! │  │     PatternArchive (append-only)               │     │
//! │  └───────────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod domain;
pub mod infra;

// Re-export core types
pub use config::{EffectivenessSettings, LearningConfig, RetrievalSettings};
pub use domain::context::{
    format_cycle_analytics, format_pattern_precedents, format_q_table,
    format_trait_effectiveness, LearningContext,
};
pub use domain::effectiveness::{Direction, TraitEffectiveness, TraitEffectivenessRecord};
pub use domain::pattern::PatternBankEntry;
pub use domain::q_table::{QTable, QTableEntry, QTableSummary};
pub use domain::retrieval::{PatternRetriever, ScoreBreakdown, ScoredPattern};

// Re-export infrastructure
pub use infra::archive::{ArchiveError, InMemoryPatternArchive, PatternArchive};

/// PRAXIS version
pub const PRAXIS_VERSION: &str = "0.1.0";

/// Default number of precedents returned per query
pub const DEFAULT_RETRIEVAL_TOP_K: usize = 3;

/// Maximum traits rendered in trait-effectiveness context
pub const MAX_RENDERED_TRAITS: usize = 8;

/// Maximum entries an in-memory archive accepts
pub const MAX_ARCHIVED_PATTERNS: usize = 10000;
