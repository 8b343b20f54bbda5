//! # Atelier Common
//!
//! Shared types, errors, and statistics for the Atelier agent learning core.
//!
//! ## Core Types
//!
//! - [`Trait`]/[`Genome`]: bounded design tendencies of an agent
//! - [`Agent`]: a persistent competitor with evolution and conversation history
//! - [`Design`]: one ranked submission from one cycle
//! - [`Strategy`]/[`Category`]: the axes of the reinforcement grid
//!
//! ## Statistics
//!
//! - [`stats`]: Pearson correlation, Gini coefficient, least-squares slope,
//!   percentage rounding

pub mod error;
pub mod stats;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{AtelierError, EvolutionError, GridError, Result};
pub use types::{
    agent::{Agent, ConversationMemory, EvolutionRecord, MAX_TRUST_BUILT},
    design::{Category, Design, Strategy},
    genome::{
        clamp_trait, Genome, GenomeBuilder, Trait, NEUTRAL_TRAIT_VALUE, TRAIT_MAX, TRAIT_MIN,
    },
};

/// Atelier version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
