//! Genome evolution
pub mod engine;
pub mod narrative;

pub use self::engine::{EvolutionOutcome, GenomeEvolutionEngine};
