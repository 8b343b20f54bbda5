//! Error types for the Atelier learning core
//!
//! Provides a unified error type and component-specific error variants

use thiserror::Error;

/// Result type alias using AtelierError
pub type Result<T> = std::result::Result<T, AtelierError>;

/// Unified error type for Atelier operations
#[derive(Debug, Error)]
pub enum AtelierError {
    // Evolution errors
    #[error("Evolution error: {0}")]
    Evolution(#[from] EvolutionError),

    // Reinforcement grid errors
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Precondition violations when evolving a roster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvolutionError {
    #[error("Cannot evolve an empty roster")]
    EmptyRoster,

    #[error("Ranked design count {designs} does not match roster size {agents}")]
    LengthMismatch { designs: usize, agents: usize },

    #[error("Design references unknown agent index {agent_idx}")]
    UnknownAgent { agent_idx: usize },

    #[error("Agent index {agent_idx} appears in more than one design")]
    DuplicateAgent { agent_idx: usize },

    #[error(
        "Designs are not in ascending rank order at position {position} \
         (rank {rank} after {previous})"
    )]
    RankOrder {
        position: usize,
        rank: u32,
        previous: u32,
    },
}

/// Reinforcement grid errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Category not tracked by the grid: {0}")]
    UnknownCategory(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AtelierError::from(EvolutionError::LengthMismatch {
            designs: 9,
            agents: 10,
        });
        assert!(err.to_string().contains("9"));
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_grid_error() {
        let err = AtelierError::from(GridError::UnknownCategory("Tiara".to_string()));
        assert!(err.to_string().contains("Tiara"));
    }
}
