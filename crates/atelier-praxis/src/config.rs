//! PRAXIS configuration

use anyhow::Context;
use atelier_common::AtelierError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Learning-core configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LearningConfig {
    /// Pattern bank retrieval settings
    pub retrieval: RetrievalSettings,
    /// Trait effectiveness settings
    pub effectiveness: EffectivenessSettings,
}

impl LearningConfig {
    /// Load configuration from the environment
    ///
    /// Reads a `.env` file if present, then applies `ATELIER_*` overrides
    /// on top of the defaults. Unparseable values are a
    /// [`AtelierError::Config`].
    pub fn load() -> atelier_common::Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let cfg = Self::from_env().map_err(|e| AtelierError::Config(format!("{:#}", e)))?;
        debug!(?cfg, "Loaded learning configuration");
        Ok(cfg)
    }

    fn from_env() -> anyhow::Result<Self> {
        let mut cfg = Self::default();

        // Retrieval settings
        if let Some(v) = env_parse("ATELIER_RETRIEVAL_TOP_K")? {
            cfg.retrieval.top_k = v;
        }
        if let Some(v) = env_parse("ATELIER_RETRIEVAL_TRAIT_TOLERANCE")? {
            cfg.retrieval.trait_tolerance = v;
        }
        if let Some(v) = env_parse("ATELIER_RETRIEVAL_CATEGORY_BONUS")? {
            cfg.retrieval.category_bonus = v;
        }
        if let Some(v) = env_parse("ATELIER_RETRIEVAL_STRATEGY_BONUS")? {
            cfg.retrieval.strategy_bonus = v;
        }

        // Effectiveness settings
        if let Some(v) = env_parse("ATELIER_EFFECTIVENESS_HISTORY_WEIGHT")? {
            cfg.effectiveness.history_weight = v;
        }
        if let Some(v) = env_parse("ATELIER_EFFECTIVENESS_CURRENT_WEIGHT")? {
            cfg.effectiveness.current_weight = v;
        }
        if let Some(v) = env_parse("ATELIER_EFFECTIVENESS_MAX_RENDERED_TRAITS")? {
            cfg.effectiveness.max_rendered_traits = v;
        }

        Ok(cfg)
    }
}

fn env_parse<T>(key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("invalid value for {}: {:?}", key, raw)),
        Err(_) => Ok(None),
    }
}

/// Pattern bank retrieval settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalSettings {
    /// Maximum entries returned
    pub top_k: usize,
    /// Multiplier applied to entry confidence
    pub confidence_weight: f64,
    /// Bonus for a historical rank within `podium_rank`
    pub podium_bonus: f64,
    /// Bonus for any other historical rank
    pub field_bonus: f64,
    /// Ranks up to this value count as podium finishes
    pub podium_rank: u32,
    /// Bonus when the entry's category is the agent's primary focus
    pub category_bonus: f64,
    /// Bonus when the entry's strategy matches the agent's implied strategy
    pub strategy_bonus: f64,
    /// Maximum absolute difference for two trait values to count as similar
    pub trait_tolerance: i32,
    /// Bonus per similar trait
    pub trait_bonus: f64,
    /// Bonus for entries from the current cycle
    pub recency_bonus: f64,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            top_k: crate::DEFAULT_RETRIEVAL_TOP_K,
            confidence_weight: 2.0,
            podium_bonus: 1.5,
            field_bonus: 0.5,
            podium_rank: 3,
            category_bonus: 3.0,
            strategy_bonus: 2.0,
            trait_tolerance: 15,
            trait_bonus: 1.0,
            recency_bonus: 1.0,
        }
    }
}

/// Trait effectiveness settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectivenessSettings {
    /// Weight of the previous cumulative correlation
    pub history_weight: f64,
    /// Weight of the current cycle's correlation
    pub current_weight: f64,
    /// Weight of |cumulative| in the importance score
    pub importance_cumulative_weight: f64,
    /// Weight of |current| in the importance score
    pub importance_current_weight: f64,
    /// |cumulative| above this gives a positive or negative direction
    pub direction_threshold: f64,
    /// Number of top-ranked designs forming the winner tier
    pub winner_tier_size: usize,
    /// Importance needed for a trait to count as proven
    pub proven_importance: f64,
    /// Samples needed for a trait to count as proven
    pub proven_samples: u32,
    /// Maximum traits rendered in context output
    pub max_rendered_traits: usize,
}

impl Default for EffectivenessSettings {
    fn default() -> Self {
        Self {
            history_weight: 0.6,
            current_weight: 0.4,
            importance_cumulative_weight: 0.7,
            importance_current_weight: 0.3,
            direction_threshold: 0.1,
            winner_tier_size: 3,
            proven_importance: 0.4,
            proven_samples: 2,
            max_rendered_traits: crate::MAX_RENDERED_TRAITS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = LearningConfig::default();
        assert_eq!(cfg.retrieval.top_k, 3);
        assert_eq!(cfg.retrieval.trait_tolerance, 15);
        let weights = cfg.effectiveness.history_weight + cfg.effectiveness.current_weight;
        assert!((weights - 1.0).abs() < 1e-9);
        assert_eq!(cfg.effectiveness.max_rendered_traits, 8);
    }

    #[test]
    fn test_env_parse_missing_key() {
        let v: Option<usize> = env_parse("ATELIER_TEST_SURELY_UNSET_KEY").unwrap();
        assert!(v.is_none());
    }

    // Overrides and failures share one test: the environment is process-wide
    #[test]
    fn test_load_applies_overrides_and_rejects_garbage() {
        std::env::set_var("ATELIER_RETRIEVAL_TOP_K", " 5 ");
        std::env::set_var("ATELIER_EFFECTIVENESS_HISTORY_WEIGHT", "0.75");
        let cfg = LearningConfig::load().unwrap();
        assert_eq!(cfg.retrieval.top_k, 5);
        assert_eq!(cfg.effectiveness.history_weight, 0.75);
        assert_eq!(cfg.retrieval.trait_tolerance, 15);

        std::env::set_var("ATELIER_RETRIEVAL_TRAIT_TOLERANCE", "wide");
        let err = LearningConfig::load().unwrap_err();
        assert!(matches!(err, AtelierError::Config(_)));
        assert!(err.to_string().contains("ATELIER_RETRIEVAL_TRAIT_TOLERANCE"));

        std::env::remove_var("ATELIER_RETRIEVAL_TOP_K");
        std::env::remove_var("ATELIER_EFFECTIVENESS_HISTORY_WEIGHT");
        std::env::remove_var("ATELIER_RETRIEVAL_TRAIT_TOLERANCE");
    }
}
