//! Genome - an agent's design tendencies as bounded integer traits
//!
//! Every trait lives in [0, 100]. Values are default-filled and clamped
//! when a genome is built, and every later write goes through the
//! clamping setter, so the range invariant holds for the lifetime of the
//! value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest value a trait can take
pub const TRAIT_MIN: i32 = 0;

/// Highest value a trait can take
pub const TRAIT_MAX: i32 = 100;

/// Value used for traits that were never supplied
pub const NEUTRAL_TRAIT_VALUE: i32 = 50;

/// A single genome trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Trait {
    Minimalism,
    Novelty,
    Ornamentation,
    MarketFit,
    Symmetry,
    PlatinumBias,
    ColoredStone,
    Diamond,
    MixedMetal,
    Risk,
    MarginSensitivity,
    ComplexityBudget,
    PricePoint,
    Manufacturability,
    Wearability,
    TrendSensitivity,
    // Category expertise
    Rings,
    Necklaces,
    Earrings,
    Bracelets,
    HighJewelry,
}

impl Trait {
    /// Number of traits in a genome
    pub const COUNT: usize = 21;

    /// Every trait, in genome order
    pub const ALL: [Trait; Trait::COUNT] = [
        Trait::Minimalism,
        Trait::Novelty,
        Trait::Ornamentation,
        Trait::MarketFit,
        Trait::Symmetry,
        Trait::PlatinumBias,
        Trait::ColoredStone,
        Trait::Diamond,
        Trait::MixedMetal,
        Trait::Risk,
        Trait::MarginSensitivity,
        Trait::ComplexityBudget,
        Trait::PricePoint,
        Trait::Manufacturability,
        Trait::Wearability,
        Trait::TrendSensitivity,
        Trait::Rings,
        Trait::Necklaces,
        Trait::Earrings,
        Trait::Bracelets,
        Trait::HighJewelry,
    ];

    /// The 16 traits that describe design tendencies (everything except
    /// category expertise)
    pub const DESIGN: [Trait; 16] = [
        Trait::Minimalism,
        Trait::Novelty,
        Trait::Ornamentation,
        Trait::MarketFit,
        Trait::Symmetry,
        Trait::PlatinumBias,
        Trait::ColoredStone,
        Trait::Diamond,
        Trait::MixedMetal,
        Trait::Risk,
        Trait::MarginSensitivity,
        Trait::ComplexityBudget,
        Trait::PricePoint,
        Trait::Manufacturability,
        Trait::Wearability,
        Trait::TrendSensitivity,
    ];

    /// Stable camelCase name
    pub fn name(&self) -> &'static str {
        match self {
            Trait::Minimalism => "minimalism",
            Trait::Novelty => "novelty",
            Trait::Ornamentation => "ornamentation",
            Trait::MarketFit => "marketFit",
            Trait::Symmetry => "symmetry",
            Trait::PlatinumBias => "platinumBias",
            Trait::ColoredStone => "coloredStone",
            Trait::Diamond => "diamond",
            Trait::MixedMetal => "mixedMetal",
            Trait::Risk => "risk",
            Trait::MarginSensitivity => "marginSensitivity",
            Trait::ComplexityBudget => "complexityBudget",
            Trait::PricePoint => "pricePoint",
            Trait::Manufacturability => "manufacturability",
            Trait::Wearability => "wearability",
            Trait::TrendSensitivity => "trendSensitivity",
            Trait::Rings => "rings",
            Trait::Necklaces => "necklaces",
            Trait::Earrings => "earrings",
            Trait::Bracelets => "bracelets",
            Trait::HighJewelry => "highJewelry",
        }
    }

    /// Value a freshly built genome carries when this trait is not supplied
    pub fn default_value(&self) -> i32 {
        match self {
            Trait::MarketFit | Trait::Manufacturability => 60,
            Trait::Wearability => 65,
            _ => NEUTRAL_TRAIT_VALUE,
        }
    }

    /// Whether this trait is a category-expertise score
    pub fn is_expertise(&self) -> bool {
        matches!(
            self,
            Trait::Rings
                | Trait::Necklaces
                | Trait::Earrings
                | Trait::Bracelets
                | Trait::HighJewelry
        )
    }

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Trait {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Trait::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown trait: {}", s))
    }
}

/// Clamp a raw trait value into [0, 100]
#[inline]
pub fn clamp_trait(value: i32) -> i32 {
    value.clamp(TRAIT_MIN, TRAIT_MAX)
}

/// Full set of trait values for one agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawGenome")]
pub struct Genome {
    values: [i32; Trait::COUNT],
}

/// Wire form of a genome before clamping
#[derive(Deserialize)]
struct RawGenome {
    values: [i32; Trait::COUNT],
}

impl From<RawGenome> for Genome {
    fn from(raw: RawGenome) -> Self {
        Genome {
            values: raw.values.map(clamp_trait),
        }
    }
}

impl Default for Genome {
    fn default() -> Self {
        GenomeBuilder::new().build()
    }
}

impl Genome {
    /// Start building a genome
    pub fn builder() -> GenomeBuilder {
        GenomeBuilder::new()
    }

    /// Current value of a trait
    #[inline]
    pub fn get(&self, t: Trait) -> i32 {
        self.values[t.index()]
    }

    /// Set a trait, clamping into range. Returns the stored value.
    pub fn set(&mut self, t: Trait, value: i32) -> i32 {
        let clamped = clamp_trait(value);
        self.values[t.index()] = clamped;
        clamped
    }

    /// Shift a trait by `delta`, clamping into range.
    ///
    /// Returns the realized change, which is smaller than `delta` in
    /// magnitude when the boundary is hit.
    pub fn shift(&mut self, t: Trait, delta: i32) -> i32 {
        let old = self.get(t);
        let new = self.set(t, old.saturating_add(delta));
        new - old
    }

    /// Iterate over `(trait, value)` pairs in genome order
    pub fn iter(&self) -> impl Iterator<Item = (Trait, i32)> + '_ {
        Trait::ALL.iter().map(move |t| (*t, self.get(*t)))
    }

    /// Whether every trait is within [0, 100]
    pub fn is_in_range(&self) -> bool {
        self.values.iter().all(|v| (TRAIT_MIN..=TRAIT_MAX).contains(v))
    }
}

/// Builder that default-fills and clamps traits
#[derive(Debug, Clone)]
pub struct GenomeBuilder {
    values: [Option<i32>; Trait::COUNT],
}

impl Default for GenomeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GenomeBuilder {
    pub fn new() -> Self {
        Self {
            values: [None; Trait::COUNT],
        }
    }

    /// Supply a trait value
    pub fn with(mut self, t: Trait, value: i32) -> Self {
        self.values[t.index()] = Some(value);
        self
    }

    /// Supply several trait values at once
    pub fn with_all(mut self, values: impl IntoIterator<Item = (Trait, i32)>) -> Self {
        for (t, v) in values {
            self.values[t.index()] = Some(v);
        }
        self
    }

    /// Build the genome, filling every missing trait with its default
    pub fn build(self) -> Genome {
        let mut values = [0; Trait::COUNT];
        for t in Trait::ALL {
            values[t.index()] = clamp_trait(self.values[t.index()].unwrap_or(t.default_value()));
        }
        Genome { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_fills_defaults() {
        let genome = Genome::builder().with(Trait::Risk, 80).build();

        assert_eq!(genome.get(Trait::Risk), 80);
        assert_eq!(genome.get(Trait::Minimalism), 50);
        assert_eq!(genome.get(Trait::MarketFit), 60);
        assert_eq!(genome.get(Trait::Wearability), 65);
    }

    #[test]
    fn test_builder_clamps() {
        let genome = Genome::builder()
            .with(Trait::Novelty, 140)
            .with(Trait::Symmetry, -20)
            .build();

        assert_eq!(genome.get(Trait::Novelty), 100);
        assert_eq!(genome.get(Trait::Symmetry), 0);
        assert!(genome.is_in_range());
    }

    #[test]
    fn test_shift_reports_realized_delta() {
        let mut genome = Genome::builder().with(Trait::Minimalism, 96).build();

        assert_eq!(genome.shift(Trait::Minimalism, 8), 4);
        assert_eq!(genome.get(Trait::Minimalism), 100);
        assert_eq!(genome.shift(Trait::Minimalism, -3), -3);
        assert_eq!(genome.get(Trait::Minimalism), 97);
    }

    #[test]
    fn test_trait_names_round_trip() {
        for t in Trait::ALL {
            assert_eq!(t.name().parse::<Trait>().unwrap(), t);
        }
        assert!("sparkle".parse::<Trait>().is_err());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&Trait::PlatinumBias).unwrap();
        assert_eq!(json, "\"platinumBias\"");
        let json = serde_json::to_string(&Trait::HighJewelry).unwrap();
        assert_eq!(json, "\"highJewelry\"");
    }

    #[test]
    fn test_design_traits_exclude_expertise() {
        assert!(Trait::DESIGN.iter().all(|t| !t.is_expertise()));
        assert_eq!(Trait::ALL.iter().filter(|t| t.is_expertise()).count(), 5);
    }

    #[test]
    fn test_deserialize_clamps_out_of_range_values() {
        let mut values = vec![50; Trait::COUNT];
        values[Trait::Minimalism.index()] = 250;
        values[Trait::Novelty.index()] = -40;
        let json = serde_json::json!({ "values": values }).to_string();

        let genome: Genome = serde_json::from_str(&json).unwrap();

        assert_eq!(genome.get(Trait::Minimalism), 100);
        assert_eq!(genome.get(Trait::Novelty), 0);
        assert!(genome.is_in_range());
    }

    #[test]
    fn test_serialized_genome_reads_back_unchanged() {
        let genome = Genome::builder().with(Trait::Risk, 12).build();
        let json = serde_json::to_string(&genome).unwrap();
        assert_eq!(serde_json::from_str::<Genome>(&json).unwrap(), genome);
    }
}
