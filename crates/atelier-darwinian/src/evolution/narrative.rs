//! Narrative text attached to evolution and conversation records

use std::collections::BTreeMap;

use atelier_common::{Design, Trait};

use crate::rules::Tier;

/// Belief adopted when the rule table has nothing for an agent
pub const FALLBACK_BELIEF: &str =
    "Still adapting: reading the results before committing to a direction.";

/// Partner label used when the previous winner cannot be resolved
pub const UNKNOWN_WINNER: &str = "an unrecorded winner";

/// Render realized shifts as `minimalism +8, risk -3`, skipping zeros
pub fn describe_shifts(shifts: &BTreeMap<Trait, i32>) -> String {
    let parts: Vec<String> = shifts
        .iter()
        .filter(|(_, d)| **d != 0)
        .map(|(t, d)| format!("{} {:+}", t, d))
        .collect();

    if parts.is_empty() {
        "no trait movement".to_string()
    } else {
        parts.join(", ")
    }
}

/// Rank-conditioned one-line summary of a cycle
pub fn summarize(cycle: u32, tier: Tier, design: &Design, shifts: &BTreeMap<Trait, i32>) -> String {
    let moved = describe_shifts(shifts);
    match tier {
        Tier::Winner => format!(
            "Won cycle {} with \"{}\" ({} credits). Doubled down: {}.",
            cycle, design.name, design.credits, moved
        ),
        Tier::Loser => format!(
            "Finished last place in cycle {} with \"{}\" ({} credits). Forced rethink: {}.",
            cycle, design.name, design.credits, moved
        ),
        Tier::Others => format!(
            "Ranked #{} in cycle {} with \"{}\" ({} credits). Adjusted: {}.",
            design.rank, cycle, design.name, design.credits, moved
        ),
    }
}

/// First-cycle exchange, before anyone has precedent to point at
pub fn cold_start_excerpt(partner: &str) -> String {
    format!(
        "Cold start: no precedent yet, so I compared first instincts with {} \
         and we both guessed at what the audience wants.",
        partner
    )
}

/// Exchange about the previous cycle's winner
pub fn winner_review_excerpt(previous_cycle: u32, winner: &str) -> String {
    format!(
        "Reviewed the C{} winner, {}: what did they see that the rest of us missed?",
        previous_cycle, winner
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_common::Strategy;

    fn design(rank: u32) -> Design {
        Design::new(0, "Quiet Arc", "Ring", Strategy::Exploit).with_result(rank, 120)
    }

    #[test]
    fn test_describe_shifts_skips_zero() {
        let mut shifts = BTreeMap::new();
        shifts.insert(Trait::Minimalism, 8);
        shifts.insert(Trait::Risk, -3);
        shifts.insert(Trait::MarketFit, 0);

        assert_eq!(describe_shifts(&shifts), "minimalism +8, risk -3");
        assert_eq!(describe_shifts(&BTreeMap::new()), "no trait movement");
    }

    #[test]
    fn test_summary_templates() {
        let shifts = BTreeMap::new();
        assert!(summarize(1, Tier::Winner, &design(1), &shifts).starts_with("Won cycle 1"));
        assert!(summarize(1, Tier::Loser, &design(10), &shifts).contains("last place"));
        assert!(summarize(1, Tier::Others, &design(4), &shifts).starts_with("Ranked #4"));
    }

    #[test]
    fn test_winner_review_names_cycle() {
        let excerpt = winner_review_excerpt(2, "Vera");
        assert!(excerpt.contains("the C2 winner"));
        assert!(excerpt.contains("Vera"));
    }
}
