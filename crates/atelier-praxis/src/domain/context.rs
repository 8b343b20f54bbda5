//! Learning Context
//!
//! Renders reinforcement, precedent, and trait-effectiveness state as
//! text blocks for an external decision-maker. Every formatter returns an
//! empty string when its backing state has nothing to say.

use atelier_common::{stats, Design, Strategy};

use super::effectiveness::TraitEffectiveness;
use super::q_table::QTable;
use super::retrieval::ScoredPattern;

/// Marker appended to the best reinforcement-grid combination
pub const BEST_MARKER: &str = "★ BEST";

/// Marker appended to traits with proven influence
pub const PROVEN_MARKER: &str = "[PROVEN]";

/// Render the reinforcement grid
pub fn format_q_table(grid: &QTable) -> String {
    let Some(summary) = grid.summary() else {
        return String::new();
    };

    let mut ctx = String::from("## Strategy × Category Performance\n\n");

    for (strategy, category, cell) in grid.iter().filter(|(_, _, e)| !e.is_empty()) {
        ctx.push_str(&format!(
            "- {} × {}: avg {:.1} credits ({} designs, last C{})",
            strategy, category, cell.avg_credits, cell.count, cell.last_cycle
        ));
        if strategy == summary.best_strategy && category == summary.best_category {
            ctx.push(' ');
            ctx.push_str(BEST_MARKER);
        }
        ctx.push('\n');
    }

    let averages: Vec<String> = summary
        .strategy_averages
        .iter()
        .map(|(s, avg)| format!("{} {:.1}", s, avg))
        .collect();
    ctx.push_str(&format!("\nStrategy averages: {}\n", averages.join(" | ")));

    ctx
}

/// Render the most important traits, capped at the configured maximum
pub fn format_trait_effectiveness(state: &TraitEffectiveness) -> String {
    if state.is_empty() {
        return String::new();
    }

    let settings = state.settings();
    let mut ctx = String::from("## Trait Effectiveness\n\n");

    for (t, record) in state.ranked().into_iter().take(settings.max_rendered_traits) {
        ctx.push_str(&format!(
            "- {} {} importance {}% | cumulative {:+.2} | winners avg {:.0} | {} sample(s)",
            t,
            record.direction.arrow(),
            stats::percentage(record.importance_weight, 1.0),
            record.cumulative_correlation,
            record.last_cycle_value,
            record.samples
        ));
        if record.is_proven(settings) {
            ctx.push(' ');
            ctx.push_str(PROVEN_MARKER);
        }
        ctx.push('\n');
    }

    ctx
}

fn or_placeholder<'a>(value: &'a Option<String>, placeholder: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => v,
        _ => placeholder,
    }
}

/// Render retrieved precedents
///
/// Missing descriptive fields are shown as explicit placeholders.
pub fn format_pattern_precedents(patterns: &[ScoredPattern]) -> String {
    if patterns.is_empty() {
        return String::new();
    }

    let mut ctx = String::from("## Historical Precedents\n\n");

    for p in patterns {
        let e = &p.entry;
        let author = if e.agent_name.is_empty() {
            "[unknown designer]"
        } else {
            e.agent_name.as_str()
        };

        ctx.push_str(&format!(
            "### Precedent #{} (score: {:.1})\n",
            p.rank, p.score
        ));
        ctx.push_str(&format!(
            "- **Design**: \"{}\" by {} (C{}, rank #{}, {} credits)\n",
            e.design_name, author, e.cycle, e.rank, e.credits
        ));
        ctx.push_str(&format!(
            "- **Category**: {} | **Strategy**: {} | **Confidence**: {}%\n",
            e.category,
            e.strategy,
            stats::percentage(e.confidence, 1.0)
        ));
        ctx.push_str(&format!(
            "- **Scores**: aesthetic {} / novelty {} / profit {}\n",
            e.aesthetic, e.novelty, e.profit
        ));
        ctx.push_str(&format!(
            "- **Materials**: {}\n",
            or_placeholder(&e.materials, "[no materials recorded]")
        ));
        ctx.push_str(&format!(
            "- **Form**: {}\n",
            or_placeholder(&e.form, "[no form recorded]")
        ));
        ctx.push_str(&format!(
            "- **Reasoning**: {}\n",
            or_placeholder(&e.reasoning, "[no reasoning recorded]")
        ));
        ctx.push_str(&format!(
            "- **Trend**: {}\n\n",
            or_placeholder(&e.trend, "[no trend recorded]")
        ));
    }

    ctx
}

/// Render credit concentration and strategy mix for one cycle
pub fn format_cycle_analytics(designs: &[Design]) -> String {
    let Some(winner) = designs.iter().min_by_key(|d| d.rank) else {
        return String::new();
    };

    let credits: Vec<f64> = designs.iter().map(|d| d.credits as f64).collect();
    let total: f64 = credits.iter().sum();

    let mut ctx = String::from("## Cycle Analytics\n\n");
    ctx.push_str(&format!(
        "- **Credit concentration (Gini)**: {:.3}\n",
        stats::gini_coefficient(&credits)
    ));
    ctx.push_str(&format!(
        "- **Winner share**: \"{}\" took {}% of {} credits\n",
        winner.name,
        stats::percentage(winner.credits as f64, total),
        total
    ));

    let mix: Vec<String> = Strategy::ALL
        .iter()
        .map(|s| {
            let n = designs.iter().filter(|d| d.strategy == *s).count();
            format!("{} {}%", s, stats::percentage(n as f64, designs.len() as f64))
        })
        .collect();
    ctx.push_str(&format!("- **Strategy mix**: {}\n", mix.join(" | ")));

    ctx
}

/// All learning state relevant to one agent's next decision
#[derive(Debug, Clone, Copy, Default)]
pub struct LearningContext<'a> {
    pub q_table: Option<&'a QTable>,
    pub effectiveness: Option<&'a TraitEffectiveness>,
    pub precedents: &'a [ScoredPattern],
    pub last_cycle: &'a [Design],
}

impl<'a> LearningContext<'a> {
    pub fn with_q_table(mut self, grid: &'a QTable) -> Self {
        self.q_table = Some(grid);
        self
    }

    pub fn with_effectiveness(mut self, state: &'a TraitEffectiveness) -> Self {
        self.effectiveness = Some(state);
        self
    }

    pub fn with_precedents(mut self, precedents: &'a [ScoredPattern]) -> Self {
        self.precedents = precedents;
        self
    }

    pub fn with_last_cycle(mut self, designs: &'a [Design]) -> Self {
        self.last_cycle = designs;
        self
    }

    /// Format as context string for injection into an agent prompt
    ///
    /// Sections with nothing to report are left out entirely.
    pub fn as_context_string(&self) -> String {
        let sections = [
            self.q_table.map(format_q_table).unwrap_or_default(),
            self.effectiveness
                .map(format_trait_effectiveness)
                .unwrap_or_default(),
            format_pattern_precedents(self.precedents),
            format_cycle_analytics(self.last_cycle),
        ];

        sections
            .into_iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
