//! Reinforcement Grid
//!
//! Average credits per (strategy, category) pair, accumulated across
//! cycles. The grid is created eagerly for the full product, so every
//! cell exists from the start with a zero count.

use std::collections::BTreeMap;

use atelier_common::{Category, Design, GridError, Strategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One grid cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QTableEntry {
    pub total_credits: u64,
    pub count: u32,
    pub avg_credits: f64,
    pub last_cycle: u32,
}

impl QTableEntry {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Best cell and per-strategy averages over the non-empty cells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QTableSummary {
    pub best_strategy: Strategy,
    pub best_category: Category,
    pub best_avg_credits: f64,
    /// Mean of per-category averages, for strategies with any data
    pub strategy_averages: Vec<(Strategy, f64)>,
}

/// Strategy × category reinforcement grid
#[derive(Debug, Clone)]
pub struct QTable {
    cells: BTreeMap<(Strategy, Category), QTableEntry>,
}

impl Default for QTable {
    fn default() -> Self {
        Self::new()
    }
}

impl QTable {
    /// Create a zeroed grid over every strategy and category
    pub fn new() -> Self {
        let mut cells = BTreeMap::new();
        for strategy in Strategy::ALL {
            for category in Category::ALL {
                cells.insert((strategy, category), QTableEntry::default());
            }
        }
        Self { cells }
    }

    /// Fold one outcome into its cell
    pub fn record(&mut self, strategy: Strategy, category: Category, credits: u64, cycle: u32) {
        let cell = self.cells.entry((strategy, category)).or_default();
        cell.count += 1;
        cell.total_credits += credits;
        cell.avg_credits = cell.total_credits as f64 / cell.count as f64;
        cell.last_cycle = cycle;

        debug!(%strategy, %category, credits, avg = cell.avg_credits, "Updated reinforcement grid");
    }

    /// Fold a completed design into the grid
    pub fn record_design(&mut self, design: &Design, cycle: u32) -> Result<(), GridError> {
        let category = design
            .grid_category()
            .ok_or_else(|| GridError::UnknownCategory(design.category.clone()))?;
        self.record(design.strategy, category, design.credits, cycle);
        Ok(())
    }

    /// Fold every design of a cycle, stopping at the first unknown category
    pub fn record_cycle(&mut self, designs: &[Design], cycle: u32) -> Result<(), GridError> {
        for design in designs {
            self.record_design(design, cycle)?;
        }
        Ok(())
    }

    pub fn get(&self, strategy: Strategy, category: Category) -> Option<&QTableEntry> {
        self.cells.get(&(strategy, category))
    }

    /// Cells in grid order (strategy-major)
    pub fn iter(&self) -> impl Iterator<Item = (Strategy, Category, &QTableEntry)> {
        self.cells.iter().map(|((s, c), e)| (*s, *c, e))
    }

    /// Whether no outcome has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.cells.values().all(QTableEntry::is_empty)
    }

    /// Best combination and per-strategy averages; `None` for an empty grid
    pub fn summary(&self) -> Option<QTableSummary> {
        let mut best: Option<(Strategy, Category, f64)> = None;
        for (strategy, category, cell) in self.iter().filter(|(_, _, e)| !e.is_empty()) {
            match best {
                Some((_, _, avg)) if avg >= cell.avg_credits => {}
                _ => best = Some((strategy, category, cell.avg_credits)),
            }
        }
        let (best_strategy, best_category, best_avg_credits) = best?;

        let strategy_averages = Strategy::ALL
            .iter()
            .filter_map(|strategy| {
                let avgs: Vec<f64> = Category::ALL
                    .iter()
                    .filter_map(|c| self.get(*strategy, *c))
                    .filter(|e| !e.is_empty())
                    .map(|e| e.avg_credits)
                    .collect();
                if avgs.is_empty() {
                    None
                } else {
                    Some((*strategy, avgs.iter().sum::<f64>() / avgs.len() as f64))
                }
            })
            .collect();

        Some(QTableSummary {
            best_strategy,
            best_category,
            best_avg_credits,
            strategy_averages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_initialized_eagerly() {
        let grid = QTable::new();
        assert_eq!(grid.iter().count(), 12);
        assert!(grid.is_empty());
        assert!(grid.summary().is_none());
    }

    #[test]
    fn test_record_updates_average() {
        let mut grid = QTable::new();
        grid.record(Strategy::Explore, Category::Ring, 100, 1);
        grid.record(Strategy::Explore, Category::Ring, 50, 2);

        let cell = grid.get(Strategy::Explore, Category::Ring).unwrap();
        assert_eq!(cell.count, 2);
        assert_eq!(cell.total_credits, 150);
        assert_eq!(cell.avg_credits, 75.0);
        assert_eq!(cell.last_cycle, 2);
    }

    #[test]
    fn test_summary_best_and_strategy_means() {
        let mut grid = QTable::new();
        grid.record(Strategy::Explore, Category::Ring, 100, 1);
        grid.record(Strategy::Explore, Category::Pendant, 40, 1);
        grid.record(Strategy::Exploit, Category::Bracelet, 120, 1);

        let summary = grid.summary().unwrap();
        assert_eq!(summary.best_strategy, Strategy::Exploit);
        assert_eq!(summary.best_category, Category::Bracelet);
        assert_eq!(summary.best_avg_credits, 120.0);
        assert_eq!(
            summary.strategy_averages,
            vec![(Strategy::Exploit, 120.0), (Strategy::Explore, 70.0)]
        );
    }

    #[test]
    fn test_record_design_rejects_unknown_category() {
        let mut grid = QTable::new();
        let ok = Design::new(0, "Halo", "earrings", Strategy::Mutate).with_result(1, 30);
        let bad = Design::new(1, "Crown", "Tiara", Strategy::Mutate).with_result(2, 10);

        grid.record_design(&ok, 1).unwrap();
        assert_eq!(
            grid.record_design(&bad, 1),
            Err(GridError::UnknownCategory("Tiara".to_string()))
        );
        assert_eq!(grid.get(Strategy::Mutate, Category::Earrings).unwrap().count, 1);
    }
}
