//! Genome snapshots
//!
//! A [`GenomeSnapshot`] is an immutable full-roster capture of every
//! agent's genome. The [`SnapshotLog`] starts with one capture taken
//! before the first cycle and gains exactly one per processed cycle.

use atelier_common::{stats, Agent, Genome, Trait};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One agent's genome inside a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotEntry {
    pub agent_id: u32,
    pub name: String,
    pub genome: Genome,
}

/// Immutable capture of the whole roster
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenomeSnapshot {
    /// Cycle after which the capture was taken (0 = before the first cycle)
    cycle: u32,
    captured_at: DateTime<Utc>,
    entries: Vec<SnapshotEntry>,
}

impl GenomeSnapshot {
    /// Copy out the current genomes of `agents`
    pub fn capture(cycle: u32, agents: &[Agent]) -> Self {
        Self {
            cycle,
            captured_at: Utc::now(),
            entries: agents
                .iter()
                .map(|a| SnapshotEntry {
                    agent_id: a.id,
                    name: a.name.clone(),
                    genome: a.genome.clone(),
                })
                .collect(),
        }
    }

    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    /// Genome of an agent in this capture
    pub fn genome_of(&self, agent_id: u32) -> Option<&Genome> {
        self.entries
            .iter()
            .find(|e| e.agent_id == agent_id)
            .map(|e| &e.genome)
    }
}

/// Ordered sequence of roster snapshots
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotLog {
    snapshots: Vec<GenomeSnapshot>,
}

impl SnapshotLog {
    /// Start a log with the pre-competition capture
    pub fn new(agents: &[Agent]) -> Self {
        Self {
            snapshots: vec![GenomeSnapshot::capture(0, agents)],
        }
    }

    /// Append a post-cycle capture
    pub fn record(&mut self, cycle: u32, agents: &[Agent]) {
        self.snapshots.push(GenomeSnapshot::capture(cycle, agents));
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn latest(&self) -> Option<&GenomeSnapshot> {
        self.snapshots.last()
    }

    /// Capture taken after `cycle` (0 = initial)
    pub fn at_cycle(&self, cycle: u32) -> Option<&GenomeSnapshot> {
        self.snapshots.iter().rev().find(|s| s.cycle == cycle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GenomeSnapshot> {
        self.snapshots.iter()
    }

    /// Trait value of one agent in every capture that contains it, as
    /// `(cycle, value)` pairs in log order
    pub fn trait_trajectory(&self, agent_id: u32, t: Trait) -> Vec<(u32, i32)> {
        self.snapshots
            .iter()
            .filter_map(|s| s.genome_of(agent_id).map(|g| (s.cycle, g.get(t))))
            .collect()
    }

    /// Least-squares drift of a trait per cycle across the log
    pub fn trait_trend(&self, agent_id: u32, t: Trait) -> f64 {
        let (xs, ys): (Vec<f64>, Vec<f64>) = self
            .trait_trajectory(agent_id, t)
            .into_iter()
            .map(|(c, v)| (c as f64, v as f64))
            .unzip();
        stats::linear_slope(&xs, &ys)
    }

    /// Change of a trait between two captured cycles
    pub fn shift_between(&self, agent_id: u32, t: Trait, from: u32, to: u32) -> Option<i32> {
        let before = self.at_cycle(from)?.genome_of(agent_id)?.get(t);
        let after = self.at_cycle(to)?.genome_of(agent_id)?.get(t);
        Some(after - before)
    }
}
