//! Pattern Archive Implementations
//!
//! Append-only storage for pattern bank entries. Entries are never
//! updated or deleted once archived.

use tracing::debug;
use uuid::Uuid;

use crate::domain::pattern::PatternBankEntry;

/// Trait for pattern archive backends
pub trait PatternArchive {
    /// Archive a new entry, returning its assigned id
    fn append(&mut self, entry: PatternBankEntry) -> Result<Uuid, ArchiveError>;

    /// All archived entries in insertion order
    fn entries(&self) -> &[PatternBankEntry];

    /// Entries from one cycle
    fn entries_for_cycle(&self, cycle: u32) -> Vec<&PatternBankEntry> {
        self.entries().iter().filter(|e| e.cycle == cycle).collect()
    }

    /// Number of archived entries
    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// Errors from archive operations
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Archive capacity exceeded: max {0}")]
    CapacityExceeded(usize),

    #[error("Entry confidence out of range: {0}")]
    InvalidConfidence(f64),
}

/// In-memory archive
///
/// Assigns time-ordered UUIDs and refuses entries past its capacity.
#[derive(Debug, Clone)]
pub struct InMemoryPatternArchive {
    entries: Vec<PatternBankEntry>,
    capacity: usize,
}

impl Default for InMemoryPatternArchive {
    fn default() -> Self {
        Self::new(crate::MAX_ARCHIVED_PATTERNS)
    }
}

impl InMemoryPatternArchive {
    /// Create an archive holding at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl PatternArchive for InMemoryPatternArchive {
    fn append(&mut self, mut entry: PatternBankEntry) -> Result<Uuid, ArchiveError> {
        if self.entries.len() >= self.capacity {
            return Err(ArchiveError::CapacityExceeded(self.capacity));
        }
        if !(0.0..=1.0).contains(&entry.confidence) {
            return Err(ArchiveError::InvalidConfidence(entry.confidence));
        }

        let id = Uuid::now_v7();
        entry.id = id;
        debug!(%id, cycle = entry.cycle, design = %entry.design_name, "Archived pattern");
        self.entries.push(entry);
        Ok(id)
    }

    fn entries(&self) -> &[PatternBankEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_common::Strategy;

    fn entry(cycle: u32) -> PatternBankEntry {
        PatternBankEntry::new(cycle, 1, "Halo", "Ring", Strategy::Explore)
    }

    #[test]
    fn test_append_assigns_ids() {
        let mut archive = InMemoryPatternArchive::default();
        let a = archive.append(entry(1)).unwrap();
        let b = archive.append(entry(2)).unwrap();

        assert_ne!(a, b);
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.entries()[0].id, a);
        assert_eq!(archive.entries_for_cycle(2).len(), 1);
    }

    #[test]
    fn test_capacity() {
        let mut archive = InMemoryPatternArchive::new(1);
        archive.append(entry(1)).unwrap();
        assert!(matches!(
            archive.append(entry(1)),
            Err(ArchiveError::CapacityExceeded(1))
        ));
    }

    #[test]
    fn test_rejects_bad_confidence() {
        let mut archive = InMemoryPatternArchive::default();
        let mut bad = entry(1);
        bad.confidence = 1.5;
        assert!(matches!(
            archive.append(bad),
            Err(ArchiveError::InvalidConfidence(_))
        ));
        assert!(archive.is_empty());
    }
}
