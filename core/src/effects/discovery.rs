//! Discovery panel model
//!
//! Filters and sorts the snapshot for the "all detected buffs" window and
//! attaches each buff's classification. The host draws the rows.

use serde::{Deserialize, Serialize};
use showbuff_types::{Language, Text};

use super::classifier::{EffectClass, classify};
use super::snapshot::SnapshotEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Ascending by internal name
    #[default]
    Name,
    /// Descending by stack count
    Stacks,
    /// Ascending by definition type
    Type,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [Self::Name, Self::Stacks, Self::Type];

    pub fn label(self, language: Language) -> &'static str {
        match self {
            Self::Name => Text::SortByName.get(language),
            Self::Stacks => Text::SortByStacks.get(language),
            Self::Type => Text::SortByType.get(language),
        }
    }
}

/// Search and sort state of the discovery window
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryQuery {
    pub search: String,
    pub sort: SortMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryRow {
    pub name: String,
    pub display_label: String,
    pub stack_count: u32,
    pub definition_type: i32,
    pub class: EffectClass,
}

impl DiscoveryRow {
    fn from_entry(entry: &SnapshotEntry) -> Self {
        Self {
            name: entry.name.clone(),
            display_label: entry.display_label.clone(),
            stack_count: entry.stack_count,
            definition_type: entry.definition_type,
            class: classify(&entry.name),
        }
    }
}

impl DiscoveryQuery {
    fn matches(&self, entry: &SnapshotEntry) -> bool {
        if self.search.trim().is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        entry.name.to_lowercase().contains(&needle)
            || entry.display_label.to_lowercase().contains(&needle)
    }

    /// Apply search and sort to the snapshot. Sorting is stable, so ties keep
    /// snapshot order (newest first).
    pub fn rows(&self, entries: &[SnapshotEntry]) -> Vec<DiscoveryRow> {
        let mut rows: Vec<DiscoveryRow> = entries
            .iter()
            .filter(|entry| self.matches(entry))
            .map(DiscoveryRow::from_entry)
            .collect();

        match self.sort {
            SortMode::Name => rows.sort_by(|a, b| a.name.cmp(&b.name)),
            SortMode::Stacks => rows.sort_by(|a, b| b.stack_count.cmp(&a.stack_count)),
            SortMode::Type => rows.sort_by_key(|row| row.definition_type),
        }
        rows
    }
}
