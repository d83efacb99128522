//! Discovery snapshot of active buffs
//!
//! Keeps a deduplicated list of the buffs seen on the player, newest first.
//! Entries hold their position until the buff expires instead of being
//! re-sorted every tick, so the discovery list does not jump around.

use hashbrown::HashSet;
use serde::Serialize;
use tracing::debug;

use super::EffectInstance;

/// One deduplicated buff in the discovery list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry {
    pub name: String,
    pub display_label: String,
    /// Values observed at the last refresh
    pub stack_count: u32,
    pub definition_type: i32,
}

impl SnapshotEntry {
    fn from_instance(effect: &EffectInstance, definition_type: i32) -> Self {
        Self {
            name: effect.name.clone(),
            display_label: effect.display_label.clone(),
            stack_count: effect.stack_count,
            definition_type,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SnapshotCache {
    entries: Vec<SnapshotEntry>,
    frozen: bool,
    /// Names seen at the last change-detected refresh
    last_known: HashSet<String>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// While frozen, [`refresh`](Self::refresh) and [`observe`](Self::observe)
    /// leave the cache untouched.
    pub fn set_frozen(&mut self, frozen: bool) {
        if self.frozen != frozen {
            debug!(frozen, "Discovery snapshot freeze toggled");
        }
        self.frozen = frozen;
    }

    /// Rebuild the snapshot from the live buff list.
    ///
    /// Buffs without a name or without a resolved definition are ignored.
    /// Entries still live keep their relative order (and pick up the latest
    /// stack count), expired entries are dropped, and newly seen buffs are
    /// prepended in live order.
    pub fn refresh(&mut self, live: &[EffectInstance]) {
        if self.frozen {
            return;
        }

        let mut seen: HashSet<&str> = HashSet::new();
        let current: Vec<(&EffectInstance, i32)> = live
            .iter()
            .filter(|e| !e.name.is_empty())
            .filter_map(|e| e.definition_type.map(|t| (e, t)))
            .filter(|(e, _)| seen.insert(e.name.as_str()))
            .collect();

        let kept: Vec<SnapshotEntry> = self
            .entries
            .iter()
            .filter_map(|existing| {
                current
                    .iter()
                    .find(|(e, _)| e.name == existing.name)
                    .map(|(e, t)| SnapshotEntry {
                        stack_count: e.stack_count,
                        definition_type: *t,
                        ..existing.clone()
                    })
            })
            .collect();

        let kept_names: HashSet<String> = kept.iter().map(|e| e.name.clone()).collect();
        let mut combined: Vec<SnapshotEntry> = current
            .iter()
            .filter(|(e, _)| !kept_names.contains(e.name.as_str()))
            .map(|(e, t)| SnapshotEntry::from_instance(e, *t))
            .collect();
        let added = combined.len();
        let dropped = self.entries.len() - kept.len();
        combined.extend(kept);

        let mut unique: HashSet<String> = HashSet::new();
        combined.retain(|entry| unique.insert(entry.name.clone()));

        if added > 0 || dropped > 0 {
            debug!(added, dropped, total = combined.len(), "Discovery snapshot refreshed");
        }
        self.entries = combined;
    }

    /// Refresh only when the set of live buff names changed since the last
    /// observed refresh. Returns `true` if a refresh happened.
    ///
    /// Only buffs [`refresh`](Self::refresh) would keep are compared, so an
    /// unresolved buff coming or going does not trigger a refresh.
    pub fn observe(&mut self, live: &[EffectInstance]) -> bool {
        if self.frozen {
            return false;
        }

        let names: HashSet<String> = live
            .iter()
            .filter(|e| !e.name.is_empty() && e.definition_type.is_some())
            .map(|e| e.name.clone())
            .collect();
        if names == self.last_known {
            return false;
        }

        self.refresh(live);
        self.last_known = names;
        true
    }

    /// Drop every entry and the change-detection state
    pub fn clear(&mut self) {
        self.entries.clear();
        self.last_known.clear();
    }
}
