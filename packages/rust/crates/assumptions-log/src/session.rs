//! Per-run extraction state.
//!
//! A session owns, for each registered kind, the raw matches found so far
//! and the fragments rendered from them. Nothing here outlives a run and no
//! list is shared between kinds.

use crate::grammar::MatchFields;
use crate::registry::LogItemRegistry;

/// One annotation found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    /// Path relative to the search root's parent, `/`-separated
    pub file_path: String,
    /// Captured fields
    pub fields: MatchFields,
}

#[derive(Debug, Default, Clone)]
struct KindSlot {
    matched: Vec<RawMatch>,
    rendered: Vec<String>,
}

/// Matches and rendered fragments for every registered kind.
#[derive(Debug, Default, Clone)]
pub struct ExtractionSession {
    slots: Vec<KindSlot>,
}

impl ExtractionSession {
    /// Empty session with one slot per registered kind.
    #[must_use]
    pub fn new(registry: &LogItemRegistry) -> Self {
        let mut session = Self::default();
        session.sync_with(registry);
        session
    }

    /// Add slots for kinds registered since the session was created.
    pub fn sync_with(&mut self, registry: &LogItemRegistry) {
        if self.slots.len() < registry.len() {
            self.slots.resize_with(registry.len(), KindSlot::default);
        }
    }

    /// Record a match for the kind at `kind` (registration index).
    pub fn push(&mut self, kind: usize, raw: RawMatch) {
        if kind >= self.slots.len() {
            self.slots.resize_with(kind + 1, KindSlot::default);
        }
        self.slots[kind].matched.push(raw);
    }

    /// Matches recorded for a kind, in discovery order.
    #[must_use]
    pub fn matched(&self, kind: usize) -> &[RawMatch] {
        self.slots.get(kind).map_or(&[], |slot| slot.matched.as_slice())
    }

    /// Fragments rendered by the last [`finalize`](Self::finalize).
    #[must_use]
    pub fn rendered(&self, kind: usize) -> &[String] {
        self.slots.get(kind).map_or(&[], |slot| slot.rendered.as_slice())
    }

    /// Total matches across all kinds.
    #[must_use]
    pub fn total_matches(&self) -> usize {
        self.slots.iter().map(|slot| slot.matched.len()).sum()
    }

    /// Render every kind's matches, numbering from 1 per kind.
    ///
    /// Rendering replaces earlier results, so finalizing twice yields the
    /// same fragments.
    pub fn finalize(&mut self, registry: &LogItemRegistry) {
        self.sync_with(registry);
        for (item, slot) in registry.iter().zip(self.slots.iter_mut()) {
            slot.rendered = slot
                .matched
                .iter()
                .enumerate()
                .map(|(idx, raw)| item.render(idx + 1, &raw.file_path, &raw.fields))
                .collect();
            tracing::debug!(kind = item.name(), count = slot.rendered.len(), "items rendered");
        }
    }
}
