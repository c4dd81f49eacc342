use rustc_hash::FxHashMap;

use crate::puzzle::Fingerprint;

/// Fingerprints already admitted to a frontier, with the depth each was
/// first recorded at. Owned by a single search run.
#[derive(Debug, Default)]
pub struct VisitedSet {
    depths: FxHashMap<Fingerprint, u32>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key` at `depth`. Returns false, leaving the existing depth
    /// untouched, if `key` was already present.
    pub fn insert(&mut self, key: Fingerprint, depth: u32) -> bool {
        match self.depths.entry(key) {
            std::collections::hash_map::Entry::Occupied(_) => false,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(depth);
                true
            }
        }
    }

    pub fn contains(&self, key: &Fingerprint) -> bool {
        self.depths.contains_key(key)
    }

    pub fn depth_of(&self, key: &Fingerprint) -> Option<u32> {
        self.depths.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }
}
