use crate::model::leaf::LeafKey;
use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

/// Energy in joules for every leaf of one estimation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnergyTable {
    samples: BTreeMap<LeafKey, f64>,
}

impl EnergyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the key was already present; the table is left unchanged.
    pub fn insert(&mut self, key: LeafKey, joules: f64) -> bool {
        if self.samples.contains_key(&key) {
            return false;
        }
        self.samples.insert(key, joules);
        true
    }

    #[cfg(test)]
    pub fn get(&self, key: &LeafKey) -> Option<f64> {
        self.samples.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Leaves in estimation order.
    pub fn iter(&self) -> Iter<'_, LeafKey, f64> {
        self.samples.iter()
    }

    pub fn total(&self) -> f64 {
        self.samples.values().sum()
    }
}
