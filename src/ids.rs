// 🔖 ID Generator - species code + per-species running counter
//
// Lion, Lion, Tiger → LI01, LI02, TI01
//
// The code is only the first two letters of the species, so species such as
// "Lion" and "Lizard" share the prefix "LI" and can produce the same ID.
// That behavior is kept; `find_prefix_collisions` reports it.

use crate::animal::{species_code, AnimalRecord};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Format an ID: `<CODE><counter, at least 2 digits>`
pub fn format_id(code: &str, counter: usize) -> String {
    format!("{}{:02}", code, counter)
}

pub struct IdGenerator {
    /// Animals seen so far per species (full species name, not the code)
    counters: HashMap<String, usize>,
}

impl IdGenerator {
    pub fn new() -> Self {
        IdGenerator {
            counters: HashMap::new(),
        }
    }

    /// ID for the next animal of `species`
    pub fn next_id(&mut self, species: &str) -> String {
        let counter = self.counters.entry(species.to_string()).or_insert(0);
        *counter += 1;
        format_id(&species_code(species), *counter)
    }

    pub fn assign(&mut self, animals: &mut [AnimalRecord]) {
        for animal in animals.iter_mut() {
            let id = self.next_id(&animal.species);
            animal.set_unique_id(id);
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Assign IDs to a whole batch with fresh counters
pub fn assign_ids(animals: &mut [AnimalRecord]) {
    IdGenerator::new().assign(animals);
}

/// Species codes shared by more than one distinct species.
///
/// Returns code → species (first-seen order) for every colliding code.
pub fn find_prefix_collisions(animals: &[AnimalRecord]) -> IndexMap<String, Vec<String>> {
    let mut by_code: IndexMap<String, Vec<String>> = IndexMap::new();

    for animal in animals {
        let species = by_code.entry(animal.species_code()).or_default();
        if !species.contains(&animal.species) {
            species.push(animal.species.clone());
        }
    }

    by_code.retain(|_, species| species.len() > 1);
    by_code
}

// ============================================================================
// TESTS
// ============================================================================
