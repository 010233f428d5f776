// 🏷️ Name Assigner - hands out catalog names in arrival order
//
// Catalog hit      → next unused name for the species
// Catalog exhausted → "<Species> #<k>", k counting overflow animals from 1
// No catalog entry → "Unnamed <Species>"

use crate::animal::AnimalRecord;
use crate::catalog::NameCatalog;
use std::collections::HashMap;
use tracing::debug;

pub struct NameAssigner<'a> {
    catalog: &'a NameCatalog,

    /// How many animals of each catalogued species have been named so far
    cursors: HashMap<String, usize>,
}

impl<'a> NameAssigner<'a> {
    pub fn new(catalog: &'a NameCatalog) -> Self {
        NameAssigner {
            catalog,
            cursors: HashMap::new(),
        }
    }

    /// Name for the next animal of `species`, advancing that species' cursor
    pub fn next_name(&mut self, species: &str) -> String {
        let Some(names) = self.catalog.names_for(species) else {
            return format!("Unnamed {}", species);
        };

        let cursor = self.cursors.entry(species.to_string()).or_insert(0);
        let index = *cursor;
        *cursor += 1;

        match names.get(index) {
            Some(name) => name.clone(),
            None => {
                let overflow = index + 1 - names.len();
                debug!(species, overflow, "Name catalog exhausted, using placeholder");
                format!("{} #{}", species, overflow)
            }
        }
    }

    /// Name every record in order. Assignment is total: no record is skipped.
    pub fn assign(&mut self, animals: &mut [AnimalRecord]) {
        for animal in animals.iter_mut() {
            let name = self.next_name(&animal.species);
            animal.set_name(name);
        }
    }
}

/// Assign names to a whole batch with a fresh set of cursors
pub fn assign_names(animals: &mut [AnimalRecord], catalog: &NameCatalog) {
    NameAssigner::new(catalog).assign(animals);
}

// ============================================================================
// TESTS
// ============================================================================
