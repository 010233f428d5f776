// 🏞️ Habitat Organizer - groups animals by species
// Habitats are created on first sighting and iterate in first-seen order.

use crate::animal::AnimalRecord;
use indexmap::IndexMap;
use serde::Serialize;

/// All animals of one species, in arrival order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Habitat {
    pub species: String,
    pub animals: Vec<AnimalRecord>,
}

impl Habitat {
    pub fn new(species: String) -> Self {
        Habitat {
            species,
            animals: Vec::new(),
        }
    }

    pub fn add_animal(&mut self, animal: AnimalRecord) {
        self.animals.push(animal);
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}

/// Species → habitat, in the order species were first encountered
#[derive(Debug, Clone, Default, Serialize)]
pub struct HabitatOrganizer {
    habitats: IndexMap<String, Habitat>,
}

impl HabitatOrganizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an animal in its species' habitat, creating the habitat if needed
    pub fn place(&mut self, animal: AnimalRecord) {
        let species = animal.species.clone();
        self.habitats
            .entry(species.clone())
            .or_insert_with(|| Habitat::new(species))
            .add_animal(animal);
    }

    pub fn get(&self, species: &str) -> Option<&Habitat> {
        self.habitats.get(species)
    }

    pub fn habitats(&self) -> impl Iterator<Item = &Habitat> {
        self.habitats.values()
    }

    pub fn habitat_count(&self) -> usize {
        self.habitats.len()
    }

    pub fn animal_count(&self) -> usize {
        self.habitats.values().map(Habitat::len).sum()
    }
}

/// Group a batch into habitats, preserving arrival order inside each one
pub fn organize<I>(animals: I) -> HabitatOrganizer
where
    I: IntoIterator<Item = AnimalRecord>,
{
    let mut organizer = HabitatOrganizer::new();
    for animal in animals {
        organizer.place(animal);
    }
    organizer
}
