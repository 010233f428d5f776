// 🦁 Animal Record - one parsed line from the arrivals feed
// Name and unique ID start empty and are filled in by the enrichment stages.

use chrono::NaiveDate;
use serde::Serialize;

// ============================================================================
// ANIMAL RECORD
// ============================================================================

/// AnimalRecord - a newly arriving animal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalRecord {
    // Captured from the arrivals line
    pub species: String,
    pub age: u32,
    pub sex: String,
    pub color: String,
    pub weight: f64,
    pub origin: String,
    pub arrival_date: NaiveDate,
    pub birth_season: String,

    // Assigned later
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
}

impl AnimalRecord {
    /// Create a record with every captured field; name and ID stay unset
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        species: String,
        age: u32,
        sex: String,
        color: String,
        weight: f64,
        origin: String,
        arrival_date: NaiveDate,
        birth_season: String,
    ) -> Self {
        AnimalRecord {
            species,
            age,
            sex,
            color,
            weight,
            origin,
            arrival_date,
            birth_season,
            name: None,
            unique_id: None,
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    pub fn set_unique_id(&mut self, id: String) {
        self.unique_id = Some(id);
    }

    /// Display name, or a dash before assignment
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("-")
    }

    /// Unique ID, or a dash before assignment
    pub fn display_id(&self) -> &str {
        self.unique_id.as_deref().unwrap_or("-")
    }

    /// 2-letter species code used as the ID prefix
    pub fn species_code(&self) -> String {
        species_code(&self.species)
    }
}

/// Species code: uppercased first two characters of the species name.
/// Names shorter than two characters use the whole name.
pub fn species_code(species: &str) -> String {
    species.chars().take(2).collect::<String>().to_uppercase()
}

// ============================================================================
// TESTS
// ============================================================================
