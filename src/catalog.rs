// 📖 Name Catalog - per-species pool of reusable display names
//
// File format:
//   Lion Names:
//   Leo, Mia, Simba
//   Nala
//
//   Tiger Names:
//   Rajah, Shere Khan

use crate::parser::decode_line;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

const HEADER_SUFFIX: &str = " Names:";

// ============================================================================
// NAME CATALOG
// ============================================================================

/// Mapping species → ordered candidate names (file order)
#[derive(Debug, Clone, Default, Serialize)]
pub struct NameCatalog {
    names: IndexMap<String, Vec<String>>,
}

impl NameCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from disk
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open name catalog: {}", path.display()))?;

        Self::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to read name catalog: {}", path.display()))
    }

    /// Parse catalog blocks from any buffered reader
    ///
    /// Lines outside a block are ignored. A `<Species> Names:` header sets the
    /// current species; following non-blank lines are comma-separated names.
    /// Lines that are not valid UTF-8 are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut catalog = NameCatalog::new();
        let mut current: Option<String> = None;

        for (index, chunk) in reader.split(b'\n').enumerate() {
            let line = match decode_line(chunk?) {
                Ok(line) => line,
                Err((raw_line, reason)) => {
                    warn!(line = index + 1, "Skipping unreadable name catalog line: {} - {}", reason, raw_line);
                    continue;
                }
            };
            let line = line.trim();

            if let Some(species) = parse_header(line) {
                catalog.names.entry(species.clone()).or_default();
                current = Some(species);
                continue;
            }

            let Some(species) = current.as_ref() else {
                continue;
            };

            if line.is_empty() {
                continue;
            }

            let names = line
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string);

            catalog.names.entry(species.clone()).or_default().extend(names);
        }

        Ok(catalog)
    }

    /// Parse catalog text held in memory
    pub fn parse(text: &str) -> Self {
        // Reading from a byte slice cannot fail
        Self::from_reader(text.as_bytes()).unwrap_or_default()
    }

    /// Names available for a species, `None` if the species has no block
    pub fn names_for(&self, species: &str) -> Option<&[String]> {
        self.names.get(species).map(Vec::as_slice)
    }

    pub fn contains(&self, species: &str) -> bool {
        self.names.contains_key(species)
    }

    /// Number of species with a block
    pub fn species_count(&self) -> usize {
        self.names.len()
    }

    /// Total names across all species
    pub fn name_count(&self) -> usize {
        self.names.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// `"Lion Names:"` → `Some("Lion")`
fn parse_header(line: &str) -> Option<String> {
    line.strip_suffix(HEADER_SUFFIX)
        .map(|species| species.trim().to_string())
}

// ============================================================================
// TESTS
// ============================================================================
