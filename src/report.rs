// 📝 Report Renderer - population report, one block per habitat
//
// Text layout:
//   Habitat: Lion (2 animals)
//     Leo [LI01] 3 years old, M, Golden, 180.5 kg, from Serengeti, Tanzania, arrived 2023-05-01, born in Spring
//     Mia [LI02] ...
//
// Blocks are separated by a blank line.

use crate::animal::AnimalRecord;
use crate::habitat::{Habitat, HabitatOrganizer};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// ============================================================================
// FORMAT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
        }
    }
}

// ============================================================================
// TEXT RENDERING
// ============================================================================

/// One line per animal: name, ID and every captured attribute
pub fn render_animal(animal: &AnimalRecord) -> String {
    format!(
        "{} [{}] {} years old, {}, {}, {} kg, from {}, arrived {}, born in {}",
        animal.display_name(),
        animal.display_id(),
        animal.age,
        animal.sex,
        animal.color,
        animal.weight,
        animal.origin,
        animal.arrival_date.format("%Y-%m-%d"),
        animal.birth_season,
    )
}

/// Header line plus one indented line per member
pub fn render_habitat(habitat: &Habitat) -> String {
    let noun = if habitat.len() == 1 { "animal" } else { "animals" };
    let mut block = format!("Habitat: {} ({} {})\n", habitat.species, habitat.len(), noun);

    for animal in &habitat.animals {
        block.push_str("  ");
        block.push_str(&render_animal(animal));
        block.push('\n');
    }

    block
}

/// Whole text report
pub fn render_text(organizer: &HabitatOrganizer) -> String {
    let mut out = String::new();
    for habitat in organizer.habitats() {
        out.push_str(&render_habitat(habitat));
        out.push('\n');
    }
    out
}

// ============================================================================
// JSON RENDERING
// ============================================================================

#[derive(Serialize)]
struct JsonReport<'a> {
    habitats: Vec<&'a Habitat>,
    species_counts: &'a IndexMap<String, usize>,
}

pub fn render_json(
    organizer: &HabitatOrganizer,
    species_counts: &IndexMap<String, usize>,
) -> Result<String> {
    let report = JsonReport {
        habitats: organizer.habitats().collect(),
        species_counts,
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize report")
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Write the report. The file is created (or truncated) before anything is
/// rendered; a failure part-way leaves whatever was written so far.
pub fn write_report(
    path: &Path,
    organizer: &HabitatOrganizer,
    species_counts: &IndexMap<String, usize>,
    format: ReportFormat,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to open report for writing: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    match format {
        ReportFormat::Text => {
            writer.write_all(render_text(organizer).as_bytes())?;
        }
        ReportFormat::Json => {
            writer.write_all(render_json(organizer, species_counts)?.as_bytes())?;
            writer.write_all(b"\n")?;
        }
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write report: {}", path.display()))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habitat::organize;
    use chrono::NaiveDate;

    fn leo() -> AnimalRecord {
        let mut animal = AnimalRecord::new(
            "Lion".to_string(),
            3,
            "M".to_string(),
            "Golden".to_string(),
            180.5,
            "Serengeti, Tanzania".to_string(),
            NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            "Spring".to_string(),
        );
        animal.set_name("Leo".to_string());
        animal.set_unique_id("LI01".to_string());
        animal
    }

    fn counts(pairs: &[(&str, usize)]) -> IndexMap<String, usize> {
        pairs.iter().map(|(s, c)| (s.to_string(), *c)).collect()
    }

    #[test]
    fn test_render_animal_includes_every_attribute() {
        let line = render_animal(&leo());

        assert_eq!(
            line,
            "Leo [LI01] 3 years old, M, Golden, 180.5 kg, from Serengeti, Tanzania, \
             arrived 2023-05-01, born in Spring"
        );
    }

    #[test]
    fn test_render_habitat_block() {
        let organizer = organize(vec![leo()]);
        let block = render_habitat(organizer.get("Lion").unwrap());

        assert!(block.starts_with("Habitat: Lion (1 animal)\n"));
        assert!(block.contains("  Leo [LI01]"));
        assert!(block.ends_with('\n'));
    }

    #[test]
    fn test_blocks_separated_by_blank_line() {
        let mut bear = leo();
        bear.species = "Bear".to_string();
        let organizer = organize(vec![leo(), bear]);

        let text = render_text(&organizer);
        let blocks: Vec<&str> = text.trim_end().split("\n\n").collect();

        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("Habitat: Lion"));
        assert!(blocks[1].starts_with("Habitat: Bear"));
    }

    #[test]
    fn test_render_json() {
        let organizer = organize(vec![leo()]);
        let json = render_json(&organizer, &counts(&[("Lion", 1)])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["habitats"][0]["species"], "Lion");
        assert_eq!(value["habitats"][0]["animals"][0]["name"], "Leo");
        assert_eq!(value["habitats"][0]["animals"][0]["unique_id"], "LI01");
        assert_eq!(value["habitats"][0]["animals"][0]["arrival_date"], "2023-05-01");
        assert_eq!(value["species_counts"]["Lion"], 1);
    }

    #[test]
    fn test_write_text_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zooPopulation.txt");
        let organizer = organize(vec![leo()]);

        write_report(&path, &organizer, &counts(&[("Lion", 1)]), ReportFormat::Text).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, render_text(&organizer));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("report.txt");

        let result = write_report(&path, &HabitatOrganizer::new(), &IndexMap::new(), ReportFormat::Text);
        assert!(result.is_err());
    }
}
