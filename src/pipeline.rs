// 🚚 Intake Pipeline - parse → name → ID → group → render
//
// The pipeline owns every piece of run state: catalog, batch, rejections,
// species tally and habitats. Each stage absorbs its own failures so a run
// always reaches the report stage with whatever data survived.

use crate::animal::AnimalRecord;
use crate::catalog::NameCatalog;
use crate::config::Config;
use crate::habitat::HabitatOrganizer;
use crate::ids::{find_prefix_collisions, IdGenerator};
use crate::naming::NameAssigner;
use crate::parser::{ArrivalParser, RejectedLine};
use crate::report::write_report;
use indexmap::IndexMap;
use std::path::PathBuf;
use tracing::{error, info, warn};

// ============================================================================
// RUN SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Records that made it into the report
    pub accepted: usize,

    /// Lines rejected by the parser
    pub rejected: usize,

    pub habitats: usize,

    /// Accepted records per species, first-seen order
    pub species_counts: IndexMap<String, usize>,

    pub report_file: PathBuf,
    pub report_written: bool,
}

// ============================================================================
// PIPELINE
// ============================================================================

pub struct Pipeline {
    config: Config,
    catalog: NameCatalog,
    batch: Vec<AnimalRecord>,
    rejected: Vec<RejectedLine>,
    species_counts: IndexMap<String, usize>,
    habitats: HabitatOrganizer,
}

impl Pipeline {
    pub fn new(config: Config) -> Self {
        Pipeline {
            config,
            catalog: NameCatalog::new(),
            batch: Vec::new(),
            rejected: Vec::new(),
            species_counts: IndexMap::new(),
            habitats: HabitatOrganizer::new(),
        }
    }

    pub fn catalog(&self) -> &NameCatalog {
        &self.catalog
    }

    pub fn batch(&self) -> &[AnimalRecord] {
        &self.batch
    }

    pub fn rejected(&self) -> &[RejectedLine] {
        &self.rejected
    }

    pub fn habitats(&self) -> &HabitatOrganizer {
        &self.habitats
    }

    /// Stage 1: name catalog. A missing or unreadable file leaves it empty.
    pub fn load_catalog(&mut self) {
        match NameCatalog::load(&self.config.names_file) {
            Ok(catalog) => {
                info!(
                    species = catalog.species_count(),
                    names = catalog.name_count(),
                    "Loaded name catalog"
                );
                self.catalog = catalog;
            }
            Err(e) => {
                error!("Error loading animal names: {:#}", e);
                self.catalog = NameCatalog::new();
            }
        }
    }

    /// Stage 2: arrivals feed. A missing or unreadable file leaves the batch empty.
    pub fn parse_arrivals(&mut self) {
        match ArrivalParser::new().parse_file(&self.config.arrivals_file) {
            Ok(outcome) => {
                info!(
                    accepted = outcome.accepted_count(),
                    rejected = outcome.rejected_count(),
                    "Processed arriving animals"
                );
                self.batch = outcome.records;
                self.rejected = outcome.rejected;
                self.species_counts = outcome.species_counts;
            }
            Err(e) => {
                error!("Error processing arriving animals: {:#}", e);
                self.batch.clear();
                self.rejected.clear();
                self.species_counts.clear();
            }
        }
    }

    /// Stage 3: display names
    pub fn assign_names(&mut self) {
        NameAssigner::new(&self.catalog).assign(&mut self.batch);
    }

    /// Stage 4: unique IDs, then report any species sharing a code
    pub fn assign_ids(&mut self) {
        IdGenerator::new().assign(&mut self.batch);

        for (code, species) in find_prefix_collisions(&self.batch) {
            warn!(
                code = %code,
                "Species share an ID prefix, IDs may repeat across them: {}",
                species.join(", ")
            );
        }
    }

    /// Stage 5: move the batch into habitats. Habitats from an earlier run
    /// are replaced.
    pub fn organize(&mut self) {
        self.habitats = HabitatOrganizer::new();
        for animal in std::mem::take(&mut self.batch) {
            self.habitats.place(animal);
        }
    }

    /// Stage 6: write the report. Returns whether it was written.
    pub fn write_report(&self) -> bool {
        match write_report(
            &self.config.report_file,
            &self.habitats,
            &self.species_counts,
            self.config.format,
        ) {
            Ok(()) => {
                info!(
                    path = %self.config.report_file.display(),
                    format = self.config.format.as_str(),
                    "Wrote population report"
                );
                true
            }
            Err(e) => {
                error!("Error writing zoo report: {:#}", e);
                false
            }
        }
    }

    /// Run every stage in order. Never fails; problems are logged and
    /// reflected in the summary. Each run starts from the input files again.
    pub fn run(&mut self) -> RunSummary {
        self.load_catalog();
        self.parse_arrivals();
        self.assign_names();
        self.assign_ids();
        self.organize();
        let report_written = self.write_report();

        for (species, count) in &self.species_counts {
            info!(species = %species, count = *count, "Species tally");
        }

        RunSummary {
            accepted: self.habitats.animal_count(),
            rejected: self.rejected.len(),
            habitats: self.habitats.habitat_count(),
            species_counts: self.species_counts.clone(),
            report_file: self.config.report_file.clone(),
            report_written,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
