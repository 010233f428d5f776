// Zoo Intake - Core Library
// Exposes the intake pipeline stages for the CLI and tests

pub mod animal;
pub mod catalog;
pub mod config;
pub mod error;
pub mod habitat;
pub mod ids;
pub mod logging;
pub mod naming;
pub mod parser;
pub mod pipeline;
pub mod report;

// Re-export commonly used types
pub use animal::{species_code, AnimalRecord};
pub use catalog::NameCatalog;
pub use config::{Config, Overrides};
pub use error::LineError;
pub use habitat::{organize, Habitat, HabitatOrganizer};
pub use ids::{assign_ids, find_prefix_collisions, format_id, IdGenerator};
pub use naming::{assign_names, NameAssigner};
pub use parser::{parse_line, tokenize_line, ArrivalParser, ParseOutcome, RejectedLine};
pub use pipeline::{Pipeline, RunSummary};
pub use report::{render_habitat, render_json, render_text, write_report, ReportFormat};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
