// ⚙️ Configuration - input/output paths and report format
//
// Precedence: command line > config file > defaults.
//
// zoo-intake.toml:
//   names_file = "animalNames.txt"
//   arrivals_file = "arrivingAnimals.txt"
//   report_file = "zooPopulation.txt"
//   format = "text"

use crate::report::ReportFormat;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "zoo-intake.toml";
pub const DEFAULT_NAMES_FILE: &str = "animalNames.txt";
pub const DEFAULT_ARRIVALS_FILE: &str = "arrivingAnimals.txt";
pub const DEFAULT_REPORT_FILE: &str = "zooPopulation.txt";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Name catalog input
    pub names_file: PathBuf,

    /// Arrivals feed input
    pub arrivals_file: PathBuf,

    /// Population report output
    pub report_file: PathBuf,

    pub format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            names_file: PathBuf::from(DEFAULT_NAMES_FILE),
            arrivals_file: PathBuf::from(DEFAULT_ARRIVALS_FILE),
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
            format: ReportFormat::default(),
        }
    }
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub names_file: Option<PathBuf>,
    pub arrivals_file: Option<PathBuf>,
    pub report_file: Option<PathBuf>,
    pub format: Option<ReportFormat>,
}

impl Config {
    /// Parse TOML text; missing keys take their defaults
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid configuration")
    }

    /// Read a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `zoo-intake.toml` is used when
    /// present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(path) = overrides.names_file {
            self.names_file = path;
        }
        if let Some(path) = overrides.arrivals_file {
            self.arrivals_file = path;
        }
        if let Some(path) = overrides.report_file {
            self.report_file = path;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.names_file, PathBuf::from("animalNames.txt"));
        assert_eq!(config.arrivals_file, PathBuf::from("arrivingAnimals.txt"));
        assert_eq!(config.report_file, PathBuf::from("zooPopulation.txt"));
        assert_eq!(config.format, ReportFormat::Text);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml("report_file = \"out/report.json\"\nformat = \"json\"\n").unwrap();

        assert_eq!(config.report_file, PathBuf::from("out/report.json"));
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.names_file, PathBuf::from(DEFAULT_NAMES_FILE));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Config::from_toml("output = \"x\"").is_err());
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::from_toml("names_file = \"from_file.txt\"")
            .unwrap()
            .with_overrides(Overrides {
                names_file: Some(PathBuf::from("from_cli.txt")),
                format: Some(ReportFormat::Json),
                ..Overrides::default()
            });

        assert_eq!(config.names_file, PathBuf::from("from_cli.txt"));
        assert_eq!(config.format, ReportFormat::Json);
        assert_eq!(config.arrivals_file, PathBuf::from(DEFAULT_ARRIVALS_FILE));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zoo.toml");
        fs::write(&path, "arrivals_file = \"feed.csv\"").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.arrivals_file, PathBuf::from("feed.csv"));
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
