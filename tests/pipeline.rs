// End-to-end runs over temporary input files

use std::fs;
use std::path::Path;
use zoo_intake::{Config, Pipeline, ReportFormat};

fn run(dir: &Path, names: &str, arrivals: &str, format: ReportFormat) -> (zoo_intake::RunSummary, String) {
    let config = Config {
        names_file: dir.join("animalNames.txt"),
        arrivals_file: dir.join("arrivingAnimals.txt"),
        report_file: dir.join("zooPopulation.txt"),
        format,
    };
    fs::write(&config.names_file, names).unwrap();
    fs::write(&config.arrivals_file, arrivals).unwrap();

    let report_file = config.report_file.clone();
    let summary = Pipeline::new(config).run();
    let report = fs::read_to_string(report_file).unwrap();
    (summary, report)
}

#[test]
fn test_lion_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let arrivals = "Lion,3,M,Golden,180.5,\"Serengeti, Tanzania\",2023-05-01,Spring\n\
                    Lion,2,F,Golden,150.0,Kenya,2023-06-10,Summer\n";

    let (summary, report) = run(dir.path(), "Lion Names:\nLeo,Mia", arrivals, ReportFormat::Text);

    assert!(summary.report_written);
    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.habitats, 1);

    assert!(report.starts_with("Habitat: Lion (2 animals)\n"));
    assert!(report.contains("Leo [LI01] 3 years old, M, Golden, 180.5 kg, from Serengeti, Tanzania, arrived 2023-05-01, born in Spring"));
    assert!(report.contains("Mia [LI02] 2 years old, F, Golden, 150 kg, from Kenya, arrived 2023-06-10, born in Summer"));
    assert!(report.find("Leo [LI01]").unwrap() < report.find("Mia [LI02]").unwrap());
}

#[test]
fn test_bad_lines_are_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let arrivals = "Tiger,4,F,Orange,200.0,India,2023-03-03,Fall\n\
                    Tiger,1,M,Orange,90.0\n\
                    Tiger,old,M,Orange,90.0,India,2023-03-04,Winter\n\
                    Tiger,2,M,Orange,95.0,India,not-a-date,Winter\n\
                    Tiger,2,M,Orange,95.0,Nepal,2023-03-05,Winter\n";

    let (summary, report) = run(dir.path(), "Tiger Names:\nRajah\n", arrivals, ReportFormat::Text);

    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.rejected, 3);
    assert_eq!(summary.species_counts.get("Tiger"), Some(&2));

    assert!(report.contains("Rajah [TI01]"));
    assert!(report.contains("Tiger #1 [TI02]"));
    assert!(!report.contains("TI03"));
    assert_eq!(report.lines().filter(|l| l.starts_with("  ")).count(), 2);
}

#[test]
fn test_unknown_species_and_habitat_order() {
    let dir = tempfile::tempdir().unwrap();
    let arrivals = "Bear,5,M,Brown,300,Alaska,2024-01-15,Winter\n\
                    Lion,3,M,Golden,180.5,Kenya,2023-05-01,Spring\n\
                    Bear,6,F,Black,250,Yukon,2024-01-16,Winter\n";

    let (_, report) = run(dir.path(), "Lion Names:\nLeo\n", arrivals, ReportFormat::Text);

    let blocks: Vec<&str> = report.trim_end().split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].starts_with("Habitat: Bear (2 animals)"));
    assert!(blocks[0].contains("Unnamed Bear [BE01]"));
    assert!(blocks[0].contains("Unnamed Bear [BE02]"));
    assert!(blocks[1].starts_with("Habitat: Lion (1 animal)"));
    assert!(blocks[1].contains("Leo [LI01]"));
}

#[test]
fn test_missing_catalog_degrades_to_unnamed() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        names_file: dir.path().join("does_not_exist.txt"),
        arrivals_file: dir.path().join("arrivingAnimals.txt"),
        report_file: dir.path().join("zooPopulation.txt"),
        format: ReportFormat::Text,
    };
    fs::write(&config.arrivals_file, "Lion,3,M,Golden,180.5,Kenya,2023-05-01,Spring\n").unwrap();

    let summary = Pipeline::new(config.clone()).run();
    let report = fs::read_to_string(&config.report_file).unwrap();

    assert!(summary.report_written);
    assert!(report.contains("Unnamed Lion [LI01]"));
}

#[test]
fn test_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let arrivals = "Lion,3,M,Golden,180.5,\"Springfield, USA\",2023-05-01,Spring\n\
                    Lizard,1,F,Green,0.4,Mexico,2023-05-02,Spring\n";

    let (_, report) = run(dir.path(), "Lion Names:\nLeo\n", arrivals, ReportFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(value["habitats"][0]["animals"][0]["origin"], "Springfield, USA");
    assert_eq!(value["habitats"][0]["animals"][0]["unique_id"], "LI01");
    // Shared prefix is kept as-is
    assert_eq!(value["habitats"][1]["animals"][0]["unique_id"], "LI01");
    assert_eq!(value["habitats"][1]["animals"][0]["name"], "Unnamed Lizard");
    assert_eq!(value["species_counts"]["Lizard"], 1);
}
