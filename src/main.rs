use clap::Parser;
use std::path::PathBuf;
use tracing::error;

use zoo_intake::logging::init_logging;
use zoo_intake::{Config, Overrides, Pipeline, ReportFormat, RunSummary};

#[derive(Parser)]
#[command(name = "zoo-intake")]
#[command(about = "Names, tags and groups newly arriving animals into a population report")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./zoo-intake.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name catalog file
    #[arg(long)]
    names: Option<PathBuf>,

    /// Arrivals file
    #[arg(long)]
    arrivals: Option<PathBuf>,

    /// Report output file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,

    /// Debug-level diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Error loading configuration, using defaults: {:#}", e);
            Config::default()
        }
    };

    let config = config.with_overrides(Overrides {
        names_file: cli.names,
        arrivals_file: cli.arrivals,
        report_file: cli.output,
        format: cli.format,
    });

    let summary = Pipeline::new(config).run();
    print_summary(&summary);
}

fn print_summary(summary: &RunSummary) {
    println!("📊 Intake summary");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Accepted: {}", summary.accepted);
    println!("   Rejected: {}", summary.rejected);
    println!("   Habitats: {}", summary.habitats);
    for (species, count) in &summary.species_counts {
        println!("     {}: {}", species, count);
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if summary.report_written {
        println!(
            "✅ Zoo population report generated successfully in {}",
            summary.report_file.display()
        );
    } else {
        println!(
            "⚠️  Zoo population report could not be written to {}",
            summary.report_file.display()
        );
    }
}
