use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use scamrank::data::{catalog::VariableCatalog, files};
use scamrank::ranking::{self, DeviationMode};
use scamrank::reference;
use scamrank::report;
use scamrank::stats;

#[derive(Parser, Debug)]
#[command(
    name = "scamrank",
    version = env!("CARGO_PKG_VERSION"),
    about = "Aggregates SCANTEC verification tables and ranks experiments against a reference",
    after_help = "The reference experiment is the one named twice, e.g.:\n\
                  scamrank 2013010100 2013013118 VTMP-500 CTRL CTRL EnKF EnSRF NCEP"
)]
struct Args {
    /// Start timestamp as embedded in the table file names (e.g. 2013010100).
    start_time: String,

    /// End timestamp as embedded in the table file names (e.g. 2013013118).
    end_time: String,

    /// Variable code to evaluate (e.g. VTMP-500).
    variable: String,

    /// Experiment directory names; name the reference twice.
    #[arg(required = true, num_args = 3..)]
    experiments: Vec<String>,

    /// Deviation operator used by the ranking.
    #[arg(long, value_enum, default_value_t = Deviation::Remainder)]
    deviation: Deviation,

    /// JSON file replacing the built-in variable catalog.
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Write the sample triples (for the diagram renderer) to this CSV file.
    #[arg(long, value_name = "FILE")]
    samples_out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Deviation {
    /// Historical operator: remainder of the larger value by the smaller.
    Remainder,
    /// Plain absolute difference.
    Absolute,
}

impl From<Deviation> for DeviationMode {
    fn from(d: Deviation) -> Self {
        match d {
            Deviation::Remainder => DeviationMode::Remainder,
            Deviation::Absolute => DeviationMode::AbsoluteDifference,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => VariableCatalog::from_json_file(path)?,
        None => VariableCatalog::builtin(),
    };
    let variable = catalog.resolve(&args.variable)?.clone();

    let split = reference::resolve(&args.experiments)?;
    let reference_set = files::resolve(&split.reference, &args.start_time, &args.end_time);
    let competitor_sets = files::resolve_all(&split.competitors, &args.start_time, &args.end_time);

    let aggregation = stats::aggregate(&catalog, &variable.code, &reference_set, &competitor_sets)?;

    print!("{}", report::render_summary(&variable, &aggregation));
    println!();

    if let Some(path) = &args.samples_out {
        report::write_samples_csv_file(path, &aggregation.samples)?;
        println!("wrote {} samples to {}", aggregation.samples.len(), path.display());
        println!();
    }

    let rankings = ranking::rank(
        &aggregation.reference,
        &aggregation.experiments,
        args.deviation.into(),
    )?;
    print!("{}", report::render_rankings(&rankings));

    Ok(())
}
