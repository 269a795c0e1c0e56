// CLI entrypoint: load the latest historical row, simulate, optimize, and
// print the denominated allocation report. Can also generate a synthetic
// data file for demos.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};

use budgetopt::data::{generate_csv, load_latest, SyntheticConfig};
use budgetopt::optimizer::{optimize, OptimizerConfig};
use budgetopt::report::AllocationReport;
use budgetopt::simulation::{simulate, SimulationConfig};
use budgetopt::Result;

#[derive(Debug, Parser)]
#[command(
    name = "budgetopt",
    about = "Monte Carlo budget allocation optimizer",
    version
)]
struct Args {
    /// Historical data CSV; the most recent (last) row is optimized.
    #[arg(long, default_value = "data/historical.csv")]
    data: PathBuf,

    /// Budget to denominate the report in. Defaults to the row's own
    /// Budget field.
    #[arg(long)]
    budget: Option<f64>,

    /// Monte Carlo iterations per department.
    #[arg(long, default_value_t = 3000)]
    iterations: usize,

    /// Deterministic seed. Omitted: OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Reject rows with negative or non-finite fields instead of
    /// tolerating them.
    #[arg(long)]
    validate: bool,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Generate a synthetic data file with this many rows at --data,
    /// then exit.
    #[arg(long, value_name = "ROWS")]
    generate: Option<usize>,
}

fn run(args: &Args) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if let Some(rows) = args.generate {
        let config = SyntheticConfig { rows, ..SyntheticConfig::default() };
        generate_csv(&args.data, &config, &mut rng)?;
        log::info!("generated {} synthetic rows at {}", rows, args.data.display());
        return Ok(());
    }

    let row = load_latest(&args.data)?;
    let sim_config = SimulationConfig::default()
        .with_iterations(args.iterations)
        .with_validation(args.validate);

    let sim = simulate(&row, &sim_config, &mut rng)?;
    let result = optimize(&sim, &OptimizerConfig::default());

    let budget = args.budget.unwrap_or(row.budget);
    let report = AllocationReport::build(budget, &sim, &result);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("\n{report}");
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    let _ = TermLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );

    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
