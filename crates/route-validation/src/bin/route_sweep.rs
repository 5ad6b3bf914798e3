//! Runs random catalog instances and prints ACO, exact and baseline lengths as CSV.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use route_aco::new_rng;
use route_core::Result;
use route_validation::{evaluate, init_logging, load_catalog, load_params, random_request, SweepRow};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Number of random instances
    #[arg(long, default_value_t = 20)]
    instances: usize,

    /// Smallest instance size, start and end included
    #[arg(long, default_value_t = 4)]
    min_cities: usize,

    /// Largest instance size, start and end included
    #[arg(long, default_value_t = 10)]
    max_cities: usize,

    /// Seed for drawing instances; colony runs are seeded from it too
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long)]
    params: Option<PathBuf>,

    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Emit one JSON object per line instead of CSV
    #[arg(long)]
    json: bool,
}

fn run(args: Args) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let base = load_params(args.params.as_deref())?;
    let mut rng = new_rng(Some(args.seed));
    let (lo, hi) = (args.min_cities, args.max_cities.max(args.min_cities));

    if !args.json {
        println!("{}", SweepRow::HEADER);
    }
    for instance in 0..args.instances {
        let n = if lo == hi { lo } else { lo + instance % (hi - lo + 1) };
        let request = random_request(&catalog, n, &mut rng)?;
        let mut params = base.clone();
        params.seed = Some(args.seed.wrapping_add(instance as u64));

        let row = evaluate(instance, &request, &catalog, params)?;
        if args.json {
            println!("{}", serde_json::to_string(&row)?);
        } else {
            println!("{}", row.to_csv());
        }
    }
    info!(instances = args.instances, "sweep finished");
    Ok(())
}

fn main() -> ExitCode {
    init_logging();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
