//! Plans one route and prints the optimized order next to the selection order.
//!
//! ```text
//! plan-route --start Delhi --end Chennai --via Jaipur --via Nagpur --via Pune
//! plan-route --request request.json --params params.json --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use route_aco::plan_route;
use route_core::{Result, RouteComparison, RouteError, RouteRequest};
use route_validation::{init_logging, load_catalog, load_params, load_request};
use tracing::error;

#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// JSON file with `start`, `end` and `intermediates`
    #[arg(long, conflicts_with_all = ["start", "end", "via"])]
    request: Option<PathBuf>,

    #[arg(long)]
    start: Option<String>,

    #[arg(long)]
    end: Option<String>,

    /// Intermediate city, in selection order (repeatable)
    #[arg(long)]
    via: Vec<String>,

    /// JSON file with colony parameters; missing fields keep their defaults
    #[arg(long)]
    params: Option<PathBuf>,

    /// JSON array of locations replacing the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Overrides the seed from the parameter file
    #[arg(long)]
    seed: Option<u64>,

    /// Print the comparison as JSON
    #[arg(long)]
    json: bool,

    /// List catalog cities and exit
    #[arg(long)]
    list: bool,
}

fn print_text(cmp: &RouteComparison) {
    println!("Unoptimized path: {}", cmp.baseline_path.join(" -> "));
    println!("Total distance:   {:.2} km", cmp.baseline_length);
    println!("Optimized path:   {}", cmp.optimized_path.join(" -> "));
    println!("Total distance:   {:.2} km", cmp.optimized_length);
    println!("Saved:            {:.2} km", cmp.savings());
}

fn run(args: Args) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    if args.list {
        for name in catalog.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let request = match args.request {
        Some(path) => load_request(&path)?,
        None => RouteRequest {
            start: args.start.ok_or_else(|| RouteError::invalid("missing --start"))?,
            end: args.end.ok_or_else(|| RouteError::invalid("missing --end"))?,
            intermediates: args.via,
        },
    };

    let mut params = load_params(args.params.as_deref())?;
    if args.seed.is_some() {
        params.seed = args.seed;
    }

    let cmp = plan_route(&request, &catalog, params)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&cmp)?);
    } else {
        print_text(&cmp);
    }
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
