//! Shared plumbing for the command-line tools.

use rand::seq::SliceRandom;
use rand::Rng;
use route_aco::{optimize_matrix, ColonyParams};
use route_core::{
    great_circle_distance, total_length, CityCatalog, DistanceMatrix, Path, Result, RouteError,
    RouteRequest,
};
use serde::Serialize;
use std::path::Path as FsPath;
use tracing_subscriber::EnvFilter;

/// Logs to stderr, filtered by `RUST_LOG` (default `info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read(path: &FsPath) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| RouteError::invalid(format!("cannot read {}: {e}", path.display())))
}

pub fn load_params(path: Option<&FsPath>) -> Result<ColonyParams> {
    match path {
        Some(path) => ColonyParams::from_json_str(&read(path)?),
        None => Ok(ColonyParams::default()),
    }
}

pub fn load_catalog(path: Option<&FsPath>) -> Result<CityCatalog> {
    match path {
        Some(path) => CityCatalog::from_json_str(&read(path)?),
        None => Ok(CityCatalog::india()),
    }
}

pub fn load_request(path: &FsPath) -> Result<RouteRequest> {
    Ok(serde_json::from_str(&read(path)?)?)
}

/// Draws `n` distinct catalog cities; the first is the start, the last the end.
pub fn random_request<R: Rng + ?Sized>(
    catalog: &CityCatalog,
    n: usize,
    rng: &mut R,
) -> Result<RouteRequest> {
    if n < 3 || n > catalog.len() {
        return Err(RouteError::invalid(format!(
            "cannot draw {n} cities from a catalog of {}",
            catalog.len()
        )));
    }
    let mut names: Vec<String> = catalog
        .cities()
        .choose_multiple(rng, n)
        .map(|c| c.name.clone())
        .collect();
    let end = names.pop().unwrap_or_default();
    let start = names.remove(0);
    Ok(RouteRequest {
        start,
        end,
        intermediates: names,
    })
}

/// One line of sweep output.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRow {
    pub instance: usize,
    pub cities: usize,
    pub baseline_km: f64,
    pub aco_km: f64,
    pub exact_km: Option<f64>,
    pub gap_pct: Option<f64>,
}

impl SweepRow {
    pub const HEADER: &'static str = "instance,cities,baseline_km,aco_km,exact_km,gap_pct";

    pub fn to_csv(&self) -> String {
        let opt = |v: Option<f64>| v.map(|v| format!("{v:.3}")).unwrap_or_default();
        format!(
            "{},{},{:.3},{:.3},{},{}",
            self.instance,
            self.cities,
            self.baseline_km,
            self.aco_km,
            opt(self.exact_km),
            opt(self.gap_pct)
        )
    }
}

/// Runs ACO on one request and, when small enough, the exact search too.
pub fn evaluate(
    instance: usize,
    request: &RouteRequest,
    catalog: &CityCatalog,
    params: ColonyParams,
) -> Result<SweepRow> {
    let cities = request.resolve(catalog)?;
    let d = DistanceMatrix::build(cities.as_slice(), great_circle_distance)?;
    let baseline_km = total_length(Path::identity(cities.len()).nodes(), &d);
    let aco = optimize_matrix(&d, params)?;

    let exact_km = if cities.len() - 2 <= route_brute_force::MAX_INTERMEDIATES {
        Some(route_brute_force::solve(&d)?.length)
    } else {
        None
    };
    let gap_pct = exact_km
        .filter(|&e| e > 0.0)
        .map(|e| (aco.length - e) / e * 100.0);

    Ok(SweepRow {
        instance,
        cities: cities.len(),
        baseline_km,
        aco_km: aco.length,
        exact_km,
        gap_pct,
    })
}
