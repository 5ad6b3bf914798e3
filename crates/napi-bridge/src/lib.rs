#![deny(clippy::all)]

use napi::bindgen_prelude::BigInt;
use napi::{Error, Status};
use napi_derive::napi;
use route_aco::ColonyParams;
use route_core::{CityCatalog, Location, RouteComparison, RouteError, RouteRequest};

#[napi(object)]
#[derive(Clone, Debug)]
pub struct City {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[napi(object)]
#[derive(Clone, Debug)]
pub struct RouteSelection {
    pub start: String,
    pub end: String,
    pub intermediates: Vec<String>,
    /// Replaces the built-in catalog when present.
    pub catalog: Option<Vec<City>>,
}

#[napi(object)]
pub struct ColonyOptions {
    pub iterations: Option<u32>,
    pub ant_count: Option<u32>,
    pub alpha: Option<f64>,
    pub beta: Option<f64>,
    pub rho: Option<f64>,
    /// Any value in `0..2^64`.
    pub seed: Option<BigInt>,
    pub threads: Option<u32>,
    pub time_limit_ms: Option<u32>,
}

#[napi(object)]
pub struct RouteSummary {
    pub optimized_path: Vec<String>,
    pub optimized_length: f64,
    pub baseline_path: Vec<String>,
    pub baseline_length: f64,
    pub iterations_completed: u32,
}

impl From<&Location> for City {
    fn from(loc: &Location) -> Self {
        City {
            name: loc.name.clone(),
            latitude: loc.latitude,
            longitude: loc.longitude,
        }
    }
}

impl Default for ColonyOptions {
    fn default() -> Self {
        ColonyOptions {
            iterations: None,
            ant_count: None,
            alpha: None,
            beta: None,
            rho: None,
            seed: None,
            threads: None,
            time_limit_ms: None,
        }
    }
}

impl From<RouteComparison> for RouteSummary {
    fn from(cmp: RouteComparison) -> Self {
        RouteSummary {
            optimized_path: cmp.optimized_path,
            optimized_length: cmp.optimized_length,
            baseline_path: cmp.baseline_path,
            baseline_length: cmp.baseline_length,
            iterations_completed: u32::try_from(cmp.iterations_completed).unwrap_or(u32::MAX),
        }
    }
}

fn seed_from_bigint(seed: &BigInt) -> Result<u64, RouteError> {
    let value = seed.words.first().copied().unwrap_or(0);
    if seed.words.iter().skip(1).any(|&w| w != 0) {
        return Err(RouteError::invalid("seed must fit in 64 bits"));
    }
    if seed.sign_bit && value != 0 {
        return Err(RouteError::invalid("seed must not be negative"));
    }
    Ok(value)
}

impl TryFrom<ColonyOptions> for ColonyParams {
    type Error = RouteError;

    fn try_from(opts: ColonyOptions) -> Result<Self, RouteError> {
        let d = ColonyParams::default();
        Ok(ColonyParams {
            iterations: opts.iterations.map_or(d.iterations, |v| v as usize),
            ant_count: opts.ant_count.map_or(d.ant_count, |v| v as usize),
            alpha: opts.alpha.unwrap_or(d.alpha),
            beta: opts.beta.unwrap_or(d.beta),
            rho: opts.rho.unwrap_or(d.rho),
            seed: opts.seed.as_ref().map(seed_from_bigint).transpose()?,
            threads: opts.threads.map_or(d.threads, |v| v as usize),
            time_limit_ms: opts.time_limit_ms.map(u64::from),
        })
    }
}

fn to_napi(err: RouteError) -> Error {
    let status = match err {
        RouteError::InvalidInput(_) | RouteError::Parse(_) => Status::InvalidArg,
        RouteError::NumericOverflow(_) => Status::GenericFailure,
    };
    Error::new(status, err.to_string())
}

#[napi]
pub fn list_cities() -> Vec<City> {
    CityCatalog::india().cities().iter().map(City::from).collect()
}

#[napi]
pub fn optimize_route(selection: RouteSelection, options: Option<ColonyOptions>) -> napi::Result<RouteSummary> {
    let catalog = match selection.catalog {
        Some(cities) => CityCatalog::new(
            cities
                .into_iter()
                .map(|c| Location::new(c.name, c.latitude, c.longitude))
                .collect(),
        )
        .map_err(to_napi)?,
        None => CityCatalog::india(),
    };
    let request = RouteRequest {
        start: selection.start,
        end: selection.end,
        intermediates: selection.intermediates,
    };
    let params = ColonyParams::try_from(options.unwrap_or_default()).map_err(to_napi)?;

    route_aco::plan_route(&request, &catalog, params)
        .map(RouteSummary::from)
        .map_err(to_napi)
}
