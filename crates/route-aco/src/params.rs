use route_core::{Result, RouteError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable parameters of one colony run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColonyParams {
    /// Number of construct/update cycles
    pub iterations: usize,
    /// Ants dispatched per iteration
    pub ant_count: usize,
    /// Pheromone importance
    pub alpha: f64,
    /// Distance importance; large values approach nearest-neighbour
    pub beta: f64,
    /// Evaporation rate in (0, 1]
    pub rho: f64,
    /// Seed for the run's generator. `None` draws one from OS entropy.
    pub seed: Option<u64>,
    /// Worker threads for the construction phase
    pub threads: usize,
    /// Wall-clock budget, checked between iterations
    pub time_limit_ms: Option<u64>,
}

impl Default for ColonyParams {
    fn default() -> Self {
        Self {
            iterations: 150,
            ant_count: 30,
            alpha: 1.0,
            beta: 5.0,
            rho: 0.5,
            seed: None,
            threads: 1,
            time_limit_ms: None,
        }
    }
}

impl ColonyParams {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(RouteError::invalid("iterations must be at least 1"));
        }
        if self.ant_count == 0 {
            return Err(RouteError::invalid("ant_count must be at least 1"));
        }
        if self.threads == 0 {
            return Err(RouteError::invalid("threads must be at least 1"));
        }
        if !(self.rho > 0.0 && self.rho <= 1.0) {
            return Err(RouteError::invalid(format!(
                "rho must lie in (0, 1], got {}",
                self.rho
            )));
        }
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !value.is_finite() || value < 0.0 {
                return Err(RouteError::invalid(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
