use crate::ant::AntPathBuilder;
use crate::params::ColonyParams;
use crate::pheromone::PheromoneGrid;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use route_core::{
    CityList, DistanceMatrix, Location, Path, Result, RouteError, ScoredPath, MIN_CITIES,
};
use std::time::Instant;
use tracing::{debug, info};

/// Best path seen during a run.
#[derive(Clone, Debug, PartialEq)]
pub struct BestResult {
    pub path: Path,
    pub length: f64,
    /// Improvements happen only inside completed iterations, so a time limit
    /// can leave this below `params.iterations`.
    pub iterations_completed: usize,
}

/// Seeds from `seed`, or from OS entropy when absent.
pub fn new_rng(seed: Option<u64>) -> Xoshiro256PlusPlus {
    match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    }
}

/// Owns the pheromone state of one run over a borrowed distance matrix.
pub struct ColonyOptimizer<'a> {
    distances: &'a DistanceMatrix,
    params: ColonyParams,
    pheromones: PheromoneGrid,
}

impl<'a> ColonyOptimizer<'a> {
    /// Rejects invalid input before any iteration runs.
    pub fn new(distances: &'a DistanceMatrix, params: ColonyParams) -> Result<Self> {
        let n = distances.size();
        if n < MIN_CITIES {
            return Err(RouteError::invalid(format!(
                "at least {MIN_CITIES} cities are required, got {n}"
            )));
        }
        params.validate()?;

        Ok(Self {
            distances,
            params,
            pheromones: PheromoneGrid::new(n),
        })
    }

    pub fn pheromones(&self) -> &PheromoneGrid {
        &self.pheromones
    }

    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<BestResult> {
        let started = Instant::now();
        let time_limit = self.params.time_limit();
        info!(
            cities = self.distances.size(),
            iterations = self.params.iterations,
            ants = self.params.ant_count,
            alpha = self.params.alpha,
            beta = self.params.beta,
            rho = self.params.rho,
            threads = self.params.threads,
            "starting colony"
        );

        let mut best: Option<ScoredPath> = None;
        let mut completed = 0;

        for iteration in 0..self.params.iterations {
            // Seeds are drawn in ant order so the result does not depend on
            // how ants are spread over threads.
            let seeds: Vec<u64> = (0..self.params.ant_count).map(|_| rng.gen()).collect();
            let ants = self.construct(&seeds)?;

            for ant in &ants {
                let improved = best.as_ref().map_or(true, |b| ant.length < b.length);
                if improved {
                    debug!(iteration, length = ant.length, "new best path");
                    best = Some(ant.clone());
                }
            }

            self.update(&ants)?;
            completed = iteration + 1;

            if let Some(limit) = time_limit {
                if started.elapsed() >= limit {
                    info!(completed, ?limit, "time limit reached");
                    break;
                }
            }
        }

        let best = best.ok_or_else(|| RouteError::invalid("colony ran no iterations"))?;
        info!(
            length = best.length,
            iterations = completed,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "colony finished"
        );

        Ok(BestResult {
            path: best.path,
            length: best.length,
            iterations_completed: completed,
        })
    }

    /// Construction phase: one path per seed against the current grid.
    fn construct(&self, seeds: &[u64]) -> Result<Vec<ScoredPath>> {
        let builder = AntPathBuilder::new(
            self.distances,
            &self.pheromones,
            self.params.alpha,
            self.params.beta,
        );
        let walk = |seed: u64| -> Result<ScoredPath> {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            let path = builder.build_path(&mut rng)?;
            let scored = ScoredPath::score(path, self.distances);
            if !scored.length.is_finite() {
                return Err(RouteError::overflow(format!(
                    "length of path {:?} is {}",
                    scored.path.nodes(),
                    scored.length
                )));
            }
            Ok(scored)
        };

        let threads = self.params.threads.min(seeds.len());
        if threads <= 1 {
            return seeds.iter().map(|&seed| walk(seed)).collect();
        }

        let (tx, rx) = crossbeam_channel::unbounded();
        let chunk = seeds.len().div_ceil(threads);
        std::thread::scope(|scope| {
            for (chunk_idx, chunk_seeds) in seeds.chunks(chunk).enumerate() {
                let tx = tx.clone();
                let walk = &walk;
                scope.spawn(move || {
                    for (offset, &seed) in chunk_seeds.iter().enumerate() {
                        // The receiver outlives the scope, so send cannot fail.
                        let _ = tx.send((chunk_idx * chunk + offset, walk(seed)));
                    }
                });
            }
        });
        drop(tx);

        let mut slots: Vec<Option<ScoredPath>> = vec![None; seeds.len()];
        for (idx, result) in rx.iter() {
            slots[idx] = Some(result?);
        }
        slots
            .into_iter()
            .map(|slot| slot.ok_or_else(|| RouteError::invalid("ant produced no path")))
            .collect()
    }

    /// Update phase: evaporate, then let every ant deposit on its edges.
    fn update(&mut self, ants: &[ScoredPath]) -> Result<()> {
        self.pheromones.evaporate(self.params.rho);
        for ant in ants {
            self.pheromones.deposit(ant.path.nodes(), ant.length);
        }
        self.pheromones.check_finite()
    }
}

/// Runs the colony on a prebuilt matrix with the generator implied by `params.seed`.
pub fn optimize_matrix(distances: &DistanceMatrix, params: ColonyParams) -> Result<BestResult> {
    let mut rng = new_rng(params.seed);
    ColonyOptimizer::new(distances, params)?.run(&mut rng)
}

/// Builds the distance matrix for `cities` and runs the colony on it.
pub fn optimize<F>(cities: &CityList, distance_fn: F, params: ColonyParams) -> Result<BestResult>
where
    F: FnMut(&Location, &Location) -> f64,
{
    params.validate()?;
    let distances = DistanceMatrix::build(cities.as_slice(), distance_fn)?;
    optimize_matrix(&distances, params)
}
