use crate::pheromone::PheromoneGrid;
use crate::sampling::{sample_weighted, Draw};
use rand::Rng;
use route_core::{DistanceMatrix, Path, PathBuilder, Result, RouteError};
use tracing::trace;

/// Builds one ant's path against a read-only snapshot of the colony state.
#[derive(Clone, Copy, Debug)]
pub struct AntPathBuilder<'a> {
    distances: &'a DistanceMatrix,
    pheromones: &'a PheromoneGrid,
    alpha: f64,
    beta: f64,
}

impl<'a> AntPathBuilder<'a> {
    pub fn new(
        distances: &'a DistanceMatrix,
        pheromones: &'a PheromoneGrid,
        alpha: f64,
        beta: f64,
    ) -> Self {
        debug_assert_eq!(distances.size(), pheromones.size());
        Self {
            distances,
            pheromones,
            alpha,
            beta,
        }
    }

    /// `tau^alpha * eta^beta` for the edge `from -> to`, with `eta = 0` on
    /// zero-length edges.
    #[inline]
    pub fn weight(&self, from: usize, to: usize) -> f64 {
        let tau = self.pheromones.get(from, to).powf(self.alpha);
        let d = self.distances.get(from, to);
        let eta = if d > 0.0 { (1.0 / d).powf(self.beta) } else { 0.0 };
        tau * eta
    }

    /// Walks from city 0 through every intermediate, then to the last city.
    pub fn build_path<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Path> {
        let n = self.distances.size();
        let mut path = PathBuilder::start(n);
        let mut candidates = Vec::with_capacity(n);
        let mut weights = Vec::with_capacity(n);

        while path.len() < n - 1 {
            let current = path.current();

            candidates.clear();
            weights.clear();
            for next in 1..n - 1 {
                if !path.is_visited(next) {
                    candidates.push(next);
                    weights.push(self.weight(current, next));
                }
            }

            let total: f64 = weights.iter().sum();
            if !total.is_finite() {
                return Err(RouteError::overflow(format!(
                    "candidate weights from city {current} sum to {total}"
                )));
            }

            let next = match sample_weighted(&weights, rng) {
                Draw::Weighted(idx) => candidates[idx],
                Draw::Uniform(idx) => {
                    trace!(
                        from = current,
                        remaining = candidates.len(),
                        "all candidate weights are zero, choosing uniformly"
                    );
                    candidates[idx]
                }
            };
            path.visit(next);
        }

        path.finish()
    }
}
