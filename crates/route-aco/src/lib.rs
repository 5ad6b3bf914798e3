//! Ant Colony Optimization for routes with a fixed start and end city.
//!
//! Every iteration dispatches `ant_count` ants that each build a full path
//! guided by pheromone strength and inverse distance, then evaporates the
//! pheromone grid and lets every ant deposit `1 / length` on the edges it
//! used. The shortest path seen over the whole run is returned.
//!
//! All randomness flows from one seedable generator per run, so identical
//! parameters with a fixed `seed` give identical results, also when the
//! construction phase runs on several threads.

pub mod ant;
pub mod optimizer;
pub mod params;
pub mod pheromone;
pub mod route;
pub mod sampling;

pub use ant::AntPathBuilder;
pub use optimizer::{new_rng, optimize, optimize_matrix, BestResult, ColonyOptimizer};
pub use params::ColonyParams;
pub use pheromone::PheromoneGrid;
pub use route::{compare_routes, plan_route};
pub use sampling::{sample_weighted, Draw};
