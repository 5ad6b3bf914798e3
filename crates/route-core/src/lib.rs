//! Shared types for ordering the intermediate stops of a route with fixed
//! start and end cities.
//!
//! Indices used by [`Path`], [`DistanceMatrix`] and the optimizers always
//! refer to positions in one run's [`CityList`]: `0` is the start city and
//! `len - 1` the end city.

pub mod catalog;
pub mod city_list;
pub mod error;
pub mod location;
pub mod matrix;
pub mod path;

pub use catalog::CityCatalog;
pub use city_list::{CityList, RouteRequest, MIN_CITIES};
pub use error::{Result, RouteError};
pub use location::{great_circle_distance, Location, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
pub use path::{total_length, Path, PathBuilder, RouteComparison, ScoredPath};
