use crate::optimizer::optimize_matrix;
use crate::params::ColonyParams;
use route_core::{
    great_circle_distance, total_length, CityCatalog, CityList, DistanceMatrix, Location, Path,
    Result, RouteComparison, RouteRequest,
};

/// Optimizes `cities` and reports it next to the selection order. Both
/// lengths come from the same `total_length` over the same matrix.
pub fn compare_routes<F>(
    cities: &CityList,
    distance_fn: F,
    params: ColonyParams,
) -> Result<RouteComparison>
where
    F: FnMut(&Location, &Location) -> f64,
{
    params.validate()?;
    let distances = DistanceMatrix::build(cities.as_slice(), distance_fn)?;

    let baseline = Path::identity(cities.len());
    let baseline_length = total_length(baseline.nodes(), &distances);

    let best = optimize_matrix(&distances, params)?;

    Ok(RouteComparison {
        optimized_path: best.path.names(cities),
        optimized_length: best.length,
        baseline_path: baseline.names(cities),
        baseline_length,
        iterations_completed: best.iterations_completed,
    })
}

/// Resolves `request` by name and compares routes using great-circle kilometres.
pub fn plan_route(
    request: &RouteRequest,
    catalog: &CityCatalog,
    params: ColonyParams,
) -> Result<RouteComparison> {
    let cities = request.resolve(catalog)?;
    compare_routes(&cities, great_circle_distance, params)
}
