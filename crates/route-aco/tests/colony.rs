use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use route_aco::{compare_routes, optimize, optimize_matrix, ColonyParams};
use route_core::{
    great_circle_distance, total_length, CityCatalog, CityList, DistanceMatrix, Location, Path,
    RouteError,
};

fn planar(a: &Location, b: &Location) -> f64 {
    (a.latitude - b.latitude).hypot(a.longitude - b.longitude)
}

fn random_cities(n: usize, seed: u64) -> CityList {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let cities = (0..n)
        .map(|i| Location::new(format!("c{i}"), rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
        .collect();
    CityList::new(cities).unwrap()
}

fn params(seed: u64) -> ColonyParams {
    ColonyParams {
        iterations: 60,
        ant_count: 20,
        ..ColonyParams::with_seed(seed)
    }
}

#[test]
fn four_city_scenario_converges_to_known_order() {
    // A-B 2, B-C 3, C-D 2, A-C 6, B-D 6, A-D 9.
    // A-B-C-D = 7, A-C-B-D = 15.
    let d = DistanceMatrix::from_rows(vec![
        vec![0.0, 2.0, 6.0, 9.0],
        vec![2.0, 0.0, 3.0, 6.0],
        vec![6.0, 3.0, 0.0, 2.0],
        vec![9.0, 6.0, 2.0, 0.0],
    ])
    .unwrap();

    let best = optimize_matrix(&d, ColonyParams::with_seed(42)).unwrap();
    assert_eq!(best.path.nodes(), &[0, 1, 2, 3]);
    assert_eq!(best.length, 7.0);
    assert_eq!(best.iterations_completed, 150);
}

#[test]
fn three_cities_return_the_only_path() {
    let cities = random_cities(3, 8);
    let cmp = compare_routes(&cities, planar, params(1)).unwrap();
    assert_eq!(cmp.optimized_path, cmp.baseline_path);
    assert_eq!(cmp.optimized_length, cmp.baseline_length);
}

#[test]
fn every_result_is_a_valid_path() {
    for seed in 0..20 {
        let n = 3 + (seed as usize % 8);
        let cities = random_cities(n, seed);
        let best = optimize(&cities, planar, params(seed)).unwrap();
        let nodes = best.path.nodes().to_vec();
        assert!(Path::new(nodes, n).is_ok(), "seed {seed}: {:?}", best.path);
    }
}

#[test]
fn same_seed_gives_identical_results() {
    let cities = random_cities(9, 77);
    let first = optimize(&cities, planar, params(5)).unwrap();
    let second = optimize(&cities, planar, params(5)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn threaded_construction_matches_sequential() {
    let cities = random_cities(10, 12);
    let sequential = optimize(&cities, planar, params(9)).unwrap();
    for threads in [2, 3, 8, 64] {
        let threaded = optimize(&cities, planar, ColonyParams { threads, ..params(9) }).unwrap();
        assert_eq!(sequential, threaded, "threads = {threads}");
    }
}

#[test]
fn beats_random_orders() {
    let cities = random_cities(10, 3);
    let d = DistanceMatrix::build(cities.as_slice(), planar).unwrap();
    let best = optimize_matrix(&d, ColonyParams::with_seed(17)).unwrap();

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(100);
    let mut beaten = 0;
    for _ in 0..200 {
        let mut mids: Vec<usize> = (1..9).collect();
        for i in (1..mids.len()).rev() {
            mids.swap(i, rng.gen_range(0..=i));
        }
        let mut nodes = vec![0];
        nodes.extend(mids);
        nodes.push(9);
        if best.length <= total_length(&nodes, &d) + 1e-9 {
            beaten += 1;
        }
    }
    assert!(beaten >= 198, "optimized path beat only {beaten}/200 random orders");
}

#[test]
fn matches_exact_search_on_small_instances() {
    for seed in 0..5 {
        let cities = random_cities(7, 1000 + seed);
        let d = DistanceMatrix::build(cities.as_slice(), planar).unwrap();
        let exact = route_brute_force::solve(&d).unwrap();
        let best = optimize_matrix(&d, ColonyParams::with_seed(seed)).unwrap();
        assert!(
            (best.length - exact.length).abs() < 1e-9,
            "seed {seed}: aco {} vs exact {}",
            best.length,
            exact.length
        );
    }
}

#[test]
fn reversed_paths_have_equal_length() {
    let catalog = CityCatalog::india();
    let cities = CityList::new(catalog.cities()[..6].to_vec()).unwrap();
    let d = DistanceMatrix::build(cities.as_slice(), great_circle_distance).unwrap();
    let path = Path::new(vec![0, 3, 1, 4, 2, 5], 6).unwrap();
    let forward = total_length(path.nodes(), &d);
    let backward = total_length(&path.reversed(), &d);
    assert!((forward - backward).abs() < 1e-9);
}

#[test]
fn non_finite_distances_abort_the_run() {
    let cities = random_cities(4, 1);
    let err = optimize(&cities, |_, _| f64::NAN, params(0)).unwrap_err();
    assert!(matches!(err, RouteError::NumericOverflow(_)));
}

#[test]
fn bad_parameters_are_rejected_up_front() {
    let cities = random_cities(4, 1);
    let zero_iterations = ColonyParams { iterations: 0, ..params(0) };
    let err = optimize(&cities, |_, _| f64::NAN, zero_iterations).unwrap_err();
    assert!(matches!(err, RouteError::InvalidInput(_)));
}
