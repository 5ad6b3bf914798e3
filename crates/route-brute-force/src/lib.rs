//! Exact search over all orders of the intermediate cities.
//!
//! Cost grows factorially, so instances are capped at
//! [`MAX_INTERMEDIATES`]. Used as ground truth for the stochastic solvers.

use route_core::{DistanceMatrix, Path, Result, RouteError, ScoredPath};

pub const MAX_INTERMEDIATES: usize = 11;

struct Search<'a> {
    dist: &'a DistanceMatrix,
    n: usize,
    visited: Vec<bool>,
    path: Vec<usize>,
    best_len: f64,
    best_path: Vec<usize>,
}

impl Search<'_> {
    fn dfs(&mut self, last: usize, cur_len: f64) {
        // Distances are non-negative, so a partial path already at the best
        // length cannot strictly improve on it.
        if cur_len >= self.best_len {
            return;
        }

        if self.path.len() == self.n - 1 {
            let total = cur_len + self.dist.get(last, self.n - 1);
            if total < self.best_len {
                self.best_len = total;
                self.best_path.clear();
                self.best_path.extend_from_slice(&self.path);
                self.best_path.push(self.n - 1);
            }
            return;
        }

        for next in 1..self.n - 1 {
            if self.visited[next] {
                continue;
            }
            self.visited[next] = true;
            self.path.push(next);

            self.dfs(next, cur_len + self.dist.get(last, next));

            self.path.pop();
            self.visited[next] = false;
        }
    }
}

/// Returns the shortest path from city 0 to city `n - 1` through every other
/// city. Among equally short orders the lexicographically first one wins.
pub fn solve(distances: &DistanceMatrix) -> Result<ScoredPath> {
    let n = distances.size();
    if n < 3 {
        return Err(RouteError::invalid(format!(
            "at least 3 cities are required, got {n}"
        )));
    }
    if n - 2 > MAX_INTERMEDIATES {
        return Err(RouteError::invalid(format!(
            "exact search supports at most {MAX_INTERMEDIATES} intermediate cities, got {}",
            n - 2
        )));
    }

    let mut visited = vec![false; n];
    visited[0] = true;
    let mut search = Search {
        dist: distances,
        n,
        visited,
        path: vec![0],
        best_len: f64::INFINITY,
        best_path: Vec::with_capacity(n),
    };
    search.dfs(0, 0.0);

    if !search.best_len.is_finite() {
        return Err(RouteError::overflow(format!(
            "every path length overflows, shortest is {}",
            search.best_len
        )));
    }
    let path = Path::new(search.best_path, n)?;
    Ok(ScoredPath {
        path,
        length: search.best_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use route_core::total_length;

    #[test]
    fn picks_shorter_of_two_orders() {
        // A-B 1, B-C 1, C-D 1; A-C 3, B-D 3, A-D 3.
        let m = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 3.0, 3.0],
            vec![1.0, 0.0, 1.0, 3.0],
            vec![3.0, 1.0, 0.0, 1.0],
            vec![3.0, 3.0, 1.0, 0.0],
        ])
        .unwrap();
        let best = solve(&m).unwrap();
        assert_eq!(best.path.nodes(), &[0, 1, 2, 3]);
        assert_eq!(best.length, 3.0);
    }

    #[test]
    fn matches_enumeration_on_points_on_a_line() {
        // Points on a line visited from 0 to the far end: sorted order is optimal.
        let xs = [0.0, 7.0, 2.0, 5.0, 1.0, 9.0];
        let rows: Vec<Vec<f64>> = xs
            .iter()
            .map(|a| xs.iter().map(|b| f64::abs(a - b)).collect())
            .collect();
        let m = DistanceMatrix::from_rows(rows).unwrap();

        let best = solve(&m).unwrap();
        assert_eq!(best.path.nodes(), &[0, 4, 2, 3, 1, 5]);
        assert_eq!(best.length, 9.0);
        assert_eq!(total_length(best.path.nodes(), &m), best.length);
    }

    #[test]
    fn three_cities_have_one_path() {
        let m = DistanceMatrix::from_rows(vec![
            vec![0.0, 2.0, 5.0],
            vec![2.0, 0.0, 4.0],
            vec![5.0, 4.0, 0.0],
        ])
        .unwrap();
        let best = solve(&m).unwrap();
        assert_eq!(best.path.nodes(), &[0, 1, 2]);
        assert_eq!(best.length, 6.0);
    }

    #[test]
    fn overflowing_lengths_are_reported() {
        let m = DistanceMatrix::from_rows(vec![
            vec![0.0, 1e308, 1e308],
            vec![1e308, 0.0, 1e308],
            vec![1e308, 1e308, 0.0],
        ])
        .unwrap();
        assert!(matches!(solve(&m), Err(RouteError::NumericOverflow(_))));
    }

    #[test]
    fn rejects_oversized_instances() {
        let n = MAX_INTERMEDIATES + 3;
        let rows = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0.0 } else { 1.0 }).collect())
            .collect();
        let m = DistanceMatrix::from_rows(rows).unwrap();
        assert!(matches!(solve(&m), Err(RouteError::InvalidInput(_))));
    }
}
