use crate::city_list::CityList;
use crate::error::{Result, RouteError};
use crate::matrix::DistanceMatrix;
use serde::{Deserialize, Serialize};

/// Visiting order as indices into a run's `CityList`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path(Vec<usize>);

impl Path {
    /// Checks that `nodes` starts at 0, ends at `n - 1` and visits every index once.
    pub fn new(nodes: Vec<usize>, n: usize) -> Result<Self> {
        if n < 2 || nodes.len() != n {
            return Err(RouteError::invalid(format!(
                "path has {} nodes, expected {n}",
                nodes.len()
            )));
        }
        if nodes[0] != 0 || nodes[n - 1] != n - 1 {
            return Err(RouteError::invalid(format!(
                "path must run from 0 to {}, got {:?}",
                n - 1,
                nodes
            )));
        }
        let mut seen = vec![false; n];
        for &node in &nodes {
            if node >= n || seen[node] {
                return Err(RouteError::invalid(format!(
                    "path {nodes:?} is not a permutation of 0..{n}"
                )));
            }
            seen[node] = true;
        }
        Ok(Self(nodes))
    }

    /// Selection order: 0, 1, .., n - 1.
    pub fn identity(n: usize) -> Self {
        Self((0..n).collect())
    }

    /// Skips validation; callers construct `nodes` as a permutation themselves.
    pub(crate) fn from_vec_unchecked(nodes: Vec<usize>) -> Self {
        Self(nodes)
    }

    pub fn nodes(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn reversed(&self) -> Vec<usize> {
        self.0.iter().rev().copied().collect()
    }

    pub fn names(&self, cities: &CityList) -> Vec<String> {
        self.0
            .iter()
            .map(|&i| cities.as_slice()[i].name.clone())
            .collect()
    }
}

/// Builder for paths assembled one node at a time.
#[derive(Debug)]
pub struct PathBuilder {
    nodes: Vec<usize>,
    visited: Vec<bool>,
}

impl PathBuilder {
    /// Starts at node 0 of an `n`-node run.
    pub fn start(n: usize) -> Self {
        let mut nodes = Vec::with_capacity(n);
        nodes.push(0);
        let mut visited = vec![false; n];
        visited[0] = true;
        Self { nodes, visited }
    }

    pub fn current(&self) -> usize {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn is_visited(&self, node: usize) -> bool {
        self.visited[node]
    }

    pub fn visit(&mut self, node: usize) {
        self.visited[node] = true;
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends the fixed terminal and validates the result.
    pub fn finish(mut self) -> Result<Path> {
        let n = self.visited.len();
        self.nodes.push(n - 1);
        if self.nodes.len() != n || self.visited[..n - 1].iter().any(|v| !v) {
            return Err(RouteError::invalid(format!(
                "path {:?} finished before visiting every city",
                self.nodes
            )));
        }
        Ok(Path::from_vec_unchecked(self.nodes))
    }
}

/// Sum of consecutive matrix lookups along `nodes`.
pub fn total_length(nodes: &[usize], distances: &DistanceMatrix) -> f64 {
    nodes
        .windows(2)
        .map(|leg| distances.get(leg[0], leg[1]))
        .sum()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScoredPath {
    pub path: Path,
    pub length: f64,
}

impl ScoredPath {
    pub fn score(path: Path, distances: &DistanceMatrix) -> Self {
        let length = total_length(path.nodes(), distances);
        Self { path, length }
    }
}

/// Optimized ordering next to the selection-order baseline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteComparison {
    pub optimized_path: Vec<String>,
    pub optimized_length: f64,
    pub baseline_path: Vec<String>,
    pub baseline_length: f64,
    pub iterations_completed: usize,
}

impl RouteComparison {
    pub fn savings(&self) -> f64 {
        self.baseline_length - self.optimized_length
    }
}
