use crate::error::{Result, RouteError};
use crate::location::Location;

/// Symmetric pairwise distances, flattened row-major for cache locality.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Evaluates `distance_fn` once per unordered pair and mirrors it.
    /// The diagonal stays zero.
    pub fn build<F>(cities: &[Location], mut distance_fn: F) -> Result<Self>
    where
        F: FnMut(&Location, &Location) -> f64,
    {
        let size = cities.len();
        let mut data = vec![0.0; size * size];

        for i in 0..size {
            for j in (i + 1)..size {
                let d = distance_fn(&cities[i], &cities[j]);
                if !d.is_finite() {
                    return Err(RouteError::overflow(format!(
                        "distance between '{}' and '{}' is {d}",
                        cities[i].name, cities[j].name
                    )));
                }
                if d < 0.0 {
                    return Err(RouteError::invalid(format!(
                        "distance between '{}' and '{}' is negative ({d})",
                        cities[i].name, cities[j].name
                    )));
                }
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }

        Ok(Self { data, size })
    }

    /// Wraps raw rows. Rows must form a square, symmetric, finite, non-negative matrix.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(RouteError::invalid(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }

        for i in 0..size {
            for j in 0..size {
                let d = data[i * size + j];
                if !d.is_finite() {
                    return Err(RouteError::overflow(format!("distance [{i}][{j}] is {d}")));
                }
                if d < 0.0 {
                    return Err(RouteError::invalid(format!(
                        "distance [{i}][{j}] is negative ({d})"
                    )));
                }
                if i == j && d != 0.0 {
                    return Err(RouteError::invalid(format!("diagonal [{i}][{i}] is {d}, expected 0")));
                }
                if d != data[j * size + i] {
                    return Err(RouteError::invalid(format!("distance [{i}][{j}] is not symmetric")));
                }
            }
        }

        Ok(Self { data, size })
    }

    #[inline(always)]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }
}
