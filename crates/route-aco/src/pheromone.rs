use route_core::{Result, RouteError};

pub const INITIAL_PHEROMONE: f64 = 1.0;

/// Directed trail strengths, flattened row-major like the distance matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct PheromoneGrid {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneGrid {
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![INITIAL_PHEROMONE; size * size],
            size,
        }
    }

    #[inline(always)]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every cell by `1 - rho`. Requires `0 < rho <= 1`.
    pub fn evaporate(&mut self, rho: f64) {
        debug_assert!(rho > 0.0 && rho <= 1.0);
        let keep = 1.0 - rho;
        self.data.iter_mut().for_each(|cell| *cell *= keep);
    }

    /// Adds `amount` to the directed edge `from -> to` only.
    pub fn reinforce(&mut self, from: usize, to: usize, amount: f64) {
        debug_assert!(amount > 0.0);
        self.data[from * self.size + to] += amount;
    }

    /// Lays `1 / length` on every consecutive edge of `nodes`. Zero and
    /// non-finite lengths deposit nothing.
    pub fn deposit(&mut self, nodes: &[usize], length: f64) {
        let amount = 1.0 / length;
        if !(amount > 0.0 && amount.is_finite()) {
            return;
        }
        for leg in nodes.windows(2) {
            self.reinforce(leg[0], leg[1], amount);
        }
    }

    /// Fails with `NumericOverflow` on the first non-finite cell.
    pub fn check_finite(&self) -> Result<()> {
        match self.data.iter().position(|v| !v.is_finite()) {
            None => Ok(()),
            Some(idx) => Err(RouteError::overflow(format!(
                "pheromone [{}][{}] is {}",
                idx / self.size,
                idx % self.size,
                self.data[idx]
            ))),
        }
    }
}

#[cfg(test)]
impl PheromoneGrid {
    fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }
}
