use rand::Rng;

/// Outcome of a roulette-wheel draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Draw {
    /// Chosen proportionally to the weights.
    Weighted(usize),
    /// Every weight was zero, chosen uniformly instead.
    Uniform(usize),
}

impl Draw {
    pub fn index(self) -> usize {
        match self {
            Draw::Weighted(idx) | Draw::Uniform(idx) => idx,
        }
    }
}

/// Picks index `k` with probability `weights[k] / sum(weights)`.
///
/// `weights` must be non-empty, non-negative and have a finite sum.
pub fn sample_weighted<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Draw {
    debug_assert!(!weights.is_empty());
    let total: f64 = weights.iter().sum();

    if total <= 0.0 {
        return Draw::Uniform(rng.gen_range(0..weights.len()));
    }

    let pick = rng.gen::<f64>() * total;
    let mut cumulative = 0.0;
    for (idx, &w) in weights.iter().enumerate() {
        cumulative += w;
        if pick < cumulative {
            return Draw::Weighted(idx);
        }
    }

    // Rounding can leave `pick` just past the last partial sum.
    let last = weights.iter().rposition(|&w| w > 0.0).unwrap_or(weights.len() - 1);
    Draw::Weighted(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn never_picks_zero_weights() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        for _ in 0..1000 {
            let draw = sample_weighted(&[0.0, 2.0, 0.0, 1.0], &mut rng);
            assert!(matches!(draw, Draw::Weighted(1) | Draw::Weighted(3)));
        }
    }

    #[test]
    fn frequencies_follow_weights() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        let mut hits = [0usize; 3];
        for _ in 0..30_000 {
            hits[sample_weighted(&[1.0, 2.0, 3.0], &mut rng).index()] += 1;
        }
        let share = |k: usize| hits[k] as f64 / 30_000.0;
        assert!((share(0) - 1.0 / 6.0).abs() < 0.02);
        assert!((share(1) - 2.0 / 6.0).abs() < 0.02);
        assert!((share(2) - 3.0 / 6.0).abs() < 0.02);
    }

    #[test]
    fn all_zero_falls_back_to_uniform() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let mut hits = [0usize; 4];
        for _ in 0..4000 {
            match sample_weighted(&[0.0; 4], &mut rng) {
                Draw::Uniform(idx) => hits[idx] += 1,
                other => panic!("expected uniform fallback, got {other:?}"),
            }
        }
        assert!(hits.iter().all(|&h| h > 800), "{hits:?}");
    }

    #[test]
    fn same_seed_same_draws() {
        let weights = [0.3, 0.1, 0.6];
        let mut a = Xoshiro256PlusPlus::seed_from_u64(9);
        let mut b = Xoshiro256PlusPlus::seed_from_u64(9);
        let left: Vec<_> = (0..50).map(|_| sample_weighted(&weights, &mut a)).collect();
        let right: Vec<_> = (0..50).map(|_| sample_weighted(&weights, &mut b)).collect();
        assert_eq!(left, right);
    }
}
