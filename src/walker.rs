//! Vose's alias method for O(1) sampling from a discrete distribution.
//!
//! Pairing policy: both worklists are popped from the tail (LIFO), and an
//! index whose normalized weight is exactly `1.0` counts as large. Given the
//! same weights in the same order the resulting tables are always identical.

use crate::IndexSampler;
use crate::error::ProbError;
use log::{debug, trace};
use rand::Rng;

/// Probability/alias table pair for discrete distribution sampling.
///
/// Immutable once built; share it by reference and draw with any generator.
#[derive(Debug, Clone, PartialEq)]
pub struct AliasTable {
    prob: Vec<f64>,
    alias: Vec<usize>,
    total: u64,
}

/// Reject empty input and non-positive weights, returning the total.
fn validate(weights: &[i32]) -> Result<u64, ProbError> {
    if weights.is_empty() {
        return Err(ProbError::Empty);
    }

    let mut total = 0u64;
    for (index, &weight) in weights.iter().enumerate() {
        if weight <= 0 {
            return Err(ProbError::NonPositive { index, weight });
        }
        total += weight as u64;
    }
    Ok(total)
}

impl AliasTable {
    /// Construct an alias table from strictly positive weights. O(n).
    ///
    /// # Errors
    /// * [`ProbError::Empty`] if `weights` is empty.
    /// * [`ProbError::NonPositive`] for the first weight that is `<= 0`.
    pub fn from_weights(weights: &[i32]) -> Result<Self, ProbError> {
        let total = validate(weights)?;
        let n = weights.len();
        debug!("building alias table: n={n} total_weight={total}");

        // Scale so the values sum to n.
        let mut normalized: Vec<f64> = weights
            .iter()
            .map(|&w| w as f64 / total as f64 * n as f64)
            .collect();

        let mut prob = vec![0.0f64; n];
        let mut alias = (0..n).collect::<Vec<_>>();

        let mut small = Vec::with_capacity(n);
        let mut large = Vec::with_capacity(n);

        for (i, &p) in normalized.iter().enumerate() {
            if p < 1.0 {
                small.push(i);
            } else {
                large.push(i);
            }
        }

        while let (Some(&s), Some(&l)) = (small.last(), large.last()) {
            small.pop();
            large.pop();

            prob[s] = normalized[s].clamp(0.0, 1.0);
            alias[s] = l;
            trace!("column {s}: prob={} alias={l}", prob[s]);

            normalized[l] = (normalized[l] + normalized[s]) - 1.0;

            if normalized[l] < 1.0 {
                small.push(l);
            } else {
                large.push(l);
            }
        }

        // Leftovers sit at ~1.0 after rounding; they always accept themselves.
        for i in small.into_iter().chain(large) {
            prob[i] = 1.0;
        }

        debug_assert!(alias.iter().all(|&a| a < n));
        debug_assert!(prob.iter().all(|p| (0.0..=1.0).contains(p)));

        Ok(Self { prob, alias, total })
    }

    /// Draw a single column index in O(1).
    #[inline]
    pub fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let n = self.prob.len();
        let col = rng.random_range(0..n);
        let p: f64 = rng.random();
        if p < self.prob[col] { col } else { self.alias[col] }
    }

    /// Draw k samples, returning counts per index (useful for checks).
    #[cfg(test)]
    pub fn sample_counts<R: Rng + ?Sized>(&self, rng: &mut R, draws: usize) -> Vec<usize> {
        let mut counts = vec![0usize; self.prob.len()];
        for _ in 0..draws {
            counts[self.sample_index(rng)] += 1;
        }
        counts
    }

    /// Acceptance probability per column.
    pub fn probabilities(&self) -> &[f64] {
        &self.prob
    }

    /// Redirect target per column.
    pub fn aliases(&self) -> &[usize] {
        &self.alias
    }

    /// Sum of the weights the table was built from.
    pub fn total_weight(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.prob.len()
    }
    pub fn is_empty(&self) -> bool {
        self.prob.is_empty()
    }
}

impl IndexSampler for AliasTable {
    #[inline]
    fn len(&self) -> usize {
        // call the inherent method explicitly to avoid trait-recursion
        AliasTable::len(self)
    }
    #[inline]
    fn sample_index<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        AliasTable::sample_index(self, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn rejects_bad_inputs() {
        assert!(matches!(AliasTable::from_weights(&[]), Err(ProbError::Empty)));
        assert!(matches!(
            AliasTable::from_weights(&[3, 0, 2]),
            Err(ProbError::NonPositive { index: 1, weight: 0 })
        ));
        assert!(matches!(
            AliasTable::from_weights(&[1, 2, -4]),
            Err(ProbError::NonPositive { index: 2, weight: -4 })
        ));
    }

    #[test]
    fn reports_first_offender() {
        assert_eq!(
            AliasTable::from_weights(&[-1, 0]),
            Err(ProbError::NonPositive { index: 0, weight: -1 })
        );
    }

    #[test]
    fn lifo_pairing_is_stable() {
        // normalized = [1.6, 0.4, 1.2, 0.8]
        // pop (3, 2) -> C drops to 1.0, stays large
        // pop (1, 2) -> C drops to 0.4, becomes small
        // pop (2, 0) -> A lands on ~1.0, leftover
        let table = AliasTable::from_weights(&[4, 1, 3, 2]).unwrap();
        assert_eq!(table.aliases(), &[0, 2, 0, 2]);

        let expected = [1.0, 0.4, 0.4, 0.8];
        for (got, want) in table.probabilities().iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "got={got} want={want}");
        }
        assert_eq!(table.total_weight(), 10);
    }

    #[test]
    fn construction_is_deterministic() {
        let weights = [7, 1, 1, 13, 2, 9, 4];
        let a = AliasTable::from_weights(&weights).unwrap();
        let b = AliasTable::from_weights(&weights).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn equal_weights_accept_themselves() {
        let table = AliasTable::from_weights(&[2, 2, 2, 2]).unwrap();
        assert_eq!(table.probabilities(), &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(table.aliases(), &[0, 1, 2, 3]);
    }

    #[test]
    fn roughly_matches_distribution() {
        let weights = [1, 2, 3, 4];
        let table = AliasTable::from_weights(&weights).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        let draws = 20_000usize;
        let counts = table.sample_counts(&mut rng, draws);

        let sum_w: i32 = weights.iter().sum();
        for (i, &c) in counts.iter().enumerate() {
            let p = weights[i] as f64 / sum_w as f64;
            let emp = c as f64 / draws as f64;
            assert!((emp - p).abs() < 0.02, "i={i} emp={emp} p={p}");
        }
    }

    #[test]
    fn degenerate_singleton() {
        let table = AliasTable::from_weights(&[5]).unwrap();
        assert_eq!(table.probabilities(), &[1.0]);
        let mut rng = rand::rng();
        for _ in 0..1000 {
            assert_eq!(table.sample_index(&mut rng), 0);
        }
    }

    #[test]
    fn large_weights_do_not_overflow() {
        let table = AliasTable::from_weights(&[i32::MAX, i32::MAX, 1]).unwrap();
        assert_eq!(table.total_weight(), 2 * i32::MAX as u64 + 1);
        assert!(table.aliases().iter().all(|&a| a < 3));
    }
}
