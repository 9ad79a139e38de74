use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{Entry, error::ProbError, walker::AliasTable};

/// Labels plus the alias table built from their weights, driven by an owned
/// generator.
///
/// The tables never change after construction; `pick` only advances `rng`.
/// For draws from several threads either give each thread its own sampler
/// or share one by reference and use [`pick_with`](Self::pick_with).
#[derive(Debug, Clone)]
pub struct WeightedSampler<L, R = StdRng> {
    table: AliasTable,
    labels: Vec<L>,
    rng: R,
}

fn build<L, I>(entries: I) -> Result<(Vec<L>, AliasTable), ProbError>
where
    I: IntoIterator<Item = Entry<L>>,
{
    let mut labels = Vec::new();
    let mut weights = Vec::new();
    for Entry { label, weight } in entries {
        labels.push(label);
        weights.push(weight);
    }
    let table = AliasTable::from_weights(&weights)?;
    Ok((labels, table))
}

impl<L> WeightedSampler<L> {
    /// Build a sampler whose generator is seeded from OS entropy.
    ///
    /// # Errors
    /// * [`ProbError::Empty`] if there are no entries.
    /// * [`ProbError::NonPositive`] if any weight is zero or negative.
    ///
    /// # Complexity
    /// O(n) time / O(n) space.
    pub fn new<I>(entries: I) -> Result<Self, ProbError>
    where
        I: IntoIterator<Item = Entry<L>>,
    {
        let (labels, table) = build(entries)?;
        debug!("seeding sampler of {} entries from OS entropy", labels.len());
        Ok(Self {
            table,
            labels,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Build from any `(label, weight)` iterator.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ProbError>
    where
        I: IntoIterator<Item = (L, i32)>,
    {
        Self::new(pairs.into_iter().map(Entry::from))
    }
}

impl<L, R: Rng> WeightedSampler<L, R> {
    /// Build a sampler that draws from `rng`, e.g. a seeded generator in tests.
    pub fn with_rng<I>(entries: I, rng: R) -> Result<Self, ProbError>
    where
        I: IntoIterator<Item = Entry<L>>,
    {
        let (labels, table) = build(entries)?;
        Ok(Self { table, labels, rng })
    }

    /// Draw one label in O(1), advancing the owned generator.
    ///
    /// # Errors
    /// [`ProbError::EmptyTable`] or [`ProbError::OutOfBounds`]; neither can
    /// happen for a sampler built through the public constructors.
    pub fn pick(&mut self) -> Result<L, ProbError>
    where
        L: Copy,
    {
        if self.labels.is_empty() || self.table.is_empty() {
            return Err(ProbError::EmptyTable);
        }
        let index = self.table.sample_index(&mut self.rng);
        self.label_at(index)
    }
}

impl<L, R> WeightedSampler<L, R> {
    /// Draw one label using a caller-supplied generator instead of the owned one.
    ///
    /// Takes `&self`, so a single sampler can serve many threads that each
    /// bring their own generator.
    pub fn pick_with<G: Rng + ?Sized>(&self, rng: &mut G) -> Result<L, ProbError>
    where
        L: Copy,
    {
        if self.labels.is_empty() || self.table.is_empty() {
            return Err(ProbError::EmptyTable);
        }
        self.label_at(self.table.sample_index(rng))
    }

    fn label_at(&self, index: usize) -> Result<L, ProbError>
    where
        L: Copy,
    {
        self.labels.get(index).copied().ok_or(ProbError::OutOfBounds {
            index,
            len: self.labels.len(),
        })
    }

    /// The probability/alias tables backing this sampler.
    pub fn table(&self) -> &AliasTable {
        &self.table
    }

    /// Labels in the order they were supplied.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn total_weight(&self) -> u64 {
        self.table.total_weight()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
