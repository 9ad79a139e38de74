//! # aliaspick
//!
//! Weighted random picking in O(1) per draw.
//!
//! This crate wraps a compact implementation of
//! [Vose's alias method](https://en.wikipedia.org/wiki/Alias_method):
//! an O(n) pass turns a list of `(label, weight)` entries into a probability
//! table and an alias table, after which every draw costs two random numbers
//! and one branch.
//!
//! ## Quick start
//!
//! ```rust
//! use aliaspick::WeightedSampler;
//!
//! # fn main() -> Result<(), aliaspick::ProbError> {
//! let mut picker = WeightedSampler::from_pairs([('A', 4), ('B', 1), ('C', 3), ('D', 2)])?;
//! let label = picker.pick()?; // 'A' about 40% of the time
//! assert!("ABCD".contains(label));
//! # Ok(()) }
//! ```
//!
//! ## Reproducible draws
//!
//! ```rust
//! use aliaspick::{Entry, WeightedSampler};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! # fn main() -> Result<(), aliaspick::ProbError> {
//! let entries = [Entry::new("heads", 1), Entry::new("tails", 1)];
//! let mut a = WeightedSampler::with_rng(entries, StdRng::seed_from_u64(7))?;
//! let mut b = WeightedSampler::with_rng(entries, StdRng::seed_from_u64(7))?;
//! assert_eq!(a.pick()?, b.pick()?);
//! # Ok(()) }
//! ```
//!
//! ## Gotchas
//! * Weights must be **strictly positive** integers; empty input, zero and
//!   negative weights are rejected with an `InvalidArgument` error.
//! * Tables are fixed once built. To reweight, build a new sampler.
//! * `pick` needs `&mut self`. Share one sampler across threads with
//!   [`WeightedSampler::pick_with`] and a generator per thread, or wrap it in
//!   a `Mutex`.
//!
//! Construction logs through the `log` facade at `debug`/`trace` level; no
//! logger is installed by the crate.

mod entry;
mod error;
mod sampler;
mod walker;

/// A minimal interface for “index samplers”.
/// Implemented by [`AliasTable`].
#[allow(clippy::len_without_is_empty)]
pub trait IndexSampler {
    fn len(&self) -> usize;
    fn sample_index<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> usize;
}

pub use entry::Entry;
pub use error::{ErrorKind, ProbError};
pub use sampler::WeightedSampler;
pub use walker::AliasTable;
