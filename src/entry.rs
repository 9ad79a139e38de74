/// A label and its weight, as handed to [`WeightedSampler`](crate::WeightedSampler).
///
/// The weight must be strictly positive; construction rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<L> {
    pub label: L,
    pub weight: i32,
}

impl<L> Entry<L> {
    pub const fn new(label: L, weight: i32) -> Self {
        Self { label, weight }
    }
}

impl<L> From<(L, i32)> for Entry<L> {
    fn from((label, weight): (L, i32)) -> Self {
        Self { label, weight }
    }
}
