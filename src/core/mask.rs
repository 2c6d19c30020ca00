use std::fmt::Display;

use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::Float;

/// A binary membership mask over the candidate values of a
/// [`SubsetSumProblem`](super::SubsetSumProblem). Bit `i` is set when value `i` is in the subset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BitMask(Vec<bool>);

impl BitMask {
    /// A mask of the given length with every bit cleared.
    pub fn zeros(dimension: usize) -> Self {
        Self(vec![false; dimension])
    }
    /// A mask of the given length with every bit set.
    pub fn ones(dimension: usize) -> Self {
        Self(vec![true; dimension])
    }
    /// A mask whose bits are independent fair coin flips.
    pub fn random(dimension: usize, rng: &mut Rng) -> Self {
        Self((0..dimension).map(|_| rng.bool()).collect())
    }
    /// The number of bits in the mask.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// Returns `true` if the mask has no bits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Get bit `i`.
    ///
    /// # Panics
    ///
    /// This method will panic if `i` is out of range.
    pub fn get(&self, i: usize) -> bool {
        self.0[i]
    }
    /// Set bit `i`.
    ///
    /// # Panics
    ///
    /// This method will panic if `i` is out of range.
    pub fn set(&mut self, i: usize, value: bool) {
        self.0[i] = value;
    }
    /// Bit `i` as `0.0` or `1.0`, the form used in the velocity update.
    pub fn bit(&self, i: usize) -> Float {
        if self.0[i] {
            1.0
        } else {
            0.0
        }
    }
    /// The number of set bits (the size of the subset).
    pub fn cardinality(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }
    /// Iterate over the bits in item order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }
    /// Iterate over the indices of the set bits in item order.
    pub fn ones_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
    }
}

impl From<Vec<bool>> for BitMask {
    fn from(value: Vec<bool>) -> Self {
        Self(value)
    }
}

impl FromIterator<bool> for BitMask {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Renders the mask as a binary string, one character per item.
impl Display for BitMask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &b in &self.0 {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}
