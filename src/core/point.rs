use serde::{Deserialize, Serialize};

use crate::{
    core::{fitness, BitMask, SubsetSumProblem},
    Float,
};

/// Describes an evaluated point in the search space: a [`BitMask`] together with the subset sum
/// it selects and its fitness.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// the point's position
    pub x: BitMask,
    /// the sum of the values selected by `x`
    pub sum: i64,
    /// the fitness of `x` (higher is better)
    pub fx: Float,
}

impl Point {
    /// Evaluate `x` against the problem.
    pub fn evaluate(x: BitMask, problem: &SubsetSumProblem) -> Self {
        let sum = problem.subset_sum(&x);
        let fx = fitness::fitness(sum, problem.target(), x.cardinality());
        Self { x, sum, fx }
    }
    /// A placeholder point of the given dimension which any evaluated point improves upon.
    pub fn worst(dimension: usize) -> Self {
        Self {
            x: BitMask::zeros(dimension),
            sum: 0,
            fx: Float::NEG_INFINITY,
        }
    }
    /// Returns `true` if this point is strictly fitter than `other`. Ties never improve.
    pub fn improves_on(&self, other: &Self) -> bool {
        self.fx > other.fx
    }
    /// Replace this point with `candidate` if the candidate strictly improves on it. Returns
    /// `true` if it was replaced.
    pub fn update_if_improved(&mut self, candidate: &Self) -> bool {
        if candidate.improves_on(self) {
            self.clone_from(candidate);
            true
        } else {
            false
        }
    }
    /// Returns `true` if the point's sum equals the problem's target.
    pub fn is_exact(&self, problem: &SubsetSumProblem) -> bool {
        self.sum == problem.target()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::worst(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        let problem = SubsetSumProblem::new(vec![1, 2, 3, 4], 5).unwrap();
        let exact = Point::evaluate(BitMask::from(vec![true, false, false, true]), &problem);
        assert_eq!(exact.sum, 5);
        assert_eq!(exact.fx, 998.0);
        assert!(exact.is_exact(&problem));
        let near = Point::evaluate(BitMask::from(vec![false, false, true, true]), &problem);
        assert_eq!(near.sum, 7);
        assert!(exact.improves_on(&near));
        assert!(!near.improves_on(&exact));
    }

    #[test]
    fn test_ties_do_not_improve() {
        let problem = SubsetSumProblem::new(vec![4, 6], 5).unwrap();
        let low = Point::evaluate(BitMask::from(vec![true, false]), &problem);
        let high = Point::evaluate(BitMask::from(vec![false, true]), &problem);
        assert_eq!(low.fx, high.fx);
        assert!(!low.improves_on(&high));
        assert!(!high.improves_on(&low));
        let mut best = Point::worst(2);
        assert!(best.update_if_improved(&low));
        assert!(!best.update_if_improved(&high));
        assert_eq!(best, low);
    }
}
