use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{core::fitness, core::BitMask, error::Result, Float};

/// A struct that holds the results of a subset-sum search.
///
/// This is an owned snapshot: it does not borrow from the swarm that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchSummary {
    /// The target sum of the problem.
    pub target: i64,
    /// The best mask found.
    pub best_position: BitMask,
    /// The fitness of [`SearchSummary::best_position`].
    pub best_fitness: Float,
    /// The subset sum of [`SearchSummary::best_position`].
    pub best_sum: i64,
    /// The values selected by [`SearchSummary::best_position`], in item order.
    pub chosen_values: Vec<i64>,
    /// The number of completed iterations.
    pub iterations_used: usize,
    /// Flag that says whether the best sum equals the target.
    pub converged: bool,
    /// A message describing why the search stopped.
    pub message: String,
}

impl SearchSummary {
    /// The accuracy of [`SearchSummary::best_sum`] against the target, in percent.
    ///
    /// # Errors
    ///
    /// Returns [`SubsetSumError::DegenerateTarget`](crate::SubsetSumError::DegenerateTarget) if the
    /// target is zero.
    pub fn accuracy(&self) -> Result<Float> {
        fitness::accuracy(self.best_sum, self.target)
    }
}

impl Display for SearchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Target = {}", self.target)?;
        writeln!(f, "Best sum = {}", self.best_sum)?;
        match self.accuracy() {
            Ok(accuracy) => writeln!(f, "Accuracy = {:.4}%", accuracy)?,
            Err(_) => writeln!(f, "Accuracy = undefined")?,
        }
        writeln!(f, "Iterations used = {}", self.iterations_used)?;
        writeln!(f, "Best bits (binary) = {}", self.best_position)?;
        write!(f, "Chosen values = {:?}", self.chosen_values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_summary_display() {
        let summary = SearchSummary {
            target: 1000,
            best_position: BitMask::ones(3),
            best_fitness: 1.0 / 941.0,
            best_sum: 60,
            chosen_values: vec![10, 20, 30],
            iterations_used: 300,
            converged: false,
            message: "MAX ITERATIONS".to_string(),
        };
        assert_eq!(
            summary.to_string(),
            "Target = 1000\nBest sum = 60\nAccuracy = 6.0000%\nIterations used = 300\n\
             Best bits (binary) = 111\nChosen values = [10, 20, 30]"
        );
    }

    #[test]
    fn test_zero_target_display() {
        let summary = SearchSummary {
            target: 0,
            best_position: BitMask::zeros(2),
            ..Default::default()
        };
        assert!(summary.accuracy().is_err());
        assert!(summary.to_string().contains("Accuracy = undefined"));
    }
}
