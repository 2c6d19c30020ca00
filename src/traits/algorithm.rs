use crate::{core::SubsetSumProblem, error::Result, traits::Status};

/// A trait representing a search algorithm over a [`SubsetSumProblem`].
///
/// This trait is implemented for the algorithms found in the [`algorithms`](crate::algorithms)
/// module, and contains all the methods needed to be run by an [`Engine`](crate::core::Engine).
pub trait Algorithm {
    /// The mutable state carried between steps.
    type Status: Status;
    /// A type which holds a summary of the algorithm's ending state.
    type Summary;

    /// Any setup work done before the main steps of the algorithm should be done here.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if the algorithm cannot run on the given problem with its current
    /// configuration.
    fn initialize(&mut self, problem: &SubsetSumProblem, status: &mut Self::Status) -> Result<()>;

    /// The main "step" of an algorithm, which is repeated until termination conditions are met or
    /// the max number of steps have been taken.
    fn step(&mut self, current_step: usize, problem: &SubsetSumProblem, status: &mut Self::Status);

    /// Checked before every step. Returning `true` stops the search without running the step.
    fn check_for_termination(&mut self, problem: &SubsetSumProblem, status: &mut Self::Status)
        -> bool;

    /// Runs any steps needed by the [`Algorithm`] after termination. This will run regardless of
    /// how the search ended.
    #[allow(unused_variables)]
    fn postprocessing(&mut self, problem: &SubsetSumProblem, status: &mut Self::Status) {}

    /// Generates a new [`Algorithm::Summary`] from the final state, where `current_step` is the
    /// number of completed steps.
    fn summarize(
        &self,
        current_step: usize,
        problem: &SubsetSumProblem,
        status: &Self::Status,
    ) -> Self::Summary;
}
