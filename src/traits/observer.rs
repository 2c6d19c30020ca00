use std::{fmt::Debug, sync::Arc};

use parking_lot::RwLock;

use super::Status;

/// A trait which holds a [`callback`](`Observer::callback`) function that can be used to check an
/// [`Algorithm`](`crate::traits::Algorithm`)'s [`Status`] during a search.
///
/// Observers only watch: the search stops on an exact match or at the iteration cap, never on
/// an observer's request.
pub trait Observer<S: Status> {
    /// A function that is called after every completed step of an
    /// [`Algorithm`](`crate::traits::Algorithm`). `step` counts completed steps, starting at 1.
    fn callback(&mut self, step: usize, status: &S);
}

/// A debugging observer which prints out the step and status at each step of an algorithm.
///
/// # Usage:
///
/// ```rust
/// use subset_swarm::prelude::*;
/// use subset_swarm::traits::observer::DebugObserver;
///
/// let problem = SubsetSumProblem::new(vec![10, 20, 30], 50).unwrap();
/// let pso = BinaryPSO::new(fastrand::Rng::with_seed(0));
/// let mut engine = Engine::new(pso)
///     .setup(|e| e.with_max_steps(3).with_observer(DebugObserver::build()));
/// engine.process(&problem).unwrap();
/// // ^ This will print debug messages for each step
/// ```
pub struct DebugObserver;
impl DebugObserver {
    /// Finalize the [`Observer`] by wrapping it in an [`Arc`] and [`RwLock`]
    pub fn build() -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(Self))
    }
}
impl<S: Status + Debug> Observer<S> for DebugObserver {
    fn callback(&mut self, step: usize, status: &S) {
        println!("Step: {}\n{:#?}", step, status);
    }
}
