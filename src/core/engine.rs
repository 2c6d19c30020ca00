use std::sync::Arc;

use parking_lot::RwLock;

use crate::{
    core::SubsetSumProblem,
    error::Result,
    traits::{Algorithm, Observer, Status},
};

/// The default iteration cap of an [`Engine`].
pub const DEFAULT_MAX_STEPS: usize = 300;

/// The main struct used for running [`Algorithm`]s on [`SubsetSumProblem`]s.
pub struct Engine<A: Algorithm> {
    /// The [`Status`] of the [`Algorithm`], usually read after the search.
    pub status: A::Status,
    algorithm: A,
    observers: Vec<Arc<RwLock<dyn Observer<A::Status>>>>,
    max_steps: usize,
}

impl<A: Algorithm> Engine<A> {
    /// Creates a new [`Engine`] with the given [`Algorithm`].
    pub fn new(algorithm: A) -> Self {
        Self {
            status: A::Status::default(),
            algorithm,
            observers: Vec::default(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Convenience method to use chainable methods to set up the [`Engine`].
    pub fn setup<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(&mut Self) -> &mut Self,
    {
        f(&mut self);
        self
    }

    /// Edit the [`Algorithm`] held by the [`Engine`].
    pub fn configure<F>(&mut self, mut f: F) -> &mut Self
    where
        F: FnMut(&mut A) -> &mut A,
    {
        f(&mut self.algorithm);
        self
    }

    /// Set the maximum number of steps to perform (default: 300).
    pub fn with_max_steps(&mut self, max_steps: usize) -> &mut Self {
        self.max_steps = max_steps;
        self
    }

    /// Adds a single [`Observer`] to the [`Engine`].
    pub fn with_observer<O: Observer<A::Status> + 'static>(
        &mut self,
        observer: Arc<RwLock<O>>,
    ) -> &mut Self {
        self.observers.push(observer);
        self
    }

    /// Run the [`Algorithm`] on the given problem.
    ///
    /// This method first runs [`Algorithm::initialize`], then runs [`Algorithm::step`] in a loop,
    /// stopping when [`Algorithm::check_for_termination`] returns `true` before a step or once
    /// the maximum number of steps has been taken. Each step is followed by a sequential call to
    /// all given [`Observer`]s. Finally [`Algorithm::postprocessing`] and
    /// [`Algorithm::summarize`] are called, the latter with the number of completed steps.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if [`Algorithm::initialize`] fails.
    pub fn process(&mut self, problem: &SubsetSumProblem) -> Result<A::Summary> {
        self.status.reset();
        self.algorithm.initialize(problem, &mut self.status)?;
        let mut current_step = 0;
        while current_step < self.max_steps
            && !self
                .algorithm
                .check_for_termination(problem, &mut self.status)
        {
            self.algorithm
                .step(current_step, problem, &mut self.status);
            current_step += 1;
            for observer in &self.observers {
                observer.write().callback(current_step, &self.status);
            }
        }
        self.algorithm.postprocessing(problem, &mut self.status);
        Ok(self
            .algorithm
            .summarize(current_step, problem, &self.status))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::RwLock;

    use super::*;

    #[derive(Default)]
    struct CountingStatus {
        value: i64,
        message: String,
    }
    impl Status for CountingStatus {
        fn converged(&self) -> bool {
            false
        }
        fn message(&self) -> &str {
            &self.message
        }
        fn update_message(&mut self, message: &str) {
            self.message = message.to_string();
        }
    }

    /// Adds one to a counter per step and stops once the counter reaches the target.
    struct Counter;
    impl Algorithm for Counter {
        type Status = CountingStatus;
        type Summary = (usize, i64);
        fn initialize(&mut self, _: &SubsetSumProblem, status: &mut CountingStatus) -> Result<()> {
            status.update_message("Initialized");
            Ok(())
        }
        fn step(&mut self, _: usize, _: &SubsetSumProblem, status: &mut CountingStatus) {
            status.value += 1;
        }
        fn check_for_termination(
            &mut self,
            problem: &SubsetSumProblem,
            status: &mut CountingStatus,
        ) -> bool {
            status.value == problem.target()
        }
        fn summarize(
            &self,
            current_step: usize,
            _: &SubsetSumProblem,
            status: &CountingStatus,
        ) -> (usize, i64) {
            (current_step, status.value)
        }
    }

    #[derive(Default)]
    struct StepRecorder {
        steps: Vec<usize>,
    }
    impl Observer<CountingStatus> for StepRecorder {
        fn callback(&mut self, step: usize, _status: &CountingStatus) {
            self.steps.push(step);
        }
    }

    #[test]
    fn test_engine_stops_before_step_on_termination() {
        let problem = SubsetSumProblem::new(vec![1], 4).unwrap();
        let recorder = Arc::new(RwLock::new(StepRecorder::default()));
        let mut engine = Engine::new(Counter).setup(|e| e.with_observer(recorder.clone()));
        assert_eq!(engine.process(&problem).unwrap(), (4, 4));
        assert_eq!(recorder.read().steps, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_engine_respects_max_steps() {
        let problem = SubsetSumProblem::new(vec![1], 1000).unwrap();
        let mut engine = Engine::new(Counter).setup(|e| e.with_max_steps(7));
        assert_eq!(engine.process(&problem).unwrap(), (7, 7));
        let mut engine = Engine::new(Counter).setup(|e| e.with_max_steps(0));
        assert_eq!(engine.process(&problem).unwrap(), (0, 0));
    }

    #[test]
    fn test_engine_resets_status() {
        let problem = SubsetSumProblem::new(vec![1], 3).unwrap();
        let mut engine = Engine::new(Counter);
        assert_eq!(engine.process(&problem).unwrap(), (3, 3));
        assert_eq!(engine.process(&problem).unwrap(), (3, 3));
        assert_eq!(engine.status.message(), "Initialized");
    }
}
