//! `subset-swarm` searches for a subset of integers whose sum is as close as possible to (ideally
//! exactly) a target, using a binary variant of Particle Swarm Optimization. The search is a
//! heuristic: it usually finds an exact subset when one exists, but it is not guaranteed to.
//!
//! # Table of Contents
//! - [Key Features](#key-features)
//! - [Quick Start](#quick-start)
//! - [Fitness](#fitness)
//!
//! # Key Features
//! * Binary PSO with the standard sigmoid transfer function.
//! * Fully reproducible runs: every random draw comes from a caller-supplied [`fastrand::Rng`].
//! * A small trait-based core ([`traits::Algorithm`], [`traits::Observer`]) driven by a
//!   [`core::Engine`], so searches can be watched step by step.
//!
//! # Quick Start
//!
//! ```rust
//! use subset_swarm::prelude::*;
//!
//! fn main() -> Result<(), SubsetSumError> {
//!     let problem = SubsetSumProblem::parse("10, 20, 30", "1000")?;
//!     let summary = run(&problem, 50, 300, 0.729, 1.49445, 1.49445, Rng::with_seed(0))?;
//!     assert_eq!(summary.best_sum, 60);
//!     println!("{}", summary);
//!     Ok(())
//! }
//! ```
//!
//! This should output
//! ```shell
//! Target = 1000
//! Best sum = 60
//! Accuracy = 6.0000%
//! Iterations used = 300
//! Best bits (binary) = 111
//! Chosen values = [10, 20, 30]
//! ```
//!
//! For finer control, configure a [`BinaryPSO`](algorithms::BinaryPSO) and drive it with an
//! [`Engine`](core::Engine):
//!
//! ```rust
//! use std::sync::Arc;
//! use parking_lot::RwLock;
//! use subset_swarm::prelude::*;
//! use subset_swarm::algorithms::particles::TrackingSwarmObserver;
//!
//! let problem = SubsetSumProblem::default();
//! let tracker = Arc::new(RwLock::new(TrackingSwarmObserver::default()));
//! let mut engine = Engine::new(BinaryPSO::new(Rng::with_seed(1))).setup(|e| {
//!     e.configure(|pso| pso.configure(|c| c.with_n_particles(30).with_omega(0.7)))
//!         .with_max_steps(100)
//!         .with_observer(tracker.clone())
//! });
//! let summary = engine.process(&problem).unwrap();
//! assert_eq!(tracker.read().best_history.len(), summary.iterations_used);
//! ```
//!
//! # Fitness
//! A subset with sum $`s`$ and $`k`$ items is scored against the target $`T`$ as
//! ```math
//! f = \begin{cases} 1000 - k & s = T \\ \frac{1}{1 + |T - s|} & s \neq T \end{cases}
//! ```
//! so any exact match beats every near miss, and smaller exact subsets are preferred.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing search algorithms
pub mod algorithms;
/// Module containing the core data types and the [`Engine`](core::Engine)
pub mod core;
/// Module containing the error type
pub mod error;
/// Module containing the traits which connect algorithms to the [`Engine`](core::Engine)
pub mod traits;

pub use error::SubsetSumError;
pub use nalgebra::DVector;

/// A floating-point number type (defaults to [`f64`], see `f32` feature).
#[cfg(not(feature = "f32"))]
pub type Float = f64;

/// A floating-point number type (defaults to [`f64`], see `f32` feature).
#[cfg(feature = "f32")]
pub type Float = f32;

/// Convenience re-exports of the most commonly used items.
pub mod prelude {
    pub use crate::algorithms::particles::{run, run_trials, BinaryPSO, BinaryPSOConfig};
    pub use crate::core::{BitMask, Engine, SearchSummary, SubsetSumProblem};
    pub use crate::traits::{Algorithm, Observer, Status};
    pub use crate::{Float, SubsetSumError};
    pub use fastrand::Rng;
}
