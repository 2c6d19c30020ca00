/// [`Engine`] type for running search algorithms.
pub mod engine;
/// Fitness, accuracy, and transfer functions.
pub mod fitness;
/// [`BitMask`] type for subset membership.
pub mod mask;
/// [`Point`] type for defining an evaluated point in the search space.
pub mod point;
/// [`SubsetSumProblem`] type and input parsing.
pub mod problem;
/// [`SearchSummary`] type for the result of a search.
pub mod summary;
/// Random sampling helpers.
pub mod utils;

pub use engine::Engine;
pub use mask::BitMask;
pub use point::Point;
pub use problem::SubsetSumProblem;
pub use summary::SearchSummary;
