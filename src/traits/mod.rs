/// Module containing the [`Algorithm`] trait.
pub mod algorithm;
/// Module containing the [`Observer`] trait and its implementations.
pub mod observer;
/// Module containing the [`Status`] trait.
pub mod status;

pub use algorithm::Algorithm;
pub use observer::Observer;
pub use status::Status;
