/// Particle swarm algorithms
pub mod particles;
pub use particles::BinaryPSO;
