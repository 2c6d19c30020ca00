use crate::{
    algorithms::particles::{Swarm, SwarmParticle},
    core::Point,
    traits::Status,
};
use serde::{Deserialize, Serialize};

/// A status for binary particle swarm optimization.
///
/// The global best is owned here and only ever replaced by a strictly fitter point, so
/// `gbest.fx` never decreases during a search.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SwarmStatus {
    /// The global best position found by all particles
    pub gbest: Point,
    /// An indicator of whether the global best hits the target exactly
    pub converged: bool,
    /// A message containing information about the condition of the swarm
    pub message: String,
    /// The swarm
    pub swarm: Swarm,
    /// The number of fitness evaluations
    pub n_f_evals: usize,
}

impl SwarmStatus {
    /// Get the global best position found by the swarm.
    pub fn get_best(&self) -> Point {
        self.gbest.clone()
    }
    /// Get list of the particles in the swarm.
    pub fn get_particles(&self) -> Vec<SwarmParticle> {
        self.swarm.particles.clone()
    }
}

impl Status for SwarmStatus {
    fn converged(&self) -> bool {
        self.converged
    }
    fn message(&self) -> &str {
        &self.message
    }
    fn update_message(&mut self, message: &str) {
        self.message = message.to_string();
    }
}
