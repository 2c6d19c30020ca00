/// Implementation of binary Particle Swarm Optimization (BPSO)
pub mod bpso;
pub use bpso::{run, run_trials, BinaryPSO, BinaryPSOConfig};

/// [`Swarm`] type for swarm-based optimizers.
pub mod swarm;
use serde::{Deserialize, Serialize};
pub use swarm::{Swarm, SwarmParticle};

/// [`SwarmStatus`] type for swarm-based optimizers.
pub mod swarm_status;
pub use swarm_status::SwarmStatus;

use crate::{core::Point, traits::Observer};

/// An [`Observer`] which stores the swarm particles' history as well as the
/// history of global best positions.
#[derive(Serialize, Deserialize, Default, Clone)]
pub struct TrackingSwarmObserver {
    /// The history of the swarm particles
    pub history: Vec<Vec<SwarmParticle>>,
    /// The history of the best position in the swarm
    pub best_history: Vec<Point>,
}

impl Observer<SwarmStatus> for TrackingSwarmObserver {
    fn callback(&mut self, _step: usize, status: &SwarmStatus) {
        self.history.push(status.get_particles());
        self.best_history.push(status.get_best());
    }
}
