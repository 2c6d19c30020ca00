use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    core::{utils::SampleFloat, BitMask, Point, SubsetSumProblem},
    DVector, Float,
};

/// The standard deviation of the zero-mean Gaussian used for initial velocities.
pub const INITIAL_VELOCITY_SCALE: Float = 0.1;

/// A particle with a binary position, a real-valued velocity, and best known position.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct SwarmParticle {
    /// The current position of the particle
    pub position: Point,
    /// The velocity of the particle, one component per item
    pub velocity: DVector<Float>,
    /// The best position of the particle (as measured by the maximum value of `fx`)
    pub best: Point,
}

impl SwarmParticle {
    /// Create a particle at a random position with a small random velocity.
    ///
    /// For each item in order, one fair coin is drawn for the bit and then one Gaussian sample for
    /// the velocity component.
    pub fn random(problem: &SubsetSumProblem, rng: &mut Rng) -> Self {
        let dimension = problem.dimension();
        let mut x = BitMask::zeros(dimension);
        let mut velocity = DVector::zeros(dimension);
        for i in 0..dimension {
            x.set(i, rng.bool());
            velocity[i] = rng.normal(0.0, INITIAL_VELOCITY_SCALE);
        }
        Self::new(x, velocity, problem)
    }
    /// Create a particle at the given position, which also becomes its personal best.
    pub fn new(x: BitMask, velocity: DVector<Float>, problem: &SubsetSumProblem) -> Self {
        let position = Point::evaluate(x, problem);
        Self {
            best: position.clone(),
            position,
            velocity,
        }
    }
    /// Move the particle to `x` and evaluate it. Returns `true` if this strictly improved the
    /// particle's personal best, which is then replaced.
    pub fn update_position(&mut self, x: BitMask, problem: &SubsetSumProblem) -> bool {
        self.position = Point::evaluate(x, problem);
        if self.position.improves_on(&self.best) {
            self.best = self.position.clone();
            true
        } else {
            false
        }
    }
    /// The number of items (the dimension of the particle).
    pub fn dimension(&self) -> usize {
        self.position.x.len()
    }
}

/// A swarm of particles used in binary particle swarm optimization.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Swarm {
    /// The number of particles
    pub n_particles: usize,
    /// A list of the particles in the swarm
    pub particles: Vec<SwarmParticle>,
}

impl Swarm {
    /// Create an empty swarm which will hold `n_particles` once initialized.
    pub fn new(n_particles: usize) -> Self {
        Self {
            n_particles,
            particles: Vec::with_capacity(n_particles),
        }
    }
    /// Create the particles in order, each with [`SwarmParticle::random`].
    pub fn initialize(&mut self, problem: &SubsetSumProblem, rng: &mut Rng) {
        self.particles = (0..self.n_particles)
            .map(|_| SwarmParticle::random(problem, rng))
            .collect();
    }
    /// Sets the number of particles in the swarm.
    pub fn with_n_particles(&mut self, value: usize) -> &mut Self {
        self.n_particles = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use fastrand::Rng;

    use super::*;

    #[test]
    fn test_particle_starts_at_its_best() {
        let problem = SubsetSumProblem::default();
        let particle = SwarmParticle::random(&problem, &mut Rng::with_seed(3));
        assert_eq!(particle.dimension(), 40);
        assert_eq!(particle.velocity.len(), 40);
        assert_eq!(particle.position, particle.best);
        assert_eq!(particle.best.sum, problem.subset_sum(&particle.best.x));
        assert!(particle
            .velocity
            .iter()
            .all(|v| v.abs() < 10.0 * INITIAL_VELOCITY_SCALE));
    }

    #[test]
    fn test_personal_best_only_improves() {
        let problem = SubsetSumProblem::new(vec![10, 20, 30], 25).unwrap();
        let mut particle = SwarmParticle::new(
            BitMask::from(vec![true, false, false]),
            DVector::zeros(3),
            &problem,
        );
        assert!(particle.update_position(BitMask::from(vec![true, true, false]), &problem));
        assert_eq!(particle.best.sum, 30);
        // same fitness, different mask: not an improvement
        assert!(!particle.update_position(BitMask::from(vec![false, true, false]), &problem));
        assert_eq!(particle.best.x, BitMask::from(vec![true, true, false]));
        assert!(!particle.update_position(BitMask::zeros(3), &problem));
        assert_eq!(particle.position.sum, 0);
        assert_eq!(particle.best.sum, 30);
    }

    #[test]
    fn test_swarm_initialize() {
        let problem = SubsetSumProblem::default();
        let mut swarm = Swarm::new(5);
        swarm.with_n_particles(12);
        swarm.initialize(&problem, &mut Rng::with_seed(1));
        assert_eq!(swarm.particles.len(), 12);
    }
}
