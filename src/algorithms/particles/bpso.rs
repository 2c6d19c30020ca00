use fastrand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    algorithms::particles::{Swarm, SwarmStatus},
    core::{
        fitness::sigmoid, utils::SampleFloat, BitMask, Engine, Point, SearchSummary,
        SubsetSumProblem,
    },
    error::Result,
    traits::{Algorithm, Status},
    Float, SubsetSumError,
};

/// The configuration struct for the [`BinaryPSO`] algorithm.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BinaryPSOConfig {
    swarm: Swarm,
    omega: Float,
    c1: Float,
    c2: Float,
}
impl BinaryPSOConfig {
    /// Sets the number of particles in the swarm (default = `50`).
    pub fn with_n_particles(&mut self, value: usize) -> &mut Self {
        self.swarm.with_n_particles(value);
        self
    }
    /// Sets the inertial weight $`\omega`$ (default = `0.729`).
    ///
    /// # Panics
    ///
    /// This method will panic if $`\omega < 0`$.
    pub fn with_omega(&mut self, value: Float) -> &mut Self {
        assert!(value >= 0.0);
        self.omega = value;
        self
    }
    /// Sets the cognitive weight $`c_1`$ which controls the particle's tendency
    /// to move towards its personal best (default = `1.49445`).
    ///
    /// # Panics
    ///
    /// This method will panic if $`c_1 < 0`$.
    pub fn with_c1(&mut self, value: Float) -> &mut Self {
        assert!(value >= 0.0);
        self.c1 = value;
        self
    }
    /// Sets the social weight $`c_2`$ which controls the particle's tendency
    /// to move towards the global best (default = `1.49445`).
    ///
    /// # Panics
    ///
    /// This method will panic if $`c_2 < 0`$.
    pub fn with_c2(&mut self, value: Float) -> &mut Self {
        assert!(value >= 0.0);
        self.c2 = value;
        self
    }
    /// The number of particles in the swarm.
    pub const fn n_particles(&self) -> usize {
        self.swarm.n_particles
    }
}
impl Default for BinaryPSOConfig {
    fn default() -> Self {
        Self {
            swarm: Swarm::new(50),
            omega: 0.729,
            c1: 1.49445,
            c2: 1.49445,
        }
    }
}

/// Binary Particle Swarm Optimizer
///
/// Each particle holds a bit mask $`x`$ over the candidate values and a real velocity $`v`$ of the
/// same length. Every iteration updates each component of the velocity as
///
/// ```math
/// v_i^{t+1} = \omega v_i^t + c_1 r_{1,i}^{t+1}(p^t_i - x^t_i) + c_2 r_{2,i}^{t+1}(g^t_i - x^t_i)
/// ```
/// where $`r_1`$ and $`r_2`$ are uniform in $`[0,1)`$, $`p`$ is the particle's personal best and
/// $`g`$ the swarm's global best. The new position is then resampled bit by bit, with bit $`i`$
/// set with probability $`\sigma(v_i^{t+1}) = 1/(1+e^{-v_i^{t+1}})`$.
///
/// Particles are processed in order and each personal or global best improvement is visible
/// to the particles processed after it in the same iteration. Improvements must be strict, so
/// among equally fit points the first one found is kept. The search stops before an iteration
/// once the global best sums exactly to the target.
#[derive(Clone)]
pub struct BinaryPSO {
    config: BinaryPSOConfig,
    rng: Rng,
}

impl BinaryPSO {
    /// Construct a new binary particle swarm optimizer drawing from the given generator.
    pub fn new(rng: Rng) -> Self {
        Self {
            config: BinaryPSOConfig::default(),
            rng,
        }
    }
    /// Edit the [`BinaryPSOConfig`] of the optimizer.
    pub fn configure<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut BinaryPSOConfig) -> &mut BinaryPSOConfig,
    {
        f(&mut self.config);
        self
    }
    /// Replace the [`BinaryPSOConfig`] of the optimizer.
    pub fn with_config(mut self, config: BinaryPSOConfig) -> Self {
        self.config = config;
        self
    }
    fn update(&mut self, status: &mut SwarmStatus, problem: &SubsetSumProblem) {
        let BinaryPSOConfig { omega, c1, c2, .. } = self.config;
        let SwarmStatus {
            gbest,
            swarm,
            n_f_evals,
            ..
        } = status;
        for particle in swarm.particles.iter_mut() {
            let dim = particle.dimension();
            for i in 0..dim {
                let r1 = self.rng.float();
                let r2 = self.rng.float();
                let x_i = particle.position.x.bit(i);
                let cognitive = c1 * r1 * (particle.best.x.bit(i) - x_i);
                let social = c2 * r2 * (gbest.x.bit(i) - x_i);
                particle.velocity[i] = omega * particle.velocity[i] + cognitive + social;
            }
            let x: BitMask = particle
                .velocity
                .iter()
                .map(|&v_i| self.rng.float() < sigmoid(v_i))
                .collect();
            *n_f_evals += 1;
            if particle.update_position(x, problem) {
                gbest.update_if_improved(&particle.best);
            }
        }
    }
}

impl Algorithm for BinaryPSO {
    type Status = SwarmStatus;
    type Summary = SearchSummary;

    fn initialize(&mut self, problem: &SubsetSumProblem, status: &mut SwarmStatus) -> Result<()> {
        if self.config.n_particles() == 0 {
            return Err(SubsetSumError::EmptySwarm);
        }
        status.swarm = self.config.swarm.clone();
        status.swarm.initialize(problem, &mut self.rng);
        status.n_f_evals = status.swarm.particles.len();
        status.gbest = Point::worst(problem.dimension());
        for particle in &status.swarm.particles {
            status.gbest.update_if_improved(&particle.best);
        }
        status.update_message("Initialized");
        Ok(())
    }

    fn step(&mut self, _current_step: usize, problem: &SubsetSumProblem, status: &mut SwarmStatus) {
        self.update(status, problem);
    }

    fn check_for_termination(
        &mut self,
        problem: &SubsetSumProblem,
        status: &mut SwarmStatus,
    ) -> bool {
        status.converged = status.gbest.is_exact(problem);
        status.converged
    }

    fn postprocessing(&mut self, problem: &SubsetSumProblem, status: &mut SwarmStatus) {
        status.converged = status.gbest.is_exact(problem);
        if status.converged {
            status.update_message("EXACT MATCH");
        } else {
            status.update_message("MAX ITERATIONS");
        }
    }

    fn summarize(
        &self,
        current_step: usize,
        problem: &SubsetSumProblem,
        status: &SwarmStatus,
    ) -> SearchSummary {
        let best = status.get_best();
        SearchSummary {
            target: problem.target(),
            chosen_values: problem.chosen_values(&best.x),
            best_position: best.x,
            best_fitness: best.fx,
            best_sum: best.sum,
            iterations_used: current_step,
            converged: status.converged,
            message: status.message.clone(),
        }
    }
}

/// Run a binary particle swarm search for a subset of `problem.values()` summing to
/// `problem.target()`.
///
/// `swarm_size` particles are moved for at most `max_iterations` iterations with inertial weight
/// `w`, cognitive weight `c1` and social weight `c2`. All randomness comes from `rng`, so two
/// calls with identically seeded generators return identical summaries.
///
/// # Errors
///
/// Returns [`SubsetSumError::EmptySwarm`] if `swarm_size` is zero.
///
/// # Panics
///
/// This function will panic if any of `w`, `c1` or `c2` is negative.
pub fn run(
    problem: &SubsetSumProblem,
    swarm_size: usize,
    max_iterations: usize,
    w: Float,
    c1: Float,
    c2: Float,
    rng: Rng,
) -> Result<SearchSummary> {
    let mut pso = BinaryPSO::new(rng);
    pso.configure(|c| {
        c.with_n_particles(swarm_size)
            .with_omega(w)
            .with_c1(c1)
            .with_c2(c2)
    });
    Engine::new(pso)
        .setup(|e| e.with_max_steps(max_iterations))
        .process(problem)
}

/// Run `runs` independent searches with the same configuration.
///
/// Each search draws from its own generator forked from `rng`, so a seeded `rng` reproduces the
/// whole batch.
///
/// # Errors
///
/// Returns [`SubsetSumError::EmptySwarm`] if the configuration has no particles.
pub fn run_trials(
    problem: &SubsetSumProblem,
    config: &BinaryPSOConfig,
    max_iterations: usize,
    runs: usize,
    rng: &mut Rng,
) -> Result<Vec<SearchSummary>> {
    (0..runs)
        .map(|_| {
            let pso = BinaryPSO::new(rng.fork()).with_config(config.clone());
            Engine::new(pso)
                .setup(|e| e.with_max_steps(max_iterations))
                .process(problem)
        })
        .collect()
}
