//! PSO configuration.

use crate::error::{Error, Result};

/// Configuration for [`SwarmSolver`](super::SwarmSolver).
///
/// `alpha` weights the pull toward a particle's personal-best, `beta`
/// the pull toward the swarm's global-best. Both are used directly as
/// per-swap application probabilities, so they must lie in `[0, 1]`.
///
/// # Builder Pattern
///
/// ```
/// use tsp_metaheur::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_iterations(300)
///     .with_particles(40)
///     .with_weights(0.9, 0.7)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of velocity/update rounds.
    pub iterations: usize,

    /// Number of particles in the swarm.
    pub particles: usize,

    /// Per-swap application probability of the personal-best pull.
    pub alpha: f64,

    /// Per-swap application probability of the global-best pull.
    pub beta: f64,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            particles: 50,
            alpha: 1.0,
            beta: 1.0,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Sets the iteration budget.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the swarm size.
    pub fn with_particles(mut self, n: usize) -> Self {
        self.particles = n;
        self
    }

    /// Sets the personal-best (`alpha`) and global-best (`beta`) pull
    /// probabilities.
    pub fn with_weights(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::InvalidInput("iterations must be at least 1".into()));
        }
        if self.particles == 0 {
            return Err(Error::InvalidInput("particles must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.alpha) || !(0.0..=1.0).contains(&self.beta) {
            return Err(Error::InvalidInput(format!(
                "alpha and beta are applied as probabilities and must lie in [0, 1], \
                 got alpha={} beta={}",
                self.alpha, self.beta
            )));
        }
        Ok(())
    }
}
