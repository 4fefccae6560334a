//! ACO configuration.

use crate::error::{Error, Result};

/// Configuration for [`AntColonySolver`](super::AntColonySolver).
///
/// `alpha` and `beta` weight pheromone against visibility (inverse
/// distance) when exponentiated into move probabilities; both must be
/// non-negative. `evaporation` multiplies every pheromone entry once per
/// iteration and must stay in the open interval `(0, 1)`.
///
/// # Builder Pattern
///
/// ```
/// use tsp_metaheur::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_iterations(300)
///     .with_ants(40)
///     .with_weights(1.0, 3.0)
///     .with_evaporation(0.6)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of construction/deposit/evaporation rounds.
    pub iterations: usize,

    /// Number of ants constructing tours each round.
    pub ants: usize,

    /// Pheromone exponent in the move probability.
    pub alpha: f64,

    /// Visibility exponent in the move probability.
    pub beta: f64,

    /// Per-iteration pheromone retention factor, in `(0, 1)`.
    pub evaporation: f64,

    /// Uniform starting pheromone level on every edge.
    pub initial_pheromone: f64,

    /// Deposit numerator: each completed tour adds `deposit_factor / cost`
    /// to its edges.
    pub deposit_factor: f64,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            iterations: 200,
            ants: 30,
            alpha: 1.0,
            beta: 2.0,
            evaporation: 0.5,
            initial_pheromone: 1.0,
            deposit_factor: 100.0,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the iteration budget.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the colony size.
    pub fn with_ants(mut self, n: usize) -> Self {
        self.ants = n;
        self
    }

    /// Sets the pheromone (`alpha`) and visibility (`beta`) exponents.
    pub fn with_weights(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Sets the per-iteration pheromone retention factor.
    pub fn with_evaporation(mut self, factor: f64) -> Self {
        self.evaporation = factor;
        self
    }

    /// Sets the uniform starting pheromone level.
    pub fn with_initial_pheromone(mut self, level: f64) -> Self {
        self.initial_pheromone = level;
        self
    }

    /// Sets the deposit numerator.
    pub fn with_deposit_factor(mut self, factor: f64) -> Self {
        self.deposit_factor = factor;
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
        if self.ants == 0 {
            return Err(Error::InvalidInput("ants must be at least 1".into()));
        }
        if self.alpha < 0.0 || self.beta < 0.0 {
            return Err(Error::InvalidInput(format!(
                "alpha and beta must be non-negative, got alpha={} beta={}",
                self.alpha, self.beta
            )));
        }
        if !(self.evaporation > 0.0 && self.evaporation < 1.0) {
            return Err(Error::InvalidInput(format!(
                "evaporation must lie in (0, 1), got {}",
                self.evaporation
            )));
        }
        if self.initial_pheromone <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "initial_pheromone must be positive, got {}",
                self.initial_pheromone
            )));
        }
        if self.deposit_factor <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "deposit_factor must be positive, got {}",
                self.deposit_factor
            )));
        }
        Ok(())
    }
}
