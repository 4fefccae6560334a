//! GA configuration.

use crate::error::{Error, Result};

/// Configuration for [`GeneticSolver`](super::GeneticSolver).
///
/// # Defaults
///
/// ```
/// use tsp_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_metaheur::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_generations(1000)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// The population is replaced wholesale each generation.
    pub population_size: usize,

    /// Number of generations to run before returning the best-ever tour.
    pub generations: usize,

    /// Mutation probability for individuals at or below mean fitness.
    pub min_mutation_probability: f64,

    /// Mutation probability ceiling for the fittest individuals.
    pub max_mutation_probability: f64,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            min_mutation_probability: 0.01,
            max_mutation_probability: 0.05,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation probability bounds.
    pub fn with_mutation_probabilities(mut self, min: f64, max: f64) -> Self {
        self.min_mutation_probability = min;
        self.max_mutation_probability = max;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(Error::InvalidInput(
                "population_size must be at least 1".into(),
            ));
        }
        if self.generations == 0 {
            return Err(Error::InvalidInput("generations must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.min_mutation_probability)
            || !(0.0..=1.0).contains(&self.max_mutation_probability)
            || self.min_mutation_probability > self.max_mutation_probability
        {
            return Err(Error::InvalidInput(format!(
                "mutation probabilities must satisfy 0 <= min <= max <= 1, got min={} max={}",
                self.min_mutation_probability, self.max_mutation_probability
            )));
        }
        Ok(())
    }
}
