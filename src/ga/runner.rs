//! The generational evolutionary loop.

use super::config::GaConfig;
use super::operators::{pmx_crossover, swap_mutation};
use super::selection::select_proportional;
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::solution::{random_route, Solution};
use crate::solver::{seeded_rng, Improvement, Solver};
use rand::Rng;

/// Crossover proceeds only when the per-pair gate draw lands here;
/// draws outside the window leave both parents unchanged.
const CROSSOVER_WINDOW: std::ops::RangeInclusive<f64> = 0.4..=0.99;

/// Share of the route length swapped per mutation burst.
const MUTATION_SWAP_SHARE: f64 = 0.3;

/// Genetic algorithm over tour permutations.
///
/// Each generation pairs the generation's fittest individual with
/// roulette-selected mates, crosses them with PMX, perturbs the offspring
/// with fitness-scaled swap bursts plus one unconditional swap, and
/// re-injects the fittest individual over the worst offspring. The best
/// tour ever seen is tracked across generations and returned.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::distance::{DistanceMatrix, Point};
/// use tsp_metaheur::ga::{GaConfig, GeneticSolver};
/// use tsp_metaheur::solver::Solver;
///
/// let matrix =
///     DistanceMatrix::from_points(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]).unwrap();
/// let solver = GeneticSolver::new(GaConfig::default().with_generations(10).with_seed(1));
/// assert_eq!(solver.solve(&matrix).unwrap().cost, 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticSolver {
    config: GaConfig,
}

impl GeneticSolver {
    pub fn new(config: GaConfig) -> Self {
        Self { config }
    }
}

impl Solver for GeneticSolver {
    fn solve_with_observer(
        &self,
        matrix: &DistanceMatrix,
        observer: &mut dyn FnMut(&Improvement),
    ) -> Result<Solution> {
        self.config.validate()?;

        let nodes = matrix.nodes();
        let size = self.config.population_size;
        let mut rng = seeded_rng(self.config.seed);
        tracing::trace!(nodes, size, generations = self.config.generations, "ga start");

        let mut population = (0..size)
            .map(|_| Solution::evaluate(random_route(nodes, &mut rng), matrix))
            .collect::<Result<Vec<_>>>()?;

        let mut best_ever: Option<Solution> = None;

        for generation in 1..=self.config.generations {
            let best = fittest(&population).clone();
            if best_ever
                .as_ref()
                .is_none_or(|record| best.fitness > record.fitness)
            {
                tracing::debug!(generation, cost = best.cost, "new best tour");
                observer(&Improvement {
                    iteration: generation,
                    cost: best.cost,
                });
                best_ever = Some(best.clone());
            }

            // Reproduction: the generation's best crossed with a
            // roulette-picked mate, one gate draw per pair.
            let mut offspring: Vec<Solution> = Vec::with_capacity(size);
            for _ in 0..size / 2 {
                let mate = &population[select_proportional(&population, &mut rng)];
                let gate = rng.random_range(0.0..1.0);
                let (route1, route2) = if CROSSOVER_WINDOW.contains(&gate) {
                    pmx_crossover(&best.route, &mate.route, &mut rng)
                } else {
                    (best.route.clone(), mate.route.clone())
                };
                offspring.push(Solution::evaluate(route1, matrix)?);
                offspring.push(Solution::evaluate(route2, matrix)?);
            }
            // Odd population: the unpaired slot goes to the best.
            if offspring.len() < size {
                offspring.push(best.clone());
            }

            mutate_population(
                &mut offspring,
                self.config.min_mutation_probability,
                self.config.max_mutation_probability,
                &mut rng,
            );

            // Reversal: one unconditional swap per offspring, independent
            // of the mutation probability.
            for child in offspring.iter_mut() {
                swap_mutation(&mut child.route, &mut rng);
            }

            for child in offspring.iter_mut() {
                child.reevaluate(matrix)?;
            }

            // Elitism: the worst offspring never survives over the best.
            let worst = weakest_index(&offspring);
            offspring[worst] = best;

            population = offspring;
        }

        Ok(best_ever.expect("at least one generation ran"))
    }
}

/// First individual with the highest fitness.
fn fittest(population: &[Solution]) -> &Solution {
    population
        .iter()
        .reduce(|best, s| if s.fitness > best.fitness { s } else { best })
        .expect("population is never empty")
}

/// Index of the first individual with the lowest fitness.
fn weakest_index(population: &[Solution]) -> usize {
    let mut worst = 0;
    for (i, s) in population.iter().enumerate().skip(1) {
        if s.fitness < population[worst].fitness {
            worst = i;
        }
    }
    worst
}

/// Fitness-scaled mutation: individuals at or below mean fitness mutate
/// with the floor probability, fitter ones scale linearly toward the
/// ceiling. A selected individual receives a burst of random swaps sized
/// by route length.
fn mutate_population<R: Rng>(
    offspring: &mut [Solution],
    min_probability: f64,
    max_probability: f64,
    rng: &mut R,
) {
    let swaps = (MUTATION_SWAP_SHARE * offspring[0].route.len() as f64) as usize;
    let mean = offspring.iter().map(|s| s.fitness).sum::<f64>() / offspring.len() as f64;
    let max_fitness = offspring
        .iter()
        .map(|s| s.fitness)
        .fold(f64::NEG_INFINITY, f64::max);
    let spread = max_fitness - mean;

    for individual in offspring.iter_mut() {
        let probability = if !mean.is_finite() || spread <= f64::EPSILON {
            // Zero-cost tours or a fully converged population.
            min_probability
        } else if individual.fitness < mean {
            min_probability
        } else {
            (min_probability + (max_probability - min_probability) * (individual.fitness - mean)
                / spread)
                .min(max_probability)
        };

        if rng.random_range(0.0..1.0) <= probability {
            for _ in 0..swaps {
                swap_mutation(&mut individual.route, rng);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Point;
    use std::collections::HashSet;

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
        .expect("4 distinct points")
    }

    #[test]
    fn test_unit_square_converges_to_perimeter() {
        let matrix = unit_square();
        let solver = GeneticSolver::new(
            GaConfig::default()
                .with_population_size(20)
                .with_generations(200)
                .with_seed(42),
        );
        let best = solver.solve(&matrix).unwrap();
        assert_eq!(best.cost, 4.0, "expected the perimeter tour, got {best:?}");
    }

    #[test]
    fn test_two_points_exact_for_any_seed() {
        let matrix =
            DistanceMatrix::from_points(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]).unwrap();
        for seed in 0..5 {
            let solver = GeneticSolver::new(
                GaConfig::default()
                    .with_population_size(4)
                    .with_generations(10)
                    .with_seed(seed),
            );
            let best = solver.solve(&matrix).unwrap();
            assert_eq!(best.cost, 10.0);
        }
    }

    #[test]
    fn test_best_ever_cost_never_increases() {
        let matrix = DistanceMatrix::from_points(&[
            Point::new(0.0, 0.0),
            Point::new(4.0, 1.0),
            Point::new(2.0, 5.0),
            Point::new(7.0, 3.0),
            Point::new(1.0, 8.0),
            Point::new(6.0, 7.0),
            Point::new(3.0, 2.0),
            Point::new(8.0, 5.0),
        ])
        .unwrap();
        let solver = GeneticSolver::new(
            GaConfig::default()
                .with_population_size(30)
                .with_generations(100)
                .with_seed(7),
        );

        let mut costs = Vec::new();
        solver
            .solve_with_observer(&matrix, &mut |imp| costs.push(imp.cost))
            .unwrap();

        assert!(!costs.is_empty(), "first generation always reports");
        for window in costs.windows(2) {
            assert!(
                window[1] < window[0],
                "improvements must strictly decrease cost: {costs:?}"
            );
        }
    }

    #[test]
    fn test_result_is_permutation() {
        let points: Vec<Point> = (0..10)
            .map(|i| Point::new((i * 13 % 7) as f64, (i * 5 % 11) as f64))
            .collect();
        let matrix = DistanceMatrix::from_points(&points).unwrap();
        let solver = GeneticSolver::new(
            GaConfig::default()
                .with_population_size(15)
                .with_generations(30)
                .with_seed(3),
        );
        let best = solver.solve(&matrix).unwrap();

        let unique: HashSet<usize> = best.route.iter().copied().collect();
        assert_eq!(best.route.len(), 10);
        assert_eq!(unique.len(), 10, "route is not a permutation: {:?}", best.route);
    }

    #[test]
    fn test_coincident_points_report_zero_cost() {
        let matrix = DistanceMatrix::from_points(&[
            Point::new(2.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(2.0, 2.0),
        ])
        .unwrap();
        let solver = GeneticSolver::new(
            GaConfig::default()
                .with_population_size(10)
                .with_generations(20)
                .with_seed(5),
        );
        let best = solver.solve(&matrix).unwrap();
        assert_eq!(best.cost, 0.0);
        assert!(best.fitness.is_infinite());
        assert_eq!(best.route.len(), 4);
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        let matrix = unit_square();
        let zero_pop = GeneticSolver::new(GaConfig::default().with_population_size(0));
        assert!(zero_pop.solve(&matrix).is_err());

        let zero_gens = GeneticSolver::new(GaConfig::default().with_generations(0));
        assert!(zero_gens.solve(&matrix).is_err());
    }

    #[test]
    fn test_single_individual_population() {
        let matrix = unit_square();
        let solver = GeneticSolver::new(
            GaConfig::default()
                .with_population_size(1)
                .with_generations(5)
                .with_seed(11),
        );
        let best = solver.solve(&matrix).unwrap();
        assert_eq!(best.route.len(), 4);
        assert!(best.cost >= 4.0);
    }

    #[test]
    fn test_odd_population_size() {
        let matrix = unit_square();
        let solver = GeneticSolver::new(
            GaConfig::default()
                .with_population_size(7)
                .with_generations(50)
                .with_seed(13),
        );
        let best = solver.solve(&matrix).unwrap();
        assert_eq!(best.route.len(), 4);
    }
}
