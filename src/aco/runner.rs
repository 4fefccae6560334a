//! The colony construction/deposit/evaporation loop.

use super::ant::Ant;
use super::config::AcoConfig;
use super::matrix::{visibility_from, EdgeMatrix};
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::solution::Solution;
use crate::solver::{seeded_rng, Improvement, Solver};

/// Tours at or below this cost deposit nothing; they are already optimal
/// and `deposit_factor / cost` would blow up.
const ZERO_COST: f64 = 1e-12;

/// Ant colony optimization over tour permutations.
///
/// The colony coordinator owns the pheromone and visibility matrices;
/// ants borrow them per step and per deposit. Each iteration every ant
/// builds a complete tour (`N-1` steps), deposits `deposit_factor / cost`
/// on its closed tour, and the whole pheromone field then evaporates.
///
/// Candidate selection is first-acceptance: the available cities are
/// scanned in order and the first one whose uniform draw is at or below
/// its move probability wins, with a deterministic highest-probability
/// fallback. This is deliberately not full roulette sampling.
#[derive(Debug, Clone)]
pub struct AntColonySolver {
    config: AcoConfig,
}

impl AntColonySolver {
    pub fn new(config: AcoConfig) -> Self {
        Self { config }
    }
}

impl Solver for AntColonySolver {
    fn solve_with_observer(
        &self,
        matrix: &DistanceMatrix,
        observer: &mut dyn FnMut(&Improvement),
    ) -> Result<Solution> {
        self.config.validate()?;

        let nodes = matrix.nodes();
        let mut rng = seeded_rng(self.config.seed);
        tracing::trace!(
            nodes,
            ants = self.config.ants,
            iterations = self.config.iterations,
            "aco start"
        );

        let visibility = visibility_from(matrix)?;
        let mut pheromone = EdgeMatrix::filled(nodes, self.config.initial_pheromone);
        let mut ants: Vec<Ant> = (0..self.config.ants).map(|_| Ant::new(nodes)).collect();

        let mut best: Option<Solution> = None;

        for iteration in 1..=self.config.iterations {
            for _ in 0..nodes - 1 {
                for ant in ants.iter_mut() {
                    ant.step(
                        &pheromone,
                        &visibility,
                        self.config.alpha,
                        self.config.beta,
                        &mut rng,
                    );
                }
            }

            let mut improved = false;
            for ant in ants.iter_mut() {
                let cost = matrix.route_cost(ant.trail())?;
                if cost > ZERO_COST {
                    ant.deposit(&mut pheromone, self.config.deposit_factor / cost);
                }
                let trail = ant.finish();

                match best.as_ref().map(|record| record.cost) {
                    // The first completed tour seeds the best silently.
                    None => best = Some(Solution::evaluate(trail, matrix)?),
                    Some(best_cost) if cost < best_cost => {
                        best = Some(Solution::evaluate(trail, matrix)?);
                        improved = true;
                    }
                    Some(_) => {}
                }
            }

            pheromone.scale(self.config.evaporation);

            if improved {
                let record = best.as_ref().expect("best is set once any ant finished");
                tracing::debug!(iteration, cost = record.cost, "new best tour");
                observer(&Improvement {
                    iteration,
                    cost: record.cost,
                });
            }
        }

        Ok(best.expect("at least one iteration with at least one ant ran"))
    }
}
