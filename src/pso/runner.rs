//! The swarm velocity/update loop.

use super::config::PsoConfig;
use super::velocity::{apply_velocity, swap_sequence, SwapOperator};
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::solution::{random_route, Solution};
use crate::solver::{seeded_rng, Improvement, Solver};

/// One member of the swarm.
#[derive(Debug, Clone)]
struct Particle {
    current: Solution,
    best: Solution,
    velocity: Vec<SwapOperator>,
}

/// Particle swarm optimization over tour permutations.
///
/// Each iteration refreshes the swarm's global-best from the particles'
/// personal-bests, then moves every particle by a swap-sequence velocity:
/// the swaps aligning it with its personal-best (applied with probability
/// `alpha` each) followed by the swaps aligning it with the global-best
/// (probability `beta` each).
#[derive(Debug, Clone)]
pub struct SwarmSolver {
    config: PsoConfig,
}

impl SwarmSolver {
    pub fn new(config: PsoConfig) -> Self {
        Self { config }
    }
}

impl Solver for SwarmSolver {
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
            particles = self.config.particles,
            iterations = self.config.iterations,
            "pso start"
        );

        let mut particles = Vec::with_capacity(self.config.particles);
        for _ in 0..self.config.particles {
            let current = Solution::evaluate(random_route(nodes, &mut rng), matrix)?;
            particles.push(Particle {
                best: current.clone(),
                current,
                velocity: Vec::new(),
            });
        }

        let mut global_best = particles
            .iter()
            .map(|p| &p.best)
            .reduce(|best, s| if s.cost < best.cost { s } else { best })
            .expect("swarm is never empty")
            .clone();

        for iteration in 1..=self.config.iterations {
            if refresh_global_best(&particles, &mut global_best) {
                tracing::debug!(iteration, cost = global_best.cost, "new best tour");
                observer(&Improvement {
                    iteration,
                    cost: global_best.cost,
                });
            }

            for particle in particles.iter_mut() {
                let mut velocity =
                    swap_sequence(&particle.current.route, &particle.best.route, self.config.alpha);
                velocity.extend(swap_sequence(
                    &particle.current.route,
                    &global_best.route,
                    self.config.beta,
                ));

                apply_velocity(&mut particle.current.route, &velocity, &mut rng);
                particle.velocity = velocity;
                particle.current.reevaluate(matrix)?;

                if particle.current.cost < particle.best.cost {
                    particle.best = particle.current.clone();
                }
            }
        }

        // The last round of updates has not been scanned yet.
        if refresh_global_best(&particles, &mut global_best) {
            observer(&Improvement {
                iteration: self.config.iterations,
                cost: global_best.cost,
            });
        }

        Ok(global_best)
    }
}

/// Replaces the global-best if any personal-best strictly improves on it.
fn refresh_global_best(particles: &[Particle], global_best: &mut Solution) -> bool {
    let mut improved = false;
    for particle in particles {
        if particle.best.cost < global_best.cost {
            *global_best = particle.best.clone();
            improved = true;
        }
    }
    improved
}
