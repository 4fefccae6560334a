//! A single construction agent.

use super::matrix::EdgeMatrix;
use rand::Rng;

/// All ants start their tours here.
const ORIGIN: usize = 0;

/// An ant's in-progress tour: the trail grows one node per step, the
/// available list shrinks in lockstep. Pheromone and visibility are owned
/// by the colony and lent to the ant per call.
#[derive(Debug, Clone)]
pub(crate) struct Ant {
    nodes: usize,
    trail: Vec<usize>,
    /// Compact removable set: chosen cities leave via `swap_remove`.
    available: Vec<usize>,
}

impl Ant {
    pub(crate) fn new(nodes: usize) -> Self {
        Self {
            nodes,
            trail: {
                let mut t = Vec::with_capacity(nodes);
                t.push(ORIGIN);
                t
            },
            available: (1..nodes).collect(),
        }
    }

    pub(crate) fn trail(&self) -> &[usize] {
        &self.trail
    }

    /// Extends the trail by one city.
    ///
    /// Scans the available cities in storage order; the first candidate
    /// whose uniform draw is at or below its move probability is taken.
    /// If no candidate is accepted the ant moves to the
    /// highest-probability candidate seen, so the step always completes.
    pub(crate) fn step<R: Rng>(
        &mut self,
        pheromone: &EdgeMatrix,
        visibility: &EdgeMatrix,
        alpha: f64,
        beta: f64,
        rng: &mut R,
    ) {
        let current = *self.trail.last().expect("trail starts at the origin");

        let norm: f64 = self
            .available
            .iter()
            .map(|&city| desirability(pheromone, visibility, current, city, alpha, beta))
            .sum();

        let mut accepted = None;
        let mut fallback = 0;
        let mut fallback_probability = 0.0;
        for (position, &city) in self.available.iter().enumerate() {
            let probability =
                desirability(pheromone, visibility, current, city, alpha, beta) / norm;
            if probability > fallback_probability {
                fallback = position;
                fallback_probability = probability;
            }
            if rng.random_range(0.0..1.0) <= probability {
                accepted = Some(position);
                break;
            }
        }

        let position = accepted.unwrap_or(fallback);
        let city = self.available.swap_remove(position);
        self.trail.push(city);
    }

    /// Reinforces every directed edge of the closed tour.
    pub(crate) fn deposit(&self, pheromone: &mut EdgeMatrix, amount: f64) {
        for k in 0..self.trail.len() {
            let from = self.trail[k];
            let to = self.trail[(k + 1) % self.trail.len()];
            pheromone.add(from, to, amount);
        }
    }

    /// Takes the completed trail and resets the ant for the next round.
    pub(crate) fn finish(&mut self) -> Vec<usize> {
        let trail = std::mem::take(&mut self.trail);
        self.trail.reserve(self.nodes);
        self.trail.push(ORIGIN);
        self.available = (1..self.nodes).collect();
        trail
    }
}

fn desirability(
    pheromone: &EdgeMatrix,
    visibility: &EdgeMatrix,
    from: usize,
    to: usize,
    alpha: f64,
    beta: f64,
) -> f64 {
    pheromone.get(from, to).powf(alpha) * visibility.get(from, to).powf(beta)
}
