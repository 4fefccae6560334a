//! Fitness-proportional parent selection.

use crate::solution::Solution;
use rand::Rng;

/// Roulette-wheel selection over normalized fitness weights.
///
/// Draws one uniform value and walks the population subtracting each
/// individual's fitness share until the draw is consumed.
///
/// Degenerate cases: a single individual is returned outright, and an
/// individual with non-finite fitness (a zero-cost tour) short-circuits
/// the wheel — it is a terminal optimum and normalizing against it would
/// poison every weight.
///
/// # Panics
/// Panics if `population` is empty.
pub(crate) fn select_proportional<R: Rng>(population: &[Solution], rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    if population.len() == 1 {
        return 0;
    }

    if let Some(idx) = population.iter().position(|s| !s.fitness.is_finite()) {
        return idx;
    }

    let total: f64 = population.iter().map(|s| s.fitness).sum();
    if total <= 0.0 {
        return rng.random_range(0..population.len());
    }

    let mut remaining = rng.random_range(0.0..1.0);
    for (i, s) in population.iter().enumerate() {
        remaining -= s.fitness / total;
        if remaining < 0.0 {
            return i;
        }
    }
    population.len() - 1 // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn individual(cost: f64) -> Solution {
        Solution {
            route: vec![0, 1],
            cost,
            fitness: crate::solution::tour_fitness(cost),
        }
    }

    #[test]
    fn test_favors_high_fitness() {
        let pop = vec![
            individual(100.0),
            individual(50.0),
            individual(1.0),
            individual(80.0),
        ];
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[select_proportional(&pop, &mut rng)] += 1;
        }
        assert!(
            counts[2] > counts[0],
            "cheapest tour should be picked most: {counts:?}"
        );
    }

    #[test]
    fn test_single_individual() {
        let pop = vec![individual(5.0)];
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(select_proportional(&pop, &mut rng), 0);
    }

    #[test]
    fn test_zero_cost_short_circuits() {
        let pop = vec![individual(10.0), individual(0.0), individual(5.0)];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(select_proportional(&pop, &mut rng), 1);
        }
    }

    #[test]
    fn test_equal_fitness_roughly_uniform() {
        let pop = vec![individual(4.0), individual(4.0), individual(4.0)];
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 3];
        let n = 9_000;
        for _ in 0..n {
            counts[select_proportional(&pop, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 2_000, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Solution> = vec![];
        let mut rng = StdRng::seed_from_u64(42);
        select_proportional(&pop, &mut rng);
    }
}
