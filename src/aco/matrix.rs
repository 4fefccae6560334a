//! Square edge matrices for pheromone and visibility.

use crate::distance::DistanceMatrix;
use crate::error::Result;

/// Zero-length edges are clamped to this before inversion, so coincident
/// points get large finite desirability instead of an infinity that would
/// poison the move probabilities.
const MIN_EDGE_LENGTH: f64 = 1e-9;

/// Mutable N×N matrix over directed edges, owned by the colony
/// coordinator. Ants never hold a reference; they borrow it per call.
#[derive(Debug, Clone)]
pub(crate) struct EdgeMatrix {
    nodes: usize,
    /// Row-major `nodes * nodes` cells.
    cells: Vec<f64>,
}

impl EdgeMatrix {
    /// Every off-diagonal cell set to `value`, diagonal zero.
    pub(crate) fn filled(nodes: usize, value: f64) -> Self {
        let mut cells = vec![value; nodes * nodes];
        for i in 0..nodes {
            cells[i * nodes + i] = 0.0;
        }
        Self { nodes, cells }
    }

    pub(crate) fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[i * self.nodes + j]
    }

    pub(crate) fn add(&mut self, i: usize, j: usize, amount: f64) {
        self.cells[i * self.nodes + j] += amount;
    }

    /// Multiplies every cell uniformly, diagonal included (a no-op there).
    pub(crate) fn scale(&mut self, factor: f64) {
        for cell in self.cells.iter_mut() {
            *cell *= factor;
        }
    }
}

/// Static heuristic desirability of each edge: inverse distance.
pub(crate) fn visibility_from(matrix: &DistanceMatrix) -> Result<EdgeMatrix> {
    let nodes = matrix.nodes();
    let mut visibility = EdgeMatrix::filled(nodes, 0.0);
    for i in 0..nodes {
        for j in 0..nodes {
            if i == j {
                continue;
            }
            let d = matrix.cost(i, j)?.max(MIN_EDGE_LENGTH);
            visibility.cells[i * nodes + j] = 1.0 / d;
        }
    }
    Ok(visibility)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Point;

    #[test]
    fn test_filled_has_zero_diagonal() {
        let m = EdgeMatrix::filled(4, 1.0);
        for i in 0..4 {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..4 {
                if i != j {
                    assert_eq!(m.get(i, j), 1.0);
                }
            }
        }
    }

    #[test]
    fn test_scale_decays_geometrically() {
        // With no deposits, k evaporation rounds leave initial * e^k.
        let evaporation = 0.5;
        let initial = 1.0;
        let mut m = EdgeMatrix::filled(3, initial);
        for k in 1..=10 {
            m.scale(evaporation);
            let expected = initial * evaporation.powi(k);
            assert!(
                (m.get(0, 1) - expected).abs() < 1e-12,
                "after {k} rounds expected {expected}, got {}",
                m.get(0, 1)
            );
        }
    }

    #[test]
    fn test_add_targets_single_edge() {
        let mut m = EdgeMatrix::filled(3, 1.0);
        m.add(0, 2, 0.5);
        assert_eq!(m.get(0, 2), 1.5);
        assert_eq!(m.get(2, 0), 1.0, "deposits are directed");
    }

    #[test]
    fn test_visibility_is_inverse_distance() {
        let matrix =
            DistanceMatrix::from_points(&[Point::new(0.0, 0.0), Point::new(0.0, 2.0)]).unwrap();
        let v = visibility_from(&matrix).unwrap();
        assert_eq!(v.get(0, 1), 0.5);
        assert_eq!(v.get(1, 0), 0.5);
        assert_eq!(v.get(0, 0), 0.0);
    }

    #[test]
    fn test_visibility_clamps_coincident_points() {
        let matrix =
            DistanceMatrix::from_points(&[Point::new(1.0, 1.0), Point::new(1.0, 1.0)]).unwrap();
        let v = visibility_from(&matrix).unwrap();
        assert!(v.get(0, 1).is_finite());
        assert!(v.get(0, 1) > 0.0);
    }
}
