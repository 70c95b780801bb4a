//! Closed traveling-salesman tour, the reference problem for the engine.
//!
//! City coordinates are shared behind `Arc` so that cloning a candidate
//! copies only the mutable visit order, never the city table — the engine
//! clones once per inner iteration.

use crate::anneal::Solution;
use rand::Rng;
use std::sync::Arc;

/// A closed tour over cities with integer coordinates.
///
/// The tour starts at city 0 (the depot) and closes back to it; the depot
/// never moves under perturbation. Cost is the sum over legs of the
/// integer-floored Euclidean distance, so ties are exact and the cost type
/// exercises a non-float [`CostValue`](crate::anneal::CostValue).
#[derive(Debug, Clone)]
pub struct Tour {
    xs: Arc<[i64]>,
    ys: Arc<[i64]>,
    order: Vec<u32>,
}

impl Tour {
    /// Builds the identity tour (cities visited in index order) over the
    /// given coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate slices differ in length.
    pub fn new(xs: &[i64], ys: &[i64]) -> Self {
        assert_eq!(xs.len(), ys.len(), "coordinate slices must match");
        Self {
            xs: xs.into(),
            ys: ys.into(),
            order: (0..xs.len() as u32).collect(),
        }
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visit order, starting at the depot. The closing leg back to the
    /// depot is implicit.
    pub fn order(&self) -> &[u32] {
        &self.order
    }

    fn leg(&self, from: u32, to: u32) -> u64 {
        let dx = (self.xs[to as usize] - self.xs[from as usize]) as f64;
        let dy = (self.ys[to as usize] - self.ys[from as usize]) as f64;
        (dx * dx + dy * dy).sqrt().floor() as u64
    }
}

impl Solution for Tour {
    type Cost = u64;

    fn cost(&self) -> u64 {
        let n = self.order.len();
        if n < 2 {
            return 0;
        }
        let mut dist = 0;
        for i in 0..n {
            dist += self.leg(self.order[i], self.order[(i + 1) % n]);
        }
        dist
    }

    fn perturb<R: Rng>(&mut self, rng: &mut R) {
        let n = self.order.len();
        // Need two distinct non-depot positions to swap.
        if n < 3 {
            return;
        }
        let i = rng.random_range(1..n);
        let mut j = i;
        while j == i {
            j = rng.random_range(1..n);
        }
        self.order.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square() -> Tour {
        // Corners of a 10x10 square in perimeter order.
        Tour::new(&[0, 10, 10, 0], &[0, 0, 10, 10])
    }

    #[test]
    fn test_square_perimeter_cost() {
        assert_eq!(square().cost(), 40);
    }

    #[test]
    fn test_diagonal_legs_floor() {
        let mut tour = square();
        tour.order = vec![0, 2, 1, 3];
        // Two diagonals of floor(sqrt(200)) = 14 plus two sides of 10.
        assert_eq!(tour.cost(), 48);
    }

    #[test]
    fn test_trivial_tours() {
        assert_eq!(Tour::new(&[], &[]).cost(), 0);
        assert_eq!(Tour::new(&[3], &[4]).cost(), 0);
        assert_eq!(Tour::new(&[0, 3], &[0, 4]).cost(), 10);
    }

    #[test]
    fn test_perturb_keeps_depot_fixed() {
        let mut tour = square();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            tour.perturb(&mut rng);
            assert_eq!(tour.order[0], 0);
        }
    }

    #[test]
    fn test_perturb_is_a_swap() {
        let mut tour = square();
        let before = tour.order.clone();
        let mut rng = StdRng::seed_from_u64(5);
        tour.perturb(&mut rng);

        let moved: Vec<usize> = (0..4).filter(|&i| tour.order[i] != before[i]).collect();
        assert_eq!(moved.len(), 2);

        let mut sorted = tour.order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3], "still a permutation");
    }

    #[test]
    fn test_tiny_tour_perturb_is_noop() {
        let mut tour = Tour::new(&[0, 3], &[0, 4]);
        let mut rng = StdRng::seed_from_u64(5);
        tour.perturb(&mut rng);
        assert_eq!(tour.order(), &[0, 1]);
    }

    #[test]
    fn test_clone_independence() {
        let original = square();
        let cost_before = original.cost();

        let mut copy = original.clone();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10 {
            copy.perturb(&mut rng);
        }

        assert_eq!(original.cost(), cost_before);
        assert_eq!(original.order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_clones_share_coordinates() {
        let original = square();
        let copy = original.clone();
        assert!(Arc::ptr_eq(&original.xs, &copy.xs));
        assert!(Arc::ptr_eq(&original.ys, &copy.ys));
    }
}
