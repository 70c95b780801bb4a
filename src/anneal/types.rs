//! Core traits for the annealing engine.

use num_traits::ToPrimitive;
use rand::Rng;
use std::fmt::Debug;

/// An ordered numeric cost produced by [`Solution::cost`].
///
/// Lower is better. The engine only ever compares costs and widens them to
/// `f64` (for the cost-reduction ratio and for handing deltas to acceptance
/// functions), so any ordered numeric primitive qualifies via the blanket
/// implementation: `f64`, `u64`, `i32`, `usize`, and so on.
pub trait CostValue: PartialOrd + Copy + Debug {
    /// Widens the cost to `f64`. Values outside `f64` range map to NaN.
    fn as_f64(&self) -> f64;
}

impl<T> CostValue for T
where
    T: ToPrimitive + PartialOrd + Copy + Debug,
{
    fn as_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

/// A candidate solution for simulated annealing.
///
/// The user implements cost evaluation and in-place perturbation; the
/// engine handles temperature management, the acceptance criterion, and
/// best-solution tracking.
///
/// # Value semantics
///
/// Solutions must be independently copyable: a clone is unaffected by later
/// mutation of the original. The engine perturbs clones and never mutates
/// the caller's initial solution. Cloning should be cheap relative to the
/// inner iteration count — share large immutable problem data (distance
/// tables, coordinates) behind `Arc` rather than deep-copying it, as
/// [`Tour`](crate::tour::Tour) does.
///
/// # Minimization
///
/// The engine minimizes cost. For maximization, negate the cost.
pub trait Solution: Clone {
    /// The cost type. Lower is better.
    type Cost: CostValue;

    /// Computes the cost of the current state. Must be a pure function of
    /// state and return a finite, comparable value.
    fn cost(&self) -> Self::Cost;

    /// Applies a small randomized in-place modification, defining the
    /// local search neighborhood. The neighborhood must be connected for
    /// the search to reach arbitrary states.
    fn perturb<R: Rng>(&mut self, rng: &mut R);
}

/// Probability model for accepting a cost-increasing move.
///
/// Called only when a candidate is no better than the current state; strict
/// improvements are accepted without consulting this function. The returned
/// value is interpreted as a probability in `[0, 1]`; non-finite returns
/// are treated as 0 (reject).
///
/// Any `Fn(C, C, f64) -> f64` closure works via the blanket implementation:
///
/// ```
/// use genanneal::anneal::AcceptanceFunction;
///
/// let metropolis = |old: f64, new: f64, t: f64| ((old - new) / t).exp();
/// assert!(metropolis.probability(1.0, 1.0, 0.5) >= 1.0);
/// ```
pub trait AcceptanceFunction<C: CostValue> {
    /// Probability of accepting `candidate` over `current` at the given
    /// temperature, where `candidate` is no better than `current`.
    fn probability(&self, current: C, candidate: C, temperature: f64) -> f64;
}

impl<C, F> AcceptanceFunction<C> for F
where
    C: CostValue,
    F: Fn(C, C, f64) -> f64,
{
    fn probability(&self, current: C, candidate: C, temperature: f64) -> f64 {
        self(current, candidate, temperature)
    }
}

/// The canonical Metropolis acceptance function:
/// `exp((current - candidate) / (temperature * delta_scale))`.
///
/// `delta_scale` normalizes the cost delta to the temperature range.
/// Temperatures produced by [`GeometricCooling`](crate::anneal::GeometricCooling)
/// start at 1.0, so problems with large absolute cost deltas need a scale
/// on the order of a typical delta; a tour over coordinates in the hundreds
/// anneals well around `delta_scale = 600`.
///
/// # References
///
/// Metropolis et al. (1953); Kirkpatrick, Gelatt & Vecchi (1983)
#[derive(Debug, Clone, Copy)]
pub struct Metropolis {
    /// Divisor applied to the cost delta before the exponential.
    pub delta_scale: f64,
}

impl Metropolis {
    pub fn new(delta_scale: f64) -> Self {
        Self { delta_scale }
    }
}

impl Default for Metropolis {
    fn default() -> Self {
        Self { delta_scale: 1.0 }
    }
}

impl<C: CostValue> AcceptanceFunction<C> for Metropolis {
    fn probability(&self, current: C, candidate: C, temperature: f64) -> f64 {
        ((current.as_f64() - candidate.as_f64()) / temperature / self.delta_scale).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_value_widening() {
        assert!((42u64.as_f64() - 42.0).abs() < 1e-12);
        assert!(((-3i32).as_f64() + 3.0).abs() < 1e-12);
        assert!((1.5f64.as_f64() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_metropolis_equal_costs() {
        let m = Metropolis::default();
        let p = m.probability(10.0, 10.0, 0.5);
        assert!((p - 1.0).abs() < 1e-12, "zero delta should give p = 1");
    }

    #[test]
    fn test_metropolis_decreases_with_delta() {
        let m = Metropolis::default();
        let p_small = m.probability(10.0, 11.0, 1.0);
        let p_large = m.probability(10.0, 20.0, 1.0);
        assert!(p_small > p_large);
        assert!(p_large > 0.0);
    }

    #[test]
    fn test_metropolis_widens_with_temperature() {
        let m = Metropolis::default();
        let p_hot = m.probability(10.0, 15.0, 1.0);
        let p_cold = m.probability(10.0, 15.0, 0.01);
        assert!(p_hot > p_cold);
    }

    #[test]
    fn test_metropolis_integral_costs() {
        let m = Metropolis::new(600.0);
        let p = m.probability(100u64, 150u64, 1.0);
        assert!(p > 0.9, "small scaled delta should be near-certain, got {p}");
    }

    #[test]
    fn test_closure_acceptance() {
        let always = |_: u32, _: u32, _: f64| 1.0;
        assert!((always.probability(1, 2, 0.5) - 1.0).abs() < 1e-12);
    }
}
