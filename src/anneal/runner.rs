//! The annealing loop.

use super::config::{AnnealParams, CoolingSchedule};
use super::error::AnnealError;
use super::types::{AcceptanceFunction, CostValue, Solution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// How a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The cost-reduction tolerance was met; both loops were abandoned.
    EarlyExited,

    /// Both loop bounds were consumed.
    Exhausted,
}

/// Result of an annealing run. Constructed once at completion.
#[derive(Debug, Clone)]
pub struct RunResult<S: Solution> {
    /// The reported solution. On exhausted runs this is the lower-cost of
    /// the last accepted state and the best state seen; on early exit it is
    /// the last accepted state (see [`Annealer::run_with_rng`]).
    pub best: S,

    /// Cost of `best`, cached from its evaluation.
    pub final_cost: S::Cost,

    /// Number of cost-function evaluations performed: exactly one per
    /// inner iteration executed.
    pub evaluations: usize,

    /// Outer (temperature) iterations completed. Equal to
    /// `max_temperatures` on exhausted runs; on early exit, the 0-based
    /// outer index at which the run stopped.
    pub iterations: usize,

    /// Which terminal state produced this result.
    pub termination: Termination,
}

/// Executes simulated annealing over a caller-supplied [`Solution`],
/// [`AcceptanceFunction`], and [`CoolingSchedule`].
pub struct Annealer;

impl Annealer {
    /// Runs with an engine-owned generator: seeded from
    /// [`AnnealParams::seed`] when set, from the OS otherwise. The
    /// generator's lifetime is scoped to the run.
    pub fn run<S, A, C>(
        initial: &S,
        params: &AnnealParams,
        acceptance: &A,
        cooling: &C,
    ) -> Result<RunResult<S>, AnnealError>
    where
        S: Solution,
        A: AcceptanceFunction<S::Cost>,
        C: CoolingSchedule,
    {
        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_rng(initial, params, acceptance, cooling, &mut rng)
    }

    /// Runs with a caller-supplied generator.
    ///
    /// The generator state advances on every inner iteration (acceptance
    /// draws and, typically, perturbation targets), so concurrent runs must
    /// not share one instance. `initial` is cloned on entry and never
    /// mutated.
    ///
    /// At each inner step a clone of the current state is perturbed and
    /// evaluated. Strict improvements are accepted unconditionally, without
    /// consulting the acceptance function or the generator; otherwise the
    /// acceptance probability `p` decides, accepting iff `p > x` for `x`
    /// uniform in `[0, 1)`. A non-finite `p` is clamped to 0.
    ///
    /// Termination is asymmetric, matching long-standing behavior: when the
    /// cost-reduction tolerance fires, the run returns the last ACCEPTED
    /// state immediately, which at that point is also the cheapest state
    /// ever accepted; when the loop bounds are exhausted, the run returns
    /// the lower-cost of the last accepted state and the best state seen.
    pub fn run_with_rng<S, A, C, R>(
        initial: &S,
        params: &AnnealParams,
        acceptance: &A,
        cooling: &C,
        rng: &mut R,
    ) -> Result<RunResult<S>, AnnealError>
    where
        S: Solution,
        A: AcceptanceFunction<S::Cost>,
        C: CoolingSchedule,
        R: Rng,
    {
        params.validate()?;

        let mut current = initial.clone();
        let mut current_cost = current.cost();
        let initial_cost = current_cost.as_f64();

        // The tolerance check divides by the initial cost; refuse upfront
        // rather than let NaN comparisons decide termination.
        if params.early_exit_enabled() && (initial_cost == 0.0 || !initial_cost.is_finite()) {
            return Err(AnnealError::DegenerateInitialCost(initial_cost));
        }

        let mut best = current.clone();
        let mut best_cost = current_cost;
        let mut evaluations = 0usize;

        for outer in 0..params.max_temperatures {
            let temperature = cooling.temperature(outer);

            for inner in 0..params.iters_per_temperature {
                let mut candidate = current.clone();
                candidate.perturb(rng);
                let candidate_cost = candidate.cost();
                evaluations += 1;

                let accepted = if candidate_cost < current_cost {
                    if candidate_cost < best_cost {
                        best = candidate.clone();
                        best_cost = candidate_cost;
                    }
                    true
                } else {
                    let mut p = acceptance.probability(current_cost, candidate_cost, temperature);
                    if !p.is_finite() {
                        if params.verbose {
                            log::warn!(
                                "acceptance function returned non-finite probability {p} \
                                 at temperature {temperature}; rejecting"
                            );
                        }
                        p = 0.0;
                    }
                    p > rng.random_range(0.0..1.0)
                };

                if accepted {
                    current = candidate;
                    current_cost = candidate_cost;

                    if params.verbose {
                        log::debug!(
                            "accepted move at temperature step {outer}, inner step {inner}: \
                             new cost {current_cost:?}"
                        );
                    }

                    // Checked on acceptance only.
                    if params.early_exit_enabled()
                        && current_cost.as_f64() / initial_cost < params.cost_reduction_tol
                    {
                        if params.verbose {
                            log::debug!(
                                "met cost reduction tolerance at temperature step {outer}, \
                                 inner step {inner}"
                            );
                        }
                        return Ok(RunResult {
                            best: current,
                            final_cost: current_cost,
                            evaluations,
                            iterations: outer,
                            termination: Termination::EarlyExited,
                        });
                    }
                }
            }
        }

        // The last accepted state may sit above the best state seen; report
        // whichever cached cost is lower.
        let (best, final_cost) = if current_cost < best_cost {
            (current, current_cost)
        } else {
            (best, best_cost)
        };

        Ok(RunResult {
            best,
            final_cost,
            evaluations,
            iterations: params.max_temperatures,
            termination: Termination::Exhausted,
        })
    }
}
