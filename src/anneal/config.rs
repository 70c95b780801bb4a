//! Run parameters and cooling schedules.

use super::error::AnnealError;

/// Maps an outer-iteration index to a temperature.
///
/// Temperatures conventionally decrease from 1.0 toward 0, widening or
/// narrowing the acceptance function's tolerance for cost-increasing moves.
/// The engine treats the schedule as a black box; any `Fn(usize) -> f64`
/// closure works via the blanket implementation.
pub trait CoolingSchedule {
    /// Temperature for the given outer iteration (0-based).
    fn temperature(&self, outer: usize) -> f64;
}

impl<F> CoolingSchedule for F
where
    F: Fn(usize) -> f64,
{
    fn temperature(&self, outer: usize) -> f64 {
        self(outer)
    }
}

/// Fixed multiplicative decay: `T(k) = alpha^k`.
///
/// The first outer iteration runs at temperature 1.0; each subsequent
/// iteration multiplies by `alpha`. Typical `alpha`: 0.9-0.99, higher is
/// slower cooling.
#[derive(Debug, Clone, Copy)]
pub struct GeometricCooling {
    /// Decay factor in (0, 1).
    pub alpha: f64,
}

impl GeometricCooling {
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }
}

impl Default for GeometricCooling {
    fn default() -> Self {
        Self { alpha: 0.9 }
    }
}

impl CoolingSchedule for GeometricCooling {
    fn temperature(&self, outer: usize) -> f64 {
        self.alpha.powi(outer as i32)
    }
}

/// Parameters for a single annealing run. Immutable once the run starts.
///
/// # Examples
///
/// ```
/// use genanneal::anneal::AnnealParams;
///
/// let params = AnnealParams::default()
///     .with_max_temperatures(200)
///     .with_iters_per_temperature(50)
///     .with_cost_reduction_tol(0.0)
///     .with_seed(42);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealParams {
    /// Outer-loop bound: number of temperatures to visit. A value of 0
    /// degenerates to an immediate return of the initial solution.
    pub max_temperatures: usize,

    /// Inner-loop bound: perturbations evaluated at each temperature.
    /// A value of 0 degenerates like `max_temperatures = 0`.
    pub iters_per_temperature: usize,

    /// Early-stop threshold: the run terminates once the ratio of current
    /// to initial cost drops strictly below this. Any value <= 0 disables
    /// early exit, since a non-negative ratio cannot be strictly below a
    /// non-positive bound.
    pub cost_reduction_tol: f64,

    /// Emit per-acceptance diagnostics through the `log` facade. Pure side
    /// channel, no effect on results.
    pub verbose: bool,

    /// Seed for the engine-owned generator in
    /// [`Annealer::run`](crate::anneal::Annealer::run). `None` seeds from
    /// the OS. Ignored by `run_with_rng`.
    pub seed: Option<u64>,
}

impl Default for AnnealParams {
    fn default() -> Self {
        Self {
            max_temperatures: 100,
            iters_per_temperature: 500,
            cost_reduction_tol: 1e-4,
            verbose: false,
            seed: None,
        }
    }
}

impl AnnealParams {
    pub fn with_max_temperatures(mut self, n: usize) -> Self {
        self.max_temperatures = n;
        self
    }

    pub fn with_iters_per_temperature(mut self, n: usize) -> Self {
        self.iters_per_temperature = n;
        self
    }

    pub fn with_cost_reduction_tol(mut self, tol: f64) -> Self {
        self.cost_reduction_tol = tol;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns whether tolerance-based early exit is in effect.
    pub(crate) fn early_exit_enabled(&self) -> bool {
        self.cost_reduction_tol > 0.0
    }

    /// Validates the parameters.
    pub fn validate(&self) -> Result<(), AnnealError> {
        if self.cost_reduction_tol.is_nan() {
            return Err(AnnealError::InvalidConfig(
                "cost_reduction_tol must not be NaN".into(),
            ));
        }
        Ok(())
    }
}
