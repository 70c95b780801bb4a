//! Generic simulated annealing engine.
//!
//! The [`anneal`] module is the core: a single synchronous optimization
//! loop, pluggable along four seams supplied by the caller —
//!
//! - [`anneal::Solution`]: opaque candidate state with `cost()` and
//!   in-place `perturb()`, value-semantic under `Clone`.
//! - [`anneal::AcceptanceFunction`]: probability of keeping a worse
//!   candidate, given both costs and the temperature.
//! - [`anneal::CoolingSchedule`]: maps the outer-iteration index to a
//!   temperature.
//! - Random source: any [`rand::Rng`]; the engine owns a seeded `StdRng`
//!   when the caller supplies none.
//!
//! The [`tour`] module is a self-contained reference problem (closed
//! traveling-salesman tour with a swap neighborhood) showing how a
//! `Solution` shares immutable problem data across the clone-per-iteration
//! lifecycle.
//!
//! # Example
//!
//! ```
//! use genanneal::anneal::{Annealer, AnnealParams, GeometricCooling, Metropolis};
//! use genanneal::tour::Tour;
//!
//! let tour = Tour::new(&[0, 10, 10, 0], &[0, 10, 0, 10]);
//! let params = AnnealParams::default()
//!     .with_max_temperatures(200)
//!     .with_iters_per_temperature(50)
//!     .with_cost_reduction_tol(0.0)
//!     .with_seed(42);
//!
//! let result = Annealer::run(
//!     &tour,
//!     &params,
//!     &Metropolis::new(600.0),
//!     &GeometricCooling::new(0.95),
//! )
//! .unwrap();
//!
//! assert_eq!(result.final_cost, 40);
//! ```

pub mod anneal;
pub mod tour;
