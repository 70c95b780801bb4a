//! Simulated annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Accepts worsening moves with a probability that
//! decreases over time (temperature), allowing the search to escape
//! local optima.
//!
//! The engine is pluggable along four seams: the candidate [`Solution`],
//! the [`AcceptanceFunction`], the [`CoolingSchedule`], and the random
//! source (any [`rand::Rng`]).
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod error;
mod runner;
mod types;

pub use config::{AnnealParams, CoolingSchedule, GeometricCooling};
pub use error::AnnealError;
pub use runner::{Annealer, RunResult, Termination};
pub use types::{AcceptanceFunction, CostValue, Metropolis, Solution};
