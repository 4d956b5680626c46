//! Simulated-annealing schedule refinement.
//!
//! Single-solution trajectory search over a schedule's day allocation.
//! The engine is generic over an [`AnnealingProblem`] (state, cost, and
//! neighbor move); the scheduling instance perturbs treatment and break
//! days and minimizes the allocation's burden score.
//!
//! # Algorithm
//!
//! Geometric cooling with a fixed iteration budget. Each iteration
//! perturbs the last accepted state and accepts the candidate if it beats
//! the best cost seen so far, or probabilistically via the Metropolis
//! term otherwise. The incumbent best is tracked separately from the
//! trajectory and is what the runner returns, so a run never ends worse
//! than it started.
//!
//! # Submodules
//!
//! - `config`: cooling and budget parameters, builder style
//! - `engine`: problem trait, runner, result
//! - `problem`: day-allocation instance and the burden cost function
//!
//! # Reference
//! Kirkpatrick et al. (1983), "Optimization by Simulated Annealing"

mod config;
mod engine;
mod problem;

pub use config::AnnealingConfig;
pub use engine::{AnnealingProblem, AnnealingResult, AnnealingRunner};
pub use problem::{burden, refine, DayShiftProblem, BREAK_DAY_WEIGHT, TREATMENT_DAY_WEIGHT};
