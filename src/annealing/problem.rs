//! Day-allocation annealing instance.
//!
//! Bridges the treatment schedule to the generic engine: states are whole
//! schedules, the neighbor move jitters the two day counts, and cost is
//! the allocation's burden score.

use rand::Rng;

use super::{AnnealingConfig, AnnealingProblem, AnnealingRunner};
use crate::models::TreatmentSchedule;

/// Burden contribution of one active-treatment day.
pub const TREATMENT_DAY_WEIGHT: f64 = 1.0;
/// Burden contribution of one rest day.
pub const BREAK_DAY_WEIGHT: f64 = 0.5;
/// Largest single-step day-count shift the neighbor move applies.
const MAX_DAY_SHIFT: i32 = 2;

/// Burden score of a schedule's day allocation; lower is better.
///
/// A weighted sum of the two day counts and nothing else, so schedules
/// differing only in clinical metadata always score the same. Treatment
/// days weigh twice as heavily as rest days.
pub fn burden(schedule: &TreatmentSchedule) -> f64 {
    schedule.treatment_days as f64 * TREATMENT_DAY_WEIGHT
        + schedule.break_days as f64 * BREAK_DAY_WEIGHT
}

/// Annealing instance over a schedule's day allocation.
///
/// The neighbor move shifts `treatment_days` and `break_days`
/// independently by a uniform amount in [-2, +2] and floors both at zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct DayShiftProblem;

impl AnnealingProblem for DayShiftProblem {
    type State = TreatmentSchedule;

    fn cost(&self, state: &TreatmentSchedule) -> f64 {
        burden(state)
    }

    fn neighbor<R: Rng>(&self, state: &TreatmentSchedule, rng: &mut R) -> TreatmentSchedule {
        let mut next = state.clone();
        next.treatment_days += rng.random_range(-MAX_DAY_SHIFT..=MAX_DAY_SHIFT);
        next.break_days += rng.random_range(-MAX_DAY_SHIFT..=MAX_DAY_SHIFT);
        next.clamp_days();
        next
    }
}

/// Refines a schedule's day allocation, returning the lowest-burden
/// variant found.
pub fn refine(schedule: &TreatmentSchedule, config: &AnnealingConfig) -> TreatmentSchedule {
    AnnealingRunner::run(&DayShiftProblem, schedule.clone(), config).best
}
