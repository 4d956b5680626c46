//! Post-cycle schedule adjustment rules.
//!
//! After each observed cycle, one feedback record maps to one of three
//! actions through an ordered rule table (first match wins):
//!
//! | # | Signals | Action |
//! |---|---------|--------|
//! | 1 | tolerance < 50, recovery < 50, WBC < 4, RBC < 3, platelets < 100, heart < 50, or lung < 50 | lighten: treatment −2, break +2 |
//! | 2 | tumor shrinking and tolerance > 70 and recovery > 70 | intensify: treatment +1, break −1 |
//! | 3 | anything else | hold |
//!
//! Distress on any single signal outranks an improving tumor trend.
//! Adjustment is a fixed-step heuristic applied once per feedback round;
//! it never re-runs the optimizer. Day counts are floored at zero after
//! every application.

use crate::models::{CycleFeedback, TreatmentSchedule};

/// The adjustment selected for one feedback round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustmentAction {
    /// Patient is struggling; shift load toward rest.
    ReduceLoad,
    /// Patient is tolerating well and improving; shift toward treatment.
    Intensify,
    /// Mixed or unremarkable signals; leave the allocation unchanged.
    Hold,
}

impl AdjustmentAction {
    /// Change applied to `treatment_days`.
    #[inline]
    pub fn treatment_delta(&self) -> i32 {
        match self {
            AdjustmentAction::ReduceLoad => -2,
            AdjustmentAction::Intensify => 1,
            AdjustmentAction::Hold => 0,
        }
    }

    /// Change applied to `break_days`.
    #[inline]
    pub fn break_delta(&self) -> i32 {
        match self {
            AdjustmentAction::ReduceLoad => 2,
            AdjustmentAction::Intensify => -1,
            AdjustmentAction::Hold => 0,
        }
    }
}

/// Selects the adjustment action for a feedback record.
pub fn assess(feedback: &CycleFeedback) -> AdjustmentAction {
    let struggling = feedback.tolerance < 50
        || feedback.recovery < 50
        || feedback.wbc < 4
        || feedback.rbc < 3
        || feedback.platelet_count < 100
        || feedback.heart_health < 50
        || feedback.lung_health < 50;

    if struggling {
        AdjustmentAction::ReduceLoad
    } else if feedback.tumor_change < 0 && feedback.tolerance > 70 && feedback.recovery > 70 {
        AdjustmentAction::Intensify
    } else {
        AdjustmentAction::Hold
    }
}

/// Applies one feedback round to a schedule.
///
/// Returns the adjusted schedule with day counts floored at zero; the
/// input is left untouched for the caller to compare or discard.
pub fn adjust(schedule: &TreatmentSchedule, feedback: &CycleFeedback) -> TreatmentSchedule {
    let action = assess(feedback);
    let mut next = schedule.clone();
    next.treatment_days += action.treatment_delta();
    next.break_days += action.break_delta();
    next.clamp_days();
    next
}
