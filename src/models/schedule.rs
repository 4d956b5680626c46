//! Treatment schedule (working solution) model.
//!
//! The schedule carries the patient's intake profile, the selected
//! protocol with its fixed cycle plan, and the working day allocation for
//! the current cycle. The day counts start derived from the plan and are
//! mutated only by annealing refinement and post-cycle adjustment, both
//! of which clamp them at zero.

use serde::{Deserialize, Serialize};

use super::{CyclePlan, PatientProfile, Protocol};

/// A patient's working treatment schedule.
///
/// This is the single unit of schedule state per patient. Callers persist
/// it between rounds; every operation in this crate consumes and returns
/// it by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentSchedule {
    /// Risk factors captured at intake.
    pub profile: PatientProfile,
    /// Selected treatment regimen.
    pub protocol: Protocol,
    /// Cycle structure fixed at classification.
    pub plan: CyclePlan,
    /// Active-treatment days in the current cycle.
    pub treatment_days: i32,
    /// Rest days in the current cycle.
    pub break_days: i32,
}

impl TreatmentSchedule {
    /// Creates a schedule with day counts derived from the protocol's plan.
    pub fn new(profile: PatientProfile, protocol: Protocol) -> Self {
        let plan = protocol.cycle_plan();
        let (treatment_days, break_days) = plan.initial_days();
        Self {
            profile,
            protocol,
            plan,
            treatment_days,
            break_days,
        }
    }

    /// Overrides the working day allocation.
    pub fn with_days(mut self, treatment_days: i32, break_days: i32) -> Self {
        self.treatment_days = treatment_days;
        self.break_days = break_days;
        self.clamp_days();
        self
    }

    /// Total days in the current cycle's allocation.
    #[inline]
    pub fn cycle_length_days(&self) -> i32 {
        self.treatment_days + self.break_days
    }

    /// Fraction of the cycle spent in active treatment (0.0..1.0).
    ///
    /// Returns 0.0 for an empty allocation.
    pub fn treatment_fraction(&self) -> f64 {
        let total = self.cycle_length_days();
        if total == 0 {
            0.0
        } else {
            self.treatment_days as f64 / total as f64
        }
    }

    /// Floors both day counts at zero.
    pub fn clamp_days(&mut self) {
        self.treatment_days = self.treatment_days.max(0);
        self.break_days = self.break_days.max(0);
    }
}
