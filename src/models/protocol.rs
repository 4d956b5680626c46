//! Treatment protocols and cycle plans.
//!
//! A protocol is a named regimen with a fixed cycle structure: how many
//! cycles to run, how long each cycle lasts, and how many rest weeks
//! follow the cycle block. The plan is set once at classification and
//! never changes; only the working day allocation derived from it does.

use serde::{Deserialize, Serialize};

/// A named treatment regimen.
///
/// Each variant maps to a fixed [`CyclePlan`]. Selection is done by the
/// rule table in [`crate::classifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Protocol {
    /// ABVD, the early-stage favorable regimen.
    Abvd,
    /// Stanford V, early-stage with bulky disease.
    StanfordV,
    /// A+AVD, advanced stage with adequate organ function.
    AAvd,
    /// BEACOPP, the intensive fallback regimen.
    Beacopp,
}

impl Protocol {
    /// Protocol name as commonly written.
    pub fn name(&self) -> &'static str {
        match self {
            Protocol::Abvd => "ABVD",
            Protocol::StanfordV => "Stanford V",
            Protocol::AAvd => "A+AVD",
            Protocol::Beacopp => "BEACOPP",
        }
    }

    /// The fixed cycle structure for this protocol.
    pub fn cycle_plan(&self) -> CyclePlan {
        match self {
            Protocol::Abvd => CyclePlan::new(6, 4, 1),
            Protocol::StanfordV => CyclePlan::new(12, 3, 0),
            Protocol::AAvd => CyclePlan::new(4, 6, 2),
            Protocol::Beacopp => CyclePlan::new(8, 3, 1),
        }
    }
}

/// Cycle structure fixed at classification time.
///
/// Immutable for the lifetime of a schedule; the working day counts on
/// [`crate::models::TreatmentSchedule`] start derived from
/// `weeks_per_cycle` and evolve independently afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CyclePlan {
    /// Number of treatment cycles.
    pub num_cycles: i32,
    /// Duration of one cycle in weeks.
    pub weeks_per_cycle: i32,
    /// Rest weeks appended after the cycle block.
    pub break_weeks: i32,
}

impl CyclePlan {
    /// Creates a cycle plan.
    pub fn new(num_cycles: i32, weeks_per_cycle: i32, break_weeks: i32) -> Self {
        Self {
            num_cycles,
            weeks_per_cycle,
            break_weeks,
        }
    }

    /// Initial day allocation for one cycle: treatment on the 5 weekdays,
    /// rest on the 2 weekend days of every cycle week.
    ///
    /// Returns `(treatment_days, break_days)`.
    pub fn initial_days(&self) -> (i32, i32) {
        (self.weeks_per_cycle * 5, self.weeks_per_cycle * 2)
    }
}
