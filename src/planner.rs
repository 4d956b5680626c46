//! Treatment planning facade.
//!
//! Composes the intake path (classify, derive the initial day
//! allocation, optionally compute an annealed variant) and the follow-up
//! path (one adjustment per feedback round). The caller persists the
//! working schedule between calls.
//!
//! # Refinement
//!
//! The working schedule handed back from intake is always the plain
//! classifier-plus-generator output. Annealing is an advisory side
//! channel: when configured, the refined variant is returned alongside
//! the working schedule rather than replacing it, and it can also be
//! invoked directly through [`crate::annealing::refine`] at any point.
//!
//! # Example
//!
//! ```
//! use regimen::models::{CycleFeedback, PatientProfile};
//! use regimen::planner::TreatmentPlanner;
//!
//! let planner = TreatmentPlanner::new();
//! let outcome = planner.intake(&PatientProfile::new(2, 70, 70));
//! assert_eq!(outcome.schedule.treatment_days, 20);
//!
//! let feedback = CycleFeedback::new(40, 80);
//! let next = planner.feedback_round(&outcome.schedule, &feedback);
//! assert_eq!(next.treatment_days, 18);
//! ```

use crate::adaptation;
use crate::annealing::{refine, AnnealingConfig};
use crate::classifier::classify;
use crate::models::{CycleFeedback, PatientProfile, TreatmentSchedule};

/// Result of an intake.
#[derive(Debug, Clone)]
pub struct IntakeOutcome {
    /// The working schedule the caller should persist.
    pub schedule: TreatmentSchedule,
    /// Annealed variant, present when refinement is configured.
    pub refined: Option<TreatmentSchedule>,
}

/// Facade over classification, initial scheduling, refinement, and
/// feedback adjustment.
#[derive(Debug, Clone, Default)]
pub struct TreatmentPlanner {
    refinement: Option<AnnealingConfig>,
}

impl TreatmentPlanner {
    /// Creates a planner without refinement.
    pub fn new() -> Self {
        Self { refinement: None }
    }

    /// Enables advisory refinement on intake.
    pub fn with_refinement(mut self, config: AnnealingConfig) -> Self {
        self.refinement = Some(config);
        self
    }

    /// Builds the initial schedule for a patient.
    pub fn intake(&self, profile: &PatientProfile) -> IntakeOutcome {
        let protocol = classify(profile);
        let schedule = TreatmentSchedule::new(profile.clone(), protocol);
        let refined = self
            .refinement
            .as_ref()
            .map(|config| refine(&schedule, config));

        IntakeOutcome { schedule, refined }
    }

    /// Applies one round of post-cycle feedback to the working schedule.
    pub fn feedback_round(
        &self,
        schedule: &TreatmentSchedule,
        feedback: &CycleFeedback,
    ) -> TreatmentSchedule {
        adaptation::adjust(schedule, feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annealing::burden;
    use crate::models::Protocol;

    #[test]
    fn test_intake_without_refinement() {
        let planner = TreatmentPlanner::new();
        let outcome = planner.intake(&PatientProfile::new(2, 70, 70));

        assert_eq!(outcome.schedule.protocol, Protocol::Abvd);
        assert_eq!(outcome.schedule.treatment_days, 20);
        assert_eq!(outcome.schedule.break_days, 8);
        assert!(outcome.refined.is_none());
    }

    #[test]
    fn test_intake_with_refinement_keeps_working_schedule() {
        let planner =
            TreatmentPlanner::new().with_refinement(AnnealingConfig::default().with_seed(42));
        let outcome = planner.intake(&PatientProfile::new(2, 70, 70));

        // The working schedule is untouched; the annealed variant rides
        // alongside and never costs more.
        assert_eq!(outcome.schedule.treatment_days, 20);
        assert_eq!(outcome.schedule.break_days, 8);
        let refined = outcome.refined.unwrap();
        assert!(burden(&refined) <= burden(&outcome.schedule));
        assert_eq!(refined.plan, outcome.schedule.plan);
    }

    #[test]
    fn test_intake_selects_protocol_per_rules() {
        let planner = TreatmentPlanner::new();
        let outcome = planner.intake(&PatientProfile::new(3, 55, 55));
        assert_eq!(outcome.schedule.protocol, Protocol::AAvd);
        // 6-week cycles: 30 weekday treatment days, 12 weekend rest days.
        assert_eq!(outcome.schedule.treatment_days, 30);
        assert_eq!(outcome.schedule.break_days, 12);
    }

    #[test]
    fn test_feedback_round_lightens_struggling_patient() {
        let planner = TreatmentPlanner::new();
        let outcome = planner.intake(&PatientProfile::new(2, 70, 70));

        let next = planner.feedback_round(&outcome.schedule, &CycleFeedback::new(40, 80));
        assert_eq!(next.treatment_days, 18);
        assert_eq!(next.break_days, 10);
    }

    #[test]
    fn test_feedback_rounds_compose_over_persisted_state() {
        // Simulates the read-adjust-write loop the caller runs per cycle.
        let planner = TreatmentPlanner::new();
        let mut schedule = planner.intake(&PatientProfile::new(2, 70, 70)).schedule;

        schedule = planner.feedback_round(&schedule, &CycleFeedback::new(40, 80));
        schedule = planner.feedback_round(
            &schedule,
            &CycleFeedback::new(80, 80).with_tumor_change(-5),
        );

        // -2/+2 then +1/-1 from the 20/8 start.
        assert_eq!(schedule.treatment_days, 19);
        assert_eq!(schedule.break_days, 9);
    }
}
