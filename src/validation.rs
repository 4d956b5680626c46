//! Input validation for intake and feedback records.
//!
//! Range checks advisory to the caller that owns form handling and
//! persistence. The scheduling core itself never validates: selection
//! and adjustment are total functions and out-of-range values fall
//! through their default branches. Checks:
//! - Stage within the staging system's range
//! - Percentage scores within [0, 100]
//! - Non-negative lab counts

use crate::models::{CycleFeedback, PatientProfile};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Disease stage outside the staging system's range.
    StageOutOfRange,
    /// A percentage score outside [0, 100].
    ScoreOutOfRange,
    /// A blood count below zero.
    NegativeLabValue,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn check_score(errors: &mut Vec<ValidationError>, name: &str, value: i32) {
    if !(0..=100).contains(&value) {
        errors.push(ValidationError::new(
            ValidationErrorKind::ScoreOutOfRange,
            format!("{name} must be in 0-100, got {value}"),
        ));
    }
}

fn check_count(errors: &mut Vec<ValidationError>, name: &str, value: i32) {
    if value < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeLabValue,
            format!("{name} must be non-negative, got {value}"),
        ));
    }
}

/// Validates an intake record.
///
/// Checks the stage against the four-stage system and both organ scores
/// against [0, 100].
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_profile(profile: &PatientProfile) -> ValidationResult {
    let mut errors = Vec::new();

    if !(1..=4).contains(&profile.stage) {
        errors.push(ValidationError::new(
            ValidationErrorKind::StageOutOfRange,
            format!("stage must be in 1-4, got {}", profile.stage),
        ));
    }
    check_score(&mut errors, "heart_health", profile.heart_health);
    check_score(&mut errors, "lung_health", profile.lung_health);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a feedback record.
///
/// Percentage signals must be in [0, 100] and blood counts non-negative.
/// Tumor change may be any sign (negative means shrinkage).
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_feedback(feedback: &CycleFeedback) -> ValidationResult {
    let mut errors = Vec::new();

    check_score(&mut errors, "tolerance", feedback.tolerance);
    check_score(&mut errors, "recovery", feedback.recovery);
    check_score(&mut errors, "heart_health", feedback.heart_health);
    check_score(&mut errors, "lung_health", feedback.lung_health);
    check_count(&mut errors, "wbc", feedback.wbc);
    check_count(&mut errors, "rbc", feedback.rbc);
    check_count(&mut errors, "platelet_count", feedback.platelet_count);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_profile_passes() {
        let profile = PatientProfile::new(2, 70, 70).with_bulky_tumors(true);
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn test_stage_out_of_range() {
        let errors = validate_profile(&PatientProfile::new(0, 70, 70)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::StageOutOfRange);

        assert!(validate_profile(&PatientProfile::new(5, 70, 70)).is_err());
    }

    #[test]
    fn test_profile_collects_all_errors() {
        let errors = validate_profile(&PatientProfile::new(0, -5, 130)).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].kind, ValidationErrorKind::StageOutOfRange);
        assert_eq!(errors[1].kind, ValidationErrorKind::ScoreOutOfRange);
        assert_eq!(errors[2].kind, ValidationErrorKind::ScoreOutOfRange);
    }

    #[test]
    fn test_valid_feedback_passes() {
        let feedback = CycleFeedback::new(80, 75).with_tumor_change(-20);
        assert!(validate_feedback(&feedback).is_ok());
    }

    #[test]
    fn test_tumor_change_may_be_negative() {
        let feedback = CycleFeedback::new(50, 50).with_tumor_change(-100);
        assert!(validate_feedback(&feedback).is_ok());
    }

    #[test]
    fn test_negative_lab_values_rejected() {
        let feedback = CycleFeedback::new(50, 50).with_blood_counts(-1, 4, -10);
        let errors = validate_feedback(&feedback).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::NegativeLabValue));
    }

    #[test]
    fn test_feedback_score_out_of_range() {
        let errors = validate_feedback(&CycleFeedback::new(101, 50)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::ScoreOutOfRange);
        assert!(errors[0].message.contains("tolerance"));
    }
}
