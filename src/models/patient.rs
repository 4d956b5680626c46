//! Patient intake model.
//!
//! The risk factors captured at intake: disease stage, organ function
//! scores, and bulky-disease involvement. These drive protocol selection
//! and are carried on the schedule unchanged afterward.

use serde::{Deserialize, Serialize};

/// Risk factors recorded at patient intake.
///
/// Organ function scores are percentages in [0, 100]; the stage is 1-based.
/// Range checking is the caller's concern (see [`crate::validation`]),
/// out-of-range values classify to the default protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    /// Disease stage (1-based).
    pub stage: i32,
    /// Heart function score (0-100).
    pub heart_health: i32,
    /// Lung function score (0-100).
    pub lung_health: i32,
    /// Bulky tumors or multi-site lymph node involvement.
    pub bulky_tumors: bool,
}

impl PatientProfile {
    /// Creates a profile with no bulky disease.
    pub fn new(stage: i32, heart_health: i32, lung_health: i32) -> Self {
        Self {
            stage,
            heart_health,
            lung_health,
            bulky_tumors: false,
        }
    }

    /// Sets bulky-disease involvement.
    pub fn with_bulky_tumors(mut self, bulky: bool) -> Self {
        self.bulky_tumors = bulky;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_builder() {
        let profile = PatientProfile::new(2, 75, 80).with_bulky_tumors(true);
        assert_eq!(profile.stage, 2);
        assert_eq!(profile.heart_health, 75);
        assert_eq!(profile.lung_health, 80);
        assert!(profile.bulky_tumors);
    }

    #[test]
    fn test_profile_defaults_to_no_bulky_disease() {
        let profile = PatientProfile::new(1, 90, 90);
        assert!(!profile.bulky_tumors);
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let profile = PatientProfile::new(3, 55, 60).with_bulky_tumors(true);
        let json = serde_json::to_string(&profile).unwrap();
        let back: PatientProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
