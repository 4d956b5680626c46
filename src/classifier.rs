//! Protocol selection rules.
//!
//! Maps intake risk factors to a treatment protocol through an ordered
//! rule table. Rules are evaluated top to bottom and the first match
//! wins; every profile matches the final fallback, so selection is total
//! over any input.
//!
//! | # | Stage | Organ function | Bulky disease | Protocol |
//! |---|-------|----------------|---------------|----------|
//! | 1 | ≤ 2 | heart > 60 and lung > 60 | no | ABVD |
//! | 2 | ≤ 2 | heart > 50 and lung > 50 | yes | Stanford V |
//! | 3 | > 2 | heart > 50 and lung > 50 | any | A+AVD |
//! | 4 | any | any | any | BEACOPP |

use crate::models::{PatientProfile, Protocol};

/// Selects a treatment protocol for the given risk factors.
///
/// Deterministic and side-effect free; out-of-range scores simply fall
/// through to the BEACOPP fallback.
pub fn classify(profile: &PatientProfile) -> Protocol {
    let early_stage = profile.stage <= 2;

    if early_stage
        && profile.heart_health > 60
        && profile.lung_health > 60
        && !profile.bulky_tumors
    {
        Protocol::Abvd
    } else if early_stage
        && profile.heart_health > 50
        && profile.lung_health > 50
        && profile.bulky_tumors
    {
        Protocol::StanfordV
    } else if !early_stage && profile.heart_health > 50 && profile.lung_health > 50 {
        Protocol::AAvd
    } else {
        Protocol::Beacopp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_early_stage_strong_function_selects_abvd() {
        let profile = PatientProfile::new(2, 70, 70);
        assert_eq!(classify(&profile), Protocol::Abvd);
    }

    #[test]
    fn test_early_stage_bulky_selects_stanford_v() {
        let profile = PatientProfile::new(1, 70, 70).with_bulky_tumors(true);
        assert_eq!(classify(&profile), Protocol::StanfordV);
    }

    #[test]
    fn test_advanced_stage_adequate_function_selects_a_avd() {
        let profile = PatientProfile::new(3, 55, 55);
        assert_eq!(classify(&profile), Protocol::AAvd);
    }

    #[test]
    fn test_low_organ_function_falls_back_to_beacopp() {
        let profile = PatientProfile::new(1, 40, 70);
        assert_eq!(classify(&profile), Protocol::Beacopp);
    }

    #[test]
    fn test_bulky_with_insufficient_function_falls_back_to_beacopp() {
        // Bulky disease blocks rule 1, and a heart score of exactly 50
        // fails rule 2's strict threshold.
        let profile = PatientProfile::new(2, 50, 80).with_bulky_tumors(true);
        assert_eq!(classify(&profile), Protocol::Beacopp);
    }

    #[test]
    fn test_boundary_scores_are_exclusive() {
        // Thresholds are strict: exactly 60 fails rule 1, exactly 50
        // fails rules 2 and 3.
        assert_eq!(classify(&PatientProfile::new(1, 60, 90)), Protocol::Beacopp);
        assert_eq!(classify(&PatientProfile::new(4, 50, 90)), Protocol::Beacopp);
    }

    #[test]
    fn test_advanced_stage_low_function_falls_back_to_beacopp() {
        let profile = PatientProfile::new(4, 45, 45);
        assert_eq!(classify(&profile), Protocol::Beacopp);
    }

    #[test]
    fn test_out_of_range_stage_still_classifies() {
        // Upstream validation owns range checks; selection stays total.
        let profile = PatientProfile::new(9, 80, 80);
        assert_eq!(classify(&profile), Protocol::AAvd);
    }
}
