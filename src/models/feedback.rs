//! Post-cycle feedback model.
//!
//! One feedback record is submitted after each observed treatment cycle
//! and drives a single schedule adjustment. Tolerance, recovery, and
//! organ scores are percentages; blood counts are in thousands per
//! cubic millimeter; tumor change is a signed percentage (negative =
//! shrinkage).

use serde::{Deserialize, Serialize};

/// Tolerance, recovery, and lab signals observed after one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleFeedback {
    /// Tolerance to treatment (0-100).
    pub tolerance: i32,
    /// Ability to recover from side effects (0-100).
    pub recovery: i32,
    /// White blood cell count (thousands/mm3).
    pub wbc: i32,
    /// Red blood cell count (thousands/mm3).
    pub rbc: i32,
    /// Platelet count (thousands/mm3).
    pub platelet_count: i32,
    /// Tumor size change in percent (negative = shrinkage).
    pub tumor_change: i32,
    /// Heart function score (0-100).
    pub heart_health: i32,
    /// Lung function score (0-100).
    pub lung_health: i32,
}

impl CycleFeedback {
    /// Creates a record with the given tolerance and recovery scores and
    /// unremarkable values everywhere else (stable labs, no tumor change,
    /// full organ function).
    pub fn new(tolerance: i32, recovery: i32) -> Self {
        Self {
            tolerance,
            recovery,
            wbc: 5,
            rbc: 4,
            platelet_count: 150,
            tumor_change: 0,
            heart_health: 100,
            lung_health: 100,
        }
    }

    /// Sets the blood counts.
    pub fn with_blood_counts(mut self, wbc: i32, rbc: i32, platelet_count: i32) -> Self {
        self.wbc = wbc;
        self.rbc = rbc;
        self.platelet_count = platelet_count;
        self
    }

    /// Sets the tumor change percentage.
    pub fn with_tumor_change(mut self, tumor_change: i32) -> Self {
        self.tumor_change = tumor_change;
        self
    }

    /// Sets the organ function scores.
    pub fn with_organ_function(mut self, heart_health: i32, lung_health: i32) -> Self {
        self.heart_health = heart_health;
        self.lung_health = lung_health;
        self
    }
}
