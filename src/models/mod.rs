//! Treatment scheduling domain models.
//!
//! Provides the core data types for assigning and adjusting a patient's
//! cycle schedule. The schedule itself is a plain serializable value; all
//! behavior lives in the surrounding modules and treats it as
//! read-transform-return state.
//!
//! | Type | Role |
//! |------|------|
//! | `PatientProfile` | Risk factors captured at intake |
//! | `Protocol` | Named treatment regimen selected by the classifier |
//! | `CyclePlan` | Cycle count and durations fixed at classification |
//! | `TreatmentSchedule` | Working day allocation for the current cycle |
//! | `CycleFeedback` | Post-cycle tolerance, recovery, and lab signals |

mod feedback;
mod patient;
mod protocol;
mod schedule;

pub use feedback::CycleFeedback;
pub use patient::PatientProfile;
pub use protocol::{CyclePlan, Protocol};
pub use schedule::TreatmentSchedule;
