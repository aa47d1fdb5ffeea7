//! Typed errors for plan generation.
//!
//! Defined here so the server boundary can map them to user-visible
//! responses without string matching.

use thiserror::Error;

/// Errors from weekly plan generation.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The hours field did not parse as a usable number.
    #[error("invalid hours value '{value}': expected a non-negative number")]
    InvalidHours { value: String },

    /// No subjects were given. Callers are expected to guard against
    /// this before asking for a plan.
    #[error("cannot generate a plan for an empty subject list")]
    NoSubjects,
}
