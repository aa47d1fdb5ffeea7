//! Classifier trait consumed by the quiz selector.
//!
//! Implementations live in `studykit-classifier`; the trait is defined
//! here so the selector can hold a handle without depending on any
//! particular artifact format.

use crate::model::Difficulty;

/// Predicts a difficulty label from raw question text.
///
/// The selector must never observe a failure, so `predict` is
/// infallible: implementations absorb their own errors and fall back
/// to [`Difficulty::Easy`].
pub trait DifficultyClassifier: Send + Sync {
    /// Short implementation name for logs (e.g. "linear").
    fn name(&self) -> &str;

    /// Predict a difficulty for the given question text.
    fn predict(&self, text: &str) -> Difficulty;
}
