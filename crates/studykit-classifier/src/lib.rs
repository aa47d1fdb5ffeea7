//! studykit-classifier — difficulty classifier integrations.
//!
//! Implements the `DifficultyClassifier` trait over pre-trained
//! artifacts on disk, plus a mock for testing. The classifier is
//! strictly optional: loading can fail, prediction cannot.

pub mod error;
pub mod linear;
pub mod mock;

use std::path::Path;
use std::sync::Arc;

use studykit_core::traits::DifficultyClassifier;

pub use error::ClassifierError;
pub use linear::LinearClassifier;
pub use mock::MockClassifier;

/// Load the classifier from `models_dir`, or disable it.
///
/// Load failure is not a startup failure: it logs one warning and the
/// system continues with static difficulty labels only.
pub fn load_or_disable(models_dir: &Path) -> Option<Arc<dyn DifficultyClassifier>> {
    match LinearClassifier::load(models_dir) {
        Ok(classifier) => {
            tracing::info!(
                dir = %models_dir.display(),
                classes = classifier.class_count(),
                "difficulty classifier loaded"
            );
            Some(Arc::new(classifier))
        }
        Err(e) => {
            tracing::warn!(dir = %models_dir.display(), "difficulty classifier disabled: {e}");
            None
        }
    }
}
