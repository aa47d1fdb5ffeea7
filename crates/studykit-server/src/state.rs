//! Shared request-handling state.

use std::sync::Arc;

use anyhow::{Context, Result};

use studykit_core::bank::{builtin_bank, parse_bank};
use studykit_core::model::QuizBank;
use studykit_core::selector::QuizSelector;
use studykit_core::traits::DifficultyClassifier;

use crate::config::StudykitConfig;

/// Everything a request needs, built once before the server binds and
/// read-only afterwards.
pub struct AppState {
    bank: Arc<QuizBank>,
    selector: QuizSelector,
}

impl AppState {
    pub fn new(bank: Arc<QuizBank>, classifier: Option<Arc<dyn DifficultyClassifier>>) -> Self {
        let selector = QuizSelector::new(Arc::clone(&bank), classifier);
        Self { bank, selector }
    }

    /// Build state from configuration: bank from file or built-in,
    /// classifier from artifacts or disabled.
    ///
    /// A corrupt bank file is an operator error and fails startup;
    /// missing classifier artifacts only disable classification.
    pub fn from_config(config: &StudykitConfig) -> Result<Self> {
        let bank = match &config.bank_path {
            Some(path) => parse_bank(path)
                .with_context(|| format!("failed to load bank from {}", path.display()))?,
            None => builtin_bank(),
        };
        tracing::info!(
            bank = bank.name(),
            subjects = bank.subjects().len(),
            questions = bank.question_count(),
            "question bank loaded"
        );

        let classifier = studykit_classifier::load_or_disable(&config.models_dir);

        Ok(Self::new(Arc::new(bank), classifier))
    }

    pub fn bank(&self) -> &QuizBank {
        &self.bank
    }

    pub fn selector(&self) -> &QuizSelector {
        &self.selector
    }
}
