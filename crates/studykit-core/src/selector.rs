//! Quiz selection by subject and difficulty.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::{Difficulty, Question, QuizBank};
use crate::traits::DifficultyClassifier;

/// Maximum number of questions returned by a selection.
pub const MAX_QUESTIONS: usize = 10;

/// Minimum number of level matches required before the difficulty
/// filter is kept; below this the whole subject is used instead.
pub const MIN_LEVEL_MATCHES: usize = 5;

/// Selects quiz questions from an immutable bank.
///
/// The classifier handle is injected at construction; `None` means
/// unlabeled questions default to [`Difficulty::Easy`]. Selection
/// shuffles a per-call copy, so the bank's stored order is never
/// mutated and concurrent callers cannot observe a torn permutation.
pub struct QuizSelector {
    bank: Arc<QuizBank>,
    classifier: Option<Arc<dyn DifficultyClassifier>>,
}

impl QuizSelector {
    pub fn new(bank: Arc<QuizBank>, classifier: Option<Arc<dyn DifficultyClassifier>>) -> Self {
        Self { bank, classifier }
    }

    pub fn bank(&self) -> &QuizBank {
        &self.bank
    }

    /// Select up to [`MAX_QUESTIONS`] questions for `subject` at
    /// `level`.
    ///
    /// An unknown subject yields an empty result; if fewer than
    /// [`MIN_LEVEL_MATCHES`] questions match the requested level, the
    /// filter is dropped and the full shuffled subject is sampled
    /// instead. Never errors.
    pub fn select(&self, subject: &str, level: Difficulty) -> Vec<Question> {
        self.select_with_rng(subject, level, &mut rand::thread_rng())
    }

    /// [`select`](Self::select) with a caller-supplied RNG, for
    /// deterministic tests.
    pub fn select_with_rng<R: Rng + ?Sized>(
        &self,
        subject: &str,
        level: Difficulty,
        rng: &mut R,
    ) -> Vec<Question> {
        let mut pool: Vec<Question> = self.bank.questions_for(subject).to_vec();
        pool.shuffle(rng);

        let matching: Vec<Question> = pool
            .iter()
            .filter(|q| self.effective_difficulty(q) == level)
            .cloned()
            .collect();

        let chosen = if matching.len() < MIN_LEVEL_MATCHES {
            pool
        } else {
            matching
        };

        chosen.into_iter().take(MAX_QUESTIONS).collect()
    }

    /// A question's static label if present, the classifier's
    /// prediction otherwise. Without a classifier, unlabeled
    /// questions are treated as easy.
    fn effective_difficulty(&self, question: &Question) -> Difficulty {
        match question.difficulty {
            Some(level) => level,
            None => self
                .classifier
                .as_ref()
                .map(|c| c.predict(&question.text))
                .unwrap_or(Difficulty::Easy),
        }
    }
}
