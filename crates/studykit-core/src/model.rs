//! Core data model types for studykit.
//!
//! These are the fundamental types the entire studykit system uses to
//! represent questions, difficulty labels, and the question bank.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty of a question, either statically labeled in the bank or
/// predicted by the optional classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulty levels, in ascending order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// The question text shown to the user.
    pub text: String,
    /// The four answer options, in display order.
    pub options: Vec<String>,
    /// The correct answer; always one of `options`.
    pub answer: String,
    /// Static difficulty label. Questions without one are labeled by
    /// the classifier at selection time.
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

/// All questions for one subject, in bank order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Subject name (e.g. "Math").
    pub name: String,
    /// The subject's questions. Order carries no meaning; selection
    /// shuffles a copy.
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// An immutable collection of subjects and their questions.
///
/// Built once at startup (from the built-in data or a bank file) and
/// shared read-only for the life of the process.
#[derive(Debug, Clone)]
pub struct QuizBank {
    name: String,
    subjects: Vec<Subject>,
}

impl QuizBank {
    pub fn new(name: impl Into<String>, subjects: Vec<Subject>) -> Self {
        Self {
            name: name.into(),
            subjects,
        }
    }

    /// Human-readable bank name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Subject names in bank order.
    pub fn subject_names(&self) -> impl Iterator<Item = &str> {
        self.subjects.iter().map(|s| s.name.as_str())
    }

    /// Questions for a subject; an unknown subject yields an empty
    /// slice rather than an error.
    pub fn questions_for(&self, subject: &str) -> &[Question] {
        self.subjects
            .iter()
            .find(|s| s.name == subject)
            .map(|s| s.questions.as_slice())
            .unwrap_or(&[])
    }

    /// Total question count across all subjects.
    pub fn question_count(&self) -> usize {
        self.subjects.iter().map(|s| s.questions.len()).sum()
    }
}
