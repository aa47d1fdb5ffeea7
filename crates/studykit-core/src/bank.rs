//! TOML question bank parser.
//!
//! Loads quiz banks from TOML files and validates them. The built-in
//! bank is embedded at compile time so the system works with no files
//! on disk.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Difficulty, Question, QuizBank, Subject};

/// Every question carries exactly this many answer options.
pub const OPTION_COUNT: usize = 4;

/// The bank compiled into the binary.
const BUILTIN_BANK: &str = include_str!("builtin_bank.toml");

/// Intermediate TOML structure for parsing bank files.
#[derive(Debug, Deserialize)]
struct TomlBankFile {
    bank: TomlBankHeader,
    #[serde(default)]
    subjects: Vec<TomlSubject>,
}

#[derive(Debug, Deserialize)]
struct TomlBankHeader {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TomlSubject {
    name: String,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    text: String,
    options: Vec<String>,
    answer: String,
    #[serde(default)]
    difficulty: Option<String>,
}

/// Parse a single TOML file into a `QuizBank`.
pub fn parse_bank(path: &Path) -> Result<QuizBank> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read bank file: {}", path.display()))?;

    parse_bank_str(&content, path)
}

/// Parse a TOML string into a `QuizBank` (useful for testing).
pub fn parse_bank_str(content: &str, source_path: &Path) -> Result<QuizBank> {
    let parsed: TomlBankFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let subjects = parsed
        .subjects
        .into_iter()
        .map(|s| {
            let subject_name = s.name;
            let questions = s
                .questions
                .into_iter()
                .enumerate()
                .map(|(i, q)| convert_question(&subject_name, i, q))
                .collect::<Result<Vec<_>>>()?;

            Ok(Subject {
                name: subject_name,
                questions,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(QuizBank::new(parsed.bank.name, subjects))
}

fn convert_question(subject: &str, index: usize, q: TomlQuestion) -> Result<Question> {
    if q.options.len() != OPTION_COUNT {
        anyhow::bail!(
            "subject '{subject}', question {index}: expected {OPTION_COUNT} options, got {}",
            q.options.len()
        );
    }
    if !q.options.contains(&q.answer) {
        anyhow::bail!(
            "subject '{subject}', question {index}: answer '{}' is not one of the options",
            q.answer
        );
    }

    let difficulty = q
        .difficulty
        .map(|d| {
            d.parse::<Difficulty>()
                .map_err(|e| anyhow::anyhow!("subject '{subject}', question {index}: {e}"))
        })
        .transpose()?;

    Ok(Question {
        text: q.text,
        options: q.options,
        answer: q.answer,
        difficulty,
    })
}

/// The bank shipped with the binary: Math, Python, and Science.
pub fn builtin_bank() -> QuizBank {
    parse_bank_str(BUILTIN_BANK, Path::new("<builtin>")).expect("built-in bank must parse")
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The subject name (if applicable).
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a bank for common issues.
///
/// Structural requirements (option count, answer membership) are
/// enforced at parse time; this reports the softer problems an author
/// probably wants to know about.
pub fn validate_bank(bank: &QuizBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate subject names; lookup only ever finds the first.
    let mut seen_subjects = std::collections::HashSet::new();
    for subject in bank.subjects() {
        if !seen_subjects.insert(&subject.name) {
            warnings.push(ValidationWarning {
                subject: Some(subject.name.clone()),
                message: format!("duplicate subject name: {}", subject.name),
            });
        }
    }

    for subject in bank.subjects() {
        if subject.questions.is_empty() {
            warnings.push(ValidationWarning {
                subject: Some(subject.name.clone()),
                message: "subject has no questions".into(),
            });
        }

        let mut seen_texts = std::collections::HashSet::new();
        for question in &subject.questions {
            if !seen_texts.insert(&question.text) {
                warnings.push(ValidationWarning {
                    subject: Some(subject.name.clone()),
                    message: format!("duplicate question text: {}", question.text),
                });
            }

            if question.difficulty.is_none() {
                warnings.push(ValidationWarning {
                    subject: Some(subject.name.clone()),
                    message: format!(
                        "question '{}' has no difficulty label; it will be \
                         classified at selection time",
                        question.text
                    ),
                });
            }
        }
    }

    warnings
}
