//! Typed form boundary.
//!
//! Request fields arrive as strings or not at all; this module is the
//! one place that turns them into typed values, so nothing downstream
//! ever guesses.

use serde::Deserialize;
use thiserror::Error;

use studykit_core::model::Difficulty;

/// Raw fields as the browser sends them. Repeated `subjects` keys
/// accumulate into the Vec; everything else is optional text.
#[derive(Debug, Default, Deserialize)]
pub struct QuizForm {
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub hours: Option<String>,
    #[serde(default)]
    pub scenario: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

/// Errors from form validation.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("invalid difficulty '{value}': expected easy, medium, or hard")]
    InvalidDifficulty { value: String },
}

/// A validated submission.
#[derive(Debug)]
pub struct Submission {
    /// Selected subjects, in submission order.
    pub subjects: Vec<String>,
    /// Raw hours string; the planner parses it. `None` means no plan
    /// was requested.
    pub hours: Option<String>,
    pub scenario: String,
    pub text: Option<String>,
    pub difficulty: Difficulty,
}

impl QuizForm {
    /// Validate into a [`Submission`].
    ///
    /// Browsers send empty strings for untouched fields, so empty is
    /// treated as absent throughout. A present difficulty must parse;
    /// an absent one defaults to easy.
    pub fn into_submission(self) -> Result<Submission, FormError> {
        let difficulty = match non_empty(self.difficulty) {
            Some(raw) => raw
                .parse()
                .map_err(|_| FormError::InvalidDifficulty { value: raw })?,
            None => Difficulty::Easy,
        };

        Ok(Submission {
            subjects: self
                .subjects
                .into_iter()
                .filter(|s| !s.trim().is_empty())
                .collect(),
            hours: non_empty(self.hours),
            scenario: non_empty(self.scenario).unwrap_or_default(),
            text: non_empty(self.text),
            difficulty,
        })
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied() {
        let submission = QuizForm::default().into_submission().unwrap();
        assert!(submission.subjects.is_empty());
        assert!(submission.hours.is_none());
        assert_eq!(submission.scenario, "");
        assert!(submission.text.is_none());
        assert_eq!(submission.difficulty, Difficulty::Easy);
    }

    #[test]
    fn empty_strings_treated_as_absent() {
        let form = QuizForm {
            subjects: vec!["Math".into(), "".into()],
            hours: Some("".into()),
            scenario: Some("  ".into()),
            text: Some("".into()),
            difficulty: Some("".into()),
        };
        let submission = form.into_submission().unwrap();
        assert_eq!(submission.subjects, vec!["Math".to_string()]);
        assert!(submission.hours.is_none());
        assert_eq!(submission.scenario, "");
        assert!(submission.text.is_none());
        assert_eq!(submission.difficulty, Difficulty::Easy);
    }

    #[test]
    fn difficulty_parsed_when_present() {
        let form = QuizForm {
            difficulty: Some("hard".into()),
            ..QuizForm::default()
        };
        assert_eq!(
            form.into_submission().unwrap().difficulty,
            Difficulty::Hard
        );
    }

    #[test]
    fn bad_difficulty_rejected() {
        let form = QuizForm {
            difficulty: Some("impossible".into()),
            ..QuizForm::default()
        };
        let err = form.into_submission().unwrap_err();
        assert!(err.to_string().contains("impossible"));
    }

}
