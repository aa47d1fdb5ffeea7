//! Linear bag-of-words difficulty classifier.
//!
//! Consumes two pre-trained JSON artifacts: a vectorizer vocabulary
//! (token → column index) and a linear model (per-class weight rows
//! plus bias). Training happens elsewhere; this crate only scores.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use studykit_core::model::Difficulty;
use studykit_core::traits::DifficultyClassifier;

use crate::error::ClassifierError;

/// Vectorizer artifact file name inside the models directory.
pub const VECTORIZER_FILE: &str = "vectorizer.json";

/// Model artifact file name inside the models directory.
pub const MODEL_FILE: &str = "difficulty.json";

/// Vectorizer artifact: lowercased unigram vocabulary.
#[derive(Debug, Deserialize)]
struct VectorizerArtifact {
    vocabulary: HashMap<String, usize>,
}

/// Model artifact: one weight row and bias per class label.
#[derive(Debug, Deserialize)]
struct ModelArtifact {
    classes: Vec<String>,
    weights: Vec<Vec<f64>>,
    bias: Vec<f64>,
}

/// A linear classifier over token counts.
///
/// Prediction vectorizes the text against the vocabulary, scores each
/// class as `w · x + b`, and takes the argmax (ties resolve to the
/// earlier class row). Class labels are free-form strings in the
/// artifact; a label that is not a canonical difficulty degrades to
/// [`Difficulty::Easy`] at prediction time, the same as any other
/// inference problem.
#[derive(Debug)]
pub struct LinearClassifier {
    vocabulary: HashMap<String, usize>,
    classes: Vec<String>,
    weights: Vec<Vec<f64>>,
    bias: Vec<f64>,
}

impl LinearClassifier {
    /// Load both artifacts from `models_dir`.
    pub fn load(models_dir: &Path) -> Result<Self, ClassifierError> {
        let vectorizer: VectorizerArtifact = read_artifact(&models_dir.join(VECTORIZER_FILE))?;
        let model: ModelArtifact = read_artifact(&models_dir.join(MODEL_FILE))?;

        Self::from_parts(vectorizer.vocabulary, model.classes, model.weights, model.bias)
    }

    fn from_parts(
        vocabulary: HashMap<String, usize>,
        classes: Vec<String>,
        weights: Vec<Vec<f64>>,
        bias: Vec<f64>,
    ) -> Result<Self, ClassifierError> {
        if classes.is_empty() {
            return Err(ClassifierError::Shape("model has no classes".into()));
        }
        if weights.len() != classes.len() || bias.len() != classes.len() {
            return Err(ClassifierError::Shape(format!(
                "{} classes but {} weight rows and {} bias terms",
                classes.len(),
                weights.len(),
                bias.len()
            )));
        }

        let columns = vocabulary.len();
        if let Some(row) = weights.iter().find(|row| row.len() != columns) {
            return Err(ClassifierError::Shape(format!(
                "vocabulary has {columns} tokens but a weight row has {}",
                row.len()
            )));
        }
        if let Some((token, &index)) = vocabulary.iter().find(|(_, &i)| i >= columns) {
            return Err(ClassifierError::Shape(format!(
                "token '{token}' maps to column {index}, out of range for {columns} columns"
            )));
        }

        Ok(Self {
            vocabulary,
            classes,
            weights,
            bias,
        })
    }

    /// Number of class labels in the model artifact.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Token counts against the vocabulary.
    fn vectorize(&self, text: &str) -> Vec<f64> {
        let mut counts = vec![0.0; self.vocabulary.len()];
        for token in text.split_whitespace() {
            let token: String = token
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            if let Some(&column) = self.vocabulary.get(&token) {
                counts[column] += 1.0;
            }
        }
        counts
    }

    /// The raw winning class label for `text`.
    fn predict_label(&self, text: &str) -> &str {
        let x = self.vectorize(text);

        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (row, (weights, bias)) in self.weights.iter().zip(&self.bias).enumerate() {
            let score: f64 = weights.iter().zip(&x).map(|(w, xi)| w * xi).sum::<f64>() + bias;
            if score > best_score {
                best = row;
                best_score = score;
            }
        }

        &self.classes[best]
    }
}

impl DifficultyClassifier for LinearClassifier {
    fn name(&self) -> &str {
        "linear"
    }

    fn predict(&self, text: &str) -> Difficulty {
        let label = self.predict_label(text);
        match label.parse() {
            Ok(level) => level,
            Err(_) => {
                tracing::debug!(label, "non-canonical class label, defaulting to easy");
                Difficulty::Easy
            }
        }
    }
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ClassifierError> {
    let content = std::fs::read_to_string(path).map_err(|source| ClassifierError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ClassifierError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// A tiny model: "derivative" votes hard, "plus" votes easy,
    /// everything else falls to the medium bias.
    fn write_fixture(dir: &Path) -> PathBuf {
        let vectorizer = serde_json::json!({
            "vocabulary": { "derivative": 0, "plus": 1, "what": 2 }
        });
        let model = serde_json::json!({
            "classes": ["easy", "medium", "hard"],
            "weights": [
                [0.0, 2.0, 0.1],
                [0.0, 0.0, 0.3],
                [2.0, 0.0, 0.1],
            ],
            "bias": [0.0, 0.2, 0.0]
        });
        std::fs::write(dir.join(VECTORIZER_FILE), vectorizer.to_string()).unwrap();
        std::fs::write(dir.join(MODEL_FILE), model.to_string()).unwrap();
        dir.to_path_buf()
    }

    #[test]
    fn predicts_from_token_weights() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        let classifier = LinearClassifier::load(dir.path()).unwrap();

        assert_eq!(
            classifier.predict("What is the derivative of x?"),
            Difficulty::Hard
        );
        assert_eq!(classifier.predict("What is two plus two?"), Difficulty::Easy);
        assert_eq!(classifier.predict("something else entirely"), Difficulty::Medium);
    }

    #[test]
    fn tokens_are_lowercased_and_stripped() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        let classifier = LinearClassifier::load(dir.path()).unwrap();

        assert_eq!(classifier.predict("DERIVATIVE!"), Difficulty::Hard);
    }

    #[test]
    fn empty_text_scores_bias_only() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        let classifier = LinearClassifier::load(dir.path()).unwrap();

        assert_eq!(classifier.predict(""), Difficulty::Medium);
    }

    #[test]
    fn non_canonical_label_degrades_to_easy() {
        let dir = tempfile::tempdir().unwrap();
        let vectorizer = serde_json::json!({ "vocabulary": { "x": 0 } });
        let model = serde_json::json!({
            "classes": ["brutal"],
            "weights": [[1.0]],
            "bias": [0.0]
        });
        std::fs::write(dir.path().join(VECTORIZER_FILE), vectorizer.to_string()).unwrap();
        std::fs::write(dir.path().join(MODEL_FILE), model.to_string()).unwrap();

        let classifier = LinearClassifier::load(dir.path()).unwrap();
        assert_eq!(classifier.predict("x"), Difficulty::Easy);
    }

    #[test]
    fn missing_artifact_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LinearClassifier::load(dir.path()).unwrap_err();
        assert!(matches!(err, ClassifierError::Io { .. }));
        assert!(err.to_string().contains(VECTORIZER_FILE));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(VECTORIZER_FILE), "not json").unwrap();
        std::fs::write(dir.path().join(MODEL_FILE), "{}").unwrap();

        let err = LinearClassifier::load(dir.path()).unwrap_err();
        assert!(matches!(err, ClassifierError::Parse { .. }));
    }

    #[test]
    fn shape_mismatch_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let vectorizer = serde_json::json!({ "vocabulary": { "a": 0, "b": 1 } });
        let model = serde_json::json!({
            "classes": ["easy", "hard"],
            "weights": [[1.0], [0.5]],
            "bias": [0.0, 0.0]
        });
        std::fs::write(dir.path().join(VECTORIZER_FILE), vectorizer.to_string()).unwrap();
        std::fs::write(dir.path().join(MODEL_FILE), model.to_string()).unwrap();

        let err = LinearClassifier::load(dir.path()).unwrap_err();
        assert!(matches!(err, ClassifierError::Shape(_)));
    }

    #[test]
    fn vocabulary_index_out_of_range_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let vectorizer = serde_json::json!({ "vocabulary": { "a": 5 } });
        let model = serde_json::json!({
            "classes": ["easy"],
            "weights": [[1.0]],
            "bias": [0.0]
        });
        std::fs::write(dir.path().join(VECTORIZER_FILE), vectorizer.to_string()).unwrap();
        std::fs::write(dir.path().join(MODEL_FILE), model.to_string()).unwrap();

        let err = LinearClassifier::load(dir.path()).unwrap_err();
        assert!(matches!(err, ClassifierError::Shape(_)));
    }

    #[test]
    fn ties_resolve_to_earlier_class() {
        let dir = tempfile::tempdir().unwrap();
        let vectorizer = serde_json::json!({ "vocabulary": { "x": 0 } });
        let model = serde_json::json!({
            "classes": ["medium", "hard"],
            "weights": [[1.0], [1.0]],
            "bias": [0.0, 0.0]
        });
        std::fs::write(dir.path().join(VECTORIZER_FILE), vectorizer.to_string()).unwrap();
        std::fs::write(dir.path().join(MODEL_FILE), model.to_string()).unwrap();

        let classifier = LinearClassifier::load(dir.path()).unwrap();
        assert_eq!(classifier.predict("x"), Difficulty::Medium);
    }
}
