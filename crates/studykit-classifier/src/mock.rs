//! Mock classifier for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use studykit_core::model::Difficulty;
use studykit_core::traits::DifficultyClassifier;

/// A mock difficulty classifier for testing selection without
/// artifacts on disk.
///
/// Returns configurable predictions based on text substring matching.
pub struct MockClassifier {
    /// Map of text substring → predicted difficulty.
    responses: HashMap<String, Difficulty>,
    /// Default prediction if no substring matches.
    default_response: Difficulty,
    /// Number of predictions made.
    call_count: AtomicU32,
    /// Last text received.
    last_text: Mutex<Option<String>>,
}

impl MockClassifier {
    /// Create a mock with the given substring → difficulty mappings.
    pub fn new(responses: HashMap<String, Difficulty>) -> Self {
        Self {
            responses,
            default_response: Difficulty::Easy,
            call_count: AtomicU32::new(0),
            last_text: Mutex::new(None),
        }
    }

    /// Create a mock that always predicts the same difficulty.
    pub fn with_fixed_response(level: Difficulty) -> Self {
        Self {
            responses: HashMap::new(),
            default_response: level,
            call_count: AtomicU32::new(0),
            last_text: Mutex::new(None),
        }
    }

    /// Number of predictions made by this mock.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// The last text this mock was asked about.
    pub fn last_text(&self) -> Option<String> {
        self.last_text.lock().unwrap().clone()
    }
}

impl DifficultyClassifier for MockClassifier {
    fn name(&self) -> &str {
        "mock"
    }

    fn predict(&self, text: &str) -> Difficulty {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_text.lock().unwrap() = Some(text.to_string());

        self.responses
            .iter()
            .find(|(key, _)| text.contains(key.as_str()))
            .map(|(_, level)| *level)
            .unwrap_or(self.default_response)
    }
}
