//! Traits for the keyboard's external collaborators.
//!
//! The word-suggestion service and the camera image classifier live outside
//! this crate (HTTP client, ML runtime); the core consumes them through
//! these seams so engines and tests can swap implementations freely.

use anyhow::Result;

/// Stateless request/response word suggestions.
///
/// Given the in-progress word and the characters of the selected group,
/// returns ranked suggestion strings. Failures of any kind surface as an
/// empty list; the selection stays navigable either way.
pub trait SuggestionProvider {
    fn suggest(&mut self, prefix: &str, group_chars: &str) -> Vec<String>;
}

/// One classifier reading for a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub label: String,
    /// In `[0, 1]`, higher is more certain.
    pub confidence: f32,
}

impl Classification {
    pub fn new<L: Into<String>>(label: L, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// Classifies the current camera frame.
///
/// Returns readings ordered best-first; callers only consult the top entry.
/// An error skips the tick without advancing any debounce state.
pub trait FrameClassifier {
    fn classify_frame(&mut self) -> Result<Vec<Classification>>;
}
