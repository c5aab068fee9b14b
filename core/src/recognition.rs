//! Label debouncing for the camera modality.
//!
//! Camera classifications arrive at a fixed cadence and are noisy; a label is
//! only committed once the same high-confidence reading has filled the whole
//! rolling window. Low-confidence readings demote that tick's candidate to
//! the sentinel, which can never become stable.

use tracing::{debug, warn};

/// A sample only becomes a candidate when its confidence exceeds this.
pub const CONFIDENCE_THRESHOLD: f32 = 0.9;

/// Number of consecutive agreeing candidates required before firing.
pub const WINDOW_SIZE: usize = 3;

/// Fixed mapping from recognizer labels to committed glyphs. Labels outside
/// this table are logged and ignored.
static LABEL_EMOJI: phf::Map<&'static str, char> = phf::phf_map! {
    "Chelsea Mug" => '☕',
    "Moisturizer" => '💦',
    "Tissue box" => '🤧',
    "Mask" => '😷',
    "Rubik's cube" => '🤓',
};

/// Glyph for a recognizer label, or `None` for labels outside the table.
pub fn emoji_for_label(label: &str) -> Option<char> {
    LABEL_EMOJI.get(label).copied()
}

/// Rolling stability window over `(label, confidence)` samples.
///
/// `None` slots are the sentinel for sub-threshold ticks. The window keeps
/// sliding after a fire; one-shot behavior is the caller's concern (a commit
/// ends the camera cycle).
#[derive(Debug, Clone, Default)]
pub struct RecognitionDebouncer {
    window: [Option<String>; WINDOW_SIZE],
}

impl RecognitionDebouncer {
    /// Create a debouncer with an empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one classification sample.
    ///
    /// Returns the label when the most recent `WINDOW_SIZE` candidates,
    /// including this sample, all agree on a real (non-sentinel) label.
    pub fn observe(&mut self, label: &str, confidence: f32) -> Option<String> {
        let candidate = if confidence > CONFIDENCE_THRESHOLD {
            Some(label.to_string())
        } else {
            None
        };

        self.window.rotate_left(1);
        self.window[WINDOW_SIZE - 1] = candidate;

        match &self.window {
            [Some(a), Some(b), Some(c)] if a == b && b == c => {
                debug!(label = %c, "recognition stable");
                Some(c.clone())
            }
            _ => None,
        }
    }

    /// Feed one sample and resolve a stable label through the emoji table.
    ///
    /// A stable label with no table entry is dropped with a warning.
    pub fn observe_emoji(&mut self, label: &str, confidence: f32) -> Option<char> {
        let stable = self.observe(label, confidence)?;
        match emoji_for_label(&stable) {
            Some(emoji) => Some(emoji),
            None => {
                warn!(label = %stable, "stable label has no emoji mapping, ignoring");
                None
            }
        }
    }

    /// Discard the window contents.
    pub fn reset(&mut self) {
        self.window = Default::default();
    }
}
