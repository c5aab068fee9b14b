//! Camera session resource for the EmojiCam modality.
//!
//! The camera stream and classification model are singletons scoped to one
//! EmojiCam activation. `CameraSession` owns them for exactly that span:
//! acquired when the mode is entered, dropped on every exit path, so no
//! classification can land after the mode is left.

use crate::recognition::RecognitionDebouncer;
use crate::service::FrameClassifier;
use tracing::{debug, warn};

/// Tick cadence for drivers polling an active session, in milliseconds.
pub const POLL_INTERVAL_MS: u64 = 500;

/// Owned classifier + debouncer pair for one camera activation.
pub struct CameraSession<C: FrameClassifier> {
    classifier: C,
    debouncer: RecognitionDebouncer,
}

impl<C: FrameClassifier> CameraSession<C> {
    /// Acquire a session around the given classifier.
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            debouncer: RecognitionDebouncer::new(),
        }
    }

    /// Run one classification tick.
    ///
    /// Classifier errors and empty result lists skip the tick; the debounce
    /// window only advances on a real reading. Ticks are serialized through
    /// `&mut self`, so a tick never observes a frame out of order. Returns
    /// the committed glyph once the top label has been stable long enough.
    pub fn tick(&mut self) -> Option<char> {
        let results = match self.classifier.classify_frame() {
            Ok(results) => results,
            Err(err) => {
                warn!(error = %err, "frame classification failed, skipping tick");
                return None;
            }
        };
        let Some(top) = results.first() else {
            debug!("classifier returned no readings, skipping tick");
            return None;
        };
        self.debouncer.observe_emoji(&top.label, top.confidence)
    }

    /// Release the classifier, ending the session.
    pub fn into_classifier(self) -> C {
        self.classifier
    }
}
