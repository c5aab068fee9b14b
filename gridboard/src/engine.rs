//! GridEngine: wires the keyboard to its external collaborators.
//!
//! The engine owns the `Keyboard` state machine, the suggestion provider and
//! (while EmojiCam is active) the `CameraSession`. All mutations run on the
//! caller's single control-flow thread: each operation completes before the
//! next event is processed, and the suggestion lookup resolves through the
//! keyboard's ticket check so a superseded selection never sees its response.

use gridboard_core::{
    CameraSession, FrameClassifier, Keyboard, Mode, Point, Stroke, SuggestionProvider,
};
use tracing::debug;

/// Orchestrator for one keyboard instance.
pub struct GridEngine<S: SuggestionProvider, C: FrameClassifier> {
    keyboard: Keyboard,
    provider: S,
    camera: Option<CameraSession<C>>,
}

impl<S: SuggestionProvider, C: FrameClassifier> GridEngine<S, C> {
    /// Create an engine around a fresh keyboard.
    pub fn new(provider: S) -> Self {
        Self::with_keyboard(Keyboard::new(), provider)
    }

    /// Create an engine around a pre-configured keyboard.
    pub fn with_keyboard(keyboard: Keyboard, provider: S) -> Self {
        Self {
            keyboard,
            provider,
            camera: None,
        }
    }

    /// The underlying state machine.
    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// The composition buffer.
    pub fn buffer(&self) -> &str {
        self.keyboard.buffer()
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        self.keyboard.mode()
    }

    /// The current suggestion list.
    pub fn suggestions(&self) -> &[String] {
        self.keyboard.suggestions()
    }

    /// Whether a camera session is currently held.
    pub fn camera_active(&self) -> bool {
        self.camera.is_some()
    }

    // ========== Grid selection ==========

    /// Select a main-grid group and resolve its suggestion lookup.
    ///
    /// The mode transition is synchronous; the lookup round-trip happens
    /// here and its response is applied through the keyboard's staleness
    /// check, so the flow is identical whether the provider answers
    /// instantly or after further user events.
    pub fn select_group(&mut self, index: usize) -> bool {
        let Some(request) = self.keyboard.select_group(index) else {
            return false;
        };
        let words = self.provider.suggest(&request.prefix, request.group_chars);
        debug!(group = index, count = words.len(), "suggestion lookup resolved");
        self.keyboard.apply_suggestions(&request, words);
        true
    }

    pub fn select_char(&mut self, slot: usize) -> bool {
        self.keyboard.select_char(slot)
    }

    pub fn select_suggestion(&mut self, index: usize) -> bool {
        self.keyboard.select_suggestion(index)
    }

    pub fn cancel_group(&mut self) -> bool {
        self.keyboard.cancel_group()
    }

    // ========== Composition edits ==========

    pub fn delete_char(&mut self) -> bool {
        self.keyboard.delete_char()
    }

    pub fn add_space(&mut self) -> bool {
        self.keyboard.add_space()
    }

    // ========== Freehand drawing ==========

    pub fn enter_draw(&mut self) -> bool {
        self.keyboard.enter_draw()
    }

    pub fn pen_down(&mut self, point: Point) {
        self.keyboard.pen_down(point);
    }

    pub fn pen_move(&mut self, point: Point) {
        self.keyboard.pen_move(point);
    }

    /// Classify and commit the stroke on pointer release.
    pub fn finish_stroke(&mut self) -> Option<char> {
        self.keyboard.finish_stroke()
    }

    pub fn exit_draw(&mut self) -> bool {
        self.keyboard.exit_draw()
    }

    /// The in-progress stroke, for rendering.
    pub fn stroke(&self) -> &Stroke {
        self.keyboard.stroke()
    }

    // ========== Camera recognition ==========

    /// Enter camera mode, acquiring a session around the classifier.
    ///
    /// The classifier is handed back untouched if the transition is invalid.
    pub fn enter_cam(&mut self, classifier: C) -> Result<(), C> {
        if !self.keyboard.enter_cam() {
            return Err(classifier);
        }
        self.camera = Some(CameraSession::new(classifier));
        Ok(())
    }

    /// Run one camera tick; a committed emoji ends the camera cycle.
    ///
    /// No-op unless a session is held, so ticks arriving after an exit can
    /// never mutate state.
    pub fn cam_tick(&mut self) -> Option<char> {
        let session = self.camera.as_mut()?;
        let emoji = session.tick()?;
        self.keyboard.commit_emoji(emoji);
        // Committing returns the keyboard to Normal; release the camera.
        self.camera = None;
        Some(emoji)
    }

    /// Leave camera mode, releasing the session on every path.
    pub fn exit_cam(&mut self) -> bool {
        self.camera = None;
        self.keyboard.exit_cam()
    }

    /// Reset the whole engine: camera released, keyboard back to defaults.
    pub fn clear(&mut self) {
        self.camera = None;
        self.keyboard.clear();
    }
}
