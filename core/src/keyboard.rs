//! Top-level input state machine for the grid keyboard.
//!
//! The `Keyboard` owns the composition buffer, the current mode, the active
//! suggestion list and the in-progress stroke, and computes every state
//! transition. `Normal` is the hub: `GroupSelected`, `EmojiDraw` and
//! `EmojiCam` each return to it on completion or cancellation, and no other
//! mode is reachable from a non-hub mode.
//!
//! Every mutator replaces buffer, mode, suggestions and stroke together so
//! the state is never observable half-updated. Operations invoked from the
//! wrong mode are contract violations on the driver's side; they are logged
//! and ignored rather than applied.

use crate::chargroup;
use crate::gesture::{self, Gesture, Point, Stroke};
use crate::Config;
use tracing::{debug, warn};

/// Hard cap on the suggestion list length.
pub const MAX_SUGGESTIONS: usize = 6;

/// Mutually-exclusive top-level UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Main grid visible, composition editable.
    #[default]
    Normal,
    /// Sub-grid of the given group index (0..=8) visible.
    GroupSelected(usize),
    /// Freehand gesture canvas active.
    EmojiDraw,
    /// Camera recognizer active.
    EmojiCam,
}

/// Ticket for one in-flight suggestion lookup.
///
/// Issued by [`Keyboard::select_group`]; the caller dispatches the lookup and
/// hands the ticket back with the response. The sequence number lets the
/// keyboard reject responses whose selection has since been superseded, even
/// by a re-selection of the same group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub seq: u64,
    pub group: usize,
    /// The in-progress word: everything after the last space in the buffer.
    pub prefix: String,
    pub group_chars: &'static str,
}

/// Input state machine owning the composition buffer.
#[derive(Debug, Clone)]
pub struct Keyboard {
    buffer: String,
    mode: Mode,
    suggestions: Vec<String>,
    stroke: Stroke,
    drawing: bool,
    suggestion_seq: u64,
    max_suggestions: usize,
    auto_space: bool,
}

impl Keyboard {
    /// Create a keyboard in `Normal` mode with an empty buffer.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            mode: Mode::Normal,
            suggestions: Vec::new(),
            stroke: Stroke::new(),
            drawing: false,
            suggestion_seq: 0,
            max_suggestions: MAX_SUGGESTIONS,
            auto_space: true,
        }
    }

    /// Create a keyboard honoring the configured suggestion cap and spacing.
    pub fn with_config(config: &Config) -> Self {
        let mut kb = Self::new();
        kb.max_suggestions = config.max_suggestions.clamp(1, MAX_SUGGESTIONS);
        kb.auto_space = config.auto_space_after_suggestion;
        kb
    }

    /// The composition buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The current suggestion list. Non-empty only while a group is selected.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// The in-progress stroke (EmojiDraw only).
    pub fn stroke(&self) -> &Stroke {
        &self.stroke
    }

    /// Reset everything: buffer, mode, suggestions and stroke.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.mode = Mode::Normal;
        self.suggestions.clear();
        self.stroke.clear();
        self.drawing = false;
    }

    // ========== Group selection ==========

    /// Select a main-grid group, entering `GroupSelected(index)`.
    ///
    /// Returns the ticket for the suggestion lookup keyed by the in-progress
    /// word and the group's characters. The transition is synchronous; the
    /// response is applied later through [`apply_suggestions`], which
    /// validates the ticket.
    ///
    /// [`apply_suggestions`]: Keyboard::apply_suggestions
    pub fn select_group(&mut self, index: usize) -> Option<SuggestionRequest> {
        if self.mode != Mode::Normal {
            warn!(mode = ?self.mode, index, "select_group outside Normal, ignoring");
            return None;
        }
        let Some(group_chars) = chargroup::chars_for_group(index) else {
            warn!(index, "select_group with out-of-range index, ignoring");
            return None;
        };

        let prefix = self
            .buffer
            .split(' ')
            .next_back()
            .unwrap_or("")
            .to_string();

        self.suggestion_seq += 1;
        self.mode = Mode::GroupSelected(index);
        self.suggestions.clear();

        Some(SuggestionRequest {
            seq: self.suggestion_seq,
            group: index,
            prefix,
            group_chars,
        })
    }

    /// Apply a suggestion response for the given ticket.
    ///
    /// The response is written only while the selection that issued the
    /// ticket is still current; anything else is a stale response for a
    /// superseded selection and is discarded. Returns whether it applied.
    pub fn apply_suggestions(&mut self, request: &SuggestionRequest, words: Vec<String>) -> bool {
        if request.seq != self.suggestion_seq || self.mode != Mode::GroupSelected(request.group) {
            debug!(
                seq = request.seq,
                group = request.group,
                mode = ?self.mode,
                "discarding stale suggestion response"
            );
            return false;
        }
        self.suggestions = words;
        self.suggestions.truncate(self.max_suggestions);
        true
    }

    /// Append the sub-grid character at `slot`, returning to `Normal`.
    pub fn select_char(&mut self, slot: usize) -> bool {
        let Mode::GroupSelected(group) = self.mode else {
            warn!(mode = ?self.mode, slot, "select_char outside GroupSelected, ignoring");
            return false;
        };
        let Some(ch) = chargroup::chars_for_group(group).and_then(|s| s.chars().nth(slot)) else {
            warn!(group, slot, "select_char slot out of range, ignoring");
            return false;
        };
        self.buffer.push(ch);
        self.suggestions.clear();
        self.mode = Mode::Normal;
        true
    }

    /// Replace the in-progress word with the suggestion at `index`.
    ///
    /// Deletes the buffer suffix back to the last space (or the start), then
    /// appends the suggestion and a trailing space, returning to `Normal`.
    pub fn select_suggestion(&mut self, index: usize) -> bool {
        if !matches!(self.mode, Mode::GroupSelected(_)) {
            warn!(mode = ?self.mode, index, "select_suggestion outside GroupSelected, ignoring");
            return false;
        }
        let Some(word) = self.suggestions.get(index).cloned() else {
            warn!(index, "select_suggestion index out of range, ignoring");
            return false;
        };

        let keep = self.buffer.rfind(' ').map(|pos| pos + 1).unwrap_or(0);
        self.buffer.truncate(keep);
        self.buffer.push_str(&word);
        if self.auto_space {
            self.buffer.push(' ');
        }
        self.suggestions.clear();
        self.mode = Mode::Normal;
        true
    }

    /// Leave the sub-grid without selecting, buffer unchanged.
    pub fn cancel_group(&mut self) -> bool {
        if !matches!(self.mode, Mode::GroupSelected(_)) {
            warn!(mode = ?self.mode, "cancel_group outside GroupSelected, ignoring");
            return false;
        }
        self.suggestions.clear();
        self.mode = Mode::Normal;
        true
    }

    // ========== Composition edits (Normal mode) ==========

    /// Remove the last character of the buffer; no-op when empty.
    pub fn delete_char(&mut self) -> bool {
        if self.mode != Mode::Normal {
            warn!(mode = ?self.mode, "delete_char outside Normal, ignoring");
            return false;
        }
        self.buffer.pop().is_some()
    }

    /// Append a single space.
    pub fn add_space(&mut self) -> bool {
        if self.mode != Mode::Normal {
            warn!(mode = ?self.mode, "add_space outside Normal, ignoring");
            return false;
        }
        self.buffer.push(' ');
        true
    }

    // ========== Emoji modalities ==========

    /// Enter the freehand drawing mode.
    pub fn enter_draw(&mut self) -> bool {
        if self.mode != Mode::Normal {
            warn!(mode = ?self.mode, "enter_draw outside Normal, ignoring");
            return false;
        }
        self.stroke.clear();
        self.drawing = false;
        self.mode = Mode::EmojiDraw;
        true
    }

    /// Leave drawing mode, discarding any in-progress stroke.
    pub fn exit_draw(&mut self) -> bool {
        if self.mode != Mode::EmojiDraw {
            warn!(mode = ?self.mode, "exit_draw outside EmojiDraw, ignoring");
            return false;
        }
        self.stroke.clear();
        self.drawing = false;
        self.mode = Mode::Normal;
        true
    }

    /// Enter the camera recognizer mode.
    pub fn enter_cam(&mut self) -> bool {
        if self.mode != Mode::Normal {
            warn!(mode = ?self.mode, "enter_cam outside Normal, ignoring");
            return false;
        }
        self.mode = Mode::EmojiCam;
        true
    }

    /// Leave camera mode. The owning engine drops the camera session.
    pub fn exit_cam(&mut self) -> bool {
        if self.mode != Mode::EmojiCam {
            warn!(mode = ?self.mode, "exit_cam outside EmojiCam, ignoring");
            return false;
        }
        self.mode = Mode::Normal;
        true
    }

    /// Append a classified emoji from either modality, returning to `Normal`.
    pub fn commit_emoji(&mut self, emoji: char) -> bool {
        if !matches!(self.mode, Mode::EmojiDraw | Mode::EmojiCam) {
            warn!(mode = ?self.mode, %emoji, "commit_emoji outside emoji modes, ignoring");
            return false;
        }
        self.buffer.push(emoji);
        self.stroke.clear();
        self.drawing = false;
        self.mode = Mode::Normal;
        true
    }

    // ========== Stroke capture (EmojiDraw mode) ==========

    /// Begin a new stroke at the pointer-down position.
    pub fn pen_down(&mut self, point: Point) {
        if self.mode != Mode::EmojiDraw {
            return;
        }
        self.stroke.clear();
        self.stroke.push(point);
        self.drawing = true;
    }

    /// Extend the stroke while the pointer button is held.
    pub fn pen_move(&mut self, point: Point) {
        if self.mode != Mode::EmojiDraw || !self.drawing {
            return;
        }
        self.stroke.push(point);
    }

    /// Classify the captured stroke on pointer release.
    ///
    /// The stroke is discarded and the mode returns to `Normal` regardless of
    /// outcome; on a match the gesture's glyph is appended and returned. A
    /// release before any pointer-down is a no-op that stays in `EmojiDraw`.
    pub fn finish_stroke(&mut self) -> Option<char> {
        if self.mode != Mode::EmojiDraw {
            warn!(mode = ?self.mode, "finish_stroke outside EmojiDraw, ignoring");
            return None;
        }
        if self.stroke.is_empty() {
            return None;
        }

        let classified = gesture::classify(&self.stroke).map(Gesture::emoji);
        self.stroke.clear();
        self.drawing = false;
        self.mode = Mode::Normal;

        if let Some(emoji) = classified {
            self.buffer.push(emoji);
        }
        classified
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_normal_with_empty_buffer() {
        let kb = Keyboard::new();
        assert_eq!(kb.mode(), Mode::Normal);
        assert!(kb.buffer().is_empty());
        assert!(kb.suggestions().is_empty());
    }

    #[test]
    fn test_select_group_issues_ticket_with_prefix() {
        let mut kb = Keyboard::new();
        kb.buffer.push_str("say he");
        let req = kb.select_group(4).expect("ticket");
        assert_eq!(req.group, 4);
        assert_eq!(req.prefix, "he");
        assert_eq!(req.group_chars, "fgh");
        assert_eq!(kb.mode(), Mode::GroupSelected(4));
    }

    #[test]
    fn test_select_char_appends_table_character() {
        let mut kb = Keyboard::new();
        kb.select_group(1);
        assert!(kb.select_char(3));
        assert_eq!(kb.buffer(), "u");
        assert_eq!(kb.mode(), Mode::Normal);
    }

    #[test]
    fn test_cancel_group_leaves_buffer_untouched() {
        let mut kb = Keyboard::new();
        kb.select_group(0);
        let req = kb.select_group(0); // invalid: already selected
        assert!(req.is_none());
        assert!(kb.cancel_group());
        assert_eq!(kb.mode(), Mode::Normal);
        assert!(kb.buffer().is_empty());
    }

    #[test]
    fn test_suggestion_replaces_in_progress_word() {
        let mut kb = Keyboard::new();
        kb.buffer.push_str("say he");
        let req = kb.select_group(4).unwrap();
        assert!(kb.apply_suggestions(&req, vec!["hello".into(), "helm".into()]));
        assert!(kb.select_suggestion(0));
        assert_eq!(kb.buffer(), "say hello ");
        assert_eq!(kb.mode(), Mode::Normal);
        assert!(kb.suggestions().is_empty());
    }

    #[test]
    fn test_suggestion_replaces_whole_buffer_without_space() {
        let mut kb = Keyboard::new();
        kb.buffer.push_str("he");
        let req = kb.select_group(4).unwrap();
        kb.apply_suggestions(&req, vec!["hey".into()]);
        kb.select_suggestion(0);
        assert_eq!(kb.buffer(), "hey ");
    }

    #[test]
    fn test_stale_response_for_superseded_group_is_discarded() {
        let mut kb = Keyboard::new();
        let req0 = kb.select_group(0).unwrap();
        kb.cancel_group();
        let req1 = kb.select_group(1).unwrap();
        assert!(!kb.apply_suggestions(&req0, vec!["went".into()]));
        assert!(kb.suggestions().is_empty());
        assert!(kb.apply_suggestions(&req1, vec!["try".into()]));
        assert_eq!(kb.suggestions(), ["try".to_string()]);
    }

    #[test]
    fn test_stale_response_for_reselected_same_group_is_discarded() {
        let mut kb = Keyboard::new();
        let old = kb.select_group(2).unwrap();
        kb.cancel_group();
        kb.select_group(2).unwrap();
        assert!(!kb.apply_suggestions(&old, vec!["ion".into()]));
        assert!(kb.suggestions().is_empty());
    }

    #[test]
    fn test_suggestions_capped_at_six() {
        let mut kb = Keyboard::new();
        let req = kb.select_group(3).unwrap();
        let words: Vec<String> = (0..10).map(|i| format!("w{i}")).collect();
        kb.apply_suggestions(&req, words);
        assert_eq!(kb.suggestions().len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_delete_char_on_empty_buffer_is_noop() {
        let mut kb = Keyboard::new();
        assert!(!kb.delete_char());
        assert!(kb.buffer().is_empty());
    }

    #[test]
    fn test_delete_char_removes_whole_emoji() {
        let mut kb = Keyboard::new();
        kb.enter_draw();
        kb.commit_emoji('🙂');
        assert_eq!(kb.buffer(), "🙂");
        assert!(kb.delete_char());
        assert!(kb.buffer().is_empty());
    }

    #[test]
    fn test_add_space() {
        let mut kb = Keyboard::new();
        kb.add_space();
        assert_eq!(kb.buffer(), " ");
    }

    #[test]
    fn test_draw_cycle_commits_gesture() {
        let mut kb = Keyboard::new();
        assert!(kb.enter_draw());
        kb.pen_down(Point::new(0.0, 0.0));
        kb.pen_move(Point::new(10.0, 30.0));
        kb.pen_move(Point::new(20.0, 0.0));
        assert_eq!(kb.finish_stroke(), Some('🙂'));
        assert_eq!(kb.buffer(), "🙂");
        assert_eq!(kb.mode(), Mode::Normal);
        assert!(kb.stroke().is_empty());
    }

    #[test]
    fn test_unclassified_stroke_clears_and_returns_to_normal() {
        let mut kb = Keyboard::new();
        kb.enter_draw();
        kb.pen_down(Point::new(0.0, 0.0));
        kb.pen_move(Point::new(10.0, 15.0));
        kb.pen_move(Point::new(20.0, 30.0));
        assert_eq!(kb.finish_stroke(), None);
        assert!(kb.buffer().is_empty());
        assert_eq!(kb.mode(), Mode::Normal);
        assert!(kb.stroke().is_empty());
    }

    #[test]
    fn test_release_without_down_stays_in_draw() {
        let mut kb = Keyboard::new();
        kb.enter_draw();
        assert_eq!(kb.finish_stroke(), None);
        assert_eq!(kb.mode(), Mode::EmojiDraw);
    }

    #[test]
    fn test_exit_draw_discards_stroke() {
        let mut kb = Keyboard::new();
        kb.enter_draw();
        kb.pen_down(Point::new(1.0, 1.0));
        assert!(kb.exit_draw());
        assert_eq!(kb.mode(), Mode::Normal);
        assert!(kb.stroke().is_empty());
    }

    #[test]
    fn test_cam_cycle() {
        let mut kb = Keyboard::new();
        assert!(kb.enter_cam());
        assert_eq!(kb.mode(), Mode::EmojiCam);
        assert!(kb.commit_emoji('☕'));
        assert_eq!(kb.buffer(), "☕");
        assert_eq!(kb.mode(), Mode::Normal);
    }

    #[test]
    fn test_operations_from_wrong_mode_are_ignored() {
        let mut kb = Keyboard::new();
        assert!(!kb.select_char(0));
        assert!(!kb.select_suggestion(0));
        assert!(!kb.cancel_group());
        assert!(!kb.exit_draw());
        assert!(!kb.exit_cam());
        assert!(!kb.commit_emoji('🙂'));
        kb.enter_draw();
        assert!(!kb.delete_char());
        assert!(!kb.add_space());
        assert!(kb.select_group(0).is_none());
        assert!(kb.buffer().is_empty());
        assert_eq!(kb.mode(), Mode::EmojiDraw);
    }

    #[test]
    fn test_config_disables_auto_space() {
        let mut cfg = Config::default();
        cfg.auto_space_after_suggestion = false;
        cfg.max_suggestions = 2;
        let mut kb = Keyboard::with_config(&cfg);
        let req = kb.select_group(0).unwrap();
        kb.apply_suggestions(&req, vec!["we".into(), "wet".into(), "were".into()]);
        assert_eq!(kb.suggestions().len(), 2);
        kb.select_suggestion(1);
        assert_eq!(kb.buffer(), "wet");
    }
}
