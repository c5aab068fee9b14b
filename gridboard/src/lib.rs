//! gridboard crate root
//!
//! This crate wires the `gridboard-core` state machine to its real
//! collaborators: the HTTP word-suggestion service and whatever frame
//! classifier the platform provides. It also ships the interactive CLI
//! binary used for manual testing.
//!
//! Public API exported here:
//! - `GridEngine` from `engine`
//! - `SuggestClient` and `SuggestEndpoint` from `suggest`
//! - `GridConfig` from `config`

pub mod config;
pub mod engine;
pub mod suggest;

// Re-export the core components callers need alongside the engine.
pub use gridboard_core::{
    chars_for_group, classify, display_layout, emoji_for_label, padded_slots, CameraSession,
    Classification, Config, FrameClassifier, Gesture, Keyboard, LayoutCell, Mode, Point,
    RecognitionDebouncer, Stroke, SuggestionProvider, SuggestionRequest, CHAR_GROUPS,
    MAX_SUGGESTIONS, POLL_INTERVAL_MS,
};

// Convenience re-exports for common types used by callers.
pub use config::GridConfig;
pub use engine::GridEngine;
pub use suggest::{SuggestClient, SuggestEndpoint};
