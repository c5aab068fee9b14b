//! gridboard-core
//!
//! Input-mode state machine, character-group tables, gesture classification
//! and recognition debouncing shared by gridboard frontends.
//!
//! This crate holds all the decision logic of the keyboard: mode switching,
//! two-level grid selection, stroke feature extraction and label debouncing.
//! It performs no I/O itself; the HTTP suggestion service and the camera
//! classifier are consumed through the traits in `service`.
//!
//! Public API:
//! - `Keyboard` - Top-level input state machine owning the composition buffer
//! - `Mode` - Mutually-exclusive UI mode (Normal / GroupSelected / EmojiDraw / EmojiCam)
//! - `Stroke` / `classify` - Pointer trace and the fixed gesture decision tree
//! - `RecognitionDebouncer` - Stability window over camera classifications
//! - `CameraSession` - Owned camera/classifier resource for EmojiCam
//! - `Config` - Configuration and feature flags
use serde::{Deserialize, Serialize};

// Core modules
pub mod chargroup;
pub use chargroup::{chars_for_group, display_layout, padded_slots, LayoutCell, CHAR_GROUPS};

pub mod gesture;
pub use gesture::{classify, Gesture, Point, Stroke};

pub mod recognition;
pub use recognition::{emoji_for_label, RecognitionDebouncer, CONFIDENCE_THRESHOLD, WINDOW_SIZE};

pub mod keyboard;
pub use keyboard::{Keyboard, Mode, SuggestionRequest, MAX_SUGGESTIONS};

pub mod service;
pub use service::{Classification, FrameClassifier, SuggestionProvider};

pub mod session;
pub use session::{CameraSession, POLL_INTERVAL_MS};

/// Generic configuration for the keyboard core.
///
/// This config contains only frontend-agnostic fields. Transport options for
/// the suggestion service (endpoint URL, timeouts) belong in `GridConfig` in
/// the glue crate.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Maximum suggestions kept from a service response.
    /// The keyboard hard-caps this at 6 regardless of the configured value.
    pub max_suggestions: usize,

    /// Camera polling cadence in milliseconds while EmojiCam is active.
    pub poll_interval_ms: u64,

    /// Maximum number of entries in the (prefix, group) -> suggestions cache.
    pub max_cache_size: usize,

    /// Append a trailing space after committing a suggestion.
    pub auto_space_after_suggestion: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_suggestions: 6,
            poll_interval_ms: 500,
            max_cache_size: 64,
            auto_space_after_suggestion: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
