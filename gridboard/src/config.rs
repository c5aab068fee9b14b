//! Gridboard-specific configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `gridboard_core::Config` (flattened via serde)
//! - Suggestion service transport options (endpoint, enable flag, timeout)

use crate::suggest::{SuggestClient, SuggestEndpoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GridConfig {
    /// Base configuration fields (suggestion cap, poll cadence, cache size)
    #[serde(flatten)]
    pub base: gridboard_core::Config,

    /// Base URL of the suggestion server
    pub suggest_url: String,

    /// Whether suggestion lookups are performed at all
    pub suggest_enabled: bool,

    /// Per-request timeout for suggestion lookups, in milliseconds
    pub suggest_timeout_ms: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            base: gridboard_core::Config::default(),
            suggest_url: "http://localhost:8081".to_string(),
            suggest_enabled: false,
            suggest_timeout_ms: 500,
        }
    }
}

impl GridConfig {
    /// Convert this config into the base config for use with `Keyboard::with_config()`
    pub fn into_base(self) -> gridboard_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &gridboard_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut gridboard_core::Config {
        &mut self.base
    }

    /// Build a suggestion client from the transport fields.
    pub fn suggest_client(&self) -> SuggestClient {
        let mut client = SuggestClient::with_cache_size(
            SuggestEndpoint::Grid(self.suggest_url.clone()),
            self.base.max_cache_size,
        );
        client.set_enabled(self.suggest_enabled);
        client.set_timeout(self.suggest_timeout_ms);
        client
    }
}
