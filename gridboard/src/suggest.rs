//! HTTP client for the word-suggestion service.
//!
//! The service is a stateless request/response collaborator: given the
//! in-progress word and the selected group's characters it returns ranked
//! suggestion strings. Any failure (network, timeout, bad payload) collapses
//! to an empty list; suggestions are an enhancement, never a requirement.
//!
//! Uses `reqwest`'s blocking client - no async runtime needed. Successful
//! responses are cached per `(prefix, group)` pair since the same partial
//! word is often re-queried while a phrase is composed.

use gridboard_core::{SuggestionProvider, MAX_SUGGESTIONS};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_TIMEOUT_MS: u64 = 500;
const DEFAULT_CACHE_SIZE: usize = 64;

/// Suggestion service endpoint options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestEndpoint {
    /// The gridboard suggestion server's path format:
    /// `GET {base}/{prefix},{chars}` returning a JSON string array.
    Grid(String),
    /// Custom endpoint: `POST {url}` with `{"prefix": .., "group": ..}`,
    /// expecting a JSON string array back.
    Custom(String),
}

impl Default for SuggestEndpoint {
    fn default() -> Self {
        Self::Grid("http://localhost:8081".to_string())
    }
}

/// Blocking suggestion client with a small response cache.
pub struct SuggestClient {
    endpoint: SuggestEndpoint,
    enabled: bool,
    timeout_ms: u64,
    cache: LruCache<(String, String), Vec<String>>,
}

impl SuggestClient {
    /// Create a client for the given endpoint. Starts disabled.
    pub fn new(endpoint: SuggestEndpoint) -> Self {
        Self::with_cache_size(endpoint, DEFAULT_CACHE_SIZE)
    }

    /// Create a client with an explicit response cache budget.
    pub fn with_cache_size(endpoint: SuggestEndpoint, cache_size: usize) -> Self {
        Self {
            endpoint,
            enabled: false,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            cache: LruCache::new(
                NonZeroUsize::new(cache_size.max(1)).unwrap_or(NonZeroUsize::MIN),
            ),
        }
    }

    /// Enable or disable lookups.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if lookups are enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Set the request timeout in milliseconds.
    pub fn set_timeout(&mut self, timeout_ms: u64) {
        self.timeout_ms = timeout_ms;
    }

    /// Query the service for suggestions (blocking call with timeout).
    ///
    /// Returns an empty vector if:
    /// - the client is disabled
    /// - the network request fails or times out
    /// - the response is not a string array
    /// - the service has no match
    pub fn query(&mut self, prefix: &str, group_chars: &str) -> Vec<String> {
        if !self.enabled || group_chars.is_empty() {
            return vec![];
        }

        let key = (prefix.to_string(), group_chars.to_string());
        if let Some(hit) = self.cache.get(&key) {
            return hit.clone();
        }

        match self.query_blocking(prefix, group_chars) {
            Ok(mut words) => {
                words.truncate(MAX_SUGGESTIONS);
                self.cache.put(key, words.clone());
                words
            }
            Err(err) => {
                // Silent failure - suggestions are optional
                debug!(error = %err, prefix, group_chars, "suggestion lookup failed");
                vec![]
            }
        }
    }

    fn query_blocking(
        &self,
        prefix: &str,
        group_chars: &str,
    ) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        match &self.endpoint {
            SuggestEndpoint::Grid(base) => self.query_grid(base, prefix, group_chars),
            SuggestEndpoint::Custom(url) => self.query_custom(url, prefix, group_chars),
        }
    }

    /// Query the path-pair endpoint.
    ///
    /// Request: `GET {base}/{prefix},{chars}`
    /// Response: JSON string array, e.g. `["hello","help"]`, or an empty
    /// body when nothing matches.
    fn query_grid(
        &self,
        base: &str,
        prefix: &str,
        group_chars: &str,
    ) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let url = format!(
            "{}/{},{}",
            base.trim_end_matches('/'),
            urlencoding::encode(prefix),
            urlencoding::encode(group_chars)
        );

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(self.timeout_ms))
            .build()?;

        let text = client.get(&url).send()?.text()?;
        if text.trim().is_empty() {
            return Ok(vec![]);
        }
        let words: Vec<String> = serde_json::from_str(&text)?;
        Ok(words)
    }

    /// Query a custom endpoint.
    ///
    /// Request: `POST {url}` with JSON body `{"prefix": "he", "group": "fgh"}`
    /// Response: JSON string array.
    fn query_custom(
        &self,
        url: &str,
        prefix: &str,
        group_chars: &str,
    ) -> Result<Vec<String>, Box<dyn std::error::Error>> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(self.timeout_ms))
            .build()?;

        let body = serde_json::json!({
            "prefix": prefix,
            "group": group_chars,
        });

        let words: Vec<String> = client.post(url).json(&body).send()?.json()?;
        Ok(words)
    }
}

impl SuggestionProvider for SuggestClient {
    fn suggest(&mut self, prefix: &str, group_chars: &str) -> Vec<String> {
        self.query(prefix, group_chars)
    }
}

impl Default for SuggestClient {
    fn default() -> Self {
        Self::new(SuggestEndpoint::default())
    }
}
