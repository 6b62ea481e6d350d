//! Decoder configuration types
//!
//! This module defines the minimal configuration needed by the decoder
//! library. The decoder is intentionally simple - policy knobs only, no
//! business logic. Presentation options live in the application layer.

use serde::{Deserialize, Serialize};

/// How timeline assembly treats a stim record whose sample index falls
/// outside the signal channels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    /// Abort assembly with an error naming the offending record
    #[default]
    Fail,
    /// Clamp the index to the nearest valid sample, with a warning
    Clamp,
}

/// Configuration for the decoder library
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Out-of-range stim index handling (fail-fast unless opted out)
    #[serde(default)]
    pub out_of_range: OutOfRangePolicy,
}

impl DecoderConfig {
    /// Create a new decoder configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: clamp out-of-range stim indices instead of failing
    ///
    /// Clamping silently relocates events, so it is an explicit opt-in; the
    /// default fails fast with the record position for diagnosis.
    pub fn with_clamped_indices(mut self, enabled: bool) -> Self {
        self.out_of_range = if enabled {
            OutOfRangePolicy::Clamp
        } else {
            OutOfRangePolicy::Fail
        };
        self
    }
}
