//! Session configuration.
//!
//! Combat and growth rules are fixed; only the surroundings are
//! configurable: where the save lives, how opponents are seeded and how fast
//! narration scrolls.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default save file, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "save_data.json";

/// Default delay between narrated characters.
pub const DEFAULT_TEXT_DELAY: Duration = Duration::from_millis(40);

/// Configuration for one play session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Where the player's creature is saved.
    pub save_path: PathBuf,

    /// Seed for opponent generation.
    /// `None` draws a fresh seed each run.
    pub seed: Option<u64>,

    /// Delay between characters of narration (zero disables pacing).
    pub text_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            seed: None,
            text_delay: DEFAULT_TEXT_DELAY,
        }
    }
}

impl SessionConfig {
    /// Use a different save file.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Fix the opponent seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Change narration pacing.
    pub fn with_text_delay(mut self, delay: Duration) -> Self {
        self.text_delay = delay;
        self
    }
}
