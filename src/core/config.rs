//! Match configuration.
//!
//! All tunables a match starts from, with the stock ruleset as the
//! default. The field size is fixed at five slots per side and is not
//! configurable; see `state::board::FIELD_SLOTS`.

use serde::{Deserialize, Serialize};

/// Tunable match parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Cards drawn into each opening hand.
    pub starting_hand: usize,

    /// Starting memory (current and max).
    pub starting_memory: u32,

    /// Starting computation (current and max).
    pub starting_computation: u32,

    /// Memory max grows with the turn number up to this cap.
    pub memory_cap: u32,

    /// Advisory turn length in seconds. The engine stamps it into state;
    /// enforcement is the relay's job.
    pub turn_time_secs: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            starting_hand: 3,
            starting_memory: 1,
            starting_computation: 3,
            memory_cap: 10,
            turn_time_secs: 60,
        }
    }
}

impl MatchConfig {
    /// Create a config with the stock ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn starting_hand(mut self, cards: usize) -> Self {
        self.starting_hand = cards;
        self
    }

    /// Set starting memory.
    #[must_use]
    pub fn starting_memory(mut self, memory: u32) -> Self {
        self.starting_memory = memory;
        self
    }

    /// Set starting computation.
    #[must_use]
    pub fn starting_computation(mut self, computation: u32) -> Self {
        self.starting_computation = computation;
        self
    }

    /// Set the memory growth cap.
    #[must_use]
    pub fn memory_cap(mut self, cap: u32) -> Self {
        assert!(cap >= 1, "memory cap must be at least 1");
        self.memory_cap = cap;
        self
    }

    /// Set the advisory turn length.
    #[must_use]
    pub fn turn_time_secs(mut self, secs: u32) -> Self {
        self.turn_time_secs = secs;
        self
    }
}
