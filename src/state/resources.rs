//! Turn-scoped resource meters.
//!
//! Two currencies gate actions: memory gates deployment, computation
//! gates ability activation. Both refill at the start of the owner's
//! turn; the memory maximum grows with the turn number up to the
//! configured cap.
//!
//! The validator screens every spend, so a meter can never go negative.

use serde::{Deserialize, Serialize};

/// Which resource a cost or gain applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Memory,
    Computation,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Memory => write!(f, "memory"),
            ResourceKind::Computation => write!(f, "computation"),
        }
    }
}

/// A current/max resource meter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meter {
    pub current: u32,
    pub max: u32,
}

impl Meter {
    /// Create a meter filled to `max`.
    #[must_use]
    pub const fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    /// Can `cost` be paid from the current balance?
    #[must_use]
    pub fn can_afford(&self, cost: u32) -> bool {
        cost <= self.current
    }

    /// Pay `cost`. Callers must have checked `can_afford` first.
    pub fn spend(&mut self, cost: u32) {
        debug_assert!(cost <= self.current, "spend exceeds balance");
        self.current = self.current.saturating_sub(cost);
    }

    /// Gain up to `amount`, clamped at the maximum.
    pub fn gain(&mut self, amount: u32) {
        self.current = (self.current + amount).min(self.max);
    }

    /// Refill to the maximum.
    pub fn refill(&mut self) {
        self.current = self.max;
    }

    /// Change the maximum, clamping the current balance if it shrinks.
    pub fn set_max(&mut self, max: u32) {
        self.max = max;
        self.current = self.current.min(max);
    }
}

/// One seat's resource pools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub memory: Meter,
    pub computation: Meter,
}

impl Resources {
    /// Create full meters with the given maxima.
    #[must_use]
    pub const fn new(memory: u32, computation: u32) -> Self {
        Self {
            memory: Meter::full(memory),
            computation: Meter::full(computation),
        }
    }

    /// Get a meter by kind.
    #[must_use]
    pub fn meter(&self, kind: ResourceKind) -> &Meter {
        match kind {
            ResourceKind::Memory => &self.memory,
            ResourceKind::Computation => &self.computation,
        }
    }

    /// Get a mutable meter by kind.
    pub fn meter_mut(&mut self, kind: ResourceKind) -> &mut Meter {
        match kind {
            ResourceKind::Memory => &mut self.memory,
            ResourceKind::Computation => &mut self.computation,
        }
    }

    /// Start-of-turn reset: grow the memory maximum and refill both meters.
    pub fn begin_turn(&mut self, memory_max: u32) {
        self.memory.set_max(memory_max);
        self.memory.refill();
        self.computation.refill();
    }
}
