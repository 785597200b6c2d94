//! Shared engine plumbing: seats, instance ids, actions, RNG, configuration.
//!
//! These are the building blocks every other module leans on; nothing in
//! here knows about boards, resources, or rules.

pub mod action;
pub mod config;
pub mod id;
pub mod rng;
pub mod seat;

pub use action::{Action, ActionRecord};
pub use config::MatchConfig;
pub use id::InstanceId;
pub use rng::MatchRng;
pub use seat::{Seat, SeatMap};
