//! Match state store: boards, resources, and the full `MatchState`.
//!
//! ## Key Types
//!
//! - `Board`: one seat's field slots, hand, deck, and graveyard
//! - `Meter` / `Resources`: turn-scoped memory and computation pools
//! - `MatchState`: both sides plus the turn/phase machine and history
//!
//! State here is inert data. The engine module owns every rule about
//! when and how it may change.

pub mod board;
pub mod match_state;
pub mod resources;

pub use board::{Board, Zone, FIELD_SLOTS};
pub use match_state::{MatchState, Phase, WinCondition};
pub use resources::{Meter, ResourceKind, Resources};
