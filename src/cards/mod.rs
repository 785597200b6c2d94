//! Card instantiation: match-scoped instances and deck building.
//!
//! ## Key Types
//!
//! - `CardInstance`: runtime card with computed combat stats and mutable
//!   battle flags
//! - `instantiate_deck`: uniform shuffle + instantiation of a template
//!   list into a ready-to-draw deck
//!
//! Templates stay immutable; everything an action can change lives on
//! the instance.

pub mod deck;
pub mod instance;

pub use deck::instantiate_deck;
pub use instance::CardInstance;
