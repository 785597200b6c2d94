//! Card catalog: static template definitions and their registry.
//!
//! ## Key Types
//!
//! - `TemplateId`: identifier for a card template
//! - `CardTemplate`: immutable card definition with baseline stats,
//!   abilities, tags, and profile progression
//! - `TemplateRegistry`: template lookup behind shared `Arc`s
//!
//! Templates are read-only during play. The match never writes back to
//! them; progression updates happen in the profile store after the match,
//! driven by the battle report.

pub mod registry;
pub mod template;

pub use registry::TemplateRegistry;
pub use template::{
    Ability, BaseStats, CardTemplate, Element, PatternKind, Rarity, TemplateId,
};
