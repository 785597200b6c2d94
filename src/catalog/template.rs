//! Card templates - static card data.
//!
//! A `CardTemplate` is the shared, immutable definition of a card: its
//! identity, baseline stat block, abilities, and the owning profile's
//! progression for it (level, experience). Templates belong to the player
//! profile, not the match; a match only ever reads them.
//!
//! Per-match mutable data (current health, exhaustion, board position)
//! lives in `cards::CardInstance`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a card template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub u32);

impl TemplateId {
    /// Create a new template ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "template({})", self.0)
    }
}

/// Card rarity tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// The design-pattern family a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Creational,
    Structural,
    Behavioral,
    Cognitive,
}

/// Elemental affinity. Flavor only; no rule branches on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Computation,
    Memory,
    Data,
    Orchestration,
}

/// Baseline stat block, each axis on a 0-100 scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub complexity: u32,
    pub effectiveness: u32,
    pub flexibility: u32,
    pub performance: u32,
    pub scalability: u32,
}

/// A named ability carried by a template.
///
/// Abilities are referenced by index in actions and dispatched by name
/// through the engine's capability table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
}

impl Ability {
    /// Create a new ability.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Static card definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTemplate {
    /// Unique identifier for this template.
    pub id: TemplateId,

    /// Card name.
    pub name: String,

    pub rarity: Rarity,
    pub kind: PatternKind,
    pub element: Element,

    /// Baseline stat block.
    pub stats: BaseStats,

    /// Abilities in activation order. Most cards carry 0-2.
    pub abilities: SmallVec<[Ability; 2]>,

    /// Synergy tags (deck-building metadata, unused by match rules).
    pub synergies: Vec<String>,

    /// Weakness tags (deck-building metadata, unused by match rules).
    pub weaknesses: Vec<String>,

    /// Name of the template this card evolves into, if any.
    pub evolution: Option<String>,

    /// Profile progression: card level. Scales combat stats at
    /// instantiation time.
    pub level: u32,

    /// Profile progression: accumulated experience.
    pub experience: u32,
}

impl CardTemplate {
    /// Create a new template at level 1 with no abilities or tags.
    #[must_use]
    pub fn new(
        id: TemplateId,
        name: impl Into<String>,
        rarity: Rarity,
        kind: PatternKind,
        element: Element,
        stats: BaseStats,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            rarity,
            kind,
            element,
            stats,
            abilities: SmallVec::new(),
            synergies: Vec::new(),
            weaknesses: Vec::new(),
            evolution: None,
            level: 1,
            experience: 0,
        }
    }

    /// Add an ability (builder pattern).
    #[must_use]
    pub fn with_ability(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.abilities.push(Ability::new(name, description));
        self
    }

    /// Set the profile level.
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Set the accumulated experience.
    #[must_use]
    pub fn with_experience(mut self, experience: u32) -> Self {
        self.experience = experience;
        self
    }

    /// Add a synergy tag.
    #[must_use]
    pub fn with_synergy(mut self, tag: impl Into<String>) -> Self {
        self.synergies.push(tag.into());
        self
    }

    /// Add a weakness tag.
    #[must_use]
    pub fn with_weakness(mut self, tag: impl Into<String>) -> Self {
        self.weaknesses.push(tag.into());
        self
    }

    /// Set the evolution target.
    #[must_use]
    pub fn with_evolution(mut self, target: impl Into<String>) -> Self {
        self.evolution = Some(target.into());
        self
    }

    /// Get an ability by activation index.
    #[must_use]
    pub fn ability(&self, index: usize) -> Option<&Ability> {
        self.abilities.get(index)
    }
}
