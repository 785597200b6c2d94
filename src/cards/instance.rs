//! Card instances - runtime card state.
//!
//! A `CardInstance` is one template's match-scoped manifestation. Combat
//! stats are computed once from the template's stat block and profile
//! level when the deck is built; after that the instance is mutated only
//! by the action resolver. The template itself is shared immutably and
//! never written back.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::CardTemplate;
use crate::core::InstanceId;

/// A card instance in a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique ID for this instance within the match.
    pub id: InstanceId,

    /// The shared definition this instance was derived from.
    pub template: Arc<CardTemplate>,

    /// Current attack, before temporary buffs.
    pub attack: i32,

    /// Current defense.
    pub defense: i32,

    /// Current health. The instance is destroyed at 0 or below.
    pub health: i32,

    /// Health at instantiation time.
    pub max_health: i32,

    /// Temporary attack bonus; expires when the owner's turn ends.
    pub temp_attack: i32,

    /// Has this card acted this turn? Set on deployment (summoning
    /// sickness) and after attacking or using an ability; cleared when
    /// the owner's next turn starts.
    pub exhausted: bool,

    /// Carrying a temporary buff.
    pub buffed: bool,

    /// Carrying a temporary debuff.
    pub debuffed: bool,

    /// Occupied field slot while fielded, `None` in any other zone.
    pub position: Option<usize>,
}

impl CardInstance {
    /// Derive an instance from a template.
    ///
    /// Stat formulas:
    /// - attack  = round(avg(effectiveness, performance) * (1 + level * 0.1))
    /// - defense = round(avg(complexity, scalability)    * (1 + level * 0.1))
    /// - health  = round(avg(complexity, scalability)    * (1 + level * 0.15))
    #[must_use]
    pub fn from_template(id: InstanceId, template: Arc<CardTemplate>) -> Self {
        let level = f64::from(template.level);
        let stats = &template.stats;

        let attack_base = f64::from(stats.effectiveness + stats.performance) / 2.0;
        let defense_base = f64::from(stats.complexity + stats.scalability) / 2.0;

        let attack = (attack_base * (1.0 + level * 0.1)).round() as i32;
        let defense = (defense_base * (1.0 + level * 0.1)).round() as i32;
        let health = (defense_base * (1.0 + level * 0.15)).round() as i32;

        Self {
            id,
            template,
            attack,
            defense,
            health,
            max_health: health,
            temp_attack: 0,
            exhausted: false,
            buffed: false,
            debuffed: false,
            position: None,
        }
    }

    /// Memory required to deploy this card.
    #[must_use]
    pub fn memory_cost(&self) -> u32 {
        self.template.stats.complexity.div_ceil(20)
    }

    /// Effective attack including temporary buffs.
    #[must_use]
    pub fn attack_value(&self) -> i32 {
        self.attack + self.temp_attack
    }

    /// Has health at or below zero.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }

    /// Apply damage.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Grant a temporary attack bonus until the owner's turn ends.
    pub fn grant_temp_attack(&mut self, amount: i32) {
        self.temp_attack += amount;
        self.buffed = true;
    }

    /// Drop temporary combat modifiers.
    pub fn expire_temp_effects(&mut self) {
        self.temp_attack = 0;
        self.buffed = false;
        self.debuffed = false;
    }

    /// Clear the exhaustion flag.
    pub fn untap(&mut self) {
        self.exhausted = false;
    }

    /// Reset per-battle state when the card leaves the field.
    pub fn clear_battle_state(&mut self) {
        self.position = None;
        self.exhausted = false;
        self.expire_temp_effects();
    }
}
