//! Template registry for catalog lookup.
//!
//! Stores every template available to a play session behind `Arc` so
//! card instances can share them without copying. The catalog service
//! that feeds this registry is an external collaborator; the engine only
//! reads from it.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::template::{CardTemplate, TemplateId};

/// Registry of card templates.
///
/// ## Example
///
/// ```
/// use pattern_duel::catalog::{
///     BaseStats, CardTemplate, Element, PatternKind, Rarity, TemplateId,
///     TemplateRegistry,
/// };
///
/// let mut registry = TemplateRegistry::new();
/// let id = registry.allocate_id();
///
/// registry.register(CardTemplate::new(
///     id,
///     "Prompt Chaining",
///     Rarity::Common,
///     PatternKind::Behavioral,
///     Element::Orchestration,
///     BaseStats::default(),
/// ));
///
/// assert_eq!(registry.get(id).unwrap().name, "Prompt Chaining");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TemplateRegistry {
    templates: FxHashMap<TemplateId, Arc<CardTemplate>>,
    next_id: u32,
}

impl TemplateRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next free template ID.
    pub fn allocate_id(&mut self) -> TemplateId {
        let id = TemplateId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Register a template.
    ///
    /// Panics if a template with the same ID already exists.
    pub fn register(&mut self, template: CardTemplate) -> Arc<CardTemplate> {
        if self.templates.contains_key(&template.id) {
            panic!("template {} already registered", template.id);
        }
        self.next_id = self.next_id.max(template.id.raw() + 1);

        let template = Arc::new(template);
        self.templates.insert(template.id, Arc::clone(&template));
        template
    }

    /// Get a template by ID.
    #[must_use]
    pub fn get(&self, id: TemplateId) -> Option<&Arc<CardTemplate>> {
        self.templates.get(&id)
    }

    /// Number of registered templates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over all registered templates.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardTemplate>> {
        self.templates.values()
    }
}
