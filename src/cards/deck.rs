//! Deck building: shuffle templates, instantiate cards.
//!
//! The incoming template list is the profile's deck in list order. It is
//! shuffled uniformly first, then instantiated front-to-back, so draw
//! order is the shuffled order. Instance ids are allocated sequentially
//! from the shared match counter to stay unique across both decks.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::catalog::CardTemplate;
use crate::core::{InstanceId, MatchRng};

use super::instance::CardInstance;

/// Shuffle a template deck and instantiate it for a match.
#[must_use]
pub fn instantiate_deck(
    templates: &[Arc<CardTemplate>],
    next_id: &mut u32,
    rng: &mut MatchRng,
) -> VecDeque<CardInstance> {
    let mut order: Vec<Arc<CardTemplate>> = templates.to_vec();
    rng.shuffle(&mut order);

    order
        .into_iter()
        .map(|template| {
            let id = InstanceId::new(*next_id);
            *next_id += 1;
            CardInstance::from_template(id, template)
        })
        .collect()
}
