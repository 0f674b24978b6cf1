//! Surrogate id allocation.

use std::collections::HashMap;

/// Entities that receive a surrogate id from the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    User,
    Board,
    Column,
}

/// Hands out 1-based sequential ids per entity, never reusing one
#[derive(Debug, Default)]
pub struct IdAllocator {
    /// Entity -> last id handed out
    last_id: HashMap<Entity, u64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self, entity: Entity) -> u64 {
        let id = self.last_id.entry(entity).or_insert(0);
        *id += 1;
        *id
    }

    /// Number of ids issued so far for `entity`
    pub fn issued(&self, entity: Entity) -> u64 {
        self.last_id.get(&entity).copied().unwrap_or(0)
    }
}
