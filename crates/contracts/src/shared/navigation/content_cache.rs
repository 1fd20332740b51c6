//! Кэш содержимого вкладок.
//!
//! Для каждого ключа, который хоть раз становился активным, создаётся ровно
//! один слот. Проверка и вставка слота происходят за один синхронный шаг, а
//! асинхронная загрузка модуля лишь переводит слот из `Pending` в итоговое
//! состояние через `settle`.

use std::collections::HashMap;

use super::error::NavigationError;
use super::tab::TabKey;

/// Identity of a slot. A key evicted and later re-created gets a new id.
pub type SlotId = u64;

/// Состояние загрузки содержимого вкладки
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<U> {
    Pending,
    Ready(U),
    Failed(NavigationError),
}

impl<U> Loadable<U> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Loadable::Pending)
    }

    pub fn ready(&self) -> Option<&U> {
        match self {
            Loadable::Ready(unit) => Some(unit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slot<U> {
    pub id: SlotId,
    pub key: TabKey,
    /// Path and query the slot was first created for.
    pub path: String,
    pub query: String,
    pub state: Loadable<U>,
}

/// Result of [`ContentCache::get_or_create`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Populate {
    /// Slot already present; nothing to do.
    Existing(SlotId),
    /// Slot just inserted as `Pending`; the caller must resolve and `settle` it.
    Created(SlotId),
}

impl Populate {
    pub fn id(self) -> SlotId {
        match self {
            Populate::Existing(id) | Populate::Created(id) => id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContentCache<U> {
    slots: HashMap<TabKey, Slot<U>>,
    order: Vec<TabKey>,
    next_id: SlotId,
}

impl<U> Default for ContentCache<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> ContentCache<U> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns the existing slot for `key` or inserts a pending one.
    pub fn get_or_create(&mut self, key: &str, path: &str, query: &str) -> Populate {
        if let Some(slot) = self.slots.get(key) {
            return Populate::Existing(slot.id);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.slots.insert(
            key.to_string(),
            Slot {
                id,
                key: key.to_string(),
                path: path.to_string(),
                query: query.to_string(),
                state: Loadable::Pending,
            },
        );
        self.order.push(key.to_string());
        log::debug!("content slot {} created for '{}'", id, key);
        Populate::Created(id)
    }

    /// Stores the outcome of a resolution started for slot `id`.
    ///
    /// Ignored when the slot was evicted meanwhile or is already settled.
    pub fn settle(&mut self, key: &str, id: SlotId, outcome: Result<U, NavigationError>) -> bool {
        let Some(slot) = self.slots.get_mut(key) else {
            return false;
        };
        if slot.id != id || !slot.state.is_pending() {
            return false;
        }
        slot.state = match outcome {
            Ok(unit) => Loadable::Ready(unit),
            Err(err) => {
                log::warn!("content for '{}' failed to resolve: {}", key, err);
                Loadable::Failed(err)
            }
        };
        true
    }

    pub fn get(&self, key: &str) -> Option<&Slot<U>> {
        self.slots.get(key)
    }

    pub fn state(&self, key: &str) -> Option<&Loadable<U>> {
        self.slots.get(key).map(|slot| &slot.state)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.slots.contains_key(key)
    }

    /// Cached keys in first-activation order.
    pub fn keys(&self) -> &[TabKey] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drops the slot for `key`; the next `get_or_create` resolves afresh.
    pub fn evict(&mut self, key: &str) -> Option<Slot<U>> {
        let slot = self.slots.remove(key)?;
        self.order.retain(|k| k != key);
        log::debug!("content slot {} evicted for '{}'", slot.id, key);
        Some(slot)
    }
}
