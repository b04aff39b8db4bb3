//! LRU content-cache collaborator contract.
//!
//! The traversal core treats the cache's eviction policy as opaque: it only
//! ever marks a tile used and asks whether the cache is full. [`BoundedLru`]
//! is a reference implementation of that contract for tests and for hosts
//! that don't need anything smarter than strict LRU-by-tile-count.

use std::collections::{HashMap, VecDeque};

use crate::node::TileId;

/// The cache contract the traversal core depends on. Eviction policy,
/// capacity units, and residency bookkeeping are entirely up to the
/// implementation; the core only needs these two operations.
pub trait LruCache {
    /// Mark a tile as used this frame, refreshing its residency. Idempotent
    /// within a frame: calling this more than once for the same tile in the
    /// same frame has the same effect as calling it once.
    fn mark_used(&mut self, id: TileId);

    /// Whether the cache has no room for further content requests this
    /// frame. The core never requests content once this returns `true`.
    fn is_full(&self) -> bool;
}

/// A plain single-threaded LRU cache bounded by tile count.
///
/// Grounded on the teacher's `TileCache` (a concurrent map plus a `VecDeque`
/// recording LRU order), simplified to a single-threaded `HashMap` since
/// nothing in this core ever touches the cache from more than one thread
/// (see SPEC_FULL.md §5).
pub struct BoundedLru {
    capacity: usize,
    order: VecDeque<TileId>,
    present: HashMap<TileId, ()>,
}

impl BoundedLru {
    /// Create a cache that can hold up to `capacity` distinct tiles.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::new(),
            present: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.present.len()
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }

    pub fn contains(&self, id: TileId) -> bool {
        self.present.contains_key(&id)
    }

    fn touch(&mut self, id: TileId) {
        if let Some(pos) = self.order.iter().position(|&existing| existing == id) {
            self.order.remove(pos);
        }
        self.order.push_back(id);
    }

    fn evict_until_under_capacity(&mut self) {
        while self.present.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.present.remove(&oldest);
        }
    }
}

impl LruCache for BoundedLru {
    fn mark_used(&mut self, id: TileId) {
        if self.capacity == 0 {
            return;
        }
        self.present.insert(id, ());
        self.touch(id);
        self.evict_until_under_capacity();
    }

    fn is_full(&self) -> bool {
        self.present.len() >= self.capacity
    }
}
