use std::collections::HashMap;

use kurbo::Point;

/// Cache key for computed zone polygons: the `(name, equation)` pair.
/// Editing an equation produces a different key, which is what retires the
/// stale polygon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneCacheKey {
    name: String,
    equation: String,
}

impl ZoneCacheKey {
    pub fn new(name: impl Into<String>, equation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            equation: equation.into(),
        }
    }
}

/// Host-owned polygon cache, one per rendering surface.
///
/// The engine never reads or writes a cache on its own; invalidation on
/// equation change is the owner's responsibility. Single-threaded by design,
/// like the rest of the engine.
#[derive(Debug, Default)]
pub struct PolygonCache {
    entries: HashMap<ZoneCacheKey, Vec<Point>>,
}

impl PolygonCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &ZoneCacheKey) -> Option<&[Point]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn insert(&mut self, key: ZoneCacheKey, polygon: Vec<Point>) {
        self.entries.insert(key, polygon);
    }

    /// Drop one entry; returns whether it existed.
    pub fn invalidate(&mut self, key: &ZoneCacheKey) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
