//! # Map: per-hex record storage with rectangular queries
//!
//! Stores one record per universal hex address and serves the lookups the
//! surrounding application makes while rendering: O(1) fetch of a single
//! hex's record, and ordered enumeration of every loaded record inside a
//! viewport rectangle.
//!
//! Records are held twice: a `BTreeMap` whose row-major key order makes
//! iteration and region queries deterministic (north row first, west to east
//! within a row), and a `HashMap` for fast point lookup. The two are kept in
//! lockstep by `insert`/`remove`.
//!
//! The map never interprets its records; loading, eviction, and "does this
//! address mean anything" policies belong to the caller.

use std::collections::{BTreeMap, HashMap};

use derive_more::*;

use crate::hex::Hex;

#[derive(Clone, Debug, Default, IntoIterator)]
pub struct Map<T> {
    #[into_iterator(owned)]
    tree: BTreeMap<Hex, T>,
    hash: HashMap<Hex, T>,
}

impl<T> Map<T>
where T : Clone {
    pub fn new() -> Self {
        Self { tree: BTreeMap::new(), hash: HashMap::new() }
    }

    pub fn get(&self, hex: Hex) -> Option<&T> {
        self.hash.get(&hex)
    }

    pub fn contains(&self, hex: Hex) -> bool {
        self.hash.contains_key(&hex)
    }

    pub fn insert(&mut self, hex: Hex, obj: T) {
        self.tree.insert(hex, obj.clone());
        self.hash.insert(hex, obj);
    }

    pub fn remove(&mut self, hex: Hex) -> Option<T> {
        self.tree.remove(&hex);
        self.hash.remove(&hex)
    }

    pub fn len(&self) -> usize {
        self.hash.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hash.is_empty()
    }

    /// Loaded records in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (&Hex, &T)> {
        self.tree.iter()
    }

    /// Loaded records inside the closed rectangle spanned by the two
    /// corners, in row-major order. Hexes with no record are skipped, so the
    /// result is at most, not exactly, the rectangle's area.
    pub fn region(&self, a: &Hex, b: &Hex) -> Vec<(Hex, T)> {
        let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
        let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));
        let mut found = Vec::new();
        for y in y0..=y1 {
            found.extend(
                self.tree.range(Hex { x: x0, y }..=Hex { x: x1, y })
                    .map(|(hex, obj)| (*hex, obj.clone()))
            );
        }
        found
    }
}
