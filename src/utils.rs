use fnv::FnvHasher;
use std::{
    collections::{HashMap, HashSet},
    hash::{BuildHasherDefault, Hash}
};

use crate::cells::GridCoordinate;

pub type FnvHashSet<T> = HashSet<T, BuildHasherDefault<FnvHasher>>;
pub type FnvHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FnvHasher>>;

/// Hash set sized for `capacity` grid cells. Fnv is quick on the small integer pair keys
/// used for coordinates.
pub fn fnv_hashset<T: Hash + Eq>(capacity: usize) -> FnvHashSet<T> {
    HashSet::with_capacity_and_hasher(capacity, BuildHasherDefault::<FnvHasher>::default())
}

pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, BuildHasherDefault::<FnvHasher>::default())
}

/// Taxicab distance, the A* heuristic on a 4-connected grid.
#[inline]
pub fn manhattan_distance(a: GridCoordinate, b: GridCoordinate) -> usize {
    let rows = if a.row > b.row { a.row - b.row } else { b.row - a.row };
    let cols = if a.col > b.col { a.col - b.col } else { b.col - a.col };
    rows + cols
}
