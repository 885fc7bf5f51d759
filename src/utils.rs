use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hash};

use fnv::FnvHasher;

pub type FnvHashSet<T> = HashSet<T, BuildHasherDefault<FnvHasher>>;
pub type FnvHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FnvHasher>>;

/// An empty set with room for `capacity` keys. Fnv beats SipHash on small keys like cell
/// coordinates, but offers no protection against crafted collisions.
pub fn fnv_hashset<T: Hash + Eq>(capacity: usize) -> FnvHashSet<T> {
    HashSet::with_capacity_and_hasher(capacity, Default::default())
}

/// An empty map with room for `capacity` keys, see `fnv_hashset`.
pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, Default::default())
}
