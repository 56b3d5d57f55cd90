//! Interned basic-type names and small sorted sets over them.
//!
//! The noun inventory is a closed set of ~40 names, but verb basic types are
//! minted from headless synsets at runtime, so the registry grows on demand
//! rather than being a fixed bitset.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Index into a [`TypeRegistry`].
pub type TypeId = u16;

/// Interner for basic-type names. One registry per classification run.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    names: Vec<String>,
    index: HashMap<String, TypeId>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a name, returning its stable id.
    pub fn intern(&mut self, name: &str) -> TypeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.names.len() as TypeId;
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), id);
        id
    }

    pub fn get(&self, name: &str) -> Option<TypeId> {
        self.index.get(name).copied()
    }

    pub fn name(&self, id: TypeId) -> &str {
        &self.names[id as usize]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Render a set as its sorted name list.
    pub fn names_of(&self, set: &TypeSet) -> Vec<&str> {
        let mut names: Vec<&str> = set.iter().map(|id| self.name(id)).collect();
        names.sort_unstable();
        names
    }
}

/// A small sorted set of type ids. Union is additive and commutative, so
/// accumulation order during propagation cannot affect the final set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TypeSet(SmallVec<[TypeId; 4]>);

impl TypeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(id: TypeId) -> Self {
        let mut set = Self::new();
        set.insert(id);
        set
    }

    /// Insert keeping sorted order; returns true if newly added.
    pub fn insert(&mut self, id: TypeId) -> bool {
        match self.0.binary_search(&id) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, id);
                true
            }
        }
    }

    pub fn remove(&mut self, id: TypeId) -> bool {
        match self.0.binary_search(&id) {
            Ok(pos) => {
                self.0.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    pub fn contains(&self, id: TypeId) -> bool {
        self.0.binary_search(&id).is_ok()
    }

    pub fn union_with(&mut self, other: &TypeSet) {
        for id in other.iter() {
            self.insert(id);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.0.iter().copied()
    }

    /// True if `self` contains every element of `other`.
    pub fn is_superset(&self, other: &TypeSet) -> bool {
        other.iter().all(|id| self.contains(id))
    }
}

impl FromIterator<TypeId> for TypeSet {
    fn from_iter<I: IntoIterator<Item = TypeId>>(iter: I) -> Self {
        let mut set = TypeSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_is_stable() {
        let mut reg = TypeRegistry::new();
        let hum = reg.intern("hum");
        let art = reg.intern("art");
        assert_eq!(reg.intern("hum"), hum);
        assert_ne!(hum, art);
        assert_eq!(reg.name(hum), "hum");
    }

    #[test]
    fn test_set_union_commutes() {
        let a: TypeSet = [3, 1].into_iter().collect();
        let b: TypeSet = [2, 1].into_iter().collect();

        let mut ab = a.clone();
        ab.union_with(&b);
        let mut ba = b.clone();
        ba.union_with(&a);

        assert_eq!(ab, ba);
        assert_eq!(ab.len(), 3);
    }

    #[test]
    fn test_sorted_iteration() {
        let set: TypeSet = [9, 0, 4].into_iter().collect();
        let ids: Vec<TypeId> = set.iter().collect();
        assert_eq!(ids, vec![0, 4, 9]);
    }

    #[test]
    fn test_names_of_sorts_by_name() {
        let mut reg = TypeRegistry::new();
        let z = reg.intern("sta");
        let a = reg.intern("act");
        let set: TypeSet = [z, a].into_iter().collect();
        assert_eq!(reg.names_of(&set), vec!["act", "sta"]);
    }
}
