//! Property tests for the set-level invariants the pipeline relies on.

use corelex_rs::propagate::IsaFilter;
use corelex_rs::{IsaTable, TypeRegistry, TypeSet};
use proptest::prelude::*;

const NAMES: [&str; 8] = ["abs", "act", "ent", "hum", "lfr", "mic", "pho", "sub"];

fn registry() -> TypeRegistry {
    let mut reg = TypeRegistry::new();
    for name in NAMES {
        reg.intern(name);
    }
    reg
}

fn isa_from_pairs(pairs: &[(usize, usize)]) -> IsaTable {
    IsaTable {
        pairs: pairs
            .iter()
            .filter(|(s, g)| s != g)
            .map(|&(s, g)| (NAMES[s].to_string(), NAMES[g].to_string()))
            .collect(),
    }
}

proptest! {
    /// filter(filter(S)) == filter(S) for any set and any ISA table.
    #[test]
    fn filter_is_idempotent(
        members in proptest::collection::vec(0usize..NAMES.len(), 0..8),
        pairs in proptest::collection::vec((0usize..NAMES.len(), 0usize..NAMES.len()), 0..12),
    ) {
        let reg = registry();
        let filter = IsaFilter::new(&isa_from_pairs(&pairs), &reg);

        let mut once: TypeSet = members.iter().map(|&i| i as u16).collect();
        filter.filter(&mut once);
        let mut twice = once.clone();
        filter.filter(&mut twice);
        prop_assert_eq!(once, twice);
    }

    /// After filtering, no set contains both halves of an ISA pair.
    #[test]
    fn filter_enforces_most_specific(
        members in proptest::collection::vec(0usize..NAMES.len(), 0..8),
        pairs in proptest::collection::vec((0usize..NAMES.len(), 0usize..NAMES.len()), 0..12),
    ) {
        let reg = registry();
        let isa = isa_from_pairs(&pairs);
        let filter = IsaFilter::new(&isa, &reg);

        let mut set: TypeSet = members.iter().map(|&i| i as u16).collect();
        filter.filter(&mut set);

        for (specific, general) in isa.iter() {
            let s = reg.get(specific).unwrap();
            let g = reg.get(general).unwrap();
            prop_assert!(!(set.contains(s) && set.contains(g)));
        }
    }

    /// The rendered signature is invariant to accumulation order.
    #[test]
    fn signature_is_order_invariant(
        mut members in proptest::collection::vec(0usize..NAMES.len(), 0..8),
        seed in any::<u64>(),
    ) {
        let reg = registry();
        let forward: TypeSet = members.iter().map(|&i| i as u16).collect();

        // cheap deterministic shuffle
        let len = members.len().max(1);
        for i in 0..members.len() {
            let j = ((seed as usize).wrapping_mul(i + 1)) % len;
            members.swap(i, j);
        }
        let shuffled: TypeSet = members.iter().map(|&i| i as u16).collect();

        prop_assert_eq!(
            reg.names_of(&forward).join(" "),
            reg.names_of(&shuffled).join(" ")
        );
    }

    /// Set union is commutative: the propagation accumulator cannot depend
    /// on seed traversal order.
    #[test]
    fn union_commutes(
        a in proptest::collection::vec(0u16..16, 0..8),
        b in proptest::collection::vec(0u16..16, 0..8),
    ) {
        let sa: TypeSet = a.into_iter().collect();
        let sb: TypeSet = b.into_iter().collect();

        let mut ab = sa.clone();
        ab.union_with(&sb);
        let mut ba = sb.clone();
        ba.union_with(&sa);
        prop_assert_eq!(ab, ba);
    }
}
