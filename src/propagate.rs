//! Basic-type seeding and propagation through the hyponym hierarchy.
//!
//! Propagation runs strictly after seeding and strictly before filtering:
//! the ISA filter must see the complete accumulated sets, and deeper
//! descendants may only be reachable through a synset that carries nothing
//! but the general type, so the two steps are never interleaved.

use hashbrown::HashMap;
use tracing::{info, warn};

use crate::graph::Lexicon;
use crate::model::{Category, SynsetId, TypeId, TypeRegistry, TypeSet};
use crate::types::{BasicTypeTable, IsaTable};

// ============================================================================
// Seeding
// ============================================================================

/// Assign each basic type to its seed synsets: `assigned_basic_type` is set
/// and `basic_types` initialized to the singleton set. A seed id missing from
/// the graph is a data-quality warning, not a failure.
pub fn seed(lexicon: &mut Lexicon, category: Category, table: &BasicTypeTable) {
    let mut seeded = 0usize;
    for entry in &table.entries {
        let type_id = lexicon.registry.intern(&entry.name);
        for seed in &entry.seeds {
            match lexicon.get_synset_mut(category, seed.id) {
                Some(synset) => {
                    synset.assigned_basic_type = Some(type_id);
                    synset.basic_types = TypeSet::singleton(type_id);
                    seeded += 1;
                }
                None => {
                    warn!(name = %entry.name, id = %seed.id, "seed synset not in graph");
                }
            }
        }
    }
    info!(category = %category, types = table.len(), seeds = seeded, "seeded basic types");
}

/// Verb basic types are not curated: every verb synset without hypernyms
/// becomes an ad hoc named type from its own word-sense labels.
pub fn seed_verb_types(lexicon: &mut Lexicon) {
    let headless: Vec<(SynsetId, String)> = lexicon
        .all_synsets(Category::Verb)
        .filter(|ss| !ss.has_hypernyms())
        .map(|ss| (ss.id, ss.words_as_string()))
        .collect();
    let count = headless.len();
    for (id, name) in headless {
        let type_id = lexicon.registry.intern(&name);
        if let Some(synset) = lexicon.get_synset_mut(Category::Verb, id) {
            synset.assigned_basic_type = Some(type_id);
            synset.basic_types = TypeSet::singleton(type_id);
        }
    }
    info!(types = count, "seeded verbal basic types");
}

// ============================================================================
// Propagation
// ============================================================================

/// Push every seed's type down through the hyponym hierarchy with an explicit
/// work stack. A synset reachable from two seeds accumulates both types;
/// set insertion is additive and commutative, so traversal order cannot
/// change the outcome.
pub fn propagate(lexicon: &mut Lexicon, category: Category) {
    // hyponym adjacency snapshot; the structural edges never change, so one
    // pass suffices for all seeds
    let mut adjacency: HashMap<SynsetId, Vec<SynsetId>> = HashMap::new();
    let mut seeds: Vec<(SynsetId, TypeId)> = Vec::new();
    for synset in lexicon.all_synsets(category) {
        let hypos: Vec<SynsetId> = lexicon.hyponyms(synset).iter().map(|h| h.id).collect();
        if !hypos.is_empty() {
            adjacency.insert(synset.id, hypos);
        }
        if let Some(type_id) = synset.assigned_basic_type {
            seeds.push((synset.id, type_id));
        }
    }

    let mut reached = 0usize;
    for (seed_id, type_id) in seeds {
        let mut visited: hashbrown::HashSet<SynsetId> = hashbrown::HashSet::new();
        let mut stack = vec![seed_id];
        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }
            if id != seed_id {
                if let Some(synset) = lexicon.get_synset_mut(category, id) {
                    if synset.basic_types.insert(type_id) {
                        reached += 1;
                    }
                }
            }
            if let Some(hypos) = adjacency.get(&id) {
                stack.extend(hypos.iter().copied());
            }
        }
    }
    info!(category = %category, assignments = reached, "propagated basic types");
}

// ============================================================================
// ISA filtering
// ============================================================================

/// The ISA table resolved against a run's interned type names. Filtering
/// keeps only maximally specific types: a name is removed iff both it and
/// one of its ISA-subtypes are present.
pub struct IsaFilter {
    /// `(specific, general)` id pairs; pairs naming unknown types are inert.
    pairs: Vec<(TypeId, TypeId)>,
}

impl IsaFilter {
    pub fn new(isa: &IsaTable, registry: &TypeRegistry) -> Self {
        let pairs = isa
            .iter()
            .filter_map(|(specific, general)| {
                Some((registry.get(specific)?, registry.get(general)?))
            })
            .collect();
        Self { pairs }
    }

    /// Pure set rewrite; idempotent.
    pub fn filter(&self, set: &mut TypeSet) {
        for &(specific, general) in &self.pairs {
            if set.contains(specific) && set.contains(general) {
                set.remove(general);
            }
        }
    }
}

/// Apply the ISA filter to every synset of the category. This runs once,
/// after all propagation completes; the classifier re-filters at the lemma
/// level, which is the authoritative step.
pub fn filter_synsets(lexicon: &mut Lexicon, category: Category, isa: &IsaTable) {
    let filter = IsaFilter::new(isa, &lexicon.registry);
    for synset in lexicon.all_synsets_mut(category) {
        filter.filter(&mut synset.basic_types);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WnVersion;
    use pretty_assertions::assert_eq;

    fn registry_with(names: &[&str]) -> TypeRegistry {
        let mut reg = TypeRegistry::new();
        for name in names {
            reg.intern(name);
        }
        reg
    }

    fn isa(pairs: &[(&str, &str)]) -> IsaTable {
        IsaTable {
            pairs: pairs
                .iter()
                .map(|(s, g)| (s.to_string(), g.to_string()))
                .collect(),
        }
    }

    #[test]
    fn test_filter_drops_general_type() {
        let reg = registry_with(&["hum", "ent"]);
        let filter = IsaFilter::new(&isa(&[("hum", "ent")]), &reg);
        let mut set: TypeSet = [reg.get("hum").unwrap(), reg.get("ent").unwrap()]
            .into_iter()
            .collect();
        filter.filter(&mut set);
        assert_eq!(reg.names_of(&set), vec!["hum"]);
    }

    #[test]
    fn test_filter_keeps_unrelated_types() {
        let reg = registry_with(&["hum", "art"]);
        let filter = IsaFilter::new(&isa(&[("hum", "ent")]), &reg);
        let mut set: TypeSet = [reg.get("hum").unwrap(), reg.get("art").unwrap()]
            .into_iter()
            .collect();
        filter.filter(&mut set);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let reg = registry_with(&["mic", "lfr", "ent"]);
        let filter = IsaFilter::new(&isa(&[("mic", "lfr"), ("lfr", "ent"), ("mic", "ent")]), &reg);
        let mut once: TypeSet = [0, 1, 2].into_iter().collect();
        filter.filter(&mut once);
        let mut twice = once.clone();
        filter.filter(&mut twice);
        assert_eq!(once, twice);
        assert_eq!(reg.names_of(&once), vec!["mic"]);
    }

    #[test]
    fn test_chained_isa_without_transitive_pair() {
        // mic ⊆ lfr ⊆ ent but no (mic, ent) pair: lfr goes first, and ent
        // survives only if the table really omits the transitive pair
        let reg = registry_with(&["mic", "lfr", "ent"]);
        let filter = IsaFilter::new(&isa(&[("mic", "lfr"), ("lfr", "ent")]), &reg);
        let mut set: TypeSet = [0, 1, 2].into_iter().collect();
        filter.filter(&mut set);
        // (mic, lfr) removes lfr; (lfr, ent) no longer matches
        assert_eq!(reg.names_of(&set), vec!["ent", "mic"]);
    }

    #[test]
    fn test_propagation_multiple_inheritance() {
        use crate::graph::Lexicon;
        use crate::model::Category;
        use crate::types::{BasicTypeEntry, SeedSynset};

        // S1 and S2 both have S3 as hyponym
        let data = "\
00000001 03 n 01 person 0 001 ~ 00000003 n 0000 | a human
00000002 06 n 01 artifact 0 001 ~ 00000003 n 0000 | a made thing
00000003 06 n 01 statue 0 002 @ 00000001 n 0000 @ 00000002 n 0000 | both";
        let mut lex = Lexicon::new(WnVersion::V3_1);
        lex.load_data(Category::Noun, data.lines());

        let table = BasicTypeTable {
            entries: vec![
                BasicTypeEntry {
                    name: "hum".into(),
                    seeds: vec![SeedSynset { id: SynsetId(1), description: "person".into() }],
                },
                BasicTypeEntry {
                    name: "art".into(),
                    seeds: vec![SeedSynset { id: SynsetId(2), description: "artifact".into() }],
                },
            ],
        };
        seed(&mut lex, Category::Noun, &table);
        propagate(&mut lex, Category::Noun);

        let s3 = lex.get_synset(Category::Noun, SynsetId(3)).unwrap();
        assert_eq!(lex.registry.names_of(&s3.basic_types), vec!["art", "hum"]);
    }

    #[test]
    fn test_propagation_is_monotone() {
        use crate::graph::Lexicon;
        use crate::model::Category;
        use crate::types::{BasicTypeEntry, SeedSynset};

        let data = "\
00000001 03 n 01 top 0 001 ~ 00000002 n 0000 | root
00000002 03 n 01 mid 0 001 ~ 00000003 n 0000 | middle
00000003 03 n 01 leaf 0 000 | leaf";
        let mut lex = Lexicon::new(WnVersion::V3_1);
        lex.load_data(Category::Noun, data.lines());

        let before: Vec<TypeSet> = lex
            .all_synsets(Category::Noun)
            .map(|ss| ss.basic_types.clone())
            .collect();

        let table = BasicTypeTable {
            entries: vec![BasicTypeEntry {
                name: "ent".into(),
                seeds: vec![SeedSynset { id: SynsetId(1), description: "top".into() }],
            }],
        };
        seed(&mut lex, Category::Noun, &table);
        propagate(&mut lex, Category::Noun);

        let ent = lex.registry.get("ent").unwrap();
        for (synset, old) in lex.all_synsets(Category::Noun).zip(before) {
            assert!(synset.basic_types.is_superset(&old));
        }
        for id in [1u32, 2, 3] {
            let ss = lex.get_synset(Category::Noun, SynsetId(id)).unwrap();
            assert!(ss.basic_types.contains(ent), "synset {id} missing seed type");
        }
    }

    #[test]
    fn test_unreached_synset_stays_empty() {
        use crate::graph::Lexicon;
        use crate::model::Category;

        let data = "00000009 03 n 01 island 0 000 | outside every rooted hierarchy";
        let mut lex = Lexicon::new(WnVersion::V3_1);
        lex.load_data(Category::Noun, data.lines());
        propagate(&mut lex, Category::Noun);
        let ss = lex.get_synset(Category::Noun, SynsetId(9)).unwrap();
        assert!(ss.basic_types.is_empty());
    }

    #[test]
    fn test_verb_types_from_headless_synsets() {
        use crate::graph::Lexicon;
        use crate::model::Category;

        let data = "\
00000001 29 v 02 move 0 displace 0 001 ~ 00000002 v 0000 | change position
00000002 29 v 01 walk 0 001 @ 00000001 v 0000 | move on foot";
        let mut lex = Lexicon::new(WnVersion::V3_1);
        lex.load_data(Category::Verb, data.lines());
        seed_verb_types(&mut lex);
        propagate(&mut lex, Category::Verb);

        let top = lex.get_synset(Category::Verb, SynsetId(1)).unwrap();
        assert!(top.is_basic_type());
        let name = lex.registry.name(top.assigned_basic_type.unwrap()).to_string();
        assert_eq!(name, "move.29.0 displace.29.0");

        let walk = lex.get_synset(Category::Verb, SynsetId(2)).unwrap();
        assert_eq!(lex.registry.names_of(&walk.basic_types), vec![name.as_str()]);
    }
}
