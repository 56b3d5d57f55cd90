//! Lemma classification: polysemous type signatures and the CoreLex index.

use std::collections::BTreeMap;

use tracing::info;

use crate::graph::Lexicon;
use crate::model::{Category, TypeSet};
use crate::propagate::IsaFilter;
use crate::types::{CorelexTypeMap, IsaTable};

/// Verb basic types are synset-specific label strings, so verb signatures use
/// a join token that cannot occur inside a label.
fn join_token(category: Category) -> &'static str {
    match category {
        Category::Noun => " ",
        Category::Verb => "*",
    }
}

/// The CoreLex classification for one category: every lemma's canonical
/// polysemous type signature, plus the signature → lemmas reverse index.
///
/// Computed once per run from the propagated, filtered graph; never mutated
/// incrementally.
#[derive(Debug, Clone)]
pub struct Classification {
    category: Category,
    /// lemma → signature.
    word_index: BTreeMap<String, String>,
    /// signature → lemmas, alphabetical.
    class_index: BTreeMap<String, Vec<String>>,
}

impl Classification {
    /// Classify every lemma of the category and group by signature.
    ///
    /// The lemma-level ISA filter is authoritative here: two senses each
    /// individually filtered can re-introduce a redundant supertype pairing
    /// in their union.
    pub fn build(lexicon: &Lexicon, category: Category, isa: &IsaTable) -> Self {
        let filter = IsaFilter::new(isa, &lexicon.registry);
        let mut word_index = BTreeMap::new();
        let mut class_index: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for lemma in lexicon.lemmas(category) {
            let signature = classify_with(lexicon, category, lemma, &filter);
            class_index
                .entry(signature.clone())
                .or_default()
                .push(lemma.to_string());
            word_index.insert(lemma.to_string(), signature);
        }
        info!(
            category = %category,
            lemmas = word_index.len(),
            classes = class_index.len(),
            "built classification"
        );
        Self { category, word_index, class_index }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The canonical signature of a lemma, if the lemma is in the index.
    pub fn signature_of(&self, lemma: &str) -> Option<&str> {
        self.word_index.get(lemma).map(String::as_str)
    }

    /// Signatures with their lemmas, in signature order.
    pub fn classes(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.class_index
            .iter()
            .map(|(sig, lemmas)| (sig.as_str(), lemmas.as_slice()))
    }

    pub fn lemmas_of(&self, signature: &str) -> Option<&[String]> {
        self.class_index.get(signature).map(Vec::as_slice)
    }

    pub fn lemma_count(&self) -> usize {
        self.word_index.len()
    }

    pub fn class_count(&self) -> usize {
        self.class_index.len()
    }

    /// Degree-of-mapping statistics against the curated CoreLex type map.
    /// Lemmas with an empty signature are bucketed separately, not counted
    /// as mapped or unmapped.
    pub fn statistics(&self, map: &CorelexTypeMap) -> CorelexStatistics {
        let mut stats = CorelexStatistics::default();
        let token = join_token(self.category);
        for signature in self.word_index.values() {
            stats.total += 1;
            if signature.is_empty() {
                stats.untyped += 1;
                continue;
            }
            if !signature.contains(token) {
                stats.singleton += 1;
            }
            match map.corelex_type(signature) {
                Some(_) => stats.mapped += 1,
                None => stats.unmapped += 1,
            }
        }
        stats
    }
}

/// Compute one lemma's signature: union of `basic_types` over its sense
/// synsets, ISA-filtered, sorted, joined. Unknown lemmas and lemmas whose
/// senses were never reached by any seed yield the empty signature.
pub fn classify(lexicon: &Lexicon, category: Category, lemma: &str, isa: &IsaTable) -> String {
    let filter = IsaFilter::new(isa, &lexicon.registry);
    classify_with(lexicon, category, lemma, &filter)
}

fn classify_with(lexicon: &Lexicon, category: Category, lemma: &str, filter: &IsaFilter) -> String {
    let Some(senses) = lexicon.senses_of(category, lemma) else {
        return String::new();
    };
    let mut union = TypeSet::new();
    for &id in senses {
        // unresolved sense ids are dropped silently, like any dangling pointer
        if let Some(synset) = lexicon.get_synset(category, id) {
            union.union_with(&synset.basic_types);
        }
    }
    filter.filter(&mut union);
    lexicon.registry.names_of(&union).join(join_token(category))
}

/// Coverage counters for one classification run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorelexStatistics {
    pub total: usize,
    /// Lemmas whose signature is a single basic type.
    pub singleton: usize,
    /// Lemmas with an empty signature (no sense reached by any seed).
    pub untyped: usize,
    /// Lemmas whose signature has a curated CoreLex type.
    pub mapped: usize,
    pub unmapped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Lexicon;
    use crate::model::WnVersion;
    use crate::propagate::{propagate, seed};
    use crate::types::{BasicTypeEntry, BasicTypeTable, SeedSynset};
    use pretty_assertions::assert_eq;

    fn table(entries: &[(&str, u32)]) -> BasicTypeTable {
        BasicTypeTable {
            entries: entries
                .iter()
                .map(|(name, id)| BasicTypeEntry {
                    name: name.to_string(),
                    seeds: vec![SeedSynset {
                        id: crate::model::SynsetId(*id),
                        description: name.to_string(),
                    }],
                })
                .collect(),
        }
    }

    fn small_lexicon() -> Lexicon {
        // person(1) and artifact(2) are seeds; statue(3) inherits from both
        let data = "\
00000001 03 n 01 person 0 001 ~ 00000003 n 0000 | a human
00000002 06 n 01 artifact 0 001 ~ 00000003 n 0000 | a made thing
00000003 06 n 01 statue 0 002 @ 00000001 n 0000 @ 00000002 n 0000 | a sculpture
00000004 03 n 01 orphan 0 000 | never reached";
        let index = "\
person n 1 1 ~ 1 0 00000001
statue n 1 1 @ 1 0 00000003
orphan n 1 0 0 1 0 00000004";
        let mut lex = Lexicon::new(WnVersion::V3_1);
        lex.load_index(Category::Noun, index.lines());
        lex.load_data(Category::Noun, data.lines());
        seed(&mut lex, Category::Noun, &table(&[("hum", 1), ("art", 2)]));
        propagate(&mut lex, Category::Noun);
        lex
    }

    #[test]
    fn test_multiple_inheritance_signature() {
        let lex = small_lexicon();
        let sig = classify(&lex, Category::Noun, "statue", &IsaTable::empty());
        assert_eq!(sig, "art hum");
    }

    #[test]
    fn test_unreached_lemma_has_empty_signature() {
        let lex = small_lexicon();
        let sig = classify(&lex, Category::Noun, "orphan", &IsaTable::empty());
        assert_eq!(sig, "");
    }

    #[test]
    fn test_index_groups_by_signature() {
        let lex = small_lexicon();
        let cl = Classification::build(&lex, Category::Noun, &IsaTable::empty());
        assert_eq!(cl.signature_of("statue"), Some("art hum"));
        assert_eq!(cl.signature_of("person"), Some("hum"));
        assert_eq!(cl.lemmas_of(""), Some(&["orphan".to_string()][..]));
        assert_eq!(cl.lemma_count(), 3);
    }

    #[test]
    fn test_statistics_buckets() {
        let lex = small_lexicon();
        let cl = Classification::build(&lex, Category::Noun, &IsaTable::empty());
        let stats = cl.statistics(&CorelexTypeMap::builtin());
        assert_eq!(stats.total, 3);
        assert_eq!(stats.untyped, 1);
        assert_eq!(stats.singleton, 1); // person → "hum"
        // "hum" → hum and "art hum" → arh both have curated types
        assert_eq!(stats.mapped, 2);
        assert_eq!(stats.unmapped, 0);
    }

    #[test]
    fn test_lemma_level_filter_reapplies() {
        // one sense propagates {hum}, the other {ent}; with (hum, ent) in the
        // table the union must re-filter to {hum}
        let data = "\
00000001 03 n 01 person 0 001 ~ 00000003 n 0000 | human seed
00000002 03 n 01 entity 0 001 ~ 00000004 n 0000 | entity seed
00000003 18 n 01 child 0 001 @ 00000001 n 0000 | a young person
00000004 03 n 01 thing 0 001 @ 00000002 n 0000 | some thing";
        let index = "issue n 2 1 ~ 2 0 00000003 00000004";
        let mut lex = Lexicon::new(WnVersion::V3_1);
        lex.load_index(Category::Noun, index.lines());
        lex.load_data(Category::Noun, data.lines());
        seed(&mut lex, Category::Noun, &table(&[("hum", 1), ("ent", 2)]));
        propagate(&mut lex, Category::Noun);

        let isa = IsaTable { pairs: vec![("hum".into(), "ent".into())] };
        assert_eq!(classify(&lex, Category::Noun, "issue", &isa), "hum");
        // without the ISA pair both types survive
        assert_eq!(
            classify(&lex, Category::Noun, "issue", &IsaTable::empty()),
            "ent hum"
        );
    }

    #[test]
    fn test_verb_signature_join_token() {
        use crate::propagate::seed_verb_types;
        let data = "\
00000001 29 v 01 move 0 001 ~ 00000003 v 0000 | change position
00000002 30 v 01 think 0 001 ~ 00000003 v 0000 | cogitate
00000003 29 v 01 mull 0 002 @ 00000001 v 0000 @ 00000002 v 0000 | both";
        let index = "mull v 1 1 @ 1 0 00000003";
        let mut lex = Lexicon::new(WnVersion::V3_1);
        lex.load_index(Category::Verb, index.lines());
        lex.load_data(Category::Verb, data.lines());
        seed_verb_types(&mut lex);
        propagate(&mut lex, Category::Verb);

        let sig = classify(&lex, Category::Verb, "mull", &IsaTable::empty());
        assert_eq!(sig, "move.29.0*think.30.0");
    }
}
