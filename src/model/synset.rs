//! Synset — a word-sense cluster, the lexicon's core unit.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{Category, Pointer, TypeId, TypeSet};

/// Opaque synset identifier: the 8-digit byte offset from the data file,
/// unique within one category+version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SynsetId(pub u32);

impl SynsetId {
    /// Parse an 8-digit identifier field. Returns `None` for anything that is
    /// not a pure-digit run (the index format mixes ids with other numerics,
    /// so callers filter on shape first).
    pub fn parse(field: &str) -> Option<SynsetId> {
        if field.len() == 8 && field.bytes().all(|b| b.is_ascii_digit()) {
            field.parse().ok().map(SynsetId)
        } else {
            None
        }
    }
}

impl std::fmt::Display for SynsetId {
    /// Re-pads to 8 digits so ids round-trip to the distribution's format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:08}", self.0)
    }
}

/// A `(surface form, lex_id)` pair. Order within a synset is meaningful:
/// the first word sense is the most frequent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordSense {
    pub form: String,
    /// One-digit hex id distinguishing senses of the same form within one
    /// lexicographer file.
    pub lex_id: u8,
}

/// A cluster of word senses sharing one meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synset {
    pub id: SynsetId,
    pub category: Category,
    /// Lexicographer file number from the data record.
    pub lex_filenum: u8,
    /// Synset kind tag from the data record (`n`, `v`, ...).
    pub ss_type: char,
    /// Ordered word senses; first is the most frequent.
    pub words: SmallVec<[WordSense; 4]>,
    pub gloss: Option<String>,
    /// Pointers in record order. Queries filter by symbol, preserving the
    /// per-symbol ordering of the source record.
    pub pointers: Vec<Pointer>,
    /// Set only on seed synsets, by name interned in the run's registry.
    pub assigned_basic_type: Option<TypeId>,
    /// Basic types accumulated by propagation; empty until seeded/reached.
    pub basic_types: TypeSet,
}

impl Synset {
    pub fn new(id: SynsetId, category: Category) -> Self {
        Self {
            id,
            category,
            lex_filenum: 0,
            ss_type: category.pos_tag(),
            words: SmallVec::new(),
            gloss: None,
            pointers: Vec::new(),
            assigned_basic_type: None,
            basic_types: TypeSet::new(),
        }
    }

    /// All pointers with the given relation symbol, in record order.
    pub fn pointers_with<'a>(&'a self, symbol: &'a str) -> impl Iterator<Item = &'a Pointer> {
        self.pointers.iter().filter(move |p| p.symbol == symbol)
    }

    /// Semantic (synset-to-synset) pointers only.
    pub fn semantic_pointers(&self) -> impl Iterator<Item = &Pointer> {
        self.pointers.iter().filter(|p| p.is_semantic())
    }

    pub fn has_hypernyms(&self) -> bool {
        self.pointers.iter().any(|p| p.is_semantic() && p.is_hypernym())
    }

    pub fn has_hyponyms(&self) -> bool {
        self.pointers.iter().any(|p| p.is_semantic() && p.is_hyponym())
    }

    /// Dotted word-sense labels, e.g. `entity.03.0`. Verb synsets with no
    /// hypernyms use the joined labels as their ad hoc basic-type name.
    pub fn words_as_string(&self) -> String {
        let labels: Vec<String> = self
            .words
            .iter()
            .map(|w| format!("{}.{:02}.{}", w.form, self.lex_filenum, w.lex_id))
            .collect();
        labels.join(" ")
    }

    pub fn is_basic_type(&self) -> bool {
        self.assigned_basic_type.is_some()
    }
}

impl std::fmt::Display for Synset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Synset {} {} {}>", self.id, self.ss_type, self.words_as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::symbols;

    #[test]
    fn test_synset_id_parse() {
        assert_eq!(SynsetId::parse("00001740"), Some(SynsetId(1740)));
        assert_eq!(SynsetId::parse("0000174"), None);
        assert_eq!(SynsetId::parse("0000174x"), None);
        assert_eq!(SynsetId(1740).to_string(), "00001740");
    }

    #[test]
    fn test_words_as_string() {
        let mut ss = Synset::new(SynsetId(1740), Category::Noun);
        ss.lex_filenum = 3;
        ss.words.push(WordSense { form: "entity".into(), lex_id: 0 });
        assert_eq!(ss.words_as_string(), "entity.03.0");
    }

    #[test]
    fn test_pointer_queries() {
        let mut ss = Synset::new(SynsetId(100), Category::Noun);
        ss.pointers.push(Pointer::semantic(symbols::HYPERNYM, SynsetId(1), 'n'));
        ss.pointers.push(Pointer::semantic(symbols::HYPONYM, SynsetId(2), 'n'));
        ss.pointers.push(Pointer::semantic(symbols::HYPONYM, SynsetId(3), 'n'));

        assert!(ss.has_hypernyms());
        assert!(ss.has_hyponyms());
        let hypos: Vec<SynsetId> = ss
            .pointers_with(symbols::HYPONYM)
            .map(|p| p.target)
            .collect();
        assert_eq!(hypos, vec![SynsetId(2), SynsetId(3)]);
    }
}
