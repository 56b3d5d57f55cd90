//! Pointer — a directed, typed edge between synsets or word senses.

use serde::{Deserialize, Serialize};

use super::{Category, SynsetId};

/// Well-known relation symbols from the lexicon's closed pointer vocabulary.
///
/// Symbols are kept as strings rather than an enum so that symbols outside
/// this list (the distribution grows them over versions) stay countable data
/// instead of parse errors.
pub mod symbols {
    pub const ANTONYM: &str = "!";
    pub const HYPERNYM: &str = "@";
    pub const INSTANCE_HYPERNYM: &str = "@i";
    pub const HYPONYM: &str = "~";
    pub const INSTANCE_HYPONYM: &str = "~i";
    pub const MEMBER_HOLONYM: &str = "#m";
    pub const SUBSTANCE_HOLONYM: &str = "#s";
    pub const PART_HOLONYM: &str = "#p";
    pub const MEMBER_MERONYM: &str = "%m";
    pub const SUBSTANCE_MERONYM: &str = "%s";
    pub const PART_MERONYM: &str = "%p";
    pub const ATTRIBUTE: &str = "=";
    pub const DERIVATION: &str = "+";
    pub const ENTAILMENT: &str = "*";
    pub const CAUSE: &str = ">";
    pub const ALSO_SEE: &str = "^";
    pub const VERB_GROUP: &str = "$";
    pub const SIMILAR_TO: &str = "&";

    /// Symbols that define the generalization hierarchy. These drive
    /// propagation and are excluded from relation-significance counting.
    pub const HIERARCHY: [&str; 4] = [HYPERNYM, INSTANCE_HYPERNYM, HYPONYM, INSTANCE_HYPONYM];

    pub const HOLONYMS: [&str; 3] = [MEMBER_HOLONYM, SUBSTANCE_HOLONYM, PART_HOLONYM];
    pub const MERONYMS: [&str; 3] = [MEMBER_MERONYM, SUBSTANCE_MERONYM, PART_MERONYM];
}

/// A directed, typed edge from its owning synset to a target synset.
///
/// The `source_word`/`target_word` pair distinguishes *semantic*
/// (synset-to-synset, both zero) from *lexical* (word-sense-to-word-sense)
/// pointers. Only semantic pointers participate in basic-type propagation
/// and relation-significance counting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pointer {
    /// Relation symbol, e.g. `@` (hypernym) or `#m` (member holonym).
    pub symbol: String,
    pub target: SynsetId,
    /// Part-of-speech tag of the target synset (`n`, `v`, `a`, `s`, `r`).
    pub pos: char,
    /// Word number in the source synset; 0 for semantic pointers.
    pub source_word: u8,
    /// Word number in the target synset; 0 for semantic pointers.
    pub target_word: u8,
}

impl Pointer {
    pub fn semantic(symbol: impl Into<String>, target: SynsetId, pos: char) -> Self {
        Self {
            symbol: symbol.into(),
            target,
            pos,
            source_word: 0,
            target_word: 0,
        }
    }

    /// Synset-to-synset pointers carry `0000` in the source/target field.
    pub fn is_semantic(&self) -> bool {
        self.source_word == 0 && self.target_word == 0
    }

    /// The category of the target synset, if the target lives in one of the
    /// two stores this system keeps.
    pub fn target_category(&self) -> Option<Category> {
        Category::from_pos_tag(self.pos)
    }

    pub fn is_hierarchy(&self) -> bool {
        symbols::HIERARCHY.contains(&self.symbol.as_str())
    }

    pub fn is_hypernym(&self) -> bool {
        self.symbol == symbols::HYPERNYM || self.symbol == symbols::INSTANCE_HYPERNYM
    }

    pub fn is_hyponym(&self) -> bool {
        self.symbol == symbols::HYPONYM || self.symbol == symbols::INSTANCE_HYPONYM
    }

    pub fn is_holonym(&self) -> bool {
        symbols::HOLONYMS.contains(&self.symbol.as_str())
    }

    pub fn is_meronym(&self) -> bool {
        symbols::MERONYMS.contains(&self.symbol.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_semantic_vs_lexical() {
        let sem = Pointer::semantic(symbols::HYPERNYM, SynsetId(1740), 'n');
        assert!(sem.is_semantic());

        let lex = Pointer {
            symbol: symbols::ANTONYM.into(),
            target: SynsetId(1740),
            pos: 'n',
            source_word: 1,
            target_word: 2,
        };
        assert!(!lex.is_semantic());
    }

    #[test]
    fn test_hierarchy_symbols() {
        assert!(Pointer::semantic("@", SynsetId(1), 'n').is_hypernym());
        assert!(Pointer::semantic("@i", SynsetId(1), 'n').is_hypernym());
        assert!(Pointer::semantic("~", SynsetId(1), 'n').is_hyponym());
        assert!(!Pointer::semantic("#m", SynsetId(1), 'n').is_hierarchy());
    }
}
