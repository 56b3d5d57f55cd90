//! Lexical categories and lexicon versions.

use serde::{Deserialize, Serialize};

use crate::Error;

/// The two syntactic categories the lexicon defines basic types for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Noun,
    Verb,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Noun => "noun",
            Category::Verb => "verb",
        }
    }

    /// The part-of-speech tag used in data-file pointer tuples.
    pub fn pos_tag(&self) -> char {
        match self {
            Category::Noun => 'n',
            Category::Verb => 'v',
        }
    }

    /// Map a pointer part-of-speech tag back to a category.
    ///
    /// Adjective and adverb tags (`a`, `s`, `r`) have no synset store here, so
    /// pointers into them resolve to `None` and are dropped downstream.
    pub fn from_pos_tag(tag: char) -> Option<Category> {
        match tag {
            'n' => Some(Category::Noun),
            'v' => Some(Category::Verb),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "noun" | "n" => Ok(Category::Noun),
            "verb" | "v" => Ok(Category::Verb),
            other => Err(Error::UnsupportedCategory(other.to_string())),
        }
    }
}

/// Supported lexicon versions. Seed tables and ISA tables are keyed by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WnVersion {
    V1_5,
    V3_1,
}

impl WnVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            WnVersion::V1_5 => "1.5",
            WnVersion::V3_1 => "3.1",
        }
    }
}

impl std::fmt::Display for WnVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WnVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "1.5" => Ok(WnVersion::V1_5),
            "3.1" => Ok(WnVersion::V3_1),
            other => Err(Error::UnsupportedVersion(other.to_string())),
        }
    }
}
