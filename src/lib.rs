//! # corelex-rs — CoreLex Classification of WordNet Lemmas
//!
//! Builds a lexical classification resource (CoreLex) from a WordNet
//! distribution: every noun/verb lemma is grouped into a polysemous type
//! signature derived from a fixed inventory of coarse semantic categories
//! ("basic types"), propagated through the hypernym/hyponym hierarchy.
//!
//! ## Design Principles
//!
//! 1. **Records are pure**: line → typed record is a pure function
//! 2. **The graph is immutable**: after load only the basic-type annotations change
//! 3. **Configuration is explicit**: seed/ISA tables are objects, never globals
//! 4. **Warnings, not failures**: the distribution's anomalies are logged and kept
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use corelex_rs::{Category, Corelex, Lexicon, WnVersion};
//!
//! # fn example() -> corelex_rs::Result<()> {
//! let index = std::fs::read_to_string("dict/index.noun")?;
//! let data = std::fs::read_to_string("dict/data.noun")?;
//!
//! let mut lexicon = Lexicon::new(WnVersion::V3_1);
//! lexicon.load_index(Category::Noun, index.lines());
//! lexicon.load_data(Category::Noun, data.lines());
//!
//! // seed → propagate → filter → classify
//! let corelex = Corelex::create(lexicon, Category::Noun);
//! for (signature, lemmas) in corelex.classification().classes() {
//!     println!("{}\t{}", signature, lemmas.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline Stages
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | Parse | `records` | index/data/sense lines → typed records |
//! | Load | `graph` | records → resolved `Lexicon` |
//! | Seed + propagate | `propagate` | basic types down the hyponym DAG |
//! | Classify | `classify` | per-lemma signatures, class index |
//! | Analyze | `stats` | chi-squared relation significance |

// ============================================================================
// Modules
// ============================================================================

pub mod classify;
pub mod export;
pub mod graph;
pub mod model;
pub mod propagate;
pub mod records;
pub mod stats;
pub mod types;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{
    symbols, Category, Pointer, Synset, SynsetId, TypeId, TypeRegistry, TypeSet, WnVersion,
    WordSense,
};

// ============================================================================
// Re-exports: Graph and classification
// ============================================================================

pub use classify::{Classification, CorelexStatistics};
pub use graph::Lexicon;
pub use types::{BasicTypeTable, CorelexTypeMap, IsaTable};

// ============================================================================
// Re-exports: Statistics
// ============================================================================

pub use stats::{
    ChiSquaredCell, Distribution, RelationSummary, SignificanceThresholds, SignificantPair,
};

// ============================================================================
// Top-level CoreLex handle
// ============================================================================

/// The primary entry point. A `Corelex` owns a loaded lexicon and the
/// classification built from it.
pub struct Corelex {
    lexicon: Lexicon,
    category: Category,
    classification: Classification,
}

impl Corelex {
    /// Build the classification with the builtin tables for the lexicon's
    /// version: curated seed/ISA tables for nouns, ad hoc headless-synset
    /// types for verbs.
    pub fn create(lexicon: Lexicon, category: Category) -> Self {
        let version = lexicon.version();
        match category {
            Category::Noun => Self::create_with(
                lexicon,
                category,
                &BasicTypeTable::builtin(version),
                &IsaTable::builtin(version),
            ),
            Category::Verb => {
                let mut lexicon = lexicon;
                let isa = IsaTable::empty();
                propagate::seed_verb_types(&mut lexicon);
                Self::finish(lexicon, category, &isa)
            }
        }
    }

    /// Build the classification with caller-supplied tables.
    pub fn create_with(
        mut lexicon: Lexicon,
        category: Category,
        table: &BasicTypeTable,
        isa: &IsaTable,
    ) -> Self {
        // Phase 1: seed
        propagate::seed(&mut lexicon, category, table);
        Self::finish(lexicon, category, isa)
    }

    fn finish(mut lexicon: Lexicon, category: Category, isa: &IsaTable) -> Self {
        // Phase 2: propagate down the hyponym DAG
        propagate::propagate(&mut lexicon, category);

        // Phase 3: synset-level ISA filter (precomputation; the classifier
        // re-filters at the lemma level, which is authoritative)
        propagate::filter_synsets(&mut lexicon, category, isa);

        // Phase 4: classify
        let classification = Classification::build(&lexicon, category, isa);

        Self { lexicon, category, classification }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Access the underlying lexicon (for advanced queries).
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Relation-symbol counts between basic-type pairs for this category.
    pub fn summarize_relations(&self) -> RelationSummary {
        stats::summarize_relations(&self.lexicon, self.category)
    }

    /// The basic-type pairs whose relation distribution differs significantly
    /// from the lexicon-wide baseline.
    pub fn significant_pairs(
        &self,
        summary: &RelationSummary,
        thresholds: SignificanceThresholds,
    ) -> Vec<SignificantPair> {
        stats::significant_pairs(summary, thresholds)
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The only fatal configuration errors: an unknown lexicon version or a
    /// category outside noun/verb terminates the run at startup.
    #[error("unsupported lexicon version: {0}")]
    UnsupportedVersion(String),

    #[error("unsupported category: {0} (expected noun or verb)")]
    UnsupportedCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
