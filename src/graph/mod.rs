//! # Lexical Graph
//!
//! `Lexicon` owns every synset and lemma for one lexicon version and answers
//! structural queries. It is built once from parsed records and is read-only
//! afterwards: propagation mutates only the per-synset basic-type
//! annotations, never the structural edges.
//!
//! Pointer targets that cannot be resolved (missing id, category this system
//! does not store) are dropped from traversal results but never from the raw
//! record counts — the discrepancy is kept observable for data-quality
//! auditing via [`Lexicon::unresolved_pointers`].

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;
use tracing::info;

use crate::model::{Category, Pointer, Synset, SynsetId, TypeRegistry, WnVersion};
use crate::records::{self, DataRecord, IndexRecord, SenseRecord};

/// Per-category synset arena and lemma index.
#[derive(Debug, Default)]
struct CategoryStore {
    synsets: Vec<Synset>,
    by_id: HashMap<SynsetId, usize>,
    /// lemma → synset ids in sense order (first = most frequent).
    lemma_idx: HashMap<String, Vec<SynsetId>>,
}

/// One fully-resolved synset graph per lexicon version.
pub struct Lexicon {
    version: WnVersion,
    noun: CategoryStore,
    verb: CategoryStore,
    /// Basic-type names interned for this run; shared by propagation,
    /// classification, and reporting.
    pub registry: TypeRegistry,
    /// sense key → synset id, from the sense-index file (optional load).
    sense_idx: HashMap<String, SynsetId>,
    /// `(source, pointer)` for every semantic pointer, computed once per
    /// category and cached for the life of the graph.
    relation_cache: RwLock<HashMap<Category, Arc<Vec<(SynsetId, Pointer)>>>>,
}

impl Lexicon {
    pub fn new(version: WnVersion) -> Self {
        Self {
            version,
            noun: CategoryStore::default(),
            verb: CategoryStore::default(),
            registry: TypeRegistry::new(),
            sense_idx: HashMap::new(),
            relation_cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn version(&self) -> WnVersion {
        self.version
    }

    fn store(&self, category: Category) -> &CategoryStore {
        match category {
            Category::Noun => &self.noun,
            Category::Verb => &self.verb,
        }
    }

    fn store_mut(&mut self, category: Category) -> &mut CategoryStore {
        match category {
            Category::Noun => &mut self.noun,
            Category::Verb => &mut self.verb,
        }
    }

    // ========================================================================
    // Bulk load
    // ========================================================================

    /// Consume index-file lines, building the lemma index for one category.
    pub fn load_index<'a>(&mut self, category: Category, lines: impl Iterator<Item = &'a str>) {
        let store = self.store_mut(category);
        for line in lines {
            if !records::is_record_line(line) {
                continue;
            }
            if let Some(IndexRecord { lemma, synsets }) = IndexRecord::parse(line.trim_end()) {
                store.lemma_idx.insert(lemma, synsets);
            }
        }
        info!(
            category = %category,
            lemmas = store.lemma_idx.len(),
            "loaded lemma index"
        );
    }

    /// Consume data-file lines, building the synset arena for one category.
    pub fn load_data<'a>(&mut self, category: Category, lines: impl Iterator<Item = &'a str>) {
        let store = self.store_mut(category);
        for line in lines {
            if !records::is_record_line(line) {
                continue;
            }
            let Some(rec) = DataRecord::parse(line.trim_end()) else {
                continue;
            };
            let synset = synset_from_record(rec, category);
            let idx = store.synsets.len();
            store.by_id.insert(synset.id, idx);
            store.synsets.push(synset);
        }
        info!(
            category = %category,
            synsets = store.synsets.len(),
            "loaded synset data"
        );
    }

    /// Consume sense-index lines, building the sense-key map.
    pub fn load_sense_index<'a>(&mut self, lines: impl Iterator<Item = &'a str>) {
        for line in lines {
            if let Some(rec) = SenseRecord::parse(line.trim_end()) {
                self.sense_idx.insert(rec.sense_key, rec.synset);
            }
        }
        info!(keys = self.sense_idx.len(), "loaded sense index");
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn get_synset(&self, category: Category, id: SynsetId) -> Option<&Synset> {
        let store = self.store(category);
        store.by_id.get(&id).map(|&idx| &store.synsets[idx])
    }

    pub(crate) fn get_synset_mut(&mut self, category: Category, id: SynsetId) -> Option<&mut Synset> {
        let store = self.store_mut(category);
        match store.by_id.get(&id) {
            Some(&idx) => Some(&mut store.synsets[idx]),
            None => None,
        }
    }

    /// The synset ids a lemma participates in, in sense order.
    pub fn senses_of(&self, category: Category, lemma: &str) -> Option<&[SynsetId]> {
        self.store(category).lemma_idx.get(lemma).map(Vec::as_slice)
    }

    /// Resolve a version-independent sense key to a synset id.
    pub fn resolve_sense_key(&self, key: &str) -> Option<SynsetId> {
        self.sense_idx.get(key).copied()
    }

    /// All lemmas of a category, alphabetically (for reproducible iteration).
    pub fn lemmas(&self, category: Category) -> Vec<&str> {
        let mut lemmas: Vec<&str> = self
            .store(category)
            .lemma_idx
            .keys()
            .map(String::as_str)
            .collect();
        lemmas.sort_unstable();
        lemmas
    }

    pub fn all_synsets(&self, category: Category) -> impl Iterator<Item = &Synset> {
        self.store(category).synsets.iter()
    }

    pub(crate) fn all_synsets_mut(&mut self, category: Category) -> impl Iterator<Item = &mut Synset> {
        self.store_mut(category).synsets.iter_mut()
    }

    pub fn lemma_count(&self, category: Category) -> usize {
        self.store(category).lemma_idx.len()
    }

    pub fn synset_count(&self, category: Category) -> usize {
        self.store(category).synsets.len()
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Direct hypernyms: semantic `@` and `@i` pointers, in record order.
    /// Unresolved targets are dropped.
    pub fn hypernyms(&self, synset: &Synset) -> Vec<&Synset> {
        synset
            .semantic_pointers()
            .filter(|p| p.is_hypernym())
            .filter_map(|p| self.resolve(p))
            .collect()
    }

    /// Direct hyponyms: semantic `~` and `~i` pointers, in record order.
    pub fn hyponyms(&self, synset: &Synset) -> Vec<&Synset> {
        synset
            .semantic_pointers()
            .filter(|p| p.is_hyponym())
            .filter_map(|p| self.resolve(p))
            .collect()
    }

    /// Wholes this synset is a member/substance/part of (`#m`, `#s`, `#p`).
    pub fn holonyms(&self, synset: &Synset) -> Vec<&Synset> {
        synset
            .semantic_pointers()
            .filter(|p| p.is_holonym())
            .filter_map(|p| self.resolve(p))
            .collect()
    }

    /// Members/substances/parts of this synset (`%m`, `%s`, `%p`).
    pub fn meronyms(&self, synset: &Synset) -> Vec<&Synset> {
        synset
            .semantic_pointers()
            .filter(|p| p.is_meronym())
            .filter_map(|p| self.resolve(p))
            .collect()
    }

    /// Co-hyponyms: the other hyponyms of this synset's hypernyms.
    pub fn siblings(&self, synset: &Synset) -> Vec<&Synset> {
        let mut result = Vec::new();
        for hyper in self.hypernyms(synset) {
            for sib in self.hyponyms(hyper) {
                if sib.id != synset.id {
                    result.push(sib);
                }
            }
        }
        result
    }

    /// Resolve a pointer to its target synset. Targets in a category this
    /// system does not store resolve to `None`.
    fn resolve(&self, pointer: &Pointer) -> Option<&Synset> {
        let cat = pointer.target_category()?;
        self.get_synset(cat, pointer.target)
    }

    /// Every hypernym chain from the synset to a root, as id sequences
    /// starting at the synset itself. Multiple chains occur under multiple
    /// inheritance.
    pub fn paths_to_top(&self, category: Category, id: SynsetId) -> Vec<Vec<SynsetId>> {
        let Some(synset) = self.get_synset(category, id) else {
            return Vec::new();
        };
        let hypernyms = self.hypernyms(synset);
        if hypernyms.is_empty() {
            return vec![vec![id]];
        }
        let mut paths = Vec::new();
        for hyper in hypernyms {
            for mut tail in self.paths_to_top(category, hyper.id) {
                let mut path = vec![id];
                path.append(&mut tail);
                paths.push(path);
            }
        }
        paths
    }

    /// Synsets with no hypernyms (the tops of the hierarchy).
    pub fn toptypes(&self, category: Category) -> Vec<&Synset> {
        self.all_synsets(category)
            .filter(|ss| !ss.has_hypernyms())
            .collect()
    }

    /// Synsets carrying a basic-type assignment (the seeds).
    pub fn basic_type_synsets(&self, category: Category) -> Vec<&Synset> {
        self.all_synsets(category)
            .filter(|ss| ss.is_basic_type())
            .collect()
    }

    // ========================================================================
    // Relation scan
    // ========================================================================

    /// `(source id, pointer)` for every semantic pointer of the category.
    /// Computed once and cached for the life of the graph; the significance
    /// analyzer iterates this heavily.
    pub fn all_relations(&self, category: Category) -> Arc<Vec<(SynsetId, Pointer)>> {
        if let Some(cached) = self.relation_cache.read().get(&category) {
            return Arc::clone(cached);
        }
        let relations: Vec<(SynsetId, Pointer)> = self
            .all_synsets(category)
            .flat_map(|ss| {
                ss.semantic_pointers()
                    .map(|p| (ss.id, p.clone()))
                    .collect::<Vec<_>>()
            })
            .collect();
        let relations = Arc::new(relations);
        self.relation_cache
            .write()
            .insert(category, Arc::clone(&relations));
        relations
    }

    // ========================================================================
    // Audit
    // ========================================================================

    /// Count of semantic pointers whose target does not resolve to a stored
    /// synset. These edges are skipped by traversal but kept in the records.
    pub fn unresolved_pointers(&self, category: Category) -> usize {
        self.all_synsets(category)
            .flat_map(|ss| ss.semantic_pointers())
            .filter(|p| self.resolve(p).is_none())
            .count()
    }
}

fn synset_from_record(rec: DataRecord, category: Category) -> Synset {
    let mut synset = Synset::new(rec.id, category);
    synset.lex_filenum = rec.lex_filenum;
    synset.ss_type = rec.ss_type;
    synset.words = rec.words;
    synset.gloss = rec.gloss;
    synset.pointers = rec
        .pointers
        .into_iter()
        .map(|p| Pointer {
            symbol: p.symbol,
            target: p.target,
            pos: p.pos,
            source_word: p.source_word,
            target_word: p.target_word,
        })
        .collect();
    synset
}
