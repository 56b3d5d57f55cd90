//! Relation-significance analysis: frequency distributions of relation
//! symbols between basic-type pairs, tested against the lexicon-wide
//! baseline with a chi-squared goodness-of-fit statistic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::graph::Lexicon;
use crate::model::{Category, SynsetId};

// ============================================================================
// Distribution
// ============================================================================

/// Counts and derived probabilities over relation-symbol categories.
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    pub name: String,
    counts: BTreeMap<String, u64>,
    probabilities: BTreeMap<String, f64>,
    pub observations: u64,
    /// Degrees of freedom: number of categories − 1. Informational only.
    pub df: usize,
}

impl Distribution {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn add(&mut self, category: &str, count: u64) {
        *self.counts.entry(category.to_string()).or_insert(0) += count;
    }

    /// Derive observations, probabilities and df from the accumulated counts.
    pub fn finish(&mut self) {
        self.observations = self.counts.values().sum();
        self.df = self.counts.len().saturating_sub(1);
        self.probabilities.clear();
        if self.observations > 0 {
            for (category, &count) in &self.counts {
                self.probabilities
                    .insert(category.clone(), count as f64 / self.observations as f64);
            }
        }
    }

    pub fn count(&self, category: &str) -> u64 {
        self.counts.get(category).copied().unwrap_or(0)
    }

    pub fn probability(&self, category: &str) -> f64 {
        self.probabilities.get(category).copied().unwrap_or(0.0)
    }

    /// Categories in sorted order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// The chi-squared statistic of this distribution against a baseline,
    /// with the per-category cell table. Cells whose expected count is zero
    /// are skipped rather than dividing by zero.
    pub fn chi_squared(&self, baseline: &Distribution) -> (f64, Vec<ChiSquaredCell>) {
        let mut cells = Vec::new();
        for category in baseline.categories() {
            let expected = baseline.probability(category) * self.observations as f64;
            if expected == 0.0 {
                continue;
            }
            cells.push(ChiSquaredCell {
                category: category.to_string(),
                observed: self.count(category),
                expected,
            });
        }
        let statistic = cells.iter().map(ChiSquaredCell::component).sum();
        (statistic, cells)
    }
}

/// One category's observed vs. expected count.
#[derive(Debug, Clone, PartialEq)]
pub struct ChiSquaredCell {
    pub category: String,
    pub observed: u64,
    pub expected: f64,
}

impl ChiSquaredCell {
    /// The cell's contribution to the X² statistic: (O − E)² / E.
    pub fn component(&self) -> f64 {
        let diff = self.observed as f64 - self.expected;
        diff * diff / self.expected
    }
}

// ============================================================================
// Relation summary
// ============================================================================

/// An ordered basic-type pair, source type first.
pub type TypePair = (String, String);

/// Relation-symbol counts between one basic-type pair, with the synset pairs
/// that realize each symbol (consumed by the report writers).
#[derive(Debug, Clone, Default)]
pub struct PairRelations {
    pub counts: BTreeMap<String, u64>,
    pub instances: BTreeMap<String, Vec<(SynsetId, SynsetId)>>,
}

impl PairRelations {
    fn add(&mut self, symbol: &str, source: SynsetId, target: SynsetId) {
        *self.counts.entry(symbol.to_string()).or_insert(0) += 1;
        self.instances
            .entry(symbol.to_string())
            .or_default()
            .push((source, target));
    }

    pub fn observations(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Relation-symbol counts for every basic-type pair of one category.
#[derive(Debug, Clone, Default)]
pub struct RelationSummary {
    pub pairs: BTreeMap<TypePair, PairRelations>,
}

/// Count every semantic, non-hierarchy pointer between two typed synsets,
/// once per combination of source and target basic types (a synset may carry
/// several). Self-pairs are kept in the summary; the significance test skips
/// them.
pub fn summarize_relations(lexicon: &Lexicon, category: Category) -> RelationSummary {
    let mut summary = RelationSummary::default();
    let relations = lexicon.all_relations(category);
    for (source_id, pointer) in relations.iter() {
        if pointer.is_hierarchy() {
            continue;
        }
        let Some(target_cat) = pointer.target_category() else {
            continue;
        };
        let Some(source) = lexicon.get_synset(category, *source_id) else {
            continue;
        };
        let Some(target) = lexicon.get_synset(target_cat, pointer.target) else {
            continue;
        };
        for source_type in source.basic_types.iter() {
            for target_type in target.basic_types.iter() {
                let pair = (
                    lexicon.registry.name(source_type).to_string(),
                    lexicon.registry.name(target_type).to_string(),
                );
                summary
                    .pairs
                    .entry(pair)
                    .or_default()
                    .add(&pointer.symbol, *source_id, pointer.target);
            }
        }
    }
    info!(category = %category, pairs = summary.pairs.len(), "summarized relations");
    summary
}

/// Sum all pair-level counts into the lexicon-wide baseline distribution.
pub fn overall_distribution(summary: &RelationSummary) -> Distribution {
    let mut baseline = Distribution::new("all");
    for relations in summary.pairs.values() {
        for (symbol, &count) in &relations.counts {
            baseline.add(symbol, count);
        }
    }
    baseline.finish();
    baseline
}

// ============================================================================
// Significance
// ============================================================================

/// Policy cutoffs for reporting a pair. These encode an empirical
/// "interesting enough to report" judgment, not derived values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignificanceThresholds {
    /// Minimum total observations for a pair to be tested.
    pub min_observations: u64,
    /// Minimum X² statistic for a pair to be reported.
    pub min_statistic: f64,
    /// Minimum per-cell component for a symbol to be listed.
    pub min_component: f64,
}

impl Default for SignificanceThresholds {
    fn default() -> Self {
        Self {
            min_observations: 20,
            min_statistic: 100.0,
            min_component: 200.0,
        }
    }
}

/// One reported basic-type pair with its over-represented relation symbols.
#[derive(Debug, Clone)]
pub struct SignificantPair {
    pub type_pair: TypePair,
    pub observations: u64,
    pub statistic: f64,
    pub df: usize,
    /// Only symbols with observed > expected and component above the cutoff.
    pub cells: Vec<ChiSquaredCell>,
}

/// Test every non-self pair against the baseline and keep the ones that
/// clear the thresholds, ordered by descending statistic.
pub fn significant_pairs(
    summary: &RelationSummary,
    thresholds: SignificanceThresholds,
) -> Vec<SignificantPair> {
    let baseline = overall_distribution(summary);
    let mut reported = Vec::new();

    for (type_pair, relations) in &summary.pairs {
        if type_pair.0 == type_pair.1 {
            continue;
        }
        let observations = relations.observations();
        if observations < thresholds.min_observations {
            continue;
        }
        let mut dist = Distribution::new(format!("{}-{}", type_pair.0, type_pair.1));
        for (symbol, &count) in &relations.counts {
            dist.add(symbol, count);
        }
        dist.finish();

        let (statistic, cells) = dist.chi_squared(&baseline);
        if statistic < thresholds.min_statistic {
            continue;
        }
        let cells: Vec<ChiSquaredCell> = cells
            .into_iter()
            .filter(|c| {
                (c.observed as f64) > c.expected && c.component() > thresholds.min_component
            })
            .collect();
        reported.push(SignificantPair {
            type_pair: type_pair.clone(),
            observations,
            statistic,
            df: baseline.df,
            cells,
        });
    }
    reported.sort_by(|a, b| b.statistic.total_cmp(&a.statistic));
    reported
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Baseline A:50%, B:25%, C:25% over a 50-observation sample A:30/B:10/C:10.
    fn known_distributions() -> (Distribution, Distribution) {
        let mut baseline = Distribution::new("baseline");
        baseline.add("A", 100);
        baseline.add("B", 50);
        baseline.add("C", 50);
        baseline.finish();

        let mut sample = Distribution::new("sample");
        sample.add("A", 30);
        sample.add("B", 10);
        sample.add("C", 10);
        sample.finish();
        (sample, baseline)
    }

    #[test]
    fn test_finish_derives_probabilities() {
        let (sample, baseline) = known_distributions();
        assert_eq!(sample.observations, 50);
        assert_eq!(baseline.probability("A"), 0.5);
        assert_eq!(baseline.probability("B"), 0.25);
        assert_eq!(sample.df, 2);
    }

    #[test]
    fn test_chi_squared_known_values() {
        let (sample, baseline) = known_distributions();
        let (statistic, cells) = sample.chi_squared(&baseline);

        // expected: A = 0.5*50 = 25, B = C = 0.25*50 = 12.5
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].expected, 25.0);
        assert_eq!(cells[1].expected, 12.5);

        // components: (30-25)²/25 = 1.0, (10-12.5)²/12.5 = 0.5 each
        assert!((cells[0].component() - 1.0).abs() < 1e-12);
        assert!((statistic - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_expected_cell_is_skipped() {
        let mut baseline = Distribution::new("baseline");
        baseline.add("A", 10);
        baseline.add("B", 0); // zero-count category: probability 0
        baseline.finish();

        let mut sample = Distribution::new("sample");
        sample.add("A", 5);
        sample.add("B", 5);
        sample.finish();

        let (statistic, cells) = sample.chi_squared(&baseline);
        assert_eq!(cells.len(), 1);
        assert!(statistic.is_finite());
    }

    #[test]
    fn test_missing_category_counts_zero() {
        let (_, baseline) = known_distributions();
        let mut sample = Distribution::new("sample");
        sample.add("A", 10);
        sample.finish();
        let (_, cells) = sample.chi_squared(&baseline);
        let b_cell = cells.iter().find(|c| c.category == "B").unwrap();
        assert_eq!(b_cell.observed, 0);
    }

    fn summary_with(pairs: &[(&str, &str, &str, u64)]) -> RelationSummary {
        let mut summary = RelationSummary::default();
        for &(a, b, symbol, count) in pairs {
            let rel = summary
                .pairs
                .entry((a.to_string(), b.to_string()))
                .or_default();
            for _ in 0..count {
                rel.add(symbol, SynsetId(1), SynsetId(2));
            }
        }
        summary
    }

    #[test]
    fn test_overall_distribution_sums_pairs() {
        let summary = summary_with(&[
            ("hum", "act", "#m", 3),
            ("art", "act", "#m", 2),
            ("art", "act", "=", 5),
        ]);
        let baseline = overall_distribution(&summary);
        assert_eq!(baseline.count("#m"), 5);
        assert_eq!(baseline.count("="), 5);
        assert_eq!(baseline.observations, 10);
    }

    #[test]
    fn test_self_pairs_are_not_tested() {
        let summary = summary_with(&[("hum", "hum", "#m", 1000)]);
        let reported = significant_pairs(&summary, SignificanceThresholds::default());
        assert!(reported.is_empty());
        // but the raw summary keeps them
        assert!(summary.pairs.contains_key(&("hum".to_string(), "hum".to_string())));
    }

    #[test]
    fn test_thresholds_gate_reporting() {
        // grs/act heavily skewed toward #m; atr/sta tracks the baseline mix
        let summary = summary_with(&[
            ("grs", "act", "#m", 400),
            ("atr", "sta", "=", 7500),
            ("atr", "sta", "#m", 2500),
            ("pos", "act", "=", 10), // below min_observations
        ]);
        let reported = significant_pairs(&summary, SignificanceThresholds::default());
        assert_eq!(reported.len(), 1);
        let pair = &reported[0];
        assert_eq!(pair.type_pair, ("grs".to_string(), "act".to_string()));
        assert_eq!(pair.observations, 400);
        // the over-represented symbol survives the component cutoff
        assert_eq!(pair.cells.len(), 1);
        assert_eq!(pair.cells[0].category, "#m");
        assert!(pair.cells[0].observed as f64 > pair.cells[0].expected);
    }

    #[test]
    fn test_thresholds_are_configurable() {
        let summary = summary_with(&[("grs", "act", "#m", 15), ("atr", "sta", "=", 100)]);
        let strict = significant_pairs(&summary, SignificanceThresholds::default());
        assert!(strict.is_empty());

        let lax = SignificanceThresholds {
            min_observations: 10,
            min_statistic: 50.0,
            min_component: 1.0,
        };
        assert_eq!(significant_pairs(&summary, lax).len(), 1);
    }
}
