//! Report writers — the data surface the external export collaborators
//! consume, serialized over any `Write`.
//!
//! ```text
//! Classification → write_tab()    → signature \t lemmas      (machine)
//!               → write_pretty()  → wrapped text blocks      (human)
//!               → sql_lemma_rows() → (lemma, corelex_type, signature)
//! RelationSummary → write_significance() → observed/expected/component
//! ```

use std::io::Write;

use crate::classify::Classification;
use crate::stats::{RelationSummary, SignificantPair};
use crate::types::{BasicTypeTable, CorelexTypeMap};
use crate::model::SynsetId;
use crate::Result;

/// Wrap width for the pretty writer, matching the reference output.
const WRAP_WIDTH: usize = 80;

/// One line per class: `signature<TAB>lemma lemma ...`, signatures sorted.
pub fn write_tab(classification: &Classification, writer: &mut dyn Write) -> Result<()> {
    for (signature, lemmas) in classification.classes() {
        writeln!(writer, "{}\t{}", signature, lemmas.join(" "))?;
    }
    Ok(())
}

/// Signature headings with an 80-column wrapped lemma block under each.
pub fn write_pretty(classification: &Classification, writer: &mut dyn Write) -> Result<()> {
    for (signature, lemmas) in classification.classes() {
        writeln!(writer, "{}\n", signature)?;
        for line in wrap(&lemmas.join(" "), WRAP_WIDTH, "  ") {
            writeln!(writer, "{}", line)?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Flattened `(lemma, corelex_type, polysemous_type)` rows. Signatures
/// outside the curated map render the type column as `-`.
pub fn sql_lemma_rows(
    classification: &Classification,
    map: &CorelexTypeMap,
) -> Vec<(String, String, String)> {
    let mut rows = Vec::new();
    for (signature, lemmas) in classification.classes() {
        let corelex_type = map.corelex_type(signature).unwrap_or("-");
        for lemma in lemmas {
            rows.push((
                lemma.clone(),
                corelex_type.to_string(),
                signature.to_string(),
            ));
        }
    }
    rows
}

/// Flattened `(basic_type, synset_id, synset_description)` rows from a seed
/// table.
pub fn sql_basic_type_rows(table: &BasicTypeTable) -> Vec<(String, SynsetId, String)> {
    let mut rows = Vec::new();
    for entry in &table.entries {
        for seed in &entry.seeds {
            rows.push((entry.name.clone(), seed.id, seed.description.clone()));
        }
    }
    rows
}

/// Per reported pair: the over-represented symbols with their figures, and
/// the synset pairs that realize each symbol.
pub fn write_significance(
    reported: &[SignificantPair],
    summary: &RelationSummary,
    writer: &mut dyn Write,
) -> Result<()> {
    for pair in reported {
        writeln!(
            writer,
            "{} - {}   observations={}   X2={:.2}   df={}",
            pair.type_pair.0, pair.type_pair.1, pair.observations, pair.statistic, pair.df
        )?;
        for cell in &pair.cells {
            writeln!(
                writer,
                "   [{:>3}   {:6}   {:7.2}   {:8.2}   {:8.2} ]",
                cell.category,
                cell.observed,
                cell.expected,
                cell.observed as f64 - cell.expected,
                cell.component()
            )?;
            if let Some(relations) = summary.pairs.get(&pair.type_pair) {
                if let Some(instances) = relations.instances.get(&cell.category) {
                    for (source, target) in instances {
                        writeln!(writer, "      {} -> {}", source, target)?;
                    }
                }
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Greedy word wrap with a fixed indent, enough for the report formats.
fn wrap(text: &str, width: usize, indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::from(indent);
    let mut empty = true;
    for word in text.split_whitespace() {
        if !empty && current.len() + 1 + word.len() > width {
            lines.push(std::mem::replace(&mut current, String::from(indent)));
            empty = true;
        }
        if !empty {
            current.push(' ');
        }
        current.push_str(word);
        empty = false;
    }
    if !empty {
        lines.push(current);
    }
    lines
}
