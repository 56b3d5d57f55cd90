//! Index-file records: one line per lemma.

use tracing::warn;

use crate::model::SynsetId;

/// One lemma with the synsets it participates in, in sense order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRecord {
    pub lemma: String,
    pub synsets: Vec<SynsetId>,
}

impl IndexRecord {
    /// Parse one index line: the lemma string followed by version-dependent
    /// numeric fields and a trailing run of fixed-width synset identifiers.
    ///
    /// The 1.5 and 3.1 layouts put the synset count in different positions,
    /// so the ids are recognized by shape (8-digit runs) rather than by
    /// field offset.
    pub fn parse(line: &str) -> Option<IndexRecord> {
        let mut fields = line.split_whitespace();
        let lemma = fields.next()?.to_string();
        let synsets: Vec<SynsetId> = fields.filter_map(SynsetId::parse).collect();
        if synsets.is_empty() {
            warn!(lemma = %lemma, "index record without synset identifiers");
        }
        Some(IndexRecord { lemma, synsets })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_31_layout() {
        // index.noun: lemma pos synset_cnt p_cnt [symbols] sense_cnt tagsense_cnt offsets
        let line = "entity n 1 1 ~ 1 0 00001740";
        // runt guard lives in is_record_line; parse itself is layout-robust
        let rec = IndexRecord::parse(line).unwrap();
        assert_eq!(rec.lemma, "entity");
        assert_eq!(rec.synsets, vec![SynsetId(1740)]);
    }

    #[test]
    fn test_parse_multiple_senses() {
        let line = "case n 20 6 @ ~ #m %p + ; 20 14 02991048 06507119 08404735 05842950";
        let rec = IndexRecord::parse(line).unwrap();
        assert_eq!(rec.lemma, "case");
        assert_eq!(
            rec.synsets,
            vec![
                SynsetId(2991048),
                SynsetId(6507119),
                SynsetId(8404735),
                SynsetId(5842950)
            ]
        );
    }

    #[test]
    fn test_small_counts_are_not_ids() {
        // none of the short numeric fields may be mistaken for an id
        let line = "abandonment n 3 4 @ ~ + ; 3 1 01230810 00207728 00213052";
        let rec = IndexRecord::parse(line).unwrap();
        assert_eq!(rec.synsets.len(), 3);
    }
}
