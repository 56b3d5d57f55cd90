//! Sense-index records: version-independent sense keys.

use tracing::warn;

use crate::model::SynsetId;

/// One line of the sense-index file:
/// `lemma%sense_key synset_offset sense_number tag_count`.
///
/// The sense key survives across lexicon versions while the synset offset
/// does not, which is what makes these records useful for cross-version
/// auditing ("missing sense keys" reporting).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenseRecord {
    pub lemma: String,
    /// The full key including the lemma, e.g. `entity%1:03:00::`.
    pub sense_key: String,
    pub synset: SynsetId,
    pub sense_number: u32,
    /// Frequency of the sense in the tagged corpus the distribution ships.
    pub tag_count: u32,
}

impl SenseRecord {
    pub fn parse(line: &str) -> Option<SenseRecord> {
        let mut fields = line.split_whitespace();
        let sense_key = fields.next()?.to_string();
        let Some((lemma, _)) = sense_key.split_once('%') else {
            warn!(sense_key, "sense record without % separator");
            return None;
        };
        let lemma = lemma.to_string();
        let synset = match fields.next().and_then(SynsetId::parse) {
            Some(id) => id,
            None => {
                warn!(sense_key, "sense record with unusable synset offset");
                return None;
            }
        };
        let sense_number = fields.next().and_then(|f| f.parse().ok()).unwrap_or_else(|| {
            warn!(sense_key, "sense record without sense number");
            0
        });
        let tag_count = fields.next().and_then(|f| f.parse().ok()).unwrap_or(0);
        Some(SenseRecord {
            lemma,
            sense_key,
            synset,
            sense_number,
            tag_count,
        })
    }
}
