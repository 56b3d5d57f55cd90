//! Data-file records: one line per synset.

use smallvec::SmallVec;
use tracing::warn;

use crate::model::{SynsetId, WordSense};

/// A pointer tuple as it appears in a data record: symbol, target offset,
/// part-of-speech tag, and the 4-hex-digit source/target word field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerRecord {
    pub symbol: String,
    pub target: SynsetId,
    pub pos: char,
    pub source_word: u8,
    pub target_word: u8,
}

/// One fully-parsed synset data record.
///
/// `w_cnt`/`p_cnt` keep the *declared* counts even when fewer items could be
/// parsed; the discrepancy is observable for data-quality auditing.
#[derive(Debug, Clone, PartialEq)]
pub struct DataRecord {
    pub id: SynsetId,
    pub lex_filenum: u8,
    pub ss_type: char,
    pub w_cnt: usize,
    pub words: SmallVec<[WordSense; 4]>,
    pub p_cnt: usize,
    pub pointers: Vec<PointerRecord>,
    /// Verb frame pairs `(frame number, word number)`; empty for nouns.
    pub frames: Vec<(u8, u8)>,
    pub gloss: Option<String>,
}

impl DataRecord {
    /// Parse one data line:
    /// `offset lex_filenum ss_type w_cnt (word lex_id)* p_cnt (ptr)* [frames] [| gloss]`.
    ///
    /// Count mismatches warn and keep the partial record; only a line whose
    /// header fields are unusable is dropped entirely (also with a warning).
    pub fn parse(line: &str) -> Option<DataRecord> {
        let (fields_part, gloss) = match line.split_once('|') {
            Some((fields, gloss)) => (fields, Some(gloss.trim().to_string())),
            None => (line, None),
        };
        let mut fields = fields_part.split_whitespace().peekable();

        let id = match fields.next().and_then(SynsetId::parse) {
            Some(id) => id,
            None => {
                warn!(line, "data record with unusable synset offset");
                return None;
            }
        };
        let lex_filenum: u8 = match fields.next().and_then(|f| f.parse().ok()) {
            Some(n) => n,
            None => {
                warn!(%id, "data record with unusable lex_filenum");
                return None;
            }
        };
        let ss_type = match fields.next().and_then(|f| f.chars().next()) {
            Some(c) => c,
            None => {
                warn!(%id, "data record truncated before synset kind");
                return None;
            }
        };

        // w_cnt is a 2-digit hexadecimal field
        let w_cnt = match fields.next().and_then(|f| usize::from_str_radix(f, 16).ok()) {
            Some(n) => n,
            None => {
                warn!(%id, "data record with unusable word count");
                return None;
            }
        };
        let mut words = SmallVec::new();
        for _ in 0..w_cnt {
            let (Some(form), Some(lex)) = (fields.next(), fields.next()) else {
                break;
            };
            let lex_id = u8::from_str_radix(lex, 16).unwrap_or_else(|_| {
                warn!(%id, lex, "word sense with non-hex lex_id");
                0
            });
            words.push(WordSense { form: form.to_string(), lex_id });
        }
        if words.len() != w_cnt {
            warn!(%id, declared = w_cnt, parsed = words.len(), "word count mismatch");
        }

        // p_cnt is a 3-digit decimal field
        let p_cnt = match fields.next().and_then(|f| f.parse::<usize>().ok()) {
            Some(n) => n,
            None => {
                warn!(%id, "data record with unusable pointer count");
                return Some(DataRecord {
                    id,
                    lex_filenum,
                    ss_type,
                    w_cnt,
                    words,
                    p_cnt: 0,
                    pointers: Vec::new(),
                    frames: Vec::new(),
                    gloss,
                });
            }
        };
        let mut pointers = Vec::with_capacity(p_cnt);
        for _ in 0..p_cnt {
            let (Some(symbol), Some(target), Some(pos), Some(st)) =
                (fields.next(), fields.next(), fields.next(), fields.next())
            else {
                break;
            };
            let Some(target) = SynsetId::parse(target) else {
                warn!(%id, target, "pointer with unusable target offset");
                continue;
            };
            let (source_word, target_word) = parse_source_target(st);
            pointers.push(PointerRecord {
                symbol: symbol.to_string(),
                target,
                pos: pos.chars().next().unwrap_or('n'),
                source_word,
                target_word,
            });
        }
        if pointers.len() != p_cnt {
            warn!(%id, declared = p_cnt, parsed = pointers.len(), "pointer count mismatch");
        }

        // verb records append a frame block: f_cnt then '+ f_num w_num' triples
        let mut frames = Vec::new();
        if let Some(f_cnt) = fields.peek().and_then(|f| f.parse::<usize>().ok()) {
            fields.next();
            for _ in 0..f_cnt {
                let (Some(plus), Some(f_num), Some(w_num)) =
                    (fields.next(), fields.next(), fields.next())
                else {
                    break;
                };
                if plus != "+" {
                    warn!(%id, plus, "malformed verb frame marker");
                    break;
                }
                let f_num = f_num.parse().unwrap_or(0);
                let w_num = u8::from_str_radix(w_num, 16).unwrap_or(0);
                frames.push((f_num, w_num));
            }
        }
        let leftover: Vec<&str> = fields.collect();
        if !leftover.is_empty() {
            warn!(%id, ?leftover, "unparsed fields in data record");
        }

        Some(DataRecord {
            id,
            lex_filenum,
            ss_type,
            w_cnt,
            words,
            p_cnt,
            pointers,
            frames,
            gloss,
        })
    }
}

/// Split the 4-hex-digit source/target field into its two word numbers.
/// `0000` marks a semantic (synset-to-synset) pointer.
fn parse_source_target(field: &str) -> (u8, u8) {
    if field.len() == 4 {
        let source = u8::from_str_radix(&field[..2], 16).unwrap_or(0);
        let target = u8::from_str_radix(&field[2..], 16).unwrap_or(0);
        (source, target)
    } else {
        warn!(field, "source/target field is not 4 hex digits");
        (0, 0)
    }
}
