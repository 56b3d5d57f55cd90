//! # Lexical Graph Model
//!
//! Clean DTOs for the WordNet-derived lexical graph.
//! These types cross every boundary: records ↔ graph ↔ propagation ↔ export.
//!
//! Design rule: NO file formats, NO I/O, NO statistics here.
//! This module is pure data.

pub mod category;
pub mod pointer;
pub mod synset;
pub mod typeset;

pub use category::{Category, WnVersion};
pub use pointer::{symbols, Pointer};
pub use synset::{Synset, SynsetId, WordSense};
pub use typeset::{TypeId, TypeRegistry, TypeSet};
