//! # Vocabulary
//!
//! This module provides the per-language symbol vocabulary.
//!
//! ## Symbol Table
//!
//! Every vocabulary is an ordered symbol sequence: the four special symbols
//! (``<PAD>``, ``<SOW>``, ``<EOW>``, ``<UNK>``, ids 0-3), then the alphabet
//! in declared order. This is provided by:
//! * [`SymbolTable`].
//!
//! ## Charset Vocabulary
//!
//! The primary user-oriented vocabulary is [`CharsetVocab`], which contains:
//! * `table` - a [`SymbolTable`],
//! * `features` - a [`FeatureSchema`] of named boolean attributes,
//! * `normalizer` - an optional [`Normalizer`] policy for `process`.

pub mod charset_vocab;
pub mod features;
pub mod normalize;
pub mod specials;
pub mod symbol_table;

#[doc(inline)]
pub use charset_vocab::CharsetVocab;
#[doc(inline)]
pub use features::{CharAnnotation, FeatureSchema};
#[doc(inline)]
pub use normalize::{NormalizeStep, Normalizer};
#[doc(inline)]
pub use specials::SpecialSymbol;
#[doc(inline)]
pub use symbol_table::SymbolTable;
