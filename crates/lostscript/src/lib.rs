//! # `lostscript` Charset Toolkit
//!
//! Character vocabularies and batch tokenization for decipherment of lost
//! languages.
//!
//! See:
//! * [`vocab`] for per-language symbol vocabularies and normalization.
//! * [`decoders`] to turn padded model id grids back into tokens.
//! * [`registry`] for the process-wide, lazily built charset singletons.
//! * [`charsets`] for the builtin language declarations.
//! * [`nested`] for the shape-preserving structures passed in and out.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``json``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``.
//!
//! This is done by the ``types::CSHash{Map,Set}`` type alias machinery.
//!
//! #### feature: ``json``
//!
//! Conversions between ``serde_json`` values and [`nested::Nested`].
//!
//! #### feature: ``rayon``
//!
//! Parallel row decoding, requested through
//! [`decoders::DetokenizeOptions::with_parallel`].
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//!
//! ## Example
//!
//! ```rust
//! use lostscript::{get_charset, nested::Nested};
//!
//! let en = get_charset("en").unwrap();
//!
//! let ids: Nested<u32> = en.encode(&Nested::from_leaves(["c", "a", "t"])).unwrap();
//! assert_eq!(ids, Nested::from_leaves([6, 4, 23]));
//!
//! let grid = Nested::from_rows([[1u32, 6, 4, 23, 2, 0]]);
//! assert_eq!(en.detokenize(&grid).unwrap(), Nested::from_leaves(["cat".to_string()]));
//! ```
#![warn(missing_docs, unused)]

pub mod charsets;
pub mod decoders;
pub mod errors;
pub mod nested;
pub mod registry;
pub mod types;
pub mod vocab;

#[cfg(feature = "json")]
pub mod json;

#[doc(inline)]
pub use errors::{LSResult, LostScriptError};
#[doc(inline)]
pub use nested::Nested;
#[doc(inline)]
pub use registry::{CharsetRegistry, get_charset, global_registry, list_charsets, register_charset};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::CharsetVocab;
