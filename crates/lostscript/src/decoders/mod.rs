//! # Token Decoders
//!
//! Decoder clients should use:
//!
//! * [`BatchTokenDecoder`] - rank-aware detokenization of id grids.
//! * [`DetokenizeOptions`] - placeholder and parallelism configuration.
//!
//! ## Example
//!
//! ```rust
//! use lostscript::decoders::DetokenizeOptions;
//! use lostscript::nested::Nested;
//! use lostscript::vocab::CharsetVocab;
//!
//! let vocab = CharsetVocab::from_alphabet("demo", "abc").unwrap();
//! let decoder = DetokenizeOptions::default()
//!     .with_parallel(true)
//!     .build(&vocab);
//!
//! let grid = Nested::from_rows(vec![vec![1u32, 4, 5, 2, 0], vec![4, 1, 5, 2, 0]]);
//! let tokens = decoder.decode(&grid).unwrap();
//! assert_eq!(tokens, Nested::from_leaves(vec!["ab".to_string(), "a|b".to_string()]));
//! ```

pub mod batch_decoder;
pub mod detokenize_options;

#[doc(inline)]
pub use batch_decoder::{BatchTokenDecoder, GridRank};
#[doc(inline)]
pub use detokenize_options::DetokenizeOptions;
