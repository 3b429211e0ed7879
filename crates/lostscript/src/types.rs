//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a symbol id.
///
/// These are constrained to be unsigned primitive integers;
/// models emit id grids in whatever width suits them, and
/// vocabularies accept any of them.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type CSHashMap<K, V> = ahash::AHashMap<K, V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type CSHashMap<K, V> = std::collections::HashMap<K, V>;

    }
}

/// Compile-time check that a value is `Send`.
pub fn check_is_send<S: Send>(_: S) {}

/// Compile-time check that a value is `Sync`.
pub fn check_is_sync<S: Sync>(_: S) {}
