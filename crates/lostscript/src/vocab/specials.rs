//! # Special Symbols
//!
//! Every vocabulary begins with the same four sentinel symbols,
//! in the same order, so their ids are shared across languages.

use crate::types::TokenType;

/// Declare a special symbol literal and its fixed id.
macro_rules! declare_special {
    ($(($lit_name:ident, $id_name:ident, $value:literal, $id:literal)),* $(,)?) => {
        $(
            #[doc = concat!("Special symbol literal: ", $value)]
            pub const $lit_name: &str = $value;

            #[doc = concat!("Fixed id of ", $value, ".")]
            pub const $id_name: usize = $id;
        )*
    };
}

declare_special!(
    (PAD, PAD_ID, "<PAD>", 0),
    (SOW, SOW_ID, "<SOW>", 1),
    (EOW, EOW_ID, "<EOW>", 2),
    (UNK, UNK_ID, "<UNK>", 3),
);

/// The number of special symbols at the head of every vocabulary.
pub const NUM_SPECIALS: usize = 4;

/// Placeholder rendered for stray special symbols during detokenization.
pub const DEFAULT_PLACEHOLDER: char = '|';

/// The fixed sentinel symbols.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::Display,
    strum_macros::IntoStaticStr,
)]
pub enum SpecialSymbol {
    /// Batch padding.
    #[strum(serialize = "<PAD>")]
    Padding,

    /// Start of word.
    #[strum(serialize = "<SOW>")]
    StartOfWord,

    /// End of word; detokenization truncates here.
    #[strum(serialize = "<EOW>")]
    EndOfWord,

    /// Any symbol absent from the alphabet.
    #[strum(serialize = "<UNK>")]
    Unknown,
}

impl SpecialSymbol {
    /// The fixed id of this symbol.
    pub const fn id(self) -> usize {
        match self {
            SpecialSymbol::Padding => PAD_ID,
            SpecialSymbol::StartOfWord => SOW_ID,
            SpecialSymbol::EndOfWord => EOW_ID,
            SpecialSymbol::Unknown => UNK_ID,
        }
    }

    /// The fixed id of this symbol, as a token type.
    pub fn token<T: TokenType>(self) -> T {
        // ids 0..4 fit every unsigned type.
        T::from_usize(self.id()).unwrap_or_else(T::zero)
    }

    /// The literal of this symbol.
    pub fn literal(self) -> &'static str {
        self.into()
    }

    /// Look up the special symbol for an id, if it is one.
    pub fn from_id(id: usize) -> Option<Self> {
        match id {
            PAD_ID => Some(SpecialSymbol::Padding),
            SOW_ID => Some(SpecialSymbol::StartOfWord),
            EOW_ID => Some(SpecialSymbol::EndOfWord),
            UNK_ID => Some(SpecialSymbol::Unknown),
            _ => None,
        }
    }

    /// Look up the special symbol for a literal, if it is one.
    pub fn from_literal(literal: &str) -> Option<Self> {
        literal.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_special_order() {
        let ids: Vec<usize> = SpecialSymbol::iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
        assert_eq!(SpecialSymbol::iter().count(), NUM_SPECIALS);

        let literals: Vec<&str> = SpecialSymbol::iter().map(|s| s.literal()).collect();
        assert_eq!(literals, vec![PAD, SOW, EOW, UNK]);
    }

    #[test]
    fn test_special_lookup() {
        for sym in SpecialSymbol::iter() {
            assert_eq!(SpecialSymbol::from_id(sym.id()), Some(sym));
            assert_eq!(SpecialSymbol::from_literal(sym.literal()), Some(sym));
            assert_eq!(sym.to_string(), sym.literal());
        }
        assert_eq!(SpecialSymbol::from_id(4), None);
        assert_eq!(SpecialSymbol::from_literal("a"), None);

        assert_eq!(SpecialSymbol::Unknown.token::<u8>(), 3u8);
        assert_eq!(SpecialSymbol::EndOfWord.token::<u64>(), 2u64);
    }
}
