//! # Symbol Table
//!
//! The ordered ``id <-> symbol`` bijection behind a vocabulary:
//! the four special symbols, then the alphabet in declared order.

use crate::{
    errors::{LSResult, LostScriptError},
    types::CSHashMap,
    vocab::specials::{NUM_SPECIALS, SpecialSymbol, UNK_ID},
};

/// Immutable ``id <-> symbol`` table.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable {
    /// Symbols by id; specials first.
    id_to_symbol: Vec<String>,

    /// Ids by symbol.
    symbol_to_id: CSHashMap<String, usize>,

    /// The longest symbol, in chars.
    max_symbol_chars: usize,
}

impl SymbolTable {
    /// Build a table whose alphabet is every char of `alphabet`, in order.
    ///
    /// ## Returns
    /// * `Ok(table)` - on success.
    /// * `Err(LostScriptError::VocabConflict)` - if a char repeats.
    pub fn from_alphabet(alphabet: &str) -> LSResult<Self> {
        Self::from_symbols(alphabet.chars().map(String::from))
    }

    /// Build a table from an ordered list of grapheme symbols.
    ///
    /// ## Returns
    /// * `Ok(table)` - on success.
    /// * `Err(LostScriptError::VocabConflict)` - if a symbol is empty,
    ///   repeats, or collides with a special literal.
    pub fn from_symbols<I, S>(symbols: I) -> LSResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let specials = [
            SpecialSymbol::Padding,
            SpecialSymbol::StartOfWord,
            SpecialSymbol::EndOfWord,
            SpecialSymbol::Unknown,
        ];

        let mut id_to_symbol: Vec<String> =
            specials.iter().map(|s| s.literal().to_string()).collect();
        let mut symbol_to_id: CSHashMap<String, usize> = id_to_symbol
            .iter()
            .enumerate()
            .map(|(id, s)| (s.clone(), id))
            .collect();
        let mut max_symbol_chars = 1;

        for symbol in symbols {
            let symbol = symbol.as_ref();
            if symbol.is_empty() {
                return Err(LostScriptError::VocabConflict(
                    "alphabet contains an empty symbol".to_string(),
                ));
            }
            if let Some(prev) = symbol_to_id.get(symbol) {
                return Err(LostScriptError::VocabConflict(format!(
                    "symbol {symbol:?} repeats id {prev}"
                )));
            }
            let id = id_to_symbol.len();
            symbol_to_id.insert(symbol.to_string(), id);
            id_to_symbol.push(symbol.to_string());
            max_symbol_chars = max_symbol_chars.max(symbol.chars().count());
        }
        symbol_to_id.shrink_to_fit();

        Ok(Self {
            id_to_symbol,
            symbol_to_id,
            max_symbol_chars,
        })
    }

    /// Total symbol count, specials included.
    pub fn len(&self) -> usize {
        self.id_to_symbol.len()
    }

    /// Is the alphabet empty? (The specials are always present.)
    pub fn is_empty(&self) -> bool {
        self.id_to_symbol.len() == NUM_SPECIALS
    }

    /// All symbols, by id.
    pub fn symbols(&self) -> &[String] {
        &self.id_to_symbol
    }

    /// The alphabet symbols, in declared order.
    pub fn alphabet(&self) -> &[String] {
        &self.id_to_symbol[NUM_SPECIALS..]
    }

    /// Is `symbol` in the table?
    pub fn contains(
        &self,
        symbol: &str,
    ) -> bool {
        self.symbol_to_id.contains_key(symbol)
    }

    /// The id of `symbol`, if present.
    pub fn lookup_id(
        &self,
        symbol: &str,
    ) -> Option<usize> {
        self.symbol_to_id.get(symbol).copied()
    }

    /// The id of `symbol`, or the Unknown id.
    pub fn id_or_unknown(
        &self,
        symbol: &str,
    ) -> usize {
        self.lookup_id(symbol).unwrap_or(UNK_ID)
    }

    /// The symbol for `id`, if in range.
    pub fn lookup_symbol(
        &self,
        id: usize,
    ) -> Option<&str> {
        self.id_to_symbol.get(id).map(String::as_str)
    }

    /// Split `word` into symbol ids by greedy longest match.
    ///
    /// Characters that start no symbol map to the Unknown id, one per char.
    pub fn segment(
        &self,
        word: &str,
    ) -> Vec<usize> {
        let bounds: Vec<usize> = word
            .char_indices()
            .map(|(i, _)| i)
            .chain(core::iter::once(word.len()))
            .collect();
        let num_chars = bounds.len() - 1;

        let mut ids = Vec::with_capacity(num_chars);
        let mut pos = 0;
        while pos < num_chars {
            let longest = self.max_symbol_chars.min(num_chars - pos);
            let found = (1..=longest).rev().find_map(|width| {
                self.lookup_id(&word[bounds[pos]..bounds[pos + width]])
                    .map(|id| (id, width))
            });
            match found {
                Some((id, width)) => {
                    ids.push(id);
                    pos += width;
                }
                None => {
                    ids.push(UNK_ID);
                    pos += 1;
                }
            }
        }
        ids
    }
}
