//! # Batch Token Decoder
//!
//! Turns padded id grids emitted by a model back into readable tokens.
//!
//! Each row is decoded in full, then scanned left to right:
//! * a ``<SOW>`` frame at the start of the row is dropped;
//! * the first ``<EOW>`` truncates the row;
//! * any other special symbol before it renders as the placeholder (``|``),
//!   so malformed rows stay visible.
//!
//! Rank 3 grids are flattened along their two leading dimensions,
//! decoded as rank 2, and reshaped back.

use crate::{
    decoders::DetokenizeOptions,
    errors::{LSResult, LostScriptError},
    nested::Nested,
    types::TokenType,
    vocab::{CharsetVocab, specials::SpecialSymbol},
};

/// The rank of an id grid accepted by [`BatchTokenDecoder::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridRank {
    /// A batch of id rows.
    Rank2,

    /// A batch of batches of id rows.
    Rank3,
}

impl GridRank {
    /// Detect the rank of `grid`.
    ///
    /// Rank is read from the depth of the first leaf. A grid with no leaves
    /// at all is ambiguous: ``[]`` and ``[[], []]`` both count as rank 2, so
    /// ``[[], []]`` yields two empty tokens rather than two empty row sets.
    /// Use [`BatchTokenDecoder::decode_with_rank`] to pin the rank instead.
    ///
    /// ## Returns
    /// * `Ok(rank)` - on success.
    /// * `Err(LostScriptError::UnsupportedType)` - for ragged depths, or ranks other than 2 and 3.
    pub fn detect<T>(grid: &Nested<T>) -> LSResult<Self> {
        if !grid.is_uniform() {
            return Err(LostScriptError::UnsupportedType(
                "id grid mixes leaves and sequences at one level".to_string(),
            ));
        }
        let rank = grid.leaf_depth().unwrap_or_else(|| grid.rank().max(2));
        match rank {
            2 => Ok(GridRank::Rank2),
            3 => Ok(GridRank::Rank3),
            _ => Err(LostScriptError::UnsupportedType(format!(
                "expected an id grid of rank 2 or 3, found rank {rank}"
            ))),
        }
    }
}

/// Rank-aware detokenizer over one [`CharsetVocab`].
#[derive(Debug, Clone, Copy)]
pub struct BatchTokenDecoder<'v> {
    vocab: &'v CharsetVocab,
    options: DetokenizeOptions,
}

impl<'v> BatchTokenDecoder<'v> {
    /// Create a decoder with default options.
    pub fn new(vocab: &'v CharsetVocab) -> Self {
        Self {
            vocab,
            options: DetokenizeOptions::default(),
        }
    }

    /// Replace the options.
    pub fn with_options(
        self,
        options: DetokenizeOptions,
    ) -> Self {
        Self { options, ..self }
    }

    /// The active options.
    pub fn options(&self) -> &DetokenizeOptions {
        &self.options
    }

    /// The vocabulary.
    pub fn vocab(&self) -> &'v CharsetVocab {
        self.vocab
    }

    /// Reconstruct one token from an id row.
    ///
    /// A leading ``<SOW>`` is dropped, decoding stops at the first ``<EOW>``,
    /// and any other special renders as the placeholder.
    /// Every id is validated, including those past the first ``<EOW>``.
    ///
    /// ## Returns
    /// * `Ok(token)` - on success.
    /// * `Err(LostScriptError::IndexOutOfRange)` - if any id is outside the vocabulary.
    pub fn decode_row<T: TokenType>(
        &self,
        ids: &[T],
    ) -> LSResult<String> {
        let symbols = ids
            .iter()
            .map(|&id| self.vocab.decode_id(id))
            .collect::<LSResult<Vec<&str>>>()?;

        let mut token = String::new();
        for (pos, (&id, symbol)) in ids.iter().zip(symbols).enumerate() {
            match id.to_usize().and_then(SpecialSymbol::from_id) {
                Some(SpecialSymbol::StartOfWord) if pos == 0 => continue,
                Some(SpecialSymbol::EndOfWord) => break,
                Some(_) => token.push(self.options.placeholder),
                None => token.push_str(symbol),
            }
        }
        Ok(token)
    }

    /// Reconstruct one token per row; output order matches row order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, rows)))]
    pub fn decode_rows<T, R>(
        &self,
        rows: &[R],
    ) -> LSResult<Vec<String>>
    where
        T: TokenType,
        R: AsRef<[T]> + Sync,
    {
        #[cfg(feature = "rayon")]
        if self.options.parallel {
            use rayon::prelude::*;

            return rows
                .par_iter()
                .map(|row| self.decode_row(row.as_ref()))
                .collect();
        }

        rows.iter().map(|row| self.decode_row(row.as_ref())).collect()
    }

    /// Reconstruct tokens for a batch of row sets.
    ///
    /// The two leading dimensions are flattened, decoded as one rank 2
    /// batch, and reshaped back; ragged inner lengths are preserved.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, batches)))]
    pub fn decode_batches<T, R>(
        &self,
        batches: &[Vec<R>],
    ) -> LSResult<Vec<Vec<String>>>
    where
        T: TokenType,
        R: AsRef<[T]> + Sync,
    {
        let lengths: Vec<usize> = batches.iter().map(Vec::len).collect();
        let flat: Vec<&[T]> = batches
            .iter()
            .flat_map(|rows| rows.iter().map(|row| row.as_ref()))
            .collect();
        log::trace!(
            "flattened {} row sets into {} rows",
            batches.len(),
            flat.len()
        );

        let mut tokens = self.decode_rows(&flat)?.into_iter();
        Ok(lengths
            .into_iter()
            .map(|len| tokens.by_ref().take(len).collect())
            .collect())
    }

    /// Reconstruct tokens from a rank 2 or rank 3 id grid.
    ///
    /// The output is exactly one rank lower than the input.
    ///
    /// ## Returns
    /// * `Ok(tokens)` - on success.
    /// * `Err(LostScriptError::UnsupportedType)` - if the grid is not rank 2 or 3.
    /// * `Err(LostScriptError::IndexOutOfRange)` - if any id is outside the vocabulary.
    pub fn decode<T: TokenType>(
        &self,
        grid: &Nested<T>,
    ) -> LSResult<Nested<String>> {
        self.decode_with_rank(grid, GridRank::detect(grid)?)
    }

    /// Reconstruct tokens from an id grid of a known rank.
    ///
    /// ## Returns
    /// * `Ok(tokens)` - on success.
    /// * `Err(LostScriptError::UnsupportedType)` - if the grid does not have `rank`.
    /// * `Err(LostScriptError::IndexOutOfRange)` - if any id is outside the vocabulary.
    pub fn decode_with_rank<T: TokenType>(
        &self,
        grid: &Nested<T>,
        rank: GridRank,
    ) -> LSResult<Nested<String>> {
        log::trace!("detokenizing {rank:?} grid of shape {:?}", grid.shape());

        match rank {
            GridRank::Rank2 => {
                let rows = grid.to_vec2()?;
                Ok(Nested::from_leaves(self.decode_rows(&rows)?))
            }
            GridRank::Rank3 => {
                let batches = grid.to_vec3()?;
                Ok(Nested::from_rows(self.decode_batches(&batches)?))
            }
        }
    }
}
