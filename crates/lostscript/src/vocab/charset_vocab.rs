//! # Charset Vocabulary

use crate::{
    decoders::{BatchTokenDecoder, DetokenizeOptions},
    errors::{LSResult, LostScriptError},
    nested::Nested,
    types::TokenType,
    vocab::{
        SymbolTable,
        features::{CharAnnotation, FeatureSchema},
        normalize::Normalizer,
        specials::SpecialSymbol,
    },
};

/// Convert a table id into the caller's token type.
pub(crate) fn id_to_token<T: TokenType>(id: usize) -> LSResult<T> {
    T::from_usize(id).ok_or_else(|| {
        LostScriptError::UnsupportedType(format!(
            "symbol id {id} exceeds the capacity of the token type"
        ))
    })
}

/// The symbol vocabulary of one language.
///
/// Owns the [`SymbolTable`], the [`FeatureSchema`], and the optional
/// [`Normalizer`] policy used by [`CharsetVocab::process`].
/// Immutable once built; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct CharsetVocab {
    lang: String,
    table: SymbolTable,
    features: FeatureSchema,
    normalizer: Option<Normalizer>,
}

impl CharsetVocab {
    /// Create a vocabulary with no features and no normalization policy.
    pub fn new(
        lang: impl Into<String>,
        table: SymbolTable,
    ) -> Self {
        Self {
            lang: lang.into(),
            table,
            features: FeatureSchema::default(),
            normalizer: None,
        }
    }

    /// Create a vocabulary from a literal alphabet, one symbol per char.
    pub fn from_alphabet(
        lang: impl Into<String>,
        alphabet: &str,
    ) -> LSResult<Self> {
        Ok(Self::new(lang, SymbolTable::from_alphabet(alphabet)?))
    }

    /// Replace the feature schema.
    pub fn with_features(
        self,
        features: FeatureSchema,
    ) -> Self {
        Self { features, ..self }
    }

    /// Replace the normalization policy.
    pub fn with_normalizer(
        self,
        normalizer: Option<Normalizer>,
    ) -> Self {
        Self { normalizer, ..self }
    }

    /// The language identifier.
    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// The symbol table.
    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Total symbol count: 4 specials plus the alphabet.
    pub fn size(&self) -> usize {
        self.table.len()
    }

    /// The feature schema used to pre-populate [`CharAnnotation`]s.
    pub fn feature_schema(&self) -> &FeatureSchema {
        &self.features
    }

    /// The normalization policy, if any.
    pub fn normalizer(&self) -> Option<&Normalizer> {
        self.normalizer.as_ref()
    }

    /// Encode a single leaf.
    ///
    /// A leaf is either a symbol of this vocabulary or a single char;
    /// a single char outside the vocabulary maps to the Unknown id.
    ///
    /// ## Returns
    /// * `Ok(id)` - on success.
    /// * `Err(LostScriptError::UnsupportedType)` - if the leaf is neither.
    pub fn encode_leaf<T: TokenType>(
        &self,
        leaf: &str,
    ) -> LSResult<T> {
        if let Some(id) = self.table.lookup_id(leaf) {
            return id_to_token(id);
        }
        let mut chars = leaf.chars();
        match (chars.next(), chars.next()) {
            (Some(_), None) => id_to_token(self.table.id_or_unknown(leaf)),
            _ => Err(LostScriptError::UnsupportedType(format!(
                "leaf {leaf:?} is not a single grapheme"
            ))),
        }
    }

    /// Encode a leaf or an arbitrarily nested structure of leaves.
    ///
    /// The result has exactly the shape of `value`.
    pub fn encode<T, S>(
        &self,
        value: &Nested<S>,
    ) -> LSResult<Nested<T>>
    where
        T: TokenType,
        S: AsRef<str>,
    {
        value.try_map(|leaf| self.encode_leaf(leaf.as_ref()))
    }

    /// Encode a raw word, splitting it into symbols by longest match.
    pub fn encode_word<T: TokenType>(
        &self,
        word: &str,
    ) -> LSResult<Vec<T>> {
        self.table
            .segment(word)
            .into_iter()
            .map(id_to_token)
            .collect()
    }

    /// Encode a raw word framed by ``<SOW> ... <EOW>``.
    pub fn encode_framed_word<T: TokenType>(
        &self,
        word: &str,
    ) -> LSResult<Vec<T>> {
        let mut ids = Vec::with_capacity(word.len() + 2);
        ids.push(SpecialSymbol::StartOfWord.token());
        ids.extend(self.encode_word::<T>(word)?);
        ids.push(SpecialSymbol::EndOfWord.token());
        Ok(ids)
    }

    /// Decode a single id.
    ///
    /// ## Returns
    /// * `Ok(symbol)` - on success.
    /// * `Err(LostScriptError::IndexOutOfRange)` - if `id` is not in ``[0, size)``.
    pub fn decode_id<T: TokenType>(
        &self,
        id: T,
    ) -> LSResult<&str> {
        id.to_usize()
            .and_then(|idx| self.table.lookup_symbol(idx))
            .ok_or_else(|| LostScriptError::IndexOutOfRange {
                id: id.to_u128().unwrap_or(u128::MAX),
                size: self.size(),
            })
    }

    /// Decode an id or an arbitrarily nested structure of ids.
    ///
    /// The result has exactly the shape of `value`.
    pub fn decode<T: TokenType>(
        &self,
        value: &Nested<T>,
    ) -> LSResult<Nested<String>> {
        value.try_map(|&id| self.decode_id(id).map(str::to_string))
    }

    /// A batch decoder over this vocabulary with default options.
    pub fn batch_decoder(&self) -> BatchTokenDecoder<'_> {
        BatchTokenDecoder::new(self)
    }

    /// A batch decoder over this vocabulary.
    pub fn batch_decoder_with(
        &self,
        options: DetokenizeOptions,
    ) -> BatchTokenDecoder<'_> {
        BatchTokenDecoder::new(self).with_options(options)
    }

    /// Reconstruct one token from an id sequence.
    ///
    /// See [`BatchTokenDecoder::decode_row`].
    pub fn detokenize_row<T: TokenType>(
        &self,
        ids: &[T],
    ) -> LSResult<String> {
        self.batch_decoder().decode_row(ids)
    }

    /// Reconstruct tokens from a rank 2 or rank 3 id grid.
    ///
    /// The result is exactly one rank lower than `ids`.
    /// See [`BatchTokenDecoder::decode`].
    pub fn detokenize<T: TokenType>(
        &self,
        ids: &Nested<T>,
    ) -> LSResult<Nested<String>> {
        self.batch_decoder().decode(ids)
    }

    /// Reconstruct one token per row.
    pub fn detokenize_rows<T, R>(
        &self,
        rows: &[R],
    ) -> LSResult<Vec<String>>
    where
        T: TokenType,
        R: AsRef<[T]> + Sync,
    {
        self.batch_decoder().decode_rows(rows)
    }

    /// Reconstruct tokens for a batch of row sets.
    pub fn detokenize_batches<T, R>(
        &self,
        batches: &[Vec<R>],
    ) -> LSResult<Vec<Vec<String>>>
    where
        T: TokenType,
        R: AsRef<[T]> + Sync,
    {
        self.batch_decoder().decode_batches(batches)
    }

    /// Normalize `word` into one [`CharAnnotation`] per char.
    ///
    /// ## Returns
    /// * `Ok(annotations)` - on success.
    /// * `Err(LostScriptError::NotImplemented)` - if this vocabulary has no policy.
    /// * `Err(LostScriptError::Unnormalizable)` - if the policy cannot resolve a char.
    pub fn process(
        &self,
        word: &str,
    ) -> LSResult<Vec<CharAnnotation>> {
        match &self.normalizer {
            Some(normalizer) => {
                normalizer.normalize_word(&self.lang, &self.table, &self.features, word)
            }
            None => Err(LostScriptError::NotImplemented {
                lang: self.lang.clone(),
                op: "process",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{
        features::CAPITALIZATION,
        specials::{PAD, UNK, UNK_ID},
    };

    fn abc() -> CharsetVocab {
        CharsetVocab::from_alphabet("test", "abc").unwrap()
    }

    #[test]
    fn test_end_to_end() {
        let vocab = abc();
        assert_eq!(vocab.size(), 7);
        assert_eq!(vocab.encode_leaf::<u32>("a").unwrap(), 4);
        assert_eq!(vocab.encode_leaf::<u32>("z").unwrap(), 3);
        assert_eq!(vocab.decode_id(4u32).unwrap(), "a");
        assert_eq!(
            vocab
                .detokenize(&Nested::from_rows(vec![vec![1u32, 4, 5, 6, 2, 4]]))
                .unwrap(),
            Nested::from_leaves(vec!["abc".to_string()])
        );
    }

    #[test]
    fn test_round_trip() {
        let vocab = abc();
        for symbol in vocab.table().symbols() {
            let id: u16 = vocab.encode_leaf(symbol).unwrap();
            assert_eq!(vocab.decode_id(id).unwrap(), symbol);
        }
    }

    #[test]
    fn test_unknown_stability() {
        let vocab = abc();
        let id: u8 = vocab.encode_leaf("\u{10000}").unwrap();
        assert_eq!(id as usize, UNK_ID);
        assert_eq!(vocab.decode_id(id).unwrap(), UNK);
    }

    #[test]
    fn test_encode_nested() {
        let vocab = abc();
        let words = Nested::from_batches(vec![
            vec![vec!["a", "b"], vec!["c", "x"]],
            vec![vec![PAD, "a"], vec![]],
        ]);
        let ids: Nested<u32> = vocab.encode(&words).unwrap();
        assert_eq!(
            ids,
            Nested::from_batches(vec![vec![vec![4, 5], vec![6, 3]], vec![vec![0, 4], vec![]]])
        );

        let back = vocab.decode(&ids).unwrap();
        assert_eq!(
            back,
            Nested::from_batches(vec![
                vec![vec!["a", "b"], vec!["c", UNK]],
                vec![vec![PAD, "a"], vec![]],
            ])
            .map(|s| s.to_string())
        );
    }

    #[test]
    fn test_encode_rejects_multi_char_leaf() {
        let vocab = abc();
        assert!(matches!(
            vocab.encode::<u32, _>(&Nested::from_leaves(vec!["a", "ab"])),
            Err(LostScriptError::UnsupportedType(_))
        ));
        assert!(matches!(
            vocab.encode_leaf::<u32>(""),
            Err(LostScriptError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_decode_out_of_range() {
        let vocab = abc();
        assert!(matches!(
            vocab.decode_id(7u32),
            Err(LostScriptError::IndexOutOfRange { id: 7, size: 7 })
        ));
        assert!(matches!(
            vocab.decode(&Nested::from_rows(vec![vec![4u64, 5], vec![u64::MAX]])),
            Err(LostScriptError::IndexOutOfRange { size: 7, .. })
        ));
    }

    #[test]
    fn test_token_type_capacity() {
        let alphabet: String = ('\u{100}'..'\u{300}').collect();
        let vocab = CharsetVocab::from_alphabet("wide", &alphabet).unwrap();
        assert!(vocab.encode_leaf::<u8>("\u{2ff}").is_err());
        assert_eq!(vocab.encode_leaf::<u16>("\u{2ff}").unwrap(), 4 + 0x1ff);
    }

    #[test]
    fn test_framed_word_round_trip() {
        let vocab = abc();
        for word in ["", "a", "cab", "abcabc"] {
            let ids = vocab.encode_framed_word::<u16>(word).unwrap();
            assert_eq!(vocab.detokenize_row(&ids).unwrap(), word);
        }
        assert_eq!(
            vocab
                .detokenize_rows(&[vec![1u32, 4, 5, 2, 4], vec![4, 1, 5, 2]])
                .unwrap(),
            vec!["ab", "a|b"]
        );
    }

    #[test]
    fn test_encode_word() {
        let vocab = abc();
        assert_eq!(vocab.encode_word::<u32>("cab?").unwrap(), vec![6, 4, 5, 3]);
        assert_eq!(
            vocab.encode_framed_word::<u32>("ba").unwrap(),
            vec![1, 5, 4, 2]
        );
    }

    #[test]
    fn test_process_requires_policy() {
        let vocab = abc();
        assert!(matches!(
            vocab.process("abc"),
            Err(LostScriptError::NotImplemented { op: "process", .. })
        ));

        let vocab = abc()
            .with_features(FeatureSchema::new([CAPITALIZATION]))
            .with_normalizer(Some(Normalizer::case_only()));
        let anns = vocab.process("A").unwrap();
        assert_eq!(anns.len(), 1);
        assert_eq!(anns[0].grapheme(), "a");
        assert!(anns[0].flag(CAPITALIZATION));

        let anns = vocab.process("Z").unwrap();
        assert_eq!(anns[0].grapheme(), "");
        assert!(!anns[0].flag(CAPITALIZATION));
    }
}
