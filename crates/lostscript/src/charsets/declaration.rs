//! # Charset Declarations
//!
//! A [`CharsetDeclaration`] is the static, data-only description of one
//! language's vocabulary: its identifier, alphabet, feature schema and
//! normalization policy. Declarations are registered, not built;
//! the registry builds them on first use.

use crate::{
    errors::LSResult,
    vocab::{CharsetVocab, FeatureSchema, NormalizeStep, Normalizer, SymbolTable},
};

/// A declared alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// One symbol per char of the string.
    Chars(&'static str),

    /// An explicit list of grapheme symbols.
    Graphemes(&'static [&'static str]),
}

impl Alphabet {
    /// Build the symbol table for this alphabet.
    pub fn build_table(&self) -> LSResult<SymbolTable> {
        match self {
            Alphabet::Chars(chars) => SymbolTable::from_alphabet(chars),
            Alphabet::Graphemes(symbols) => SymbolTable::from_symbols(symbols.iter()),
        }
    }

    /// The number of declared symbols.
    pub fn num_symbols(&self) -> usize {
        match self {
            Alphabet::Chars(chars) => chars.chars().count(),
            Alphabet::Graphemes(symbols) => symbols.len(),
        }
    }
}

/// Static declaration of a language vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct CharsetDeclaration {
    /// The language identifier.
    pub lang: &'static str,

    /// The alphabet, in id order.
    pub alphabet: Alphabet,

    /// The feature names.
    pub features: &'static [&'static str],

    /// The normalization chain; `None` if text arrives pre-normalized.
    pub normalization: Option<&'static [NormalizeStep]>,
}

impl CharsetDeclaration {
    /// Declare a charset with no features and no normalization policy.
    pub const fn new(
        lang: &'static str,
        alphabet: Alphabet,
    ) -> Self {
        Self {
            lang,
            alphabet,
            features: &[],
            normalization: None,
        }
    }

    /// Set the feature names.
    pub const fn with_features(
        self,
        features: &'static [&'static str],
    ) -> Self {
        Self { features, ..self }
    }

    /// Set the normalization chain.
    pub const fn with_normalization(
        self,
        steps: &'static [NormalizeStep],
    ) -> Self {
        Self {
            normalization: Some(steps),
            ..self
        }
    }

    /// Build the vocabulary.
    ///
    /// ## Returns
    /// * `Ok(vocab)` - on success.
    /// * `Err(LostScriptError::VocabConflict)` - if the alphabet is inconsistent.
    pub fn build(&self) -> LSResult<CharsetVocab> {
        Ok(CharsetVocab::new(self.lang, self.alphabet.build_table()?)
            .with_features(FeatureSchema::new(self.features.iter()))
            .with_normalizer(self.normalization.map(Normalizer::from_static)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        errors::LostScriptError,
        vocab::{features::CAPITALIZATION, normalize::CASE_ONLY},
    };

    const DEMO: CharsetDeclaration = CharsetDeclaration::new("demo", Alphabet::Chars("xyz"))
        .with_features(&[CAPITALIZATION])
        .with_normalization(CASE_ONLY);

    #[test]
    fn test_build() {
        let vocab = DEMO.build().unwrap();
        assert_eq!(vocab.lang(), "demo");
        assert_eq!(vocab.size(), 7);
        assert_eq!(vocab.feature_schema().names(), &[CAPITALIZATION.to_string()]);
        assert_eq!(vocab.process("Y").unwrap()[0].grapheme(), "y");
    }

    #[test]
    fn test_graphemes() {
        let decl = CharsetDeclaration::new("g", Alphabet::Graphemes(&["a", "a\u{325}"]));
        assert_eq!(decl.alphabet.num_symbols(), 2);
        let vocab = decl.build().unwrap();
        assert_eq!(vocab.encode_leaf::<u32>("a\u{325}").unwrap(), 5);
        assert!(vocab.process("a").is_err());
    }

    #[test]
    fn test_conflict() {
        let decl = CharsetDeclaration::new("bad", Alphabet::Chars("xx"));
        assert!(matches!(decl.build(), Err(LostScriptError::VocabConflict(_))));
    }
}
