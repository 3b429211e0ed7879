//! Detokenize Options
//!
//! Options for building a [`BatchTokenDecoder`].

use crate::{
    decoders::BatchTokenDecoder,
    vocab::{CharsetVocab, specials::DEFAULT_PLACEHOLDER},
};

/// Options for configuring a [`BatchTokenDecoder`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetokenizeOptions {
    /// Character rendered in place of stray special symbols.
    pub placeholder: char,

    /// Should rows be decoded in parallel?
    ///
    /// Only honored when the ``rayon`` feature is enabled.
    pub parallel: bool,
}

impl Default for DetokenizeOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER,
            parallel: false,
        }
    }
}

impl DetokenizeOptions {
    /// Gets the configured placeholder.
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Sets the configured placeholder.
    pub fn set_placeholder(
        &mut self,
        placeholder: char,
    ) {
        self.placeholder = placeholder;
    }

    /// Sets the configured placeholder.
    pub fn with_placeholder(
        mut self,
        placeholder: char,
    ) -> Self {
        self.set_placeholder(placeholder);
        self
    }

    /// Gets the configured parallelism value.
    ///
    /// Enabling parallelism will request a threaded implementation.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request a threaded implementation.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request a threaded implementation.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Build a [`BatchTokenDecoder`] for the given vocab.
    pub fn build<'v>(
        &self,
        vocab: &'v CharsetVocab,
    ) -> BatchTokenDecoder<'v> {
        BatchTokenDecoder::new(vocab).with_options(*self)
    }
}
