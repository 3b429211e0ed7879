//! # Orthographic Features
//!
//! A [`FeatureSchema`] names the boolean attributes a vocabulary tracks per
//! character; a [`CharAnnotation`] carries one resolved grapheme and the
//! values of those attributes.

use core::fmt;

/// Feature name: the character was upper-case in the source text.
pub const CAPITALIZATION: &str = "capitalization";

/// Feature name: the character carries an umlaut.
pub const UMLAUT: &str = "umlaut";

/// An ordered set of named boolean attributes.
///
/// Empty names are dropped and duplicates keep their first position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl<S: AsRef<str>> FromIterator<S> for FeatureSchema {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut schema = FeatureSchema::default();
        for name in iter {
            schema.push(name.as_ref());
        }
        schema
    }
}

impl FeatureSchema {
    /// Build a schema from feature names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().collect()
    }

    fn push(
        &mut self,
        name: &str,
    ) {
        if !name.is_empty() && !self.contains(name) {
            self.names.push(name.to_string());
        }
    }

    /// The feature names, in declaration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The number of features.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Is the schema empty?
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Does the schema include `name`?
    pub fn contains(
        &self,
        name: &str,
    ) -> bool {
        self.position(name).is_some()
    }

    /// The position of `name` in the schema.
    pub fn position(
        &self,
        name: &str,
    ) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// A fresh annotation with every feature at its default.
    pub fn blank_annotation(&self) -> CharAnnotation {
        CharAnnotation {
            grapheme: None,
            flags: self.names.iter().map(|n| (n.clone(), false)).collect(),
        }
    }
}

/// A per-character normalization record produced by `process`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharAnnotation {
    /// The resolved grapheme; `None` until a normalization step resolves it.
    grapheme: Option<String>,

    /// One flag per schema feature, in schema order.
    flags: Vec<(String, bool)>,
}

impl CharAnnotation {
    /// The resolved grapheme.
    ///
    /// The empty string means the character has no representable symbol.
    pub fn grapheme(&self) -> &str {
        self.grapheme.as_deref().unwrap_or("")
    }

    /// Has a step resolved this character?
    pub fn is_resolved(&self) -> bool {
        self.grapheme.is_some()
    }

    /// Did the character fall through to the empty sentinel?
    pub fn is_unknown(&self) -> bool {
        self.grapheme().is_empty()
    }

    pub(crate) fn resolve(
        &mut self,
        grapheme: impl Into<String>,
    ) {
        self.grapheme = Some(grapheme.into());
    }

    /// The value of feature `name`; `false` for features outside the schema.
    pub fn flag(
        &self,
        name: &str,
    ) -> bool {
        self.flags
            .iter()
            .find(|(n, _)| n == name)
            .is_some_and(|(_, v)| *v)
    }

    /// Set feature `name`; features outside the schema are ignored.
    ///
    /// ## Returns
    /// `true` if the schema contains `name`.
    pub fn set_flag(
        &mut self,
        name: &str,
        value: bool,
    ) -> bool {
        match self.flags.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => {
                *v = value;
                true
            }
            None => false,
        }
    }

    /// All feature flags, in schema order.
    pub fn flags(&self) -> &[(String, bool)] {
        &self.flags
    }
}

impl fmt::Display for CharAnnotation {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:?}", self.grapheme())?;
        for (name, value) in &self.flags {
            if *value {
                write!(f, " +{name}")?;
            }
        }
        Ok(())
    }
}
