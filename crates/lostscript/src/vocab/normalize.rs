//! # Character Normalization
//!
//! A [`Normalizer`] is an ordered list of [`NormalizeStep`]s.
//! For each input character, resolving steps run in order until one
//! resolves a grapheme; tagging steps always run.
//!
//! The usual chain is:
//! 1. [`NormalizeStep::ExactMatch`]
//! 2. [`NormalizeStep::CaseFold`]
//! 3. [`NormalizeStep::MarkTag`] (optional, per language)
//! 4. [`NormalizeStep::Sentinel`]

use std::borrow::Cow;

use crate::{
    errors::{LSResult, LostScriptError},
    vocab::{
        SymbolTable,
        features::{CAPITALIZATION, CharAnnotation, FeatureSchema},
    },
};

/// One composable normalization step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeStep {
    /// Resolve a character present in the table as-is.
    ExactMatch,

    /// Resolve the lower-cased form, and set `feature`.
    CaseFold {
        /// The feature set when the fold was needed.
        feature: Cow<'static, str>,
    },

    /// Set `feature` when the character, or its lower-cased form,
    /// is one of `marked`. Does not resolve.
    MarkTag {
        /// The feature to set.
        feature: Cow<'static, str>,

        /// The marked letters.
        marked: Cow<'static, [&'static str]>,
    },

    /// Resolve anything still unresolved to the empty grapheme.
    Sentinel,
}

impl NormalizeStep {
    /// A case fold step setting [`CAPITALIZATION`].
    pub const fn case_fold() -> Self {
        NormalizeStep::CaseFold {
            feature: Cow::Borrowed(CAPITALIZATION),
        }
    }

    /// A mark tagging step over static letters.
    pub const fn mark_tag(
        feature: &'static str,
        marked: &'static [&'static str],
    ) -> Self {
        NormalizeStep::MarkTag {
            feature: Cow::Borrowed(feature),
            marked: Cow::Borrowed(marked),
        }
    }

    /// Does this step resolve graphemes (as opposed to only tagging)?
    pub fn is_resolving(&self) -> bool {
        !matches!(self, NormalizeStep::MarkTag { .. })
    }

    fn apply(
        &self,
        table: &SymbolTable,
        ch: char,
        lower: &str,
        ann: &mut CharAnnotation,
    ) {
        match self {
            NormalizeStep::ExactMatch => {
                if ann.is_resolved() {
                    return;
                }
                let mut buf = [0u8; 4];
                let exact: &str = ch.encode_utf8(&mut buf);
                if table.contains(exact) {
                    ann.resolve(exact);
                }
            }
            NormalizeStep::CaseFold { feature } => {
                if ann.is_resolved() {
                    return;
                }
                if table.contains(lower) {
                    ann.resolve(lower);
                    ann.set_flag(feature, true);
                }
            }
            NormalizeStep::MarkTag { feature, marked } => {
                let mut buf = [0u8; 4];
                let exact: &str = ch.encode_utf8(&mut buf);
                if marked.iter().any(|&m| m == exact || m == lower) {
                    ann.set_flag(feature, true);
                }
            }
            NormalizeStep::Sentinel => {
                if !ann.is_resolved() {
                    ann.resolve("");
                }
            }
        }
    }
}

/// An ordered normalization chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    steps: Cow<'static, [NormalizeStep]>,
}

impl Normalizer {
    /// Build from a static step list.
    pub const fn from_static(steps: &'static [NormalizeStep]) -> Self {
        Self {
            steps: Cow::Borrowed(steps),
        }
    }

    /// Build from owned steps.
    pub fn new(steps: Vec<NormalizeStep>) -> Self {
        Self {
            steps: Cow::Owned(steps),
        }
    }

    /// Exact match, then case fold, then the sentinel.
    pub fn case_only() -> Self {
        Self::from_static(CASE_ONLY)
    }

    /// The steps, in order.
    pub fn steps(&self) -> &[NormalizeStep] {
        &self.steps
    }

    /// Normalize one character.
    ///
    /// ## Returns
    /// * `Ok(annotation)` - on success.
    /// * `Err(LostScriptError::Unnormalizable)` - if no step resolved `ch`.
    pub fn normalize_char(
        &self,
        lang: &str,
        table: &SymbolTable,
        schema: &FeatureSchema,
        ch: char,
    ) -> LSResult<CharAnnotation> {
        let lower: String = ch.to_lowercase().collect();
        let mut ann = schema.blank_annotation();
        for step in self.steps.iter() {
            step.apply(table, ch, &lower, &mut ann);
        }
        if !ann.is_resolved() {
            return Err(LostScriptError::Unnormalizable {
                lang: lang.to_string(),
                ch,
            });
        }
        Ok(ann)
    }

    /// Normalize every character of `word`, in order.
    pub fn normalize_word(
        &self,
        lang: &str,
        table: &SymbolTable,
        schema: &FeatureSchema,
        word: &str,
    ) -> LSResult<Vec<CharAnnotation>> {
        word.chars()
            .map(|ch| self.normalize_char(lang, table, schema, ch))
            .collect()
    }
}

/// Exact match, case fold, sentinel.
pub const CASE_ONLY: &[NormalizeStep] = &[
    NormalizeStep::ExactMatch,
    NormalizeStep::case_fold(),
    NormalizeStep::Sentinel,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::features::UMLAUT;

    const UMLAUTS: &[&str] = &["ä", "ö", "ü"];

    fn german() -> (SymbolTable, FeatureSchema, Normalizer) {
        let table = SymbolTable::from_alphabet("abcdefghijklmnopqrstuvwxyzäöüß").unwrap();
        let schema = FeatureSchema::new([CAPITALIZATION, UMLAUT]);
        let normalizer = Normalizer::new(vec![
            NormalizeStep::ExactMatch,
            NormalizeStep::case_fold(),
            NormalizeStep::mark_tag(UMLAUT, UMLAUTS),
            NormalizeStep::Sentinel,
        ]);
        (table, schema, normalizer)
    }

    #[test]
    fn test_exact_match() {
        let (table, schema, normalizer) = german();
        let ann = normalizer.normalize_char("de", &table, &schema, 'a').unwrap();
        assert_eq!(ann.grapheme(), "a");
        assert!(!ann.flag(CAPITALIZATION));
        assert!(!ann.flag(UMLAUT));
    }

    #[test]
    fn test_case_fold() {
        let (table, schema, normalizer) = german();
        let ann = normalizer.normalize_char("de", &table, &schema, 'B').unwrap();
        assert_eq!(ann.grapheme(), "b");
        assert!(ann.flag(CAPITALIZATION));
        assert!(!ann.flag(UMLAUT));
    }

    #[test]
    fn test_mark_tag_composes_with_case() {
        let (table, schema, normalizer) = german();

        let ann = normalizer.normalize_char("de", &table, &schema, 'ö').unwrap();
        assert_eq!(ann.grapheme(), "ö");
        assert!(!ann.flag(CAPITALIZATION));
        assert!(ann.flag(UMLAUT));

        let ann = normalizer.normalize_char("de", &table, &schema, 'Ü').unwrap();
        assert_eq!(ann.grapheme(), "ü");
        assert!(ann.flag(CAPITALIZATION));
        assert!(ann.flag(UMLAUT));
    }

    #[test]
    fn test_sentinel() {
        let (table, schema, normalizer) = german();
        let ann = normalizer.normalize_char("de", &table, &schema, '7').unwrap();
        assert_eq!(ann.grapheme(), "");
        assert!(ann.is_unknown());
        assert!(ann.flags().iter().all(|(_, v)| !v));
    }

    #[test]
    fn test_missing_sentinel() {
        let (table, schema, _) = german();
        let normalizer = Normalizer::new(vec![NormalizeStep::ExactMatch]);
        assert!(matches!(
            normalizer.normalize_char("de", &table, &schema, 'Z'),
            Err(LostScriptError::Unnormalizable { ch: 'Z', .. })
        ));
    }

    #[test]
    fn test_normalize_word() {
        let (table, schema, normalizer) = german();
        let anns = normalizer
            .normalize_word("de", &table, &schema, "Mädchen!")
            .unwrap();
        let graphemes: Vec<&str> = anns.iter().map(|a| a.grapheme()).collect();
        assert_eq!(graphemes, vec!["m", "ä", "d", "c", "h", "e", "n", ""]);
        assert!(anns[0].flag(CAPITALIZATION));
        assert!(anns[1].flag(UMLAUT));
        assert_eq!(anns.len(), "Mädchen!".chars().count());
    }

    #[test]
    fn test_step_kinds() {
        assert!(NormalizeStep::ExactMatch.is_resolving());
        assert!(NormalizeStep::Sentinel.is_resolving());
        assert!(!NormalizeStep::mark_tag(UMLAUT, UMLAUTS).is_resolving());
        assert_eq!(Normalizer::case_only().steps(), CASE_ONLY);
    }
}
