//! # Builtin Charsets
//!
//! The language vocabularies shipped with the crate.
//!
//! Cased Latin alphabets carry the case policy; German adds umlaut tagging.
//! Transliterations, IPA inventories and undeciphered scripts arrive
//! pre-normalized, so they carry no policy.

use crate::{
    charsets::declaration::{Alphabet, CharsetDeclaration},
    vocab::{
        NormalizeStep,
        features::{CAPITALIZATION, UMLAUT},
        normalize::CASE_ONLY,
    },
};

/// German umlauted vowels.
pub const GERMAN_UMLAUTS: &[&str] = &["ä", "ö", "ü"];

/// Exact match, case fold, umlaut tagging, sentinel.
pub const GERMAN_NORMALIZATION: &[NormalizeStep] = &[
    NormalizeStep::ExactMatch,
    NormalizeStep::case_fold(),
    NormalizeStep::mark_tag(UMLAUT, GERMAN_UMLAUTS),
    NormalizeStep::Sentinel,
];

const LATIN: &str = "abcdefghijklmnopqrstuvwxyz";

const fn cased(
    lang: &'static str,
    alphabet: &'static str,
) -> CharsetDeclaration {
    CharsetDeclaration::new(lang, Alphabet::Chars(alphabet))
        .with_features(&[CAPITALIZATION])
        .with_normalization(CASE_ONLY)
}

const fn plain(
    lang: &'static str,
    alphabet: &'static str,
) -> CharsetDeclaration {
    CharsetDeclaration::new(lang, Alphabet::Chars(alphabet))
}

/// Every builtin charset declaration.
pub const BUILTIN_CHARSETS: &[CharsetDeclaration] = &[
    cased("en", LATIN),
    cased("es", "abcdefghijklmnñopqrstuvwxyz"),
    plain("es-ipa", "abdefgiklmnoprstuwxúɲɾʎʝʧ"),
    cased("it", "abcdefghijklmnopqrstuvwxyzàèéìïòöù"),
    plain("it-ipa", "abdefghijklmnopqrstuvwzŋɔɛɲʃʎʤʧ"),
    cased("pt", "abcdefghijklmnopqrstuvwxyzáâãçéêíóôú"),
    plain("pt-ipa", "abdefgiklmnopstuvzäɐɔɛɨɾʁʃʎʒ"),
    plain("heb", "#$&-<HSTabdghklmnpqrstwyz"),
    plain("uga", "#$&*-<@HSTZabdghiklmnpqrstuvwxyz"),
    plain("heb-no_spe", "$&<HSTabdghklmnpqrstwyz"),
    plain("uga-no_spe", "$&*<@HSTZabdghiklmnpqrstuvwxyz"),
    plain("kor", "*abdhijklmnopstuwŋɑɕɛɡɯɰɾʌʑʰ"),
    plain(
        "wuu",
        "abdefhiklmnopstvyzãøŋɑɔɕəɜɡɥɦɪɯɲɻʊʏʑʔʰʲʷ\
         \u{303}\u{30a}\u{30d}\u{31e}\u{320}\u{325}\u{329}\u{32f}\u{331}\u{361}",
    ),
    CharsetDeclaration::new(
        "OC",
        Alphabet::Graphemes(&[
            "A", "C", "N", "S", "a", "b", "d", "e", "g", "h", "i", "j", "k", "l", "m", "n", "o",
            "p", "q", "r", "s", "t", "u", "w", "z", "|", "ŋ", "ə", "ɢ", "ɦ", "ʔ", "ʰ", "ʷ", "ˤ",
            "r\u{325}", "l\u{325}", "n\u{325}",
        ]),
    ),
    plain("MC", "+abdeghijklmnoprstuwxyz"),
    plain("el", "fhyαβγδεζηθικλμνξοπρςστυφχψω"),
    plain("linb-latin", "23adeijkmnopqrstuwz"),
    plain(
        "minoan",
        "𐀀𐀁𐀂𐀃𐀄𐀅𐀆𐀇𐀈𐀉𐀊𐀋𐀍𐀏𐀐𐀑𐀒𐀓𐀔𐀕𐀖𐀗𐀘𐀙𐀚𐀛𐀜𐀝𐀞𐀟𐀠𐀡𐀢𐀣𐀤\
         𐀥𐀦𐀨𐀩𐀪𐀫𐀬𐀭𐀮𐀯𐀰𐀱𐀲𐀳𐀴𐀵𐀶𐀷𐀸𐀹𐀺𐀼𐀽𐀿𐁀𐁁𐁂𐁄𐁅𐁆𐁇𐁈𐁉𐁊𐁋",
    ),
    cased("fr", LATIN),
    plain("lost", "aeioubpdtfvgklmnrszw"),
    plain("k1", "aeioubpdtfvgklmnrszw"),
    plain("k2", "aeioubpdtfvgklmnrszw"),
    CharsetDeclaration::new("de", Alphabet::Chars("abcdefghijklmnopqrstuvwxyzäöüß"))
        .with_features(&[CAPITALIZATION, UMLAUT])
        .with_normalization(GERMAN_NORMALIZATION),
];

/// Find a builtin declaration by language identifier.
pub fn builtin_declaration(lang: &str) -> Option<&'static CharsetDeclaration> {
    BUILTIN_CHARSETS.iter().find(|decl| decl.lang == lang)
}
