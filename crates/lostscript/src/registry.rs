//! # Charset Registry
//!
//! Maps language identifiers to lazily built [`CharsetVocab`] singletons.
//!
//! Each entry holds a blueprint and an exactly-once cell. The first
//! [`CharsetRegistry::get`] for a language runs the blueprint; racing
//! callers block on the same cell and all receive the one shared instance.
//! The entry map lock is never held while a blueprint runs.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use spin::RwLock;

use crate::{
    charsets::{BUILTIN_CHARSETS, CharsetDeclaration, CharsetInventoryHook},
    errors::{LSResult, LostScriptError},
    types::CSHashMap,
    vocab::CharsetVocab,
};

/// A zero-argument vocabulary constructor.
pub type CharsetBlueprint = Arc<dyn Fn() -> LSResult<CharsetVocab> + Send + Sync>;

/// The lifecycle state of a registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Registered; the blueprint has not yet produced an instance.
    Uninitialized,

    /// Built; every lookup returns the same instance.
    Ready,
}

struct RegistryEntry {
    blueprint: CharsetBlueprint,
    instance: OnceCell<Arc<CharsetVocab>>,
}

impl RegistryEntry {
    fn state(&self) -> EntryState {
        match self.instance.get() {
            Some(_) => EntryState::Ready,
            None => EntryState::Uninitialized,
        }
    }
}

/// A registry of language vocabularies.
#[derive(Default)]
pub struct CharsetRegistry {
    entries: RwLock<CSHashMap<String, Arc<RegistryEntry>>>,
}

impl core::fmt::Debug for CharsetRegistry {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("CharsetRegistry")
            .field("languages", &self.languages())
            .finish()
    }
}

impl CharsetRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding `declarations`.
    ///
    /// ## Returns
    /// * `Ok(registry)` - on success.
    /// * `Err(LostScriptError::DuplicateRegistration)` - if two declarations share a language.
    pub fn from_declarations<'a, I>(declarations: I) -> LSResult<Self>
    where
        I: IntoIterator<Item = &'a CharsetDeclaration>,
    {
        let registry = Self::new();
        for decl in declarations {
            registry.register_declaration(*decl)?;
        }
        Ok(registry)
    }

    /// Associate `lang` with a vocabulary blueprint.
    ///
    /// The blueprint is not run until the first [`CharsetRegistry::get`].
    ///
    /// ## Returns
    /// * `Ok(())` - on success.
    /// * `Err(LostScriptError::DuplicateRegistration)` - if `lang` is already registered.
    pub fn register<F>(
        &self,
        lang: impl Into<String>,
        blueprint: F,
    ) -> LSResult<()>
    where
        F: Fn() -> LSResult<CharsetVocab> + Send + Sync + 'static,
    {
        let lang = lang.into();
        let mut entries = self.entries.write();
        if entries.contains_key(&lang) {
            return Err(LostScriptError::DuplicateRegistration(lang));
        }
        log::debug!("registered charset '{lang}'");
        entries.insert(
            lang,
            Arc::new(RegistryEntry {
                blueprint: Arc::new(blueprint),
                instance: OnceCell::new(),
            }),
        );
        Ok(())
    }

    /// Register a static declaration under its own language identifier.
    pub fn register_declaration(
        &self,
        decl: CharsetDeclaration,
    ) -> LSResult<()> {
        self.register(decl.lang, move || decl.build())
    }

    /// Get the vocabulary for `lang`, building it on first access.
    ///
    /// A failing blueprint leaves the entry uninitialized; the next
    /// call runs it again.
    ///
    /// ## Returns
    /// * `Ok(vocab)` - the shared instance.
    /// * `Err(LostScriptError::UnknownLanguage)` - if `lang` was never registered.
    /// * `Err(e)` - if the blueprint fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn get(
        &self,
        lang: &str,
    ) -> LSResult<Arc<CharsetVocab>> {
        let entry = self.entry(lang)?;
        entry
            .instance
            .get_or_try_init(|| -> LSResult<Arc<CharsetVocab>> {
                let vocab = (entry.blueprint)()?;
                log::debug!(
                    "charset '{lang}' initialized with {} symbols",
                    vocab.size()
                );
                Ok(Arc::new(vocab))
            })
            .cloned()
    }

    /// The lifecycle state of `lang`.
    ///
    /// ## Returns
    /// * `Ok(state)` - on success.
    /// * `Err(LostScriptError::UnknownLanguage)` - if `lang` was never registered.
    pub fn state(
        &self,
        lang: &str,
    ) -> LSResult<EntryState> {
        Ok(self.entry(lang)?.state())
    }

    /// Is `lang` registered?
    pub fn contains(
        &self,
        lang: &str,
    ) -> bool {
        self.entries.read().contains_key(lang)
    }

    /// All registered language identifiers, sorted.
    pub fn languages(&self) -> Vec<String> {
        let mut langs: Vec<String> = self.entries.read().keys().cloned().collect();
        langs.sort_unstable();
        langs
    }

    /// The number of registered languages.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Is the registry empty?
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(
        &self,
        lang: &str,
    ) -> LSResult<Arc<RegistryEntry>> {
        self.entries
            .read()
            .get(lang)
            .cloned()
            .ok_or_else(|| LostScriptError::UnknownLanguage(lang.to_string()))
    }
}

/// Global charset registry.
static REGISTRY: OnceCell<CharsetRegistry> = OnceCell::new();

/// Get the global registry.
///
/// Holds the [`BUILTIN_CHARSETS`], then every [`CharsetInventoryHook`]
/// declaration; a hook declaration reusing a language is skipped.
pub fn global_registry() -> &'static CharsetRegistry {
    REGISTRY.get_or_init(init_registry)
}

fn init_registry() -> CharsetRegistry {
    let registry = CharsetRegistry::new();

    for decl in BUILTIN_CHARSETS {
        if let Err(err) = registry.register_declaration(*decl) {
            log::warn!("skipping builtin charset: {err}");
        }
    }

    for hook in inventory::iter::<CharsetInventoryHook> {
        for decl in hook.declarations {
            if let Err(err) = registry.register_declaration(*decl) {
                log::warn!("skipping charset declaration: {err}");
            }
        }
    }

    registry
}

/// Get a vocabulary from the global registry.
///
/// See [`CharsetRegistry::get`].
pub fn get_charset(lang: &str) -> LSResult<Arc<CharsetVocab>> {
    global_registry().get(lang)
}

/// Register a blueprint in the global registry.
///
/// See [`CharsetRegistry::register`].
pub fn register_charset<F>(
    lang: impl Into<String>,
    blueprint: F,
) -> LSResult<()>
where
    F: Fn() -> LSResult<CharsetVocab> + Send + Sync + 'static,
{
    global_registry().register(lang, blueprint)
}

/// List the languages of the global registry, sorted.
pub fn list_charsets() -> Vec<String> {
    global_registry().languages()
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{
        charsets::Alphabet,
        types::{check_is_send, check_is_sync},
    };

    fn counting_registry(calls: &Arc<AtomicUsize>) -> CharsetRegistry {
        let registry = CharsetRegistry::new();
        let calls = calls.clone();
        registry
            .register("xx", move || {
                calls.fetch_add(1, Ordering::SeqCst);
                CharsetVocab::from_alphabet("xx", "xyz")
            })
            .unwrap();
        registry
    }

    #[test]
    fn test_singleton_identity() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = counting_registry(&calls);
        check_is_send(&registry);
        check_is_sync(&registry);

        assert_eq!(registry.state("xx").unwrap(), EntryState::Uninitialized);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let a = registry.get("xx").unwrap();
        let b = registry.get("xx").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(registry.state("xx").unwrap(), EntryState::Ready);
    }

    #[test]
    fn test_concurrent_first_get() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = counting_registry(&calls);

        let instances: Vec<Arc<CharsetVocab>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.get("xx").unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        for inst in &instances {
            assert!(Arc::ptr_eq(inst, &instances[0]));
        }
    }

    #[test]
    fn test_duplicate_registration() {
        let registry = CharsetRegistry::new();
        registry
            .register("xx", || CharsetVocab::from_alphabet("xx", "a"))
            .unwrap();
        assert!(matches!(
            registry.register("xx", || CharsetVocab::from_alphabet("xx", "b")),
            Err(LostScriptError::DuplicateRegistration(lang)) if lang == "xx"
        ));
        assert_eq!(registry.get("xx").unwrap().table().alphabet(), &["a".to_string()]);
    }

    #[test]
    fn test_unknown_language() {
        let registry = CharsetRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.contains("zz"));
        assert!(matches!(
            registry.get("zz"),
            Err(LostScriptError::UnknownLanguage(lang)) if lang == "zz"
        ));
        assert!(registry.state("zz").is_err());
    }

    #[test]
    fn test_failing_blueprint_stays_uninitialized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = CharsetRegistry::new();
        let counter = calls.clone();
        registry
            .register("bad", move || {
                counter.fetch_add(1, Ordering::SeqCst);
                CharsetVocab::from_alphabet("bad", "aa")
            })
            .unwrap();

        for _ in 0..2 {
            assert!(matches!(
                registry.get("bad"),
                Err(LostScriptError::VocabConflict(_))
            ));
            assert_eq!(registry.state("bad").unwrap(), EntryState::Uninitialized);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_from_declarations() {
        let decls = [
            CharsetDeclaration::new("b", Alphabet::Chars("xy")),
            CharsetDeclaration::new("a", Alphabet::Chars("z")),
        ];
        let registry = CharsetRegistry::from_declarations(&decls).unwrap();
        assert_eq!(registry.languages(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("b").unwrap().size(), 6);
        assert_eq!(registry.get("a").unwrap().lang(), "a");

        let dup = [decls[0], decls[0]];
        assert!(CharsetRegistry::from_declarations(&dup).is_err());
    }
}
