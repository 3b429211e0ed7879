//! # Charset Declarations
//!
//! Static language declarations. The [`BUILTIN_CHARSETS`] always populate
//! the global [`crate::registry`]; downstream crates can contribute their
//! own declarations through the inventory hook:
//!
//! ```rust,ignore
//! use lostscript::charsets::{Alphabet, CharsetDeclaration, CharsetInventoryHook};
//!
//! const MINE: &[CharsetDeclaration] =
//!     &[CharsetDeclaration::new("mine", Alphabet::Chars("xyz"))];
//!
//! inventory::submit! { CharsetInventoryHook::new(MINE) }
//! ```

pub mod builtin;
pub mod declaration;

#[doc(inline)]
pub use builtin::{BUILTIN_CHARSETS, builtin_declaration};
#[doc(inline)]
pub use declaration::{Alphabet, CharsetDeclaration};

/// Hook for registering charset declarations at link time.
pub struct CharsetInventoryHook {
    /// The contributed declarations.
    pub declarations: &'static [CharsetDeclaration],
}
inventory::collect!(CharsetInventoryHook);

impl CharsetInventoryHook {
    /// Create a new inventory hook.
    pub const fn new(declarations: &'static [CharsetDeclaration]) -> Self {
        Self { declarations }
    }
}
