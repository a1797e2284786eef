//! Categorical value sets for the synthetic-data generator.
//!
//! A *type-set* is a named, finite, non-empty list of allowed string values
//! for a semantic field (an account status, a billing cycle, a tier label).
//! The [`TypeSetRegistry`] maps canonical, lower-cased category keys to those
//! lists and resolves field names to categories through an alias map.
//!
//! Definitions come from two places:
//!
//! - an external directory of source files, read through a
//!   [`CategoricalSource`] (the default [`TextualDefinitionLoader`] pulls
//!   string-array literals out of `.ts`/`.js` files), and
//! - the built-in fallback table in [`defaults`].
//!
//! An external definition replaces the built-in one for the same key; the
//! two are never merged.
//!
//! ```rust
//! use type_sets::TypeSetRegistry;
//!
//! let registry = TypeSetRegistry::builtin();
//! let statuses = registry.resolve("Status").unwrap();
//! assert!(statuses.iter().any(|s| s == "Active"));
//! ```

pub mod defaults;
pub mod error;
pub mod loader;
pub mod registry;

pub use error::TypeSetError;
pub use loader::{
    extract_definitions, load_registry, CategoricalSource, Definitions, TextualDefinitionLoader,
};
pub use registry::{canonical_key, normalize_key, TypeSetRegistry};
