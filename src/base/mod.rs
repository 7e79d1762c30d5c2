//! Foundation types shared by the reader and the entity model.
//!
//! This module provides:
//! - [`NameIndex`] - name-keyed entity collections
//! - [`EXTENSION_NAME_SUFFIX`] - key suffix of extension entities
//! - [`TextRange`], [`TextSize`] - byte offsets of tokens
//! - [`non_blank`] - description cleanup
//!
//! This module has NO dependencies on other crate modules.

pub mod text_utils;

use indexmap::IndexMap;

/// Mapping from entity name to entity. Keys are unique and a missing key means the
/// entity was never declared. Iteration follows insertion (textual) order.
pub type NameIndex<T> = IndexMap<String, T>;

/// Suffix appended to the name of a construct declared with `extend`, so that a base
/// definition and its extension can live side by side in one [`NameIndex`].
pub const EXTENSION_NAME_SUFFIX: &str = "_isExtended_";

// Re-export text-size types for convenience
pub use text_size::{TextRange, TextSize};
pub use text_utils::non_blank;
