//! # sdl-extract
//!
//! Builds a typed schema model from GraphQL SDL whose directive usages have been
//! replaced by short encoding markers (`%0`, `%d3`). The markers are decoded through a
//! [`MarkerTable`] supplied by the encoder.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! extract     → per-kind extractors, SchemaExtractor
//!   ↓
//! directives  → MarkerTable, marker resolution
//!   ↓
//! model       → entity records, SchemaModel
//!   ↓
//! parser      → logos lexer, construct readers
//!   ↓
//! base        → NameIndex, fixed vocabulary, text helpers
//! ```
//!
//! ## Example
//!
//! ```
//! use sdl_extract::{DirectiveAnnotation, MarkerTable, extract_schema};
//!
//! let table: MarkerTable = [("%0", DirectiveAnnotation::new("key").with_parameter("fields", "\"id\""))]
//!     .into_iter()
//!     .collect();
//!
//! let model = extract_schema("type Dog %0 {\n  id: ID!\n}\nunion Pet = Dog | Cat\n", &table).unwrap();
//! assert!(model.objects["Dog"].directives.as_ref().unwrap().contains_key("key"));
//! assert_eq!(model.unions["Pet"].elements.len(), 2);
//! ```

// ============================================================================
// MODULES (dependency order: base → parser → model → directives → extract)
// ============================================================================

/// Foundation types: NameIndex, encoding vocabulary, TextRange
pub mod base;

/// Parser: logos lexer and per-construct readers
pub mod parser;

/// Entity records and the assembled SchemaModel
pub mod model;

/// Marker table and directive resolution
pub mod directives;

/// Extractors from encoded text to entity maps
pub mod extract;

/// Error type and Result alias
pub mod error;

// Re-export commonly needed items
pub use base::{EXTENSION_NAME_SUFFIX, NameIndex};
pub use directives::{MarkerTable, resolve_directives};
pub use error::{Result, SchemaError};
pub use extract::{
    ExtractOptions, FieldedTypes, SchemaExtractor, extract_directive_definitions, extract_enums,
    extract_fielded_types, extract_scalars, extract_schema, extract_unions,
};
pub use model::*;
