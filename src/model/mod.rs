//! The typed schema model populated by the extractors
//!
//! Records are small value structs. What they share is expressed by traits:
//!
//! ```text
//! Named                 every record
//!   ├── Describable     optional description
//!   ├── Directible      optional directive annotations
//!   └── SchemaTypeDefinition   top-level types: description + `isExtended`
//! ```
//!
//! Optional attributes are `None` whenever the source declared nothing; builders drop
//! empty collections and blank text so an empty value is never stored.
//! Records refer to each other by name only.

macro_rules! impl_named {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::model::Named for $ty {
            fn name(&self) -> &str {
                &self.name
            }
        })*
    };
}

macro_rules! impl_describable {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::model::Describable for $ty {
            fn description(&self) -> Option<&str> {
                self.description.as_deref()
            }
        })*
    };
}

macro_rules! impl_directible {
    ($($ty:ty),* $(,)?) => {
        $(impl $crate::model::Directible for $ty {
            fn directives(
                &self,
            ) -> Option<&$crate::base::NameIndex<$crate::model::DirectiveAnnotation>> {
                self.directives.as_ref()
            }
        })*
    };
}

mod component;
mod element;
mod fielded;
mod location;
mod scalar;
mod schema;

pub use component::{
    DescribableParameterComponent, DirectiveAnnotation, InputFieldDefinition, NamedComponent,
    ParameterComponent, ParameterFieldDefinition,
};
pub use element::{
    DirectibleElement, DirectibleElementCollection, DirectiveDefinition,
    DirectiveDefinitionElement, EnumDefinition, EnumElement, UnionDefinition, UnionElement,
};
pub use fielded::{FieldedTypeDefinition, InputDefinition, InterfaceDefinition, ObjectDefinition};
pub use location::{DirectiveLocation, ExecutableDirectiveLocation, TypeSystemDirectiveLocation};
pub use scalar::ScalarDefinition;
pub use schema::SchemaModel;

use crate::base::NameIndex;

/// Anything that is keyed by name in a [`NameIndex`]
pub trait Named {
    fn name(&self) -> &str;
}

/// Records that may carry a description
pub trait Describable: Named {
    fn description(&self) -> Option<&str>;
}

/// Records that may carry directive annotations
pub trait Directible: Named {
    fn directives(&self) -> Option<&NameIndex<DirectiveAnnotation>>;
}

/// Top-level type definitions
pub trait SchemaTypeDefinition: Describable {
    /// True iff the declaration carried `extend`
    fn is_extended(&self) -> bool;
}

/// Insert `entity` under its own name
pub(crate) fn publish<T: Named>(index: &mut NameIndex<T>, entity: T) {
    index.insert(entity.name().to_string(), entity);
}

/// Keep a collection only if it holds something
pub(crate) fn non_empty<T>(index: Option<NameIndex<T>>) -> Option<NameIndex<T>> {
    index.filter(|i| !i.is_empty())
}
