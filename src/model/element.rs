//! Element collections: unions, enums and directive definitions

use super::location::DirectiveLocation;
use super::{DirectiveAnnotation, ParameterComponent, non_empty};
use crate::base::{NameIndex, non_blank};
use crate::error::Result;

/// A member of a union or a value of an enum
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectibleElement {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub directives: Option<NameIndex<DirectiveAnnotation>>,
}

impl DirectibleElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directives: None,
        }
    }

    pub fn with_directives(mut self, directives: Option<NameIndex<DirectiveAnnotation>>) -> Self {
        self.directives = non_empty(directives);
        self
    }
}

pub type UnionElement = DirectibleElement;
pub type EnumElement = DirectibleElement;

/// A named, annotated collection of elements
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DirectibleElementCollection<T> {
    pub name: String,
    pub is_extended: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub directives: Option<NameIndex<DirectiveAnnotation>>,
    pub elements: NameIndex<T>,
}

impl<T> DirectibleElementCollection<T> {
    pub fn new(name: impl Into<String>, is_extended: bool, elements: NameIndex<T>) -> Self {
        Self {
            name: name.into(),
            is_extended,
            description: None,
            directives: None,
            elements,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = non_blank(description.as_deref());
        self
    }

    pub fn with_directives(mut self, directives: Option<NameIndex<DirectiveAnnotation>>) -> Self {
        self.directives = non_empty(directives);
        self
    }
}

pub type UnionDefinition = DirectibleElementCollection<UnionElement>;
pub type EnumDefinition = DirectibleElementCollection<EnumElement>;

/// One location listed after `on` in a directive definition
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectiveDefinitionElement {
    pub name: String,
    pub location: DirectiveLocation,
}

impl DirectiveDefinitionElement {
    /// Fails with [`crate::SchemaError::InvalidDirectiveLocation`] unless `name` is one of
    /// the executable or type system directive locations.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let location = name.parse()?;
        Ok(Self { name, location })
    }
}

/// A `directive @name(arguments) on LOCATIONS` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DirectiveDefinition {
    pub name: String,
    /// Directive definitions cannot be extended; always false
    pub is_extended: bool,
    pub is_repeatable: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    pub elements: NameIndex<DirectiveDefinitionElement>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub parameters: Option<NameIndex<ParameterComponent>>,
}

impl DirectiveDefinition {
    pub fn new(name: impl Into<String>, elements: NameIndex<DirectiveDefinitionElement>) -> Self {
        Self {
            name: name.into(),
            is_extended: false,
            is_repeatable: false,
            description: None,
            elements,
            parameters: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = non_blank(description.as_deref());
        self
    }

    pub fn with_parameters(mut self, parameters: Option<NameIndex<ParameterComponent>>) -> Self {
        self.parameters = non_empty(parameters);
        self
    }

    pub fn repeatable(mut self, is_repeatable: bool) -> Self {
        self.is_repeatable = is_repeatable;
        self
    }
}

impl_named!(DirectibleElement, DirectiveDefinitionElement, DirectiveDefinition);
impl_describable!(DirectiveDefinition);
impl_directible!(DirectibleElement);

impl<T> super::Named for DirectibleElementCollection<T> {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<T> super::Describable for DirectibleElementCollection<T> {
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl<T> super::Directible for DirectibleElementCollection<T> {
    fn directives(&self) -> Option<&NameIndex<DirectiveAnnotation>> {
        self.directives.as_ref()
    }
}

impl<T> super::SchemaTypeDefinition for DirectibleElementCollection<T> {
    fn is_extended(&self) -> bool {
        self.is_extended
    }
}

impl super::SchemaTypeDefinition for DirectiveDefinition {
    fn is_extended(&self) -> bool {
        self.is_extended
    }
}
