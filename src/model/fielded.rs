//! Types that own a field list: objects, interfaces and inputs

use super::{
    DirectiveAnnotation, InputFieldDefinition, NamedComponent, ParameterFieldDefinition, non_empty,
};
use crate::base::{NameIndex, non_blank};

/// Shared shape of interfaces and inputs, generic over the field record
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FieldedTypeDefinition<F> {
    pub name: String,
    pub is_extended: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub directives: Option<NameIndex<DirectiveAnnotation>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub fields: Option<NameIndex<F>>,
}

impl<F> FieldedTypeDefinition<F> {
    pub fn new(name: impl Into<String>, is_extended: bool) -> Self {
        Self {
            name: name.into(),
            is_extended,
            description: None,
            directives: None,
            fields: None,
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

    pub fn with_fields(mut self, fields: Option<NameIndex<F>>) -> Self {
        self.fields = non_empty(fields);
        self
    }
}

pub type InterfaceDefinition = FieldedTypeDefinition<ParameterFieldDefinition>;
pub type InputDefinition = FieldedTypeDefinition<InputFieldDefinition>;

/// An object type; like an interface, plus the interfaces it implements
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ObjectDefinition {
    pub name: String,
    pub is_extended: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub directives: Option<NameIndex<DirectiveAnnotation>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub fields: Option<NameIndex<ParameterFieldDefinition>>,
    /// Interface names only; the interfaces themselves live in their own map
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub implements: Option<NameIndex<NamedComponent>>,
}

impl ObjectDefinition {
    pub fn new(name: impl Into<String>, is_extended: bool) -> Self {
        Self {
            name: name.into(),
            is_extended,
            description: None,
            directives: None,
            fields: None,
            implements: None,
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

    pub fn with_fields(mut self, fields: Option<NameIndex<ParameterFieldDefinition>>) -> Self {
        self.fields = non_empty(fields);
        self
    }

    pub fn with_implements(mut self, implements: Option<NameIndex<NamedComponent>>) -> Self {
        self.implements = non_empty(implements);
        self
    }
}

impl_named!(ObjectDefinition);
impl_describable!(ObjectDefinition);
impl_directible!(ObjectDefinition);

impl super::SchemaTypeDefinition for ObjectDefinition {
    fn is_extended(&self) -> bool {
        self.is_extended
    }
}

impl<F> super::Named for FieldedTypeDefinition<F> {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<F> super::Describable for FieldedTypeDefinition<F> {
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl<F> super::Directible for FieldedTypeDefinition<F> {
    fn directives(&self) -> Option<&NameIndex<DirectiveAnnotation>> {
        self.directives.as_ref()
    }
}

impl<F> super::SchemaTypeDefinition for FieldedTypeDefinition<F> {
    fn is_extended(&self) -> bool {
        self.is_extended
    }
}
