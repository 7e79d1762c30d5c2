//! Leaf records: names, directive annotations, parameters and fields

use super::non_empty;
use crate::base::{NameIndex, non_blank};

/// A bare name, used for weak references such as the interfaces an object implements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedComponent {
    pub name: String,
}

impl NamedComponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One decoded directive usage, e.g. `@deprecated(reason: "old")`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectiveAnnotation {
    pub name: String,
    /// Argument name to argument value, as decoded by the encoder
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub parameters: Option<NameIndex<String>>,
}

impl DirectiveAnnotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: None,
        }
    }

    pub fn with_parameters(mut self, parameters: Option<NameIndex<String>>) -> Self {
        self.parameters = non_empty(parameters);
        self
    }

    /// Add one argument
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters
            .get_or_insert_with(NameIndex::new)
            .insert(name.into(), value.into());
        self
    }
}

/// A directive definition argument: name and declared type
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterComponent {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: String,
}

impl ParameterComponent {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A field argument with its own description and directives
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescribableParameterComponent {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub directives: Option<NameIndex<DirectiveAnnotation>>,
}

impl DescribableParameterComponent {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            description: None,
            directives: None,
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

/// A field of an input type. Input fields never declare arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputFieldDefinition {
    pub name: String,
    /// Declared type, verbatim (`[String!]!`)
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub directives: Option<NameIndex<DirectiveAnnotation>>,
}

impl InputFieldDefinition {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            description: None,
            directives: None,
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

/// A field of an object or interface, which may declare arguments
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterFieldDefinition {
    pub name: String,
    /// Declared type, verbatim (`[String!]!`)
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub directives: Option<NameIndex<DirectiveAnnotation>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub parameters: Option<NameIndex<DescribableParameterComponent>>,
}

impl ParameterFieldDefinition {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            description: None,
            directives: None,
            parameters: None,
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

    pub fn with_parameters(
        mut self,
        parameters: Option<NameIndex<DescribableParameterComponent>>,
    ) -> Self {
        self.parameters = non_empty(parameters);
        self
    }
}

impl_named!(
    NamedComponent,
    DirectiveAnnotation,
    ParameterComponent,
    DescribableParameterComponent,
    InputFieldDefinition,
    ParameterFieldDefinition,
);
impl_describable!(DescribableParameterComponent, InputFieldDefinition, ParameterFieldDefinition);
impl_directible!(DescribableParameterComponent, InputFieldDefinition, ParameterFieldDefinition);
