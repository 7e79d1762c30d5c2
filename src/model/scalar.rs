//! Scalar declarations

use super::{DirectiveAnnotation, non_empty};
use crate::base::{NameIndex, non_blank};

/// A `scalar Name` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScalarDefinition {
    pub name: String,
    pub is_extended: bool,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub directives: Option<NameIndex<DirectiveAnnotation>>,
}

impl ScalarDefinition {
    pub fn new(name: impl Into<String>, is_extended: bool) -> Self {
        Self {
            name: name.into(),
            is_extended,
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

impl_named!(ScalarDefinition);
impl_describable!(ScalarDefinition);
impl_directible!(ScalarDefinition);

impl super::SchemaTypeDefinition for ScalarDefinition {
    fn is_extended(&self) -> bool {
        self.is_extended
    }
}
