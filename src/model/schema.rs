//! The aggregate of one extracted document

use super::{
    DirectiveDefinition, EnumDefinition, InputDefinition, InterfaceDefinition, ObjectDefinition,
    ScalarDefinition, UnionDefinition,
};
use crate::base::NameIndex;

/// Everything extracted from one encoded document, one map per entity kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SchemaModel {
    pub objects: NameIndex<ObjectDefinition>,
    pub interfaces: NameIndex<InterfaceDefinition>,
    pub inputs: NameIndex<InputDefinition>,
    pub unions: NameIndex<UnionDefinition>,
    pub enums: NameIndex<EnumDefinition>,
    pub scalars: NameIndex<ScalarDefinition>,
    pub directive_definitions: NameIndex<DirectiveDefinition>,
}

impl SchemaModel {
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
            && self.interfaces.is_empty()
            && self.inputs.is_empty()
            && self.unions.is_empty()
            && self.enums.is_empty()
            && self.scalars.is_empty()
            && self.directive_definitions.is_empty()
    }

    /// Total number of top-level entities
    pub fn len(&self) -> usize {
        self.objects.len()
            + self.interfaces.len()
            + self.inputs.len()
            + self.unions.len()
            + self.enums.len()
            + self.scalars.len()
            + self.directive_definitions.len()
    }
}
