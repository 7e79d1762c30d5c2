//! The two closed vocabularies of directive locations

use std::fmt;
use std::str::FromStr;

use crate::error::SchemaError;

/// Locations in executable documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(non_camel_case_types)]
pub enum ExecutableDirectiveLocation {
    QUERY,
    MUTATION,
    SUBSCRIPTION,
    FIELD,
    FRAGMENT_DEFINITION,
    FRAGMENT_SPREAD,
    INLINE_FRAGMENT,
}

/// Locations in type system documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(non_camel_case_types)]
pub enum TypeSystemDirectiveLocation {
    SCHEMA,
    SCALAR,
    OBJECT,
    FIELD_DEFINITION,
    ARGUMENT_DEFINITION,
    INTERFACE,
    UNION,
    ENUM,
    ENUM_VALUE,
    INPUT_OBJECT,
    INPUT_FIELD_DEFINITION,
}

impl ExecutableDirectiveLocation {
    pub const ALL: [Self; 7] = [
        Self::QUERY,
        Self::MUTATION,
        Self::SUBSCRIPTION,
        Self::FIELD,
        Self::FRAGMENT_DEFINITION,
        Self::FRAGMENT_SPREAD,
        Self::INLINE_FRAGMENT,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::QUERY => "QUERY",
            Self::MUTATION => "MUTATION",
            Self::SUBSCRIPTION => "SUBSCRIPTION",
            Self::FIELD => "FIELD",
            Self::FRAGMENT_DEFINITION => "FRAGMENT_DEFINITION",
            Self::FRAGMENT_SPREAD => "FRAGMENT_SPREAD",
            Self::INLINE_FRAGMENT => "INLINE_FRAGMENT",
        }
    }
}

impl TypeSystemDirectiveLocation {
    pub const ALL: [Self; 11] = [
        Self::SCHEMA,
        Self::SCALAR,
        Self::OBJECT,
        Self::FIELD_DEFINITION,
        Self::ARGUMENT_DEFINITION,
        Self::INTERFACE,
        Self::UNION,
        Self::ENUM,
        Self::ENUM_VALUE,
        Self::INPUT_OBJECT,
        Self::INPUT_FIELD_DEFINITION,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SCHEMA => "SCHEMA",
            Self::SCALAR => "SCALAR",
            Self::OBJECT => "OBJECT",
            Self::FIELD_DEFINITION => "FIELD_DEFINITION",
            Self::ARGUMENT_DEFINITION => "ARGUMENT_DEFINITION",
            Self::INTERFACE => "INTERFACE",
            Self::UNION => "UNION",
            Self::ENUM => "ENUM",
            Self::ENUM_VALUE => "ENUM_VALUE",
            Self::INPUT_OBJECT => "INPUT_OBJECT",
            Self::INPUT_FIELD_DEFINITION => "INPUT_FIELD_DEFINITION",
        }
    }
}

/// A location a directive may be applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum DirectiveLocation {
    Executable(ExecutableDirectiveLocation),
    TypeSystem(TypeSystemDirectiveLocation),
}

impl DirectiveLocation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Executable(location) => location.as_str(),
            Self::TypeSystem(location) => location.as_str(),
        }
    }

    pub fn is_executable(self) -> bool {
        matches!(self, Self::Executable(_))
    }
}

impl FromStr for DirectiveLocation {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(location) = ExecutableDirectiveLocation::ALL.into_iter().find(|l| l.as_str() == s) {
            return Ok(Self::Executable(location));
        }
        TypeSystemDirectiveLocation::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .map(Self::TypeSystem)
            .ok_or_else(|| SchemaError::invalid_location(s))
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
