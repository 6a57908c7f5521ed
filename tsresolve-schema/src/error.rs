//! Error types for schema ingestion and validation.

use thiserror::Error;

/// Error type for SDL ingestion.
#[derive(Debug, Error)]
pub enum ParseError {
    /// GraphQL syntax error.
    #[error("GraphQL syntax error: {0}")]
    Graphql(#[from] async_graphql_parser::Error),

    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (type, schema, etc.).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Extension of a type that was never defined.
    #[error("cannot extend unknown type '{name}'")]
    UnknownExtension {
        /// Name of the extended type.
        name: String,
    },

    /// Extension whose kind differs from the extended definition.
    #[error("extension of '{name}' is a {found} but the type is a {expected}")]
    ExtensionKindMismatch {
        /// Name of the extended type.
        name: String,
        /// Kind of the original definition.
        expected: String,
        /// Kind of the extension.
        found: String,
    },

    /// Invalid schema structure.
    #[error("invalid schema structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for schema validation.
///
/// Every variant is a precondition violation: the generator refuses to emit
/// anything for a schema that produces one.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Reference to a type that is not defined.
    #[error("type '{name}' referenced by '{referenced_by}' not found")]
    TypeNotFound {
        /// Missing type name.
        name: String,
        /// Coordinate of the reference (`Type.field`, `Type.field(arg)`, ...).
        referenced_by: String,
    },

    /// Union without members.
    #[error("union '{name}' has no members")]
    EmptyUnion {
        /// Union name.
        name: String,
    },

    /// Union member that is not an object type.
    #[error("union '{union}' member '{member}' is a {kind}, expected an object type")]
    InvalidUnionMember {
        /// Union name.
        union: String,
        /// Member name.
        member: String,
        /// Actual kind of the member.
        kind: String,
    },

    /// Implemented type that is not an interface.
    #[error("type '{type_name}' implements '{interface}', which is not an interface")]
    InvalidImplements {
        /// Implementing type.
        type_name: String,
        /// Implemented type.
        interface: String,
    },

    /// Two fields or values with the same name on one type.
    #[error("duplicate {kind} '{name}' on type '{type_name}'")]
    DuplicateMember {
        /// Owning type.
        type_name: String,
        /// Kind of member (field, argument, value).
        kind: String,
        /// Member name.
        name: String,
    },

    /// Root operation type that is missing or not an object type.
    #[error("{operation} root type '{name}' must be a defined object type")]
    InvalidRootType {
        /// Operation (query, mutation, subscription).
        operation: String,
        /// Declared root type name.
        name: String,
    },

    /// Validation error.
    #[error("validation error: {message}")]
    Validation {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}

impl SchemaError {
    /// Creates a type not found error.
    pub fn type_not_found(name: impl Into<String>, referenced_by: impl Into<String>) -> Self {
        Self::TypeNotFound {
            name: name.into(),
            referenced_by: referenced_by.into(),
        }
    }

    /// Creates a duplicate member error.
    pub fn duplicate_member(
        type_name: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::DuplicateMember {
            type_name: type_name.into(),
            kind: kind.into(),
            name: name.into(),
        }
    }
}
