//! # tsresolve Schema
//!
//! GraphQL schema graph and the read-only views derived from it.
//!
//! This crate provides:
//! - Type definitions for schema elements (objects, interfaces, unions,
//!   enums, scalars, input objects)
//! - GraphQL SDL ingestion
//! - Precondition checks run before any code is generated
//! - Intermediate representation for code generation

pub mod error;
pub mod ir;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{ResolvedType, RootOperation, SchemaIr, TypeOrigin};
pub use parser::parse_schema;
pub use types::{
    EnumDef, EnumValueDef, FieldDef, InputObjectDef, InputValueDef, InterfaceDef, NamedType,
    ObjectDef, ScalarDef, Schema, TypeKind, TypeRef, UnionDef,
};
pub use validation::validate_schema;
