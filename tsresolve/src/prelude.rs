//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use tsresolve::prelude::*;
//! ```

// Configuration
pub use tsresolve_core::{CodegenConfig, ConfigError, ScalarOverride};

// Schema types
pub use tsresolve_schema::{
    NamedType, ParseError, Schema, SchemaError, SchemaIr, TypeKind, TypeRef, parse_schema,
    validate_schema,
};

// Generation
pub use tsresolve_codegen::resolvers::{
    ResolverContract, TypeTables, UnionMappings, UnionVariantMapping, requires_is_type_of,
};
pub use tsresolve_codegen::{
    CodegenError, Generator, ResolverDescriptors, generate, generate_from_file, generate_from_sdl,
};
