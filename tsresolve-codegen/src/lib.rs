//! # tsresolve Codegen
//!
//! TypeScript resolver type generation from GraphQL schemas.
//!
//! This crate provides:
//! - Union variant mappings (`ResolversUnionTypes`)
//! - Resolver-facing and storage-facing type tables (`ResolversTypes`,
//!   `ResolversParentTypes`)
//! - The `__isTypeOf` policy and per-type resolver contracts
//! - Base TypeScript types for the schema and the rendered document

pub mod error;
pub mod generator;
pub mod resolvers;
pub mod typescript;

pub use error::CodegenError;
pub use generator::{Generator, ResolverDescriptors};

use tsresolve_core::CodegenConfig;
use tsresolve_schema::{Schema, SchemaIr};

/// Generates TypeScript resolver types from a schema graph.
///
/// The schema is validated first; an invalid schema produces no output.
///
/// # Arguments
/// * `schema` - Schema graph
/// * `config` - Generator configuration
///
/// # Returns
/// Generated TypeScript source as a string.
///
/// # Errors
/// Returns `CodegenError` if validation or generation fails.
pub fn generate(schema: &Schema, config: &CodegenConfig) -> Result<String, CodegenError> {
    tsresolve_schema::validate_schema(schema)?;
    let ir = SchemaIr::from_schema(schema);
    tracing::debug!("Resolved {} schema types", ir.types.len());
    Generator::new(&ir, config).generate()
}

/// Generates TypeScript resolver types from GraphQL SDL.
///
/// # Arguments
/// * `sdl` - GraphQL schema definition language source
/// * `config` - Generator configuration
///
/// # Errors
/// Returns `CodegenError` if parsing, validation, or generation fails.
pub fn generate_from_sdl(sdl: &str, config: &CodegenConfig) -> Result<String, CodegenError> {
    let schema = tsresolve_schema::parse_schema(sdl)?;
    generate(&schema, config)
}

/// Generates TypeScript resolver types from a GraphQL SDL file.
///
/// # Arguments
/// * `path` - Path to the schema file
/// * `config` - Generator configuration
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, validation, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &CodegenConfig,
) -> Result<String, CodegenError> {
    let sdl = std::fs::read_to_string(path)?;
    generate_from_sdl(&sdl, config)
}
