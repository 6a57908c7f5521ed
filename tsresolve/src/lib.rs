//! # tsresolve
//!
//! TypeScript resolver type generation for GraphQL schemas.
//!
//! Given a GraphQL schema, tsresolve derives how every schema type is seen
//! by resolvers and renders it as TypeScript declarations:
//!
//! - **`ResolversUnionTypes`** - ordered, de-duplicated variants per union
//! - **`ResolversTypes` / `ResolversParentTypes`** - resolver-facing and
//!   storage-facing representation of every type, with identical keys
//! - **Resolver contracts** - one `<Type>Resolvers` per object, interface
//!   and union, with `__isTypeOf` declared according to
//!   `generateInternalResolversIfNeeded.__isTypeOf`
//!
//! ## Quick Start
//!
//! ```no_run
//! use tsresolve::prelude::*;
//!
//! let sdl = r#"
//!     type Query { user(id: ID!): UserPayload! }
//!     type User { id: ID! }
//!     type StandardError { error: String! }
//!     union UserPayload = User | StandardError
//! "#;
//!
//! let config = CodegenConfig::default().with_is_type_of_if_needed(true);
//! let output = generate_from_sdl(sdl, &config)?;
//! println!("{output}");
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Configuration, scalar representations, wrapping rules
//! - [`schema`] - Schema graph, SDL parsing, validation, resolved IR
//! - [`codegen`] - Union mappings, type tables, contracts, rendering

pub mod prelude;

/// Configuration and scalar representation rules.
pub mod core {
    pub use tsresolve_core::*;
}

/// Schema graph, parsing and validation.
pub mod schema {
    pub use tsresolve_schema::*;
}

/// Resolver type generation.
pub mod codegen {
    pub use tsresolve_codegen::*;
}

// Re-export commonly used items at the crate root
pub use tsresolve_codegen::{
    CodegenError, Generator, ResolverDescriptors, generate, generate_from_file, generate_from_sdl,
};
pub use tsresolve_core::CodegenConfig;
pub use tsresolve_schema::{Schema, SchemaIr, parse_schema};
