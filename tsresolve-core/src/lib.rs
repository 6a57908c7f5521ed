//! # tsresolve Core
//!
//! Shared building blocks for resolver type generation.
//!
//! This crate provides:
//! - The generator configuration object and its JSON loader
//! - Built-in and custom scalar representations
//! - Wrapping rules for resolver-facing and nullable/list types
//! - Error types for configuration handling

pub mod config;
pub mod error;
pub mod scalars;
pub mod wrapper;

pub use config::{CodegenConfig, InternalResolversConfig, ScalarOverride};
pub use error::{ConfigError, Result};
pub use scalars::{BuiltinScalar, ScalarRepr, ScalarTable};
pub use wrapper::WrapperLayer;
