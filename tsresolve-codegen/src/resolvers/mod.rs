//! Resolver type mapping.
//!
//! Union variant mappings, the two resolver type tables, the `__isTypeOf`
//! policy and per-type resolver contracts.

pub mod contracts;
pub mod is_type_of;
pub mod signatures;
pub mod tables;
pub mod unions;

pub use contracts::{ContractBuilder, ResolverContract, ResolverEntry, ScalarContract};
pub use is_type_of::requires_is_type_of;
pub use tables::{EntryShape, ResolverTypeEntry, TypeTables};
pub use unions::{UnionMappings, UnionVariantMapping};
