//! GraphQL to Java type mapping.
//!
//! - [`scalars`]: built-in and common scalar tables, primitive/boxed pairs
//! - [`collections`]: collection shapes and the `Optional` wrapper
//! - [`TypeMapper`]: resolves a [`TypeReference`](gqlbridge_core::TypeReference)
//!   to a Java type string plus the imports it needs

pub mod collections;
mod mapper;
pub mod scalars;

pub use collections::CollectionShape;
pub use mapper::{MappingResult, TypeMapper};
pub use scalars::JavaScalar;
