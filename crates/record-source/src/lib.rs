//! # record-source
//!
//! The data-source side of keyset pagination: a small vocabulary for
//! describing "order these records by one field, filter them, skip and take"
//! and an asynchronous trait for executing it.
//!
//! ## Core Types
//!
//! - **[`FieldValue`]** / **[`FieldKind`]**: typed, comparable values with a
//!   canonical string form
//! - **[`Field`]** / **[`Fields`]**: explicit, named accessors for a record type
//! - **[`Query`]**: predicates, ordering, offset and limit for one fetch
//! - **[`RecordSource`]**: the asynchronous collaborator that executes queries
//! - **[`MemorySource`]**: a `Vec`-backed source for tests and small datasets
//! - **[`Error`]**: errors raised by [`MemorySource`]

mod error;
mod field;
mod memory;
mod query;
mod source;
mod value;

// Re-export public types
pub use error::{Error, Result};
pub use field::{Field, Fields};
pub use memory::MemorySource;
pub use query::{Comparison, OrderBy, Predicate, Query, SortDirection};
pub use source::RecordSource;
pub use value::{FieldKind, FieldValue, IntoFieldValue};
