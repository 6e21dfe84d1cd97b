//! Error types for record-source

use thiserror::Error;

use crate::value::FieldKind;

/// Errors that may occur when querying a record source
#[derive(Error, Debug)]
pub enum Error {
   /// Source has been closed and cannot be used
   #[error("Record source has been closed")]
   SourceClosed,

   /// A predicate or ordering refers to a field the source does not know
   #[error("Field '{field}' is not registered on this record source")]
   UnknownField { field: String },

   /// A predicate literal does not have the kind of the field it filters
   #[error("Field '{field}' holds {expected} values but was compared against a {actual} value")]
   KindMismatch {
      field: String,
      expected: FieldKind,
      actual: FieldKind,
   },
}

/// A type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
