/// Result type alias for pagination operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for pagination.
///
/// Configuration problems (`InvalidOrdering`, `InvalidPageSize`,
/// `FieldNotFound`) are raised when a paginator is constructed. The remaining
/// variants surface per request. A malformed cursor is never an error: it
/// silently resets navigation to the first page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
   /// Ordering does not match `^-?[A-Za-z]+$`.
   #[error("the ordering '{ordering}' does not match the pattern: ^-?[A-Za-z]+$")]
   InvalidOrdering { ordering: String },

   /// Page sizes must be positive and the default must not exceed the maximum.
   #[error(
      "invalid page sizes: default {default} and max {max} must be greater than zero with default <= max"
   )]
   InvalidPageSize { default: usize, max: usize },

   /// Ordering field is not registered for the record type.
   #[error("the record type does not have field '{field}'")]
   FieldNotFound { field: String },

   /// A fetched record holds no value for the ordering field.
   #[error("there is no value in '{field}'; cursor pagination requires one on every record")]
   FieldValueMissing { field: String },

   /// The boundary position is shared by every visible record.
   ///
   /// Keyset navigation cannot move past a value that fills the whole page
   /// without a secondary ordering key.
   #[error("the position '{position}' is shared by every record in the page")]
   PositionCollision { position: String },

   /// Base URL of the request could not be parsed.
   #[error("invalid url: {0}")]
   InvalidUrl(#[from] url::ParseError),

   /// Error returned by the record source, passed through unchanged.
   #[error(transparent)]
   DataSource(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
   /// Wrap a record source failure.
   pub fn data_source(error: impl std::error::Error + Send + Sync + 'static) -> Self {
      Error::DataSource(Box::new(error))
   }

   /// Extract a structured error code from the error type.
   ///
   /// This provides machine-readable error codes for error handling.
   pub fn error_code(&self) -> String {
      match self {
         Error::InvalidOrdering { .. } => "INVALID_ORDERING".to_string(),
         Error::InvalidPageSize { .. } => "INVALID_PAGE_SIZE".to_string(),
         Error::FieldNotFound { .. } => "FIELD_NOT_FOUND".to_string(),
         Error::FieldValueMissing { .. } => "FIELD_VALUE_MISSING".to_string(),
         Error::PositionCollision { .. } => "POSITION_COLLISION".to_string(),
         Error::InvalidUrl(_) => "INVALID_URL".to_string(),
         Error::DataSource(_) => "DATA_SOURCE_ERROR".to_string(),
      }
   }
}
