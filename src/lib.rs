//! # drf-pagination
//!
//! Cursor (keyset) and limit/offset pagination that answers requests with a
//! `{count, next, previous, results}` envelope and absolute navigation links.
//!
//! ## Strategies
//!
//! - **[`CursorPagination`]**: opaque `cursor` tokens anchored on one ordering
//!   field. Constant cost per page, no `count`.
//! - **[`LimitOffsetPagination`]**: `limit`/`offset` parameters with a total
//!   `count`.
//!
//! Both implement [`Paginator`] and read their records from any
//! [`RecordSource`]. [`MemorySource`] is a ready-made in-memory source.
//!
//! ## Filtering
//!
//! [`EqualityFilters`] turns query parameters named after record fields into
//! equality filters. Attach them with [`PageRequest::with_filters`] and they
//! are applied to the source and carried into every link.
//!
//! ## Tracing
//!
//! This crate uses the `tracing` crate for internal logging. Logging is
//! compiled out in release builds (`release_max_level_off`).

mod config;
pub mod cursor;
mod error;
mod filter;
mod links;
mod offset;
mod paginated;
mod paginator;
mod params;
mod request;

pub use config::{DEFAULT_ORDERING, PaginationConfig};
pub use cursor::{CursorPagination, CursorToken, Direction};
pub use error::{Error, Result};
pub use filter::{AppliedFilters, EqualityFilters};
pub use offset::LimitOffsetPagination;
pub use paginated::Paginated;
pub use paginator::Paginator;
pub use params::{CURSOR_PARAM, LIMIT_PARAM, OFFSET_PARAM, QueryParams, RESERVED_PARAMS};
pub use request::PageRequest;

// Re-export the data-source vocabulary so callers need a single dependency
pub use record_source::{
   Comparison, Field, FieldKind, FieldValue, Fields, IntoFieldValue, MemorySource, OrderBy,
   Predicate, Query, RecordSource, SortDirection,
};
