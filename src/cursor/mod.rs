//! Keyset ("cursor") pagination.
//!
//! Instead of skipping rows with an offset, each page is anchored on the
//! ordering value of a boundary row. The anchor travels inside an opaque
//! `cursor` query parameter, so clients only ever follow `previous` and
//! `next` links.
//!
//! # How It Works
//!
//! 1. The `cursor` parameter is decoded into a [`CursorToken`]. A missing or
//!    malformed cursor means the first page.
//! 2. The source is asked for `limit + 1` rows past the anchor, sorted in the
//!    traversal direction. For backward traversal the sort is reversed so the
//!    source returns rows from the opposite end, and the rows are reversed
//!    again afterwards to restore logical order.
//! 3. The extra row tells whether more data exists in that direction.
//! 4. The first and last rows of the page become the anchors of the
//!    `previous` and `next` links.
//!
//! # Example
//!
//! ```
//! use drf_pagination::{
//!    CursorPagination, Field, Fields, MemorySource, PageRequest, PaginationConfig, Paginator,
//! };
//!
//! #[derive(Debug, Clone)]
//! struct Person {
//!    id: i64,
//! }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let fields = Fields::new().with(Field::required("id", |p: &Person| p.id));
//! let source = MemorySource::with_rows(fields.clone(), (1..=50).map(|id| Person { id }));
//! let pagination = CursorPagination::new(PaginationConfig::default(), "id", &fields)?;
//!
//! let request = PageRequest::from_url("https://example.com/people?limit=10")?;
//! let page = pagination.paginate(&source, &request).await?;
//!
//! assert_eq!(page.results.len(), 10);
//! assert!(page.previous.is_none());
//! assert!(page.next.is_some());
//! # Ok::<(), drf_pagination::Error>(())
//! # }).unwrap();
//! ```

mod codec;
mod navigation;
mod ordering;
mod position;
mod window;

pub use codec::{CursorToken, Direction, decode, encode};
pub use navigation::NavigationLinks;
pub use ordering::OrderingSpec;
pub use position::PositionExtractor;
pub use window::PageWindow;

use record_source::{Fields, RecordSource};
use tracing::debug;

use crate::config::PaginationConfig;
use crate::error::Result;
use crate::links::LinkBuilder;
use crate::paginated::Paginated;
use crate::paginator::Paginator;
use crate::params::{CURSOR_PARAM, LIMIT_PARAM};
use crate::request::PageRequest;

/// Cursor paginator over records of type `T`.
///
/// The ordering field is resolved once, at construction. Pages carry no
/// `count`.
pub struct CursorPagination<T> {
   config: PaginationConfig,
   ordering: OrderingSpec,
   extractor: PositionExtractor<T>,
}

impl<T> CursorPagination<T> {
   /// Build a paginator ordered by `ordering` (`"id"`, `"-createdAt"`, …).
   ///
   /// # Errors
   ///
   /// - [`Error::InvalidPageSize`](crate::Error::InvalidPageSize) for a bad `config`
   /// - [`Error::InvalidOrdering`](crate::Error::InvalidOrdering) when `ordering`
   ///   does not match `^-?[A-Za-z]+$`
   /// - [`Error::FieldNotFound`](crate::Error::FieldNotFound) when no field of
   ///   `fields` has that name
   pub fn new(config: PaginationConfig, ordering: &str, fields: &Fields<T>) -> Result<Self> {
      config.validate()?;
      let parsed = OrderingSpec::parse(ordering)?;
      let extractor = PositionExtractor::new(fields, parsed.field())?;
      let ordering = OrderingSpec::new(extractor.field_name(), parsed.is_descending_by_default());

      debug!(
         field = %ordering.field(),
         descending = ordering.is_descending_by_default(),
         default_page_size = config.default_page_size,
         max_page_size = config.max_page_size,
         "Created cursor pagination"
      );

      Ok(Self {
         config,
         ordering,
         extractor,
      })
   }

   pub fn config(&self) -> &PaginationConfig {
      &self.config
   }

   pub fn ordering(&self) -> &OrderingSpec {
      &self.ordering
   }

   fn token(&self, request: &PageRequest) -> CursorToken {
      let token = request
         .param(CURSOR_PARAM)
         .map(decode)
         .unwrap_or_default();
      self.extractor.normalize(token)
   }
}

impl<T> Paginator<T> for CursorPagination<T>
where
   T: Send,
{
   async fn paginate<S>(&self, source: &S, request: &PageRequest) -> Result<Paginated<T>>
   where
      S: RecordSource<Record = T>,
   {
      let token = self.token(request);
      let limit = self.config.resolve_limit(request.param(LIMIT_PARAM));

      let window = window::fetch(
         source,
         request.filters(),
         &self.ordering,
         &self.extractor,
         &token,
         limit,
      )
      .await?;

      let links = navigation::build(
         &token,
         &window,
         &self.extractor,
         limit,
         &LinkBuilder::new(request),
      )?;

      Ok(Paginated {
         count: None,
         next: links.next,
         previous: links.previous,
         results: window.rows,
      })
   }
}

impl<T> Clone for CursorPagination<T> {
   fn clone(&self) -> Self {
      Self {
         config: self.config,
         ordering: self.ordering.clone(),
         extractor: self.extractor.clone(),
      }
   }
}

impl<T> std::fmt::Debug for CursorPagination<T> {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.debug_struct("CursorPagination")
         .field("config", &self.config)
         .field("ordering", &self.ordering)
         .finish_non_exhaustive()
   }
}
