use std::future::Future;

use record_source::RecordSource;

use crate::error::Result;
use crate::paginated::Paginated;
use crate::request::PageRequest;

/// A pagination strategy.
///
/// Implementations are immutable once built and answer any number of
/// concurrent requests. Each call reads the request, queries `source` and
/// returns one page with its navigation links.
pub trait Paginator<T>: Send + Sync {
   fn paginate<S>(
      &self,
      source: &S,
      request: &PageRequest,
   ) -> impl Future<Output = Result<Paginated<T>>> + Send
   where
      S: RecordSource<Record = T>;
}
