//! The asynchronous data-source abstraction

use std::future::Future;

use crate::query::Query;

/// An orderable, filterable collection of typed records.
///
/// Implementations translate a [`Query`] into whatever their backing store
/// understands and materialize the matching records in memory. Each call is
/// independent; a source is shared read-only between concurrent requests.
pub trait RecordSource: Send + Sync {
   /// The record type this source yields.
   type Record: Send;

   /// Failure raised by the backing store.
   type Error: std::error::Error + Send + Sync + 'static;

   /// Materialize the records selected by `query`, in query order.
   fn fetch(
      &self,
      query: &Query,
   ) -> impl Future<Output = Result<Vec<Self::Record>, Self::Error>> + Send;

   /// Count the records matching the query's predicates.
   ///
   /// Ordering, offset and limit are ignored.
   fn count(&self, query: &Query) -> impl Future<Output = Result<usize, Self::Error>> + Send;
}
