use serde::{Deserialize, Serialize};

/// Response envelope shared by every pagination strategy.
///
/// Serializes to `{"count": …, "next": …, "previous": …, "results": […]}`.
/// `count` is only known to the limit/offset strategy and is `null` for
/// cursor pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
   pub count: Option<usize>,
   pub next: Option<String>,
   pub previous: Option<String>,
   pub results: Vec<T>,
}

impl<T> Paginated<T> {
   /// Transform every result, keeping `count`, `next` and `previous`.
   pub fn map<U>(self, transform: impl FnMut(T) -> U) -> Paginated<U> {
      Paginated {
         count: self.count,
         next: self.next,
         previous: self.previous,
         results: self.results.into_iter().map(transform).collect(),
      }
   }

   pub fn len(&self) -> usize {
      self.results.len()
   }

   pub fn is_empty(&self) -> bool {
      self.results.is_empty()
   }
}
