//! Configuration for paginators

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Ordering used when an application does not choose one.
pub const DEFAULT_ORDERING: &str = "id";

/// Page size configuration shared by every pagination strategy.
///
/// # Examples
///
/// ```
/// use drf_pagination::PaginationConfig;
///
/// // Use defaults
/// let config = PaginationConfig::default();
/// assert_eq!(config.default_page_size, 10);
///
/// // Override just one field
/// let config = PaginationConfig {
///    max_page_size: 100,
///    ..Default::default()
/// };
/// assert_eq!(config.resolve_limit(Some("250")), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaginationConfig {
   /// Page size used when the request carries no usable `limit`
   ///
   /// Default: 10
   pub default_page_size: usize,

   /// Upper bound a requested `limit` is clamped to
   ///
   /// Default: 25
   pub max_page_size: usize,
}

impl Default for PaginationConfig {
   fn default() -> Self {
      Self {
         default_page_size: 10,
         max_page_size: 25,
      }
   }
}

impl PaginationConfig {
   /// Check that both sizes are positive and the default fits under the max.
   pub fn validate(&self) -> Result<()> {
      if self.default_page_size == 0
         || self.max_page_size == 0
         || self.default_page_size > self.max_page_size
      {
         return Err(Error::InvalidPageSize {
            default: self.default_page_size,
            max: self.max_page_size,
         });
      }
      Ok(())
   }

   /// Resolve the raw `limit` query parameter into a page size.
   ///
   /// A positive integer is clamped to `max_page_size`. Anything else, including
   /// a missing parameter, falls back to `default_page_size`.
   pub fn resolve_limit(&self, raw: Option<&str>) -> usize {
      let limit = match raw.and_then(parse_positive) {
         Some(requested) => requested.min(self.max_page_size),
         None => self.default_page_size,
      };
      debug!(requested = ?raw, limit, "Resolved page size");
      limit
   }

   /// Resolve the raw `offset` query parameter. Anything but a positive
   /// integer means zero.
   pub fn resolve_offset(&self, raw: Option<&str>) -> usize {
      raw.and_then(parse_positive).unwrap_or(0)
   }
}

fn parse_positive(raw: &str) -> Option<usize> {
   raw.trim().parse::<usize>().ok().filter(|value| *value > 0)
}
