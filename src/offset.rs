//! Limit/offset pagination.
//!
//! Pages are addressed by `limit` and `offset` query parameters, and every
//! page reports the total `count` of matching records. Costs one `count` and
//! one `fetch` per request.

use record_source::{Query, RecordSource};
use tracing::{debug, trace};

use crate::config::PaginationConfig;
use crate::error::{Error, Result};
use crate::links::LinkBuilder;
use crate::paginated::Paginated;
use crate::paginator::Paginator;
use crate::params::{LIMIT_PARAM, OFFSET_PARAM};
use crate::request::PageRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitOffsetPagination {
   config: PaginationConfig,
}

impl LimitOffsetPagination {
   pub fn new(config: PaginationConfig) -> Result<Self> {
      config.validate()?;
      Ok(Self { config })
   }

   pub fn config(&self) -> &PaginationConfig {
      &self.config
   }
}

impl<T> Paginator<T> for LimitOffsetPagination
where
   T: Send,
{
   async fn paginate<S>(&self, source: &S, request: &PageRequest) -> Result<Paginated<T>>
   where
      S: RecordSource<Record = T>,
   {
      let limit = self.config.resolve_limit(request.param(LIMIT_PARAM));
      let offset = self.config.resolve_offset(request.param(OFFSET_PARAM));

      let filtered = Query::new().filters(request.filters().iter().cloned());
      let page = filtered.clone().offset(offset).limit(limit);
      trace!(?page, "Fetching offset page");

      let count = source.count(&filtered).await.map_err(Error::data_source)?;
      let results = source.fetch(&page).await.map_err(Error::data_source)?;

      debug!(count, offset, limit, rows = results.len(), "Fetched offset page");

      let links = LinkBuilder::new(request);
      let next = offset
         .checked_add(limit)
         .filter(|next_offset| *next_offset < count)
         .map(|next_offset| {
            links.build(&[
               (LIMIT_PARAM, limit.to_string()),
               (OFFSET_PARAM, next_offset.to_string()),
            ])
         });
      let previous = match offset {
         0 => None,
         _ if offset <= limit => Some(links.build(&[(LIMIT_PARAM, limit.to_string())])),
         _ => Some(links.build(&[
            (LIMIT_PARAM, limit.to_string()),
            (OFFSET_PARAM, offset.saturating_sub(limit).to_string()),
         ])),
      };

      Ok(Paginated {
         count: Some(count),
         next,
         previous,
         results,
      })
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn new_validates_config() {
      let err = LimitOffsetPagination::new(PaginationConfig {
         default_page_size: 50,
         max_page_size: 25,
      })
      .unwrap_err();

      assert_eq!(err.error_code(), "INVALID_PAGE_SIZE");
      assert!(LimitOffsetPagination::new(PaginationConfig::default()).is_ok());
   }
}
