use record_source::{Predicate, Query, RecordSource};
use tracing::{debug, trace};

use super::codec::CursorToken;
use super::ordering::OrderingSpec;
use super::position::PositionExtractor;
use crate::error::{Error, Result};

/// One page of records in logical order, plus what the lookahead row told us.
#[derive(Debug, Clone)]
pub struct PageWindow<T> {
   pub rows: Vec<T>,
   /// A row beyond `limit` exists in the traversal direction
   pub has_more: bool,
   /// Position of that row, when it exists
   pub following_position: Option<String>,
}

/// Fetch `limit` rows past the token's anchor with a single `limit + 1` query.
pub async fn fetch<S>(
   source: &S,
   filters: &[Predicate],
   ordering: &OrderingSpec,
   extractor: &PositionExtractor<S::Record>,
   token: &CursorToken,
   limit: usize,
) -> Result<PageWindow<S::Record>>
where
   S: RecordSource,
{
   let anchor = token
      .position
      .as_deref()
      .and_then(|position| extractor.parse(position));

   let mut query = Query::new()
      .filters(filters.iter().cloned())
      .order_by(ordering.order_by(token.direction))
      .limit(limit.saturating_add(1));
   if let Some(predicate) = ordering.keyset_predicate(token.direction, anchor) {
      query = query.filter(predicate);
   }

   trace!(?query, "Fetching cursor window");

   let mut rows = source.fetch(&query).await.map_err(Error::data_source)?;

   let has_more = rows.len() > limit;
   let following_position = match rows.get(limit) {
      Some(lookahead) => Some(extractor.extract(lookahead)?),
      None => None,
   };
   rows.truncate(limit);

   if token.direction.is_backward() {
      rows.reverse();
   }

   debug!(
      direction = ?token.direction,
      rows = rows.len(),
      has_more,
      following = ?following_position,
      "Fetched cursor window"
   );

   Ok(PageWindow {
      rows,
      has_more,
      following_position,
   })
}
