//! Previous/next link construction.
//!
//! Both directions share one routine. The window's first row bounds the
//! `previous` link and its last row bounds `next`; what changes with the
//! direction is which reference position each boundary is checked against.
//! A boundary row whose position equals its reference is skipped, and a page
//! made only of such rows is a [`Error::PositionCollision`].

use tracing::warn;

use super::codec::{self, CursorToken, Direction};
use super::position::PositionExtractor;
use super::window::PageWindow;
use crate::error::{Error, Result};
use crate::links::LinkBuilder;
use crate::params::{CURSOR_PARAM, LIMIT_PARAM};

/// Rendered `previous` and `next` links of a cursor page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationLinks {
   pub previous: Option<String>,
   pub next: Option<String>,
}

#[derive(Debug, Clone, Copy)]
enum Scan {
   FromStart,
   FromEnd,
}

pub(crate) fn build<T>(
   token: &CursorToken,
   window: &PageWindow<T>,
   extractor: &PositionExtractor<T>,
   limit: usize,
   links: &LinkBuilder<'_>,
) -> Result<NavigationLinks> {
   let following = window
      .following_position
      .as_deref()
      .filter(|_| window.has_more);
   let current = token.position.as_deref();

   let (previous_reference, next_reference) = match token.direction {
      Direction::Forward => (current, following),
      Direction::Backward => (following, current),
   };

   let previous = boundary_position(&window.rows, extractor, previous_reference, Scan::FromStart)?;
   let next = boundary_position(&window.rows, extractor, next_reference, Scan::FromEnd)?;

   let render = |token: CursorToken| {
      links.build(&[
         (CURSOR_PARAM, codec::encode(&token)),
         (LIMIT_PARAM, limit.to_string()),
      ])
   };

   Ok(NavigationLinks {
      previous: previous.map(|position| render(CursorToken::backward(position))),
      next: next.map(|position| render(CursorToken::forward(position))),
   })
}

/// First position, scanning from one end, that differs from `reference`.
fn boundary_position<T>(
   rows: &[T],
   extractor: &PositionExtractor<T>,
   reference: Option<&str>,
   scan: Scan,
) -> Result<Option<String>> {
   let Some(reference) = reference else {
      return Ok(None);
   };
   if rows.is_empty() {
      return Ok(None);
   }

   let found = match scan {
      Scan::FromStart => first_different(rows.iter(), extractor, reference)?,
      Scan::FromEnd => first_different(rows.iter().rev(), extractor, reference)?,
   };

   match found {
      Some(position) => Ok(Some(position)),
      None => {
         warn!(
            field = %extractor.field_name(),
            position = %reference,
            rows = rows.len(),
            "Every record in the page shares the boundary position"
         );
         Err(Error::PositionCollision {
            position: reference.to_string(),
         })
      }
   }
}

fn first_different<'a, T: 'a>(
   rows: impl Iterator<Item = &'a T>,
   extractor: &PositionExtractor<T>,
   reference: &str,
) -> Result<Option<String>> {
   for row in rows {
      let position = extractor.extract(row)?;
      if position != reference {
         return Ok(Some(position));
      }
   }
   Ok(None)
}
