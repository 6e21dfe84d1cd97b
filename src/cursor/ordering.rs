//! Ordering resolution for keyset traversal.

use record_source::{FieldValue, OrderBy, Predicate, SortDirection};

use super::codec::Direction;
use crate::error::{Error, Result};

/// The single field a cursor paginator orders by.
///
/// Parsed from strings like `"id"` or `"-createdAt"`; a leading `-` makes the
/// logical order descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderingSpec {
   field: String,
   descending_by_default: bool,
}

impl OrderingSpec {
   pub fn new(field: impl Into<String>, descending_by_default: bool) -> Self {
      Self {
         field: field.into(),
         descending_by_default,
      }
   }

   /// Parse an ordering matching `^-?[A-Za-z]+$`.
   pub fn parse(ordering: &str) -> Result<Self> {
      let (field, descending) = match ordering.strip_prefix('-') {
         Some(field) => (field, true),
         None => (ordering, false),
      };

      if field.is_empty() || !field.chars().all(|ch| ch.is_ascii_alphabetic()) {
         return Err(Error::InvalidOrdering {
            ordering: ordering.to_string(),
         });
      }

      Ok(Self::new(field, descending))
   }

   pub fn field(&self) -> &str {
      &self.field
   }

   pub fn is_descending_by_default(&self) -> bool {
      self.descending_by_default
   }

   /// The sort the source must apply: the logical order, flipped when
   /// traversing backward.
   pub fn physical_direction(&self, direction: Direction) -> SortDirection {
      let logical = if self.descending_by_default {
         SortDirection::Desc
      } else {
         SortDirection::Asc
      };

      if direction.is_backward() {
         logical.reversed()
      } else {
         logical
      }
   }

   pub fn order_by(&self, direction: Direction) -> OrderBy {
      OrderBy::new(&self.field, self.physical_direction(direction))
   }

   /// Predicate that seeks past `anchor` in the physical sort direction.
   pub fn keyset_predicate(
      &self,
      direction: Direction,
      anchor: Option<FieldValue>,
   ) -> Option<Predicate> {
      let anchor = anchor?;
      Some(match self.physical_direction(direction) {
         SortDirection::Desc => Predicate::lt(&self.field, anchor),
         SortDirection::Asc => Predicate::gt(&self.field, anchor),
      })
   }
}
