//! Query descriptions handed to a [`RecordSource`](crate::RecordSource)

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

/// Sort direction for the ordering field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
   /// Ascending order (smallest first)
   Asc,
   /// Descending order (largest first)
   Desc,
}

impl SortDirection {
   /// Return the opposite sort direction.
   pub fn reversed(self) -> Self {
      match self {
         SortDirection::Asc => SortDirection::Desc,
         SortDirection::Desc => SortDirection::Asc,
      }
   }
}

impl fmt::Display for SortDirection {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match self {
         SortDirection::Asc => write!(f, "asc"),
         SortDirection::Desc => write!(f, "desc"),
      }
   }
}

/// Comparison operator of a [`Predicate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparison {
   /// Equal to (=)
   Equal,
   /// Less than (<)
   LessThan,
   /// Greater than (>)
   GreaterThan,
}

impl Comparison {
   /// Whether a record value ordered `ordering` relative to the predicate
   /// literal satisfies this comparison.
   pub fn accepts(self, ordering: Ordering) -> bool {
      match self {
         Comparison::Equal => ordering == Ordering::Equal,
         Comparison::LessThan => ordering == Ordering::Less,
         Comparison::GreaterThan => ordering == Ordering::Greater,
      }
   }
}

impl fmt::Display for Comparison {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match self {
         Comparison::Equal => write!(f, "="),
         Comparison::LessThan => write!(f, "<"),
         Comparison::GreaterThan => write!(f, ">"),
      }
   }
}

/// A single-field filter: `field <comparison> value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
   pub field: String,
   pub comparison: Comparison,
   pub value: FieldValue,
}

impl Predicate {
   pub fn new(field: impl Into<String>, comparison: Comparison, value: FieldValue) -> Self {
      Self {
         field: field.into(),
         comparison,
         value,
      }
   }

   pub fn eq(field: impl Into<String>, value: FieldValue) -> Self {
      Self::new(field, Comparison::Equal, value)
   }

   pub fn lt(field: impl Into<String>, value: FieldValue) -> Self {
      Self::new(field, Comparison::LessThan, value)
   }

   pub fn gt(field: impl Into<String>, value: FieldValue) -> Self {
      Self::new(field, Comparison::GreaterThan, value)
   }
}

impl fmt::Display for Predicate {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{} {} {}", self.field, self.comparison, self.value)
   }
}

/// The field a query is ordered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
   /// Field name as registered on the source
   pub field: String,
   pub direction: SortDirection,
}

impl OrderBy {
   pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
      Self {
         field: field.into(),
         direction,
      }
   }

   pub fn asc(field: impl Into<String>) -> Self {
      Self::new(field, SortDirection::Asc)
   }

   pub fn desc(field: impl Into<String>) -> Self {
      Self::new(field, SortDirection::Desc)
   }
}

/// Everything a source needs to materialize one window of records.
///
/// Predicates are combined with AND. Without `order_by` the source returns
/// records in its natural order.
///
/// # Example
///
/// ```
/// use record_source::{FieldValue, OrderBy, Predicate, Query};
///
/// let query = Query::new()
///    .filter(Predicate::eq("robot", FieldValue::Boolean(true)))
///    .filter(Predicate::gt("id", FieldValue::Integer(10)))
///    .order_by(OrderBy::asc("id"))
///    .limit(11);
///
/// assert_eq!(query.predicates.len(), 2);
/// assert_eq!(query.limit, Some(11));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
   pub predicates: Vec<Predicate>,
   pub order_by: Option<OrderBy>,
   /// Number of matching records to skip
   pub offset: usize,
   /// Maximum number of records to return, unbounded when `None`
   pub limit: Option<usize>,
}

impl Query {
   pub fn new() -> Self {
      Self::default()
   }

   pub fn filter(mut self, predicate: Predicate) -> Self {
      self.predicates.push(predicate);
      self
   }

   pub fn filters(mut self, predicates: impl IntoIterator<Item = Predicate>) -> Self {
      self.predicates.extend(predicates);
      self
   }

   pub fn order_by(mut self, order_by: OrderBy) -> Self {
      self.order_by = Some(order_by);
      self
   }

   pub fn offset(mut self, offset: usize) -> Self {
      self.offset = offset;
      self
   }

   pub fn limit(mut self, limit: usize) -> Self {
      self.limit = Some(limit);
      self
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn sort_direction_reversed() {
      assert_eq!(SortDirection::Asc.reversed(), SortDirection::Desc);
      assert_eq!(SortDirection::Desc.reversed(), SortDirection::Asc);
   }

   #[test]
   fn comparison_accepts() {
      assert!(Comparison::LessThan.accepts(Ordering::Less));
      assert!(!Comparison::LessThan.accepts(Ordering::Equal));
      assert!(Comparison::GreaterThan.accepts(Ordering::Greater));
      assert!(Comparison::Equal.accepts(Ordering::Equal));
      assert!(!Comparison::Equal.accepts(Ordering::Greater));
   }

   #[test]
   fn predicate_display() {
      let predicate = Predicate::lt("id", FieldValue::Integer(51));
      assert_eq!(predicate.to_string(), "id < 51");
   }

   #[test]
   fn builder_accumulates() {
      let query = Query::new()
         .filters([Predicate::eq("name", FieldValue::Text("a".into()))])
         .order_by(OrderBy::desc("id"))
         .offset(20)
         .limit(10);

      assert_eq!(query.predicates.len(), 1);
      assert_eq!(query.order_by, Some(OrderBy::desc("id")));
      assert_eq!(query.offset, 20);
      assert_eq!(query.limit, Some(10));
   }
}
