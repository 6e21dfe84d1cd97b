//! In-memory record source

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use tokio::sync::RwLock;
use tracing::trace;

use crate::error::{Error, Result};
use crate::field::{Field, Fields};
use crate::query::{Query, SortDirection};
use crate::source::RecordSource;
use crate::value::FieldValue;

/// A [`RecordSource`] backed by a `Vec` held in memory.
///
/// ## Behavior
///
/// - Predicates are validated against the field registry before any row is
///   read, so a bad query fails even when the source is empty.
/// - A record with no value for a filtered field never matches.
/// - Ordering is stable; records with no value sort first in ascending order.
/// - Once [`close`](MemorySource::close) has been called every operation
///   fails with [`Error::SourceClosed`].
#[derive(Debug)]
pub struct MemorySource<T> {
   rows: RwLock<Vec<T>>,
   fields: Fields<T>,
   closed: AtomicBool,
}

impl<T> MemorySource<T>
where
   T: Clone + Send + Sync,
{
   /// Create an empty source for records described by `fields`.
   pub fn new(fields: Fields<T>) -> Self {
      Self::with_rows(fields, Vec::new())
   }

   /// Create a source pre-populated with `rows`, kept in the given order.
   pub fn with_rows(fields: Fields<T>, rows: impl IntoIterator<Item = T>) -> Self {
      Self {
         rows: RwLock::new(rows.into_iter().collect()),
         fields,
         closed: AtomicBool::new(false),
      }
   }

   pub fn fields(&self) -> &Fields<T> {
      &self.fields
   }

   /// Append one record.
   pub async fn insert(&self, row: T) -> Result<()> {
      self.ensure_open()?;
      self.rows.write().await.push(row);
      Ok(())
   }

   /// Append several records, keeping their order.
   pub async fn extend(&self, rows: impl IntoIterator<Item = T>) -> Result<()> {
      self.ensure_open()?;
      self.rows.write().await.extend(rows);
      Ok(())
   }

   /// Number of stored records.
   pub async fn len(&self) -> usize {
      self.rows.read().await.len()
   }

   pub async fn is_empty(&self) -> bool {
      self.rows.read().await.is_empty()
   }

   /// Mark the source as closed. Later operations fail with `SourceClosed`.
   pub fn close(&self) {
      self.closed.store(true, AtomicOrdering::SeqCst);
   }

   pub fn is_closed(&self) -> bool {
      self.closed.load(AtomicOrdering::SeqCst)
   }

   fn ensure_open(&self) -> Result<()> {
      if self.is_closed() {
         return Err(Error::SourceClosed);
      }
      Ok(())
   }

   fn resolve(&self, name: &str) -> Result<&Field<T>> {
      self.fields.get(name).ok_or_else(|| Error::UnknownField {
         field: name.to_string(),
      })
   }

   /// Filter and order `rows` according to `query`, ignoring offset and limit.
   fn select<'a>(&self, rows: &'a [T], query: &Query) -> Result<Vec<&'a T>> {
      let mut checks = Vec::with_capacity(query.predicates.len());
      for predicate in &query.predicates {
         let field = self.resolve(&predicate.field)?;
         if field.kind() != predicate.value.kind() {
            return Err(Error::KindMismatch {
               field: predicate.field.clone(),
               expected: field.kind(),
               actual: predicate.value.kind(),
            });
         }
         checks.push((field, predicate));
      }

      let ordering = match &query.order_by {
         Some(order_by) => Some((self.resolve(&order_by.field)?, order_by.direction)),
         None => None,
      };

      trace!(
         predicates = query.predicates.len(),
         order_by = ?query.order_by,
         rows = rows.len(),
         "Selecting records from memory source"
      );

      let mut selected: Vec<&T> = rows
         .iter()
         .filter(|row| {
            checks.iter().all(|(field, predicate)| {
               field
                  .value(row)
                  .and_then(|value| value.compare(&predicate.value))
                  .is_some_and(|ordering| predicate.comparison.accepts(ordering))
            })
         })
         .collect();

      if let Some((field, direction)) = ordering {
         let mut keyed: Vec<(Option<FieldValue>, &T)> =
            selected.into_iter().map(|row| (field.value(row), row)).collect();
         keyed.sort_by(|(a, _), (b, _)| {
            let ordering = compare_keys(a.as_ref(), b.as_ref());
            match direction {
               SortDirection::Asc => ordering,
               SortDirection::Desc => ordering.reverse(),
            }
         });
         selected = keyed.into_iter().map(|(_, row)| row).collect();
      }

      Ok(selected)
   }
}

/// Missing values sort before present ones.
fn compare_keys(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
   match (a, b) {
      (Some(a), Some(b)) => a.compare(b).unwrap_or(Ordering::Equal),
      (None, Some(_)) => Ordering::Less,
      (Some(_), None) => Ordering::Greater,
      (None, None) => Ordering::Equal,
   }
}

impl<T> RecordSource for MemorySource<T>
where
   T: Clone + Send + Sync,
{
   type Record = T;
   type Error = Error;

   async fn fetch(&self, query: &Query) -> Result<Vec<T>> {
      self.ensure_open()?;
      let rows = self.rows.read().await;
      let selected = self.select(&rows, query)?;

      Ok(selected
         .into_iter()
         .skip(query.offset)
         .take(query.limit.unwrap_or(usize::MAX))
         .cloned()
         .collect())
   }

   async fn count(&self, query: &Query) -> Result<usize> {
      self.ensure_open()?;
      let rows = self.rows.read().await;
      Ok(self.select(&rows, query)?.len())
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use crate::query::{OrderBy, Predicate};

   #[derive(Debug, Clone, PartialEq)]
   struct Item {
      id: i64,
      group: Option<String>,
   }

   fn item_fields() -> Fields<Item> {
      Fields::new()
         .with(Field::required("id", |i: &Item| i.id))
         .with(Field::new("group", |i: &Item| i.group.clone()))
   }

   fn items() -> Vec<Item> {
      vec![
         Item {
            id: 3,
            group: Some("b".into()),
         },
         Item {
            id: 1,
            group: Some("a".into()),
         },
         Item { id: 2, group: None },
      ]
   }

   fn ids(rows: &[Item]) -> Vec<i64> {
      rows.iter().map(|i| i.id).collect()
   }

   #[tokio::test]
   async fn natural_order_without_order_by() {
      let source = MemorySource::with_rows(item_fields(), items());

      let rows = source.fetch(&Query::new()).await.unwrap();

      assert_eq!(ids(&rows), vec![3, 1, 2]);
   }

   #[tokio::test]
   async fn missing_values_sort_first_ascending() {
      let source = MemorySource::with_rows(item_fields(), items());

      let asc = source
         .fetch(&Query::new().order_by(OrderBy::asc("group")))
         .await
         .unwrap();
      let desc = source
         .fetch(&Query::new().order_by(OrderBy::desc("group")))
         .await
         .unwrap();

      assert_eq!(ids(&asc), vec![2, 1, 3]);
      assert_eq!(ids(&desc), vec![3, 1, 2]);
   }

   #[tokio::test]
   async fn missing_value_never_matches() {
      let source = MemorySource::with_rows(item_fields(), items());

      let rows = source
         .fetch(&Query::new().filter(Predicate::lt("group", FieldValue::Text("z".into()))))
         .await
         .unwrap();

      assert_eq!(ids(&rows), vec![3, 1]);
   }

   #[tokio::test]
   async fn kind_mismatch_is_rejected_on_empty_source() {
      let source = MemorySource::new(item_fields());

      let err = source
         .fetch(&Query::new().filter(Predicate::eq("id", FieldValue::Text("1".into()))))
         .await
         .unwrap_err();

      assert!(matches!(err, Error::KindMismatch { .. }));
      assert!(err.to_string().contains("integer"));
   }

   #[tokio::test]
   async fn closed_source_rejects_everything() {
      let source = MemorySource::with_rows(item_fields(), items());
      source.close();

      assert!(matches!(
         source.fetch(&Query::new()).await,
         Err(Error::SourceClosed)
      ));
      assert!(matches!(
         source.count(&Query::new()).await,
         Err(Error::SourceClosed)
      ));
      assert!(matches!(
         source.insert(items().remove(0)).await,
         Err(Error::SourceClosed)
      ));
   }
}
