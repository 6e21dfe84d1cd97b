//! Equality filters built from request query parameters

use indexmap::IndexMap;
use record_source::{Fields, Predicate};
use tracing::debug;

use crate::params::{QueryParams, is_reserved};

/// Equality predicates derived from a request, plus the parameters that
/// produced them so links can carry them forward.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedFilters {
   pub predicates: Vec<Predicate>,
   /// Original `(key, value)` pairs, in request order
   pub params: Vec<(String, String)>,
}

impl AppliedFilters {
   pub fn is_empty(&self) -> bool {
      self.predicates.is_empty()
   }
}

/// Turns query parameters named after record fields into equality filters.
///
/// Field names match case-insensitively. Only the first value of a repeated
/// key is used. Values that do not parse into the field's kind are ignored.
#[derive(Debug)]
pub struct EqualityFilters<'a, T> {
   fields: &'a Fields<T>,
}

impl<'a, T> EqualityFilters<'a, T> {
   pub fn new(fields: &'a Fields<T>) -> Self {
      Self { fields }
   }

   pub fn apply(&self, params: &QueryParams) -> AppliedFilters {
      let mut first_values: IndexMap<&str, &str> = IndexMap::new();
      for (key, value) in params.iter() {
         if !is_reserved(key) {
            first_values.entry(key).or_insert(value);
         }
      }

      let mut applied = AppliedFilters::default();
      for (key, raw) in first_values {
         let Some(field) = self.fields.get(key) else {
            continue;
         };
         match field.parse(raw) {
            Some(value) => {
               applied.predicates.push(Predicate::eq(field.name(), value));
               applied.params.push((key.to_string(), raw.to_string()));
            }
            None => {
               debug!(param = %key, value = %raw, kind = %field.kind(), "Skipping unparsable filter");
            }
         }
      }

      applied
   }
}
