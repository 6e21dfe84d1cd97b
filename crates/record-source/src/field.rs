//! Named field accessors for record types

use std::fmt;
use std::sync::Arc;

use crate::value::{FieldKind, FieldValue, IntoFieldValue};

type Accessor<T> = Arc<dyn Fn(&T) -> Option<FieldValue> + Send + Sync>;

/// A named, typed accessor for one field of a record type.
///
/// Fields replace runtime introspection: the caller declares, once, how to
/// read a value off a record and which [`FieldKind`] that value has.
///
/// # Example
///
/// ```
/// use record_source::{Field, FieldKind, FieldValue};
///
/// struct Situation {
///    id: i32,
///    name: Option<String>,
/// }
///
/// let id = Field::required("Id", |s: &Situation| s.id);
/// let name = Field::new("Name", |s: &Situation| s.name.clone());
///
/// let situation = Situation { id: 7, name: None };
/// assert_eq!(id.kind(), FieldKind::Integer);
/// assert_eq!(id.value(&situation), Some(FieldValue::Integer(7)));
/// assert_eq!(name.value(&situation), None);
/// ```
pub struct Field<T> {
   name: String,
   kind: FieldKind,
   accessor: Accessor<T>,
}

impl<T> Field<T> {
   /// Create a field whose value may be absent on some records.
   pub fn new<V, F>(name: impl Into<String>, accessor: F) -> Self
   where
      T: 'static,
      V: IntoFieldValue,
      F: Fn(&T) -> Option<V> + Send + Sync + 'static,
   {
      Self {
         name: name.into(),
         kind: V::KIND,
         accessor: Arc::new(move |record: &T| {
            accessor(record).map(IntoFieldValue::into_field_value)
         }),
      }
   }

   /// Create a field that always holds a value.
   pub fn required<V, F>(name: impl Into<String>, accessor: F) -> Self
   where
      T: 'static,
      V: IntoFieldValue,
      F: Fn(&T) -> V + Send + Sync + 'static,
   {
      Self {
         name: name.into(),
         kind: V::KIND,
         accessor: Arc::new(move |record: &T| Some(accessor(record).into_field_value())),
      }
   }

   /// The field name as it was registered.
   pub fn name(&self) -> &str {
      &self.name
   }

   /// The kind of value this field holds.
   pub fn kind(&self) -> FieldKind {
      self.kind
   }

   /// Read this field off a record. `None` means the record holds no value.
   pub fn value(&self, record: &T) -> Option<FieldValue> {
      (self.accessor)(record)
   }

   /// Parse a raw string into a value of this field's kind.
   pub fn parse(&self, raw: &str) -> Option<FieldValue> {
      FieldValue::parse(self.kind, raw)
   }

   /// Case-insensitive name comparison.
   pub fn is_named(&self, name: &str) -> bool {
      self.name.eq_ignore_ascii_case(name)
   }
}

impl<T> Clone for Field<T> {
   fn clone(&self) -> Self {
      Self {
         name: self.name.clone(),
         kind: self.kind,
         accessor: Arc::clone(&self.accessor),
      }
   }
}

impl<T> fmt::Debug for Field<T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("Field")
         .field("name", &self.name)
         .field("kind", &self.kind)
         .finish_non_exhaustive()
   }
}

/// The set of fields registered for a record type.
///
/// Lookups are case-insensitive, so `"id"`, `"Id"` and `"ID"` all resolve to
/// the same field.
pub struct Fields<T> {
   fields: Vec<Field<T>>,
}

impl<T> Fields<T> {
   pub fn new() -> Self {
      Self { fields: Vec::new() }
   }

   /// Register a field, replacing any field with the same name.
   pub fn with(mut self, field: Field<T>) -> Self {
      self.fields.retain(|existing| !existing.is_named(field.name()));
      self.fields.push(field);
      self
   }

   /// Look up a field by name, ignoring letter case.
   pub fn get(&self, name: &str) -> Option<&Field<T>> {
      self.fields.iter().find(|field| field.is_named(name))
   }

   pub fn iter(&self) -> impl Iterator<Item = &Field<T>> {
      self.fields.iter()
   }

   pub fn len(&self) -> usize {
      self.fields.len()
   }

   pub fn is_empty(&self) -> bool {
      self.fields.is_empty()
   }
}

impl<T> Default for Fields<T> {
   fn default() -> Self {
      Self::new()
   }
}

impl<T> Clone for Fields<T> {
   fn clone(&self) -> Self {
      Self {
         fields: self.fields.clone(),
      }
   }
}

impl<T> fmt::Debug for Fields<T> {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_list().entries(self.fields.iter()).finish()
   }
}
