use record_source::{Field, FieldValue, Fields};
use tracing::debug;

use super::codec::CursorToken;
use crate::error::{Error, Result};

/// Reads the ordering value off records as a cursor position.
pub struct PositionExtractor<T> {
   field: Field<T>,
}

impl<T> PositionExtractor<T> {
   /// Resolve `name` against the record's fields, ignoring letter case.
   pub fn new(fields: &Fields<T>, name: &str) -> Result<Self> {
      let field = fields.get(name).ok_or_else(|| Error::FieldNotFound {
         field: name.to_string(),
      })?;

      Ok(Self {
         field: field.clone(),
      })
   }

   /// Registered name of the ordering field.
   pub fn field_name(&self) -> &str {
      self.field.name()
   }

   /// Canonical position of `record`.
   pub fn extract(&self, record: &T) -> Result<String> {
      self
         .field
         .value(record)
         .map(|value| value.to_string())
         .ok_or_else(|| Error::FieldValueMissing {
            field: self.field.name().to_string(),
         })
   }

   /// Parse a position back into a comparison literal.
   pub fn parse(&self, position: &str) -> Option<FieldValue> {
      self.field.parse(position)
   }

   /// Re-render the token's position canonically. A position that is not a
   /// valid value of the ordering field resets the token to the first page.
   pub fn normalize(&self, token: CursorToken) -> CursorToken {
      let Some(position) = token.position.as_deref() else {
         return token;
      };

      match self.parse(position) {
         Some(value) => CursorToken {
            direction: token.direction,
            position: Some(value.to_string()),
         },
         None => {
            debug!(
               field = %self.field.name(),
               kind = %self.field.kind(),
               position = %position,
               "Cursor position does not fit the ordering field, starting from the first page"
            );
            CursorToken::first_page()
         }
      }
   }
}

impl<T> Clone for PositionExtractor<T> {
   fn clone(&self) -> Self {
      Self {
         field: self.field.clone(),
      }
   }
}

impl<T> std::fmt::Debug for PositionExtractor<T> {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.debug_struct("PositionExtractor")
         .field("field", &self.field)
         .finish()
   }
}
