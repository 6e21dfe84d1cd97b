//! Typed field values used as ordering keys and filter literals

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::format_description::well_known::iso8601::{Config, EncodedConfig, Iso8601};
use time::{OffsetDateTime, UtcOffset};

/// ISO 8601 with a signed six-digit year, for timestamps outside 0000..=9999.
const EXTENDED_YEAR: EncodedConfig = Config::DEFAULT.set_year_is_six_digits(true).encode();

/// The kind of value a record field holds.
///
/// Every [`FieldValue`] has exactly one kind, and only values of the same kind
/// can be compared with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
   Integer,
   Real,
   Text,
   Boolean,
   Timestamp,
}

impl fmt::Display for FieldKind {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      let name = match self {
         FieldKind::Integer => "integer",
         FieldKind::Real => "real",
         FieldKind::Text => "text",
         FieldKind::Boolean => "boolean",
         FieldKind::Timestamp => "timestamp",
      };
      f.write_str(name)
   }
}

/// A comparable value read from a record field.
///
/// The `Display` output is the value's canonical string form. Parsing that
/// string back with [`FieldValue::parse`] and the same [`FieldKind`] yields an
/// equal value, which is what lets a value travel inside an opaque cursor.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
   Integer(i64),
   Real(f64),
   Text(String),
   Boolean(bool),
   /// Rendered in UTC as RFC 3339, or as ISO 8601 with a signed six-digit
   /// year when the year does not fit in four digits
   Timestamp(OffsetDateTime),
}

impl FieldValue {
   /// The kind of this value.
   pub fn kind(&self) -> FieldKind {
      match self {
         FieldValue::Integer(_) => FieldKind::Integer,
         FieldValue::Real(_) => FieldKind::Real,
         FieldValue::Text(_) => FieldKind::Text,
         FieldValue::Boolean(_) => FieldKind::Boolean,
         FieldValue::Timestamp(_) => FieldKind::Timestamp,
      }
   }

   /// Parse a raw string into a value of the given kind.
   ///
   /// Returns `None` when the string is not a valid representation of `kind`.
   /// Booleans accept `true`/`false` in any letter case; timestamps must be
   /// RFC 3339 or ISO 8601.
   pub fn parse(kind: FieldKind, raw: &str) -> Option<FieldValue> {
      match kind {
         FieldKind::Integer => raw.trim().parse::<i64>().ok().map(FieldValue::Integer),
         FieldKind::Real => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| !value.is_nan())
            .map(FieldValue::Real),
         FieldKind::Text => Some(FieldValue::Text(raw.to_string())),
         FieldKind::Boolean => {
            let raw = raw.trim();
            if raw.eq_ignore_ascii_case("true") {
               Some(FieldValue::Boolean(true))
            } else if raw.eq_ignore_ascii_case("false") {
               Some(FieldValue::Boolean(false))
            } else {
               None
            }
         }
         FieldKind::Timestamp => {
            let raw = raw.trim();
            OffsetDateTime::parse(raw, &Rfc3339)
               .or_else(|_| OffsetDateTime::parse(raw, &Iso8601::<EXTENDED_YEAR>))
               .ok()
               .map(FieldValue::Timestamp)
         }
      }
   }

   /// Compare two values of the same kind.
   ///
   /// Returns `None` when the kinds differ. Reals are compared with
   /// `f64::total_cmp`.
   pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
      match (self, other) {
         (FieldValue::Integer(a), FieldValue::Integer(b)) => Some(a.cmp(b)),
         (FieldValue::Real(a), FieldValue::Real(b)) => Some(a.total_cmp(b)),
         (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
         (FieldValue::Boolean(a), FieldValue::Boolean(b)) => Some(a.cmp(b)),
         (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => Some(a.cmp(b)),
         _ => None,
      }
   }
}

impl fmt::Display for FieldValue {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      match self {
         FieldValue::Integer(value) => write!(f, "{}", value),
         FieldValue::Real(value) => write!(f, "{}", value),
         FieldValue::Text(value) => f.write_str(value),
         FieldValue::Boolean(value) => write!(f, "{}", value),
         FieldValue::Timestamp(value) => {
            // Sub-minute offsets have no RFC 3339 form
            let utc = value.checked_to_offset(UtcOffset::UTC).unwrap_or(*value);
            match utc
               .format(&Rfc3339)
               .or_else(|_| utc.format(&Iso8601::<EXTENDED_YEAR>))
            {
               Ok(formatted) => f.write_str(&formatted),
               Err(_) => write!(f, "{}", utc),
            }
         }
      }
   }
}

/// Conversion from a plain Rust value into a [`FieldValue`].
///
/// Implemented for the primitive types a record field is commonly made of.
/// `KIND` lets a [`Field`](crate::Field) know its kind before any record has
/// been read.
pub trait IntoFieldValue {
   const KIND: FieldKind;

   fn into_field_value(self) -> FieldValue;
}

macro_rules! integer_field_value {
   ($($ty:ty),*) => {
      $(
         impl IntoFieldValue for $ty {
            const KIND: FieldKind = FieldKind::Integer;

            fn into_field_value(self) -> FieldValue {
               FieldValue::Integer(i64::from(self))
            }
         }
      )*
   };
}

integer_field_value!(i8, i16, i32, i64, u8, u16, u32);

impl IntoFieldValue for f32 {
   const KIND: FieldKind = FieldKind::Real;

   fn into_field_value(self) -> FieldValue {
      FieldValue::Real(f64::from(self))
   }
}

impl IntoFieldValue for f64 {
   const KIND: FieldKind = FieldKind::Real;

   fn into_field_value(self) -> FieldValue {
      FieldValue::Real(self)
   }
}

impl IntoFieldValue for String {
   const KIND: FieldKind = FieldKind::Text;

   fn into_field_value(self) -> FieldValue {
      FieldValue::Text(self)
   }
}

impl IntoFieldValue for bool {
   const KIND: FieldKind = FieldKind::Boolean;

   fn into_field_value(self) -> FieldValue {
      FieldValue::Boolean(self)
   }
}

impl IntoFieldValue for OffsetDateTime {
   const KIND: FieldKind = FieldKind::Timestamp;

   fn into_field_value(self) -> FieldValue {
      FieldValue::Timestamp(self)
   }
}
