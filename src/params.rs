//! Request query parameters

use url::form_urlencoded;

pub const CURSOR_PARAM: &str = "cursor";
pub const LIMIT_PARAM: &str = "limit";
pub const OFFSET_PARAM: &str = "offset";

/// Query parameters that belong to the paginators themselves. They are never
/// treated as filters and never copied from the incoming URL into links.
pub const RESERVED_PARAMS: [&str; 3] = [CURSOR_PARAM, LIMIT_PARAM, OFFSET_PARAM];

/// Whether `key` is one of [`RESERVED_PARAMS`].
pub fn is_reserved(key: &str) -> bool {
   RESERVED_PARAMS.contains(&key)
}

/// Decoded query string pairs, in request order.
///
/// Repeated keys are kept. [`get`](QueryParams::get) returns the first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
   pairs: Vec<(String, String)>,
}

impl QueryParams {
   pub fn new() -> Self {
      Self::default()
   }

   /// Parse a form-urlencoded query string. A leading `?` is ignored.
   pub fn parse(query: &str) -> Self {
      let query = query.strip_prefix('?').unwrap_or(query);
      form_urlencoded::parse(query.as_bytes())
         .into_owned()
         .collect()
   }

   /// Append a pair.
   pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
      self.pairs.push((key.into(), value.into()));
      self
   }

   /// First value recorded for `key`.
   pub fn get(&self, key: &str) -> Option<&str> {
      self
         .pairs
         .iter()
         .find(|(k, _)| k == key)
         .map(|(_, v)| v.as_str())
   }

   pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
      self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
   }

   pub fn len(&self) -> usize {
      self.pairs.len()
   }

   pub fn is_empty(&self) -> bool {
      self.pairs.is_empty()
   }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
   K: Into<String>,
   V: Into<String>,
{
   fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
      Self {
         pairs: iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
      }
   }
}
