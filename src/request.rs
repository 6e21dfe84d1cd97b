//! The incoming request a paginator answers

use record_source::Predicate;
use url::Url;

use crate::error::Result;
use crate::filter::AppliedFilters;
use crate::params::QueryParams;

/// One pagination request: where it came from, what it asked for and which
/// filters apply to it.
///
/// `url` is the base every returned link is built on. Its own query pairs
/// (minus `cursor`, `limit` and `offset`) are kept in those links.
#[derive(Debug, Clone)]
pub struct PageRequest {
   url: Url,
   params: QueryParams,
   filters: Vec<Predicate>,
   passthrough: Vec<(String, String)>,
}

impl PageRequest {
   /// Build a request from a base URL and separately parsed query parameters.
   pub fn new(url: &str, params: QueryParams) -> Result<Self> {
      Ok(Self {
         url: Url::parse(url)?,
         params,
         filters: Vec::new(),
         passthrough: Vec::new(),
      })
   }

   /// Build a request from a full URL, splitting its query string off into
   /// the request parameters. This is how a client follows a returned link.
   pub fn from_url(url: &str) -> Result<Self> {
      let mut url = Url::parse(url)?;
      let params: QueryParams = url.query_pairs().into_owned().collect();
      url.set_query(None);

      Ok(Self {
         url,
         params,
         filters: Vec::new(),
         passthrough: Vec::new(),
      })
   }

   /// Attach filters produced by [`EqualityFilters`](crate::EqualityFilters).
   pub fn with_filters(mut self, applied: AppliedFilters) -> Self {
      self.filters.extend(applied.predicates);
      self.passthrough.extend(applied.params);
      self
   }

   /// Attach a predicate that is applied to the source but not echoed in links.
   pub fn with_predicate(mut self, predicate: Predicate) -> Self {
      self.filters.push(predicate);
      self
   }

   pub fn url(&self) -> &Url {
      &self.url
   }

   pub fn params(&self) -> &QueryParams {
      &self.params
   }

   /// Shortcut for `params().get(key)`.
   pub fn param(&self, key: &str) -> Option<&str> {
      self.params.get(key)
   }

   pub fn filters(&self) -> &[Predicate] {
      &self.filters
   }

   /// Query pairs carried into every link so filters survive navigation.
   pub fn passthrough(&self) -> &[(String, String)] {
      &self.passthrough
   }
}

#[cfg(test)]
mod tests {
   use record_source::FieldValue;

   use super::*;
   use crate::error::Error;

   #[test]
   fn new_keeps_params_apart_from_url() {
      let params = QueryParams::new().with("limit", "5");
      let request = PageRequest::new("https://example.com/api/v1/people", params).unwrap();

      assert_eq!(request.url().as_str(), "https://example.com/api/v1/people");
      assert_eq!(request.param("limit"), Some("5"));
      assert!(request.filters().is_empty());
   }

   #[test]
   fn from_url_splits_query() {
      let request =
         PageRequest::from_url("https://example.com/people?greetings=Hola&limit=5").unwrap();

      assert_eq!(request.url().as_str(), "https://example.com/people");
      assert_eq!(request.param("greetings"), Some("Hola"));
      assert_eq!(request.param("limit"), Some("5"));
   }

   #[test]
   fn invalid_url() {
      let err = PageRequest::new("/people", QueryParams::new()).unwrap_err();
      assert!(matches!(err, Error::InvalidUrl(_)));
   }

   #[test]
   fn with_filters_accumulates() {
      let applied = AppliedFilters {
         predicates: vec![Predicate::eq("robot", FieldValue::Boolean(true))],
         params: vec![("robot".into(), "true".into())],
      };

      let request = PageRequest::new("https://example.com/", QueryParams::new())
         .unwrap()
         .with_filters(applied)
         .with_predicate(Predicate::gt("id", FieldValue::Integer(3)));

      assert_eq!(request.filters().len(), 2);
      assert_eq!(request.passthrough(), &[("robot".to_string(), "true".to_string())]);
   }
}
