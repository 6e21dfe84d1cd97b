//! Absolute navigation links

use url::Url;

use crate::params::is_reserved;
use crate::request::PageRequest;

/// Renders `previous`/`next` links on a copy of the request URL.
///
/// Query order is: the base URL's own pairs without reserved keys, then the
/// passthrough filter pairs, then the strategy's parameters.
#[derive(Debug, Clone)]
pub(crate) struct LinkBuilder<'a> {
   base: &'a Url,
   passthrough: &'a [(String, String)],
}

impl<'a> LinkBuilder<'a> {
   pub(crate) fn new(request: &'a PageRequest) -> Self {
      Self {
         base: request.url(),
         passthrough: request.passthrough(),
      }
   }

   pub(crate) fn build(&self, params: &[(&str, String)]) -> String {
      let mut url = self.base.clone();
      let preserved: Vec<(String, String)> = url
         .query_pairs()
         .filter(|(key, _)| !is_reserved(key))
         .map(|(key, value)| (key.into_owned(), value.into_owned()))
         .collect();

      url.set_query(None);
      url.query_pairs_mut()
         .extend_pairs(&preserved)
         .extend_pairs(self.passthrough)
         .extend_pairs(params);

      url.to_string()
   }
}
