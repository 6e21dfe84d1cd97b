//! Opaque cursor tokens.
//!
//! A token is the form-urlencoded payload `r=<True|False>&p=<position>`
//! encoded with standard base64. `r` is `True` for backward traversal and
//! `p` is empty on the first page.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;
use url::form_urlencoded;

const REVERSE_KEY: &str = "r";
const POSITION_KEY: &str = "p";

/// Traversal direction requested by a cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
   /// Records after the position
   #[default]
   Forward,
   /// Records before the position
   Backward,
}

impl Direction {
   pub fn is_backward(self) -> bool {
      self == Direction::Backward
   }
}

/// Decoded navigation state carried by the `cursor` query parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CursorToken {
   pub direction: Direction,
   /// Canonical string of the ordering value at the anchor row.
   ///
   /// An empty position cannot be represented on the wire and is the same as
   /// no position: `Some("")` encodes and decodes as `None`.
   pub position: Option<String>,
}

impl CursorToken {
   /// The token of the first page: forward with no anchor.
   pub fn first_page() -> Self {
      Self::default()
   }

   pub fn forward(position: impl Into<String>) -> Self {
      Self::anchored(Direction::Forward, position.into())
   }

   pub fn backward(position: impl Into<String>) -> Self {
      Self::anchored(Direction::Backward, position.into())
   }

   fn anchored(direction: Direction, position: String) -> Self {
      Self {
         direction,
         position: (!position.is_empty()).then_some(position),
      }
   }
}

/// Encode a token into its opaque string form.
pub fn encode(token: &CursorToken) -> String {
   let reverse = if token.direction.is_backward() {
      "True"
   } else {
      "False"
   };
   let payload = form_urlencoded::Serializer::new(String::new())
      .append_pair(REVERSE_KEY, reverse)
      .append_pair(POSITION_KEY, token.position.as_deref().unwrap_or_default())
      .finish();

   STANDARD.encode(payload)
}

/// Decode an opaque token.
///
/// Never fails: anything that is not a well-formed token yields
/// [`CursorToken::first_page`].
pub fn decode(raw: &str) -> CursorToken {
   match try_decode(raw) {
      Some(token) => {
         debug!(direction = ?token.direction, position = ?token.position, "Decoded cursor");
         token
      }
      None => {
         debug!(cursor = %raw, "Malformed cursor, starting from the first page");
         CursorToken::first_page()
      }
   }
}

fn try_decode(raw: &str) -> Option<CursorToken> {
   let bytes = STANDARD.decode(raw.trim()).ok()?;
   let payload = String::from_utf8(bytes).ok()?;
   let pairs: Vec<(String, String)> = form_urlencoded::parse(payload.as_bytes())
      .into_owned()
      .collect();

   if pairs.len() != 2 {
      return None;
   }

   let value_of = |key: &str| {
      pairs
         .iter()
         .find(|(k, _)| k == key)
         .map(|(_, v)| v.as_str())
   };

   let direction = match value_of(REVERSE_KEY)? {
      r if r.eq_ignore_ascii_case("true") => Direction::Backward,
      r if r.eq_ignore_ascii_case("false") => Direction::Forward,
      _ => return None,
   };
   let position = value_of(POSITION_KEY)?;

   Some(CursorToken {
      direction,
      position: (!position.is_empty()).then(|| position.to_string()),
   })
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn encode_matches_wire_format() {
      assert_eq!(encode(&CursorToken::backward("51")), "cj1UcnVlJnA9NTE=");
      assert_eq!(encode(&CursorToken::forward("10")), "cj1GYWxzZSZwPTEw");
   }

   #[test]
   fn round_trip() {
      for token in [
         CursorToken::first_page(),
         CursorToken::forward("10"),
         CursorToken::backward("51"),
         CursorToken::forward("2024-01-01T00:03:00Z"),
         CursorToken::backward("Hola mundo & adiós=bye"),
      ] {
         assert_eq!(decode(&encode(&token)), token);
      }
   }

   #[test]
   fn reverse_flag_ignores_case() {
      let raw = STANDARD.encode("r=true&p=7");
      assert_eq!(decode(&raw), CursorToken::backward("7"));

      let raw = STANDARD.encode("p=7&r=FALSE");
      assert_eq!(decode(&raw), CursorToken::forward("7"));
   }

   #[test]
   fn empty_position_is_first_page() {
      let raw = STANDARD.encode("r=False&p=");
      assert_eq!(decode(&raw), CursorToken::first_page());
   }

   #[test]
   fn empty_anchor_is_no_anchor() {
      assert_eq!(CursorToken::forward(""), CursorToken::first_page());
      assert_eq!(CursorToken::backward("").position, None);

      let token = CursorToken {
         direction: Direction::Backward,
         position: Some(String::new()),
      };
      assert_eq!(encode(&token), encode(&CursorToken::backward("")));
      assert_eq!(decode(&encode(&token)), CursorToken::backward(""));
   }

   #[test]
   fn malformed_tokens_fall_back_to_first_page() {
      let malformed = [
         "".to_string(),
         "not base64!".to_string(),
         STANDARD.encode([0xffu8, 0xfe, 0xfd]),
         STANDARD.encode("r=True"),
         STANDARD.encode("r=True&p=1&x=2"),
         STANDARD.encode("r=yes&p=1"),
         STANDARD.encode("a=True&b=1"),
      ];

      for raw in malformed {
         assert_eq!(decode(&raw), CursorToken::first_page(), "{raw}");
      }
   }
}
