/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Helpers shared by the earnings and news models

use serde::{Deserialize, Deserializer};

/// Format a raw `publishOn` value for listing output.
///
/// The date/time separator becomes a space and a trailing `Z` zone marker is
/// dropped. Numeric offsets are left alone.
pub fn display_timestamp(raw: &str) -> String {
  let trimmed = raw.trim();
  let without_zone = trimmed.strip_suffix('Z').unwrap_or(trimmed);
  without_zone.replacen('T', " ", 1)
}

/// Format a raw `publishOn` value for the single article view.
///
/// Keeps the characters up to three before the final colon, which drops a
/// `-04:00` style offset (or `:MM:SS` when no offset is present), then
/// replaces the separator with a space.
///
/// Positions count characters, not bytes. When that cut point falls before
/// the start of the string it is taken from the end instead: a value without
/// a colon loses its last four characters, and a colon at position `c < 3`
/// removes the last `3 - c`.
pub fn truncate_timestamp(raw: &str) -> String {
  let chars: Vec<char> = raw.trim().chars().collect();
  let len = chars.len() as isize;
  let colon = chars.iter().rposition(|c| *c == ':').map_or(-1, |idx| idx as isize);

  let end = colon - 3;
  let keep = if end >= 0 { end.min(len) } else { (len + end).max(0) };

  chars[..keep as usize].iter().collect::<String>().replacen('T', " ", 1)
}

/// Upstream sends article ids as strings in the v3 API and as numbers in the
/// trending feed; both end up as `i64`.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
  D: Deserializer<'de>,
{
  #[derive(Deserialize)]
  #[serde(untagged)]
  enum RawId {
    Number(i64),
    Text(String),
  }

  match RawId::deserialize(deserializer)? {
    RawId::Number(n) => Ok(n),
    RawId::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
  }
}

/// Join a site-relative path such as `/news/123` onto the base URL
pub fn absolute_url(base_url: &str, path: &str) -> String {
  if path.starts_with("http://") || path.starts_with("https://") {
    return path.to_string();
  }
  format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_display_timestamp() {
    assert_eq!(display_timestamp("2021-10-05T08:14:27Z"), "2021-10-05 08:14:27");
    assert_eq!(display_timestamp("2021-10-05T08:14:27-04:00"), "2021-10-05 08:14:27-04:00");
    assert_eq!(display_timestamp("2021-10-05 08:14"), "2021-10-05 08:14");
  }

  #[test]
  fn test_truncate_timestamp() {
    assert_eq!(truncate_timestamp("2021-10-05T08:14:27-04:00"), "2021-10-05 08:14:27");
    assert_eq!(truncate_timestamp("2021-10-05T08:14:27"), "2021-10-05 08");
  }

  #[test]
  fn test_truncate_timestamp_counts_characters() {
    assert_eq!(truncate_timestamp("2021-10-05T08é12:00"), "2021-10-05 08");
    assert_eq!(truncate_timestamp("ééééé:00"), "éé");
  }

  #[test]
  fn test_truncate_timestamp_cut_from_end() {
    // no colon: last four characters go
    assert_eq!(truncate_timestamp("2021-10-05T08"), "2021-10-0");
    assert_eq!(truncate_timestamp("2021"), "");
    // colon at position 1: last two characters go
    assert_eq!(truncate_timestamp("8:15pm"), "8:15");
    assert_eq!(truncate_timestamp(":"), "");
  }

  #[test]
  fn test_deserialize_id() {
    #[derive(Deserialize)]
    struct Holder {
      #[serde(deserialize_with = "deserialize_id")]
      id: i64,
    }

    let a: Holder = serde_json::from_str(r#"{"id": "3745"}"#).unwrap();
    let b: Holder = serde_json::from_str(r#"{"id": 3745}"#).unwrap();
    assert_eq!(a.id, 3745);
    assert_eq!(b.id, 3745);
    assert!(serde_json::from_str::<Holder>(r#"{"id": "abc"}"#).is_err());
  }

  #[test]
  fn test_absolute_url() {
    assert_eq!(
      absolute_url("https://seekingalpha.com/", "/news/1-x"),
      "https://seekingalpha.com/news/1-x"
    );
    assert_eq!(absolute_url("https://seekingalpha.com", "https://other/a"), "https://other/a");
  }
}
