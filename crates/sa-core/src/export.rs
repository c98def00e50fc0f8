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

//! Output formats accepted by the export step

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// File format for an exported dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
  Csv,
  Json,
  Xlsx,
}

impl ExportFormat {
  /// File extension written for this format
  pub fn extension(&self) -> &'static str {
    match self {
      ExportFormat::Csv => "csv",
      ExportFormat::Json => "json",
      ExportFormat::Xlsx => "xlsx",
    }
  }

  /// Parse a comma separated list such as `csv,json`.
  ///
  /// An empty string or `none` disables export and yields an empty list.
  /// Repeated formats are kept once.
  pub fn parse_list(raw: &str) -> Result<Vec<ExportFormat>> {
    let mut formats = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
      if part.eq_ignore_ascii_case("none") {
        continue;
      }
      let format = part.parse::<ExportFormat>()?;
      if !formats.contains(&format) {
        formats.push(format);
      }
    }
    Ok(formats)
  }
}

impl FromStr for ExportFormat {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "csv" => Ok(ExportFormat::Csv),
      "json" => Ok(ExportFormat::Json),
      "xlsx" => Ok(ExportFormat::Xlsx),
      other => Err(Error::Config(format!("Wrong export file specified: {}", other))),
    }
  }
}

impl fmt::Display for ExportFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.extension())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_single() {
    assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
    assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
  }

  #[test]
  fn test_parse_list() {
    let formats = ExportFormat::parse_list("csv, json,csv").unwrap();
    assert_eq!(formats, vec![ExportFormat::Csv, ExportFormat::Json]);
  }

  #[test]
  fn test_parse_list_disabled() {
    assert!(ExportFormat::parse_list("").unwrap().is_empty());
    assert!(ExportFormat::parse_list("none").unwrap().is_empty());
  }

  #[test]
  fn test_parse_unknown() {
    let err = ExportFormat::parse_list("csv,png").unwrap_err();
    assert!(err.to_string().contains("png"));
  }
}
