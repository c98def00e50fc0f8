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

use crate::config::Config;
use anyhow::{Context, Result};
use sa_client::SeekingAlphaClient;
use sa_core::ExportFormat;

pub mod news;
pub mod upcoming;

/// Client built from the environment configuration
pub fn build_client(config: &Config) -> Result<SeekingAlphaClient> {
  SeekingAlphaClient::new(config.client_config.clone()).context("Failed to create Seeking Alpha client")
}

/// Parse the `--export` value; empty means no export
pub fn export_formats(raw: &str) -> Result<Vec<ExportFormat>> {
  Ok(ExportFormat::parse_list(raw)?)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_export_formats() {
    assert!(export_formats("").unwrap().is_empty());
    assert_eq!(export_formats("csv,xlsx").unwrap(), vec![ExportFormat::Csv, ExportFormat::Xlsx]);
    assert!(export_formats("pdf").is_err());
  }
}
