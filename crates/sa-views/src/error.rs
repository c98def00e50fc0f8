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

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
  /// Caller supplied a value the views cannot act on
  #[error("Invalid input: {0}")]
  InvalidInput(String),

  /// Retrieval from upstream failed
  #[error(transparent)]
  Upstream(#[from] sa_core::Error),

  #[error("Export error: {0}")]
  Export(String),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

impl From<csv::Error> for ViewError {
  fn from(err: csv::Error) -> Self {
    ViewError::Export(err.to_string())
  }
}

impl From<rust_xlsxwriter::XlsxError> for ViewError {
  fn from(err: rust_xlsxwriter::XlsxError) -> Self {
    ViewError::Export(err.to_string())
  }
}

impl From<serde_json::Error> for ViewError {
  fn from(err: serde_json::Error) -> Self {
    ViewError::Export(err.to_string())
  }
}

pub type ViewResult<T> = Result<T, ViewError>;
