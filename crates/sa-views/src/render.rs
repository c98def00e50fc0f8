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

//! Console table rendering

use prettytable::{format, Cell, Row, Table};

/// Render a table with one labelled value per row.
///
/// The label column has an empty header and the value column carries
/// `header`, giving the same shape as a one-column frame printed with its
/// index.
pub fn single_column_table(header: &str, rows: &[(String, String)]) -> String {
  let mut table = Table::new();
  table.set_format(*format::consts::FORMAT_BOX_CHARS);
  table.set_titles(Row::new(vec![Cell::new(""), Cell::new(header)]));

  for (label, value) in rows {
    table.add_row(Row::new(vec![Cell::new(label), Cell::new(value)]));
  }

  table.to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_single_column_table_contents() {
    let rendered = single_column_table(
      "Earnings on 2021-10-27",
      &[("KO".to_string(), "Coca-Cola Company".to_string())],
    );

    assert!(rendered.contains("Earnings on 2021-10-27"));
    assert!(rendered.contains("KO"));
    assert!(rendered.contains("Coca-Cola Company"));
    let header_line = rendered.lines().position(|l| l.contains("Earnings on")).unwrap();
    let row_line = rendered.lines().position(|l| l.contains("KO")).unwrap();
    assert!(header_line < row_line);
  }

  #[test]
  fn test_single_column_table_without_rows() {
    let rendered = single_column_table("Earnings on 2021-10-27", &[]);
    assert!(rendered.contains("Earnings on 2021-10-27"));
  }
}
