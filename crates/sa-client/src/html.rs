//! HTML extraction for the earnings calendar and article bodies

use sa_core::{Error, Result};
use sa_models::EarningsRecord;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

fn selector(css: &str) -> Result<Selector> {
  Selector::parse(css).map_err(|e| Error::Parse(format!("Invalid selector {}: {}", css, e)))
}

fn element_text(element: ElementRef<'_>) -> String {
  element.text().collect::<String>().trim().to_string()
}

/// Extract calendar rows from one earnings calendar page.
///
/// Each `tr[data-exchange]` row holds ticker, company name and release date
/// in its first three cells. Rows with fewer cells or an unreadable date are
/// skipped with a warning; rows with a blank ticker or name are kept and left
/// for the caller to filter.
pub fn parse_earnings_page(html: &str) -> Result<Vec<EarningsRecord>> {
  let document = Html::parse_document(html);
  let row_selector = selector("tr[data-exchange]")?;
  let cell_selector = selector("td")?;

  let mut records = Vec::new();
  let mut skipped = 0usize;

  for row in document.select(&row_selector) {
    let cells: Vec<String> = row.select(&cell_selector).take(3).map(element_text).collect();
    if cells.len() < 3 {
      skipped += 1;
      continue;
    }

    match EarningsRecord::parse_date(&cells[2]) {
      Ok(date) => records.push(EarningsRecord::new(date, Some(&cells[0]), Some(&cells[1]))),
      Err(e) => {
        warn!("Skipping earnings row with unreadable date {:?}: {}", cells[2], e);
        skipped += 1;
      }
    }
  }

  if skipped > 0 {
    warn!("Skipped {} malformed earnings calendar rows", skipped);
  }

  Ok(records)
}

/// Reduce an article's HTML body to plain text, one block per line
pub fn html_to_text(html: &str) -> String {
  let fragment = Html::parse_fragment(html);

  let blocks: Vec<String> = match selector("p, li, h1, h2, h3, h4") {
    Ok(block_selector) => fragment
      .select(&block_selector)
      .map(element_text)
      .filter(|text| !text.is_empty())
      .collect(),
    Err(_) => Vec::new(),
  };

  if blocks.is_empty() {
    return element_text(fragment.root_element());
  }

  blocks.join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  const PAGE: &str = r#"
    <html><body><table>
      <tr><th>Symbol</th><th>Name</th><th>Date</th></tr>
      <tr data-exchange="NASDAQ"><td>AAPL</td><td>Apple Inc.</td><td>10/28/2021</td></tr>
      <tr data-exchange="NYSE"><td>KO</td><td>Coca-Cola Company</td><td>10/27/2021</td></tr>
      <tr data-exchange="NYSE"><td></td><td>Nameless</td><td>10/27/2021</td></tr>
      <tr data-exchange="NYSE"><td>BAD</td><td>Bad Date</td><td>soon</td></tr>
      <tr data-exchange="NYSE"><td>SHORT</td></tr>
    </table></body></html>
  "#;

  #[test]
  fn test_parse_earnings_page() {
    let records = parse_earnings_page(PAGE).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].ticker.as_deref(), Some("AAPL"));
    assert_eq!(records[0].company_name.as_deref(), Some("Apple Inc."));
    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2021, 10, 28).unwrap());
    assert!(records[2].ticker.is_none());
  }

  #[test]
  fn test_parse_page_without_rows() {
    let records = parse_earnings_page("<html><body><p>No earnings</p></body></html>").unwrap();
    assert!(records.is_empty());
  }

  #[test]
  fn test_html_to_text_paragraphs() {
    let text = html_to_text("<p>First <b>bold</b> line.</p><p></p><ul><li>Point</li></ul>");
    assert_eq!(text, "First bold line.\nPoint");
  }

  #[test]
  fn test_html_to_text_plain() {
    assert_eq!(html_to_text("just text"), "just text");
  }
}
