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

//! Upcoming earnings grouped by release date

use crate::dataset::Dataset;
use crate::error::{ViewError, ViewResult};
use crate::export::{export_all, Exporter};
use crate::render::single_column_table;
use crate::source::MarketDataSource;
use chrono::NaiveDate;
use sa_core::ExportFormat;
use sa_models::EarningsRecord;
use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Base name of the earnings export file
pub const EXPORT_BASE_NAME: &str = "upcoming";

#[derive(Debug, Clone)]
pub struct UpcomingEarningsRequest {
  /// Calendar pages to fetch
  pub page_count: u32,
  /// Release dates to show, earliest encountered first
  pub max_dates: u32,
  /// Empty disables export
  pub export: Vec<ExportFormat>,
  pub export_dir: PathBuf,
}

/// Companies reporting on one date, in calendar order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarningsTable {
  pub date: NaiveDate,
  /// (ticker, company name)
  pub rows: Vec<(String, String)>,
}

impl EarningsTable {
  pub fn header(&self) -> String {
    format!("Earnings on {}", self.date.format("%Y-%m-%d"))
  }

  pub fn render(&self) -> String {
    single_column_table(&self.header(), &self.rows)
  }
}

/// What one run of [`list_upcoming_earnings`] produced
#[derive(Debug, Clone, Default)]
pub struct EarningsReport {
  pub tables: Vec<EarningsTable>,
  /// Records on a shown date that lacked a ticker or company name
  pub dropped_records: usize,
  pub exported: Vec<PathBuf>,
}

/// Group records by release date.
///
/// Dates keep the order they first appear in. Only the first `max_dates`
/// dates are built; records without a ticker or name are left out and
/// counted.
pub fn group_by_date(records: &[EarningsRecord], max_dates: usize) -> (Vec<EarningsTable>, usize) {
  let mut seen = HashSet::new();
  let dates: Vec<NaiveDate> =
    records.iter().map(|r| r.date).filter(|date| seen.insert(*date)).collect();

  let mut dropped = 0;
  let tables = dates
    .into_iter()
    .take(max_dates)
    .map(|date| {
      let mut rows = Vec::new();
      for record in records.iter().filter(|r| r.date == date) {
        match (&record.ticker, &record.company_name) {
          (Some(ticker), Some(name)) => rows.push((ticker.clone(), name.clone())),
          _ => {
            warn!("Dropping incomplete earnings record on {}: {:?}", date, record);
            dropped += 1;
          }
        }
      }
      EarningsTable { date, rows }
    })
    .collect();

  (tables, dropped)
}

/// Company names side by side, one column per date, aligned by row position
pub fn to_dataset(tables: &[EarningsTable]) -> Dataset {
  Dataset::from_columns(
    tables
      .iter()
      .map(|table| {
        let names = table.rows.iter().map(|(_, name)| name.clone()).collect();
        (table.date.format("%Y-%m-%d").to_string(), names)
      })
      .collect(),
  )
}

/// Print upcoming earnings grouped by date and optionally export them.
///
/// Each table is written to `out` followed by a blank line. Export columns
/// match the tables printed.
pub async fn list_upcoming_earnings<S, E, W>(
  source: &S,
  exporter: &E,
  out: &mut W,
  request: &UpcomingEarningsRequest,
) -> ViewResult<EarningsReport>
where
  S: MarketDataSource + ?Sized,
  E: Exporter + ?Sized,
  W: Write,
{
  if request.page_count == 0 {
    return Err(ViewError::InvalidInput("page count must be at least 1".to_string()));
  }
  if request.max_dates == 0 {
    return Err(ViewError::InvalidInput("number of earnings dates must be at least 1".to_string()));
  }

  let records = source.upcoming_earnings(request.page_count).await?;
  info!("Retrieved {} earnings records from {} pages", records.len(), request.page_count);

  let (tables, dropped_records) = group_by_date(&records, request.max_dates as usize);
  if dropped_records > 0 {
    warn!("Dropped {} incomplete earnings records", dropped_records);
  }

  for table in &tables {
    write!(out, "{}", table.render())?;
    writeln!(out)?;
  }
  out.flush()?;

  let exported = if request.export.is_empty() {
    Vec::new()
  } else {
    export_all(
      exporter,
      &request.export,
      &request.export_dir,
      EXPORT_BASE_NAME,
      &to_dataset(&tables),
    )?
  };

  Ok(EarningsReport { tables, dropped_records, exported })
}
