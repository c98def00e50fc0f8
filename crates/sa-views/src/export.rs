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

//! Writing datasets to files

use crate::dataset::Dataset;
use crate::error::{ViewError, ViewResult};
use rust_xlsxwriter::{Format, Workbook};
use sa_core::ExportFormat;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::info;

/// Persists a dataset in one format
#[cfg_attr(test, mockall::automock)]
pub trait Exporter: Send + Sync {
  /// Write `data` under `dir` using `base_name` plus the format's extension.
  /// Returns the path written.
  fn export(
    &self,
    format: ExportFormat,
    dir: &Path,
    base_name: &str,
    data: &Dataset,
  ) -> ViewResult<PathBuf>;
}

/// Writes `{dir}/{base_name}.{ext}`, creating `dir` when missing
#[derive(Debug, Clone, Copy, Default)]
pub struct FileExporter;

impl FileExporter {
  pub fn new() -> Self {
    Self
  }
}

impl Exporter for FileExporter {
  fn export(
    &self,
    format: ExportFormat,
    dir: &Path,
    base_name: &str,
    data: &Dataset,
  ) -> ViewResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.{}", base_name, format.extension()));

    match format {
      ExportFormat::Csv => write_csv(&path, data)?,
      ExportFormat::Json => write_json(&path, data)?,
      ExportFormat::Xlsx => write_xlsx(&path, data)?,
    }

    info!("Exported {} rows to {}", data.len(), path.display());
    Ok(path)
  }
}

/// Export a dataset once per requested format
pub(crate) fn export_all<E: Exporter + ?Sized>(
  exporter: &E,
  formats: &[ExportFormat],
  dir: &Path,
  base_name: &str,
  data: &Dataset,
) -> ViewResult<Vec<PathBuf>> {
  formats.iter().map(|format| exporter.export(*format, dir, base_name, data)).collect()
}

fn write_csv(path: &Path, data: &Dataset) -> ViewResult<()> {
  let mut writer = csv::Writer::from_path(path)?;

  let mut header = vec![String::new()];
  header.extend(data.columns().iter().cloned());
  writer.write_record(&header)?;

  for (idx, row) in data.rows().iter().enumerate() {
    let mut record = vec![idx.to_string()];
    record.extend(row.iter().map(|cell| cell.clone().unwrap_or_default()));
    writer.write_record(&record)?;
  }

  writer.flush()?;
  Ok(())
}

fn write_json(path: &Path, data: &Dataset) -> ViewResult<()> {
  let writer = BufWriter::new(File::create(path)?);
  serde_json::to_writer_pretty(writer, &data.to_json())?;
  Ok(())
}

fn write_xlsx(path: &Path, data: &Dataset) -> ViewResult<()> {
  let mut workbook = Workbook::new();
  let bold = Format::new().set_bold();
  let worksheet = workbook.add_worksheet();

  // column 0 and row 0 hold the index and the header
  for (col, name) in data.columns().iter().enumerate() {
    worksheet.write_string_with_format(0, sheet_col(col + 1)?, name, &bold)?;
  }

  for (idx, row) in data.rows().iter().enumerate() {
    let row_num = sheet_row(idx + 1)?;
    worksheet.write_number_with_format(row_num, 0, idx as f64, &bold)?;
    for (col, cell) in row.iter().enumerate() {
      if let Some(value) = cell {
        worksheet.write_string(row_num, sheet_col(col + 1)?, value)?;
      }
    }
  }

  workbook.save(path)?;
  Ok(())
}

fn sheet_row(idx: usize) -> ViewResult<u32> {
  u32::try_from(idx).map_err(|_| ViewError::Export(format!("Row {} does not fit in a worksheet", idx)))
}

fn sheet_col(idx: usize) -> ViewResult<u16> {
  u16::try_from(idx)
    .map_err(|_| ViewError::Export(format!("Column {} does not fit in a worksheet", idx)))
}
