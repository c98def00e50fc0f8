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

use super::{build_client, export_formats};
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use sa_views::{list_upcoming_earnings, FileExporter, UpcomingEarningsRequest};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct UpcomingArgs {
  /// Number of earnings calendar pages to fetch
  #[arg(short = 'p', long = "pages", default_value = "10")]
  pages: u32,

  /// Number of upcoming release dates to show
  #[arg(short = 'n', long = "num", default_value = "3")]
  num: u32,

  /// Export formats, comma separated (csv, json, xlsx)
  #[arg(long, default_value = "")]
  export: String,

  /// Directory for exported files (defaults to SA_EXPORT_DIR)
  #[arg(long)]
  export_dir: Option<PathBuf>,
}

pub async fn execute(args: UpcomingArgs, config: Config) -> Result<()> {
  let request = UpcomingEarningsRequest {
    page_count: args.pages,
    max_dates: args.num,
    export: export_formats(&args.export)?,
    export_dir: config.export_dir(args.export_dir),
  };

  let client = build_client(&config)?;
  let stdout = io::stdout();
  let mut out = stdout.lock();

  let report = list_upcoming_earnings(&client, &FileExporter::new(), &mut out, &request).await?;
  out.flush()?;

  info!(
    "Showed {} earnings dates ({} incomplete records dropped)",
    report.tables.len(),
    report.dropped_records
  );
  for path in &report.exported {
    info!("Saved {}", path.display());
  }

  Ok(())
}
