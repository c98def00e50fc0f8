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
use chrono::{DateTime, NaiveDate, Utc};
use clap::Args;
use sa_views::{list_news, FileExporter, NewsRequest, LISTING_MODE};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct NewsArgs {
  /// News feed: latest or trending
  #[arg(short = 't', long = "type", default_value = "latest")]
  news_type: String,

  /// Article id to show in full; -1 lists articles instead
  #[arg(short = 'i', long = "id", default_value_t = LISTING_MODE, allow_negative_numbers = true)]
  article_id: i64,

  /// Number of articles to list
  #[arg(short = 'n', long = "num", default_value = "5")]
  num: u32,

  /// Latest news published before this date (YYYY-MM-DD)
  #[arg(short = 'd', long = "date")]
  start_date: Option<NaiveDate>,

  /// Export formats, comma separated (csv, json, xlsx)
  #[arg(long, default_value = "")]
  export: String,

  /// Directory for exported files (defaults to SA_EXPORT_DIR)
  #[arg(long)]
  export_dir: Option<PathBuf>,
}

/// Midnight UTC at the start of `date`
fn start_of_day(date: NaiveDate) -> Option<DateTime<Utc>> {
  date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

pub async fn execute(args: NewsArgs, config: Config) -> Result<()> {
  let request = NewsRequest {
    news_type: args.news_type,
    article_id: args.article_id,
    count: args.num,
    start_date: args.start_date.and_then(start_of_day),
    export: export_formats(&args.export)?,
    export_dir: config.export_dir(args.export_dir),
  };

  let client = build_client(&config)?;
  let stdout = io::stdout();
  let mut out = stdout.lock();

  let report = list_news(&client, &FileExporter::new(), &mut out, &request).await?;
  out.flush()?;

  info!("Showed {} of {} {} articles", report.printed, report.retrieved, report.news_type);
  for path in &report.exported {
    info!("Saved {}", path.display());
  }

  Ok(())
}
