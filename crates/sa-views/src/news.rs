//! Latest and trending news, listed or read one article at a time

use crate::dataset::Dataset;
use crate::error::{ViewError, ViewResult};
use crate::export::{export_all, Exporter};
use crate::source::MarketDataSource;
use chrono::{DateTime, Utc};
use sa_core::ExportFormat;
use sa_models::{display_timestamp, truncate_timestamp, ArticleDetail, ArticleSummary};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, warn};

/// Article id meaning "list articles" rather than "show this article"
pub const LISTING_MODE: i64 = -1;

/// Printed when the news type is not recognised
pub const WRONG_TYPE_MESSAGE: &str = "Wrong type of news selected";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsType {
  Latest,
  Trending,
}

impl NewsType {
  pub fn as_str(&self) -> &'static str {
    match self {
      NewsType::Latest => "latest",
      NewsType::Trending => "trending",
    }
  }
}

impl FromStr for NewsType {
  type Err = ViewError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "latest" => Ok(NewsType::Latest),
      "trending" => Ok(NewsType::Trending),
      other => Err(ViewError::InvalidInput(format!("unknown news type: {}", other))),
    }
  }
}

impl fmt::Display for NewsType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone)]
pub struct NewsRequest {
  /// `latest` or `trending`, kept raw so an unknown value can be reported
  pub news_type: String,
  /// [`LISTING_MODE`] lists articles, any other value shows that article
  pub article_id: i64,
  /// Articles to print in listing mode
  pub count: u32,
  /// Latest news published before this instant, now when `None`
  pub start_date: Option<DateTime<Utc>>,
  pub export: Vec<ExportFormat>,
  pub export_dir: PathBuf,
}

/// What one run of [`list_news`] produced
#[derive(Debug, Clone)]
pub struct NewsReport {
  pub news_type: NewsType,
  /// Articles returned by the source
  pub retrieved: usize,
  /// Articles written to the output
  pub printed: usize,
  pub exported: Vec<PathBuf>,
}

/// Print a news listing or a single article and optionally export it.
///
/// An unknown news type prints [`WRONG_TYPE_MESSAGE`] and returns
/// [`ViewError::InvalidInput`] without contacting the source.
pub async fn list_news<S, E, W>(
  source: &S,
  exporter: &E,
  out: &mut W,
  request: &NewsRequest,
) -> ViewResult<NewsReport>
where
  S: MarketDataSource + ?Sized,
  E: Exporter + ?Sized,
  W: Write,
{
  let news_type = match request.news_type.parse::<NewsType>() {
    Ok(news_type) => news_type,
    Err(e) => {
      warn!("{}", e);
      writeln!(out, "{}\n", WRONG_TYPE_MESSAGE)?;
      out.flush()?;
      return Err(e);
    }
  };

  let (retrieved, printed, data) = if request.article_id == LISTING_MODE {
    if request.count == 0 {
      return Err(ViewError::InvalidInput("number of articles must be at least 1".to_string()));
    }

    let articles = match news_type {
      NewsType::Latest => source.article_list(request.start_date, request.count).await?,
      NewsType::Trending => source.trending_list(request.count).await?,
    };
    info!("Retrieved {} {} articles", articles.len(), news_type);

    let printed = print_listing(out, &articles, request.count as usize)?;
    let data = if request.export.is_empty() { None } else { Some(Dataset::from_records(&articles)?) };
    (articles.len(), printed, data)
  } else {
    let article = source.article_by_id(request.article_id).await?;
    info!("Retrieved article {}", article.id());

    print_article(out, &article)?;
    let data = if request.export.is_empty() {
      None
    } else {
      Some(Dataset::from_records(std::slice::from_ref(&article))?)
    };
    (1, 1, data)
  };
  out.flush()?;

  let exported = match data {
    Some(data) => {
      export_all(exporter, &request.export, &request.export_dir, news_type.as_str(), &data)?
    }
    None => Vec::new(),
  };

  Ok(NewsReport { news_type, retrieved, printed, exported })
}

/// Up to `limit` articles, each as header line, URL and a blank line
fn print_listing<W: Write>(out: &mut W, articles: &[ArticleSummary], limit: usize) -> ViewResult<usize> {
  let shown = &articles[..articles.len().min(limit)];
  for article in shown {
    writeln!(
      out,
      "{} - {} - {}",
      display_timestamp(article.published_at()),
      article.id(),
      article.title()
    )?;
    writeln!(out, "{}", article.url())?;
    writeln!(out)?;
  }
  Ok(shown.len())
}

fn print_article<W: Write>(out: &mut W, article: &ArticleDetail) -> ViewResult<()> {
  writeln!(out, "{}   {}", truncate_timestamp(article.published_at()), article.title())?;
  writeln!(out, "{}", article.url())?;
  writeln!(out)?;
  writeln!(out, "{}", article.content())?;
  Ok(())
}
