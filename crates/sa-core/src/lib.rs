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

pub mod config;
pub mod error;
pub mod export;

pub use config::Config;
pub use error::{Error, Result};
pub use export::ExportFormat;

/// The Seeking Alpha resources used by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  /// HTML earnings calendar, one page per request
  EarningsCalendar,
  /// Paged market-news listing (JSON API)
  NewsList,
  /// Trending news feed (JSON)
  TrendingNews,
  /// Single news article by id (JSON API)
  NewsArticle,
}

impl Endpoint {
  /// Path of the resource relative to the base URL
  pub fn path(&self) -> &'static str {
    match self {
      Endpoint::EarningsCalendar => "earnings/earnings-calendar",
      Endpoint::NewsList => "api/v3/news",
      Endpoint::TrendingNews => "news/trending_news",
      Endpoint::NewsArticle => "api/v3/news",
    }
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Endpoint::EarningsCalendar => write!(f, "EARNINGS_CALENDAR"),
      Endpoint::NewsList => write!(f, "NEWS_LIST"),
      Endpoint::TrendingNews => write!(f, "TRENDING_NEWS"),
      Endpoint::NewsArticle => write!(f, "NEWS_ARTICLE"),
    }
  }
}

/// Base URL for Seeking Alpha
pub const SEEKING_ALPHA_BASE_URL: &str = "https://seekingalpha.com";

/// Requests per minute when nothing else is configured
pub const DEFAULT_RATE_LIMIT: u32 = 30;

/// Articles returned per page by the news listing API
pub const NEWS_PAGE_SIZE: u32 = 25;

/// Default directory for exported files
pub const DEFAULT_EXPORT_DIR: &str = "exports";

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_endpoint_paths() {
    assert_eq!(Endpoint::EarningsCalendar.path(), "earnings/earnings-calendar");
    assert_eq!(Endpoint::TrendingNews.path(), "news/trending_news");
    assert_eq!(Endpoint::NewsList.path(), Endpoint::NewsArticle.path());
  }

  #[test]
  fn test_endpoint_display() {
    assert_eq!(Endpoint::NewsList.to_string(), "NEWS_LIST");
    assert_eq!(Endpoint::EarningsCalendar.to_string(), "EARNINGS_CALENDAR");
  }
}
