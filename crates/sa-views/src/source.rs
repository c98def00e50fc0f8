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

//! Retrieval seam used by the views

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sa_client::SeekingAlphaClient;
use sa_core::Result;
use sa_models::{ArticleDetail, ArticleSummary, EarningsRecord};

/// Where the views get their records from.
///
/// [`SeekingAlphaClient`] is the production implementation. Tests substitute
/// a mock or an in-memory fake.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketDataSource: Send + Sync {
  /// Upcoming earnings releases from the first `page_count` calendar pages
  async fn upcoming_earnings(&self, page_count: u32) -> Result<Vec<EarningsRecord>>;

  /// Latest market news published before `start_date` (now when `None`)
  async fn article_list(
    &self,
    start_date: Option<DateTime<Utc>>,
    count: u32,
  ) -> Result<Vec<ArticleSummary>>;

  /// Trending news
  async fn trending_list(&self, count: u32) -> Result<Vec<ArticleSummary>>;

  /// One article with its body
  async fn article_by_id(&self, id: i64) -> Result<ArticleDetail>;
}

#[async_trait]
impl MarketDataSource for SeekingAlphaClient {
  async fn upcoming_earnings(&self, page_count: u32) -> Result<Vec<EarningsRecord>> {
    self.earnings().upcoming(page_count).await
  }

  async fn article_list(
    &self,
    start_date: Option<DateTime<Utc>>,
    count: u32,
  ) -> Result<Vec<ArticleSummary>> {
    self.news().latest(start_date, count).await
  }

  async fn trending_list(&self, count: u32) -> Result<Vec<ArticleSummary>> {
    self.news().trending(count).await
  }

  async fn article_by_id(&self, id: i64) -> Result<ArticleDetail> {
    self.news().article(id).await
  }
}
