//! News listing endpoints
//!
//! This module provides access to the Seeking Alpha news feeds:
//! - Latest market news, paged backwards from a point in time
//! - The trending news feed
//! - Single articles by id, with the body reduced to plain text

use super::{impl_endpoint_base, EndpointBase};
use crate::client::DirectRateLimiter;
use crate::html::html_to_text;
use crate::transport::Transport;
use chrono::{DateTime, Utc};
use sa_core::{Endpoint, Result, NEWS_PAGE_SIZE};
use sa_models::news::*;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// News endpoints
pub struct NewsEndpoints {
    transport: Arc<Transport>,
    rate_limiter: Arc<DirectRateLimiter>,
}

impl NewsEndpoints {
    /// Create a new news endpoints instance
    pub fn new(transport: Arc<Transport>, rate_limiter: Arc<DirectRateLimiter>) -> Self {
        Self { transport, rate_limiter }
    }

    /// Latest market news published before `start_date` (now when `None`)
    ///
    /// Pages of 25 are fetched until at least `count` articles are collected
    /// or a page comes back empty. Every article of the last page is kept,
    /// so the result can hold more than `count` entries.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use sa_client::SeekingAlphaClient;
    /// # async fn run(client: SeekingAlphaClient) -> sa_core::Result<()> {
    /// let articles = client.news().latest(None, 10).await?;
    /// for article in &articles {
    ///     println!("{} {}", article.published_at(), article.title());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self))]
    pub async fn latest(
        &self,
        start_date: Option<DateTime<Utc>>,
        count: u32,
    ) -> Result<Vec<ArticleSummary>> {
        let until = start_date.unwrap_or_else(Utc::now).timestamp();
        let mut articles = Vec::new();
        let mut page_number = 1u32;

        while articles.len() < count as usize {
            self.wait_for_rate_limit().await?;

            let page: NewsListResponse = self
                .transport
                .get_json(Endpoint::NewsList, None, list_params(until, page_number))
                .await?;

            if page.data.is_empty() {
                debug!("News page {} is empty, stopping", page_number);
                break;
            }

            articles.extend(page.into_summaries(self.transport.base_url())?);
            page_number += 1;
        }

        Ok(articles)
    }

    /// The trending news feed, cut to `count` entries
    #[instrument(skip(self))]
    pub async fn trending(&self, count: u32) -> Result<Vec<ArticleSummary>> {
        self.wait_for_rate_limit().await?;

        let items: Vec<TrendingItem> =
            self.transport.get_json(Endpoint::TrendingNews, None, HashMap::new()).await?;

        items
            .into_iter()
            .take(count as usize)
            .map(|item| item.into_summary(self.transport.base_url()))
            .collect()
    }

    /// A single article with its body as plain text
    #[instrument(skip(self))]
    pub async fn article(&self, id: i64) -> Result<ArticleDetail> {
        self.wait_for_rate_limit().await?;

        let response: NewsArticleResponse = self
            .transport
            .get_json(Endpoint::NewsArticle, Some(&id.to_string()), HashMap::new())
            .await?;

        response.data.into_detail(self.transport.base_url(), html_to_text)
    }
}

impl_endpoint_base!(NewsEndpoints);

fn list_params(until: i64, page_number: u32) -> HashMap<String, String> {
    let mut params = HashMap::new();
    params.insert("filter[category]".to_string(), "market-news::all".to_string());
    params.insert("filter[since]".to_string(), "0".to_string());
    params.insert("filter[until]".to_string(), until.to_string());
    params.insert("include".to_string(), "author,primaryTickers,secondaryTickers".to_string());
    params.insert("isMounting".to_string(), "true".to_string());
    params.insert("page[size]".to_string(), NEWS_PAGE_SIZE.to_string());
    params.insert("page[number]".to_string(), page_number.to_string());
    params
}
