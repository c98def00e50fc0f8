//! News listing and article data models

use crate::common::{absolute_url, deserialize_id};
use sa_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// One entry of a news listing (latest or trending)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleSummary {
    id: i64,
    #[serde(rename = "publishedAt")]
    published_at: String,
    title: String,
    url: String,
}

impl ArticleSummary {
    /// Build a summary, rejecting blank required fields
    pub fn new(
        id: i64,
        published_at: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            id,
            published_at: required("publishedAt", id, published_at.into())?,
            title: required("title", id, title.into())?,
            url: required("url", id, url.into())?,
        })
    }

    /// Article id
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Publication timestamp as sent upstream
    pub fn published_at(&self) -> &str {
        &self.published_at
    }

    /// Headline
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Absolute article URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A single article including its body text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleDetail {
    id: i64,
    #[serde(rename = "publishedAt")]
    published_at: String,
    title: String,
    url: String,
    content: String,
}

impl ArticleDetail {
    /// Build a detail record. The body may be empty, the other fields may not.
    pub fn new(
        id: i64,
        published_at: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            id,
            published_at: required("publishedAt", id, published_at.into())?,
            title: required("title", id, title.into())?,
            url: required("url", id, url.into())?,
            content: content.into(),
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn published_at(&self) -> &str {
        &self.published_at
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The listing view of this article
    pub fn summary(&self) -> ArticleSummary {
        ArticleSummary {
            id: self.id,
            published_at: self.published_at.clone(),
            title: self.title.clone(),
            url: self.url.clone(),
        }
    }
}

fn required(field: &str, id: i64, value: String) -> Result<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(Error::MissingField(format!("{} (article {})", field, id)));
    }
    Ok(value)
}

/// Page of the v3 news listing API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsListResponse {
    #[serde(default)]
    pub data: Vec<NewsItemData>,
}

/// Response of the v3 single article API
#[derive(Debug, Clone, Deserialize)]
pub struct NewsArticleResponse {
    pub data: NewsItemData,
}

/// JSON:API resource object for a news item
#[derive(Debug, Clone, Deserialize)]
pub struct NewsItemData {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,

    pub attributes: NewsAttributes,

    #[serde(default)]
    pub links: NewsLinks,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsAttributes {
    #[serde(rename = "publishOn")]
    pub publish_on: Option<String>,

    pub title: Option<String>,

    /// HTML body, only present on the single article API
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsLinks {
    #[serde(rename = "self")]
    pub self_link: Option<String>,

    pub canonical: Option<String>,
}

impl NewsItemData {
    fn link(&self, base_url: &str) -> String {
        self.links
            .canonical
            .as_deref()
            .or(self.links.self_link.as_deref())
            .map(|path| absolute_url(base_url, path))
            .unwrap_or_default()
    }

    /// Convert a listing entry into a summary
    pub fn into_summary(self, base_url: &str) -> Result<ArticleSummary> {
        let url = self
            .links
            .self_link
            .as_deref()
            .map(|path| absolute_url(base_url, path))
            .unwrap_or_default();
        ArticleSummary::new(
            self.id,
            self.attributes.publish_on.unwrap_or_default(),
            self.attributes.title.unwrap_or_default(),
            url,
        )
    }

    /// Convert an article response into a detail record, rendering the HTML
    /// body with `render_content`
    pub fn into_detail<F>(self, base_url: &str, render_content: F) -> Result<ArticleDetail>
    where
        F: FnOnce(&str) -> String,
    {
        let url = self.link(base_url);
        let content = render_content(self.attributes.content.as_deref().unwrap_or(""));
        ArticleDetail::new(
            self.id,
            self.attributes.publish_on.unwrap_or_default(),
            self.attributes.title.unwrap_or_default(),
            url,
            content,
        )
    }
}

impl NewsListResponse {
    /// Convert every entry of the page, failing on the first invalid one
    pub fn into_summaries(self, base_url: &str) -> Result<Vec<ArticleSummary>> {
        self.data.into_iter().map(|item| item.into_summary(base_url)).collect()
    }
}

/// Entry of the trending news feed
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,

    pub title: Option<String>,

    #[serde(rename = "publishOn")]
    pub publish_on: Option<String>,

    pub uri: Option<String>,
}

impl TrendingItem {
    /// Convert a trending entry into a summary, keeping `publishOn` as sent
    pub fn into_summary(self, base_url: &str) -> Result<ArticleSummary> {
        let published = self.publish_on.unwrap_or_default();
        let url = self.uri.as_deref().map(|uri| absolute_url(base_url, uri)).unwrap_or_default();
        ArticleSummary::new(self.id, published, self.title.unwrap_or_default(), url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://seekingalpha.com";

    #[test]
    fn test_summary_requires_fields() {
        let err = ArticleSummary::new(7, "2021-10-05T08:14:27Z", "  ", "https://x").unwrap_err();
        match err {
            Error::MissingField(msg) => assert!(msg.contains("title") && msg.contains('7')),
            other => panic!("Expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_detail_summary_projection() {
        let detail =
            ArticleDetail::new(1, "2021-10-05T08:14:27-04:00", "Title", "https://x/1", "")
                .unwrap();
        let summary = detail.summary();
        assert_eq!(summary.id(), 1);
        assert_eq!(summary.title(), "Title");
        assert_eq!(summary.url(), detail.url());
    }

    #[test]
    fn test_news_list_parsing() {
        let body = r#"{
            "data": [
                {
                    "id": "3745",
                    "type": "news",
                    "attributes": {"publishOn": "2021-10-05T08:14:27-04:00", "title": "Stocks rally"},
                    "links": {"self": "/news/3745-stocks-rally"}
                }
            ],
            "meta": {"page": {"size": 25}}
        }"#;
        let page: NewsListResponse = serde_json::from_str(body).unwrap();
        let articles = page.into_summaries(BASE).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id(), 3745);
        assert_eq!(articles[0].url(), "https://seekingalpha.com/news/3745-stocks-rally");
    }

    #[test]
    fn test_empty_page() {
        let page: NewsListResponse = serde_json::from_str(r#"{"meta": {}}"#).unwrap();
        assert!(page.data.is_empty());
    }

    #[test]
    fn test_article_detail_parsing() {
        let body = r#"{
            "data": {
                "id": "12",
                "attributes": {
                    "publishOn": "2021-10-05T08:14:27-04:00",
                    "title": "Fed minutes",
                    "content": "<p>Body</p>"
                },
                "links": {"self": "/news/12", "canonical": "https://seekingalpha.com/news/12-fed"}
            }
        }"#;
        let response: NewsArticleResponse = serde_json::from_str(body).unwrap();
        let detail = response.data.into_detail(BASE, |html| html.replace("<p>", "").replace("</p>", "")).unwrap();
        assert_eq!(detail.content(), "Body");
        assert_eq!(detail.url(), "https://seekingalpha.com/news/12-fed");
    }

    #[test]
    fn test_trending_parsing() {
        let body = r#"[{"id": 99, "title": "Oil jumps", "publishOn": " 2021-10-05T08:14:27Z ", "uri": "/news/99"}]"#;
        let items: Vec<TrendingItem> = serde_json::from_str(body).unwrap();
        let summary = items.into_iter().next().unwrap().into_summary(BASE).unwrap();
        assert_eq!(summary.published_at(), "2021-10-05T08:14:27Z");
        assert_eq!(summary.url(), "https://seekingalpha.com/news/99");
    }

    #[test]
    fn test_summary_serializes_with_upstream_names() {
        let summary = ArticleSummary::new(5, "2021-10-05 08:14", "T", "https://x/5").unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["publishedAt"], "2021-10-05 08:14");
        assert_eq!(json["id"], 5);
    }
}
