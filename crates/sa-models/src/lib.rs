//! # sa-models
//!
//! Data models for the Seeking Alpha earnings calendar and news feeds.
//!
//! Two layers live here:
//!
//! - **Records** (`EarningsRecord`, `ArticleSummary`, `ArticleDetail`): the
//!   validated, immutable values the views work with.
//! - **Wire shapes** (`NewsListResponse`, `NewsArticleResponse`, `TrendingItem`):
//!   serde mirrors of the upstream JSON, converted into records by the client.
//!
//! ## Usage
//!
//! ```ignore
//! use sa_models::news::{NewsListResponse, ArticleSummary};
//!
//! let page: NewsListResponse = serde_json::from_str(&body)?;
//! let articles: Vec<ArticleSummary> = page.into_summaries("https://seekingalpha.com")?;
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod earnings;
pub mod news;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use earnings::*;
pub use news::*;
