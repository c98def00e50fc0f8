//! # sa-client
//!
//! A Seeking Alpha client for the upcoming earnings calendar and the news
//! feeds.
//!
//! ## Features
//!
//! - **Async/Await**: Built on tokio and reqwest
//! - **Rate Limiting**: Requests are spaced by a governor quota
//! - **Type Safe**: Responses are converted into sa-models records
//! - **Configurable**: Environment-based configuration via sa-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sa_client::SeekingAlphaClient;
//! use sa_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = SeekingAlphaClient::new(config)?;
//!
//!     // Two pages of the earnings calendar
//!     let earnings = client.earnings().upcoming(2).await?;
//!     println!("{} upcoming releases", earnings.len());
//!
//!     // Trending headlines
//!     for article in client.news().trending(5).await? {
//!         println!("{} - {}", article.id(), article.title());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, sa_core::Error>`.

#![deny(missing_docs)]
#![warn(clippy::all)]

/// Main Seeking Alpha client
pub mod client;
pub mod endpoints;
pub mod html;
pub mod transport;

// Re-export the main client and common types
pub use client::SeekingAlphaClient;
pub use sa_core::{Config, Error, Result};
pub use sa_models::*;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{earnings::EarningsEndpoints, news::NewsEndpoints};
