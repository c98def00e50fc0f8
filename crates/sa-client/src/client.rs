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

use crate::endpoints::{earnings::EarningsEndpoints, news::NewsEndpoints};

use crate::transport::Transport;
use governor::{
  Quota, RateLimiter,
  clock::DefaultClock,
  middleware::NoOpMiddleware,
  state::{InMemoryState, NotKeyed},
};
use sa_core::{Config, Result};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Direct (unkeyed) rate limiter shared by all endpoint groups
pub type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Main Seeking Alpha client
///
/// Provides access to the earnings calendar and the news feeds through
/// endpoint groups sharing one transport and one rate limiter.
///
/// # Examples
///
/// ```ignore
/// use sa_client::SeekingAlphaClient;
/// use sa_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = SeekingAlphaClient::new(Config::from_env()?)?;
///
///     let article = client.news().article(3745).await?;
///     println!("{}", article.title());
///
///     Ok(())
/// }
/// ```
pub struct SeekingAlphaClient {
  rate_limiter: Arc<DirectRateLimiter>,
  transport: Arc<Transport>,
}

impl SeekingAlphaClient {
  /// Create a new client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    // Ensure rate_limit is non-zero, fallback to default if invalid
    let rate_limit_value = NonZeroU32::new(config.rate_limit)
      .or_else(|| NonZeroU32::new(sa_core::DEFAULT_RATE_LIMIT))
      .unwrap_or(NonZeroU32::MIN);
    let quota = Quota::per_minute(rate_limit_value);
    let rate_limiter = Arc::new(RateLimiter::direct(quota));

    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { transport, rate_limiter })
  }

  /// Get access to the earnings calendar
  ///
  /// ```ignore
  /// let records = client.earnings().upcoming(3).await?;
  /// ```
  pub fn earnings(&self) -> EarningsEndpoints {
    EarningsEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Get access to the news feeds
  ///
  /// ```ignore
  /// let latest = client.news().latest(None, 10).await?;
  /// let trending = client.news().trending(10).await?;
  /// ```
  pub fn news(&self) -> NewsEndpoints {
    NewsEndpoints::new(self.transport.clone(), self.rate_limiter.clone())
  }

  /// Base URL requests are sent to
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}

impl std::fmt::Debug for SeekingAlphaClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SeekingAlphaClient")
      .field("transport", &self.transport)
      .field("rate_limiter", &"RateLimiter")
      .finish()
  }
}
