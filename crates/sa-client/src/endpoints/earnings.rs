//! Upcoming earnings calendar endpoint
//!
//! The calendar is an HTML page split over numbered pages:
//! `/earnings/earnings-calendar` for the first and
//! `/earnings/earnings-calendar/{n}` for the following ones.

use super::{impl_endpoint_base, EndpointBase};
use crate::client::DirectRateLimiter;
use crate::html::parse_earnings_page;
use crate::transport::Transport;
use sa_core::{Endpoint, Result};
use sa_models::EarningsRecord;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument};

/// Earnings calendar endpoints
pub struct EarningsEndpoints {
  transport: Arc<Transport>,
  rate_limiter: Arc<DirectRateLimiter>,
}

impl EarningsEndpoints {
  /// Create a new earnings endpoints instance
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<DirectRateLimiter>) -> Self {
    Self { transport, rate_limiter }
  }

  /// Fetch `pages` pages of the upcoming earnings calendar
  ///
  /// Records keep the page order, which upstream sorts by ascending date.
  /// Duplicate rows across pages are passed through.
  #[instrument(skip(self))]
  pub async fn upcoming(&self, pages: u32) -> Result<Vec<EarningsRecord>> {
    let mut records = Vec::new();

    for page in 1..=pages {
      self.wait_for_rate_limit().await?;

      let suffix = if page == 1 { None } else { Some(page.to_string()) };
      let html = self
        .transport()
        .get_text(Endpoint::EarningsCalendar, suffix.as_deref(), HashMap::new())
        .await?;

      let page_records = parse_earnings_page(&html)?;
      info!("Earnings calendar page {} returned {} rows", page, page_records.len());
      records.extend(page_records);
    }

    Ok(records)
  }
}

impl_endpoint_base!(EarningsEndpoints);

#[cfg(test)]
mod tests {
  use super::*;
  use governor::{Quota, RateLimiter};
  use std::num::NonZeroU32;

  fn create_test_endpoints() -> EarningsEndpoints {
    let transport = Arc::new(Transport::new_mock());
    let quota = Quota::per_minute(NonZeroU32::new(30).unwrap());
    let rate_limiter = Arc::new(RateLimiter::direct(quota));

    EarningsEndpoints::new(transport, rate_limiter)
  }

  #[test]
  fn test_endpoints_creation() {
    let endpoints = create_test_endpoints();
    assert_eq!(endpoints.transport().base_url(), "https://mock.seekingalpha.com");
  }

  #[tokio::test]
  async fn test_zero_pages_makes_no_request() {
    let endpoints = create_test_endpoints();
    let records = endpoints.upcoming(0).await.unwrap();
    assert!(records.is_empty());
  }
}
