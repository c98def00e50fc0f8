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

//! Configuration management for the Seeking Alpha client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Seeking Alpha client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Rate limit (requests per minute)
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Retries for failed requests. Zero disables retrying.
  pub max_retries: u32,

  /// Base URL for Seeking Alpha
  pub base_url: String,

  /// Directory exported files are written to
  pub export_dir: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let rate_limit = env::var("SA_RATE_LIMIT")
      .unwrap_or_else(|_| crate::DEFAULT_RATE_LIMIT.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid SA_RATE_LIMIT".to_string()))?;

    let timeout_secs = env::var("SA_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid SA_TIMEOUT_SECS".to_string()))?;

    let max_retries = env::var("SA_MAX_RETRIES")
      .unwrap_or_else(|_| "0".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid SA_MAX_RETRIES".to_string()))?;

    let base_url = env::var("SA_BASE_URL")
      .unwrap_or_else(|_| crate::SEEKING_ALPHA_BASE_URL.to_string())
      .trim_end_matches('/')
      .to_string();

    url::Url::parse(&base_url)
      .map_err(|e| Error::Config(format!("Invalid SA_BASE_URL {}: {}", base_url, e)))?;

    let export_dir =
      env::var("SA_EXPORT_DIR").unwrap_or_else(|_| crate::DEFAULT_EXPORT_DIR.to_string());

    Ok(Config { rate_limit, timeout_secs, max_retries, base_url, export_dir })
  }

  /// Same defaults as `from_env` but pointed at another host (mock servers in tests)
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Config { base_url: base_url.into(), ..Config::default() }
  }
}

impl Default for Config {
  fn default() -> Self {
    Config {
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: 30,
      max_retries: 0,
      base_url: crate::SEEKING_ALPHA_BASE_URL.to_string(),
      export_dir: crate::DEFAULT_EXPORT_DIR.to_string(),
    }
  }
}
