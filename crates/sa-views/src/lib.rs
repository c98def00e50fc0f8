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

//! # sa-views
//!
//! The earnings calendar and news views.
//!
//! Both workflows follow the same shape: fetch records through a
//! [`MarketDataSource`], reshape them in memory, write a text rendering to the
//! supplied writer and, when formats were requested, hand a [`Dataset`] to an
//! [`Exporter`].

pub mod dataset;
pub mod earnings;
pub mod error;
pub mod export;
pub mod news;
pub mod render;
pub mod source;

pub use dataset::Dataset;
pub use earnings::{list_upcoming_earnings, EarningsReport, EarningsTable, UpcomingEarningsRequest};
pub use error::{ViewError, ViewResult};
pub use export::{Exporter, FileExporter};
pub use news::{list_news, NewsReport, NewsRequest, NewsType, LISTING_MODE};
pub use source::MarketDataSource;
