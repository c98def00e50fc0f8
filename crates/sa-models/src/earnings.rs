//! Earnings calendar data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used by the earnings calendar cells
pub const EARNINGS_DATE_FORMAT: &str = "%m/%d/%Y";

/// One row of the upcoming earnings calendar.
///
/// Ticker and company name are optional because calendar rows are sometimes
/// incomplete upstream. Nothing here deduplicates; the same (date, ticker)
/// pair can appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsRecord {
    /// Scheduled release date
    pub date: NaiveDate,

    /// Ticker symbol
    pub ticker: Option<String>,

    /// Company name
    pub company_name: Option<String>,
}

impl EarningsRecord {
    /// Build a record, treating blank text as missing
    pub fn new(date: NaiveDate, ticker: Option<&str>, company_name: Option<&str>) -> Self {
        Self {
            date,
            ticker: non_blank(ticker),
            company_name: non_blank(company_name),
        }
    }

    /// Parse a date cell such as `10/21/2021`
    pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
        NaiveDate::parse_from_str(raw.trim(), EARNINGS_DATE_FORMAT)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_missing() {
        let date = NaiveDate::from_ymd_opt(2021, 10, 21).unwrap();
        let record = EarningsRecord::new(date, Some(" AAPL "), Some("  "));
        assert_eq!(record.ticker.as_deref(), Some("AAPL"));
        assert!(record.company_name.is_none());
    }

    #[test]
    fn test_parse_date() {
        let date = EarningsRecord::parse_date("10/21/2021").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2021, 10, 21).unwrap());
        assert!(EarningsRecord::parse_date("2021-10-21").is_err());
    }

    #[test]
    fn test_serde_shape() {
        let date = NaiveDate::from_ymd_opt(2021, 10, 21).unwrap();
        let record = EarningsRecord::new(date, Some("MSFT"), Some("Microsoft Corporation"));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2021-10-21");
        assert_eq!(json["ticker"], "MSFT");
    }
}
