//! Reporting period representation
//!
//! Supports two period types: an explicit quarter ("Q1 2025") and the
//! trailing twelve-month window ("past-12-months"). A period resolves to an
//! inclusive date interval and decomposes into ordered time buckets (weeks
//! within a quarter, calendar months across the trailing window) for the
//! sales-over-time series.
//!
//! The dataset is a static demo snapshot, so the trailing window is a fixed
//! reference interval rather than being computed from the current date.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selector token for the trailing twelve-month window
pub const TRAILING_12_TOKEN: &str = "past-12-months";

/// Month abbreviations used in bucket labels
const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A reporting period
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ReportPeriod {
    /// A calendar quarter (e.g. "Q1 2025")
    Quarter { quarter: u8, year: i32 },

    /// The fixed trailing twelve-month reference window
    Trailing12,
}

impl ReportPeriod {
    /// Create a quarter period, validating the quarter number
    pub fn quarter(quarter: u8, year: i32) -> Result<Self, PeriodParseError> {
        if !(1..=4).contains(&quarter) {
            return Err(PeriodParseError::QuarterOutOfRange(quarter));
        }
        Ok(Self::Quarter { quarter, year })
    }

    /// First day of the period
    pub fn start_date(&self) -> NaiveDate {
        match self {
            Self::Quarter { quarter, year } => {
                let start_month = (*quarter as u32 - 1) * 3 + 1;
                NaiveDate::from_ymd_opt(*year, start_month, 1).unwrap()
            }
            Self::Trailing12 => NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
        }
    }

    /// Last day of the period (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        match self {
            Self::Quarter { quarter, year } => {
                let end_month = *quarter as u32 * 3;
                last_day_of_month(*year, end_month)
            }
            Self::Trailing12 => NaiveDate::from_ymd_opt(2025, 9, 30).unwrap(),
        }
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Decompose the period into ordered time buckets: 7-day buckets for a
    /// quarter (the last one truncated to the quarter end), calendar months
    /// for the trailing window.
    pub fn buckets(&self) -> Vec<TimeBucket> {
        match self {
            Self::Quarter { .. } => {
                let start = self.start_date();
                let end = self.end_date();
                let total_days = (end - start).num_days() + 1;
                let count = (total_days + 6) / 7;

                (0..count)
                    .map(|i| {
                        let bucket_start = start + Duration::days(i * 7);
                        let bucket_end = (bucket_start + Duration::days(6)).min(end);
                        TimeBucket {
                            index: i as usize,
                            start: bucket_start,
                            end: bucket_end,
                            label: format!(
                                "{}/{}-{}/{}",
                                bucket_start.month(),
                                bucket_start.day(),
                                bucket_end.month(),
                                bucket_end.day()
                            ),
                        }
                    })
                    .collect()
            }
            Self::Trailing12 => {
                let start = self.start_date();
                (0..12)
                    .map(|i| {
                        let month0 = start.month0() + i;
                        let year = start.year() + (month0 / 12) as i32;
                        let month = month0 % 12 + 1;
                        let bucket_start = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
                        TimeBucket {
                            index: i as usize,
                            start: bucket_start,
                            end: last_day_of_month(year, month),
                            label: format!("{} {}", MONTH_ABBREV[month as usize - 1], year),
                        }
                    })
                    .collect()
            }
        }
    }

    /// Bucket index for a date, or None when the date falls outside the
    /// period. Every in-range date maps to exactly one bucket.
    pub fn bucket_index(&self, date: NaiveDate) -> Option<usize> {
        if !self.contains(date) {
            return None;
        }
        match self {
            Self::Quarter { .. } => {
                let days = (date - self.start_date()).num_days();
                Some((days / 7) as usize)
            }
            Self::Trailing12 => {
                let start = self.start_date();
                let months =
                    (date.year() - start.year()) * 12 + date.month0() as i32 - start.month0() as i32;
                Some(months as usize)
            }
        }
    }

    /// Human-facing label for report headers
    pub fn display_label(&self) -> String {
        match self {
            Self::Quarter { .. } => self.to_string(),
            Self::Trailing12 => "Past 12 Months".to_string(),
        }
    }

    /// Parse a period selector
    ///
    /// Formats:
    /// - Quarter: "Q1 2025"
    /// - Trailing window: "past-12-months" (or "past 12 months")
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        if s.eq_ignore_ascii_case(TRAILING_12_TOKEN) || s.eq_ignore_ascii_case("past 12 months") {
            return Ok(Self::Trailing12);
        }

        let mut parts = s.split_whitespace();
        let (quarter_part, year_part) = match (parts.next(), parts.next(), parts.next()) {
            (Some(q), Some(y), None) => (q, y),
            _ => return Err(PeriodParseError::InvalidFormat(s.to_string())),
        };

        let quarter_digits = quarter_part
            .strip_prefix('Q')
            .or_else(|| quarter_part.strip_prefix('q'))
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let quarter: u8 = quarter_digits
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let year: i32 = year_part
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        Self::quarter(quarter, year)
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quarter { quarter, year } => write!(f, "Q{} {}", quarter, year),
            Self::Trailing12 => write!(f, "{}", TRAILING_12_TOKEN),
        }
    }
}

impl FromStr for ReportPeriod {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One fixed sub-interval of a reporting period
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBucket {
    /// Position in the chronological bucket sequence (0-based)
    pub index: usize,

    /// First day of the bucket
    pub start: NaiveDate,

    /// Last day of the bucket (inclusive, truncated to the period end)
    pub end: NaiveDate,

    /// Compact display label ("1/1-1/7" or "Oct 2024")
    pub label: String,
}

/// Last calendar day of a month, computed as day 0 of the following month
fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap() - Duration::days(1)
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    QuarterOutOfRange(u8),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::QuarterOutOfRange(q) => {
                write!(f, "Quarter out of range (1-4): {}", q)
            }
        }
    }
}

impl std::error::Error for PeriodParseError {}

impl From<PeriodParseError> for crate::error::SalesError {
    fn from(err: PeriodParseError) -> Self {
        Self::InvalidPeriod(err.to_string())
    }
}
