// Copyright (c) Spendsight.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A fixed lookback window used to scope report aggregation.
///
/// Day counts are deliberately approximate (30-day "month", 365-day "year"):
/// they feed the headline date-range filter and the daily-average insight.
/// The monthly-trend buckets use exact calendar-month boundaries instead,
/// via [`month_date_range`]. Both behaviors are intentional and distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportPeriod {
    ThisWeek,
    ThisMonth,
    ThreeMonths,
    SixMonths,
    ThisYear,
}

struct PeriodSpec {
    days: i64,
    display_name: &'static str,
    token: &'static str,
    /// Number of trailing calendar months covered, or None for the full
    /// current calendar year (January through December, future months
    /// included).
    trailing_months: Option<u32>,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 5] = [
        ReportPeriod::ThisWeek,
        ReportPeriod::ThisMonth,
        ReportPeriod::ThreeMonths,
        ReportPeriod::SixMonths,
        ReportPeriod::ThisYear,
    ];

    const fn spec(self) -> &'static PeriodSpec {
        match self {
            ReportPeriod::ThisWeek => &PeriodSpec {
                days: 7,
                display_name: "This week",
                token: "week",
                trailing_months: Some(1),
            },
            ReportPeriod::ThisMonth => &PeriodSpec {
                days: 30,
                display_name: "This month",
                token: "month",
                trailing_months: Some(1),
            },
            ReportPeriod::ThreeMonths => &PeriodSpec {
                days: 90,
                display_name: "3 months",
                token: "3m",
                trailing_months: Some(3),
            },
            ReportPeriod::SixMonths => &PeriodSpec {
                days: 180,
                display_name: "6 months",
                token: "6m",
                trailing_months: Some(6),
            },
            ReportPeriod::ThisYear => &PeriodSpec {
                days: 365,
                display_name: "This year",
                token: "year",
                trailing_months: None,
            },
        }
    }

    pub fn days(self) -> i64 {
        self.spec().days
    }

    pub fn display_name(self) -> &'static str {
        self.spec().display_name
    }

    pub fn token(self) -> &'static str {
        self.spec().token
    }

    pub fn from_token(s: &str) -> Option<ReportPeriod> {
        let s = s.trim().to_lowercase();
        ReportPeriod::ALL.into_iter().find(|p| p.token() == s)
    }

    /// The headline window: plain day subtraction from `now`, not
    /// calendar-aware.
    pub fn date_range(self, now: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
        (now - Duration::days(self.days()), now)
    }

    /// The `(month 1-12, year)` pairs this period spans, oldest first.
    pub fn months(self, today: NaiveDate) -> Vec<(u32, i32)> {
        match self.spec().trailing_months {
            Some(n) => {
                let mut months = Vec::with_capacity(n as usize);
                let (mut month, mut year) = (today.month(), today.year());
                for _ in 0..n {
                    months.push((month, year));
                    if month == 1 {
                        month = 12;
                        year -= 1;
                    } else {
                        month -= 1;
                    }
                }
                months.reverse();
                months
            }
            // All 12 months of the current year, even the ones still ahead;
            // queries for future months just come back empty.
            None => (1..=12).map(|m| (m, today.year())).collect(),
        }
    }
}

/// Exact calendar bucket for one month: first instant through 23:59:59.999
/// of the last day (first of the next month minus one day).
pub fn month_date_range(month: u32, year: i32) -> Result<(NaiveDateTime, NaiveDateTime)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{:02}", year, month))?;
    let (next_y, next_m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .ok_or_else(|| anyhow::anyhow!("Invalid month {}-{:02}", next_y, next_m))?;
    let last = first_of_next - Duration::days(1);
    let start = first
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow::anyhow!("Invalid start of {}-{:02}", year, month))?;
    let end = last
        .and_hms_milli_opt(23, 59, 59, 999)
        .ok_or_else(|| anyhow::anyhow!("Invalid end of {}-{:02}", year, month))?;
    Ok((start, end))
}

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn month_label(month: u32) -> &'static str {
    MONTH_LABELS
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("???")
}
