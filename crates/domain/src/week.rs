// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::Serialize;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, Duration, Weekday};

/// The `YYYY-MM-DD` format used for date keys, headers and filenames.
pub const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// Seven contiguous calendar dates anchored at a normalized week start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekWindow {
    start: Date,
}

impl WeekWindow {
    /// Returns the week containing `date`, starting on `week_start`.
    ///
    /// # Errors
    ///
    /// Returns an error if the window would fall outside the supported date range.
    pub fn containing(date: Date, week_start: Weekday) -> Result<Self, DomainError> {
        let offset: u8 = (date.weekday().number_days_from_monday() + 7
            - week_start.number_days_from_monday())
            % 7;
        let start: Date = date
            .checked_sub(Duration::days(i64::from(offset)))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("normalizing {date} to the start of its week"),
            })?;
        Self::starting(start)
    }

    /// Returns the window beginning exactly on `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if the last day of the window is not representable.
    pub fn starting(start: Date) -> Result<Self, DomainError> {
        start
            .checked_add(Duration::days(6))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("computing the week starting {start}"),
            })?;
        Ok(Self { start })
    }

    /// Returns the first date of the window.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last date of the window.
    #[must_use]
    pub fn end(&self) -> Date {
        self.start.saturating_add(Duration::days(6))
    }

    /// Returns the seven dates of the window in ascending order.
    #[must_use]
    pub fn dates(&self) -> Vec<Date> {
        (0_i64..7)
            .filter_map(|offset| self.start.checked_add(Duration::days(offset)))
            .collect()
    }

    /// Returns whether `date` falls inside the window.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        (self.start..=self.end()).contains(&date)
    }

    /// Returns the following week.
    ///
    /// # Errors
    ///
    /// Returns an error on date overflow.
    pub fn next(&self) -> Result<Self, DomainError> {
        let start: Date = self.start.checked_add(Duration::weeks(1)).ok_or_else(|| {
            DomainError::DateArithmeticOverflow {
                operation: String::from("advancing to the next week"),
            }
        })?;
        Self::starting(start)
    }

    /// Returns the preceding week.
    ///
    /// # Errors
    ///
    /// Returns an error on date overflow.
    pub fn previous(&self) -> Result<Self, DomainError> {
        let start: Date = self.start.checked_sub(Duration::weeks(1)).ok_or_else(|| {
            DomainError::DateArithmeticOverflow {
                operation: String::from("moving to the previous week"),
            }
        })?;
        Self::starting(start)
    }
}
