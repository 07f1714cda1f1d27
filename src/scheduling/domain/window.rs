//! Time windows and listing ranges.

use super::SchedulingDomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The half-open time span an appointment occupies.
///
/// Construction enforces `start < end`. Two windows overlap when
/// `a.start < b.end && a.end > b.start`; windows that merely touch at an
/// endpoint do not overlap, so back-to-back bookings are admissible.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use herriot::scheduling::domain::TimeWindow;
///
/// let nine = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).single().expect("valid timestamp");
/// let ten = Utc.with_ymd_and_hms(2026, 3, 2, 10, 0, 0).single().expect("valid timestamp");
/// let eleven = Utc.with_ymd_and_hms(2026, 3, 2, 11, 0, 0).single().expect("valid timestamp");
///
/// let first = TimeWindow::new(nine, ten).expect("valid window");
/// let second = TimeWindow::new(ten, eleven).expect("valid window");
/// assert!(!first.overlaps(&second));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a validated time window.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingDomainError::InvalidWindow`] when `end` is not
    /// strictly after `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, SchedulingDomainError> {
        if start >= end {
            return Err(SchedulingDomainError::InvalidWindow);
        }
        Ok(Self { start, end })
    }

    /// Returns the window's start instant.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the window's end instant.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns whether this window intersects another.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && self.end > other.start
    }
}

/// Inclusive date range used when listing a veterinarian's schedule.
///
/// Unlike [`TimeWindow`], equal bounds are permitted; a single-instant
/// range matches appointments starting exactly on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a validated date range.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingDomainError::InvalidDateRange`] when `start`
    /// comes after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, SchedulingDomainError> {
        if start > end {
            return Err(SchedulingDomainError::InvalidDateRange);
        }
        Ok(Self { start, end })
    }

    /// Returns the range's first instant.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the range's last instant.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns whether the given instant falls inside the range.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}
