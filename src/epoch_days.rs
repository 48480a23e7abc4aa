//! Linear day counts on the 1970-01-01 epoch axis.

use crate::algorithm;
use crate::{HistoricError, HistoricResult};

/// Largest absolute day count supported by conversions.
pub(crate) const MAX_EPOCH_DAYS: i64 = 100_000_001;

/// An integer count of days since 1970-01-01 (gregorian).
///
/// The universal conversion axis of this crate: every conversion between
/// historical dates passes through it, and the arithmetic difference of two
/// values is the number of elapsed calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EpochDays(i64);

impl EpochDays {
    /// Sentinel start of a proleptic history, earlier than any representable
    /// day.
    pub const MIN: Self = Self(i64::MIN);

    /// Wraps a raw day count.
    pub const fn new(days: i64) -> Self {
        Self(days)
    }

    /// Returns the raw day count.
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// The epoch day of a proleptic gregorian (ISO) calendar date.
    ///
    /// # Errors
    ///
    /// Returns an error if the components do not form a valid gregorian date
    /// or the result leaves the supported conversion range.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> HistoricResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(HistoricError::InvalidMonth { month });
        }
        let max = algorithm::days_in_month(month, algorithm::is_gregorian_leap_year(i64::from(year)));
        if day < 1 || day > max {
            return Err(HistoricError::InvalidDayOfMonth { day });
        }
        let days = Self(algorithm::gregorian_to_epoch_days(
            i64::from(year),
            i64::from(month),
            i64::from(day),
        ));
        days.check_validity()?;
        Ok(days)
    }

    /// The proleptic gregorian `(year, month, day)` of this day.
    pub fn to_gregorian(self) -> (i32, u8, u8) {
        let (year, month, day) = algorithm::gregorian_from_epoch_days(self.0);
        (year as i32, month, day)
    }

    /// Errors if the day count is outside the supported conversion range.
    pub(crate) fn check_validity(self) -> HistoricResult<()> {
        if !is_valid_epoch_days(self.0) {
            return Err(HistoricError::EpochDaysOutOfRange { days: self.0 });
        }
        Ok(())
    }
}

/// Utility for determining if a day count is within the supported range.
#[inline]
#[must_use]
pub(crate) fn is_valid_epoch_days(days: i64) -> bool {
    (-MAX_EPOCH_DAYS..=MAX_EPOCH_DAYS).contains(&days)
}
