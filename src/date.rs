//! Historical era and date value types.

use core::cmp::Ordering;
use core::fmt;

use tinystr::{tinystr, TinyAsciiStr};

use crate::{HistoricError, HistoricResult};

/// A named epoch anchor establishing how year-of-era numbers are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoricEra {
    /// Years counted backwards from the epoch ("before Christ").
    Bc,
    /// Years counted forwards from the epoch ("anno Domini").
    Ad,
}

impl HistoricEra {
    /// Maps a 1-based year of this era to the signed proleptic year.
    ///
    /// Year 1 BC is proleptic year 0, year 2 BC is -1, and so on.
    pub const fn anno_domini(self, year_of_era: i32) -> i64 {
        match self {
            Self::Bc => 1 - year_of_era as i64,
            Self::Ad => year_of_era as i64,
        }
    }

    /// Two-letter code of this era.
    pub fn code(self) -> TinyAsciiStr<2> {
        match self {
            Self::Bc => tinystr!(2, "BC"),
            Self::Ad => tinystr!(2, "AD"),
        }
    }
}

impl fmt::Display for HistoricEra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().as_str())
    }
}

/// A historical calendar date: era, 1-based year of era, month and
/// day of month.
///
/// A `HistoricDate` is plain data. The constructor only checks component
/// ranges; whether the date denotes a real day is decided by the
/// [`CalendarHistory`](crate::CalendarHistory) interpreting it, since the
/// same components may be valid under one calendar algorithm and invalid
/// under another (or fall into a cutover gap).
///
/// Dates order chronologically across eras: `2 BC < 1 BC < AD 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HistoricDate {
    era: HistoricEra,
    year_of_era: i32,
    month: u8,
    day: u8,
}

impl HistoricDate {
    /// Creates a new `HistoricDate` from its components.
    ///
    /// # Errors
    ///
    /// Returns an error if the year of era is below 1, the month is outside
    /// `1..=12`, or the day of month is outside `1..=31`.
    pub fn new(era: HistoricEra, year_of_era: i32, month: u8, day: u8) -> HistoricResult<Self> {
        if year_of_era < 1 {
            return Err(HistoricError::InvalidYearOfEra { year: year_of_era });
        }
        if !(1..=12).contains(&month) {
            return Err(HistoricError::InvalidMonth { month });
        }
        if !(1..=31).contains(&day) {
            return Err(HistoricError::InvalidDayOfMonth { day });
        }
        Ok(Self::new_unchecked(era, year_of_era, month, day))
    }

    /// Creates a new `HistoricDate` without validating the components.
    pub(crate) const fn new_unchecked(
        era: HistoricEra,
        year_of_era: i32,
        month: u8,
        day: u8,
    ) -> Self {
        Self {
            era,
            year_of_era,
            month,
            day,
        }
    }

    /// Returns the era of this date.
    pub fn era(&self) -> HistoricEra {
        self.era
    }

    /// Returns the 1-based year of era.
    pub fn year_of_era(&self) -> i32 {
        self.year_of_era
    }

    /// Returns the month, in `1..=12`.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of month.
    pub fn day_of_month(&self) -> u8 {
        self.day
    }

    /// The signed proleptic year of this date.
    pub(crate) const fn proleptic_year(&self) -> i64 {
        self.era.anno_domini(self.year_of_era)
    }
}

impl PartialOrd for HistoricDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HistoricDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.proleptic_year(), self.month, self.day).cmp(&(
            other.proleptic_year(),
            other.month,
            other.day,
        ))
    }
}

impl fmt::Display for HistoricDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:04}-{:02}-{:02}",
            self.era, self.year_of_era, self.month, self.day
        )
    }
}
