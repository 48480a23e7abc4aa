//! Error types for `historic_rs`.

use crate::date::HistoricDate;

/// Error type for all fallible operations in this crate.
///
/// Construction and direct-conversion failures are surfaced immediately.
/// The exploratory queries (`CalendarHistory::is_valid`,
/// `CalendarHistory::year_length`) never return this type; they report
/// failure through `false` and the `-1` sentinel instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum HistoricError {
    /// A history was constructed with an empty cutover event table.
    #[error("at least one cutover event must be present in a calendar history")]
    EmptyEventTable,

    /// A single-cutover history was requested for a day before the first
    /// introduction of the gregorian calendar on 1582-10-15.
    #[error("gregorian calendar did not exist before 1582-10-15 (epoch day {start})")]
    CutoverBeforeFirstReform {
        /// The rejected cutover day.
        start: i64,
    },

    /// Returned when a year-of-era value is below 1.
    #[error("invalid year of era: {year} (must be >= 1)")]
    InvalidYearOfEra {
        /// The invalid year-of-era value that was provided.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day-of-month value is outside the valid range 1..=31.
    #[error("invalid day of month: {day} (must be 1..=31)")]
    InvalidDayOfMonth {
        /// The invalid day-of-month value that was provided.
        day: u8,
    },

    /// The date falls in a cutover gap or fails the governing algorithm's
    /// validity rule.
    #[error("invalid historical date: {0}")]
    InvalidDate(HistoricDate),

    /// The converted day count left the supported conversion range.
    #[error("epoch day count out of supported range: {days}")]
    EpochDaysOutOfRange {
        /// The out-of-range day count.
        days: i64,
    },

    /// A persisted history carried a type discriminator this crate does not
    /// own.
    #[error("unexpected type tag in persisted history: {tag:#04x}")]
    UnexpectedTypeTag {
        /// The full tag byte that was read.
        tag: u8,
    },

    /// A persisted history carried an unassigned variant code.
    #[error("unknown history variant code: {code}")]
    UnknownVariantCode {
        /// The unassigned code.
        code: u8,
    },

    /// A persisted history was truncated or carried trailing bytes.
    #[error("persisted history has wrong length")]
    UnexpectedEndOfInput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::HistoricEra;

    #[test]
    fn display_messages() {
        assert_eq!(
            HistoricError::InvalidMonth { month: 13 }.to_string(),
            "invalid month: 13 (must be 1..=12)"
        );
        assert_eq!(
            HistoricError::CutoverBeforeFirstReform { start: -141_428 }.to_string(),
            "gregorian calendar did not exist before 1582-10-15 (epoch day -141428)"
        );
        let date = HistoricDate::new(HistoricEra::Ad, 1582, 10, 10).unwrap();
        assert_eq!(
            HistoricError::InvalidDate(date).to_string(),
            "invalid historical date: AD-1582-10-10"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<HistoricError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<HistoricError>();
    }
}
