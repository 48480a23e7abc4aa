//! Calendar algorithm variants and their day arithmetic.
//!
//! The variant set is closed and small, so the algorithms are modelled as a
//! tagged enum dispatched by `match` rather than a trait object. All
//! conversions go through era/cycle rata-die equations: the gregorian
//! calendar repeats every 146 097 days (400 years), the julian calendar
//! every 1 461 days (4 years). Both are anchored so that epoch day 0 is
//! 1970-01-01 in gregorian reckoning.

use crate::date::{HistoricDate, HistoricEra};
use crate::epoch_days::EpochDays;

/// Rata die of 1970-01-01 in the computational gregorian calendar.
const GREGORIAN_EPOCH_SHIFT: i64 = 719_468;
/// Rata die of 1970-01-01 (= julian 1969-12-19) in the julian cycle count.
const JULIAN_EPOCH_SHIFT: i64 = 719_470;

const DAYS_IN_GREGORIAN_CYCLE: i64 = 146_097; // 400 years
const DAYS_IN_JULIAN_CYCLE: i64 = 1_461; // 4 years

/// Epoch day of the Swedish double leap day 1712-02-30.
const SWEDISH_DOUBLE_LEAP_DAY: i64 = -94_163;

/// A day-arithmetic strategy for interpreting historical dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CalendarAlgorithm {
    /// Proleptic julian calendar: every fourth year is a leap year.
    Julian,
    /// Proleptic gregorian calendar with the century rule.
    Gregorian,
    /// The julian calendar shifted one day earlier on the linear axis, as
    /// used in Sweden between 1700-03-01 and 1712-03-01, with the attested
    /// double leap day 1712-02-30.
    Swedish,
}

impl CalendarAlgorithm {
    /// Whether `date` exists under this algorithm's month-length rule.
    pub(crate) fn is_valid(self, date: HistoricDate) -> bool {
        date.day_of_month() <= self.max_day_of_month(date.era(), date.year_of_era(), date.month())
    }

    /// Converts a date to its linear day. Only meaningful if the date is
    /// valid under this algorithm.
    pub(crate) fn to_epoch_days(self, date: HistoricDate) -> EpochDays {
        let year = date.proleptic_year();
        let month = i64::from(date.month());
        let day = i64::from(date.day_of_month());
        let days = match self {
            Self::Julian => julian_to_epoch_days(year, month, day),
            Self::Gregorian => gregorian_to_epoch_days(year, month, day),
            Self::Swedish => {
                if year == 1712 && month == 2 && day == 30 {
                    SWEDISH_DOUBLE_LEAP_DAY
                } else {
                    julian_to_epoch_days(year, month, day) - 1
                }
            }
        };
        EpochDays::new(days)
    }

    /// Converts a linear day to a date. Total: every day maps to exactly one
    /// date under a given algorithm.
    pub(crate) fn from_epoch_days(self, day: EpochDays) -> HistoricDate {
        match self {
            Self::Julian => date_from_parts(julian_from_epoch_days(day.as_i64())),
            Self::Gregorian => date_from_parts(gregorian_from_epoch_days(day.as_i64())),
            Self::Swedish => {
                if day.as_i64() == SWEDISH_DOUBLE_LEAP_DAY {
                    HistoricDate::new_unchecked(HistoricEra::Ad, 1712, 2, 30)
                } else {
                    date_from_parts(julian_from_epoch_days(day.as_i64() + 1))
                }
            }
        }
    }

    /// The maximum day of month for the given era, year of era and month.
    pub(crate) fn max_day_of_month(self, era: HistoricEra, year_of_era: i32, month: u8) -> u8 {
        let year = era.anno_domini(year_of_era);
        match self {
            Self::Julian => days_in_month(month, is_julian_leap_year(year)),
            Self::Gregorian => days_in_month(month, is_gregorian_leap_year(year)),
            Self::Swedish => {
                if year == 1712 && month == 2 {
                    30
                } else {
                    days_in_month(month, is_julian_leap_year(year))
                }
            }
        }
    }
}

pub(crate) const fn is_julian_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0
}

pub(crate) const fn is_gregorian_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
}

/// Month lengths shared by all variants outside the Swedish anomaly.
pub(crate) fn days_in_month(month: u8, leap_year: bool) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if leap_year {
                29
            } else {
                28
            }
        }
        _ => unreachable!("month is validated on construction"),
    }
}

fn date_from_parts((year, month, day): (i64, u8, u8)) -> HistoricDate {
    if year <= 0 {
        HistoricDate::new_unchecked(HistoricEra::Bc, (1 - year) as i32, month, day)
    } else {
        HistoricDate::new_unchecked(HistoricEra::Ad, year as i32, month, day)
    }
}

// ==== Rata-die equations ====
//
// Months are shifted so that the computational year starts in March and the
// leap day falls at the very end of the cycle year.

pub(crate) const fn gregorian_to_epoch_days(year: i64, month: i64, day: i64) -> i64 {
    let shift = (month <= 2) as i64;
    let y = year - shift;
    let m = month + 12 * shift; // 3..=14
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // 0..=399
    let doy = (153 * (m - 3) + 2) / 5 + day - 1; // 0..=365
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_IN_GREGORIAN_CYCLE + doe - GREGORIAN_EPOCH_SHIFT
}

pub(crate) const fn gregorian_from_epoch_days(days: i64) -> (i64, u8, u8) {
    let z = days + GREGORIAN_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_IN_GREGORIAN_CYCLE);
    let doe = z - era * DAYS_IN_GREGORIAN_CYCLE; // 0..=146_096
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    (yoe + era * 400 + (month <= 2) as i64, month as u8, day as u8)
}

pub(crate) const fn julian_to_epoch_days(year: i64, month: i64, day: i64) -> i64 {
    let shift = (month <= 2) as i64;
    let y = year - shift;
    let m = month + 12 * shift;
    let era = y.div_euclid(4);
    let yoe = y - era * 4; // 0..=3
    let doy = (153 * (m - 3) + 2) / 5 + day - 1;
    let doe = yoe * 365 + doy;
    era * DAYS_IN_JULIAN_CYCLE + doe - JULIAN_EPOCH_SHIFT
}

pub(crate) const fn julian_from_epoch_days(days: i64) -> (i64, u8, u8) {
    let z = days + JULIAN_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_IN_JULIAN_CYCLE);
    let doe = z - era * DAYS_IN_JULIAN_CYCLE; // 0..=1460
    let yoe = (doe - doe / 1460) / 365; // 0..=3
    let doy = doe - 365 * yoe;
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    (yoe + era * 4 + (month <= 2) as i64, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_alignment() {
        assert_eq!(gregorian_to_epoch_days(1970, 1, 1), 0);
        assert_eq!(gregorian_from_epoch_days(0), (1970, 1, 1));
        // 1970-01-01 is julian 1969-12-19.
        assert_eq!(julian_to_epoch_days(1969, 12, 19), 0);
        assert_eq!(julian_from_epoch_days(0), (1969, 12, 19));
    }

    #[test]
    fn first_reform_adjacency() {
        // Julian 1582-10-04 is directly followed by gregorian 1582-10-15.
        assert_eq!(julian_to_epoch_days(1582, 10, 4), -141_428);
        assert_eq!(gregorian_to_epoch_days(1582, 10, 15), -141_427);
        assert_eq!(gregorian_from_epoch_days(-141_427), (1582, 10, 15));
        assert_eq!(julian_from_epoch_days(-141_428), (1582, 10, 4));
    }

    #[test]
    fn leap_year_rules() {
        assert!(is_julian_leap_year(1700));
        assert!(!is_gregorian_leap_year(1700));
        assert!(is_gregorian_leap_year(2000));
        assert!(is_julian_leap_year(2000));
        assert!(!is_gregorian_leap_year(1900));
        assert!(!is_julian_leap_year(1899));
        // 1 BC (proleptic year 0) is a leap year in both calendars.
        assert!(is_julian_leap_year(0));
        assert!(is_gregorian_leap_year(0));
        // 5 BC (proleptic year -4) is julian leap.
        assert!(is_julian_leap_year(-4));
        assert!(!is_gregorian_leap_year(-100));
    }

    #[test]
    fn gregorian_round_trip() {
        for day in -200_000..=80_000 {
            let (y, m, d) = gregorian_from_epoch_days(day);
            assert_eq!(gregorian_to_epoch_days(y, i64::from(m), i64::from(d)), day);
            assert!((1..=12).contains(&m));
            assert!((1..=31).contains(&d));
        }
    }

    #[test]
    fn julian_round_trip() {
        for day in -200_000..=80_000 {
            let (y, m, d) = julian_from_epoch_days(day);
            assert_eq!(julian_to_epoch_days(y, i64::from(m), i64::from(d)), day);
            assert!((1..=12).contains(&m));
            assert!((1..=31).contains(&d));
        }
    }

    #[test]
    fn julian_leap_day_is_kept() {
        // Julian 1700-02-29 exists even though the gregorian calendar skips it.
        assert_eq!(julian_from_epoch_days(-98_546), (1700, 2, 29));
        assert_eq!(gregorian_from_epoch_days(-98_546), (1700, 3, 11));
    }

    #[test]
    fn swedish_shift_and_double_leap_day() {
        use crate::date::HistoricEra::Ad;
        let algorithm = CalendarAlgorithm::Swedish;

        // Swedish dates run one day ahead of julian on the linear axis.
        let date = HistoricDate::new_unchecked(Ad, 1700, 3, 1);
        assert_eq!(algorithm.to_epoch_days(date).as_i64(), -98_546);
        assert_eq!(
            CalendarAlgorithm::Julian.to_epoch_days(date).as_i64(),
            -98_545
        );

        // 1712-02-29 and 1712-02-30 are consecutive days followed by
        // (julian) 1712-03-01.
        let leap = HistoricDate::new_unchecked(Ad, 1712, 2, 29);
        let double_leap = HistoricDate::new_unchecked(Ad, 1712, 2, 30);
        assert_eq!(algorithm.to_epoch_days(leap).as_i64(), -94_164);
        assert_eq!(algorithm.to_epoch_days(double_leap).as_i64(), -94_163);
        assert_eq!(julian_to_epoch_days(1712, 3, 1), -94_162);

        assert_eq!(algorithm.from_epoch_days(EpochDays::new(-94_163)), double_leap);
        assert_eq!(algorithm.from_epoch_days(EpochDays::new(-94_164)), leap);

        assert!(algorithm.is_valid(double_leap));
        assert_eq!(algorithm.max_day_of_month(Ad, 1712, 2), 30);
        assert_eq!(algorithm.max_day_of_month(Ad, 1700, 2), 29);
        assert_eq!(algorithm.max_day_of_month(Ad, 1712, 4), 30);
    }

    #[test]
    fn max_day_of_month_tables() {
        use crate::date::HistoricEra::{Ad, Bc};
        let julian = CalendarAlgorithm::Julian;
        let gregorian = CalendarAlgorithm::Gregorian;

        assert_eq!(julian.max_day_of_month(Ad, 1700, 2), 29);
        assert_eq!(gregorian.max_day_of_month(Ad, 1700, 2), 28);
        assert_eq!(gregorian.max_day_of_month(Ad, 2000, 2), 29);
        assert_eq!(julian.max_day_of_month(Ad, 1999, 1), 31);
        assert_eq!(gregorian.max_day_of_month(Ad, 1999, 4), 30);
        // 5 BC is a julian leap year.
        assert_eq!(julian.max_day_of_month(Bc, 5, 2), 29);
    }

    #[test]
    fn validity_follows_month_length() {
        use crate::date::HistoricEra::Ad;
        let julian = CalendarAlgorithm::Julian;
        let feb_29 = HistoricDate::new_unchecked(Ad, 1700, 2, 29);
        let feb_30 = HistoricDate::new_unchecked(Ad, 1700, 2, 30);
        assert!(julian.is_valid(feb_29));
        assert!(!julian.is_valid(feb_30));
        assert!(!CalendarAlgorithm::Gregorian.is_valid(feb_29));
    }

    #[test]
    fn bc_dates_convert() {
        use crate::date::HistoricEra::Bc;
        // Julian 45 BC (the first year of the julian calendar) round-trips.
        let date = HistoricDate::new_unchecked(Bc, 45, 1, 1);
        let day = CalendarAlgorithm::Julian.to_epoch_days(date);
        assert_eq!(CalendarAlgorithm::Julian.from_epoch_days(day), date);
    }
}
