//! The calendar history engine.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use crate::algorithm::{self, CalendarAlgorithm};
use crate::cutover::CutOverEvent;
use crate::date::{HistoricDate, HistoricEra};
use crate::epoch_days::{self, EpochDays};
use crate::{HistoricError, HistoricResult};

/// Epoch day of 1582-10-15 (gregorian), the first day of the papal reform.
pub(crate) const EARLIEST_CUTOVER: i64 = algorithm::gregorian_to_epoch_days(1582, 10, 15);

// Swedish cutover days. The Swedish calendar ran one day ahead of julian
// reckoning between the first two cutovers; the commented dates are given in
// the reckoning of the incoming algorithm.
const SWEDEN_JULIAN_TO_SWEDISH: i64 = -98_546; // 1700-03-01
const SWEDEN_SWEDISH_TO_JULIAN: i64 = -94_162; // 1712-03-01
const SWEDEN_JULIAN_TO_GREGORIAN: i64 = -79_198; // 1753-03-01

/// Classification of a [`CalendarHistory`].
///
/// Fixed at construction and used for equality and the compact persisted
/// form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoricVariant {
    /// Gregorian rules assumed to be in force for all of time.
    ProlepticGregorian,
    /// Julian rules assumed to be in force for all of time.
    ProlepticJulian,
    /// The Swedish history with its three cutovers (1700, 1712, 1753).
    Sweden,
    /// The original reform introduced by pope Gregor on 1582-10-15.
    FirstGregorianReform,
    /// Any other single julian-to-gregorian cutover.
    SingleCutover,
}

impl HistoricVariant {
    /// Code of this variant in the compact persisted form.
    pub(crate) const fn code(self) -> u8 {
        match self {
            Self::ProlepticGregorian => 1,
            Self::ProlepticJulian => 2,
            Self::Sweden => 4,
            Self::FirstGregorianReform => 7,
            Self::SingleCutover => 0,
        }
    }
}

static PROLEPTIC_GREGORIAN: LazyLock<CalendarHistory> = LazyLock::new(|| {
    CalendarHistory::new(
        HistoricVariant::ProlepticGregorian,
        vec![CutOverEvent::new(
            EpochDays::MIN,
            CalendarAlgorithm::Gregorian,
            CalendarAlgorithm::Gregorian,
        )],
    )
    .expect("well-known history tables are valid")
});

static PROLEPTIC_JULIAN: LazyLock<CalendarHistory> = LazyLock::new(|| {
    CalendarHistory::new(
        HistoricVariant::ProlepticJulian,
        vec![CutOverEvent::new(
            EpochDays::MIN,
            CalendarAlgorithm::Julian,
            CalendarAlgorithm::Julian,
        )],
    )
    .expect("well-known history tables are valid")
});

static FIRST_GREGORIAN_REFORM: LazyLock<CalendarHistory> = LazyLock::new(|| {
    CalendarHistory::new(
        HistoricVariant::FirstGregorianReform,
        vec![CutOverEvent::new(
            EpochDays::new(EARLIEST_CUTOVER),
            CalendarAlgorithm::Julian,
            CalendarAlgorithm::Gregorian,
        )],
    )
    .expect("well-known history tables are valid")
});

static SWEDEN: LazyLock<CalendarHistory> = LazyLock::new(|| {
    CalendarHistory::new(
        HistoricVariant::Sweden,
        vec![
            CutOverEvent::new(
                EpochDays::new(SWEDEN_JULIAN_TO_SWEDISH),
                CalendarAlgorithm::Julian,
                CalendarAlgorithm::Swedish,
            ),
            CutOverEvent::new(
                EpochDays::new(SWEDEN_SWEDISH_TO_JULIAN),
                CalendarAlgorithm::Swedish,
                CalendarAlgorithm::Julian,
            ),
            CutOverEvent::new(
                EpochDays::new(SWEDEN_JULIAN_TO_GREGORIAN),
                CalendarAlgorithm::Julian,
                CalendarAlgorithm::Gregorian,
            ),
        ],
    )
    .expect("well-known history tables are valid")
});

/// The chronological history of calendar reforms in a given region.
///
/// An immutable, ordered, non-empty table of cutover events. The event
/// effective at a given point in time decides which calendar algorithm
/// interprets dates there; any day before the first event falls back to the
/// julian calendar. All operations are pure computations over the table, so
/// a history is freely shareable across threads.
#[derive(Debug, Clone)]
pub struct CalendarHistory {
    variant: HistoricVariant,
    events: Vec<CutOverEvent>,
}

impl CalendarHistory {
    fn new(variant: HistoricVariant, events: Vec<CutOverEvent>) -> HistoricResult<Self> {
        if events.is_empty() {
            return Err(HistoricError::EmptyEventTable);
        }
        debug_assert!(
            events.windows(2).all(|pair| pair[0].start < pair[1].start),
            "cutover events must be sorted by start day"
        );
        Ok(Self { variant, events })
    }

    /// The proleptic gregorian calendar, assumed to be in force at all
    /// times. Serves academic purposes rather than any real historical
    /// event.
    pub fn proleptic_gregorian() -> &'static Self {
        &PROLEPTIC_GREGORIAN
    }

    /// The proleptic julian calendar, assumed to be in force at all times.
    pub fn proleptic_julian() -> &'static Self {
        &PROLEPTIC_JULIAN
    }

    /// The original switch from julian to gregorian calendar introduced by
    /// pope Gregor on 1582-10-15.
    pub fn of_first_gregorian_reform() -> &'static Self {
        &FIRST_GREGORIAN_REFORM
    }

    /// The Swedish history: three cutovers due to a failed gradual switch to
    /// the gregorian calendar in the years 1700-1712.
    pub fn of_sweden() -> &'static Self {
        &SWEDEN
    }

    /// A single switch from julian to gregorian calendar at the given day.
    ///
    /// Handing in the day of the first reform yields the canonical
    /// [`of_first_gregorian_reform`](Self::of_first_gregorian_reform)
    /// history.
    ///
    /// # Errors
    ///
    /// Returns an error for any day before 1582-10-15, when no gregorian
    /// calendar existed yet.
    pub fn of_gregorian_reform(start: EpochDays) -> HistoricResult<Self> {
        if start.as_i64() < EARLIEST_CUTOVER {
            return Err(HistoricError::CutoverBeforeFirstReform {
                start: start.as_i64(),
            });
        }
        if start.as_i64() == EARLIEST_CUTOVER {
            return Ok(Self::of_first_gregorian_reform().clone());
        }
        Self::new(
            HistoricVariant::SingleCutover,
            vec![CutOverEvent::new(
                start,
                CalendarAlgorithm::Julian,
                CalendarAlgorithm::Gregorian,
            )],
        )
    }

    /// The history of gregorian calendar reforms for the given region code.
    ///
    /// Only Sweden (`"SE"`) carries a dedicated history; every other region
    /// falls back to the first gregorian reform. This is an intentionally
    /// incomplete placeholder, not a geopolitical cutover database; callers
    /// with a known local cutover day can use
    /// [`of_gregorian_reform`](Self::of_gregorian_reform) instead.
    pub fn of_locale(region: &str) -> &'static Self {
        if region.eq_ignore_ascii_case("SE") {
            return Self::of_sweden();
        }
        #[cfg(feature = "log")]
        log::debug!("no dedicated cutover history for region {region:?}, using the first gregorian reform");
        Self::of_first_gregorian_reform()
    }

    /// The classification of this history.
    pub fn variant(&self) -> HistoricVariant {
        self.variant
    }

    /// Converts a historical date to its linear day.
    ///
    /// # Errors
    ///
    /// Returns [`HistoricError::InvalidDate`] if the date falls in a cutover
    /// gap or does not exist under the governing algorithm, and
    /// [`HistoricError::EpochDaysOutOfRange`] if the result leaves the
    /// supported range.
    pub fn to_epoch_days(&self, date: HistoricDate) -> HistoricResult<EpochDays> {
        let Some(algorithm) = self.algorithm(date) else {
            return Err(HistoricError::InvalidDate(date));
        };
        if !algorithm.is_valid(date) {
            return Err(HistoricError::InvalidDate(date));
        }
        let days = algorithm.to_epoch_days(date);
        days.check_validity()?;
        Ok(days)
    }

    /// Converts a linear day to its historical date.
    ///
    /// Total: every linear day maps to exactly one date, there are no gaps
    /// in this direction.
    pub fn from_epoch_days(&self, day: EpochDays) -> HistoricDate {
        for event in self.events.iter().rev() {
            if day >= event.start {
                return event.algorithm.from_epoch_days(day);
            }
        }
        CalendarAlgorithm::Julian.from_epoch_days(day)
    }

    /// Whether the given historical date denotes a real day in this history.
    ///
    /// Agrees with [`to_epoch_days`](Self::to_epoch_days): the conversion
    /// succeeds exactly for valid dates.
    pub fn is_valid(&self, date: HistoricDate) -> bool {
        self.algorithm(date).is_some_and(|algorithm| {
            algorithm.is_valid(date)
                && epoch_days::is_valid_epoch_days(algorithm.to_epoch_days(date).as_i64())
        })
    }

    /// The length of the given historical year in days, or `-1` if it cannot
    /// be determined (for example for an out-of-range year).
    pub fn year_length(&self, era: HistoricEra, year_of_era: i32) -> i32 {
        self.try_year_length(era, year_of_era).unwrap_or(-1)
    }

    fn try_year_length(&self, era: HistoricEra, year_of_era: i32) -> HistoricResult<i32> {
        let min = HistoricDate::new(era, year_of_era, 1, 1)?;
        let max = HistoricDate::new(era, year_of_era, 12, 31)?;
        let first = self.to_epoch_days(min)?;
        let last = self.to_epoch_days(max)?;
        Ok((last.as_i64() - first.as_i64() + 1) as i32)
    }

    /// Clamps the date's day of month to the actual maximum of its month if
    /// necessary. Dates inside a cutover gap are returned unchanged.
    pub fn adjust_day_of_month(&self, date: HistoricDate) -> HistoricDate {
        let Some(algorithm) = self.algorithm(date) else {
            return date; // gap at cutover, let it be unchanged
        };
        let max = algorithm.max_day_of_month(date.era(), date.year_of_era(), date.month());
        if date.day_of_month() > max {
            HistoricDate::new_unchecked(date.era(), date.year_of_era(), date.month(), max)
        } else {
            date
        }
    }

    /// The day of the final introduction of the gregorian calendar, or
    /// [`EpochDays::MIN`] for the proleptic histories.
    pub fn gregorian_cutover(&self) -> EpochDays {
        self.events.last().map_or(EpochDays::MIN, |event| event.start)
    }

    /// Resolves the algorithm governing `date`, or `None` if the date falls
    /// into a gap at a cutover.
    fn algorithm(&self, date: HistoricDate) -> Option<CalendarAlgorithm> {
        for event in self.events.iter().rev() {
            if date >= event.date_at_cutover {
                return Some(event.algorithm);
            } else if date > event.date_before_cutover {
                return None; // gap at cutover
            }
        }
        Some(CalendarAlgorithm::Julian)
    }
}

impl PartialEq for CalendarHistory {
    fn eq(&self, other: &Self) -> bool {
        if self.variant != other.variant {
            return false;
        }
        if self.variant == HistoricVariant::SingleCutover {
            return self.gregorian_cutover() == other.gregorian_cutover();
        }
        true
    }
}

impl Eq for CalendarHistory {}

impl Hash for CalendarHistory {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.variant.hash(state);
        if self.variant == HistoricVariant::SingleCutover {
            self.gregorian_cutover().hash(state);
        }
    }
}

impl fmt::Display for CalendarHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            HistoricVariant::ProlepticGregorian => f.write_str("CalendarHistory[PROLEPTIC-GREGORIAN]"),
            HistoricVariant::ProlepticJulian => f.write_str("CalendarHistory[PROLEPTIC-JULIAN]"),
            HistoricVariant::Sweden => f.write_str("CalendarHistory[SWEDEN]"),
            HistoricVariant::FirstGregorianReform | HistoricVariant::SingleCutover => {
                let (year, month, day) = self.gregorian_cutover().to_gregorian();
                write!(f, "CalendarHistory[{year:04}-{month:02}-{day:02}]")
            }
        }
    }
}
