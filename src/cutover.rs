//! Calendar cutover events.

use crate::algorithm::CalendarAlgorithm;
use crate::date::{HistoricDate, HistoricEra};
use crate::epoch_days::EpochDays;

/// A switch of the governing calendar algorithm at a fixed linear day.
///
/// The two anchor dates are computed once at construction and cached; the
/// reverse (date to day) lookup and gap detection only consult these
/// precomputed values and never recompute them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CutOverEvent {
    /// First linear day governed by `algorithm`.
    pub(crate) start: EpochDays,
    /// The algorithm in force from `start` onward.
    pub(crate) algorithm: CalendarAlgorithm,
    /// First valid date of the new regime: `algorithm.from_epoch_days(start)`.
    pub(crate) date_at_cutover: HistoricDate,
    /// Last valid date under the outgoing algorithm. Differs from the day
    /// before `date_at_cutover` whenever the cutover elides calendar days.
    pub(crate) date_before_cutover: HistoricDate,
}

impl CutOverEvent {
    pub(crate) fn new(
        start: EpochDays,
        previous: CalendarAlgorithm,
        next: CalendarAlgorithm,
    ) -> Self {
        if start == EpochDays::MIN {
            // Proleptic history: anchor on the minimal representable date so
            // the reverse scan always selects this one algorithm.
            let date = HistoricDate::new_unchecked(HistoricEra::Bc, i32::MAX, 1, 1);
            Self {
                start,
                algorithm: next,
                date_at_cutover: date,
                date_before_cutover: date,
            }
        } else {
            Self {
                start,
                algorithm: next,
                date_at_cutover: next.from_epoch_days(start),
                date_before_cutover: previous.from_epoch_days(EpochDays::new(start.as_i64() - 1)),
            }
        }
    }
}
