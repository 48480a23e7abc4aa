//! The `historic_rs` crate converts between historical calendar dates and a
//! single linear day count across calendar reforms.
//!
//! ```rust
//! use historic_rs::{CalendarHistory, EpochDays, HistoricDate, HistoricEra};
//!
//! // The papal reform: 1582-10-04 (julian) is directly followed by
//! // 1582-10-15 (gregorian).
//! let history = CalendarHistory::of_first_gregorian_reform();
//! let last_julian = HistoricDate::new(HistoricEra::Ad, 1582, 10, 4).unwrap();
//! let day = history.to_epoch_days(last_julian).unwrap();
//!
//! let next = history.from_epoch_days(EpochDays::new(day.as_i64() + 1));
//! assert_eq!(next, HistoricDate::new(HistoricEra::Ad, 1582, 10, 15).unwrap());
//!
//! // The ten elided days never existed.
//! let gap = HistoricDate::new(HistoricEra::Ad, 1582, 10, 10).unwrap();
//! assert!(!history.is_valid(gap));
//! ```
//!
//! A [`CalendarHistory`] is an ordered table of cutover events, each switching
//! the governing calendar algorithm (julian, gregorian, or the Swedish hybrid)
//! at a fixed linear day. The well-known histories (the two proleptic
//! calendars, the first gregorian reform, and Sweden) are built once at first
//! use and shared; arbitrary single-cutover histories can be built on demand.
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

pub mod error;

mod algorithm;
mod cutover;
mod date;
mod epoch_days;
mod history;
mod serialization;

// Re-export of `TinyAsciiStr` from `tinystr`, as era codes are surfaced
// through it.
pub use tinystr::TinyAsciiStr;

#[doc(inline)]
pub use error::HistoricError;

pub use date::{HistoricDate, HistoricEra};
pub use epoch_days::EpochDays;
pub use history::{CalendarHistory, HistoricVariant};

/// The `historic_rs` result type.
pub type HistoricResult<T> = Result<T, HistoricError>;
