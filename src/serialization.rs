//! Compact persisted byte form of a calendar history.
//!
//! Layout: one header byte holding the type tag in the high nibble and the
//! variant code in the low nibble. Only a custom single-cutover history
//! carries a payload, its cutover day as a big-endian `i64`; all other
//! variants reconstruct from the code alone.

use crate::epoch_days::EpochDays;
use crate::history::{CalendarHistory, HistoricVariant};
use crate::{HistoricError, HistoricResult};

/// Type discriminator of a persisted calendar history.
const HISTORY_TYPE_TAG: u8 = 1;

impl CalendarHistory {
    /// Serializes this history into its compact persisted form.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let header = (HISTORY_TYPE_TAG << 4) | self.variant().code();
        let mut bytes = vec![header];
        if self.variant() == HistoricVariant::SingleCutover {
            bytes.extend_from_slice(&self.gregorian_cutover().as_i64().to_be_bytes());
        }
        bytes
    }

    /// Reconstructs a history from its compact persisted form.
    ///
    /// # Errors
    ///
    /// Returns an error if the type tag or variant code is not recognized,
    /// or if the input is truncated or carries trailing bytes.
    pub fn from_bytes(bytes: &[u8]) -> HistoricResult<Self> {
        let Some((&header, rest)) = bytes.split_first() else {
            return Err(HistoricError::UnexpectedEndOfInput);
        };
        if header >> 4 != HISTORY_TYPE_TAG {
            return Err(HistoricError::UnexpectedTypeTag { tag: header });
        }
        let code = header & 0x0f;
        if code == HistoricVariant::SingleCutover.code() {
            let payload: [u8; 8] = rest
                .try_into()
                .map_err(|_| HistoricError::UnexpectedEndOfInput)?;
            let start = EpochDays::new(i64::from_be_bytes(payload));
            return Self::of_gregorian_reform(start);
        }
        if !rest.is_empty() {
            return Err(HistoricError::UnexpectedEndOfInput);
        }
        let history = match code {
            1 => Self::proleptic_gregorian(),
            2 => Self::proleptic_julian(),
            4 => Self::of_sweden(),
            7 => Self::of_first_gregorian_reform(),
            _ => return Err(HistoricError::UnknownVariantCode { code }),
        };
        Ok(history.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_histories_are_one_byte() {
        assert_eq!(CalendarHistory::proleptic_gregorian().to_bytes(), [0x11]);
        assert_eq!(CalendarHistory::proleptic_julian().to_bytes(), [0x12]);
        assert_eq!(CalendarHistory::of_sweden().to_bytes(), [0x14]);
        assert_eq!(
            CalendarHistory::of_first_gregorian_reform().to_bytes(),
            [0x17]
        );
    }

    #[test]
    fn custom_cutover_carries_its_day() {
        let start = EpochDays::from_gregorian(1752, 9, 14).unwrap();
        let history = CalendarHistory::of_gregorian_reform(start).unwrap();
        let bytes = history.to_bytes();
        assert_eq!(bytes.len(), 9);
        assert_eq!(bytes[0], 0x10);
        assert_eq!(
            i64::from_be_bytes(bytes[1..].try_into().unwrap()),
            start.as_i64()
        );
    }

    #[test]
    fn round_trips() {
        let histories = [
            CalendarHistory::proleptic_gregorian().clone(),
            CalendarHistory::proleptic_julian().clone(),
            CalendarHistory::of_sweden().clone(),
            CalendarHistory::of_first_gregorian_reform().clone(),
            CalendarHistory::of_gregorian_reform(
                EpochDays::from_gregorian(1752, 9, 14).unwrap(),
            )
            .unwrap(),
        ];
        for history in histories {
            let restored = CalendarHistory::from_bytes(&history.to_bytes()).unwrap();
            assert_eq!(restored, history);
        }
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            CalendarHistory::from_bytes(&[]),
            Err(HistoricError::UnexpectedEndOfInput)
        );
        assert_eq!(
            CalendarHistory::from_bytes(&[0x27]),
            Err(HistoricError::UnexpectedTypeTag { tag: 0x27 })
        );
        assert_eq!(
            CalendarHistory::from_bytes(&[0x15]),
            Err(HistoricError::UnknownVariantCode { code: 5 })
        );
        // Truncated payload for a custom cutover.
        assert_eq!(
            CalendarHistory::from_bytes(&[0x10, 0x00, 0x00]),
            Err(HistoricError::UnexpectedEndOfInput)
        );
        // Trailing bytes after a well-known code.
        assert_eq!(
            CalendarHistory::from_bytes(&[0x17, 0x00]),
            Err(HistoricError::UnexpectedEndOfInput)
        );
    }

    #[test]
    fn rejects_cutover_day_before_first_reform() {
        let mut bytes = vec![0x10];
        bytes.extend_from_slice(&(-141_428_i64).to_be_bytes());
        assert_eq!(
            CalendarHistory::from_bytes(&bytes),
            Err(HistoricError::CutoverBeforeFirstReform { start: -141_428 })
        );
    }

    #[test]
    fn canonical_day_restores_first_reform_variant() {
        let mut bytes = vec![0x10];
        bytes.extend_from_slice(&(-141_427_i64).to_be_bytes());
        let history = CalendarHistory::from_bytes(&bytes).unwrap();
        assert_eq!(history.variant(), HistoricVariant::FirstGregorianReform);
        assert_eq!(history.to_bytes(), [0x17]);
    }
}
