use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Cursor position in the content catalog plus the date of the last
/// successful run. `-1` means nothing has been processed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationState {
    pub last_processed_index: i64,
    pub last_run_date: Option<NaiveDate>,
}

impl Default for GenerationState {
    fn default() -> Self {
        Self {
            last_processed_index: -1,
            last_run_date: None,
        }
    }
}

impl GenerationState {
    pub fn new(index: usize, date: NaiveDate) -> Self {
        Self {
            last_processed_index: index as i64,
            last_run_date: Some(date),
        }
    }

    pub fn ran_on(&self, date: NaiveDate) -> bool {
        self.last_run_date == Some(date)
    }

    /// Index that follows the cursor in a catalog of `total` items.
    /// A cursor at or past the end (or below -1) wraps to 0.
    pub fn next_index(&self, total: usize) -> Result<usize> {
        if total == 0 {
            return Err(AppError::EmptyCatalog);
        }

        let next = self.last_processed_index.saturating_add(1);
        if next < 0 || next >= total as i64 {
            return Ok(0);
        }
        Ok(next as usize)
    }

    pub fn wraps_at(&self, total: usize) -> bool {
        self.last_processed_index.saturating_add(1) >= total as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_is_unprocessed() {
        let state = GenerationState::default();
        assert_eq!(state.last_processed_index, -1);
        assert_eq!(state.last_run_date, None);
    }

    #[test]
    fn next_index_advances_by_one_modulo_total() {
        for total in 1..=25usize {
            for last in -1..total as i64 {
                let state = GenerationState {
                    last_processed_index: last,
                    last_run_date: None,
                };
                let next = state.next_index(total).unwrap();
                assert_eq!(next as i64, (last + 1) % total as i64);
                assert!(next < total);
            }
        }
    }

    #[test]
    fn next_index_wraps_at_end_of_catalog() {
        let state = GenerationState {
            last_processed_index: 19,
            last_run_date: None,
        };
        assert!(state.wraps_at(20));
        assert_eq!(state.next_index(20).unwrap(), 0);
    }

    #[test]
    fn out_of_range_cursor_restarts_at_zero() {
        let past_end = GenerationState {
            last_processed_index: 42,
            last_run_date: None,
        };
        assert_eq!(past_end.next_index(20).unwrap(), 0);

        let negative = GenerationState {
            last_processed_index: -7,
            last_run_date: None,
        };
        assert_eq!(negative.next_index(20).unwrap(), 0);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let state = GenerationState::default();
        assert!(matches!(state.next_index(0), Err(AppError::EmptyCatalog)));
    }

    #[test]
    fn serializes_date_as_plain_string() {
        let state = GenerationState::new(3, date(2024, 5, 1));
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"last_processed_index":3,"last_run_date":"2024-05-01"}"#
        );

        let fresh: GenerationState =
            serde_json::from_str(r#"{"last_processed_index":-1,"last_run_date":null}"#).unwrap();
        assert_eq!(fresh, GenerationState::default());

        let partial: GenerationState = serde_json::from_str(r#"{"last_processed_index":4}"#).unwrap();
        assert_eq!(partial.last_processed_index, 4);
        assert_eq!(partial.last_run_date, None);
    }

    #[test]
    fn ran_on_compares_calendar_date() {
        let state = GenerationState::new(0, date(2024, 5, 1));
        assert!(state.ran_on(date(2024, 5, 1)));
        assert!(!state.ran_on(date(2024, 5, 2)));
        assert!(!GenerationState::default().ran_on(date(2024, 5, 1)));
    }
}
