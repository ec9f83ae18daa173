//! Error types for the weektray-weekdate crate.

/// Error type for all fallible operations in the weektray-weekdate crate.
///
/// Week-number lookup is total over valid dates; only the reverse
/// conversion (week number to Monday date) can fail, on an out-of-range
/// week number or a reference year the date arithmetic cannot represent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekDateError {
    /// Returned when a week-of-year value is outside the valid range 1..=53.
    #[error("invalid week number: {week} (must be 1..=53)")]
    InvalidWeek {
        /// The invalid week-of-year value that was provided.
        week: u32,
    },

    /// Returned when a reference year falls outside the representable
    /// date range.
    #[error("year out of range: {year}")]
    YearOutOfRange {
        /// The unrepresentable year that was provided.
        year: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_week() {
        let err = WeekDateError::InvalidWeek { week: 54 };
        assert_eq!(err.to_string(), "invalid week number: 54 (must be 1..=53)");
    }

    #[test]
    fn error_year_out_of_range() {
        let err = WeekDateError::YearOutOfRange { year: i32::MAX };
        assert_eq!(err.to_string(), format!("year out of range: {}", i32::MAX));
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<WeekDateError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<WeekDateError>();
    }

    #[test]
    fn error_is_clone_and_eq() {
        let a = WeekDateError::InvalidWeek { week: 0 };
        let b = a.clone();
        assert_eq!(a, b);

        let c = WeekDateError::InvalidWeek { week: 54 };
        assert_ne!(a, c);
    }
}
