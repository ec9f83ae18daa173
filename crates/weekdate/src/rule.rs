//! The week-numbering rule.

use chrono::Weekday;

/// A week-numbering rule: which weekday starts the week, and how many
/// days of January a week must contain to count as week 1.
///
/// The rule is a process-lifetime constant rather than an ambient locale
/// lookup, so the same binary numbers weeks identically on every machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekRule {
    /// First day of the week.
    pub first_day: Weekday,
    /// Minimum number of January days required for the first week of a
    /// year (1..=7).
    pub min_days_in_first_week: u8,
}

impl WeekRule {
    /// The ISO-8601 convention: weeks start on Monday, and week 1 is the
    /// first week containing at least four days of January.
    pub const ISO_8601: WeekRule = WeekRule {
        first_day: Weekday::Mon,
        min_days_in_first_week: 4,
    };
}

impl Default for WeekRule {
    fn default() -> Self {
        Self::ISO_8601
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_8601_constant() {
        assert_eq!(WeekRule::ISO_8601.first_day, Weekday::Mon);
        assert_eq!(WeekRule::ISO_8601.min_days_in_first_week, 4);
    }

    #[test]
    fn default_is_iso_8601() {
        assert_eq!(WeekRule::default(), WeekRule::ISO_8601);
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<WeekRule>();
    }
}
