//! Stateless calendar predicates for recurring cash events.
//!
//! Each predicate answers "does this recurring event fire on this date?"
//! from its arguments alone. The weekly-spending check is the one exception
//! to pure recurrence: its cadence depends on when spending last fired, so
//! the simulator owns that cursor and this module only answers the elapsed
//! question.

use jiff::civil::Date;

use crate::date_math;

/// True iff `date` is a payday on the biweekly cycle anchored at `reference`.
///
/// A payday falls on the same weekday as the reference payday, an even number
/// of whole weeks away. `rem_euclid` keeps the parity test correct for dates
/// before the reference as well, so the cycle extends in both directions.
#[inline]
pub fn is_payday(date: Date, reference: Date) -> bool {
    date.weekday() == reference.weekday()
        && date_math::days_between(reference, date).rem_euclid(14) == 0
}

/// First payday on or after `from`.
pub fn next_payday(from: Date, reference: Date) -> Date {
    let mut current = from;
    for _ in 0..14 {
        if is_payday(current, reference) {
            return current;
        }
        current = date_math::add_days(current, 1);
    }
    current
}

/// True iff `date`'s day-of-month equals `day_of_month`.
///
/// Literal equality: a due-day of 29-31 never fires in months too short to
/// contain it. Out-of-range values are user error and degrade to an event
/// that never fires rather than an error.
#[inline]
pub fn is_monthly_due(date: Date, day_of_month: i8) -> bool {
    date.day() == day_of_month
}

/// True iff at least 7 whole days have elapsed since `last_fired`.
#[inline]
pub fn weekly_elapsed(last_fired: Date, date: Date) -> bool {
    date_math::days_between(last_fired, date) >= 7
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    // 2025-11-20 is a Thursday
    fn reference() -> Date {
        date(2025, 11, 20)
    }

    #[test]
    fn test_reference_is_its_own_payday() {
        assert!(is_payday(reference(), reference()));
    }

    #[test]
    fn test_payday_every_other_thursday() {
        assert!(is_payday(date(2025, 12, 4), reference()));
        assert!(is_payday(date(2025, 12, 18), reference()));
        assert!(is_payday(date(2026, 1, 1), reference()));

        // Intervening Thursdays are not paydays
        assert!(!is_payday(date(2025, 11, 27), reference()));
        assert!(!is_payday(date(2025, 12, 11), reference()));
        assert!(!is_payday(date(2025, 12, 25), reference()));
    }

    #[test]
    fn test_payday_requires_matching_weekday() {
        // 14 days after the reference minus one day is a Wednesday
        assert!(!is_payday(date(2025, 12, 3), reference()));
        assert!(!is_payday(date(2025, 12, 5), reference()));
    }

    #[test]
    fn test_payday_extends_backwards() {
        // The cycle must be consistent for dates before the anchor too
        assert!(is_payday(date(2025, 11, 6), reference()));
        assert!(is_payday(date(2025, 10, 23), reference()));
        assert!(!is_payday(date(2025, 11, 13), reference()));
        assert!(!is_payday(date(2025, 10, 30), reference()));
    }

    #[test]
    fn test_next_payday() {
        assert_eq!(next_payday(date(2025, 11, 21), reference()), date(2025, 12, 4));
        assert_eq!(next_payday(date(2025, 12, 4), reference()), date(2025, 12, 4));
        assert_eq!(next_payday(date(2025, 12, 5), reference()), date(2025, 12, 18));
    }

    #[test]
    fn test_monthly_due() {
        assert!(is_monthly_due(date(2025, 6, 23), 23));
        assert!(!is_monthly_due(date(2025, 6, 22), 23));
        assert!(!is_monthly_due(date(2025, 6, 24), 23));
    }

    #[test]
    fn test_monthly_due_short_months_never_fire() {
        // Day 31 only exists in long months; day 30 skips February entirely
        for day in 1..=28 {
            assert!(is_monthly_due(date(2025, 2, day), day));
        }
        assert!(!is_monthly_due(date(2025, 2, 28), 29));
        assert!(!is_monthly_due(date(2025, 2, 28), 30));
        assert!(!is_monthly_due(date(2025, 4, 30), 31));
    }

    #[test]
    fn test_weekly_elapsed() {
        let anchor = date(2025, 6, 1);
        assert!(!weekly_elapsed(anchor, date(2025, 6, 1)));
        assert!(!weekly_elapsed(anchor, date(2025, 6, 7)));
        assert!(weekly_elapsed(anchor, date(2025, 6, 8)));
        assert!(weekly_elapsed(anchor, date(2025, 7, 1)));
    }
}
