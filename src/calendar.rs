//! Day counting from the epoch anchor and resolution of a day count into a
//! Javanese year, month and day.

use crate::consts::{
    EPOCH_DAYS_FROM_CE, EPOCH_UNIX_MILLIS, EPOCH_YEAR, MILLIS_PER_DAY, MIN_DAY, WINDU_DAYS,
    WINDU_YEARS,
};
use crate::types::{Month, days_in_month, days_in_year};
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

/// Whole days between the epoch anchor and `datetime`, rounded toward negative
/// infinity, so any instant before the anchor yields a negative count.
pub fn elapsed_days<Tz: TimeZone>(datetime: &DateTime<Tz>) -> i64 {
    (datetime.timestamp_millis() - EPOCH_UNIX_MILLIS).div_euclid(MILLIS_PER_DAY)
}

/// Days between the epoch's civil date (1867-03-05) and `date`.
pub fn civil_elapsed_days(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) - i64::from(EPOCH_DAYS_FROM_CE)
}

/// A day count resolved into the Javanese calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub year:   i64,
    pub month:  Month,
    /// Zero-based day offset into `month`. Negative only for pre-epoch counts.
    pub offset: i64,
}

impl Resolution {
    /// One-based day of the month
    pub const fn day(&self) -> i64 {
        self.offset + MIN_DAY
    }
}

/// Resolves a day count since the epoch anchor by subtracting whole years and
/// then whole months until the remainder fits inside the current month.
///
/// Whole windus are skipped first; every run of eight consecutive years has
/// the same length, so this never changes the result.
///
/// A negative count is left unresolved: the result stays in the first month of
/// the epoch year with a non-positive day.
pub fn resolve(elapsed_days: i64) -> Resolution {
    let mut remaining = elapsed_days;
    let mut year = EPOCH_YEAR;

    if remaining >= WINDU_DAYS {
        let windus = remaining / WINDU_DAYS;
        remaining -= windus * WINDU_DAYS;
        year += windus * WINDU_YEARS;
    }

    while remaining >= i64::from(days_in_year(year)) {
        remaining -= i64::from(days_in_year(year));
        year += 1;
    }

    let mut month = Month::FIRST;
    while remaining >= i64::from(days_in_month(year, month.get())) {
        let Some(next) = month.next() else {
            break;
        };
        remaining -= i64::from(days_in_month(year, month.get()));
        month = next;
    }

    Resolution {
        year,
        month,
        offset: remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    /// Year-then-month subtraction with no cycle skipping.
    fn resolve_linear(elapsed_days: i64) -> (i64, u8, i64) {
        let mut remaining = elapsed_days;
        let mut year = EPOCH_YEAR;
        while remaining >= i64::from(days_in_year(year)) {
            remaining -= i64::from(days_in_year(year));
            year += 1;
        }
        let mut month = 1;
        while remaining >= i64::from(days_in_month(year, month)) {
            remaining -= i64::from(days_in_month(year, month));
            month += 1;
        }
        (year, month, remaining)
    }

    fn ymd(r: Resolution) -> (i64, u8, i64) {
        (r.year, r.month.get(), r.day())
    }

    #[test]
    fn test_elapsed_days_at_epoch() {
        let epoch = Utc.with_ymd_and_hms(1867, 3, 4, 17, 0, 0).unwrap();
        assert_eq!(elapsed_days(&epoch), 0);

        let later = Utc.with_ymd_and_hms(1867, 3, 5, 16, 59, 59).unwrap();
        assert_eq!(elapsed_days(&later), 0);

        let next = Utc.with_ymd_and_hms(1867, 3, 5, 17, 0, 0).unwrap();
        assert_eq!(elapsed_days(&next), 1);
    }

    #[test]
    fn test_elapsed_days_before_epoch_rounds_down() {
        let just_before = Utc.with_ymd_and_hms(1867, 3, 4, 16, 59, 59).unwrap();
        assert_eq!(elapsed_days(&just_before), -1);

        let day_before = Utc.with_ymd_and_hms(1867, 3, 3, 17, 0, 0).unwrap();
        assert_eq!(elapsed_days(&day_before), -1);
    }

    #[test]
    fn test_elapsed_days_ignores_offset_representation() {
        let wib = FixedOffset::east_opt(7 * 3600).unwrap();
        let local = wib.with_ymd_and_hms(1867, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(elapsed_days(&local), 0);

        let utc = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        let same_instant = utc.with_timezone(&wib);
        assert_eq!(elapsed_days(&utc), elapsed_days(&same_instant));
    }

    #[test]
    fn test_civil_elapsed_days() {
        let epoch = NaiveDate::from_ymd_opt(1867, 3, 5).unwrap();
        assert_eq!(civil_elapsed_days(epoch), 0);

        let date = NaiveDate::from_ymd_opt(1945, 8, 17).unwrap();
        assert_eq!(civil_elapsed_days(date), 28_654);

        let before = NaiveDate::from_ymd_opt(1867, 3, 4).unwrap();
        assert_eq!(civil_elapsed_days(before), -1);
    }

    #[test]
    fn test_resolve_epoch() {
        assert_eq!(ymd(resolve(0)), (1795, 1, 1));
    }

    #[test]
    fn test_resolve_month_and_year_boundaries() {
        struct TestCase {
            elapsed:  i64,
            expected: (i64, u8, i64),
        }

        let cases = [
            TestCase {
                elapsed:  29,
                expected: (1795, 1, 30),
            },
            TestCase {
                elapsed:  30,
                expected: (1795, 2, 1),
            },
            TestCase {
                elapsed:  58,
                expected: (1795, 2, 29),
            },
            TestCase {
                elapsed:  59,
                expected: (1795, 3, 1),
            },
            // 1795 is common, so Besar ends on day 29
            TestCase {
                elapsed:  353,
                expected: (1795, 12, 29),
            },
            TestCase {
                elapsed:  354,
                expected: (1796, 1, 1),
            },
            TestCase {
                elapsed:  708,
                expected: (1797, 1, 1),
            },
            // 1797 is leap, so Besar has a 30th day
            TestCase {
                elapsed:  708 + 354,
                expected: (1797, 12, 30),
            },
            TestCase {
                elapsed:  708 + 355,
                expected: (1798, 1, 1),
            },
        ];

        for case in &cases {
            assert_eq!(ymd(resolve(case.elapsed)), case.expected, "elapsed {}", case.elapsed);
        }
    }

    #[test]
    fn test_resolve_windu_skip_matches_linear_scan() {
        for elapsed in 0..40_000 {
            let r = resolve(elapsed);
            assert_eq!(
                (r.year, r.month.get(), r.offset),
                resolve_linear(elapsed),
                "elapsed {elapsed}"
            );
        }

        for elapsed in (40_000..400_000).step_by(997) {
            let r = resolve(elapsed);
            assert_eq!(
                (r.year, r.month.get(), r.offset),
                resolve_linear(elapsed),
                "elapsed {elapsed}"
            );
        }
    }

    #[test]
    fn test_resolve_windu_boundaries() {
        // 1802 closes the windu opened by 1795 and is a leap year
        assert_eq!(ymd(resolve(WINDU_DAYS - 1)), (1802, 12, 30));
        assert_eq!(ymd(resolve(WINDU_DAYS)), (1803, 1, 1));
        assert_eq!(ymd(resolve(2 * WINDU_DAYS)), (1811, 1, 1));
    }

    #[test]
    fn test_resolve_negative_is_not_advanced() {
        let r = resolve(-1);
        assert_eq!(ymd(r), (1795, 1, 0));
        assert_eq!(r.offset, -1);

        let r = resolve(-94);
        assert_eq!(ymd(r), (1795, 1, -93));
    }

    #[test]
    fn test_resolve_day_is_within_month_length() {
        for elapsed in (0..100_000).step_by(7) {
            let r = resolve(elapsed);
            assert!(r.day() >= 1);
            assert!(r.day() <= i64::from(days_in_month(r.year, r.month.get())));
        }
    }
}
