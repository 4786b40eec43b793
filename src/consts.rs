/// Epoch anchor (1867-03-04T17:00:00Z) as milliseconds since the Unix epoch.
/// This is civil midnight at UTC+07:00 on 1867-03-05, the first day of 1 Sura 1795.
pub const EPOCH_UNIX_MILLIS: i64 = -3_244_950_000_000;

/// Civil date of the epoch anchor (1867-03-05) counted as days from 0001-01-01 CE,
/// where 0001-01-01 is day 1.
pub const EPOCH_DAYS_FROM_CE: i32 = 681_606;

/// Milliseconds in one elapsed day
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Javanese year whose first day coincides with the epoch anchor
pub const EPOCH_YEAR: i64 = 1795;

/// Maximum valid month (Besar)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: i64 = 1;

/// Month number for Besar, which takes the leap day
pub const BESAR: u8 = 12;

/// Length of odd-numbered months
pub const LONG_MONTH_DAYS: u8 = 30;
/// Length of even-numbered months (and Besar outside leap years)
pub const SHORT_MONTH_DAYS: u8 = 29;

/// Days in a common year
pub const COMMON_YEAR_DAYS: u16 = 354;
/// Days in a leap year
pub const LEAP_YEAR_DAYS: u16 = 355;

/// Years in one windu (the leap cycle)
pub const WINDU_YEARS: i64 = 8;
/// Positions within a windu (1-based) that are leap years: Ehe, Dal, Jimakir
pub const LEAP_POSITIONS: [u8; 3] = [2, 5, 8];
/// Days in one windu: five common years and three leap years
pub const WINDU_DAYS: i64 = 5 * COMMON_YEAR_DAYS as i64 + 3 * LEAP_YEAR_DAYS as i64;

/// Days in the Gregorian week
pub const DAYS_PER_WEEK: i64 = 7;
/// Length of the pasaran market week
pub const PASARAN_CYCLE: u8 = 5;
/// Calibration added to the weekday before reducing it into the pasaran cycle
pub(crate) const PASARAN_WEEKDAY_OFFSET: u8 = 1;
/// Number of wuku in the 210-day cycle
pub const WUKU_CYCLE: u8 = 30;
