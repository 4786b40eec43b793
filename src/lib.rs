//! Conversion of Gregorian instants into the Javanese (Sultan Agung) calendar.
//!
//! Day 1 Sura 1795 begins at the epoch anchor, 1867-03-04T17:00:00Z (civil
//! midnight at UTC+07:00). Each conversion also reports the five-day pasaran
//! and the thirty-week wuku for the date.
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//!
//! let wib = FixedOffset::east_opt(7 * 3600).unwrap();
//! let instant = wib.with_ymd_and_hms(1945, 8, 17, 10, 0, 0).unwrap();
//! let date = tanggalan::convert(&instant);
//!
//! assert_eq!((date.year(), date.month(), date.day()), (1875, 11, 10));
//! assert_eq!(date.to_string(), "Jemuwah Legi, 10 Sela 1875");
//! ```
//!
//! Instants before the epoch anchor are not supported. They still convert, but
//! the year and month stay at Sura 1795 and the day is zero or negative.

mod calendar;
mod consts;
mod error;
mod names;
mod prelude;
mod types;

pub use calendar::{Resolution, civil_elapsed_days, elapsed_days, resolve};
pub use consts::*;
pub use error::CalendarError;
pub use names::{ARABIC_MONTH_NAMES, DAY_NAMES, MONTH_NAMES, PASARAN_NAMES, WUKU_NAMES};
pub use types::{
    Month, MonthNaming, Pasaran, Wuku, YearName, days_in_month, days_in_year, is_leap_year,
    year_in_cycle,
};

use crate::prelude::*;
use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Weekday};
use serde::{Deserialize, Serialize};

/// A date in the Javanese calendar together with its weekday, pasaran and wuku.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "camelCase")]
#[display(fmt = "{day_name} {pasaran}, {day} {month_name} {year}")]
pub struct JavaneseDate {
    year:       i64,
    month:      Month,
    day:        i64,
    month_name: &'static str,
    day_name:   &'static str,
    pasaran:    Pasaran,
    wuku:       Wuku,
    year_name:  YearName,
}

impl JavaneseDate {
    pub const fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month component (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// One-based day of the month; zero or negative only for pre-epoch input
    pub const fn day(&self) -> i64 {
        self.day
    }

    pub const fn month_name(&self) -> &'static str {
        self.month_name
    }

    /// Javanese name of the Gregorian weekday
    pub const fn day_name(&self) -> &'static str {
        self.day_name
    }

    pub const fn pasaran(&self) -> Pasaran {
        self.pasaran
    }

    pub const fn wuku(&self) -> Wuku {
        self.wuku
    }

    pub const fn year_name(&self) -> YearName {
        self.year_name
    }

    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Length of this date's month
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year, self.month.get())
    }
}

/// Conversion settings.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use tanggalan::{Converter, MonthNaming};
///
/// let converter = Converter::new().with_month_naming(MonthNaming::Arabic);
/// let date = converter.convert_civil_date(NaiveDate::from_ymd_opt(1867, 3, 5).unwrap());
///
/// assert_eq!(date.month_name(), "Muharam");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Converter {
    month_naming: MonthNaming,
}

impl Converter {
    pub const fn new() -> Self {
        Self {
            month_naming: MonthNaming::Javanese,
        }
    }

    /// Sets which month-name table fills `month_name`.
    pub const fn with_month_naming(mut self, month_naming: MonthNaming) -> Self {
        self.month_naming = month_naming;
        self
    }

    pub const fn month_naming(&self) -> MonthNaming {
        self.month_naming
    }

    /// Converts an instant. The weekday, and with it the pasaran, is taken in
    /// the instant's own timezone.
    pub fn convert<Tz: TimeZone>(&self, datetime: &DateTime<Tz>) -> JavaneseDate {
        self.convert_elapsed_days(elapsed_days(datetime), datetime.weekday())
    }

    /// Converts a calendar date, read as the civil day starting at midnight
    /// UTC+07:00 (the boundary the epoch anchor sits on).
    pub fn convert_civil_date(&self, date: NaiveDate) -> JavaneseDate {
        self.convert_elapsed_days(civil_elapsed_days(date), date.weekday())
    }

    /// Builds the date for a day count since the epoch anchor falling on `weekday`.
    pub fn convert_elapsed_days(&self, elapsed_days: i64, weekday: Weekday) -> JavaneseDate {
        if elapsed_days < 0 {
            tracing::warn!(elapsed_days, "instant precedes the epoch anchor, result is unspecified");
        }

        let resolution = resolve(elapsed_days);
        let date = JavaneseDate {
            year:       resolution.year,
            month:      resolution.month,
            day:        resolution.day(),
            month_name: resolution.month.name(self.month_naming),
            day_name:   DAY_NAMES[weekday.num_days_from_sunday() as usize],
            pasaran:    Pasaran::from_weekday(weekday),
            wuku:       Wuku::from_month_offset(resolution.offset),
            year_name:  YearName::of(resolution.year),
        };

        tracing::trace!(
            elapsed_days,
            year = date.year,
            month = date.month(),
            day = date.day,
            "resolved javanese date"
        );
        date
    }
}

/// Converts an instant with the default settings.
pub fn convert<Tz: TimeZone>(datetime: &DateTime<Tz>) -> JavaneseDate {
    Converter::new().convert(datetime)
}
