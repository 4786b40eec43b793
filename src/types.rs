use crate::consts::{
    BESAR, COMMON_YEAR_DAYS, DAYS_PER_WEEK, LEAP_POSITIONS, LEAP_YEAR_DAYS, LONG_MONTH_DAYS,
    MAX_MONTH, PASARAN_CYCLE, PASARAN_WEEKDAY_OFFSET, SHORT_MONTH_DAYS, WINDU_YEARS, WUKU_CYCLE,
};
use crate::names::{ARABIC_MONTH_NAMES, MONTH_NAMES, PASARAN_NAMES, WUKU_NAMES, position_of};
use crate::prelude::*;
use crate::CalendarError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A Javanese month number guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Sura, the first month of the year
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// The following month of the same year, or `None` after Besar
    pub const fn next(self) -> Option<Self> {
        if self.get() >= MAX_MONTH {
            return None;
        }
        match NonZeroU8::new(self.get() + 1) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Name of the month under the given naming convention
    pub const fn name(self, naming: MonthNaming) -> &'static str {
        naming.table()[(self.get() - 1) as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which traditional month-name table to report.
///
/// Both conventions number months identically; only the names differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthNaming {
    /// Sura, Sapar, Mulud, ... Besar
    #[default]
    Javanese,
    /// Muharam, Sapar, Rabingulawal, ... Dulkijah
    Arabic,
}

impl MonthNaming {
    pub const fn table(self) -> &'static [&'static str; 12] {
        match self {
            Self::Javanese => &MONTH_NAMES,
            Self::Arabic => &ARABIC_MONTH_NAMES,
        }
    }
}

/// Name of a year by its position in the eight-year windu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum YearName {
    Alip,
    Ehe,
    Jimawal,
    Je,
    Dal,
    Be,
    Wawu,
    Jimakir,
}

impl YearName {
    const ALL: [Self; 8] = [
        Self::Alip,
        Self::Ehe,
        Self::Jimawal,
        Self::Je,
        Self::Dal,
        Self::Be,
        Self::Wawu,
        Self::Jimakir,
    ];

    /// The windu year name of `year`
    pub const fn of(year: i64) -> Self {
        Self::ALL[(year_in_cycle(year) - 1) as usize]
    }

    /// Ehe, Dal and Jimakir are the leap years
    pub const fn is_leap(self) -> bool {
        is_leap_position(self as u8 + 1)
    }
}

/// Position in the five-day market week, paired with its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[display(fmt = "{name}")]
pub struct Pasaran {
    day:  u8,
    name: &'static str,
}

impl Pasaran {
    /// Creates a pasaran from its cycle index
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidPasaran` if `index` is not below 5.
    pub fn new(index: u8) -> Result<Self, CalendarError> {
        if index >= PASARAN_CYCLE {
            return Err(CalendarError::InvalidPasaran(index));
        }
        Ok(Self::at(index))
    }

    /// Pasaran associated with a Gregorian weekday: index `(weekday + 1) % 5`,
    /// counting weekdays from Sunday = 0.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_weekday(weekday: Weekday) -> Self {
        let dow = weekday.num_days_from_sunday() as u8;
        Self::at((dow + PASARAN_WEEKDAY_OFFSET) % PASARAN_CYCLE)
    }

    const fn at(index: u8) -> Self {
        Self {
            day:  index,
            name: PASARAN_NAMES[index as usize],
        }
    }

    /// Index within the cycle, `0..=4`
    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl FromStr for Pasaran {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        position_of(&PASARAN_NAMES, s)
            .and_then(|i| u8::try_from(i).ok())
            .map(Self::at)
            .ok_or_else(|| CalendarError::UnknownName {
                kind: "pasaran",
                name: s.to_owned(),
            })
    }
}

/// Position in the thirty-week wuku cycle, paired with its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[display(fmt = "{name}")]
pub struct Wuku {
    day:  u8,
    name: &'static str,
}

impl Wuku {
    /// Creates a wuku from its cycle index
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWuku` if `index` is not below 30.
    pub fn new(index: u8) -> Result<Self, CalendarError> {
        if index >= WUKU_CYCLE {
            return Err(CalendarError::InvalidWuku(index));
        }
        Ok(Self::at(index))
    }

    /// Wuku for a zero-based day offset into the resolved month:
    /// index `floor((offset + 1) / 7) mod 30`.
    ///
    /// Euclidean division keeps the index in range for negative offsets too.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_month_offset(offset: i64) -> Self {
        let week = (offset + 1).div_euclid(DAYS_PER_WEEK);
        Self::at(week.rem_euclid(WUKU_CYCLE as i64) as u8)
    }

    const fn at(index: u8) -> Self {
        Self {
            day:  index,
            name: WUKU_NAMES[index as usize],
        }
    }

    /// Index within the cycle, `0..=29`
    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl FromStr for Wuku {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        position_of(&WUKU_NAMES, s)
            .and_then(|i| u8::try_from(i).ok())
            .map(Self::at)
            .ok_or_else(|| CalendarError::UnknownName {
                kind: "wuku",
                name: s.to_owned(),
            })
    }
}

// Helper functions

/// Position of `year` within its windu, `1..=8`. Windus start at year 1.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn year_in_cycle(year: i64) -> u8 {
    ((year - 1).rem_euclid(WINDU_YEARS) + 1) as u8
}

const fn is_leap_position(position: u8) -> bool {
    let mut i = 0;
    while i < LEAP_POSITIONS.len() {
        if LEAP_POSITIONS[i] == position {
            return true;
        }
        i += 1;
    }
    false
}

pub const fn is_leap_year(year: i64) -> bool {
    is_leap_position(year_in_cycle(year))
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month % 2 == 1 || (month == BESAR && is_leap_year(year)) {
        LONG_MONTH_DAYS
    } else {
        SHORT_MONTH_DAYS
    }
}

pub const fn days_in_year(year: i64) -> u16 {
    if is_leap_year(year) {
        LEAP_YEAR_DAYS
    } else {
        COMMON_YEAR_DAYS
    }
}
