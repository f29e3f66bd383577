//! Century resolution and calendar-date legality.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Offset added to the day of month in coordination numbers.
pub const COORDINATION_DAY_OFFSET: u8 = 60;

/// Two-digit-year windowing rule.
///
/// A two-digit year resolves to the latest year not after
/// `two_digit_year_max` that ends in those two digits. With the default of
/// 2029, `29` is 2029 and `30` is 1930.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CenturyWindow {
    two_digit_year_max: i32,
}

impl CenturyWindow {
    /// The Swedish calendar default.
    pub const DEFAULT: Self = Self::new(2029);

    /// Creates a window ending at `two_digit_year_max`.
    #[must_use]
    pub const fn new(two_digit_year_max: i32) -> Self {
        Self { two_digit_year_max }
    }

    /// Returns the last year the window covers.
    #[must_use]
    pub const fn two_digit_year_max(&self) -> i32 {
        self.two_digit_year_max
    }

    /// Resolves a birth year.
    ///
    /// An explicit century is used verbatim; otherwise the window decides.
    /// Returns `None` when the window is so extreme that the year does not
    /// fit in an `i32`.
    #[must_use]
    pub fn resolve(&self, century: Option<u8>, year: u8) -> Option<i32> {
        let year = i32::from(year);
        if let Some(century) = century {
            return Some(i32::from(century) * 100 + year);
        }
        let offset = self.two_digit_year_max.rem_euclid(100);
        let century_start = self.two_digit_year_max.checked_sub(offset)?;
        if year <= offset {
            Some(century_start + year)
        } else {
            Some(century_start.checked_sub(100)? + year)
        }
    }
}

impl Default for CenturyWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Whether the day field holds the real day or the day plus 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
    /// Personnummer.
    Personal,
    /// Samordningsnummer.
    Coordination,
}

impl std::fmt::Display for NumberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Personal => write!(f, "personnummer"),
            Self::Coordination => write!(f, "samordningsnummer"),
        }
    }
}

/// Finds the birth date encoded by `year`, `month` and the raw `day` field.
///
/// Tries the day as written first, then the coordination convention.
/// Returns `None` when neither is a real Gregorian date.
pub fn birth_date(year: i32, month: u8, day: u8) -> Option<(NaiveDate, NumberKind)> {
    if let Some(date) = ymd(year, month, day) {
        return Some((date, NumberKind::Personal));
    }
    let day = day.checked_sub(COORDINATION_DAY_OFFSET)?;
    ymd(year, month, day).map(|date| (date, NumberKind::Coordination))
}

fn ymd(year: i32, month: u8, day: u8) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
}
