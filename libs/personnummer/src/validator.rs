//! Validation of identity numbers and the validated [`Personnummer`] type.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::checksum;
use crate::date::{self, CenturyWindow, NumberKind};
use crate::error::PersonnummerError;
use crate::input::Candidate;
use crate::parse::{ParsedIdentifier, Separator};

/// Validates identity numbers against a century window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    window: CenturyWindow,
}

/// Validator used by the free functions and [`Personnummer::parse`].
pub const DEFAULT_VALIDATOR: Validator = Validator::new(CenturyWindow::DEFAULT);

impl Validator {
    /// Creates a validator resolving two-digit years with `window`.
    #[must_use]
    pub const fn new(window: CenturyWindow) -> Self {
        Self { window }
    }

    /// Returns the century window in use.
    #[must_use]
    pub const fn window(&self) -> CenturyWindow {
        self.window
    }

    /// Checks whether `input` is a valid personal identity or coordination
    /// number.
    ///
    /// Absent, empty and malformed input is an error. Well-formed input with
    /// a wrong check digit or an impossible date is `Ok(false)`.
    pub fn validate(&self, input: impl Candidate) -> Result<bool, PersonnummerError> {
        match self.parse(input) {
            Ok(_) => Ok(true),
            Err(err) if err.is_invalid_number() => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Parses `input` into a validated [`Personnummer`].
    ///
    /// Unlike [`validate`](Self::validate), checksum and date failures are
    /// reported as errors.
    pub fn parse(&self, input: impl Candidate) -> Result<Personnummer, PersonnummerError> {
        let text = input.render().ok_or(PersonnummerError::Null)?;
        let parsed = ParsedIdentifier::parse(&text)?;

        let digits = parsed.digits();
        if !checksum::is_valid(&digits) {
            return Err(PersonnummerError::Checksum {
                expected: checksum::check_digit(&parsed.payload()),
                actual: parsed.check_digit,
            });
        }

        let year = self.window.resolve(parsed.century, parsed.year);
        let (birth_date, kind) = year
            .and_then(|year| date::birth_date(year, parsed.month, parsed.day))
            .ok_or(PersonnummerError::Date {
                year: year.unwrap_or(i32::from(parsed.year)),
                month: parsed.month,
                day: parsed.day,
            })?;

        Ok(Personnummer {
            parsed,
            birth_date,
            kind,
        })
    }
}

/// Checks `input` with the default century window.
///
/// See [`Validator::validate`].
pub fn validate(input: impl Candidate) -> Result<bool, PersonnummerError> {
    DEFAULT_VALIDATOR.validate(input)
}

/// Legal sex encoded in the third serial digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Female,
    Male,
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Female => write!(f, "female"),
            Self::Male => write!(f, "male"),
        }
    }
}

/// A personal identity or coordination number that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Personnummer {
    parsed: ParsedIdentifier,
    birth_date: NaiveDate,
    kind: NumberKind,
}

impl Personnummer {
    /// Parses and validates `s` with the default century window.
    pub fn parse(s: &str) -> Result<Self, PersonnummerError> {
        DEFAULT_VALIDATOR.parse(s)
    }

    /// Returns the raw segments.
    #[must_use]
    pub const fn parsed(&self) -> &ParsedIdentifier {
        &self.parsed
    }

    /// Returns the real birth date, with the coordination offset removed.
    #[must_use]
    pub const fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    #[must_use]
    pub const fn kind(&self) -> NumberKind {
        self.kind
    }

    #[must_use]
    pub fn is_coordination_number(&self) -> bool {
        self.kind == NumberKind::Coordination
    }

    #[must_use]
    pub fn sex(&self) -> Sex {
        if (self.parsed.serial % 10) % 2 == 0 {
            Sex::Female
        } else {
            Sex::Male
        }
    }

    /// Formats as `YYYYMMDD-NNNC`.
    #[must_use]
    pub fn format_long(&self) -> String {
        format!(
            "{:04}{:02}{:02}-{:03}{}",
            self.birth_date.year(),
            self.parsed.month,
            self.parsed.day,
            self.parsed.serial,
            self.parsed.check_digit
        )
    }

    /// Formats as `YYMMDD-NNNC`, keeping a `+` separator from the input.
    #[must_use]
    pub fn format_short(&self) -> String {
        let separator = self.parsed.separator.unwrap_or(Separator::Dash);
        format!(
            "{:02}{:02}{:02}{}{:03}{}",
            self.parsed.year,
            self.parsed.month,
            self.parsed.day,
            separator.as_char(),
            self.parsed.serial,
            self.parsed.check_digit
        )
    }
}

impl std::fmt::Display for Personnummer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_long())
    }
}

impl std::str::FromStr for Personnummer {
    type Err = PersonnummerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Personnummer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format_long())
    }
}

impl<'de> Deserialize<'de> for Personnummer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
