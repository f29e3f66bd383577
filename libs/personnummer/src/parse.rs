//! Parsing of the `[CC]YYMMDD[-+]NNNC` grammar.
//!
//! The parser only checks shape: digits where digits belong, an optional
//! `-`/`+` before the last four digits, and an optional two-digit century.
//! Checksum and calendar checks happen later, on the [`ParsedIdentifier`].

use crate::error::PersonnummerError;

/// Number of digits after the optional separator (serial + check digit).
const TAIL_LEN: usize = 4;

/// Separator between the date and the serial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    /// `-`, the usual separator.
    Dash,
    /// `+`, conventionally used once the holder has turned 100.
    Plus,
}

impl Separator {
    fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'-' => Some(Self::Dash),
            b'+' => Some(Self::Plus),
            _ => None,
        }
    }

    /// Returns the separator character.
    pub const fn as_char(self) -> char {
        match self {
            Self::Dash => '-',
            Self::Plus => '+',
        }
    }
}

/// The segments of a structurally valid identity number.
///
/// No semantic checks have been applied: `month` may be 13 and `day` may be
/// anything up to 99.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedIdentifier {
    /// Century digits, present only when the input carried a four-digit year.
    pub century: Option<u8>,
    /// Last two digits of the birth year.
    pub year: u8,
    pub month: u8,
    /// Raw day field; real day plus 60 for coordination numbers.
    pub day: u8,
    pub separator: Option<Separator>,
    /// Three-digit birth-order serial.
    pub serial: u16,
    pub check_digit: u8,
}

impl ParsedIdentifier {
    /// Parses the text form of an identity number.
    pub fn parse(s: &str) -> Result<Self, PersonnummerError> {
        if s.is_empty() {
            return Err(PersonnummerError::Empty);
        }

        let bytes = s.as_bytes();
        if !(10..=13).contains(&bytes.len()) {
            return Err(PersonnummerError::parsing(format!(
                "expected 10 to 13 characters, got {}",
                bytes.len()
            )));
        }

        let (head, tail) = bytes.split_at(bytes.len() - TAIL_LEN);
        let (date, separator) = match head.split_last() {
            Some((&last, rest)) if !last.is_ascii_digit() => {
                let separator = Separator::from_byte(last).ok_or_else(|| {
                    PersonnummerError::parsing(format!(
                        "invalid separator '{}', expected '-' or '+'",
                        char::from(last)
                    ))
                })?;
                (rest, Some(separator))
            }
            _ => (head, None),
        };

        let (century, date) = match date.len() {
            6 => (None, date),
            8 => {
                let (century, date) = date.split_at(2);
                (Some(number(century, "century")? as u8), date)
            }
            n => {
                return Err(PersonnummerError::parsing(format!(
                    "expected a 6 or 8 digit date, got {n} characters"
                )))
            }
        };

        let (serial, check) = tail.split_at(3);

        Ok(Self {
            century,
            year: number(&date[0..2], "year")? as u8,
            month: number(&date[2..4], "month")? as u8,
            day: number(&date[4..6], "day")? as u8,
            separator,
            serial: number(serial, "serial")? as u16,
            check_digit: number(check, "check digit")? as u8,
        })
    }

    /// Returns the nine digits the check digit is computed over.
    pub fn payload(&self) -> [u8; 9] {
        let serial = [
            (self.serial / 100) as u8,
            (self.serial / 10 % 10) as u8,
            (self.serial % 10) as u8,
        ];
        [
            self.year / 10,
            self.year % 10,
            self.month / 10,
            self.month % 10,
            self.day / 10,
            self.day % 10,
            serial[0],
            serial[1],
            serial[2],
        ]
    }

    /// Returns the payload followed by the declared check digit.
    pub fn digits(&self) -> [u8; 10] {
        let mut digits = [0; 10];
        digits[..9].copy_from_slice(&self.payload());
        digits[9] = self.check_digit;
        digits
    }
}

impl std::str::FromStr for ParsedIdentifier {
    type Err = PersonnummerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Reads an all-digit group as an integer.
fn number(group: &[u8], what: &str) -> Result<u32, PersonnummerError> {
    if group.is_empty() || !group.iter().all(u8::is_ascii_digit) {
        return Err(PersonnummerError::parsing(format!(
            "{what} must consist of ASCII digits"
        )));
    }
    Ok(group
        .iter()
        .fold(0, |acc, &b| acc * 10 + u32::from(b - b'0')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_form_with_dash() {
        let parsed = ParsedIdentifier::parse("510818-9167").unwrap();
        assert_eq!(parsed.century, None);
        assert_eq!(parsed.year, 51);
        assert_eq!(parsed.month, 8);
        assert_eq!(parsed.day, 18);
        assert_eq!(parsed.separator, Some(Separator::Dash));
        assert_eq!(parsed.serial, 916);
        assert_eq!(parsed.check_digit, 7);
    }

    #[test]
    fn test_parse_long_form_without_separator() {
        let parsed = ParsedIdentifier::parse("196408233234").unwrap();
        assert_eq!(parsed.century, Some(19));
        assert_eq!(parsed.year, 64);
        assert_eq!(parsed.separator, None);
        assert_eq!(parsed.serial, 323);
        assert_eq!(parsed.check_digit, 4);
    }

    #[test]
    fn test_parse_plus_separator() {
        let parsed = ParsedIdentifier::parse("19130401+2931").unwrap();
        assert_eq!(parsed.century, Some(19));
        assert_eq!(parsed.separator, Some(Separator::Plus));
    }

    #[test]
    fn test_parse_keeps_leading_zero_serial() {
        let parsed = ParsedIdentifier::parse("0001010107").unwrap();
        assert_eq!(parsed.serial, 10);
        assert_eq!(parsed.digits(), [0, 0, 0, 1, 0, 1, 0, 1, 0, 7]);
    }

    #[test]
    fn test_parse_coordination_day_is_raw() {
        let parsed = ParsedIdentifier::parse("701063-2391").unwrap();
        assert_eq!(parsed.day, 63);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ParsedIdentifier::parse(""), Err(PersonnummerError::Empty));
    }

    #[test]
    fn test_parse_wrong_length() {
        for input in ["640327-381", "100101+001", "640327381", "19900101-00171"] {
            let err = ParsedIdentifier::parse(input).unwrap_err();
            assert!(err.is_parsing(), "{input}: {err:?}");
        }
    }

    #[test]
    fn test_parse_bad_separator() {
        let err = ParsedIdentifier::parse("510818*9167").unwrap_err();
        assert!(err.is_parsing());
        assert!(err.to_string().contains("separator"));
    }

    #[test]
    fn test_parse_non_digits() {
        for input in ["51O818-9167", "5108189I67", "abcdefghij", "19900101--017"] {
            assert!(ParsedIdentifier::parse(input).unwrap_err().is_parsing());
        }
    }

    #[test]
    fn test_parse_seven_digit_date_is_rejected() {
        // 7 digits, separator, 4 digits: 12 characters but not a valid shape.
        assert!(ParsedIdentifier::parse("9701063-2391")
            .unwrap_err()
            .is_parsing());
    }

    #[test]
    fn test_parse_non_ascii() {
        assert!(ParsedIdentifier::parse("510818–9167").unwrap_err().is_parsing());
    }

    #[test]
    fn test_parse_does_not_trim_whitespace() {
        assert!(ParsedIdentifier::parse(" 510818-9167")
            .unwrap_err()
            .is_parsing());
    }
}
