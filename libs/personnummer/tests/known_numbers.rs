//! Validation of published example numbers.

use chrono::Datelike;
use rstest::rstest;
use ssn_personnummer::{validate, NumberKind, Personnummer, PersonnummerError};

#[rstest]
#[case("510818-9167", true)]
#[case("19900101-0017", true)]
#[case("19130401+2931", true)]
#[case("130401+2931", true)]
#[case("196408233234", true)]
#[case("0001010107", true)]
#[case("000101-0107", true)]
#[case("550207-3900", true)]
#[case("510818-9168", false)]
#[case("19900101-0018", false)]
fn personal_numbers(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(validate(input), Ok(expected));
}

#[rstest]
#[case(6403273813, true)]
#[case(5108189167, true)]
#[case(199001010017, true)]
#[case(5502073900, true)]
#[case(5502073901, false)]
#[case(1234567890, false)]
#[case(9987654321, false)]
#[case(7010632391, true)]
#[case(6408833231, true)]
#[case(9001610017, false)]
#[case(6408933231, false)]
fn integer_numbers(#[case] input: i64, #[case] expected: bool) {
    assert_eq!(validate(input), Ok(expected));
    assert_eq!(validate(input), validate(input.to_string()));
}

#[rstest]
#[case("701063-2391", true)]
#[case("640883-3231", true)]
#[case("550207-3900", true)]
#[case("900161-0017", false)]
#[case("640893-3231", false)]
fn coordination_numbers(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(validate(input), Ok(expected));
}

#[rstest]
#[case("640327-381")]
#[case("19900101-001")]
#[case("100101+001")]
#[case("9701063-2391")]
#[case("510818*9167")]
#[case("510818-916X")]
#[case("51081891670123")]
fn malformed_text_is_a_parsing_error(#[case] input: &str) {
    let err = validate(input).unwrap_err();
    assert!(err.is_parsing(), "{input}: {err:?}");
}

#[rstest]
#[case(640327381)]
#[case(19900101001)]
#[case(100101001)]
fn malformed_integers_are_a_parsing_error(#[case] input: i64) {
    assert!(validate(input).unwrap_err().is_parsing());
    assert_eq!(validate(input), validate(input.to_string()));
}

#[test]
fn null_and_empty_are_distinct_errors() {
    let absent: Option<String> = None;
    let null = validate(absent).unwrap_err();
    let empty = validate("").unwrap_err();

    assert_eq!(null, PersonnummerError::Null);
    assert_eq!(empty, PersonnummerError::Empty);
    assert_ne!(null, empty);
    assert!(null.is_null() && !null.is_empty());
}

#[test]
fn leading_zero_is_lost_for_integers() {
    // 0001010107 as an integer renders as "1010107".
    assert!(validate(1010107_i64).unwrap_err().is_parsing());
}

#[test]
fn coordination_number_birth_date() {
    let pnr = Personnummer::parse("640883-3231").unwrap();
    assert_eq!(pnr.kind(), NumberKind::Coordination);
    assert_eq!(pnr.birth_date().to_string(), "1964-08-23");
}

#[test]
fn plus_separator_does_not_change_century() {
    // A '+' conventionally marks a holder aged 100 or more, which would
    // place this number in 1913. Century resolution ignores the separator.
    let pnr = Personnummer::parse("130401+2931").unwrap();
    assert_eq!(pnr.birth_date().year(), 2013);

    let pnr = Personnummer::parse("19130401+2931").unwrap();
    assert_eq!(pnr.birth_date().year(), 1913);
}

#[test]
fn four_digit_year_is_used_verbatim() {
    // 1900 is not a leap year; the two-digit window would pick 2000.
    let digits = [0, 0, 0, 2, 2, 9, 1, 2, 3];
    let check = ssn_personnummer::checksum::check_digit(&digits);

    assert_eq!(validate(format!("000229-123{check}")), Ok(true));
    assert_eq!(validate(format!("19000229-123{check}")), Ok(false));
}

#[test]
fn repeated_validation_is_stable() {
    for input in ["510818-9167", "900161-0017", "640327-381", ""] {
        assert_eq!(validate(input), validate(input));
    }
}
