//! Property tests for the validator.

use proptest::prelude::*;
use ssn_personnummer::checksum::{check_digit, luhn};
use ssn_personnummer::{validate, NumberKind, Personnummer};

fn digits_of(s: &str) -> Vec<u8> {
    s.bytes().map(|b| b - b'0').collect()
}

proptest! {
    #[test]
    fn integer_matches_decimal_text(n in 0u64..10_000_000_000_000) {
        prop_assert_eq!(validate(n), validate(n.to_string()));
        prop_assert_eq!(validate(n as i64), validate(n.to_string()));
    }

    #[test]
    fn validation_is_deterministic(s in "[0-9+\\-]{0,14}") {
        prop_assert_eq!(validate(s.as_str()), validate(s.as_str()));
    }

    #[test]
    fn arbitrary_text_never_panics(s in "\\PC{0,16}") {
        let _ = validate(s.as_str());
    }

    #[test]
    fn check_digit_agrees_with_luhn(payload in proptest::collection::vec(0u8..10, 1..20)) {
        let mut full = payload.clone();
        full.push(check_digit(&payload));
        prop_assert_eq!(luhn(&full), 0);
    }

    #[test]
    fn generated_numbers_validate(
        year in 1800i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        serial in 0u32..1000,
        coordination in any::<bool>(),
        dash in any::<bool>(),
    ) {
        let day_field = if coordination { day + 60 } else { day };
        let payload = format!("{:02}{:02}{:02}{:03}", year % 100, month, day_field, serial);
        let check = check_digit(&digits_of(&payload));
        let separator = if dash { "-" } else { "" };
        let input = format!(
            "{:04}{:02}{:02}{}{:03}{}",
            year, month, day_field, separator, serial, check
        );

        prop_assert_eq!(validate(input.as_str()), Ok(true));

        let pnr = Personnummer::parse(&input).unwrap();
        let expected_kind = if coordination { NumberKind::Coordination } else { NumberKind::Personal };
        prop_assert_eq!(pnr.kind(), expected_kind);
        prop_assert_eq!(pnr.birth_date().to_string(), format!("{:04}-{:02}-{:02}", year, month, day));

        let wrong = format!("{}{}", &input[..input.len() - 1], (check + 1) % 10);
        prop_assert_eq!(validate(wrong.as_str()), Ok(false));
    }
}
