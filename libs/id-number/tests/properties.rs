//! Property tests for the ID number validator.

use proptest::prelude::*;
use za_id_number::{decode, validate, Gender, IdNumberError};

/// Thirteen digits with a real 1900s birthdate and a citizen digit.
fn well_formed() -> impl Strategy<Value = String> {
    (22u8..=99, 1u8..=12, 1u8..=28, "[0-9]{4}", "[0-9]{2}")
        .prop_map(|(yy, mm, dd, seq, tail)| format!("{yy:02}{mm:02}{dd:02}{seq}0{tail}"))
}

proptest! {
    #[test]
    fn wrong_length_is_always_length_error(input in "\\PC{0,40}") {
        prop_assume!(input.chars().count() != 13);
        prop_assert_eq!(validate(&input), "Invalid ID: Must be 13 digits long.");
    }

    #[test]
    fn validate_never_panics(input in "\\PC{13}") {
        let _ = validate(&input);
    }

    #[test]
    fn validate_is_deterministic(input in "[0-9]{13}") {
        prop_assert_eq!(validate(&input), validate(&input));
    }

    #[test]
    fn month_outside_range_is_rejected(yy in 0u8..=99, mm in 13u8..=99, rest in "[0-9]{9}") {
        let input = format!("{yy:02}{mm:02}{rest}");
        prop_assert_eq!(decode(&input).unwrap_err(), IdNumberError::MonthOutOfRange);
    }

    #[test]
    fn citizenship_digit_two_to_nine_is_rejected(digit in 2u8..=9) {
        let input = format!("8001015009{digit}87");
        prop_assert_eq!(decode(&input).unwrap_err(), IdNumberError::InvalidCitizenshipDigit);
    }

    #[test]
    fn gender_follows_seventh_digit_parity(input in well_formed()) {
        let decoded = decode(&input).unwrap();
        let digit = input.as_bytes()[6] - b'0';
        let expected = if digit % 2 == 0 { Gender::Female } else { Gender::Male };
        prop_assert_eq!(decoded.gender, expected);
    }

    #[test]
    fn checksum_never_blocks_success(input in well_formed()) {
        let message = validate(&input);
        let prefix = format!("ID: {input} - Valid ID: ");
        prop_assert!(message.starts_with(&prefix));
        prop_assert!(
            message.ends_with("Luhn check passed.")
                || message.ends_with("Luhn check failed. This ID number may not be valid.")
        );
    }
}
