//! The validation routine.

use crate::{luhn, BirthDate, Checksum, Citizenship, DecodedId, Gender, IdNumberError};

/// Number of characters in an ID number.
pub const ID_NUMBER_LEN: usize = 13;

const GENDER_INDEX: usize = 6;
const CITIZENSHIP_INDEX: usize = 10;

/// Decodes an ID number, stopping at the first defect.
///
/// Checks run in a fixed order: length, birthdate (digits, month range,
/// calendar date), remaining digits, citizenship digit. The Luhn check
/// never rejects; its outcome is recorded in [`DecodedId::checksum`].
pub fn decode(input: &str) -> Result<DecodedId, IdNumberError> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() != ID_NUMBER_LEN {
        return Err(IdNumberError::InvalidLength);
    }

    let digits: Vec<Option<u8>> = chars.iter().map(|c| ascii_digit(*c)).collect();

    let birth_date = decode_birth_date(&digits[..6])?;

    let mut all = [0u8; ID_NUMBER_LEN];
    for (position, digit) in digits.iter().copied().enumerate() {
        all[position] = digit.ok_or(IdNumberError::NonDigit { position })?;
    }

    let gender = Gender::from_digit(all[GENDER_INDEX]);
    let citizenship = Citizenship::from_digit(all[CITIZENSHIP_INDEX])
        .ok_or(IdNumberError::InvalidCitizenshipDigit)?;
    let checksum = Checksum::from(luhn::is_valid(&all));

    Ok(DecodedId {
        number: input.to_string(),
        birth_date,
        gender,
        citizenship,
        checksum,
    })
}

/// Validates an ID number and describes the outcome.
///
/// Never fails: rejections come back as `Invalid ID: <reason>`.
pub fn validate(input: &str) -> String {
    describe(&decode(input))
}

/// Renders the outcome of [`decode`] as the user-facing message.
pub fn describe(outcome: &Result<DecodedId, IdNumberError>) -> String {
    match outcome {
        Ok(decoded) => decoded.to_string(),
        Err(err) => format!("Invalid ID: {err}"),
    }
}

fn ascii_digit(c: char) -> Option<u8> {
    c.to_digit(10).map(|d| d as u8)
}

/// Two digits as a number. Any missing digit is a date error.
fn two_digits(pair: &[Option<u8>]) -> Result<u8, IdNumberError> {
    match pair {
        [Some(tens), Some(ones)] => Ok(tens * 10 + ones),
        _ => Err(IdNumberError::InvalidDate),
    }
}

fn decode_birth_date(yymmdd: &[Option<u8>]) -> Result<BirthDate, IdNumberError> {
    let yy = two_digits(&yymmdd[0..2])?;
    let month = two_digits(&yymmdd[2..4])?;
    let day = two_digits(&yymmdd[4..6])?;

    if !(1..=12).contains(&month) {
        return Err(IdNumberError::MonthOutOfRange);
    }

    BirthDate::from_yymmdd(yy, month, day).ok_or(IdNumberError::InvalidDate)
}
