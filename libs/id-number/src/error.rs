//! Rejection reasons for ID numbers.

use thiserror::Error;

/// Errors that can occur when decoding an ID number.
///
/// The `Display` text of each variant is the sentence shown to users after
/// the `Invalid ID: ` prefix.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IdNumberError {
    /// The input is not exactly 13 characters long.
    #[error("Must be 13 digits long.")]
    InvalidLength,

    /// The month field is outside 1-12.
    #[error("Month out of range.")]
    MonthOutOfRange,

    /// The birthdate is not a real calendar date or contains non-digits.
    #[error("Date is incorrect.")]
    InvalidDate,

    /// A character after the birthdate is not an ASCII digit.
    #[error("Must contain only digits.")]
    NonDigit { position: usize },

    /// The citizenship digit is neither 0 nor 1.
    #[error("Invalid citizenship digit.")]
    InvalidCitizenshipDigit,
}

impl IdNumberError {
    /// Returns true if this error was raised while decoding the birthdate.
    pub fn is_date_error(&self) -> bool {
        matches!(
            self,
            IdNumberError::MonthOutOfRange | IdNumberError::InvalidDate
        )
    }

    /// Short machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            IdNumberError::InvalidLength => "invalid_length",
            IdNumberError::MonthOutOfRange => "month_out_of_range",
            IdNumberError::InvalidDate => "invalid_date",
            IdNumberError::NonDigit { .. } => "non_digit",
            IdNumberError::InvalidCitizenshipDigit => "invalid_citizenship_digit",
        }
    }
}
