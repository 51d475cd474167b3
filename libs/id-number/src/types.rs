//! Decoded fields of an ID number.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar;

/// Two-digit years below this pivot are in the 2000s, the rest in the 1900s.
pub const CENTURY_PIVOT: u8 = 22;

// =============================================================================
// Birthdate
// =============================================================================

/// A calendar-valid date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct BirthDate {
    year: u16,
    month: u8,
    day: u8,
}

impl BirthDate {
    /// Creates a birthdate, or `None` if the fields do not form a real date.
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8) -> Option<Self> {
        match calendar::days_in_month(year, month) {
            Some(last) if day >= 1 && day <= last => Some(Self { year, month, day }),
            _ => None,
        }
    }

    /// Creates a birthdate from the `YYMMDD` fields of an ID number.
    ///
    /// The century is inferred with [`CENTURY_PIVOT`].
    #[must_use]
    pub const fn from_yymmdd(yy: u8, month: u8, day: u8) -> Option<Self> {
        Self::new(full_year(yy), month, day)
    }

    /// Returns the four-digit year.
    #[must_use]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month.
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Converts to a [`NaiveDate`].
    #[must_use]
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day),
        )
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Expands a two-digit year using the fixed century pivot.
#[must_use]
pub const fn full_year(yy: u8) -> u16 {
    if yy < CENTURY_PIVOT {
        2000 + yy as u16
    } else {
        1900 + yy as u16
    }
}

// =============================================================================
// Gender and citizenship
// =============================================================================

/// Gender encoded by the parity of the seventh digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Decodes the gender digit: even is female, odd is male.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Self {
        if digit % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Female => f.write_str("Female"),
            Gender::Male => f.write_str("Male"),
        }
    }
}

/// Citizenship status encoded by the eleventh digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Citizenship {
    Citizen,
    PermanentResident,
}

impl Citizenship {
    /// Decodes the citizenship digit. Only 0 and 1 are defined.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Citizenship::Citizen),
            1 => Some(Citizenship::PermanentResident),
            _ => None,
        }
    }
}

impl fmt::Display for Citizenship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Citizenship::Citizen => f.write_str("South African Citizen"),
            Citizenship::PermanentResident => f.write_str("Permanent Resident"),
        }
    }
}

// =============================================================================
// Checksum
// =============================================================================

/// Outcome of the Luhn check. A failure is a warning, not a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Checksum {
    Passed,
    Failed,
}

impl Checksum {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Checksum::Passed)
    }
}

impl From<bool> for Checksum {
    fn from(valid: bool) -> Self {
        if valid {
            Checksum::Passed
        } else {
            Checksum::Failed
        }
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Checksum::Passed => f.write_str("Luhn check passed."),
            Checksum::Failed => {
                f.write_str("Luhn check failed. This ID number may not be valid.")
            }
        }
    }
}

// =============================================================================
// Decoded identity
// =============================================================================

/// An ID number that passed every structural check.
///
/// `Display` renders the success message shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedId {
    /// The ID number as entered.
    pub number: String,
    pub birth_date: BirthDate,
    pub gender: Gender,
    pub citizenship: Citizenship,
    pub checksum: Checksum,
}

impl fmt::Display for DecodedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} - Valid ID: {}, {}. {}",
            self.number, self.gender, self.citizenship, self.checksum
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_century_pivot() {
        assert_eq!(full_year(0), 2000);
        assert_eq!(full_year(21), 2021);
        assert_eq!(full_year(22), 1922);
        assert_eq!(full_year(99), 1999);
    }

    #[test]
    fn test_birth_date_rejects_impossible_dates() {
        assert!(BirthDate::new(1980, 4, 31).is_none());
        assert!(BirthDate::new(1980, 2, 30).is_none());
        assert!(BirthDate::new(1999, 2, 29).is_none());
        assert!(BirthDate::new(1980, 1, 0).is_none());
        assert!(BirthDate::new(1980, 13, 1).is_none());
    }

    #[test]
    fn test_birth_date_from_yymmdd_uses_pivot() {
        // 2000 is a leap year, 1900 is not
        let date = BirthDate::from_yymmdd(0, 2, 29).unwrap();
        assert_eq!(date.year(), 2000);
        assert!(BirthDate::from_yymmdd(99, 2, 29).is_none());
    }

    #[test]
    fn test_birth_date_display_and_chrono() {
        let date = BirthDate::new(1980, 1, 1).unwrap();
        assert_eq!(date.to_string(), "1980-01-01");
        assert_eq!(
            date.to_naive_date(),
            NaiveDate::from_ymd_opt(1980, 1, 1)
        );
    }

    #[test]
    fn test_gender_parity() {
        assert_eq!(Gender::from_digit(0), Gender::Female);
        assert_eq!(Gender::from_digit(4), Gender::Female);
        assert_eq!(Gender::from_digit(5), Gender::Male);
        assert_eq!(Gender::from_digit(9), Gender::Male);
    }

    #[test]
    fn test_citizenship_digits() {
        assert_eq!(Citizenship::from_digit(0), Some(Citizenship::Citizen));
        assert_eq!(
            Citizenship::from_digit(1),
            Some(Citizenship::PermanentResident)
        );
        for digit in 2..=9 {
            assert_eq!(Citizenship::from_digit(digit), None);
        }
    }

    #[test]
    fn test_decoded_id_serializes() {
        let decoded = DecodedId {
            number: "8001015009087".to_string(),
            birth_date: BirthDate::new(1980, 1, 1).unwrap(),
            gender: Gender::Male,
            citizenship: Citizenship::Citizen,
            checksum: Checksum::Passed,
        };
        let json = serde_json::to_value(&decoded).unwrap();
        assert_eq!(json["gender"], "male");
        assert_eq!(json["citizenship"], "citizen");
        assert_eq!(json["checksum"], "passed");
        assert_eq!(json["birth_date"]["year"], 1980);
    }
}
