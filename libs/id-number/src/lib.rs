//! # za-id-number
//!
//! Decoding and validation of South African national identity numbers.
//!
//! ## Layout
//!
//! An ID number is 13 ASCII digits: `YYMMDD SSSS C A Z`
//!
//! - `YYMMDD`: date of birth, two-digit year with a fixed century pivot
//! - `S` (index 6): gender digit, even is female, odd is male
//! - `C` (index 10): citizenship digit, `0` citizen, `1` permanent resident
//! - `Z` (index 12): Luhn check digit over the whole number
//!
//! A failed checksum does not reject a number. It downgrades the success
//! message to a warning.
//!
//! ```
//! let message = za_id_number::validate("8001015009087");
//! assert_eq!(
//!     message,
//!     "ID: 8001015009087 - Valid ID: Male, South African Citizen. Luhn check passed."
//! );
//! ```

pub mod calendar;
mod decode;
mod error;
pub mod luhn;
mod types;

pub use decode::{decode, describe, validate, ID_NUMBER_LEN};
pub use error::IdNumberError;
pub use types::*;
