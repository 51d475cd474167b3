//! Luhn checksum over decimal digits.

/// Returns true if `digits` pass the Luhn check.
///
/// Walking from the rightmost digit, every second digit is doubled and
/// reduced by 9 when the result exceeds 9. The number is valid when the
/// total is divisible by 10. Each element must be in `0..=9`.
pub fn is_valid(digits: &[u8]) -> bool {
    let total: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            let n = u32::from(digit);
            if i % 2 == 1 {
                let doubled = n * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                n
            }
        })
        .sum();
    total % 10 == 0
}
