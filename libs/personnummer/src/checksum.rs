//! Luhn (mod 10) checksum.

/// Computes the Luhn sum of `digits` modulo 10.
///
/// Every second digit counting leftward from the rightmost one is doubled,
/// with 9 subtracted from doubled values above 9. A digit string that ends
/// in a correct check digit sums to 0.
///
/// Each element must be a single decimal digit (0-9).
pub fn luhn(digits: &[u8]) -> u8 {
    let parity = digits.len() % 2;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| {
            let d = u32::from(d);
            if i % 2 == parity {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    (sum % 10) as u8
}

/// Computes the check digit to append to `payload`.
pub fn check_digit(payload: &[u8]) -> u8 {
    let mut digits = Vec::with_capacity(payload.len() + 1);
    digits.extend_from_slice(payload);
    digits.push(0);
    (10 - luhn(&digits)) % 10
}

/// Returns true if the last digit of `digits` is a correct check digit.
pub fn is_valid(digits: &[u8]) -> bool {
    !digits.is_empty() && luhn(digits) == 0
}
