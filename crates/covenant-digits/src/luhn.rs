use crate::{CheckDigitAlgorithm, decimal_digits, digit_char};

/// The Luhn (mod 10) algorithm used by payment card numbers and IMEIs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Luhn;

impl CheckDigitAlgorithm for Luhn {
    fn name(&self) -> &str {
        "Luhn"
    }

    fn compute(&self, payload: &str) -> Option<char> {
        let digits = decimal_digits(payload)?;
        if digits.is_empty() {
            return None;
        }
        // The rightmost payload digit sits next to the check digit and is doubled.
        let sum: u32 = digits
            .iter()
            .rev()
            .enumerate()
            .map(|(index, &digit)| {
                let digit = u32::from(digit);
                if index % 2 == 0 {
                    let doubled = digit * 2;
                    if doubled > 9 { doubled - 9 } else { doubled }
                } else {
                    digit
                }
            })
            .sum();
        digit_char((10 - sum % 10) % 10)
    }
}
