use crate::{CheckDigitAlgorithm, decimal_digits, digit_char};

const WEIGHTS: [u32; 9] = [3, 7, 1, 3, 7, 1, 3, 7, 1];

/// ABA routing transit numbers (nine digits, weights 3-7-1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AbaRoutingNumber;

impl CheckDigitAlgorithm for AbaRoutingNumber {
    fn name(&self) -> &str {
        "ABA Routing Number"
    }

    fn compute(&self, payload: &str) -> Option<char> {
        let digits = decimal_digits(payload)?;
        if digits.len() != 8 {
            return None;
        }
        let sum: u32 = digits
            .iter()
            .zip(WEIGHTS)
            .map(|(&digit, weight)| u32::from(digit) * weight)
            .sum();
        digit_char((10 - sum % 10) % 10)
    }
}
