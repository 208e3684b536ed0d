use crate::{CheckDigitAlgorithm, decimal_digits, digit_char};

/// Full identifier lengths GS1 assigns a check digit to: GTIN-8, UPC-A
/// (GTIN-12), EAN-13, GTIN-14, GSIN and SSCC.
const KEY_LENGTHS: [usize; 6] = [8, 12, 13, 14, 17, 18];

/// The GS1 mod 10 algorithm (EAN/UPC/GTIN/SSCC).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gs1;

impl CheckDigitAlgorithm for Gs1 {
    fn name(&self) -> &str {
        "GS1"
    }

    fn compute(&self, payload: &str) -> Option<char> {
        let digits = decimal_digits(payload)?;
        if !KEY_LENGTHS.contains(&(digits.len() + 1)) {
            return None;
        }
        // Weights alternate 3, 1, ... starting from the rightmost payload digit.
        let sum: u32 = digits
            .iter()
            .rev()
            .enumerate()
            .map(|(index, &digit)| u32::from(digit) * if index % 2 == 0 { 3 } else { 1 })
            .sum();
        digit_char((10 - sum % 10) % 10)
    }
}
