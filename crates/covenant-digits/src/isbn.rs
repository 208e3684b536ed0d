use crate::{CheckDigitAlgorithm, decimal_digits, digit_char};

/// ISBN-10 (mod 11, weights 10 down to 1, `X` for ten).
///
/// Hyphens and spaces between groups are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Isbn10;

fn strip_separators(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, '-' | ' ')).collect()
}

impl CheckDigitAlgorithm for Isbn10 {
    fn name(&self) -> &str {
        "ISBN-10"
    }

    fn compute(&self, payload: &str) -> Option<char> {
        let digits = decimal_digits(&strip_separators(payload))?;
        if digits.len() != 9 {
            return None;
        }
        let sum: u32 = digits
            .iter()
            .zip((2..=10).rev())
            .map(|(&digit, weight)| u32::from(digit) * weight)
            .sum();
        match (11 - sum % 11) % 11 {
            10 => Some('X'),
            check => digit_char(check),
        }
    }

    fn is_valid(&self, input: &str) -> bool {
        let compact = strip_separators(input);
        let mut chars = compact.chars();
        let Some(check) = chars.next_back() else {
            return false;
        };
        self.compute(chars.as_str()) == Some(check.to_ascii_uppercase())
    }
}
