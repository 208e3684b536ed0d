use crate::{CheckDigitAlgorithm, decimal_digits, digit_char};

/// Totally anti-symmetric quasigroup of order 10.
const QUASIGROUP: [[u8; 10]; 10] = [
    [0, 3, 1, 7, 5, 9, 8, 6, 4, 2],
    [7, 0, 9, 2, 1, 5, 4, 8, 6, 3],
    [4, 2, 0, 6, 8, 7, 1, 3, 5, 9],
    [1, 7, 5, 0, 9, 8, 3, 4, 2, 6],
    [6, 1, 2, 3, 0, 4, 5, 9, 7, 8],
    [3, 6, 7, 4, 2, 0, 9, 5, 8, 1],
    [5, 8, 6, 9, 7, 2, 0, 1, 3, 4],
    [8, 9, 4, 5, 3, 6, 2, 0, 1, 7],
    [9, 4, 3, 8, 6, 1, 7, 2, 0, 5],
    [2, 5, 8, 1, 4, 3, 6, 7, 9, 0],
];

/// The Damm algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Damm;

impl Damm {
    fn interim(digits: &[u8]) -> u8 {
        digits.iter().fold(0, |interim, &digit| {
            QUASIGROUP[usize::from(interim)][usize::from(digit)]
        })
    }
}

impl CheckDigitAlgorithm for Damm {
    fn name(&self) -> &str {
        "Damm"
    }

    fn compute(&self, payload: &str) -> Option<char> {
        let digits = decimal_digits(payload)?;
        if digits.is_empty() {
            return None;
        }
        digit_char(u32::from(Self::interim(&digits)))
    }

    fn is_valid(&self, input: &str) -> bool {
        match decimal_digits(input) {
            Some(digits) if digits.len() >= 2 => Self::interim(&digits) == 0,
            _ => false,
        }
    }
}
