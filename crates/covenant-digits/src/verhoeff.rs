use crate::{CheckDigitAlgorithm, decimal_digits, digit_char};

/// Dihedral group D5 multiplication table.
const MULTIPLICATION: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

const PERMUTATION: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

const INVERSE: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// The Verhoeff algorithm. Detects all single-digit errors and all adjacent
/// transpositions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verhoeff;

impl Verhoeff {
    /// Fold digits right-to-left starting at permutation position `offset`.
    fn fold(digits: &[u8], offset: usize) -> u8 {
        digits.iter().rev().enumerate().fold(0, |check, (index, &digit)| {
            let permuted = PERMUTATION[(index + offset) % 8][usize::from(digit)];
            MULTIPLICATION[usize::from(check)][usize::from(permuted)]
        })
    }
}

impl CheckDigitAlgorithm for Verhoeff {
    fn name(&self) -> &str {
        "Verhoeff"
    }

    fn compute(&self, payload: &str) -> Option<char> {
        let digits = decimal_digits(payload)?;
        if digits.is_empty() {
            return None;
        }
        let check = Self::fold(&digits, 1);
        digit_char(u32::from(INVERSE[usize::from(check)]))
    }

    fn is_valid(&self, input: &str) -> bool {
        match decimal_digits(input) {
            Some(digits) if digits.len() >= 2 => Self::fold(&digits, 0) == 0,
            _ => false,
        }
    }
}
