//! # covenant-digits
//!
//! Check-digit algorithms. A check digit is the trailing character of an
//! identifier, derived from the rest of it, that catches transcription
//! errors.
//!
//! Every algorithm implements [`CheckDigitAlgorithm`]: a display name (used
//! in violation reports) plus validation. Inputs are validated strictly: any
//! character outside the algorithm's alphabet makes the input invalid, except
//! where an algorithm documents separators it ignores.

mod aba;
mod damm;
mod gs1;
mod isbn;
mod luhn;
mod verhoeff;

pub use aba::AbaRoutingNumber;
pub use damm::Damm;
pub use gs1::Gs1;
pub use isbn::Isbn10;
pub use luhn::Luhn;
pub use verhoeff::Verhoeff;

/// A check-digit scheme.
pub trait CheckDigitAlgorithm: Send + Sync {
    /// Human-readable name, reported as `CheckDigitAlgorithm`.
    fn name(&self) -> &str;

    /// Compute the check character for `payload` (the input without its
    /// check character). `None` when the payload is malformed.
    fn compute(&self, payload: &str) -> Option<char>;

    /// Whether `input` ends with the correct check character.
    fn is_valid(&self, input: &str) -> bool {
        let mut chars = input.chars();
        let Some(check) = chars.next_back() else {
            return false;
        };
        self.compute(chars.as_str()) == Some(check)
    }
}

/// Built-in algorithms, in a stable order.
pub fn builtin_algorithms() -> [&'static dyn CheckDigitAlgorithm; 6] {
    [&Luhn, &Verhoeff, &Damm, &Isbn10, &Gs1, &AbaRoutingNumber]
}

/// Look up a built-in algorithm by its display name (case-insensitive).
pub fn algorithm_by_name(name: &str) -> Option<&'static dyn CheckDigitAlgorithm> {
    builtin_algorithms()
        .into_iter()
        .find(|algorithm| algorithm.name().eq_ignore_ascii_case(name))
}

/// Parse an all-ASCII-digit string into digit values.
pub(crate) fn decimal_digits(input: &str) -> Option<Vec<u8>> {
    input
        .bytes()
        .map(|byte| byte.is_ascii_digit().then(|| byte - b'0'))
        .collect()
}

pub(crate) fn digit_char(digit: u32) -> Option<char> {
    char::from_digit(digit, 10)
}
