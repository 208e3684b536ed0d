//! # Covenant
//!
//! Design-by-contract requirement checks.
//!
//! Every requirement comes as a pair with identical signatures:
//! `requires_*` states a precondition (the caller's obligation) and
//! `ensures_*` a postcondition (the callee's own guarantee). A passing check
//! returns the value it was given; a failing one returns a
//! [`ContractViolation`] whose message is rendered from a `{Key}` template and
//! whose [`data`](ContractViolation::data) is the structured failure context.
//!
//! Values and operands are wrapped with [`arg!`], which captures the caller's
//! source text at compile time:
//!
//! ```
//! use covenant::{CheckOptions, ContractViolation, arg, requires_between};
//!
//! fn reserve(seats: u32) -> Result<u32, ContractViolation> {
//!     let seats = requires_between(arg!(seats), arg!(1), arg!(10), &CheckOptions::NONE)?;
//!     Ok(seats)
//! }
//!
//! let err = reserve(15).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Precondition Between failed: seats must be between 1 and 10 (inclusive)"
//! );
//! assert_eq!(err.actual_value(), Some("15"));
//! ```
//!
//! [`CheckOptions`] carries per-call overrides: a message template that
//! replaces the default, and an [`ExceptionFactory`] that replaces the
//! built-in error selection.

mod check;

pub mod approx;
pub mod check_digit;
pub mod compare;
pub mod equality;
pub mod length;
pub mod ordering;
pub mod pattern;
pub mod presence;
pub mod sign;
pub mod text;

pub use approx::{
    Epsilon, Float, ensures_approximately_equal, ensures_finite, ensures_not_approximately_equal,
    ensures_not_nan, requires_approximately_equal, requires_finite,
    requires_not_approximately_equal, requires_not_nan,
};
pub use check_digit::{ensures_valid_check_digit, requires_valid_check_digit};
pub use compare::{Comparer, EqualityComparer, StringComparison};
pub use equality::{
    ensures_equal, ensures_equal_by, ensures_equal_using, ensures_not_equal, ensures_not_equal_by,
    ensures_not_equal_using, requires_equal, requires_equal_by, requires_equal_using,
    requires_not_equal, requires_not_equal_by, requires_not_equal_using,
};
pub use length::{
    Measured, ensures_length_between, ensures_max_length, ensures_min_length, ensures_not_empty,
    requires_length_between, requires_max_length, requires_min_length, requires_not_empty,
};
pub use ordering::{
    ensures_between, ensures_between_by, ensures_greater_than, ensures_greater_than_by,
    ensures_greater_than_or_equal, ensures_greater_than_or_equal_by, ensures_less_than,
    ensures_less_than_by, ensures_less_than_or_equal, ensures_less_than_or_equal_by,
    requires_between, requires_between_by, requires_greater_than, requires_greater_than_by,
    requires_greater_than_or_equal, requires_greater_than_or_equal_by, requires_less_than,
    requires_less_than_by, requires_less_than_or_equal, requires_less_than_or_equal_by,
};
pub use pattern::{
    Pattern, RegexOptions, ensures_does_not_match, ensures_matches, requires_does_not_match,
    requires_matches,
};
pub use presence::{
    ensures_false, ensures_not_default, ensures_not_null, ensures_true, requires_false,
    requires_not_default, requires_not_null, requires_true,
};
pub use sign::{
    Zero, ensures_greater_than_or_equal_to_zero, ensures_greater_than_zero,
    ensures_less_than_or_equal_to_zero, ensures_less_than_zero, ensures_not_zero,
    requires_greater_than_or_equal_to_zero, requires_greater_than_zero,
    requires_less_than_or_equal_to_zero, requires_less_than_zero, requires_not_zero,
};
pub use text::{
    ensures_alpha_numeric_only, ensures_alphabetic_only, ensures_contains, ensures_contains_using,
    ensures_digits_only, ensures_does_not_contain, ensures_does_not_contain_using,
    ensures_ends_with, ensures_ends_with_using, ensures_not_white_space, ensures_starts_with,
    ensures_starts_with_using, requires_alpha_numeric_only, requires_alphabetic_only,
    requires_contains, requires_contains_using, requires_digits_only, requires_does_not_contain,
    requires_does_not_contain_using, requires_ends_with, requires_ends_with_using,
    requires_not_white_space, requires_starts_with, requires_starts_with_using,
};

pub use covenant_digits::{
    AbaRoutingNumber, CheckDigitAlgorithm, Damm, Gs1, Isbn10, Luhn, Verhoeff, algorithm_by_name,
};
pub use covenant_kernel::{
    Arg, CheckOptions, ContractViolation, ExceptionFactory, FactKey, FailureContext,
    Requirement, RequirementType, TemplateOverrides, arg, install_overrides, registry_json,
};
