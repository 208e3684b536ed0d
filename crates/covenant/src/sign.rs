//! Sign requirements against zero.

use crate::check::verify;
use covenant_kernel::{Arg, CheckOptions, ContractViolation, Facts, Requirement, RequirementType};
use std::fmt::Display;

use RequirementType::{Postcondition, Precondition};

/// Numeric types with a zero to compare against.
pub trait Zero: PartialOrd + Display {
    const ZERO: Self;
}

macro_rules! impl_zero {
    ($zero:literal => $($ty:ty),+) => {
        $(impl Zero for $ty {
            const ZERO: Self = $zero;
        })+
    };
}

impl_zero!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_zero!(0.0 => f32, f64);

fn sign<T: Zero>(
    requirement: Requirement,
    requirement_type: RequirementType,
    holds: bool,
    value: Arg<T>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    verify(holds, value, requirement, requirement_type, options, |value| {
        Facts::Value {
            value: value.into(),
        }
    })
    .map(Arg::into_value)
}

macro_rules! sign_requirement {
    ($requirement:ident, $requires:ident, $ensures:ident, |$v:ident, $zero:ident| $holds:expr) => {
        pub fn $requires<T: Zero>(
            value: Arg<T>,
            options: &CheckOptions<'_>,
        ) -> Result<T, ContractViolation> {
            let ($v, $zero) = (&value.value, T::ZERO);
            let holds = $holds;
            sign(Requirement::$requirement, Precondition, holds, value, options)
        }

        pub fn $ensures<T: Zero>(
            value: Arg<T>,
            options: &CheckOptions<'_>,
        ) -> Result<T, ContractViolation> {
            let ($v, $zero) = (&value.value, T::ZERO);
            let holds = $holds;
            sign(Requirement::$requirement, Postcondition, holds, value, options)
        }
    };
}

sign_requirement!(
    GreaterThanZero,
    requires_greater_than_zero,
    ensures_greater_than_zero,
    |v, zero| *v > zero
);
sign_requirement!(
    GreaterThanOrEqualToZero,
    requires_greater_than_or_equal_to_zero,
    ensures_greater_than_or_equal_to_zero,
    |v, zero| *v >= zero
);
sign_requirement!(
    LessThanZero,
    requires_less_than_zero,
    ensures_less_than_zero,
    |v, zero| *v < zero
);
sign_requirement!(
    LessThanOrEqualToZero,
    requires_less_than_or_equal_to_zero,
    ensures_less_than_or_equal_to_zero,
    |v, zero| *v <= zero
);
// NaN is not zero.
sign_requirement!(NotZero, requires_not_zero, ensures_not_zero, |v, zero| *v != zero);
