//! Floating-point requirements: approximate equality, `Finite`, `NotNaN`.

use crate::check::verify;
use covenant_kernel::{Arg, CheckOptions, ContractViolation, Facts, Requirement, RequirementType};
use std::fmt::{self, Display};
use std::ops::{Mul, Sub};

use RequirementType::{Postcondition, Precondition};

/// The floating-point primitives.
pub trait Float: Copy + PartialOrd + Display + Sub<Output = Self> + Mul<Output = Self> {
    fn abs(self) -> Self;
    fn max(self, other: Self) -> Self;
    fn is_finite(self) -> bool;
    fn is_nan(self) -> bool;
}

macro_rules! impl_float {
    ($($ty:ty),+) => {
        $(impl Float for $ty {
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            fn max(self, other: Self) -> Self {
                <$ty>::max(self, other)
            }
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }
            fn is_nan(self) -> bool {
                <$ty>::is_nan(self)
            }
        }

        impl From<$ty> for Epsilon<$ty> {
            fn from(epsilon: $ty) -> Self {
                Epsilon::Absolute(epsilon)
            }
        })+
    };
}

impl_float!(f32, f64);

/// Tolerance for approximate equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Epsilon<F> {
    /// `|value - target| <= epsilon`.
    Absolute(F),
    /// `|value - target| <= epsilon * max(|value|, |target|)`.
    Relative(F),
}

impl<F: Float> Epsilon<F> {
    /// Whether `value` is within tolerance of `target`. NaN is never close
    /// to anything; equal infinities are.
    pub fn admits(self, value: F, target: F) -> bool {
        if value == target {
            return true;
        }
        if !value.is_finite() || !target.is_finite() {
            return false;
        }
        let difference = (value - target).abs();
        match self {
            Self::Absolute(epsilon) => difference <= epsilon,
            Self::Relative(epsilon) => difference <= epsilon * value.abs().max(target.abs()),
        }
    }
}

impl<F: Display> Display for Epsilon<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute(epsilon) => write!(f, "{epsilon}"),
            Self::Relative(epsilon) => write!(f, "{epsilon} (relative)"),
        }
    }
}

fn approximate<F: Float>(
    requirement: Requirement,
    requirement_type: RequirementType,
    holds: bool,
    value: Arg<F>,
    target: Arg<F>,
    epsilon: Arg<Epsilon<F>>,
    options: &CheckOptions<'_>,
) -> Result<F, ContractViolation> {
    verify(holds, value, requirement, requirement_type, options, |value| {
        Facts::Epsilon {
            value: value.into(),
            target: (&target).into(),
            epsilon: (&epsilon).into(),
        }
    })
    .map(Arg::into_value)
}

/// Require `value` within `epsilon` of `target`.
///
/// A bare float epsilon is absolute; pass [`Epsilon::Relative`] to scale it
/// by the larger magnitude.
pub fn requires_approximately_equal<F: Float, E: Into<Epsilon<F>>>(
    value: Arg<F>,
    target: Arg<F>,
    epsilon: Arg<E>,
    options: &CheckOptions<'_>,
) -> Result<F, ContractViolation> {
    let epsilon = epsilon.map(Into::into);
    let holds = epsilon.value.admits(value.value, target.value);
    approximate(
        Requirement::ApproximatelyEqual,
        Precondition,
        holds,
        value,
        target,
        epsilon,
        options,
    )
}

pub fn ensures_approximately_equal<F: Float, E: Into<Epsilon<F>>>(
    value: Arg<F>,
    target: Arg<F>,
    epsilon: Arg<E>,
    options: &CheckOptions<'_>,
) -> Result<F, ContractViolation> {
    let epsilon = epsilon.map(Into::into);
    let holds = epsilon.value.admits(value.value, target.value);
    approximate(
        Requirement::ApproximatelyEqual,
        Postcondition,
        holds,
        value,
        target,
        epsilon,
        options,
    )
}

pub fn requires_not_approximately_equal<F: Float, E: Into<Epsilon<F>>>(
    value: Arg<F>,
    target: Arg<F>,
    epsilon: Arg<E>,
    options: &CheckOptions<'_>,
) -> Result<F, ContractViolation> {
    let epsilon = epsilon.map(Into::into);
    let holds = !epsilon.value.admits(value.value, target.value);
    approximate(
        Requirement::NotApproximatelyEqual,
        Precondition,
        holds,
        value,
        target,
        epsilon,
        options,
    )
}

pub fn ensures_not_approximately_equal<F: Float, E: Into<Epsilon<F>>>(
    value: Arg<F>,
    target: Arg<F>,
    epsilon: Arg<E>,
    options: &CheckOptions<'_>,
) -> Result<F, ContractViolation> {
    let epsilon = epsilon.map(Into::into);
    let holds = !epsilon.value.admits(value.value, target.value);
    approximate(
        Requirement::NotApproximatelyEqual,
        Postcondition,
        holds,
        value,
        target,
        epsilon,
        options,
    )
}

fn classified<F: Float>(
    requirement: Requirement,
    requirement_type: RequirementType,
    holds: bool,
    value: Arg<F>,
    options: &CheckOptions<'_>,
) -> Result<F, ContractViolation> {
    verify(holds, value, requirement, requirement_type, options, |value| {
        Facts::Value {
            value: value.into(),
        }
    })
    .map(Arg::into_value)
}

/// Require a value that is neither infinite nor NaN.
pub fn requires_finite<F: Float>(
    value: Arg<F>,
    options: &CheckOptions<'_>,
) -> Result<F, ContractViolation> {
    let holds = value.value.is_finite();
    classified(Requirement::Finite, Precondition, holds, value, options)
}

pub fn ensures_finite<F: Float>(
    value: Arg<F>,
    options: &CheckOptions<'_>,
) -> Result<F, ContractViolation> {
    let holds = value.value.is_finite();
    classified(Requirement::Finite, Postcondition, holds, value, options)
}

pub fn requires_not_nan<F: Float>(
    value: Arg<F>,
    options: &CheckOptions<'_>,
) -> Result<F, ContractViolation> {
    let holds = !value.value.is_nan();
    classified(Requirement::NotNaN, Precondition, holds, value, options)
}

pub fn ensures_not_nan<F: Float>(
    value: Arg<F>,
    options: &CheckOptions<'_>,
) -> Result<F, ContractViolation> {
    let holds = !value.value.is_nan();
    classified(Requirement::NotNaN, Postcondition, holds, value, options)
}
