//! Range and ordering requirements: `Between`, `GreaterThan`,
//! `GreaterThanOrEqual`, `LessThan`, `LessThanOrEqual`.
//!
//! The plain forms use `PartialOrd`, so an unordered value (NaN) never
//! satisfies them. The `*_by` forms take a [`Comparer`] and fail with
//! `ArgumentNull` for parameter `comparer` when it is `None`, before the
//! value is looked at.

use crate::check::verify;
use crate::compare::Comparer;
use covenant_kernel::{
    Arg, CheckOptions, ContractViolation, Facts, Requirement, RequirementType, null_collaborator,
};
use std::cmp::Ordering;
use std::fmt::Display;

use RequirementType::{Postcondition, Precondition};

fn between<T: Display>(
    requirement_type: RequirementType,
    holds: bool,
    value: Arg<T>,
    lower: Arg<T>,
    upper: Arg<T>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    verify(holds, value, Requirement::Between, requirement_type, options, |value| {
        Facts::Bounds {
            value: value.into(),
            lower_bound: (&lower).into(),
            upper_bound: (&upper).into(),
        }
    })
    .map(Arg::into_value)
}

fn relative<T: Display>(
    requirement: Requirement,
    requirement_type: RequirementType,
    holds: bool,
    value: Arg<T>,
    target: Arg<T>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    verify(holds, value, requirement, requirement_type, options, |value| {
        Facts::Target {
            value: value.into(),
            target: (&target).into(),
        }
    })
    .map(Arg::into_value)
}

fn in_range<T: PartialOrd>(value: &T, lower: &T, upper: &T) -> bool {
    lower <= value && value <= upper
}

fn in_range_by<T>(comparer: &dyn Comparer<T>, value: &T, lower: &T, upper: &T) -> bool {
    comparer.compare(lower, value) != Ordering::Greater
        && comparer.compare(value, upper) != Ordering::Greater
}

/// Require `lower <= value <= upper`.
pub fn requires_between<T: PartialOrd + Display>(
    value: Arg<T>,
    lower: Arg<T>,
    upper: Arg<T>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    let holds = in_range(&value.value, &lower.value, &upper.value);
    between(Precondition, holds, value, lower, upper, options)
}

/// Ensure `lower <= value <= upper`.
pub fn ensures_between<T: PartialOrd + Display>(
    value: Arg<T>,
    lower: Arg<T>,
    upper: Arg<T>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    let holds = in_range(&value.value, &lower.value, &upper.value);
    between(Postcondition, holds, value, lower, upper, options)
}

/// [`requires_between`] under a caller-supplied ordering.
pub fn requires_between_by<T: Display>(
    value: Arg<T>,
    lower: Arg<T>,
    upper: Arg<T>,
    comparer: Option<&dyn Comparer<T>>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    let comparer = comparer.ok_or_else(|| null_collaborator("comparer"))?;
    let holds = in_range_by(comparer, &value.value, &lower.value, &upper.value);
    between(Precondition, holds, value, lower, upper, options)
}

pub fn ensures_between_by<T: Display>(
    value: Arg<T>,
    lower: Arg<T>,
    upper: Arg<T>,
    comparer: Option<&dyn Comparer<T>>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    let comparer = comparer.ok_or_else(|| null_collaborator("comparer"))?;
    let holds = in_range_by(comparer, &value.value, &lower.value, &upper.value);
    between(Postcondition, holds, value, lower, upper, options)
}

/// Declares the requires/ensures pairs of a one-target ordering requirement,
/// plain and comparer-driven.
macro_rules! ordering_requirement {
    (
        $requirement:ident,
        $op:tt,
        $ordering:pat,
        $requires:ident,
        $ensures:ident,
        $requires_by:ident,
        $ensures_by:ident
    ) => {
        #[doc = concat!("Require `value ", stringify!($op), " target`.")]
        pub fn $requires<T: PartialOrd + Display>(
            value: Arg<T>,
            target: Arg<T>,
            options: &CheckOptions<'_>,
        ) -> Result<T, ContractViolation> {
            let holds = value.value $op target.value;
            relative(Requirement::$requirement, Precondition, holds, value, target, options)
        }

        #[doc = concat!("Ensure `value ", stringify!($op), " target`.")]
        pub fn $ensures<T: PartialOrd + Display>(
            value: Arg<T>,
            target: Arg<T>,
            options: &CheckOptions<'_>,
        ) -> Result<T, ContractViolation> {
            let holds = value.value $op target.value;
            relative(Requirement::$requirement, Postcondition, holds, value, target, options)
        }

        #[doc = concat!("[`", stringify!($requires), "`] under a caller-supplied ordering.")]
        pub fn $requires_by<T: Display>(
            value: Arg<T>,
            target: Arg<T>,
            comparer: Option<&dyn Comparer<T>>,
            options: &CheckOptions<'_>,
        ) -> Result<T, ContractViolation> {
            let comparer = comparer.ok_or_else(|| null_collaborator("comparer"))?;
            let holds = matches!(comparer.compare(&value.value, &target.value), $ordering);
            relative(Requirement::$requirement, Precondition, holds, value, target, options)
        }

        #[doc = concat!("[`", stringify!($ensures), "`] under a caller-supplied ordering.")]
        pub fn $ensures_by<T: Display>(
            value: Arg<T>,
            target: Arg<T>,
            comparer: Option<&dyn Comparer<T>>,
            options: &CheckOptions<'_>,
        ) -> Result<T, ContractViolation> {
            let comparer = comparer.ok_or_else(|| null_collaborator("comparer"))?;
            let holds = matches!(comparer.compare(&value.value, &target.value), $ordering);
            relative(Requirement::$requirement, Postcondition, holds, value, target, options)
        }
    };
}

ordering_requirement!(
    GreaterThan,
    >,
    Ordering::Greater,
    requires_greater_than,
    ensures_greater_than,
    requires_greater_than_by,
    ensures_greater_than_by
);
ordering_requirement!(
    GreaterThanOrEqual,
    >=,
    Ordering::Greater | Ordering::Equal,
    requires_greater_than_or_equal,
    ensures_greater_than_or_equal,
    requires_greater_than_or_equal_by,
    ensures_greater_than_or_equal_by
);
ordering_requirement!(
    LessThan,
    <,
    Ordering::Less,
    requires_less_than,
    ensures_less_than,
    requires_less_than_by,
    ensures_less_than_by
);
ordering_requirement!(
    LessThanOrEqual,
    <=,
    Ordering::Less | Ordering::Equal,
    requires_less_than_or_equal,
    ensures_less_than_or_equal,
    requires_less_than_or_equal_by,
    ensures_less_than_or_equal_by
);
