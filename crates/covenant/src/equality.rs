//! Equality requirements: `Equal` and `NotEqual`, by `PartialEq`, by a
//! caller [`EqualityComparer`], or between strings under a
//! [`StringComparison`] mode.

use crate::check::{text, verify};
use crate::compare::{EqualityComparer, StringComparison};
use covenant_kernel::{
    Arg, CheckOptions, ContractViolation, Facts, Requirement, RequirementType, null_collaborator,
};
use std::fmt::Display;

use RequirementType::{Postcondition, Precondition};

fn targeted<T: Display, U: Display>(
    requirement: Requirement,
    requirement_type: RequirementType,
    holds: bool,
    value: Arg<T>,
    target: Arg<U>,
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

fn compared<S: AsRef<str>, P: AsRef<str>>(
    requirement: Requirement,
    requirement_type: RequirementType,
    holds: bool,
    value: Arg<S>,
    target: Arg<P>,
    comparison: StringComparison,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    verify(holds, value, requirement, requirement_type, options, |value| {
        Facts::TargetComparison {
            value: text(value),
            target: text(&target),
            comparison: comparison.to_string(),
        }
    })
    .map(Arg::into_value)
}

/// Require `value == target`.
pub fn requires_equal<T: PartialEq<U> + Display, U: Display>(
    value: Arg<T>,
    target: Arg<U>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    let holds = value.value == target.value;
    targeted(Requirement::Equal, Precondition, holds, value, target, options)
}

pub fn ensures_equal<T: PartialEq<U> + Display, U: Display>(
    value: Arg<T>,
    target: Arg<U>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    let holds = value.value == target.value;
    targeted(Requirement::Equal, Postcondition, holds, value, target, options)
}

/// Require `value != target`.
pub fn requires_not_equal<T: PartialEq<U> + Display, U: Display>(
    value: Arg<T>,
    target: Arg<U>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    let holds = value.value != target.value;
    targeted(Requirement::NotEqual, Precondition, holds, value, target, options)
}

pub fn ensures_not_equal<T: PartialEq<U> + Display, U: Display>(
    value: Arg<T>,
    target: Arg<U>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    let holds = value.value != target.value;
    targeted(Requirement::NotEqual, Postcondition, holds, value, target, options)
}

/// Require `value` equivalent to `target` under `comparer`.
///
/// A `None` comparer fails with `ArgumentNull` for `comparer` even when the
/// two values are equal.
pub fn requires_equal_by<T: Display>(
    value: Arg<T>,
    target: Arg<T>,
    comparer: Option<&dyn EqualityComparer<T>>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    let comparer = comparer.ok_or_else(|| null_collaborator("comparer"))?;
    let holds = comparer.equals(&value.value, &target.value);
    targeted(Requirement::Equal, Precondition, holds, value, target, options)
}

pub fn ensures_equal_by<T: Display>(
    value: Arg<T>,
    target: Arg<T>,
    comparer: Option<&dyn EqualityComparer<T>>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    let comparer = comparer.ok_or_else(|| null_collaborator("comparer"))?;
    let holds = comparer.equals(&value.value, &target.value);
    targeted(Requirement::Equal, Postcondition, holds, value, target, options)
}

pub fn requires_not_equal_by<T: Display>(
    value: Arg<T>,
    target: Arg<T>,
    comparer: Option<&dyn EqualityComparer<T>>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    let comparer = comparer.ok_or_else(|| null_collaborator("comparer"))?;
    let holds = !comparer.equals(&value.value, &target.value);
    targeted(Requirement::NotEqual, Precondition, holds, value, target, options)
}

pub fn ensures_not_equal_by<T: Display>(
    value: Arg<T>,
    target: Arg<T>,
    comparer: Option<&dyn EqualityComparer<T>>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    let comparer = comparer.ok_or_else(|| null_collaborator("comparer"))?;
    let holds = !comparer.equals(&value.value, &target.value);
    targeted(Requirement::NotEqual, Postcondition, holds, value, target, options)
}

/// Require string equality under `comparison`.
pub fn requires_equal_using<S: AsRef<str>, P: AsRef<str>>(
    value: Arg<S>,
    target: Arg<P>,
    comparison: StringComparison,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    let holds = comparison.equals(value.value.as_ref(), target.value.as_ref());
    compared(
        Requirement::EqualWithComparison,
        Precondition,
        holds,
        value,
        target,
        comparison,
        options,
    )
}

pub fn ensures_equal_using<S: AsRef<str>, P: AsRef<str>>(
    value: Arg<S>,
    target: Arg<P>,
    comparison: StringComparison,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    let holds = comparison.equals(value.value.as_ref(), target.value.as_ref());
    compared(
        Requirement::EqualWithComparison,
        Postcondition,
        holds,
        value,
        target,
        comparison,
        options,
    )
}

pub fn requires_not_equal_using<S: AsRef<str>, P: AsRef<str>>(
    value: Arg<S>,
    target: Arg<P>,
    comparison: StringComparison,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    let holds = !comparison.equals(value.value.as_ref(), target.value.as_ref());
    compared(
        Requirement::NotEqualWithComparison,
        Precondition,
        holds,
        value,
        target,
        comparison,
        options,
    )
}

pub fn ensures_not_equal_using<S: AsRef<str>, P: AsRef<str>>(
    value: Arg<S>,
    target: Arg<P>,
    comparison: StringComparison,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    let holds = !comparison.equals(value.value.as_ref(), target.value.as_ref());
    compared(
        Requirement::NotEqualWithComparison,
        Postcondition,
        holds,
        value,
        target,
        comparison,
        options,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_kernel::arg;

    #[test]
    fn equal_passes_value_through() {
        let name = String::from("ada");
        let name = requires_equal(arg!(name), arg!("ada"), &CheckOptions::NONE).unwrap();
        assert_eq!(name, "ada");
    }

    #[test]
    fn not_equal_reports_both_sides() {
        let err = ensures_not_equal(arg!(2 + 2), arg!(4), &CheckOptions::NONE).unwrap_err();
        assert_eq!(err.to_string(), "Postcondition NotEqual failed: 2 + 2 must not equal 4");
        let data = err.data().unwrap();
        assert_eq!(data.get("Value"), Some("4"));
        assert_eq!(data.get("TargetExpression"), Some("4"));
    }

    #[test]
    fn comparer_decides_equality() {
        let parity: &dyn EqualityComparer<i32> = &|a: &i32, b: &i32| a % 2 == b % 2;
        assert_eq!(
            requires_equal_by(arg!(3), arg!(7), Some(parity), &CheckOptions::NONE).unwrap(),
            3
        );
        assert!(
            requires_not_equal_by(arg!(3), arg!(7), Some(parity), &CheckOptions::NONE).is_err()
        );
    }

    #[test]
    fn missing_comparer_wins_over_equal_values() {
        let err = requires_equal_by(arg!(1), arg!(1), None, &CheckOptions::NONE).unwrap_err();
        assert!(matches!(
            err,
            ContractViolation::ArgumentNull { ref parameter, data: None, .. }
                if parameter == "comparer"
        ));
    }

    #[test]
    fn comparison_mode_is_recorded() {
        let code = "abc";
        let ignore_case = StringComparison::OrdinalIgnoreCase;
        assert!(
            requires_equal_using(arg!(code), arg!("ABC"), ignore_case, &CheckOptions::NONE).is_ok()
        );

        let ordinal = StringComparison::Ordinal;
        let err = requires_equal_using(arg!(code), arg!("ABC"), ordinal, &CheckOptions::NONE)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Precondition Equal failed: code must equal ABC using Ordinal comparison"
        );
        assert_eq!(err.data().unwrap().get("StringComparison"), Some("Ordinal"));
        assert_eq!(err.data().unwrap().len(), 7);
    }
}
