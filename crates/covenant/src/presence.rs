//! Presence and truth requirements: `NotNull`, `NotDefault`, `True`, `False`.
//!
//! `NotNull` and `NotDefault` report the value's type instead of the value
//! itself; an absent or default value has nothing useful to print.

use crate::check::verify;
use covenant_kernel::{
    Arg, CheckOptions, ContractViolation, Facts, Operand, Requirement, RequirementType, report,
};
use std::any::type_name;

use RequirementType::{Postcondition, Precondition};

fn datatype<T>(value_expression: &'static str) -> Facts {
    Facts::Datatype {
        value_expression,
        datatype: type_name::<T>(),
    }
}

fn not_null<T>(
    requirement_type: RequirementType,
    value: Arg<Option<T>>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    let expression = value.expression;
    match value.value {
        Some(inner) => Ok(inner),
        None => Err(report(
            Requirement::NotNull,
            requirement_type,
            datatype::<T>(expression),
            options,
        )),
    }
}

/// Require `Some`, unwrapping it.
pub fn requires_not_null<T>(
    value: Arg<Option<T>>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    not_null(Precondition, value, options)
}

pub fn ensures_not_null<T>(
    value: Arg<Option<T>>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    not_null(Postcondition, value, options)
}

fn not_default<T: Default + PartialEq>(
    requirement_type: RequirementType,
    value: Arg<T>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    let holds = value.value != T::default();
    verify(holds, value, Requirement::NotDefault, requirement_type, options, |value| {
        datatype::<T>(value.expression)
    })
    .map(Arg::into_value)
}

/// Require a value different from `T::default()`.
pub fn requires_not_default<T: Default + PartialEq>(
    value: Arg<T>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    not_default(Precondition, value, options)
}

pub fn ensures_not_default<T: Default + PartialEq>(
    value: Arg<T>,
    options: &CheckOptions<'_>,
) -> Result<T, ContractViolation> {
    not_default(Postcondition, value, options)
}

fn truth(
    requirement: Requirement,
    requirement_type: RequirementType,
    expected: bool,
    value: Arg<bool>,
    options: &CheckOptions<'_>,
) -> Result<bool, ContractViolation> {
    verify(value.value == expected, value, requirement, requirement_type, options, |value| {
        Facts::Value {
            value: Operand::from(value),
        }
    })
    .map(Arg::into_value)
}

pub fn requires_true(
    value: Arg<bool>,
    options: &CheckOptions<'_>,
) -> Result<bool, ContractViolation> {
    truth(Requirement::True, Precondition, true, value, options)
}

pub fn ensures_true(
    value: Arg<bool>,
    options: &CheckOptions<'_>,
) -> Result<bool, ContractViolation> {
    truth(Requirement::True, Postcondition, true, value, options)
}

pub fn requires_false(
    value: Arg<bool>,
    options: &CheckOptions<'_>,
) -> Result<bool, ContractViolation> {
    truth(Requirement::False, Precondition, false, value, options)
}

pub fn ensures_false(
    value: Arg<bool>,
    options: &CheckOptions<'_>,
) -> Result<bool, ContractViolation> {
    truth(Requirement::False, Postcondition, false, value, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_kernel::arg;

    #[test]
    fn not_null_unwraps() {
        let port = Some(8080u16);
        assert_eq!(requires_not_null(arg!(port), &CheckOptions::NONE).unwrap(), 8080);
    }

    #[test]
    fn none_reports_datatype_without_value() {
        let port: Option<u16> = None;
        let err = requires_not_null(arg!(port), &CheckOptions::NONE).unwrap_err();
        assert_eq!(err.to_string(), "Precondition NotNull failed: port must not be None");
        let data = err.data().unwrap();
        assert_eq!(data.len(), 4);
        assert_eq!(data.get("ValueDatatype"), Some("u16"));
        assert!(!data.contains_key(covenant_kernel::FactKey::Value));
        assert_eq!(err.parameter(), Some("port"));

        let err = ensures_not_null(arg!(port), &CheckOptions::NONE).unwrap_err();
        assert!(matches!(err, ContractViolation::PostconditionFailed { .. }));
    }

    #[test]
    fn not_default_names_the_type() {
        let retries = 0u32;
        let err = requires_not_default(arg!(retries), &CheckOptions::NONE).unwrap_err();
        assert!(matches!(err, ContractViolation::ArgumentInvalid { .. }));
        assert_eq!(
            err.to_string(),
            "Precondition NotDefault failed: retries must not be the default value of u32"
        );
        assert_eq!(requires_not_default(arg!(3u32), &CheckOptions::NONE).unwrap(), 3);
    }

    #[test]
    fn truth_checks() {
        assert!(requires_true(arg!(1 < 2), &CheckOptions::NONE).unwrap());
        assert!(!ensures_false(arg!(1 > 2), &CheckOptions::NONE).unwrap());
        let err = requires_true(arg!(1 > 2), &CheckOptions::NONE).unwrap_err();
        assert_eq!(err.to_string(), "Precondition True failed: 1 > 2 must be true");
        assert_eq!(err.data().unwrap().get("Value"), Some("false"));
    }
}
