//! Length requirements: `NotEmpty`, `MaxLength`, `MinLength`,
//! `LengthBetween`.
//!
//! String length is counted in `char`s (Unicode scalar values), not bytes.

use crate::check::verify;
use covenant_kernel::{
    Arg, CheckOptions, ContractViolation, Facts, Operand, Requirement, RequirementType,
};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt::Debug;

use RequirementType::{Postcondition, Precondition};

/// Anything with a length that can be described in a failure report.
pub trait Measured {
    fn length(&self) -> usize;

    /// Text reported as the `Value` fact.
    fn describe(&self) -> String;
}

impl Measured for str {
    fn length(&self) -> usize {
        self.chars().count()
    }

    fn describe(&self) -> String {
        self.to_owned()
    }
}

impl Measured for String {
    fn length(&self) -> usize {
        self.as_str().length()
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl<M: Measured + ?Sized> Measured for &M {
    fn length(&self) -> usize {
        (**self).length()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

macro_rules! measured_by_len {
    ($( [$($generics:tt)*] $ty:ty ),+ $(,)?) => {
        $(impl<$($generics)*> Measured for $ty {
            fn length(&self) -> usize {
                self.len()
            }

            fn describe(&self) -> String {
                format!("{self:?}")
            }
        })+
    };
}

measured_by_len!(
    [T: Debug] [T],
    [T: Debug] Vec<T>,
    [T: Debug] VecDeque<T>,
    [T: Debug, S] HashSet<T, S>,
    [T: Debug] BTreeSet<T>,
    [K: Debug, V: Debug, S] HashMap<K, V, S>,
    [K: Debug, V: Debug] BTreeMap<K, V>,
);

fn value_operand<M: Measured>(value: &Arg<M>) -> Operand {
    Operand::new(value.value.describe(), value.expression)
}

fn not_empty<M: Measured>(
    requirement_type: RequirementType,
    value: Arg<M>,
    options: &CheckOptions<'_>,
) -> Result<M, ContractViolation> {
    let holds = value.value.length() > 0;
    verify(holds, value, Requirement::NotEmpty, requirement_type, options, |value| {
        Facts::Value {
            value: value_operand(value),
        }
    })
    .map(Arg::into_value)
}

/// Require a non-empty string or collection.
pub fn requires_not_empty<M: Measured>(
    value: Arg<M>,
    options: &CheckOptions<'_>,
) -> Result<M, ContractViolation> {
    not_empty(Precondition, value, options)
}

pub fn ensures_not_empty<M: Measured>(
    value: Arg<M>,
    options: &CheckOptions<'_>,
) -> Result<M, ContractViolation> {
    not_empty(Postcondition, value, options)
}

fn max_length<M: Measured>(
    requirement_type: RequirementType,
    value: Arg<M>,
    max: Arg<usize>,
    options: &CheckOptions<'_>,
) -> Result<M, ContractViolation> {
    let holds = value.value.length() <= max.value;
    verify(holds, value, Requirement::MaxLength, requirement_type, options, |value| {
        Facts::MaxLength {
            value: value_operand(value),
            max_length: (&max).into(),
        }
    })
    .map(Arg::into_value)
}

/// Require at most `max` elements (or chars).
pub fn requires_max_length<M: Measured>(
    value: Arg<M>,
    max: Arg<usize>,
    options: &CheckOptions<'_>,
) -> Result<M, ContractViolation> {
    max_length(Precondition, value, max, options)
}

pub fn ensures_max_length<M: Measured>(
    value: Arg<M>,
    max: Arg<usize>,
    options: &CheckOptions<'_>,
) -> Result<M, ContractViolation> {
    max_length(Postcondition, value, max, options)
}

fn min_length<M: Measured>(
    requirement_type: RequirementType,
    value: Arg<M>,
    min: Arg<usize>,
    options: &CheckOptions<'_>,
) -> Result<M, ContractViolation> {
    let holds = value.value.length() >= min.value;
    verify(holds, value, Requirement::MinLength, requirement_type, options, |value| {
        Facts::MinLength {
            value: value_operand(value),
            min_length: (&min).into(),
        }
    })
    .map(Arg::into_value)
}

/// Require at least `min` elements (or chars).
pub fn requires_min_length<M: Measured>(
    value: Arg<M>,
    min: Arg<usize>,
    options: &CheckOptions<'_>,
) -> Result<M, ContractViolation> {
    min_length(Precondition, value, min, options)
}

pub fn ensures_min_length<M: Measured>(
    value: Arg<M>,
    min: Arg<usize>,
    options: &CheckOptions<'_>,
) -> Result<M, ContractViolation> {
    min_length(Postcondition, value, min, options)
}

fn length_between<M: Measured>(
    requirement_type: RequirementType,
    value: Arg<M>,
    min: Arg<usize>,
    max: Arg<usize>,
    options: &CheckOptions<'_>,
) -> Result<M, ContractViolation> {
    let length = value.value.length();
    let holds = min.value <= length && length <= max.value;
    verify(holds, value, Requirement::LengthBetween, requirement_type, options, |value| {
        Facts::LengthBounds {
            value: value_operand(value),
            min_length: (&min).into(),
            max_length: (&max).into(),
        }
    })
    .map(Arg::into_value)
}

/// Require `min <= length <= max`.
pub fn requires_length_between<M: Measured>(
    value: Arg<M>,
    min: Arg<usize>,
    max: Arg<usize>,
    options: &CheckOptions<'_>,
) -> Result<M, ContractViolation> {
    length_between(Precondition, value, min, max, options)
}

pub fn ensures_length_between<M: Measured>(
    value: Arg<M>,
    min: Arg<usize>,
    max: Arg<usize>,
    options: &CheckOptions<'_>,
) -> Result<M, ContractViolation> {
    length_between(Postcondition, value, min, max, options)
}
