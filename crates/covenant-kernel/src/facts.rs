//! Typed failure facts.
//!
//! Each [`FactSchema`] has exactly one `Facts` variant carrying exactly its
//! fields. A variant is flattened into the generic [`FailureContext`] only
//! when the violation is built, so the key count of a context is fixed by
//! construction rather than by whichever branch of a check failed.

use crate::arg::Arg;
use crate::context::{FactKey, FailureContext};
use crate::requirement::{FactSchema, Requirement, RequirementType};
use std::fmt::Display;

/// A value or operand in textual form, paired with its source expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operand {
    pub text: String,
    pub expression: &'static str,
}

impl Operand {
    pub fn new(text: impl Into<String>, expression: &'static str) -> Self {
        Self {
            text: text.into(),
            expression,
        }
    }

    /// Render `value` with its `Display` implementation.
    pub fn display<T: Display + ?Sized>(value: &T, expression: &'static str) -> Self {
        Self::new(value.to_string(), expression)
    }
}

impl<T: Display> From<&Arg<T>> for Operand {
    fn from(arg: &Arg<T>) -> Self {
        Self::display(&arg.value, arg.expression)
    }
}

/// The facts reported by one failed check, shaped by its schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Facts {
    Value {
        value: Operand,
    },
    Datatype {
        value_expression: &'static str,
        datatype: &'static str,
    },
    Target {
        value: Operand,
        target: Operand,
    },
    TargetComparison {
        value: Operand,
        target: Operand,
        comparison: String,
    },
    Bounds {
        value: Operand,
        lower_bound: Operand,
        upper_bound: Operand,
    },
    Epsilon {
        value: Operand,
        target: Operand,
        epsilon: Operand,
    },
    MaxLength {
        value: Operand,
        max_length: Operand,
    },
    MinLength {
        value: Operand,
        min_length: Operand,
    },
    LengthBounds {
        value: Operand,
        min_length: Operand,
        max_length: Operand,
    },
    Pattern {
        value: Operand,
        regex: String,
        options: String,
    },
    CheckDigit {
        value: Operand,
        algorithm: String,
    },
}

impl Facts {
    pub fn schema(&self) -> FactSchema {
        match self {
            Self::Value { .. } => FactSchema::Value,
            Self::Datatype { .. } => FactSchema::Datatype,
            Self::Target { .. } => FactSchema::Target,
            Self::TargetComparison { .. } => FactSchema::TargetComparison,
            Self::Bounds { .. } => FactSchema::Bounds,
            Self::Epsilon { .. } => FactSchema::Epsilon,
            Self::MaxLength { .. } => FactSchema::MaxLength,
            Self::MinLength { .. } => FactSchema::MinLength,
            Self::LengthBounds { .. } => FactSchema::LengthBounds,
            Self::Pattern { .. } => FactSchema::Pattern,
            Self::CheckDigit { .. } => FactSchema::CheckDigit,
        }
    }

    /// The checked value, when the schema reports one.
    pub fn value(&self) -> Option<&Operand> {
        match self {
            Self::Datatype { .. } => None,
            Self::Value { value }
            | Self::Target { value, .. }
            | Self::TargetComparison { value, .. }
            | Self::Bounds { value, .. }
            | Self::Epsilon { value, .. }
            | Self::MaxLength { value, .. }
            | Self::MinLength { value, .. }
            | Self::LengthBounds { value, .. }
            | Self::Pattern { value, .. }
            | Self::CheckDigit { value, .. } => Some(value),
        }
    }

    pub fn value_expression(&self) -> &'static str {
        match self {
            Self::Datatype {
                value_expression, ..
            } => *value_expression,
            _ => self.value().map_or("", |value| value.expression),
        }
    }

    /// Flatten into a context in schema key order.
    pub fn into_context(
        self,
        requirement: Requirement,
        requirement_type: RequirementType,
    ) -> FailureContext {
        let mut context = FailureContext::new();
        context.insert(FactKey::RequirementType, requirement_type.as_str());
        context.insert(FactKey::RequirementName, requirement.name());

        match self {
            Self::Value { value } => push_value(&mut context, value),
            Self::Datatype {
                value_expression,
                datatype,
            } => {
                context.insert(FactKey::ValueExpression, value_expression);
                context.insert(FactKey::ValueDatatype, datatype);
            }
            Self::Target { value, target } => {
                push_value(&mut context, value);
                push_pair(&mut context, FactKey::Target, FactKey::TargetExpression, target);
            }
            Self::TargetComparison {
                value,
                target,
                comparison,
            } => {
                push_value(&mut context, value);
                push_pair(&mut context, FactKey::Target, FactKey::TargetExpression, target);
                context.insert(FactKey::StringComparison, comparison);
            }
            Self::Bounds {
                value,
                lower_bound,
                upper_bound,
            } => {
                push_value(&mut context, value);
                push_pair(
                    &mut context,
                    FactKey::LowerBound,
                    FactKey::LowerBoundExpression,
                    lower_bound,
                );
                push_pair(
                    &mut context,
                    FactKey::UpperBound,
                    FactKey::UpperBoundExpression,
                    upper_bound,
                );
            }
            Self::Epsilon {
                value,
                target,
                epsilon,
            } => {
                push_value(&mut context, value);
                push_pair(&mut context, FactKey::Target, FactKey::TargetExpression, target);
                push_pair(
                    &mut context,
                    FactKey::Epsilon,
                    FactKey::EpsilonExpression,
                    epsilon,
                );
            }
            Self::MaxLength { value, max_length } => {
                push_value(&mut context, value);
                push_pair(
                    &mut context,
                    FactKey::MaxLength,
                    FactKey::MaxLengthExpression,
                    max_length,
                );
            }
            Self::MinLength { value, min_length } => {
                push_value(&mut context, value);
                push_pair(
                    &mut context,
                    FactKey::MinLength,
                    FactKey::MinLengthExpression,
                    min_length,
                );
            }
            Self::LengthBounds {
                value,
                min_length,
                max_length,
            } => {
                push_value(&mut context, value);
                push_pair(
                    &mut context,
                    FactKey::MinLength,
                    FactKey::MinLengthExpression,
                    min_length,
                );
                push_pair(
                    &mut context,
                    FactKey::MaxLength,
                    FactKey::MaxLengthExpression,
                    max_length,
                );
            }
            Self::Pattern {
                value,
                regex,
                options,
            } => {
                push_value(&mut context, value);
                context.insert(FactKey::Regex, regex);
                context.insert(FactKey::RegexOptions, options);
            }
            Self::CheckDigit { value, algorithm } => {
                push_value(&mut context, value);
                context.insert(FactKey::CheckDigitAlgorithm, algorithm);
            }
        }

        context
    }
}

fn push_value(context: &mut FailureContext, value: Operand) {
    context.insert(FactKey::Value, value.text);
    context.insert(FactKey::ValueExpression, value.expression);
}

fn push_pair(
    context: &mut FailureContext,
    key: FactKey,
    expression_key: FactKey,
    operand: Operand,
) {
    context.insert(key, operand.text);
    context.insert(expression_key, operand.expression);
}
