//! Requirement identities.
//!
//! A requirement is checked either as a **precondition** (on input handed to
//! a function by its caller) or as a **postcondition** (on a function's own
//! result). Independently of that, every check belongs to one requirement
//! *variant*: a named kind plus the overload shape that fixes which facts its
//! failure context carries.

use crate::context::FactKey;
use serde::{Deserialize, Serialize, Serializer};

/// Which side of a contract a check enforces.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RequirementType {
    /// Checked on caller-supplied input. Violation means caller misuse.
    Precondition,
    /// Checked on a function's own result. Violation means an internal bug.
    Postcondition,
}

impl RequirementType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Precondition => "Precondition",
            Self::Postcondition => "Postcondition",
        }
    }
}

impl std::fmt::Display for RequirementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a failed precondition is classified when no custom factory is given.
///
/// Postconditions ignore the subkind: they always report as
/// `PostconditionFailed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureSubkind {
    /// The checked value itself was absent.
    NullArgument,
    /// The value was present but outside an ordered or length bound.
    OutOfRange,
    /// Any other violated precondition.
    Invalid,
}

/// The fixed set of facts a requirement variant reports on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactSchema {
    Value,
    Datatype,
    Target,
    TargetComparison,
    Bounds,
    Epsilon,
    MaxLength,
    MinLength,
    LengthBounds,
    Pattern,
    CheckDigit,
}

impl FactSchema {
    /// Keys in the order they appear in a flattened failure context.
    pub const fn keys(self) -> &'static [FactKey] {
        use FactKey as K;
        match self {
            Self::Value => &[
                K::RequirementType,
                K::RequirementName,
                K::Value,
                K::ValueExpression,
            ],
            Self::Datatype => &[
                K::RequirementType,
                K::RequirementName,
                K::ValueExpression,
                K::ValueDatatype,
            ],
            Self::Target => &[
                K::RequirementType,
                K::RequirementName,
                K::Value,
                K::ValueExpression,
                K::Target,
                K::TargetExpression,
            ],
            Self::TargetComparison => &[
                K::RequirementType,
                K::RequirementName,
                K::Value,
                K::ValueExpression,
                K::Target,
                K::TargetExpression,
                K::StringComparison,
            ],
            Self::Bounds => &[
                K::RequirementType,
                K::RequirementName,
                K::Value,
                K::ValueExpression,
                K::LowerBound,
                K::LowerBoundExpression,
                K::UpperBound,
                K::UpperBoundExpression,
            ],
            Self::Epsilon => &[
                K::RequirementType,
                K::RequirementName,
                K::Value,
                K::ValueExpression,
                K::Target,
                K::TargetExpression,
                K::Epsilon,
                K::EpsilonExpression,
            ],
            Self::MaxLength => &[
                K::RequirementType,
                K::RequirementName,
                K::Value,
                K::ValueExpression,
                K::MaxLength,
                K::MaxLengthExpression,
            ],
            Self::MinLength => &[
                K::RequirementType,
                K::RequirementName,
                K::Value,
                K::ValueExpression,
                K::MinLength,
                K::MinLengthExpression,
            ],
            Self::LengthBounds => &[
                K::RequirementType,
                K::RequirementName,
                K::Value,
                K::ValueExpression,
                K::MinLength,
                K::MinLengthExpression,
                K::MaxLength,
                K::MaxLengthExpression,
            ],
            Self::Pattern => &[
                K::RequirementType,
                K::RequirementName,
                K::Value,
                K::ValueExpression,
                K::Regex,
                K::RegexOptions,
            ],
            Self::CheckDigit => &[
                K::RequirementType,
                K::RequirementName,
                K::Value,
                K::ValueExpression,
                K::CheckDigitAlgorithm,
            ],
        }
    }

    pub const fn key_count(self) -> usize {
        self.keys().len()
    }
}

/// Every requirement variant the library can report.
///
/// Several variants share a canonical name: `Equal` and
/// `EqualWithComparison` both report as `"Equal"` but carry different facts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Requirement {
    Between,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThanZero,
    GreaterThanOrEqualToZero,
    LessThanZero,
    LessThanOrEqualToZero,
    NotZero,
    Equal,
    EqualWithComparison,
    NotEqual,
    NotEqualWithComparison,
    ApproximatelyEqual,
    NotApproximatelyEqual,
    Finite,
    NotNaN,
    NotNull,
    NotDefault,
    True,
    False,
    NotEmpty,
    NotWhiteSpace,
    AlphaNumericOnly,
    AlphabeticOnly,
    DigitsOnly,
    StartsWith,
    StartsWithComparison,
    EndsWith,
    EndsWithComparison,
    Contains,
    ContainsComparison,
    DoesNotContain,
    DoesNotContainComparison,
    MaxLength,
    MinLength,
    LengthBetween,
    Matches,
    DoesNotMatch,
    ValidCheckDigit,
}

impl Requirement {
    pub const ALL: &'static [Requirement] = &[
        Self::Between,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::GreaterThanZero,
        Self::GreaterThanOrEqualToZero,
        Self::LessThanZero,
        Self::LessThanOrEqualToZero,
        Self::NotZero,
        Self::Equal,
        Self::EqualWithComparison,
        Self::NotEqual,
        Self::NotEqualWithComparison,
        Self::ApproximatelyEqual,
        Self::NotApproximatelyEqual,
        Self::Finite,
        Self::NotNaN,
        Self::NotNull,
        Self::NotDefault,
        Self::True,
        Self::False,
        Self::NotEmpty,
        Self::NotWhiteSpace,
        Self::AlphaNumericOnly,
        Self::AlphabeticOnly,
        Self::DigitsOnly,
        Self::StartsWith,
        Self::StartsWithComparison,
        Self::EndsWith,
        Self::EndsWithComparison,
        Self::Contains,
        Self::ContainsComparison,
        Self::DoesNotContain,
        Self::DoesNotContainComparison,
        Self::MaxLength,
        Self::MinLength,
        Self::LengthBetween,
        Self::Matches,
        Self::DoesNotMatch,
        Self::ValidCheckDigit,
    ];

    /// Canonical requirement name, reported as `RequirementName`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Between => "Between",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanOrEqual => "GreaterThanOrEqual",
            Self::LessThan => "LessThan",
            Self::LessThanOrEqual => "LessThanOrEqual",
            Self::GreaterThanZero => "GreaterThanZero",
            Self::GreaterThanOrEqualToZero => "GreaterThanOrEqualToZero",
            Self::LessThanZero => "LessThanZero",
            Self::LessThanOrEqualToZero => "LessThanOrEqualToZero",
            Self::NotZero => "NotZero",
            Self::Equal | Self::EqualWithComparison => "Equal",
            Self::NotEqual | Self::NotEqualWithComparison => "NotEqual",
            Self::ApproximatelyEqual => "ApproximatelyEqual",
            Self::NotApproximatelyEqual => "NotApproximatelyEqual",
            Self::Finite => "Finite",
            Self::NotNaN => "NotNaN",
            Self::NotNull => "NotNull",
            Self::NotDefault => "NotDefault",
            Self::True => "True",
            Self::False => "False",
            Self::NotEmpty => "NotEmpty",
            Self::NotWhiteSpace => "NotWhiteSpace",
            Self::AlphaNumericOnly => "AlphaNumericOnly",
            Self::AlphabeticOnly => "AlphabeticOnly",
            Self::DigitsOnly => "DigitsOnly",
            Self::StartsWith | Self::StartsWithComparison => "StartsWith",
            Self::EndsWith | Self::EndsWithComparison => "EndsWith",
            Self::Contains | Self::ContainsComparison => "Contains",
            Self::DoesNotContain | Self::DoesNotContainComparison => "DoesNotContain",
            Self::MaxLength => "MaxLength",
            Self::MinLength => "MinLength",
            Self::LengthBetween => "LengthBetween",
            Self::Matches => "Matches",
            Self::DoesNotMatch => "DoesNotMatch",
            Self::ValidCheckDigit => "ValidCheckDigit",
        }
    }

    /// Stable snake_case identifier, unique per variant.
    ///
    /// Used as the key in template override documents and in the registry
    /// JSON surface.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Between => "between",
            Self::GreaterThan => "greater_than",
            Self::GreaterThanOrEqual => "greater_than_or_equal",
            Self::LessThan => "less_than",
            Self::LessThanOrEqual => "less_than_or_equal",
            Self::GreaterThanZero => "greater_than_zero",
            Self::GreaterThanOrEqualToZero => "greater_than_or_equal_to_zero",
            Self::LessThanZero => "less_than_zero",
            Self::LessThanOrEqualToZero => "less_than_or_equal_to_zero",
            Self::NotZero => "not_zero",
            Self::Equal => "equal",
            Self::EqualWithComparison => "equal_with_comparison",
            Self::NotEqual => "not_equal",
            Self::NotEqualWithComparison => "not_equal_with_comparison",
            Self::ApproximatelyEqual => "approximately_equal",
            Self::NotApproximatelyEqual => "not_approximately_equal",
            Self::Finite => "finite",
            Self::NotNaN => "not_nan",
            Self::NotNull => "not_null",
            Self::NotDefault => "not_default",
            Self::True => "true",
            Self::False => "false",
            Self::NotEmpty => "not_empty",
            Self::NotWhiteSpace => "not_white_space",
            Self::AlphaNumericOnly => "alpha_numeric_only",
            Self::AlphabeticOnly => "alphabetic_only",
            Self::DigitsOnly => "digits_only",
            Self::StartsWith => "starts_with",
            Self::StartsWithComparison => "starts_with_comparison",
            Self::EndsWith => "ends_with",
            Self::EndsWithComparison => "ends_with_comparison",
            Self::Contains => "contains",
            Self::ContainsComparison => "contains_comparison",
            Self::DoesNotContain => "does_not_contain",
            Self::DoesNotContainComparison => "does_not_contain_comparison",
            Self::MaxLength => "max_length",
            Self::MinLength => "min_length",
            Self::LengthBetween => "length_between",
            Self::Matches => "matches",
            Self::DoesNotMatch => "does_not_match",
            Self::ValidCheckDigit => "valid_check_digit",
        }
    }

    pub const fn schema(self) -> FactSchema {
        match self {
            Self::Between => FactSchema::Bounds,
            Self::GreaterThan
            | Self::GreaterThanOrEqual
            | Self::LessThan
            | Self::LessThanOrEqual
            | Self::Equal
            | Self::NotEqual
            | Self::StartsWith
            | Self::EndsWith
            | Self::Contains
            | Self::DoesNotContain => FactSchema::Target,
            Self::EqualWithComparison
            | Self::NotEqualWithComparison
            | Self::StartsWithComparison
            | Self::EndsWithComparison
            | Self::ContainsComparison
            | Self::DoesNotContainComparison => FactSchema::TargetComparison,
            Self::GreaterThanZero
            | Self::GreaterThanOrEqualToZero
            | Self::LessThanZero
            | Self::LessThanOrEqualToZero
            | Self::NotZero
            | Self::Finite
            | Self::NotNaN
            | Self::True
            | Self::False
            | Self::NotEmpty
            | Self::NotWhiteSpace
            | Self::AlphaNumericOnly
            | Self::AlphabeticOnly
            | Self::DigitsOnly => FactSchema::Value,
            Self::ApproximatelyEqual | Self::NotApproximatelyEqual => FactSchema::Epsilon,
            Self::NotNull | Self::NotDefault => FactSchema::Datatype,
            Self::MaxLength => FactSchema::MaxLength,
            Self::MinLength => FactSchema::MinLength,
            Self::LengthBetween => FactSchema::LengthBounds,
            Self::Matches | Self::DoesNotMatch => FactSchema::Pattern,
            Self::ValidCheckDigit => FactSchema::CheckDigit,
        }
    }

    pub const fn subkind(self) -> FailureSubkind {
        match self {
            Self::NotNull => FailureSubkind::NullArgument,
            Self::Between
            | Self::GreaterThan
            | Self::GreaterThanOrEqual
            | Self::LessThan
            | Self::LessThanOrEqual
            | Self::GreaterThanZero
            | Self::GreaterThanOrEqualToZero
            | Self::LessThanZero
            | Self::LessThanOrEqualToZero
            | Self::MaxLength
            | Self::MinLength
            | Self::LengthBetween => FailureSubkind::OutOfRange,
            _ => FailureSubkind::Invalid,
        }
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Requirement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|requirement| requirement.id() == s)
            .ok_or_else(|| format!("unknown requirement: {s}"))
    }
}

impl Serialize for Requirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}
