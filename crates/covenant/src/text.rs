//! String content requirements.
//!
//! Character classes follow `char`'s Unicode predicates, except
//! `DigitsOnly`, which accepts ASCII `0`-`9` only. The affix and containment
//! checks compare ordinally unless called through a `*_using` form, which
//! records its [`StringComparison`] in the report.

use crate::check::{text, verify};
use crate::compare::StringComparison;
use covenant_kernel::{Arg, CheckOptions, ContractViolation, Facts, Requirement, RequirementType};

use RequirementType::{Postcondition, Precondition};

fn classified<S: AsRef<str>>(
    requirement: Requirement,
    requirement_type: RequirementType,
    holds: bool,
    value: Arg<S>,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    verify(holds, value, requirement, requirement_type, options, |value| {
        Facts::Value { value: text(value) }
    })
    .map(Arg::into_value)
}

macro_rules! class_requirement {
    ($requirement:ident, $requires:ident, $ensures:ident, $holds:expr) => {
        pub fn $requires<S: AsRef<str>>(
            value: Arg<S>,
            options: &CheckOptions<'_>,
        ) -> Result<S, ContractViolation> {
            let holds = $holds(value.value.as_ref());
            classified(Requirement::$requirement, Precondition, holds, value, options)
        }

        pub fn $ensures<S: AsRef<str>>(
            value: Arg<S>,
            options: &CheckOptions<'_>,
        ) -> Result<S, ContractViolation> {
            let holds = $holds(value.value.as_ref());
            classified(Requirement::$requirement, Postcondition, holds, value, options)
        }
    };
}

fn has_visible_content(value: &str) -> bool {
    !value.trim().is_empty()
}

fn alphanumeric_only(value: &str) -> bool {
    value.chars().all(char::is_alphanumeric)
}

fn alphabetic_only(value: &str) -> bool {
    value.chars().all(char::is_alphabetic)
}

fn digits_only(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

class_requirement!(
    NotWhiteSpace,
    requires_not_white_space,
    ensures_not_white_space,
    has_visible_content
);
class_requirement!(
    AlphaNumericOnly,
    requires_alpha_numeric_only,
    ensures_alpha_numeric_only,
    alphanumeric_only
);
class_requirement!(
    AlphabeticOnly,
    requires_alphabetic_only,
    ensures_alphabetic_only,
    alphabetic_only
);
class_requirement!(DigitsOnly, requires_digits_only, ensures_digits_only, digits_only);

fn affix<S: AsRef<str>, P: AsRef<str>>(
    requirement: Requirement,
    requirement_type: RequirementType,
    holds: bool,
    value: Arg<S>,
    target: Arg<P>,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    verify(holds, value, requirement, requirement_type, options, |value| {
        Facts::Target {
            value: text(value),
            target: text(&target),
        }
    })
    .map(Arg::into_value)
}

fn affix_using<S: AsRef<str>, P: AsRef<str>>(
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

/// Declares the ordinal pair and the `*_using` pair of one affix or
/// containment requirement. `$holds` is evaluated under a comparison mode.
macro_rules! affix_requirement {
    (
        $requirement:ident / $using:ident,
        $requires:ident, $ensures:ident,
        $requires_using:ident, $ensures_using:ident,
        $holds:expr
    ) => {
        pub fn $requires<S: AsRef<str>, P: AsRef<str>>(
            value: Arg<S>,
            target: Arg<P>,
            options: &CheckOptions<'_>,
        ) -> Result<S, ContractViolation> {
            let holds = $holds(
                StringComparison::Ordinal,
                value.value.as_ref(),
                target.value.as_ref(),
            );
            affix(Requirement::$requirement, Precondition, holds, value, target, options)
        }

        pub fn $ensures<S: AsRef<str>, P: AsRef<str>>(
            value: Arg<S>,
            target: Arg<P>,
            options: &CheckOptions<'_>,
        ) -> Result<S, ContractViolation> {
            let holds = $holds(
                StringComparison::Ordinal,
                value.value.as_ref(),
                target.value.as_ref(),
            );
            affix(Requirement::$requirement, Postcondition, holds, value, target, options)
        }

        pub fn $requires_using<S: AsRef<str>, P: AsRef<str>>(
            value: Arg<S>,
            target: Arg<P>,
            comparison: StringComparison,
            options: &CheckOptions<'_>,
        ) -> Result<S, ContractViolation> {
            let holds = $holds(comparison, value.value.as_ref(), target.value.as_ref());
            affix_using(
                Requirement::$using,
                Precondition,
                holds,
                value,
                target,
                comparison,
                options,
            )
        }

        pub fn $ensures_using<S: AsRef<str>, P: AsRef<str>>(
            value: Arg<S>,
            target: Arg<P>,
            comparison: StringComparison,
            options: &CheckOptions<'_>,
        ) -> Result<S, ContractViolation> {
            let holds = $holds(comparison, value.value.as_ref(), target.value.as_ref());
            affix_using(
                Requirement::$using,
                Postcondition,
                holds,
                value,
                target,
                comparison,
                options,
            )
        }
    };
}

fn lacks(comparison: StringComparison, text: &str, needle: &str) -> bool {
    !comparison.contains(text, needle)
}

affix_requirement!(
    StartsWith / StartsWithComparison,
    requires_starts_with, ensures_starts_with,
    requires_starts_with_using, ensures_starts_with_using,
    StringComparison::starts_with
);
affix_requirement!(
    EndsWith / EndsWithComparison,
    requires_ends_with, ensures_ends_with,
    requires_ends_with_using, ensures_ends_with_using,
    StringComparison::ends_with
);
affix_requirement!(
    Contains / ContainsComparison,
    requires_contains, ensures_contains,
    requires_contains_using, ensures_contains_using,
    StringComparison::contains
);
affix_requirement!(
    DoesNotContain / DoesNotContainComparison,
    requires_does_not_contain, ensures_does_not_contain,
    requires_does_not_contain_using, ensures_does_not_contain_using,
    lacks
);

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_kernel::arg;

    #[test]
    fn white_space_only_is_rejected() {
        assert!(requires_not_white_space(arg!(" \t\u{2003}\n"), &CheckOptions::NONE).is_err());
        assert!(requires_not_white_space(arg!(""), &CheckOptions::NONE).is_err());
        assert_eq!(requires_not_white_space(arg!(" x "), &CheckOptions::NONE).unwrap(), " x ");
    }

    #[test]
    fn character_classes() {
        assert!(requires_alpha_numeric_only(arg!("Zoë42"), &CheckOptions::NONE).is_ok());
        assert!(requires_alpha_numeric_only(arg!("a-b"), &CheckOptions::NONE).is_err());
        assert!(requires_alphabetic_only(arg!("Straße"), &CheckOptions::NONE).is_ok());
        assert!(requires_alphabetic_only(arg!("abc1"), &CheckOptions::NONE).is_err());
        assert!(requires_digits_only(arg!("0042"), &CheckOptions::NONE).is_ok());
        assert!(requires_digits_only(arg!("٤٢"), &CheckOptions::NONE).is_err());
    }

    #[test]
    fn empty_strings_satisfy_character_classes() {
        assert!(requires_alpha_numeric_only(arg!(""), &CheckOptions::NONE).is_ok());
        assert!(requires_digits_only(arg!(""), &CheckOptions::NONE).is_ok());
    }

    #[test]
    fn affixes_are_ordinal_by_default() {
        let path = String::from("/usr/local/bin");
        let path = requires_starts_with(arg!(path), arg!("/usr"), &CheckOptions::NONE).unwrap();
        assert!(requires_ends_with(arg!(path.as_str()), arg!("BIN"), &CheckOptions::NONE).is_err());
        assert!(
            requires_ends_with_using(
                arg!(path.as_str()),
                arg!("BIN"),
                StringComparison::OrdinalIgnoreCase,
                &CheckOptions::NONE
            )
            .is_ok()
        );
    }

    #[test]
    fn containment() {
        let sql = "select * from users";
        assert!(requires_contains(arg!(sql), arg!("from"), &CheckOptions::NONE).is_ok());
        let err = ensures_does_not_contain_using(
            arg!(sql),
            arg!("USERS"),
            StringComparison::OrdinalIgnoreCase,
            &CheckOptions::NONE,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Postcondition DoesNotContain failed: sql must not contain USERS using OrdinalIgnoreCase comparison"
        );
        assert_eq!(err.requirement_name(), Some("DoesNotContain"));
    }
}
