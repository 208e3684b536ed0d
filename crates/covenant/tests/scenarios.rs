//! Integration tests: end-to-end behaviour of the public entry points,
//! including per-call template and factory overrides.

use covenant::{
    CheckOptions, ContractViolation, EqualityComparer, FailureContext, Luhn, RequirementType, arg,
    ensures_alpha_numeric_only, ensures_greater_than_or_equal_to_zero, requires_between,
    requires_contains, requires_equal_by, requires_valid_check_digit,
};

#[test]
fn passing_check_returns_value() {
    assert_eq!(requires_between(arg!(5), arg!(1), arg!(10), &CheckOptions::NONE).unwrap(), 5);
}

#[test]
fn out_of_range_precondition() {
    let value = 15;
    let err = requires_between(arg!(value), arg!(1), arg!(10), &CheckOptions::NONE).unwrap_err();
    match &err {
        ContractViolation::ArgumentOutOfRange {
            parameter,
            actual_value,
            message,
            ..
        } => {
            assert_eq!(parameter, "value");
            assert_eq!(actual_value, "15");
            assert!(message.starts_with(
                "Precondition Between failed: value must be between 1 and 10 (inclusive)"
            ));
        }
        other => panic!("unexpected violation: {other:?}"),
    }
    assert_eq!(err.requirement_type(), Some(RequirementType::Precondition));
}

#[test]
fn postcondition_on_string_shape() {
    let value = "(555) 123-4567";
    let err = ensures_alpha_numeric_only(arg!(value), &CheckOptions::NONE).unwrap_err();
    assert!(matches!(err, ContractViolation::PostconditionFailed { .. }));
    assert_eq!(
        err.to_string(),
        "Postcondition AlphaNumericOnly failed: value may only contain alphanumeric characters"
    );
    assert_eq!(err.data().unwrap().len(), 4);
}

#[test]
fn custom_template_replaces_default() {
    let value = "hello";
    let options = CheckOptions::new().with_message("Requirement {RequirementName} failed");
    let err = requires_contains(arg!(value), arg!("xyz"), &options).unwrap_err();
    assert!(matches!(err, ContractViolation::ArgumentInvalid { .. }));
    assert_eq!(err.to_string(), "Requirement Contains failed");
}

#[test]
fn custom_template_keeps_unknown_placeholders() {
    let value = "hello";
    let options = CheckOptions::new().with_message("{ValueExpression} lacks {Target} ({Nope})");
    let err = requires_contains(arg!(value), arg!("xyz"), &options).unwrap_err();
    assert_eq!(err.to_string(), "value lacks xyz ({Nope})");
}

#[test]
fn missing_comparer_beats_equal_values() {
    let err = requires_equal_by(arg!(7), arg!(7), None, &CheckOptions::NONE).unwrap_err();
    match err {
        ContractViolation::ArgumentNull {
            parameter, data, ..
        } => {
            assert_eq!(parameter, "comparer");
            assert!(data.is_none());
        }
        other => panic!("unexpected violation: {other:?}"),
    }
}

#[test]
fn postcondition_on_sign() {
    let err = ensures_greater_than_or_equal_to_zero(arg!(-1), &CheckOptions::NONE).unwrap_err();
    assert!(matches!(err, ContractViolation::PostconditionFailed { .. }));
    let data = err.data().unwrap();
    assert_eq!(data.len(), 4);
    assert_eq!(data.get("RequirementName"), Some("GreaterThanOrEqualToZero"));
    assert_eq!(err.requirement_type(), Some(RequirementType::Postcondition));
}

#[derive(Debug, thiserror::Error)]
#[error("{requirement_type} rejected: {message}")]
struct PaymentRejected {
    requirement_type: RequirementType,
    message: String,
    context: FailureContext,
}

#[test]
fn factory_builds_the_returned_error() {
    let factory = |requirement_type: RequirementType, context: &FailureContext, message: &str| {
        Box::new(PaymentRejected {
            requirement_type,
            message: message.to_string(),
            context: context.clone(),
        }) as Box<dyn std::error::Error + Send + Sync>
    };
    let options = CheckOptions::new()
        .with_message("{Value} failed {CheckDigitAlgorithm}")
        .with_factory(&factory);

    let card = "4111111111111112";
    let err = requires_valid_check_digit(arg!(card), Some(&Luhn), &options).unwrap_err();
    assert!(err.is_custom());
    assert!(err.data().is_none());
    assert_eq!(err.to_string(), "Precondition rejected: 4111111111111112 failed Luhn");

    let rejected = err.downcast_custom::<PaymentRejected>().unwrap();
    assert_eq!(rejected.requirement_type, RequirementType::Precondition);
    assert_eq!(rejected.context.get("ValueExpression"), Some("card"));
}

#[test]
fn factory_is_skipped_by_collaborator_guards() {
    let factory = |_: RequirementType, _: &FailureContext, message: &str| {
        Box::<dyn std::error::Error + Send + Sync>::from(message.to_string())
    };
    let options = CheckOptions::new().with_message("never rendered").with_factory(&factory);
    let err = requires_valid_check_digit(arg!("0"), None, &options).unwrap_err();
    assert!(!err.is_custom());
    assert_eq!(err.to_string(), "algorithm must not be None");
}

#[test]
fn closure_comparer_drives_equality() {
    let case_blind: &dyn EqualityComparer<String> =
        &|a: &String, b: &String| a.eq_ignore_ascii_case(b);
    let user = String::from("Ada");
    let expected = "ADA".to_string();
    let user = requires_equal_by(arg!(user), arg!(expected), Some(case_blind), &CheckOptions::NONE)
        .unwrap();
    assert_eq!(user, "Ada");
}

#[test]
fn violations_propagate_with_question_mark() {
    fn withdraw(balance: i64, amount: i64) -> Result<i64, ContractViolation> {
        let amount = requires_between(arg!(amount), arg!(1), arg!(balance), &CheckOptions::NONE)?;
        ensures_greater_than_or_equal_to_zero(arg!(balance - amount), &CheckOptions::NONE)
    }

    assert_eq!(withdraw(100, 30).unwrap(), 70);
    let err = withdraw(100, 300).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Precondition Between failed: amount must be between 1 and 100 (inclusive)"
    );
    assert_eq!(err.data().unwrap().get("UpperBoundExpression"), Some("balance"));
}
