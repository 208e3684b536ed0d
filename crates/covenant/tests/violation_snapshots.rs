//! Snapshot tests: rendered messages and serialized failure contexts.

use covenant::{
    CheckOptions, Epsilon, Pattern, RegexOptions, StringComparison, arg,
    ensures_not_approximately_equal, requires_length_between, requires_matches,
    requires_starts_with_using,
};

#[test]
fn length_bounds_context() {
    let username = "al";
    let err = requires_length_between(arg!(username), arg!(3), arg!(16), &CheckOptions::NONE)
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"Precondition LengthBetween failed: username must have a length between 3 and 16 (inclusive)"
    );
    insta::assert_json_snapshot!(err.data().unwrap(), @r#"
    {
      "RequirementType": "Precondition",
      "RequirementName": "LengthBetween",
      "Value": "al",
      "ValueExpression": "username",
      "MinLength": "3",
      "MinLengthExpression": "3",
      "MaxLength": "16",
      "MaxLengthExpression": "16"
    }
    "#);
}

#[test]
fn comparison_context() {
    let header = "content-type: text/html";
    let err = requires_starts_with_using(
        arg!(header),
        arg!("Accept"),
        StringComparison::OrdinalIgnoreCase,
        &CheckOptions::NONE,
    )
    .unwrap_err();
    insta::assert_json_snapshot!(err.data().unwrap(), @r#"
    {
      "RequirementType": "Precondition",
      "RequirementName": "StartsWith",
      "Value": "content-type: text/html",
      "ValueExpression": "header",
      "Target": "Accept",
      "TargetExpression": "\"Accept\"",
      "StringComparison": "OrdinalIgnoreCase"
    }
    "#);
}

#[test]
fn epsilon_message() {
    let reading = 0.5f64;
    let err = ensures_not_approximately_equal(
        arg!(reading),
        arg!(0.5),
        arg!(Epsilon::Absolute(1e-9)),
        &CheckOptions::NONE,
    )
    .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"Postcondition NotApproximatelyEqual failed: reading must not be approximately equal to 0.5 within 0.000000001"
    );
}

#[test]
fn pattern_message() {
    let pattern = Pattern::with_options(r"^\d{3}-\d{4}$", RegexOptions::default().multi_line())
        .unwrap();
    let phone = "5551234";
    let err = requires_matches(arg!(phone), Some(&pattern), &CheckOptions::NONE).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @r"Precondition Matches failed: phone must match the regular expression ^\d{3}-\d{4}$"
    );
    assert_eq!(err.data().unwrap().get("RegexOptions"), Some("MultiLine"));
}
