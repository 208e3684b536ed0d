//! Property tests: passing checks return their input unchanged, and failing
//! checks always carry the full schema of their requirement.

use covenant::{
    CheckOptions, ContractViolation, Requirement, StringComparison, arg, ensures_max_length,
    requires_between, requires_equal_using, requires_greater_than_zero, requires_not_empty,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn between_passes_through_or_reports_bounds(
        value in any::<i64>(),
        a in any::<i64>(),
        b in any::<i64>(),
    ) {
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        match requires_between(arg!(value), arg!(lower), arg!(upper), &CheckOptions::NONE) {
            Ok(returned) => {
                prop_assert!(lower <= value && value <= upper);
                prop_assert_eq!(returned, value);
            }
            Err(ContractViolation::ArgumentOutOfRange { actual_value, data, .. }) => {
                prop_assert!(value < lower || value > upper);
                prop_assert_eq!(actual_value, value.to_string());
                prop_assert_eq!(data.len(), Requirement::Between.schema().key_count());
            }
            Err(other) => prop_assert!(false, "unexpected violation: {:?}", other),
        }
    }

    #[test]
    fn sign_check_agrees_with_comparison(value in any::<f64>()) {
        let result = requires_greater_than_zero(arg!(value), &CheckOptions::NONE);
        prop_assert_eq!(result.is_ok(), value > 0.0);
    }

    #[test]
    fn strings_pass_through_unchanged(text in "\\PC{1,32}") {
        let returned = requires_not_empty(arg!(text.clone()), &CheckOptions::NONE).unwrap();
        prop_assert_eq!(&returned, &text);

        let returned =
            ensures_max_length(arg!(text.as_str()), arg!(32), &CheckOptions::NONE).unwrap();
        prop_assert_eq!(returned, text.as_str());
    }

    #[test]
    fn ignore_case_equality_accepts_case_changes(text in "[a-zA-Z]{0,24}") {
        let shouted = text.to_uppercase();
        let result = requires_equal_using(
            arg!(text.as_str()),
            arg!(shouted.as_str()),
            StringComparison::OrdinalIgnoreCase,
            &CheckOptions::NONE,
        );
        prop_assert!(result.is_ok());
    }
}
