//! The `ValidCheckDigit` requirement.

use crate::check::{text, verify};
use covenant_digits::CheckDigitAlgorithm;
use covenant_kernel::{
    Arg, CheckOptions, ContractViolation, Facts, Requirement, RequirementType, null_collaborator,
};

use RequirementType::{Postcondition, Precondition};

fn valid_check_digit<S: AsRef<str>>(
    requirement_type: RequirementType,
    value: Arg<S>,
    algorithm: Option<&dyn CheckDigitAlgorithm>,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    let algorithm = algorithm.ok_or_else(|| null_collaborator("algorithm"))?;
    let holds = algorithm.is_valid(value.value.as_ref());
    verify(holds, value, Requirement::ValidCheckDigit, requirement_type, options, |value| {
        Facts::CheckDigit {
            value: text(value),
            algorithm: algorithm.name().to_string(),
        }
    })
    .map(Arg::into_value)
}

/// Require `value` to end in the check digit `algorithm` computes for it.
pub fn requires_valid_check_digit<S: AsRef<str>>(
    value: Arg<S>,
    algorithm: Option<&dyn CheckDigitAlgorithm>,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    valid_check_digit(Precondition, value, algorithm, options)
}

pub fn ensures_valid_check_digit<S: AsRef<str>>(
    value: Arg<S>,
    algorithm: Option<&dyn CheckDigitAlgorithm>,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    valid_check_digit(Postcondition, value, algorithm, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_digits::{Isbn10, Luhn};
    use covenant_kernel::arg;

    #[test]
    fn valid_numbers_pass_through() {
        let card = "4111111111111111";
        assert_eq!(
            requires_valid_check_digit(arg!(card), Some(&Luhn), &CheckOptions::NONE).unwrap(),
            card
        );
        let isbn = "0-306-40615-2";
        assert!(ensures_valid_check_digit(arg!(isbn), Some(&Isbn10), &CheckOptions::NONE).is_ok());
    }

    #[test]
    fn invalid_number_names_the_algorithm() {
        let isbn = "0306406153";
        let err =
            requires_valid_check_digit(arg!(isbn), Some(&Isbn10), &CheckOptions::NONE).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Precondition ValidCheckDigit failed: isbn must have a valid ISBN-10 check digit"
        );
        assert_eq!(err.data().unwrap().len(), 5);
    }

    #[test]
    fn missing_algorithm_is_a_null_guard() {
        let err =
            requires_valid_check_digit(arg!("79927398713"), None, &CheckOptions::NONE).unwrap_err();
        assert_eq!(err.parameter(), Some("algorithm"));
        assert!(err.data().is_none());
    }
}
