//! The one path every check takes on failure.

use covenant_kernel::{
    Arg, CheckOptions, ContractViolation, Facts, Operand, Requirement, RequirementType, report,
};

/// Pass `value` through when `holds`, else report `requirement`.
///
/// `facts` runs only on failure, so passing checks never format anything.
pub(crate) fn verify<T>(
    holds: bool,
    value: T,
    requirement: Requirement,
    requirement_type: RequirementType,
    options: &CheckOptions<'_>,
    facts: impl FnOnce(&T) -> Facts,
) -> Result<T, ContractViolation> {
    if holds {
        Ok(value)
    } else {
        Err(report(requirement, requirement_type, facts(&value), options))
    }
}

/// Operand for a string-like argument.
pub(crate) fn text<S: AsRef<str>>(arg: &Arg<S>) -> Operand {
    Operand::new(arg.value.as_ref(), arg.expression)
}
