//! Violation dispatch.
//!
//! Turns the facts of one failed check into the error handed back to the
//! caller. The steps are fixed: flatten facts into a context, pick the
//! template (caller override, else registry default), render it, then either
//! invoke the caller's factory or select a built-in error from a table keyed
//! by requirement type and failure subkind.

use crate::context::FailureContext;
use crate::error::ContractViolation;
use crate::facts::Facts;
use crate::registry::registry;
use crate::requirement::{FailureSubkind, Requirement, RequirementType};
use crate::template;
use tracing::debug;

/// Error produced by a caller-supplied [`ExceptionFactory`].
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Builds the error for a failed check in place of the built-in selection.
pub trait ExceptionFactory: Send + Sync {
    fn build(
        &self,
        requirement_type: RequirementType,
        context: &FailureContext,
        message: &str,
    ) -> BoxedError;
}

impl<F> ExceptionFactory for F
where
    F: Fn(RequirementType, &FailureContext, &str) -> BoxedError + Send + Sync,
{
    fn build(
        &self,
        requirement_type: RequirementType,
        context: &FailureContext,
        message: &str,
    ) -> BoxedError {
        self(requirement_type, context, message)
    }
}

/// Per-call reporting options shared by every check.
#[derive(Clone, Copy, Default)]
pub struct CheckOptions<'a> {
    /// Replaces the registry's default template entirely.
    pub message_template: Option<&'a str>,
    /// Replaces the built-in error selection entirely.
    pub exception_factory: Option<&'a dyn ExceptionFactory>,
}

impl<'a> CheckOptions<'a> {
    pub const NONE: CheckOptions<'static> = CheckOptions {
        message_template: None,
        exception_factory: None,
    };

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_message(mut self, template: &'a str) -> Self {
        self.message_template = Some(template);
        self
    }

    pub fn with_factory(mut self, factory: &'a dyn ExceptionFactory) -> Self {
        self.exception_factory = Some(factory);
        self
    }
}

impl std::fmt::Debug for CheckOptions<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckOptions")
            .field("message_template", &self.message_template)
            .field("exception_factory", &self.exception_factory.is_some())
            .finish()
    }
}

/// Build the error for a failed check of `requirement`.
pub fn report(
    requirement: Requirement,
    requirement_type: RequirementType,
    facts: Facts,
    options: &CheckOptions<'_>,
) -> ContractViolation {
    debug_assert_eq!(
        facts.schema(),
        requirement.schema(),
        "facts do not match the schema of {}",
        requirement.id()
    );

    let parameter = facts.value_expression().to_string();
    let actual_value = facts.value().map(|value| value.text.clone());
    let context = facts.into_context(requirement, requirement_type);

    let message = match options.message_template {
        Some(custom) => template::render(custom, &context),
        None => template::render(registry().default_template(requirement), &context),
    };

    debug!(
        requirement = requirement.name(),
        requirement_type = requirement_type.as_str(),
        subkind = ?requirement.subkind(),
        custom_factory = options.exception_factory.is_some(),
        "contract violation"
    );

    if let Some(factory) = options.exception_factory {
        return ContractViolation::Custom(factory.build(requirement_type, &context, &message));
    }

    match (requirement_type, requirement.subkind()) {
        (RequirementType::Postcondition, _) => ContractViolation::PostconditionFailed {
            message,
            data: context,
        },
        (RequirementType::Precondition, FailureSubkind::NullArgument) => {
            ContractViolation::ArgumentNull {
                parameter,
                message,
                data: Some(context),
            }
        }
        (RequirementType::Precondition, FailureSubkind::OutOfRange) => {
            ContractViolation::ArgumentOutOfRange {
                parameter,
                actual_value: actual_value.unwrap_or_default(),
                message,
                data: context,
            }
        }
        (RequirementType::Precondition, FailureSubkind::Invalid) => {
            ContractViolation::ArgumentInvalid {
                parameter,
                message,
                data: context,
            }
        }
    }
}

/// Fail a collaborator guard: `parameter` was `None`.
///
/// Runs before any predicate or context exists, so it ignores the caller's
/// template and factory and always yields [`ContractViolation::ArgumentNull`].
pub fn null_collaborator(parameter: &'static str) -> ContractViolation {
    debug!(parameter, "contract collaborator missing");
    ContractViolation::ArgumentNull {
        parameter: parameter.to_string(),
        message: format!("{parameter} must not be None"),
        data: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::Operand;

    #[derive(Debug, thiserror::Error)]
    #[error("custom: {0}")]
    struct Custom(String);

    fn bounds() -> Facts {
        Facts::Bounds {
            value: Operand::new("15", "value"),
            lower_bound: Operand::new("1", "1"),
            upper_bound: Operand::new("10", "10"),
        }
    }

    #[test]
    fn precondition_out_of_range_carries_actual_value() {
        let err = report(
            Requirement::Between,
            RequirementType::Precondition,
            bounds(),
            &CheckOptions::NONE,
        );
        match &err {
            ContractViolation::ArgumentOutOfRange {
                parameter,
                actual_value,
                message,
                data,
            } => {
                assert_eq!(parameter, "value");
                assert_eq!(actual_value, "15");
                assert_eq!(
                    message,
                    "Precondition Between failed: value must be between 1 and 10 (inclusive)"
                );
                assert_eq!(data.len(), 8);
            }
            other => panic!("unexpected violation: {other:?}"),
        }
    }

    #[test]
    fn postcondition_ignores_subkind() {
        let err = report(
            Requirement::Between,
            RequirementType::Postcondition,
            bounds(),
            &CheckOptions::NONE,
        );
        assert!(matches!(err, ContractViolation::PostconditionFailed { .. }));
        assert_eq!(err.requirement_type(), Some(RequirementType::Postcondition));
        assert_eq!(err.data().and_then(|d| d.get("RequirementType")), Some("Postcondition"));
    }

    #[test]
    fn null_subkind_reports_argument_null_with_context() {
        let facts = Facts::Datatype {
            value_expression: "config",
            datatype: "core::option::Option<u32>",
        };
        let err = report(
            Requirement::NotNull,
            RequirementType::Precondition,
            facts,
            &CheckOptions::NONE,
        );
        assert!(matches!(err, ContractViolation::ArgumentNull { data: Some(_), .. }));
        assert_eq!(err.parameter(), Some("config"));
        assert_eq!(err.to_string(), "Precondition NotNull failed: config must not be None");
    }

    #[test]
    fn custom_template_replaces_default() {
        let options = CheckOptions::new().with_message("Requirement {RequirementName} failed");
        let err = report(
            Requirement::Between,
            RequirementType::Precondition,
            bounds(),
            &options,
        );
        assert_eq!(err.to_string(), "Requirement Between failed");
        assert_eq!(err.data().map(FailureContext::len), Some(8));
    }

    #[test]
    fn factory_overrides_selection() {
        let factory = |kind: RequirementType, context: &FailureContext, message: &str| {
            let name = context.get("RequirementName").unwrap_or_default();
            Box::new(Custom(format!("{kind}/{name}/{message}"))) as BoxedError
        };
        let options = CheckOptions::new()
            .with_message("{Value}")
            .with_factory(&factory);
        let err = report(
            Requirement::Between,
            RequirementType::Precondition,
            bounds(),
            &options,
        );
        assert!(err.is_custom());
        assert_eq!(err.to_string(), "custom: Precondition/Between/15");
        assert!(err.data().is_none());
        let custom = err.downcast_custom::<Custom>().unwrap();
        assert_eq!(custom.0, "Precondition/Between/15");
    }

    #[test]
    fn collaborator_guard_has_no_context() {
        let err = null_collaborator("comparer");
        assert_eq!(err.parameter(), Some("comparer"));
        assert!(err.data().is_none());
        assert_eq!(err.to_string(), "comparer must not be None");
    }
}
