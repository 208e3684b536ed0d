//! Requirement registry.
//!
//! One immutable descriptor per requirement variant: canonical name, default
//! message template, fact schema, and failure subkind. The registry is built
//! once per process, either lazily from the built-in table on first lookup or
//! explicitly through [`install_overrides`] before any check runs. After
//! that it is read-only and safe to share across threads.

use crate::config::TemplateOverrides;
use crate::error::RegistryError;
use crate::requirement::{FactSchema, FailureSubkind, Requirement};
use crate::template;
use serde::Serialize;
use serde_json::{Value, json};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::warn;

/// Prefix shared by every built-in template.
pub const DEFAULT_TEMPLATE_PREFIX: &str = "{RequirementType} {RequirementName} failed: ";

macro_rules! template {
    ($clause:literal) => {
        concat!("{RequirementType} {RequirementName} failed: ", $clause)
    };
}

/// Built-in default template per requirement variant.
pub const DEFAULT_TEMPLATES: &[(Requirement, &str)] = &[
    (
        Requirement::Between,
        template!("{ValueExpression} must be between {LowerBound} and {UpperBound} (inclusive)"),
    ),
    (
        Requirement::GreaterThan,
        template!("{ValueExpression} must be greater than {Target}"),
    ),
    (
        Requirement::GreaterThanOrEqual,
        template!("{ValueExpression} must be greater than or equal to {Target}"),
    ),
    (
        Requirement::LessThan,
        template!("{ValueExpression} must be less than {Target}"),
    ),
    (
        Requirement::LessThanOrEqual,
        template!("{ValueExpression} must be less than or equal to {Target}"),
    ),
    (
        Requirement::GreaterThanZero,
        template!("{ValueExpression} must be greater than zero"),
    ),
    (
        Requirement::GreaterThanOrEqualToZero,
        template!("{ValueExpression} must be greater than or equal to zero"),
    ),
    (
        Requirement::LessThanZero,
        template!("{ValueExpression} must be less than zero"),
    ),
    (
        Requirement::LessThanOrEqualToZero,
        template!("{ValueExpression} must be less than or equal to zero"),
    ),
    (
        Requirement::NotZero,
        template!("{ValueExpression} must not be zero"),
    ),
    (
        Requirement::Equal,
        template!("{ValueExpression} must equal {Target}"),
    ),
    (
        Requirement::EqualWithComparison,
        template!("{ValueExpression} must equal {Target} using {StringComparison} comparison"),
    ),
    (
        Requirement::NotEqual,
        template!("{ValueExpression} must not equal {Target}"),
    ),
    (
        Requirement::NotEqualWithComparison,
        template!("{ValueExpression} must not equal {Target} using {StringComparison} comparison"),
    ),
    (
        Requirement::ApproximatelyEqual,
        template!("{ValueExpression} must be approximately equal to {Target} within {Epsilon}"),
    ),
    (
        Requirement::NotApproximatelyEqual,
        template!(
            "{ValueExpression} must not be approximately equal to {Target} within {Epsilon}"
        ),
    ),
    (
        Requirement::Finite,
        template!("{ValueExpression} must be a finite number"),
    ),
    (
        Requirement::NotNaN,
        template!("{ValueExpression} must not be NaN"),
    ),
    (
        Requirement::NotNull,
        template!("{ValueExpression} must not be None"),
    ),
    (
        Requirement::NotDefault,
        template!("{ValueExpression} must not be the default value of {ValueDatatype}"),
    ),
    (Requirement::True, template!("{ValueExpression} must be true")),
    (Requirement::False, template!("{ValueExpression} must be false")),
    (
        Requirement::NotEmpty,
        template!("{ValueExpression} must not be empty"),
    ),
    (
        Requirement::NotWhiteSpace,
        template!(
            "{ValueExpression} must not be empty or consist only of white-space characters"
        ),
    ),
    (
        Requirement::AlphaNumericOnly,
        template!("{ValueExpression} may only contain alphanumeric characters"),
    ),
    (
        Requirement::AlphabeticOnly,
        template!("{ValueExpression} may only contain alphabetic characters"),
    ),
    (
        Requirement::DigitsOnly,
        template!("{ValueExpression} may only contain decimal digits"),
    ),
    (
        Requirement::StartsWith,
        template!("{ValueExpression} must start with {Target}"),
    ),
    (
        Requirement::StartsWithComparison,
        template!("{ValueExpression} must start with {Target} using {StringComparison} comparison"),
    ),
    (
        Requirement::EndsWith,
        template!("{ValueExpression} must end with {Target}"),
    ),
    (
        Requirement::EndsWithComparison,
        template!("{ValueExpression} must end with {Target} using {StringComparison} comparison"),
    ),
    (
        Requirement::Contains,
        template!("{ValueExpression} must contain {Target}"),
    ),
    (
        Requirement::ContainsComparison,
        template!("{ValueExpression} must contain {Target} using {StringComparison} comparison"),
    ),
    (
        Requirement::DoesNotContain,
        template!("{ValueExpression} must not contain {Target}"),
    ),
    (
        Requirement::DoesNotContainComparison,
        template!(
            "{ValueExpression} must not contain {Target} using {StringComparison} comparison"
        ),
    ),
    (
        Requirement::MaxLength,
        template!("{ValueExpression} must have a length of at most {MaxLength}"),
    ),
    (
        Requirement::MinLength,
        template!("{ValueExpression} must have a length of at least {MinLength}"),
    ),
    (
        Requirement::LengthBetween,
        template!(
            "{ValueExpression} must have a length between {MinLength} and {MaxLength} (inclusive)"
        ),
    ),
    (
        Requirement::Matches,
        template!("{ValueExpression} must match the regular expression {Regex}"),
    ),
    (
        Requirement::DoesNotMatch,
        template!("{ValueExpression} must not match the regular expression {Regex}"),
    ),
    (
        Requirement::ValidCheckDigit,
        template!("{ValueExpression} must have a valid {CheckDigitAlgorithm} check digit"),
    ),
];

/// Static metadata for one requirement variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementDescriptor {
    pub requirement: Requirement,
    pub name: &'static str,
    pub schema: FactSchema,
    pub key_count: usize,
    pub subkind: FailureSubkind,
    pub template: Cow<'static, str>,
}

/// The process-wide descriptor table.
#[derive(Debug, Clone)]
pub struct Registry {
    descriptors: BTreeMap<Requirement, RequirementDescriptor>,
}

impl Registry {
    /// The registry built from [`DEFAULT_TEMPLATES`] alone.
    pub fn builtin() -> Self {
        let descriptors = Requirement::ALL
            .iter()
            .map(|requirement| {
                let template = builtin_template(*requirement).unwrap_or(DEFAULT_TEMPLATE_PREFIX);
                (*requirement, descriptor(*requirement, Cow::Borrowed(template)))
            })
            .collect();
        Self { descriptors }
    }

    /// The built-in registry with `overrides` applied on top.
    pub fn with_overrides(overrides: &TemplateOverrides) -> Result<Self, RegistryError> {
        let mut registry = Self::builtin();
        for (id, template) in &overrides.templates {
            let requirement = id
                .parse::<Requirement>()
                .map_err(|_| RegistryError::UnknownRequirement(id.clone()))?;

            let schema_keys = requirement.schema().keys();
            let outside_schema: Vec<&str> = template::placeholders(template)
                .into_iter()
                .filter(|name| !schema_keys.iter().any(|key| key.as_str() == *name))
                .collect();
            if !outside_schema.is_empty() {
                warn!(
                    requirement = requirement.id(),
                    placeholders = ?outside_schema,
                    "template override references facts outside the requirement schema"
                );
            }

            registry.descriptors.insert(
                requirement,
                descriptor(requirement, Cow::Owned(template.clone())),
            );
        }
        Ok(registry)
    }

    pub fn descriptor(&self, requirement: Requirement) -> &RequirementDescriptor {
        // Every variant is inserted by `builtin`, and overrides only replace.
        &self.descriptors[&requirement]
    }

    pub fn default_template(&self, requirement: Requirement) -> &str {
        &self.descriptor(requirement).template
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &RequirementDescriptor> {
        self.descriptors.values()
    }

    /// Deterministic JSON view of the registry.
    pub fn to_json(&self) -> Value {
        json!({
            "schema": 1,
            "registryKind": "covenant.requirement_registry.v1",
            "requirements": self.descriptors().collect::<Vec<_>>(),
        })
    }
}

fn descriptor(requirement: Requirement, template: Cow<'static, str>) -> RequirementDescriptor {
    RequirementDescriptor {
        requirement,
        name: requirement.name(),
        schema: requirement.schema(),
        key_count: requirement.schema().key_count(),
        subkind: requirement.subkind(),
        template,
    }
}

pub fn builtin_template(requirement: Requirement) -> Option<&'static str> {
    DEFAULT_TEMPLATES
        .iter()
        .find_map(|(candidate, template)| (*candidate == requirement).then_some(*template))
}

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, built from the defaults on first use.
pub fn registry() -> &'static Registry {
    REGISTRY.get_or_init(Registry::builtin)
}

/// Install template overrides for the whole process.
///
/// Must run before the first requirement check (or any other registry read);
/// afterwards the registry is frozen and this returns
/// [`RegistryError::AlreadyInitialized`].
pub fn install_overrides(overrides: &TemplateOverrides) -> Result<(), RegistryError> {
    let registry = Registry::with_overrides(overrides)?;
    REGISTRY
        .set(registry)
        .map_err(|_| RegistryError::AlreadyInitialized)
}

pub fn registry_json() -> Value {
    registry().to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn every_variant_has_exactly_one_builtin_template() {
        let mut seen = BTreeSet::new();
        for (requirement, _) in DEFAULT_TEMPLATES {
            assert!(seen.insert(*requirement), "duplicate template: {}", requirement.id());
        }
        for requirement in Requirement::ALL {
            assert!(
                builtin_template(*requirement).is_some(),
                "missing template: {}",
                requirement.id()
            );
        }
    }

    #[test]
    fn builtin_templates_share_prefix_and_stay_in_schema() {
        for (requirement, template) in DEFAULT_TEMPLATES {
            assert!(template.starts_with(DEFAULT_TEMPLATE_PREFIX));
            let keys = requirement.schema().keys();
            for name in template::placeholders(template) {
                assert!(
                    keys.iter().any(|key| key.as_str() == name),
                    "{} references {name} outside its schema",
                    requirement.id()
                );
            }
        }
    }

    #[test]
    fn overrides_replace_only_named_variants() {
        let overrides = TemplateOverrides::from_toml_str(
            r#"
            [templates]
            between = "{Value} out of [{LowerBound}, {UpperBound}]"
            "#,
        )
        .unwrap();
        let registry = Registry::with_overrides(&overrides).unwrap();
        assert_eq!(
            registry.default_template(Requirement::Between),
            "{Value} out of [{LowerBound}, {UpperBound}]"
        );
        assert_eq!(
            registry.default_template(Requirement::Equal),
            builtin_template(Requirement::Equal).unwrap()
        );
    }

    #[test]
    fn overrides_reject_unknown_requirements() {
        let overrides = TemplateOverrides::from_toml_str(
            r#"
            [templates]
            betwixt = "nope"
            "#,
        )
        .unwrap();
        let err = Registry::with_overrides(&overrides).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownRequirement(id) if id == "betwixt"));
    }

    #[test]
    fn registry_json_surface_is_deterministic() {
        let first = Registry::builtin().to_json();
        let second = Registry::builtin().to_json();
        assert_eq!(first, second);
        assert_eq!(
            first.get("registryKind").and_then(Value::as_str),
            Some("covenant.requirement_registry.v1")
        );
        let rows = first["requirements"].as_array().unwrap();
        assert_eq!(rows.len(), Requirement::ALL.len());
        let between = rows
            .iter()
            .find(|row| row["requirement"] == "between")
            .unwrap();
        assert_eq!(between["keyCount"], 8);
        assert_eq!(between["subkind"], "out_of_range");
    }
}
