//! Integration test: process-wide template overrides.
//!
//! The registry freezes on first read, so this file holds a single test that
//! installs overrides before anything else touches the registry.

use covenant_kernel::{
    CheckOptions, Facts, Operand, RegistryError, Requirement, RequirementType, TemplateOverrides,
    install_overrides, registry, report,
};

#[test]
fn installed_overrides_drive_default_messages_until_frozen() {
    let overrides = TemplateOverrides::from_toml_str(
        r#"
        [templates]
        between = "{ValueExpression} liegt nicht zwischen {LowerBound} und {UpperBound}"
        "#,
    )
    .unwrap();
    install_overrides(&overrides).unwrap();

    let facts = Facts::Bounds {
        value: Operand::new("15", "anzahl"),
        lower_bound: Operand::new("1", "1"),
        upper_bound: Operand::new("10", "10"),
    };
    let err = report(
        Requirement::Between,
        RequirementType::Precondition,
        facts,
        &CheckOptions::NONE,
    );
    assert_eq!(err.to_string(), "anzahl liegt nicht zwischen 1 und 10");

    // Untouched variants keep their built-in template.
    assert!(
        registry()
            .default_template(Requirement::Equal)
            .starts_with("{RequirementType} {RequirementName} failed: ")
    );

    let again = install_overrides(&TemplateOverrides::default()).unwrap_err();
    assert!(matches!(again, RegistryError::AlreadyInitialized));
}
