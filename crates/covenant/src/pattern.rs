//! Regular-expression requirements: `Matches` and `DoesNotMatch`.

use crate::check::{text, verify};
use covenant_kernel::{
    Arg, CheckOptions, ContractViolation, Facts, Requirement, RequirementType, null_collaborator,
};
use regex::{Regex, RegexBuilder};
use std::fmt;

use RequirementType::{Postcondition, Precondition};

/// Flags a [`Pattern`] was compiled with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RegexOptions {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
}

impl RegexOptions {
    pub const NONE: RegexOptions = RegexOptions {
        case_insensitive: false,
        multi_line: false,
        dot_matches_new_line: false,
        ignore_whitespace: false,
    };

    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    pub fn multi_line(mut self) -> Self {
        self.multi_line = true;
        self
    }

    pub fn dot_matches_new_line(mut self) -> Self {
        self.dot_matches_new_line = true;
        self
    }

    pub fn ignore_whitespace(mut self) -> Self {
        self.ignore_whitespace = true;
        self
    }

    fn flag_names(self) -> Vec<&'static str> {
        [
            (self.case_insensitive, "CaseInsensitive"),
            (self.multi_line, "MultiLine"),
            (self.dot_matches_new_line, "DotMatchesNewLine"),
            (self.ignore_whitespace, "IgnoreWhitespace"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

/// `None`, or the set flags joined with `, `.
impl fmt::Display for RegexOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.flag_names();
        if names.is_empty() {
            f.write_str("None")
        } else {
            f.write_str(&names.join(", "))
        }
    }
}

/// A compiled regular expression that remembers its source and flags for
/// failure reports.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    options: RegexOptions,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Self::with_options(source, RegexOptions::NONE)
    }

    pub fn with_options(source: &str, options: RegexOptions) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(options.case_insensitive)
            .multi_line(options.multi_line)
            .dot_matches_new_line(options.dot_matches_new_line)
            .ignore_whitespace(options.ignore_whitespace)
            .build()?;
        Ok(Self { regex, options })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn options(&self) -> RegexOptions {
        self.options
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

fn pattern_check<S: AsRef<str>>(
    requirement: Requirement,
    requirement_type: RequirementType,
    expect_match: bool,
    value: Arg<S>,
    pattern: Option<&Pattern>,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    let pattern = pattern.ok_or_else(|| null_collaborator("pattern"))?;
    let holds = pattern.is_match(value.value.as_ref()) == expect_match;
    verify(holds, value, requirement, requirement_type, options, |value| {
        Facts::Pattern {
            value: text(value),
            regex: pattern.as_str().to_string(),
            options: pattern.options().to_string(),
        }
    })
    .map(Arg::into_value)
}

/// Require a match anywhere in `value`; anchor the pattern for a full match.
pub fn requires_matches<S: AsRef<str>>(
    value: Arg<S>,
    pattern: Option<&Pattern>,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    pattern_check(Requirement::Matches, Precondition, true, value, pattern, options)
}

pub fn ensures_matches<S: AsRef<str>>(
    value: Arg<S>,
    pattern: Option<&Pattern>,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    pattern_check(Requirement::Matches, Postcondition, true, value, pattern, options)
}

pub fn requires_does_not_match<S: AsRef<str>>(
    value: Arg<S>,
    pattern: Option<&Pattern>,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    pattern_check(Requirement::DoesNotMatch, Precondition, false, value, pattern, options)
}

pub fn ensures_does_not_match<S: AsRef<str>>(
    value: Arg<S>,
    pattern: Option<&Pattern>,
    options: &CheckOptions<'_>,
) -> Result<S, ContractViolation> {
    pattern_check(Requirement::DoesNotMatch, Postcondition, false, value, pattern, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_kernel::arg;

    #[test]
    fn options_display() {
        assert_eq!(RegexOptions::NONE.to_string(), "None");
        assert_eq!(
            RegexOptions::default().case_insensitive().multi_line().to_string(),
            "CaseInsensitive, MultiLine"
        );
    }

    #[test]
    fn every_flag_reaches_the_report() {
        let options = RegexOptions::NONE
            .case_insensitive()
            .multi_line()
            .dot_matches_new_line()
            .ignore_whitespace();
        let pattern = Pattern::with_options(r"^ a . b $", options).unwrap();
        assert_eq!(pattern.options(), options);
        assert!(pattern.is_match("x\nA\nB"));

        let err = ensures_does_not_match(arg!("A\nB"), Some(&pattern), &CheckOptions::NONE)
            .unwrap_err();
        assert_eq!(
            err.data().unwrap().get("RegexOptions"),
            Some("CaseInsensitive, MultiLine, DotMatchesNewLine, IgnoreWhitespace")
        );
    }

    #[test]
    fn matches_reports_source_and_flags() {
        let options = RegexOptions::default().case_insensitive();
        let pattern = Pattern::with_options(r"^[a-z]+$", options).unwrap();
        assert!(requires_matches(arg!("Hello"), Some(&pattern), &CheckOptions::NONE).is_ok());

        let err =
            requires_matches(arg!("Hello!"), Some(&pattern), &CheckOptions::NONE).unwrap_err();
        let data = err.data().unwrap();
        assert_eq!(data.get("Regex"), Some("^[a-z]+$"));
        assert_eq!(data.get("RegexOptions"), Some("CaseInsensitive"));
        assert_eq!(data.len(), 6);
    }

    #[test]
    fn does_not_match() {
        let secret = Pattern::new(r"(?i)password").unwrap();
        let line = "user=ada";
        assert_eq!(
            requires_does_not_match(arg!(line), Some(&secret), &CheckOptions::NONE).unwrap(),
            line
        );
        let err = ensures_does_not_match(arg!("Password=1"), Some(&secret), &CheckOptions::NONE)
            .unwrap_err();
        assert!(matches!(err, ContractViolation::PostconditionFailed { .. }));
    }

    #[test]
    fn missing_pattern_is_a_null_guard() {
        let err = ensures_matches(arg!("x"), None, &CheckOptions::NONE).unwrap_err();
        assert!(matches!(
            err,
            ContractViolation::ArgumentNull { ref parameter, .. } if parameter == "pattern"
        ));
    }
}
