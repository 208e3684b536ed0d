//! Failure contexts.
//!
//! A failure context is the ordered bag of diagnostic facts attached to a
//! violation. Each requirement variant reports a fixed key set (see
//! [`FactSchema`](crate::requirement::FactSchema)); the context preserves that
//! schema's key order so serialized reports are stable.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Name of one diagnostic fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FactKey {
    RequirementType,
    RequirementName,
    Value,
    ValueExpression,
    Target,
    TargetExpression,
    LowerBound,
    LowerBoundExpression,
    UpperBound,
    UpperBoundExpression,
    Epsilon,
    EpsilonExpression,
    MaxLength,
    MaxLengthExpression,
    MinLength,
    MinLengthExpression,
    StringComparison,
    Regex,
    RegexOptions,
    CheckDigitAlgorithm,
    ValueDatatype,
}

impl FactKey {
    pub const ALL: &'static [FactKey] = &[
        Self::RequirementType,
        Self::RequirementName,
        Self::Value,
        Self::ValueExpression,
        Self::Target,
        Self::TargetExpression,
        Self::LowerBound,
        Self::LowerBoundExpression,
        Self::UpperBound,
        Self::UpperBoundExpression,
        Self::Epsilon,
        Self::EpsilonExpression,
        Self::MaxLength,
        Self::MaxLengthExpression,
        Self::MinLength,
        Self::MinLengthExpression,
        Self::StringComparison,
        Self::Regex,
        Self::RegexOptions,
        Self::CheckDigitAlgorithm,
        Self::ValueDatatype,
    ];

    /// The key as it appears in templates and serialized reports.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RequirementType => "RequirementType",
            Self::RequirementName => "RequirementName",
            Self::Value => "Value",
            Self::ValueExpression => "ValueExpression",
            Self::Target => "Target",
            Self::TargetExpression => "TargetExpression",
            Self::LowerBound => "LowerBound",
            Self::LowerBoundExpression => "LowerBoundExpression",
            Self::UpperBound => "UpperBound",
            Self::UpperBoundExpression => "UpperBoundExpression",
            Self::Epsilon => "Epsilon",
            Self::EpsilonExpression => "EpsilonExpression",
            Self::MaxLength => "MaxLength",
            Self::MaxLengthExpression => "MaxLengthExpression",
            Self::MinLength => "MinLength",
            Self::MinLengthExpression => "MinLengthExpression",
            Self::StringComparison => "StringComparison",
            Self::Regex => "Regex",
            Self::RegexOptions => "RegexOptions",
            Self::CheckDigitAlgorithm => "CheckDigitAlgorithm",
            Self::ValueDatatype => "ValueDatatype",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == name)
    }
}

impl std::fmt::Display for FactKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FactKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Ordered mapping from fact keys to their textual values.
///
/// Read-only outside this crate: exception factories and callers inspect a
/// context but never change it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureContext {
    entries: Vec<(FactKey, String)>,
}

impl FailureContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a fact, keeping the original position on replace.
    pub(crate) fn insert(&mut self, key: FactKey, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a fact by its textual key name.
    pub fn get(&self, name: &str) -> Option<&str> {
        FactKey::parse(name).and_then(|key| self.fact(key))
    }

    /// Look up a fact by key.
    pub fn fact(&self, key: FactKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| *existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: FactKey) -> bool {
        self.fact(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = FactKey> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FactKey, &str)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// The context as a JSON object.
    ///
    /// Use the `Serialize` impl instead when schema order must survive.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|(key, value)| {
                (
                    key.as_str().to_string(),
                    serde_json::Value::String(value.clone()),
                )
            })
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

impl Serialize for FailureContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key.as_str(), value)?;
        }
        map.end()
    }
}
