//! Comparers and string comparison modes.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// An ordering used in place of `PartialOrd` by the `*_by` range checks.
pub trait Comparer<T: ?Sized> {
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// An equivalence used in place of `PartialEq` by the `*_by` equality checks.
pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, left: &T, right: &T) -> bool;
}

impl<T: ?Sized, F> EqualityComparer<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn equals(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

/// How two strings are compared.
///
/// `Canonical` modes compare NFC-normalized text, so precomposed and
/// decomposed forms of the same character are equal. `IgnoreCase` modes
/// apply full Unicode lowercase mapping to both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StringComparison {
    #[default]
    Ordinal,
    OrdinalIgnoreCase,
    Canonical,
    CanonicalIgnoreCase,
}

impl StringComparison {
    pub const ALL: [StringComparison; 4] = [
        Self::Ordinal,
        Self::OrdinalIgnoreCase,
        Self::Canonical,
        Self::CanonicalIgnoreCase,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ordinal => "Ordinal",
            Self::OrdinalIgnoreCase => "OrdinalIgnoreCase",
            Self::Canonical => "Canonical",
            Self::CanonicalIgnoreCase => "CanonicalIgnoreCase",
        }
    }

    fn fold<'a>(self, text: &'a str) -> Cow<'a, str> {
        match self {
            Self::Ordinal => Cow::Borrowed(text),
            Self::OrdinalIgnoreCase => Cow::Owned(text.to_lowercase()),
            Self::Canonical => Cow::Owned(text.nfc().collect()),
            Self::CanonicalIgnoreCase => Cow::Owned(text.nfc().collect::<String>().to_lowercase()),
        }
    }

    pub fn equals(self, left: &str, right: &str) -> bool {
        self.fold(left) == self.fold(right)
    }

    pub fn compare(self, left: &str, right: &str) -> Ordering {
        self.fold(left).cmp(&self.fold(right))
    }

    pub fn starts_with(self, text: &str, prefix: &str) -> bool {
        self.fold(text).starts_with(self.fold(prefix).as_ref())
    }

    pub fn ends_with(self, text: &str, suffix: &str) -> bool {
        self.fold(text).ends_with(self.fold(suffix).as_ref())
    }

    pub fn contains(self, text: &str, needle: &str) -> bool {
        self.fold(text).contains(self.fold(needle).as_ref())
    }
}

impl fmt::Display for StringComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EqualityComparer<str> for StringComparison {
    fn equals(&self, left: &str, right: &str) -> bool {
        StringComparison::equals(*self, left, right)
    }
}

impl Comparer<str> for StringComparison {
    fn compare(&self, left: &str, right: &str) -> Ordering {
        StringComparison::compare(*self, left, right)
    }
}
