//! Caller-expression capture.
//!
//! Every diagnostic-relevant argument travels with the source text that
//! produced it. [`arg!`](crate::arg) captures that text at compile time with
//! `stringify!`; nothing is evaluated twice and no runtime reflection happens.

/// A checked value or operand together with its source expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arg<T> {
    pub value: T,
    pub expression: &'static str,
}

impl<T> Arg<T> {
    pub const fn new(value: T, expression: &'static str) -> Self {
        Self { value, expression }
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Apply `f` to the value, keeping the expression.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Arg<U> {
        Arg {
            value: f(self.value),
            expression: self.expression,
        }
    }
}

/// Wrap an expression in an [`Arg`], capturing its source text.
///
/// ```
/// use covenant_kernel::arg;
///
/// let limit = 10;
/// let captured = arg!(limit * 2);
/// assert_eq!(captured.value, 20);
/// assert_eq!(captured.expression, "limit * 2");
/// ```
#[macro_export]
macro_rules! arg {
    ($value:expr) => {
        $crate::Arg::new($value, stringify!($value))
    };
}
