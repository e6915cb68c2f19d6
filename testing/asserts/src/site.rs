use std::panic::Location;

/// Placeholder used when the expression of the asserted result is unknown.
pub const UNKNOWN_EXPRESSION: &str = "<result>";

/// Where an assertion was made, only used to build failure messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallSite<'a> {
    /// The source text of the asserted result expression.
    pub expression: &'a str,
    /// The source line of the assertion, `0` when unknown.
    pub line: u32,
}

impl<'a> CallSite<'a> {
    pub const fn new(expression: &'a str, line: u32) -> Self {
        Self { expression, line }
    }

    /// The location of the caller, with an unknown expression.
    #[track_caller]
    pub fn caller() -> Self {
        Self { expression: UNKNOWN_EXPRESSION, line: Location::caller().line() }
    }

    pub const fn with_expression(self, expression: &'a str) -> Self {
        Self { expression, ..self }
    }
}

impl Default for CallSite<'_> {
    fn default() -> Self {
        Self { expression: UNKNOWN_EXPRESSION, line: 0 }
    }
}

/// Builds a [`CallSite`] out of the given expression and the current line.
///
/// ```ignore
/// use verdict_asserts::{RecordingSink, ResultAsserts, call_site};
///
/// let sink = RecordingSink::new();
/// let result = verdict_core::result::BoolResult::from_value(true);
/// sink.assert_ok(&result, call_site!(result));
/// ```
#[macro_export]
macro_rules! call_site {
    ($result:expr) => {
        $crate::CallSite::new(stringify!($result), line!())
    };
}
