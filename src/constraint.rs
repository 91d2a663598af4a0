//! Assertion-facing wrapper around the matcher.
//!
//! [`ShapeConstraint`] pairs the boolean predicate with the text written when
//! it fails, and [`assert_shape!`](crate::assert_shape!) panics with that text.

use std::fmt;

use serde_json::Value;

use crate::config::MatchConfig;
use crate::matcher::{evaluate, MatchResult};
use crate::outcome::{FailureReport, RenderedFailure};
use crate::render::{DefaultRenderer, ValueRenderer};
use crate::shape::Shape;

#[derive(Debug, Clone)]
pub struct ShapeConstraint {
    expected: Shape,
    config: MatchConfig,
}

impl ShapeConstraint {
    pub fn new(expected: Shape) -> Self {
        Self::with_config(expected, MatchConfig::default())
    }

    pub fn with_config(expected: Shape, config: MatchConfig) -> Self {
        Self { expected, config }
    }

    /// A one-line description of what this constraint accepts.
    pub fn describe(&self) -> String {
        format!("object matching {}", self.expected)
    }

    pub fn apply_to(&self, actual: &Value) -> ConstraintResult {
        ConstraintResult {
            result: evaluate(&self.expected, actual, &self.config),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConstraintResult {
    result: MatchResult,
}

impl ConstraintResult {
    pub fn is_success(&self) -> bool {
        self.result.is_success()
    }

    pub fn match_result(&self) -> &MatchResult {
        &self.result
    }

    /// The rendered failure, or `None` when the constraint passed.
    pub fn failure_message(&self) -> Option<FailureMessage> {
        self.failure_message_with(&DefaultRenderer)
    }

    pub fn failure_message_with(&self, renderer: &dyn ValueRenderer) -> Option<FailureMessage> {
        let report: FailureReport = self.result.failure().ok()?;
        Some(FailureMessage(report.render(renderer)))
    }

    /// Writes the failure message, or nothing when the constraint passed.
    pub fn write_message(&self, writer: &mut impl fmt::Write) -> fmt::Result {
        match self.failure_message() {
            Some(message) => write!(writer, "{message}"),
            None => Ok(()),
        }
    }
}

/// The text shown for a failed structural match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureMessage(pub RenderedFailure);

impl fmt::Display for FailureMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RenderedFailure {
            path,
            expected,
            actual,
        } = &self.0;

        if !path.is_empty() {
            writeln!(f, "Path: {path}")?;
        }
        writeln!(f, "Expected: {expected}")?;
        write!(f, "But was:  {actual}")
    }
}

/// Asserts that a serializable value matches a shape, panicking with the
/// offending path when it does not.
///
/// ```
/// use libshapecheck::{assert_shape, shape};
///
/// let actual = serde_json::json!({ "A": "a", "B": 1 });
/// assert_shape!(actual, shape!({ "A": "a" }));
/// ```
#[macro_export]
macro_rules! assert_shape {
    ($actual: expr, $expected: expr $(,)?) => {
        $crate::assert_shape!($actual, $expected, $crate::MatchConfig::default())
    };
    ($actual: expr, $expected: expr, $config: expr $(,)?) => {{
        let actual = $crate::actual_of(&$actual).expect("actual value could not be serialized");
        let constraint = $crate::ShapeConstraint::with_config($expected, $config);
        let result = constraint.apply_to(&actual);
        if let Some(message) = result.failure_message() {
            panic!(
                "assertion failed: value does not match shape\n{}\nShape: {}",
                message,
                constraint.describe()
            );
        }
    }};
}
