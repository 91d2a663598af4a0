//! Per-path comparison records and the rendered failure built from them.
//!
//! The markers below are written in place of a value when one side has
//! nothing at the path.

use serde::Serialize;
use serde_json::Value;

use crate::path::MemberPath;
use crate::render::ValueRenderer;

pub const MEMBER_MISSING: &str = "member was missing";
pub const ELEMENT_MISSING: &str = "element was missing";
pub const NOTHING: &str = "nothing";

/// What the template asked for at a path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ExpectedValue {
    Value(Value),
    /// The actual side had an element the template did not ask for.
    Nothing,
}

/// What was found at a path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum ActualValue {
    Value(Value),
    MemberMissing,
    ElementMissing,
}

impl ExpectedValue {
    pub fn render(&self, renderer: &dyn ValueRenderer) -> String {
        match self {
            ExpectedValue::Value(value) => renderer.render(value),
            ExpectedValue::Nothing => NOTHING.to_owned(),
        }
    }
}

impl ActualValue {
    pub fn render(&self, renderer: &dyn ValueRenderer) -> String {
        match self {
            ActualValue::Value(value) => renderer.render(value),
            ActualValue::MemberMissing => MEMBER_MISSING.to_owned(),
            ActualValue::ElementMissing => ELEMENT_MISSING.to_owned(),
        }
    }
}

/// The result of comparing one template node against the actual graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EqualityOutcome {
    pub path: MemberPath,
    pub expected: ExpectedValue,
    pub actual: ActualValue,
    pub success: bool,
}

impl EqualityOutcome {
    pub(crate) fn new(path: MemberPath, expected: ExpectedValue, actual: ActualValue) -> Self {
        Self {
            path,
            expected,
            actual,
            success: false,
        }
    }

    pub(crate) fn succeeded(mut self, success: bool) -> Self {
        self.success = success;
        self
    }
}

/// The offending leaf of a failed match, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureReport {
    pub path: MemberPath,
    pub expected: ExpectedValue,
    pub actual: ActualValue,
}

/// A [`FailureReport`] with every part rendered to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedFailure {
    pub path: String,
    pub expected: String,
    pub actual: String,
}

impl FailureReport {
    pub fn render(&self, renderer: &dyn ValueRenderer) -> RenderedFailure {
        RenderedFailure {
            path: self.path.to_string(),
            expected: self.expected.render(renderer),
            actual: self.actual.render(renderer),
        }
    }
}

impl From<&EqualityOutcome> for FailureReport {
    fn from(outcome: &EqualityOutcome) -> Self {
        Self {
            path: outcome.path.clone(),
            expected: outcome.expected.clone(),
            actual: outcome.actual.clone(),
        }
    }
}
