//! Structural matching of a [`Shape`] template against an actual value.
//!
//! Traversal is depth-first and pre-order. Each template node appends one
//! [`EqualityOutcome`]; a container appends its own outcome before visiting
//! its children and settles its success flag afterwards. Descent stops at the
//! first failing child, so a failed match always ends in a single offending
//! leaf.

use serde_json::{Number, Value};
use thiserror::Error;

use crate::config::{MatchConfig, SequenceMode};
use crate::outcome::{ActualValue, EqualityOutcome, ExpectedValue, FailureReport};
use crate::path::MemberPath;
use crate::shape::Shape;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("no match has been evaluated yet")]
    NotEvaluated,

    #[error("the last match succeeded, there is no failure to report")]
    NoFailure,
}

/// The outcomes of one match, in traversal order.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    outcomes: Vec<EqualityOutcome>,
}

impl MatchResult {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.success)
    }

    pub fn outcomes(&self) -> &[EqualityOutcome] {
        &self.outcomes
    }

    /// The first failing outcome with no failing outcome beneath it.
    pub fn offending_leaf(&self) -> Option<&EqualityOutcome> {
        let failures: Vec<&EqualityOutcome> =
            self.outcomes.iter().filter(|outcome| !outcome.success).collect();

        failures.iter().copied().find(|candidate| {
            !failures
                .iter()
                .any(|other| candidate.path.is_ancestor_of(&other.path))
        })
    }

    pub fn failure(&self) -> Result<FailureReport, MatchError> {
        self.offending_leaf()
            .map(FailureReport::from)
            .ok_or(MatchError::NoFailure)
    }
}

/// Performs a single match without keeping a matcher around.
pub fn evaluate(expected: &Shape, actual: &Value, config: &MatchConfig) -> MatchResult {
    let mut walker = Walker {
        config,
        outcomes: Vec::new(),
    };
    walker.visit(expected, actual, MemberPath::root());

    MatchResult {
        outcomes: walker.outcomes,
    }
}

/// Holds a template and the outcomes of the most recent match against it.
#[derive(Debug, Clone)]
pub struct StructuralMatcher {
    expected: Shape,
    config: MatchConfig,
    last: Option<MatchResult>,
}

impl StructuralMatcher {
    pub fn new(expected: Shape) -> Self {
        Self::with_config(expected, MatchConfig::default())
    }

    pub fn with_config(expected: Shape, config: MatchConfig) -> Self {
        Self {
            expected,
            config,
            last: None,
        }
    }

    pub fn expected(&self) -> &Shape {
        &self.expected
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Matches `actual` against the template, replacing any outcomes kept
    /// from a previous call.
    pub fn matches(&mut self, actual: &Value) -> bool {
        let result = evaluate(&self.expected, actual, &self.config);
        let success = result.is_success();

        log::debug!(
            "Shape match {} after {} comparisons",
            if success { "succeeded" } else { "failed" },
            result.outcomes.len()
        );

        self.last = Some(result);
        success
    }

    pub fn outcomes(&self) -> &[EqualityOutcome] {
        self.last
            .as_ref()
            .map(MatchResult::outcomes)
            .unwrap_or_default()
    }

    /// Describes the offending leaf of the last failed match.
    pub fn format_failure_message(&self) -> Result<FailureReport, MatchError> {
        self.last
            .as_ref()
            .ok_or(MatchError::NotEvaluated)?
            .failure()
    }
}

struct Walker<'a> {
    config: &'a MatchConfig,
    outcomes: Vec<EqualityOutcome>,
}

impl Walker<'_> {
    fn visit(&mut self, expected: &Shape, actual: &Value, path: MemberPath) -> bool {
        match expected {
            Shape::Scalar(expected) => {
                let success = scalar_eq(expected, actual, self.config.float_epsilon);
                self.push(
                    EqualityOutcome::new(
                        path,
                        ExpectedValue::Value(expected.clone()),
                        ActualValue::Value(actual.clone()),
                    )
                    .succeeded(success),
                )
            }
            Shape::Object(members) => {
                let Value::Object(actual_members) = actual else {
                    return self.push(EqualityOutcome::new(
                        path,
                        ExpectedValue::Value(expected.to_value()),
                        ActualValue::Value(actual.clone()),
                    ));
                };

                let slot = self.open(&path, expected, actual);
                let mut success = true;

                for (name, member) in members {
                    let member_path = path.member(name);
                    success = match actual_members.get(name) {
                        Some(actual_member) => self.visit(member, actual_member, member_path),
                        None => self.push(EqualityOutcome::new(
                            member_path,
                            ExpectedValue::Value(member.to_value()),
                            ActualValue::MemberMissing,
                        )),
                    };

                    if !success {
                        break;
                    }
                }

                self.close(slot, success)
            }
            Shape::Sequence(elements) => {
                let Value::Array(actual_elements) = actual else {
                    return self.push(EqualityOutcome::new(
                        path,
                        ExpectedValue::Value(expected.to_value()),
                        ActualValue::Value(actual.clone()),
                    ));
                };

                let slot = self.open(&path, expected, actual);
                let mut success = true;

                for (index, element) in elements.iter().enumerate() {
                    let element_path = path.index(index);
                    success = match actual_elements.get(index) {
                        Some(actual_element) => self.visit(element, actual_element, element_path),
                        None => self.push(EqualityOutcome::new(
                            element_path,
                            ExpectedValue::Value(element.to_value()),
                            ActualValue::ElementMissing,
                        )),
                    };

                    if !success {
                        break;
                    }
                }

                if success && self.config.sequence_mode == SequenceMode::Exact {
                    if let Some(extra) = actual_elements.get(elements.len()) {
                        success = self.push(EqualityOutcome::new(
                            path.index(elements.len()),
                            ExpectedValue::Nothing,
                            ActualValue::Value(extra.clone()),
                        ));
                    }
                }

                self.close(slot, success)
            }
        }
    }

    /// Appends a container outcome ahead of its children and returns its
    /// position so the result can be filled in once they are visited.
    fn open(&mut self, path: &MemberPath, expected: &Shape, actual: &Value) -> usize {
        self.outcomes.push(EqualityOutcome::new(
            path.clone(),
            ExpectedValue::Value(expected.to_value()),
            ActualValue::Value(actual.clone()),
        ));
        self.outcomes.len() - 1
    }

    fn close(&mut self, slot: usize, success: bool) -> bool {
        self.outcomes[slot].success = success;
        success
    }

    fn push(&mut self, outcome: EqualityOutcome) -> bool {
        let success = outcome.success;
        log::trace!(
            "{} at '{}'",
            if success { "matched" } else { "mismatched" },
            outcome.path
        );
        self.outcomes.push(outcome);
        success
    }
}

fn scalar_eq(expected: &Value, actual: &Value, epsilon: f64) -> bool {
    match (expected, actual) {
        (Value::Number(a), Value::Number(b)) => number_eq(a, b, epsilon),
        (a, b) => a == b,
    }
}

fn number_eq(a: &Number, b: &Number, epsilon: f64) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => fuzzy_eq_f64(a, b, epsilon),
        _ => false,
    }
}

/// Absolute or relative epsilon comparison. `serde_json::Number` is always
/// finite, so NaN never reaches here.
#[inline]
fn fuzzy_eq_f64(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    let diff = (a - b).abs();
    let max_val = a.abs().max(b.abs()).max(1.0);
    diff <= epsilon || diff <= max_val * epsilon
}
