//! Structural shape matching and small helpers for writing tests.
//!
//! The centerpiece is [`StructuralMatcher`]: a sparse [`Shape`] template is
//! matched against an actual value, extra members and trailing elements on
//! the actual side are allowed, and a failed match points at exactly one
//! offending path.
//!
//! ```
//! use libshapecheck::{shape, StructuralMatcher};
//!
//! let mut matcher = StructuralMatcher::new(shape!({ "A": "a", "B": 1 }));
//! assert!(!matcher.matches(&serde_json::json!({ "A": "a" })));
//!
//! let report = matcher.format_failure_message().unwrap();
//! assert_eq!(report.path.to_string(), "B");
//! ```

pub mod cli;
pub mod config;
pub mod constraint;
pub mod dates;
pub mod guid;
pub mod json;
pub mod logging;
pub mod matcher;
pub mod outcome;
pub mod path;
pub mod render;
pub mod shape;

pub use config::{MatchConfig, SequenceMode};
pub use constraint::{ConstraintResult, FailureMessage, ShapeConstraint};
pub use guid::{guid_of, try_guid_of, GuidSequence};
pub use matcher::{evaluate, MatchError, MatchResult, StructuralMatcher};
pub use outcome::{
    ActualValue, EqualityOutcome, ExpectedValue, FailureReport, RenderedFailure, ELEMENT_MISSING,
    MEMBER_MISSING, NOTHING,
};
pub use path::{MemberPath, Segment};
pub use render::{DefaultRenderer, ValueRenderer};
pub use shape::{actual_of, ObjectBuilder, Shape, ShapeError};

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
