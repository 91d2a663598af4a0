//! Member paths used to locate a comparison inside a shape.
//!
//! A path is stored as structural segments rather than as a string, so that
//! ancestry checks never depend on how member names happen to be spelled.
//! `Name` is not an ancestor of `NameSuffix`, even though one string is a
//! prefix of the other.

use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Member(String),
    Index(usize),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct MemberPath {
    segments: Vec<Segment>,
}

impl MemberPath {
    /// The path of the value being matched itself.
    pub fn root() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns a new path with `name` appended as a member access.
    pub fn member(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Member(name.to_owned()));
        Self { segments }
    }

    /// Returns a new path with `index` appended as an element access.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    /// True when `other` lies strictly below this path.
    pub fn is_ancestor_of(&self, other: &MemberPath) -> bool {
        other.segments.len() > self.segments.len() && other.segments.starts_with(&self.segments)
    }
}

impl fmt::Display for MemberPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Member(name) if i == 0 => write!(f, "{name}")?,
                Segment::Member(name) => write!(f, ".{name}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl Serialize for MemberPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
