//! The expected side of a structural match.
//!
//! A [`Shape`] is a sparse template: only the members and elements it names
//! are checked. It is usually written with the [`shape!`](crate::shape!) macro
//! or the builder returned by [`Shape::object`].

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Number, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A leaf compared by value. Never holds an array or an object.
    Scalar(Value),
    /// Named members, checked in insertion order.
    Object(IndexMap<String, Shape>),
    /// Elements checked by index against the actual sequence.
    Sequence(Vec<Shape>),
}

#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("value could not be serialized into a shape")]
    Serialize(#[from] serde_json::Error),

    #[error("{0} cannot be used in a shape, only finite numbers can")]
    NonFinite(f64),
}

impl Shape {
    pub fn object() -> ObjectBuilder {
        ObjectBuilder::default()
    }

    pub fn sequence<I, S>(elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Shape>,
    {
        Shape::Sequence(elements.into_iter().map(Into::into).collect())
    }

    /// Builds a scalar leaf. Arrays and objects are converted structurally
    /// instead, so the result is only a `Scalar` for non-container values.
    pub fn scalar(value: Value) -> Self {
        Shape::from(value)
    }

    /// Builds a number leaf from a float, rejecting NaN and infinities.
    pub fn float(value: f64) -> Result<Self, ShapeError> {
        Number::from_f64(value)
            .map(|number| Shape::Scalar(Value::Number(number)))
            .ok_or(ShapeError::NonFinite(value))
    }

    /// Builds a shape from any serializable value. Every field the value
    /// serializes becomes part of the template, so `Option` fields that are
    /// `None` will be checked as `null` unless skipped by serde. serde_json
    /// also writes non-finite floats as `null`.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, ShapeError> {
        Ok(Shape::from(serde_json::to_value(value)?))
    }

    /// Converts the template back into a plain JSON value, used when the
    /// whole expected side has to be rendered.
    pub fn to_value(&self) -> Value {
        match self {
            Shape::Scalar(value) => value.clone(),
            Shape::Object(members) => Value::Object(
                members
                    .iter()
                    .map(|(name, shape)| (name.clone(), shape.to_value()))
                    .collect(),
            ),
            Shape::Sequence(elements) => {
                Value::Array(elements.iter().map(Shape::to_value).collect())
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

/// Converts an actual value into the JSON graph the matcher walks.
pub fn actual_of<T: Serialize + ?Sized>(value: &T) -> Result<Value, ShapeError> {
    Ok(serde_json::to_value(value)?)
}

#[derive(Debug, Default)]
pub struct ObjectBuilder {
    members: IndexMap<String, Shape>,
}

impl ObjectBuilder {
    /// Adds a member to the template. Adding the same name twice replaces the
    /// earlier shape but keeps its original position.
    pub fn field(mut self, name: impl Into<String>, shape: impl Into<Shape>) -> Self {
        self.members.insert(name.into(), shape.into());
        self
    }

    pub fn build(self) -> Shape {
        Shape::Object(self.members)
    }
}

impl From<ObjectBuilder> for Shape {
    fn from(builder: ObjectBuilder) -> Self {
        builder.build()
    }
}

impl From<Value> for Shape {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Shape::Object(
                map.into_iter()
                    .map(|(name, value)| (name, Shape::from(value)))
                    .collect(),
            ),
            Value::Array(elements) => {
                Shape::Sequence(elements.into_iter().map(Shape::from).collect())
            }
            other => Shape::Scalar(other),
        }
    }
}

impl<S: Into<Shape>> From<Vec<S>> for Shape {
    fn from(elements: Vec<S>) -> Self {
        Shape::sequence(elements)
    }
}

macro_rules! scalar_from {
    ( $($ty: ty,)* ) => {
        $(
            impl From<$ty> for Shape {
                fn from(value: $ty) -> Self {
                    Shape::Scalar(Value::from(value))
                }
            }
        )*
    };
}

scalar_from! {
    &str,
    String,
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
}

impl TryFrom<f64> for Shape {
    type Error = ShapeError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Shape::float(value)
    }
}

impl TryFrom<f32> for Shape {
    type Error = ShapeError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Shape::float(f64::from(value))
    }
}

/// Builds a [`Shape`] from a JSON literal, using the same grammar as
/// `serde_json::json!`.
///
/// ```
/// use libshapecheck::shape;
///
/// let expected = shape!({ "Name": "name", "Addresses": [{ "State": "state_1" }] });
/// ```
#[macro_export]
macro_rules! shape {
    ($($json: tt)+) => {
        $crate::Shape::from($crate::__private::serde_json::json!($($json)+))
    };
}
